//! `SQLite` implementation of [`ConsumptionRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use fleetbill_app::ports::ConsumptionRepository;
use fleetbill_domain::calculation::CalculationType;
use fleetbill_domain::error::FleetBillError;
use fleetbill_domain::id::DeviceId;
use fleetbill_domain::period::YearMonth;
use fleetbill_domain::utilization::{ConsumedUsage, DeviceCapacity};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`ConsumedUsage`].
struct ConsumedRow(ConsumedUsage);

impl<'r> FromRow<'r, SqliteRow> for ConsumedRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(ConsumedUsage {
            consumed_gib: row.try_get("consumed_gib")?,
        }))
    }
}

/// Wrapper for converting database rows into domain [`DeviceCapacity`].
struct CapacityRow(DeviceCapacity);

impl<'r> FromRow<'r, SqliteRow> for CapacityRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(DeviceCapacity {
            capacity: row.try_get("device_capacity")?,
            ports_used: row.try_get("ports_used")?,
        }))
    }
}

// Decimal columns hold whole amounts as INTEGER; cast so they decode as f64.
const SELECT_CONSUMED: &str = "SELECT CAST(consumed_gib AS REAL) AS consumed_gib \
     FROM device_consumption \
     WHERE device_id = ? AND yearmonth = ? AND calculationtype = ? LIMIT 1";
const SELECT_CAPACITY: &str = "SELECT CAST(device_capacity AS REAL) AS device_capacity, \
     CAST(ports_used AS INTEGER) AS ports_used FROM device_consumption \
     WHERE device_id = ? AND yearmonth = ? AND calculationtype = ? LIMIT 1";

/// `SQLite`-backed device consumption reader.
pub struct SqliteConsumptionRepository {
    pool: SqlitePool,
}

impl SqliteConsumptionRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ConsumptionRepository for SqliteConsumptionRepository {
    fn find_consumed(
        &self,
        device_id: DeviceId,
        month: YearMonth,
        calculation: CalculationType,
    ) -> impl Future<Output = Result<Option<ConsumedUsage>, FleetBillError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<ConsumedRow> = sqlx::query_as(SELECT_CONSUMED)
                .bind(device_id.as_i64())
                .bind(month.to_string())
                .bind(calculation.as_str())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|r| r.0))
        }
    }

    fn find_capacity(
        &self,
        device_id: DeviceId,
        month: YearMonth,
        calculation: CalculationType,
    ) -> impl Future<Output = Result<Option<DeviceCapacity>, FleetBillError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<CapacityRow> = sqlx::query_as(SELECT_CAPACITY)
                .bind(device_id.as_i64())
                .bind(month.to_string())
                .bind(calculation.as_str())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|r| r.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    const INSERT: &str = "INSERT INTO device_consumption (device_id, yearmonth, calculationtype, consumed_gib, device_capacity, ports_used) VALUES (?, ?, ?, ?, ?, ?)";

    async fn setup() -> SqliteConsumptionRepository {
        let db = Config::in_memory().build().await.unwrap();
        let pool = db.pool().clone();
        for (device, month, calculation, consumed, capacity, ports) in [
            (3_i64, "2024-01", "Group", Some(50.0), Some(200.0), None),
            (3, "2024-01", "Individual", Some(5.0), Some(20.0), None),
            (5, "2024-01", "Group", None, Some(48.0), Some(30_i64)),
            (9, "2024-01", "Group", Some(1.0), None, None),
        ] {
            sqlx::query(INSERT)
                .bind(device)
                .bind(month)
                .bind(calculation)
                .bind(consumed)
                .bind(capacity)
                .bind(ports)
                .execute(&pool)
                .await
                .unwrap();
        }
        SqliteConsumptionRepository::new(pool)
    }

    fn january() -> YearMonth {
        "2024-01".parse().unwrap()
    }

    #[tokio::test]
    async fn should_find_consumed_usage_for_calculation_type() {
        let repo = setup().await;
        let group = repo
            .find_consumed(DeviceId::new(3), january(), CalculationType::Group)
            .await
            .unwrap();
        assert_eq!(group.map(|u| u.consumed_gib), Some(Some(50.0)));

        let individual = repo
            .find_consumed(DeviceId::new(3), january(), CalculationType::Individual)
            .await
            .unwrap();
        assert_eq!(individual.map(|u| u.consumed_gib), Some(Some(5.0)));
    }

    #[tokio::test]
    async fn should_find_capacity_and_ports() {
        let repo = setup().await;
        let capacity = repo
            .find_capacity(DeviceId::new(5), january(), CalculationType::Group)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(capacity.capacity, Some(48.0));
        assert_eq!(capacity.ports_used, Some(30));
    }

    #[tokio::test]
    async fn should_keep_null_columns_as_none() {
        let repo = setup().await;
        let capacity = repo
            .find_capacity(DeviceId::new(9), january(), CalculationType::Group)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(capacity, DeviceCapacity::default());

        let consumed = repo
            .find_consumed(DeviceId::new(5), january(), CalculationType::Group)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(consumed.consumed_gib, None);
    }

    #[tokio::test]
    async fn should_decode_whole_amounts_from_decimal_columns() {
        let db = Config {
            migrate: false,
            ..Config::in_memory()
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();
        sqlx::query(
            "CREATE TABLE device_consumption (Device_ID INT, yearmonth VARCHAR(7), \
             calculationtype VARCHAR(16), Consumed_GiB DECIMAL(10,2), \
             Device_Capacity DECIMAL(10,2), Ports_Used INT)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO device_consumption VALUES (3, '2024-01', 'Group', 50, 200.00, 12)")
            .execute(&pool)
            .await
            .unwrap();
        let repo = SqliteConsumptionRepository::new(pool);

        let consumed = repo
            .find_consumed(DeviceId::new(3), january(), CalculationType::Group)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(consumed.consumed_gib, Some(50.0));

        let capacity = repo
            .find_capacity(DeviceId::new(3), january(), CalculationType::Group)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(capacity.capacity, Some(200.0));
        assert_eq!(capacity.ports_used, Some(12));
    }

    #[tokio::test]
    async fn should_return_none_when_device_has_no_row() {
        let repo = setup().await;
        let consumed = repo
            .find_consumed(DeviceId::new(6), january(), CalculationType::Group)
            .await
            .unwrap();
        assert!(consumed.is_none());

        let capacity = repo
            .find_capacity(DeviceId::new(3), "2024-02".parse().unwrap(), CalculationType::Group)
            .await
            .unwrap();
        assert!(capacity.is_none());
    }
}
