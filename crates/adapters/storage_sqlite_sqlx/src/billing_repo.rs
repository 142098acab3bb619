//! `SQLite` implementation of [`BillingRepository`].

use std::future::Future;

use sqlx::SqlitePool;

use fleetbill_app::ports::BillingRepository;
use fleetbill_domain::calculation::CalculationType;
use fleetbill_domain::error::FleetBillError;
use fleetbill_domain::id::DeviceId;
use fleetbill_domain::period::YearMonth;

use crate::error::StorageError;

// Decimal columns hold whole amounts as INTEGER; cast so every row decodes as f64.
const SUM_TOTAL_CHARGES: &str = "SELECT CAST(SUM(total_charges) AS REAL) AS total_cost \
     FROM billing_summary WHERE yearmonth = ? AND calculationtype = ?";
const SELECT_DEVICE_CHARGES: &str = "SELECT CAST(total_charges AS REAL) AS total_charges \
     FROM billing_summary WHERE yearmonth = ? AND calculationtype = ? AND device_id = ? LIMIT 1";

/// `SQLite`-backed billing summary reader.
pub struct SqliteBillingRepository {
    pool: SqlitePool,
}

impl SqliteBillingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl BillingRepository for SqliteBillingRepository {
    fn sum_total_charges(
        &self,
        month: YearMonth,
        calculation: CalculationType,
    ) -> impl Future<Output = Result<Option<f64>, FleetBillError>> + Send {
        let pool = self.pool.clone();
        async move {
            // SUM over an empty set yields a single NULL row
            let (total,): (Option<f64>,) = sqlx::query_as(SUM_TOTAL_CHARGES)
                .bind(month.to_string())
                .bind(calculation.as_str())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(total)
        }
    }

    fn find_device_charges(
        &self,
        device_id: DeviceId,
        month: YearMonth,
        calculation: CalculationType,
    ) -> impl Future<Output = Result<Option<f64>, FleetBillError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<(f64,)> = sqlx::query_as(SELECT_DEVICE_CHARGES)
                .bind(month.to_string())
                .bind(calculation.as_str())
                .bind(device_id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|(charges,)| charges))
        }
    }
}
