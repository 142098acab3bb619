//! Storage-specific error type wrapping sqlx errors.

use fleetbill_domain::error::FleetBillError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    ///
    /// Displays the driver's own message when the database reported the error.
    #[error("{}", driver_message(.0))]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

fn driver_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db) => db.message().to_string(),
        other => other.to_string(),
    }
}

impl From<StorageError> for FleetBillError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
