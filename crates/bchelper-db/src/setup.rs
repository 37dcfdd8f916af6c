//! Connection establishment.
//!
//! Each caller gets a dedicated connection for the duration of one
//! operation. The connection string comes from `BLACKCANDY_DB` (see
//! `bchelper_core::settings`).

use bchelper_core::StoreError;
use sqlx::{Connection, PgConnection};

/// Open a dedicated connection to the BlackCandy database.
///
/// # Errors
///
/// Returns [`StoreError::Connect`] with the raw driver message if the
/// server is unreachable or the credentials are rejected.
pub async fn connect(database_url: &str) -> Result<PgConnection, StoreError> {
    PgConnection::connect(database_url)
        .await
        .map_err(|e| StoreError::Connect(e.to_string()))
}
