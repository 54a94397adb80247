use crate::{DbError, Result};

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub(crate) fn uuid_column(row: &SqliteRow, table: &'static str, column: &str) -> Result<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).map_err(|e| {
        DbError::invalid_row(table, format!("Invalid UUID in {}.{}: {}", table, column, e))
    })
}

pub(crate) fn timestamp_column(
    row: &SqliteRow,
    table: &'static str,
    column: &str,
) -> Result<DateTime<Utc>> {
    let seconds: i64 = row.try_get(column)?;
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
        DbError::invalid_row(
            table,
            format!("Invalid timestamp in {}.{}: {}", table, column, seconds),
        )
    })
}
