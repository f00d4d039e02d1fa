//! Decode helpers for the TEXT/INTEGER column conventions used by every
//! table: UUIDs stored as TEXT, timestamps as Unix seconds.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

#[track_caller]
pub fn uuid_col(row: &SqliteRow, column: &str) -> DbErrorResult<Uuid> {
    let location = ErrorLocation::from(Location::caller());
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).map_err(|e| DbError::Decode {
        column: column.to_string(),
        message: format!("invalid UUID: {e}"),
        location,
    })
}

#[track_caller]
pub fn opt_uuid_col(row: &SqliteRow, column: &str) -> DbErrorResult<Option<Uuid>> {
    let location = ErrorLocation::from(Location::caller());
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|s| {
        Uuid::parse_str(&s).map_err(|e| DbError::Decode {
            column: column.to_string(),
            message: format!("invalid UUID: {e}"),
            location,
        })
    })
    .transpose()
}

#[track_caller]
pub fn ts_col(row: &SqliteRow, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let location = ErrorLocation::from(Location::caller());
    let secs: i64 = row.try_get(column)?;
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Decode {
        column: column.to_string(),
        message: format!("invalid timestamp: {secs}"),
        location,
    })
}

#[track_caller]
pub fn opt_ts_col(row: &SqliteRow, column: &str) -> DbErrorResult<Option<DateTime<Utc>>> {
    let location = ErrorLocation::from(Location::caller());
    let secs: Option<i64> = row.try_get(column)?;
    secs.map(|s| {
        DateTime::from_timestamp(s, 0).ok_or_else(|| DbError::Decode {
            column: column.to_string(),
            message: format!("invalid timestamp: {s}"),
            location,
        })
    })
    .transpose()
}

/// Decode a TEXT column through the model's `FromStr` (status, role, ...).
#[track_caller]
pub fn parsed_col<T>(row: &SqliteRow, column: &str) -> DbErrorResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let location = ErrorLocation::from(Location::caller());
    let raw: String = row.try_get(column)?;
    T::from_str(&raw).map_err(|e| DbError::Decode {
        column: column.to_string(),
        message: e.to_string(),
        location,
    })
}
