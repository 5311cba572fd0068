//! Row decoding helpers shared by the PostgreSQL stores.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Decode, Postgres, Row, Type};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

/// Reads one column, wrapping decode failures as `DatabaseError`.
pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

pub(super) fn timestamp(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    let dt: DateTime<Utc> = column(row, name)?;
    Ok(Timestamp::from_datetime(dt))
}

/// Parses a stored enum or id, reporting corrupt data as `DatabaseError`.
pub(super) fn parse<T, E>(name: &str, raw: &str, f: impl FnOnce(&str) -> Result<T, E>) -> Result<T, DomainError>
where
    E: std::fmt::Display,
{
    f(raw).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid {} '{}': {}", name, raw, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::SessionTime;

    #[test]
    fn parse_reports_corrupt_values_as_database_errors() {
        let err = parse("time", "25:99", |s| s.parse::<SessionTime>()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.contains("25:99"));
    }

    #[test]
    fn parse_passes_valid_values_through() {
        let time = parse("time", "06:45", |s| s.parse::<SessionTime>()).unwrap();
        assert_eq!(time.to_string(), "06:45");
    }
}
