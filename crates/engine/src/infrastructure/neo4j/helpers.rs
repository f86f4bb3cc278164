//! Neo4j deserialization and transaction helpers.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed microsecond
//! precision and a `Z` suffix, so `ORDER BY` on the string matches
//! chronological order.

use chrono::{DateTime, SecondsFormat, Utc};
use neo4rs::{Node, Txn};

use crate::infrastructure::ports::RepoError;

/// Format a timestamp for storage.
pub(super) fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Commit on success, roll back on failure.
///
/// A failed rollback is logged; the original error is still returned.
pub(super) async fn finish_txn<T>(
    txn: Txn,
    result: Result<T, RepoError>,
    operation: &'static str,
) -> Result<T, RepoError> {
    match result {
        Ok(value) => {
            txn.commit()
                .await
                .map_err(|e| RepoError::database(operation, e))?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(
                    operation,
                    error = %rollback_err,
                    "Transaction rollback failed"
                );
            }
            Err(err)
        }
    }
}

/// Extension trait for Neo4j Node to simplify common deserialization patterns.
pub(super) trait NodeExt {
    /// Get a required string field (fail-fast).
    fn get_string_strict(&self, field: &str) -> Result<String, RepoError>;

    /// Get an optional string field, returning None if empty or missing.
    fn get_optional_string(&self, field: &str) -> Option<String>;

    /// Get a required datetime field (fail-fast).
    fn get_datetime_strict(&self, field: &str) -> Result<DateTime<Utc>, RepoError>;

    /// Get and deserialize a required JSON field (fail-fast).
    fn get_json_strict<T: serde::de::DeserializeOwned>(&self, field: &str) -> Result<T, RepoError>;

    fn get_bool_or(&self, field: &str, default: bool) -> bool;

    fn get_i64_or(&self, field: &str, default: i64) -> i64;
}

impl NodeExt for Node {
    fn get_string_strict(&self, field: &str) -> Result<String, RepoError> {
        self.get(field).map_err(|e| {
            RepoError::database(
                "query",
                format!("Missing required field '{}': {}", field, e),
            )
        })
    }

    fn get_optional_string(&self, field: &str) -> Option<String> {
        self.get::<String>(field).ok().filter(|s| !s.is_empty())
    }

    fn get_datetime_strict(&self, field: &str) -> Result<DateTime<Utc>, RepoError> {
        let s = self.get_string_strict(field)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                RepoError::database(
                    "parse",
                    format!(
                        "Invalid datetime in field '{}': {} (value: '{}')",
                        field, e, s
                    ),
                )
            })
    }

    fn get_json_strict<T: serde::de::DeserializeOwned>(&self, field: &str) -> Result<T, RepoError> {
        let s = self.get_string_strict(field)?;
        serde_json::from_str(&s).map_err(|e| {
            RepoError::serialization(format!(
                "Invalid JSON in field '{}': {} (value: '{}')",
                field, e, s
            ))
        })
    }

    fn get_bool_or(&self, field: &str, default: bool) -> bool {
        self.get(field).unwrap_or(default)
    }

    fn get_i64_or(&self, field: &str, default: i64) -> i64 {
        self.get(field).unwrap_or(default)
    }
}
