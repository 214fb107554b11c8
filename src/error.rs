use crate::{field::FieldKind, operation::Operation, FieldValue};
use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum CronError {
    /// Expression doesn't consist of exactly five whitespace-separated fields.
    #[error("cron expression must contain 5 fields, got {count}: '{expression}'")]
    WrongFieldCount {
        /// Expression as it was provided.
        expression: String,
        /// Number of fields found.
        count: usize,
    },
    /// Field text matches none of the known patterns.
    #[error("invalid field: '{0}'")]
    InvalidField(String),
    /// Field matches a pattern, but its value can't be parsed into numbers.
    #[error("malformed {operation} value of {kind} field: '{value}'")]
    MalformedField {
        /// Kind of the offending field.
        kind: FieldKind,
        /// Detected pattern of the field.
        operation: Operation,
        /// Offending text.
        value: String,
    },
    /// Parsed value lies outside the field's bounds.
    #[error("{operation} value of {kind} field is out of range {min}-{max}: '{value}'")]
    OutOfRange {
        /// Kind of the offending field.
        kind: FieldKind,
        /// Detected pattern of the field.
        operation: Operation,
        /// Offending text.
        value: String,
        /// Minimum allowed value.
        min: FieldValue,
        /// Maximum allowed value.
        max: FieldValue,
    },
    /// Range start is greater than its end.
    #[error("range start of {kind} field is greater than its end: '{value}'")]
    OrderViolation {
        /// Kind of the offending field.
        kind: FieldKind,
        /// Offending range text.
        value: String,
    },
}
