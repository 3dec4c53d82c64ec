//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors raised by client-local key-value storage adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Writing the value would exceed the storage quota.
    #[error("Storage quota exceeded: {required} bytes needed, {quota} allowed")]
    QuotaExceeded { required: usize, quota: usize },

    /// The backing medium failed.
    #[error("Storage I/O error: {message}")]
    Io { message: String },

    /// The backing file could not be encoded or decoded.
    #[error("Storage serialization error: {0}")]
    Serialization(String),
}

/// Errors from parsing a decimal money string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    /// No digits at all.
    #[error("Amount is empty")]
    Empty,

    /// A character other than ASCII digits and a single '.'.
    #[error("Invalid amount: {0}")]
    InvalidDigit(String),

    /// More than two fractional digits.
    #[error("Amount has more than two decimal places: {0}")]
    TooManyDecimals(String),

    /// Does not fit in minor units.
    #[error("Amount too large: {0}")]
    Overflow(String),
}
