//! Error types for phone numerology.

use thiserror::Error;

/// Errors from phone numerology computation.
///
/// `Invalid` is an input-validation failure raised when a calculation is
/// asked to proceed on a number the sanitizer rejected. The unknown-name
/// variants are configuration errors. Sanitization itself never returns
/// these; invalidity there is data, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PhoneError {
    /// The number failed sanitization; the reason is the sanitizer's.
    #[error("invalid phone number: {reason}")]
    Invalid { reason: String },
    /// The core-method name did not match any supported method.
    #[error("unknown core method: {0:?}")]
    UnknownMethod(String),
    /// The digit-scope name did not match any supported scope.
    #[error("unknown digit scope: {0:?}")]
    UnknownScope(String),
}
