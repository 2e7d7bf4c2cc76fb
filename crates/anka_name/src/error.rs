//! Error types for name and birth-date calculations.

use anka_core::CoreError;
use thiserror::Error;

/// Errors from name normalization and factor calculation.
///
/// `EmptyName` and `InvalidDate` are input-validation failures; `Core` wraps
/// configuration errors from the primitive tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NameError {
    /// The name contained no letters after normalization.
    #[error("name is empty after normalization")]
    EmptyName,
    /// The birth or reference date could not be interpreted.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Configuration error from the core tables.
    #[error(transparent)]
    Core(#[from] CoreError),
}
