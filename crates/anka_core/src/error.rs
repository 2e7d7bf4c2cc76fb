//! Error types for core numerology primitives.

use thiserror::Error;

/// Errors from core table lookups and system selection.
///
/// These are configuration errors: an unknown enum name reached the engine,
/// which indicates a caller bug rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The letter-system name did not match any supported system.
    #[error("unknown letter system: {0:?}")]
    UnknownSystem(String),
}
