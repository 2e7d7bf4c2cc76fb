//! Error types for compatibility analysis.

use anka_name::NameError;
use thiserror::Error;

/// Errors from compatibility orchestration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MilanError {
    /// Error from name/birth calculation for either party.
    #[error(transparent)]
    Name(#[from] NameError),
    /// The relationship-type name did not match any supported type.
    #[error("unknown relationship type: {0:?}")]
    UnknownRelationship(String),
}
