//! Number matching: compatibility analysis and Raj Yog detection.
//!
//! This crate provides:
//! - The relationship compatibility analyzer: weighted per-factor scoring
//!   of two full number sets against an affinity rule table
//! - The Raj Yog pattern detector: ordered-pair matching of (life path,
//!   destiny) against the named-combination table, with master-number
//!   override and soul-urge/personality boosts
//!
//! Both sit on top of the name/birth calculators and share their pure,
//! table-driven character.

pub mod compat;
pub mod error;
pub mod yoga;

pub use compat::{
    ALL_RELATIONSHIP_TYPES, Affinity, CompatibilityAnalyzer, CompatibilityResult, RelationshipType,
};
pub use error::MilanError;
pub use yoga::{
    ContributingNumbers, DetectedCombination, RajYogResult, YogType, detect_raj_yog,
};
