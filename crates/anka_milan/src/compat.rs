//! Relationship compatibility analysis.
//!
//! Scores two full number sets against each other. Every factor pair is
//! looked up in the unordered affinity table; a relationship-type weight
//! row decides how much each factor contributes. Master numbers fold to
//! their reduced digit for table lookup so the 9x9 table stays closed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use anka_core::{LetterSystem, reduce_value};
use anka_name::{ALL_FACTORS, CoreNumbers, NumerologyCalculator};

use crate::error::MilanError;

// ---------------------------------------------------------------------------
// Affinity rule table
// ---------------------------------------------------------------------------

/// Qualitative relationship between two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affinity {
    Harmonious,
    Complementary,
    Neutral,
    Challenging,
}

impl Affinity {
    /// Contribution of this affinity to a fully-weighted factor, 0-100.
    pub const fn points(self) -> f64 {
        match self {
            Self::Harmonious => 100.0,
            Self::Complementary => 75.0,
            Self::Neutral => 50.0,
            Self::Challenging => 25.0,
        }
    }

    /// Short phrase used in strengths/challenges text.
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Harmonious => "flow together naturally",
            Self::Complementary => "balance each other",
            Self::Neutral => "coexist without friction",
            Self::Challenging => "pull in different directions",
        }
    }
}

/// Unordered affinity of two reduced numbers (1-9).
///
/// The table is canonical on (min, max); anything outside 1-9 reads as
/// neutral.
pub const fn number_affinity(a: u64, b: u64) -> Affinity {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    use Affinity::*;
    match (lo, hi) {
        (1, 1) => Complementary,
        (1, 2) => Challenging,
        (1, 3) => Harmonious,
        (1, 4) => Neutral,
        (1, 5) => Harmonious,
        (1, 6) => Neutral,
        (1, 7) => Complementary,
        (1, 8) => Challenging,
        (1, 9) => Harmonious,
        (2, 2) => Harmonious,
        (2, 3) => Complementary,
        (2, 4) => Harmonious,
        (2, 5) => Challenging,
        (2, 6) => Harmonious,
        (2, 7) => Neutral,
        (2, 8) => Harmonious,
        (2, 9) => Complementary,
        (3, 3) => Complementary,
        (3, 4) => Challenging,
        (3, 5) => Harmonious,
        (3, 6) => Harmonious,
        (3, 7) => Challenging,
        (3, 8) => Neutral,
        (3, 9) => Harmonious,
        (4, 4) => Harmonious,
        (4, 5) => Challenging,
        (4, 6) => Complementary,
        (4, 7) => Harmonious,
        (4, 8) => Harmonious,
        (4, 9) => Neutral,
        (5, 5) => Complementary,
        (5, 6) => Challenging,
        (5, 7) => Harmonious,
        (5, 8) => Neutral,
        (5, 9) => Harmonious,
        (6, 6) => Harmonious,
        (6, 7) => Challenging,
        (6, 8) => Complementary,
        (6, 9) => Harmonious,
        (7, 7) => Harmonious,
        (7, 8) => Neutral,
        (7, 9) => Complementary,
        (8, 8) => Complementary,
        (8, 9) => Challenging,
        (9, 9) => Harmonious,
        _ => Neutral,
    }
}

// ---------------------------------------------------------------------------
// Relationship types and weight rows
// ---------------------------------------------------------------------------

/// Supported relationship flavors, each with its own weight row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipType {
    Romantic,
    Business,
    Friendship,
    Family,
}

/// All relationship types in order.
pub const ALL_RELATIONSHIP_TYPES: [RelationshipType; 4] = [
    RelationshipType::Romantic,
    RelationshipType::Business,
    RelationshipType::Friendship,
    RelationshipType::Family,
];

/// Per-factor weights in `ALL_FACTORS` order; each row sums to 1.
const ROMANTIC_WEIGHTS: [f64; 9] = [0.20, 0.15, 0.20, 0.15, 0.10, 0.05, 0.05, 0.05, 0.05];
const BUSINESS_WEIGHTS: [f64; 9] = [0.15, 0.25, 0.05, 0.20, 0.10, 0.10, 0.10, 0.03, 0.02];
const FRIENDSHIP_WEIGHTS: [f64; 9] = [0.15, 0.10, 0.20, 0.15, 0.20, 0.05, 0.05, 0.05, 0.05];
const FAMILY_WEIGHTS: [f64; 9] = [0.15, 0.10, 0.10, 0.10, 0.10, 0.15, 0.20, 0.05, 0.05];

impl RelationshipType {
    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Romantic => "romantic",
            Self::Business => "business",
            Self::Friendship => "friendship",
            Self::Family => "family",
        }
    }

    /// 0-based index in `ALL_RELATIONSHIP_TYPES` order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Romantic => 0,
            Self::Business => 1,
            Self::Friendship => 2,
            Self::Family => 3,
        }
    }

    /// Parse a relationship-type name, case-insensitively. Unknown names
    /// are configuration errors.
    pub fn from_name(name: &str) -> Result<Self, MilanError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "romantic" | "romance" => Ok(Self::Romantic),
            "business" | "work" => Ok(Self::Business),
            "friendship" | "friend" => Ok(Self::Friendship),
            "family" => Ok(Self::Family),
            _ => Err(MilanError::UnknownRelationship(name.to_string())),
        }
    }

    /// Weight row over the nine factors, in `ALL_FACTORS` order.
    pub const fn weights(self) -> &'static [f64; 9] {
        match self {
            Self::Romantic => &ROMANTIC_WEIGHTS,
            Self::Business => &BUSINESS_WEIGHTS,
            Self::Friendship => &FRIENDSHIP_WEIGHTS,
            Self::Family => &FAMILY_WEIGHTS,
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

/// Final output of a compatibility analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// 0-100 weighted score.
    pub score: u8,
    /// Descriptions of harmonious and complementary factor pairings.
    pub strengths: Vec<String>,
    /// Descriptions of challenging factor pairings.
    pub challenges: Vec<String>,
    /// Synthesized free-text advice.
    pub advice: String,
}

/// Analyzer for one relationship flavor.
///
/// Holds only configuration and constant tables; safe to share and reuse
/// across calls and threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityAnalyzer {
    relationship: RelationshipType,
    system: LetterSystem,
}

impl CompatibilityAnalyzer {
    /// Analyzer using the Pythagorean letter system.
    pub const fn new(relationship: RelationshipType) -> Self {
        Self {
            relationship,
            system: LetterSystem::Pythagorean,
        }
    }

    /// Override the letter system used for name factors.
    pub const fn with_system(mut self, system: LetterSystem) -> Self {
        self.system = system;
        self
    }

    /// The configured relationship type.
    pub const fn relationship(&self) -> RelationshipType {
        self.relationship
    }

    /// Weighted score plus qualitative strengths and challenges.
    ///
    /// Neutral pairings contribute to the score but produce no text.
    /// The score is clamped to 0-100 regardless of weight drift.
    pub fn calculate_compatibility_score(
        &self,
        user: &CoreNumbers,
        partner: &CoreNumbers,
    ) -> (u8, Vec<String>, Vec<String>) {
        let weights = self.relationship.weights();
        let mut score = 0.0;
        let mut strengths = Vec::new();
        let mut challenges = Vec::new();

        for factor in ALL_FACTORS {
            let weight = weights[factor.index() as usize];
            let u = reduce_value(user.get(factor), false);
            let p = reduce_value(partner.get(factor), false);
            let affinity = number_affinity(u, p);
            score += weight * affinity.points();

            let text = format!("{}: {} and {} {}", factor.name(), u, p, affinity.phrase());
            match affinity {
                Affinity::Harmonious | Affinity::Complementary => strengths.push(text),
                Affinity::Challenging => challenges.push(text),
                Affinity::Neutral => {}
            }
        }

        let score = score.round().clamp(0.0, 100.0) as u8;
        (score, strengths, challenges)
    }

    /// Synthesize advice text from the score and the qualitative signals.
    pub fn generate_compatibility_advice(
        &self,
        user: &CoreNumbers,
        partner: &CoreNumbers,
        score: u8,
        strengths: &[String],
        challenges: &[String],
    ) -> String {
        let flavor = self.relationship.name();
        let mut advice = match score {
            80..=100 => format!("An exceptionally aligned {flavor} pairing."),
            60..=79 => format!("A well-matched {flavor} pairing with room to grow."),
            40..=59 => format!("A workable {flavor} pairing that asks for steady attention."),
            _ => format!("A demanding {flavor} pairing; progress comes through patience."),
        };
        advice.push_str(&format!(
            " Life paths {} and {} set the underlying tone.",
            user.life_path, partner.life_path
        ));
        if let Some(first) = strengths.first() {
            advice.push_str(&format!(" Lean on the strongest bond ({first})."));
        }
        if let Some(first) = challenges.first() {
            advice.push_str(&format!(" Stay mindful where {first}."));
        }
        advice
    }

    /// Full orchestration: compute both number sets, then score and advise.
    ///
    /// `reference` feeds the personal-year and personal-month factors for
    /// both parties.
    pub fn analyze_compatibility(
        &self,
        user_full_name: &str,
        user_birth_date: NaiveDate,
        partner_full_name: &str,
        partner_birth_date: NaiveDate,
        reference: NaiveDate,
    ) -> Result<CompatibilityResult, MilanError> {
        let calculator = NumerologyCalculator::new(self.system);
        let user = calculator.calculate_all(user_full_name, user_birth_date, reference)?;
        let partner = calculator.calculate_all(partner_full_name, partner_birth_date, reference)?;

        let (score, strengths, challenges) = self.calculate_compatibility_score(&user, &partner);
        let advice =
            self.generate_compatibility_advice(&user, &partner, score, &strengths, &challenges);
        tracing::debug!(
            relationship = %self.relationship,
            score,
            strengths = strengths.len(),
            challenges = challenges.len(),
            "compatibility analysis"
        );
        Ok(CompatibilityResult {
            score,
            strengths,
            challenges,
            advice,
        })
    }
}
