//! Raj Yog pattern detection.
//!
//! Matches the ordered (life path, destiny) pair against the named
//! combination table. Direction matters: (1, 8) is the leadership yog while
//! (8, 1) is the material yog. A master number in either position overrides
//! the pair table entirely. Soul-urge and personality alignment boost the
//! strength of whatever was detected.
//!
//! Combinations and strengths follow common Ank Jyotish (Vedic numerology)
//! convention.

use anka_core::is_master;
use serde::{Deserialize, Serialize};

/// Classification of a detected (or absent) Raj Yog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YogType {
    /// No combination matched.
    None,
    /// A master number (11, 22, 33) in life path or destiny.
    Master,
    Leadership,
    Material,
    Creative,
    Service,
    Spiritual,
    /// Weaker named patterns (harmony, completion).
    Other,
}

impl YogType {
    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Master => "master",
            Self::Leadership => "leadership",
            Self::Material => "material",
            Self::Creative => "creative",
            Self::Service => "service",
            Self::Spiritual => "spiritual",
            Self::Other => "other",
        }
    }
}

/// One entry of the ordered combination table.
struct YogCombination {
    life_path: u64,
    destiny: u64,
    yog_type: YogType,
    name: &'static str,
    strength: u8,
    description: &'static str,
}

/// Named (life path, destiny) combinations. Ordered pairs: (1, 8) and
/// (8, 1) are different yogas.
const RAJ_YOG_COMBINATIONS: &[YogCombination] = &[
    YogCombination {
        life_path: 1,
        destiny: 8,
        yog_type: YogType::Leadership,
        name: "Leadership Raj Yog",
        strength: 85,
        description: "Life path 1 driving destiny 8: authority earned through initiative",
    },
    YogCombination {
        life_path: 8,
        destiny: 1,
        yog_type: YogType::Material,
        name: "Material Raj Yog",
        strength: 80,
        description: "Life path 8 expressed through destiny 1: wealth built by independent action",
    },
    YogCombination {
        life_path: 3,
        destiny: 6,
        yog_type: YogType::Creative,
        name: "Creative Raj Yog",
        strength: 80,
        description: "Life path 3 flowing into destiny 6: creation in service of harmony",
    },
    YogCombination {
        life_path: 6,
        destiny: 3,
        yog_type: YogType::Service,
        name: "Service Raj Yog",
        strength: 78,
        description: "Life path 6 expressed through destiny 3: care voiced with joy",
    },
    YogCombination {
        life_path: 7,
        destiny: 9,
        yog_type: YogType::Spiritual,
        name: "Spiritual Raj Yog",
        strength: 82,
        description: "Life path 7 completing in destiny 9: inner search turned universal",
    },
    YogCombination {
        life_path: 2,
        destiny: 7,
        yog_type: YogType::Other,
        name: "Harmony Raj Yog",
        strength: 75,
        description: "Life path 2 with destiny 7: partnership deepened by reflection",
    },
];

/// Strength of the sum-to-9 completion fallback.
const COMPLETION_STRENGTH: u8 = 60;

/// Baseline strength reported when nothing matches.
const NO_MATCH_STRENGTH: u8 = 25;

/// Strength of the master override, single and double.
const MASTER_STRENGTH: u8 = 85;
const DOUBLE_MASTER_STRENGTH: u8 = 90;

/// Boost per aligned supporting number.
const ALIGNMENT_BOOST: u8 = 5;

/// The inputs the detector saw, echoed back in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributingNumbers {
    pub life_path: u64,
    pub destiny: u64,
    pub soul_urge: Option<u64>,
    pub personality: Option<u64>,
}

/// One matched combination with its rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedCombination {
    /// Classification of this combination.
    pub yog_type: YogType,
    /// Human-readable name.
    pub name: String,
    /// The (life path, destiny) pair that matched.
    pub numbers: [u64; 2],
    /// Rationale for the match.
    pub description: String,
}

/// Full output of Raj Yog detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RajYogResult {
    /// Whether any combination matched.
    pub is_detected: bool,
    /// Strongest classification; `None` when nothing matched.
    pub yog_type: YogType,
    /// Name of the strongest combination, when detected.
    pub yog_name: Option<String>,
    /// 0-100.
    pub strength_score: u8,
    /// Echo of the supplied inputs.
    pub contributing_numbers: ContributingNumbers,
    /// Every matched combination; non-empty exactly when detected.
    pub detected_combinations: Vec<DetectedCombination>,
}

/// Detect Raj Yog patterns in an ordered (life path, destiny) pair.
///
/// Master numbers override the pair table. The optional soul urge and
/// personality boost the strength when they align with life path and
/// destiny respectively; the boosted score never drops below the unboosted
/// one and stays within 0-100.
pub fn detect_raj_yog(
    life_path: u64,
    destiny: u64,
    soul_urge: Option<u64>,
    personality: Option<u64>,
) -> RajYogResult {
    let contributing = ContributingNumbers {
        life_path,
        destiny,
        soul_urge,
        personality,
    };

    let mut detected = Vec::new();
    let mut yog_type = YogType::None;
    let mut yog_name: Option<String> = None;
    let mut strength = NO_MATCH_STRENGTH;

    if is_master(life_path) || is_master(destiny) {
        let both = is_master(life_path) && is_master(destiny);
        strength = if both {
            DOUBLE_MASTER_STRENGTH
        } else {
            MASTER_STRENGTH
        };
        yog_type = YogType::Master;
        let name = if both {
            "Double Master Raj Yog"
        } else {
            "Master Number Raj Yog"
        };
        yog_name = Some(name.to_string());
        detected.push(DetectedCombination {
            yog_type: YogType::Master,
            name: name.to_string(),
            numbers: [life_path, destiny],
            description: format!(
                "Master vibration in {} carries its own Raj Yog",
                if both {
                    "both life path and destiny"
                } else if is_master(life_path) {
                    "the life path"
                } else {
                    "the destiny"
                }
            ),
        });
    } else if let Some(combo) = RAJ_YOG_COMBINATIONS
        .iter()
        .find(|c| c.life_path == life_path && c.destiny == destiny)
    {
        yog_type = combo.yog_type;
        yog_name = Some(combo.name.to_string());
        strength = combo.strength;
        detected.push(DetectedCombination {
            yog_type: combo.yog_type,
            name: combo.name.to_string(),
            numbers: [life_path, destiny],
            description: combo.description.to_string(),
        });
    } else if life_path + destiny == 9 && life_path >= 1 && destiny >= 1 {
        // Weaker completion pattern for pairs summing to 9.
        yog_type = YogType::Other;
        yog_name = Some("Completion Yog".to_string());
        strength = COMPLETION_STRENGTH;
        detected.push(DetectedCombination {
            yog_type: YogType::Other,
            name: "Completion Yog".to_string(),
            numbers: [life_path, destiny],
            description: format!(
                "Life path {life_path} and destiny {destiny} complete the 9 cycle together"
            ),
        });
    }

    let is_detected = !detected.is_empty();

    // Alignment boosts apply on top of whatever was (or was not) detected.
    let mut boost = 0u8;
    if soul_urge == Some(life_path) {
        boost += ALIGNMENT_BOOST;
    }
    if personality == Some(destiny) {
        boost += ALIGNMENT_BOOST;
    }
    let strength_score = strength.saturating_add(boost).min(100);

    tracing::debug!(
        life_path,
        destiny,
        yog = yog_type.name(),
        strength_score,
        "raj yog detection"
    );
    RajYogResult {
        is_detected,
        yog_type,
        yog_name,
        strength_score,
        contributing_numbers: contributing,
        detected_combinations: detected,
    }
}
