//! Birth/life-path calculator: the nine core numerology factors.
//!
//! Combines a birth date with a full name into life path, destiny, soul
//! urge, personality, attitude, maturity, balance, personal year, and
//! personal month. The "current" year and month come from an explicit
//! reference date so the calculator stays a pure function.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use anka_core::{LetterSystem, digit_sum, letter_value, reduce, reduce_value};

use crate::error::NameError;
use crate::name::compute_name_numbers;

/// The nine core factors, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    LifePath,
    Destiny,
    SoulUrge,
    Personality,
    Attitude,
    Maturity,
    Balance,
    PersonalYear,
    PersonalMonth,
}

/// All nine factors in canonical order, for iteration and weight tables.
pub const ALL_FACTORS: [Factor; 9] = [
    Factor::LifePath,
    Factor::Destiny,
    Factor::SoulUrge,
    Factor::Personality,
    Factor::Attitude,
    Factor::Maturity,
    Factor::Balance,
    Factor::PersonalYear,
    Factor::PersonalMonth,
];

impl Factor {
    /// Canonical snake_case name of the factor.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LifePath => "life_path",
            Self::Destiny => "destiny",
            Self::SoulUrge => "soul_urge",
            Self::Personality => "personality",
            Self::Attitude => "attitude",
            Self::Maturity => "maturity",
            Self::Balance => "balance",
            Self::PersonalYear => "personal_year",
            Self::PersonalMonth => "personal_month",
        }
    }

    /// 0-based index in canonical order.
    pub const fn index(self) -> u8 {
        match self {
            Self::LifePath => 0,
            Self::Destiny => 1,
            Self::SoulUrge => 2,
            Self::Personality => 3,
            Self::Attitude => 4,
            Self::Maturity => 5,
            Self::Balance => 6,
            Self::PersonalYear => 7,
            Self::PersonalMonth => 8,
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reduced value of every core factor for one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreNumbers {
    /// Reduction of the sum of all birth-date digits.
    pub life_path: u64,
    /// Expression number of the full name.
    pub destiny: u64,
    /// Vowel sum of the full name.
    pub soul_urge: u64,
    /// Consonant sum of the full name.
    pub personality: u64,
    /// Reduction of birth day + birth month.
    pub attitude: u64,
    /// Reduction of life path + destiny.
    pub maturity: u64,
    /// Reduction of the first-letter values of each name word.
    pub balance: u64,
    /// Reduction of birth day + birth month + reference year.
    pub personal_year: u64,
    /// Reduction of personal year + reference month.
    pub personal_month: u64,
}

impl CoreNumbers {
    /// Value of a single factor.
    pub const fn get(&self, factor: Factor) -> u64 {
        match factor {
            Factor::LifePath => self.life_path,
            Factor::Destiny => self.destiny,
            Factor::SoulUrge => self.soul_urge,
            Factor::Personality => self.personality,
            Factor::Attitude => self.attitude,
            Factor::Maturity => self.maturity,
            Factor::Balance => self.balance,
            Factor::PersonalYear => self.personal_year,
            Factor::PersonalMonth => self.personal_month,
        }
    }

    /// All factors as an ordered name-to-value map.
    pub fn factor_map(&self) -> BTreeMap<&'static str, u64> {
        ALL_FACTORS.iter().map(|f| (f.name(), self.get(*f))).collect()
    }
}

/// Parse a `YYYY-MM-DD` date string; malformed text is a validation error.
pub fn parse_birth_date(text: &str) -> Result<NaiveDate, NameError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| NameError::InvalidDate(format!("{text:?}: {e}")))
}

/// Calculator for the nine core factors under one letter system.
///
/// Holds only configuration; every call is a pure function of its inputs
/// and the instance is freely shareable across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumerologyCalculator {
    system: LetterSystem,
    keep_master: bool,
}

impl NumerologyCalculator {
    /// Calculator with master-number preservation on.
    pub const fn new(system: LetterSystem) -> Self {
        Self {
            system,
            keep_master: true,
        }
    }

    /// Override master-number preservation.
    pub const fn with_master(mut self, keep_master: bool) -> Self {
        self.keep_master = keep_master;
        self
    }

    /// The configured letter system.
    pub const fn system(&self) -> LetterSystem {
        self.system
    }

    /// Compute all nine factors for a person.
    ///
    /// `reference` supplies the year and month for the personal-year and
    /// personal-month cycles.
    pub fn calculate_all(
        &self,
        full_name: &str,
        birth_date: NaiveDate,
        reference: NaiveDate,
    ) -> Result<CoreNumbers, NameError> {
        let name = compute_name_numbers(full_name, self.system, self.keep_master)?;

        let year = date_year(birth_date)?;
        let month = u64::from(birth_date.month());
        let day = u64::from(birth_date.day());
        let ref_year = date_year(reference)?;
        let ref_month = u64::from(reference.month());

        let keep = self.keep_master;
        let life_path = reduce(digit_sum(year) + digit_sum(month) + digit_sum(day), keep);
        let destiny = name.expression.reduced;
        let attitude = reduce_value(day + month, keep);
        let maturity = reduce_value(life_path.reduced + destiny, keep);
        let balance = reduce_value(first_letter_sum(&name.normalized_name, self.system), keep);
        let personal_year = reduce_value(day + month + ref_year, keep);
        let personal_month = reduce_value(personal_year + ref_month, keep);

        let numbers = CoreNumbers {
            life_path: life_path.reduced,
            destiny,
            soul_urge: name.soul_urge.reduced,
            personality: name.personality.reduced,
            attitude,
            maturity,
            balance,
            personal_year,
            personal_month,
        };
        tracing::debug!(
            name = %name.normalized_name,
            %birth_date,
            life_path = numbers.life_path,
            destiny = numbers.destiny,
            "computed core numbers"
        );
        Ok(numbers)
    }
}

/// Sum of the first-letter values of each word of a normalized name.
fn first_letter_sum(normalized: &str, system: LetterSystem) -> u64 {
    normalized
        .split(' ')
        .filter_map(|word| word.chars().next())
        .filter_map(|c| letter_value(c, system))
        .map(u64::from)
        .sum()
}

fn date_year(date: NaiveDate) -> Result<u64, NameError> {
    u64::try_from(date.year())
        .map_err(|_| NameError::InvalidDate(format!("year {} before common era", date.year())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn life_path_sums_all_date_digits() {
        let calc = NumerologyCalculator::new(LetterSystem::Pythagorean);
        let n = calc
            .calculate_all("John Doe", date(1990, 5, 15), date(2026, 8, 1))
            .unwrap();
        // 1+9+9+0 + 5 + 1+5 = 30 -> 3
        assert_eq!(n.life_path, 3);
        assert_eq!(n.destiny, 8);
        assert_eq!(n.soul_urge, 8);
        assert_eq!(n.personality, 9);
        // attitude: 15 + 5 = 20 -> 2
        assert_eq!(n.attitude, 2);
        // maturity: 3 + 8 = 11, preserved as master
        assert_eq!(n.maturity, 11);
        // balance: j(1) + d(4) = 5
        assert_eq!(n.balance, 5);
        // personal year: 15 + 5 + 2026 = 2046 -> 12 -> 3
        assert_eq!(n.personal_year, 3);
        // personal month: 3 + 8 = 11, master
        assert_eq!(n.personal_month, 11);
    }

    #[test]
    fn master_preservation_off_fully_reduces() {
        let calc = NumerologyCalculator::new(LetterSystem::Pythagorean).with_master(false);
        let n = calc
            .calculate_all("John Doe", date(1990, 5, 15), date(2026, 8, 1))
            .unwrap();
        assert_eq!(n.maturity, 2); // 11 -> 2
        assert_eq!(n.personal_month, 2);
    }

    #[test]
    fn master_life_path_preserved() {
        let calc = NumerologyCalculator::new(LetterSystem::Pythagorean);
        // 1+9+8+3 + 3 + 5 = 29 -> 11
        let n = calc
            .calculate_all("John Doe", date(1983, 3, 5), date(2026, 8, 1))
            .unwrap();
        assert_eq!(n.life_path, 11);
    }

    #[test]
    fn factor_map_is_complete_and_ordered() {
        let calc = NumerologyCalculator::new(LetterSystem::Chaldean);
        let n = calc
            .calculate_all("Amy Lee", date(1981, 12, 13), date(2026, 8, 1))
            .unwrap();
        let map = n.factor_map();
        assert_eq!(map.len(), ALL_FACTORS.len());
        for factor in ALL_FACTORS {
            assert_eq!(map[factor.name()], n.get(factor), "factor {factor}");
        }
    }

    #[test]
    fn empty_name_propagates_validation_error() {
        let calc = NumerologyCalculator::new(LetterSystem::Pythagorean);
        let err = calc
            .calculate_all("  ", date(1990, 5, 15), date(2026, 8, 1))
            .unwrap_err();
        assert_eq!(err, NameError::EmptyName);
    }

    #[test]
    fn parse_birth_date_formats() {
        assert_eq!(parse_birth_date("1990-05-15").unwrap(), date(1990, 5, 15));
        assert_eq!(parse_birth_date(" 1990-05-15 ").unwrap(), date(1990, 5, 15));
        assert!(matches!(
            parse_birth_date("15/05/1990"),
            Err(NameError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_birth_date("1990-13-40"),
            Err(NameError::InvalidDate(_))
        ));
    }

    #[test]
    fn factor_indices_sequential() {
        for (i, f) in ALL_FACTORS.iter().enumerate() {
            assert_eq!(f.index() as usize, i);
        }
    }
}
