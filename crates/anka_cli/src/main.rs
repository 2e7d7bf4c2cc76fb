use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;

use anka_core::{LetterSystem, reduce};
use anka_milan::{CompatibilityAnalyzer, RelationshipType, detect_raj_yog};
use anka_name::{NumerologyCalculator, compute_name_numbers, normalize, parse_birth_date};
use anka_phone::{
    CoreMethod, DigitScope, PhoneOptions, SanitizeOptions, compute_compatibility_score,
    compute_phone_numerology, sanitize_and_validate,
};

#[derive(Parser)]
#[command(name = "anka", about = "Anka numerology CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a number by repeated digit summation
    Reduce {
        /// Non-negative value to reduce
        value: u64,
        /// Fully reduce instead of preserving master numbers
        #[arg(long)]
        no_master: bool,
    },
    /// Normalize a name to lowercase a-z words
    Normalize {
        /// Raw name text
        name: String,
        /// Drop accented characters instead of transliterating them
        #[arg(long)]
        no_transliterate: bool,
    },
    /// Name numerology: expression, soul urge, personality, vibration
    Name {
        /// Full name
        name: String,
        /// Letter system: pythagorean or chaldean
        #[arg(long, default_value = "pythagorean")]
        system: String,
        /// Fully reduce instead of preserving master numbers
        #[arg(long)]
        no_master: bool,
    },
    /// All nine core factors from a name and birth date
    Chart {
        /// Full name
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: String,
        /// Letter system: pythagorean or chaldean
        #[arg(long, default_value = "pythagorean")]
        system: String,
        /// Reference date for personal year/month (default: today)
        #[arg(long)]
        reference: Option<String>,
    },
    /// Sanitize and validate a phone number
    SanitizePhone {
        /// Raw phone text
        number: String,
        /// Convert vanity keypad letters to digits
        #[arg(long)]
        vanity: bool,
        /// Country label to report on success
        #[arg(long)]
        country_hint: Option<String>,
    },
    /// Phone numerology: core number, repetition, positions, pairs
    Phone {
        /// Raw phone text
        number: String,
        /// Core method: core or single
        #[arg(long, default_value = "core")]
        method: String,
        /// Digit scope: national or full
        #[arg(long, default_value = "national")]
        scope: String,
        /// Convert vanity keypad letters to digits
        #[arg(long)]
        vanity: bool,
    },
    /// Phone-to-phone compatibility score
    PhoneCompat {
        /// First phone number
        first: String,
        /// Second phone number
        second: String,
        /// Core method: core or single
        #[arg(long, default_value = "core")]
        method: String,
        /// Digit scope: national or full
        #[arg(long, default_value = "national")]
        scope: String,
    },
    /// Relationship compatibility between two people
    Compat {
        /// First person's full name
        user_name: String,
        /// First person's birth date (YYYY-MM-DD)
        #[arg(long)]
        user_birth: String,
        /// Second person's full name
        partner_name: String,
        /// Second person's birth date (YYYY-MM-DD)
        #[arg(long)]
        partner_birth: String,
        /// Relationship type: romantic, business, friendship, family
        #[arg(long, default_value = "romantic")]
        relationship: String,
        /// Letter system: pythagorean or chaldean
        #[arg(long, default_value = "pythagorean")]
        system: String,
        /// Reference date for personal year/month (default: today)
        #[arg(long)]
        reference: Option<String>,
    },
    /// Raj Yog detection from life path and destiny
    RajYog {
        /// Life path number (1-9 or 11/22/33)
        life_path: u64,
        /// Destiny number (1-9 or 11/22/33)
        destiny: u64,
        /// Soul urge number, boosts strength when aligned
        #[arg(long)]
        soul_urge: Option<u64>,
        /// Personality number, boosts strength when aligned
        #[arg(long)]
        personality: Option<u64>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn reference_date(text: Option<&str>) -> Result<NaiveDate> {
    match text {
        Some(t) => Ok(parse_birth_date(t)?),
        None => Ok(Local::now().date_naive()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Reduce { value, no_master } => {
            print_json(&reduce(value, !no_master))?;
        }
        Commands::Normalize {
            name,
            no_transliterate,
        } => {
            println!("{}", normalize(&name, !no_transliterate));
        }
        Commands::Name {
            name,
            system,
            no_master,
        } => {
            let system = LetterSystem::from_name(&system)?;
            print_json(&compute_name_numbers(&name, system, !no_master)?)?;
        }
        Commands::Chart {
            name,
            birth,
            system,
            reference,
        } => {
            let system = LetterSystem::from_name(&system)?;
            let birth = parse_birth_date(&birth)?;
            let reference = reference_date(reference.as_deref())?;
            let calculator = NumerologyCalculator::new(system);
            let chart = calculator.calculate_all(&name, birth, reference)?;
            print_json(&chart.factor_map())?;
        }
        Commands::SanitizePhone {
            number,
            vanity,
            country_hint,
        } => {
            let options = SanitizeOptions {
                convert_vanity: vanity,
                country_hint,
                ..SanitizeOptions::default()
            };
            print_json(&sanitize_and_validate(&number, &options))?;
        }
        Commands::Phone {
            number,
            method,
            scope,
            vanity,
        } => {
            let options = PhoneOptions {
                method: CoreMethod::from_name(&method)?,
                scope: DigitScope::from_name(&scope)?,
                sanitize: SanitizeOptions {
                    convert_vanity: vanity,
                    ..SanitizeOptions::default()
                },
            };
            print_json(&compute_phone_numerology(&number, &options)?)?;
        }
        Commands::PhoneCompat {
            first,
            second,
            method,
            scope,
        } => {
            let options = PhoneOptions {
                method: CoreMethod::from_name(&method)?,
                scope: DigitScope::from_name(&scope)?,
                sanitize: SanitizeOptions::default(),
            };
            print_json(&compute_compatibility_score(&first, &second, &options)?)?;
        }
        Commands::Compat {
            user_name,
            user_birth,
            partner_name,
            partner_birth,
            relationship,
            system,
            reference,
        } => {
            let relationship = RelationshipType::from_name(&relationship)?;
            let system = LetterSystem::from_name(&system)?;
            let reference = reference_date(reference.as_deref())?;
            let analyzer = CompatibilityAnalyzer::new(relationship).with_system(system);
            let result = analyzer.analyze_compatibility(
                &user_name,
                parse_birth_date(&user_birth)?,
                &partner_name,
                parse_birth_date(&partner_birth)?,
                reference,
            )?;
            print_json(&result)?;
        }
        Commands::RajYog {
            life_path,
            destiny,
            soul_urge,
            personality,
        } => {
            print_json(&detect_raj_yog(life_path, destiny, soul_urge, personality))?;
        }
    }
    Ok(())
}
