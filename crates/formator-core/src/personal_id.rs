//! # Personal Identity Numbers
//!
//! Swedish personnummer per the Population Registration Act (1991:481,
//! 18 §) and SKV 704.
//!
//! ## Structure
//! ```text
//!   1985 06 12 123 8        85 06 12 - 123 8
//!   ──── ── ── ─── ─        ── ── ── ─ ─── ─
//!   year mm dd ser check    yy mm dd │ ser check
//!                                    └── '-' or '+' (aged 100 or more)
//!   canonical (12 digits)   short form (10 digits)
//! ```
//!
//! The Luhn check runs over the last ten digits. A short form carries no
//! century, so it is inferred from today's date:
//!
//! ```text
//!   today 2026-10-17, base century 20, base year tail 26
//!
//!   "121212-1212"  12 <= 26          ──►  20  ──►  201212121212
//!   "850612-1238"  85 >  26          ──►  19  ──►  198506121238
//!   "850612+1238"  85 >  26, and '+' ──►  18  ──►  188506121238
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::checksum::luhn;
use crate::clock::{Clock, SystemClock};
use crate::digits::Digits;
use crate::error::{ConfigError, FormatError, FormatResult};
use crate::types::{IdentifierKind, PersonalIdFormat};

/// Number of digits covered by the Luhn check (`YYMMDDNNNC`).
pub const CHECKED_LENGTH: usize = 10;

/// Length of the canonical form (`YYYYMMDDNNNC`).
pub const CANONICAL_LENGTH: usize = 12;

/// Added to the day of birth in a coordination number (samordningsnummer).
pub const COORDINATION_DAY_OFFSET: u32 = 60;

/// Longest day of each month. February allows 29 in every year; use
/// [`CalendarRule::Strict`] for the real calendar.
const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// =============================================================================
// Rules
// =============================================================================

/// How the date of birth is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarRule {
    /// Day within the month table, 29 February accepted for every year.
    #[default]
    Lenient,
    /// The date must exist, leap years included.
    Strict,
}

impl fmt::Display for CalendarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarRule::Lenient => write!(f, "lenient"),
            CalendarRule::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for CalendarRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(CalendarRule::Lenient),
            "strict" => Ok(CalendarRule::Strict),
            other => Err(ConfigError::InvalidValue {
                var: "calendar".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Rules applied to personal identity numbers, and to organization numbers
/// of sole proprietorships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonalIdRules {
    /// Date-of-birth check.
    #[serde(default)]
    pub calendar: CalendarRule,

    /// Accept coordination numbers (day of birth + 60).
    #[serde(default)]
    pub coordination_numbers: bool,
}

// =============================================================================
// Separator
// =============================================================================

/// Separator between date of birth and serial number in the short form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// `-`, under 100 years of age.
    #[default]
    Minus,
    /// `+`, the year the person turns 100 and later.
    Plus,
}

impl Separator {
    /// Reads the separator from raw input: `+` when the fifth character
    /// from the end is `+`, otherwise `-`.
    pub fn of_input(input: &str) -> Self {
        match input.chars().rev().nth(4) {
            Some('+') => Separator::Plus,
            _ => Separator::Minus,
        }
    }

    /// Returns the separator character.
    pub const fn as_char(&self) -> char {
        match self {
            Separator::Minus => '-',
            Separator::Plus => '+',
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Validates a personal identity number against today's date.
///
/// Equivalent to [`personal_id_on`] with the system clock and default
/// rules.
pub fn personal_id(input: &str, format: PersonalIdFormat) -> FormatResult<String> {
    personal_id_on(
        input,
        format,
        SystemClock.today(),
        &PersonalIdRules::default(),
    )
}

/// Validates a personal identity number and returns it in `format`.
///
/// `today` is only used to infer the century of ten-digit input; a
/// twelve-digit input gives the same answer on every date.
///
/// ## Formats
/// - `Default`: `YYYYMMDDNNNN`
/// - `Short`: `YYMMDD-NNNN`, or `YYMMDD+NNNN` when the input used `+`
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use formator_core::{personal_id_on, PersonalIdFormat, PersonalIdRules};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
/// let rules = PersonalIdRules::default();
///
/// assert_eq!(
///     personal_id_on("850612-1238", PersonalIdFormat::Default, today, &rules).unwrap(),
///     "198506121238"
/// );
/// assert_eq!(
///     personal_id_on("198506121238", PersonalIdFormat::Short, today, &rules).unwrap(),
///     "850612-1238"
/// );
/// ```
pub fn personal_id_on(
    input: &str,
    format: PersonalIdFormat,
    today: NaiveDate,
    rules: &PersonalIdRules,
) -> FormatResult<String> {
    let canonical = canonical_personal_id(input, today, rules)?;

    Ok(match format {
        PersonalIdFormat::Default => canonical,
        PersonalIdFormat::Short => format!(
            "{}{}{}",
            &canonical[2..8],
            Separator::of_input(input),
            &canonical[8..]
        ),
    })
}

/// Infers the two-digit century of a short personal identity number.
///
/// Starts from today's century, steps back one when the birth year tail
/// is later than today's year tail, and one more for the `+` separator.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use formator_core::personal_id::{infer_century, Separator};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
/// assert_eq!(infer_century(12, Separator::Minus, today), 20);
/// assert_eq!(infer_century(85, Separator::Minus, today), 19);
/// assert_eq!(infer_century(85, Separator::Plus, today), 18);
/// ```
pub fn infer_century(year_tail: u32, separator: Separator, today: NaiveDate) -> i32 {
    let year = today.year();
    let mut century = year.div_euclid(100);
    let base_tail = year.rem_euclid(100);

    if i64::from(year_tail) > i64::from(base_tail) {
        century -= 1;
    }
    if separator == Separator::Plus {
        century -= 1;
    }

    century
}

/// Validates the input and returns the canonical twelve-digit form.
pub(crate) fn canonical_personal_id(
    input: &str,
    today: NaiveDate,
    rules: &PersonalIdRules,
) -> FormatResult<String> {
    let digits = Digits::from_input(input);

    if digits.len() != CHECKED_LENGTH && digits.len() != CANONICAL_LENGTH {
        return Err(FormatError::InvalidLength {
            kind: IdentifierKind::PersonalId,
            found: digits.len(),
            expected: "10 or 12",
        });
    }

    if !luhn(digits.tail(CHECKED_LENGTH)) {
        return Err(FormatError::InvalidChecksum {
            kind: IdentifierKind::PersonalId,
        });
    }

    // Month and day sit at the same place counted from the end.
    let offset = digits.len() - CHECKED_LENGTH;
    let month = digits.number_at(offset + 2, 2).unwrap_or_default();
    let day = digits.number_at(offset + 4, 2).unwrap_or_default();
    let day_of_month = check_month_day(month, day, rules)?;

    let canonical = if digits.len() == CANONICAL_LENGTH {
        digits.into_string()
    } else {
        let separator = Separator::of_input(input);
        let year_tail = digits.number_at(0, 2).unwrap_or_default();
        let century = infer_century(year_tail, separator, today);
        trace!(year_tail, century, %separator, "Inferred century of short personal identity number");
        format!("{:02}{}", century, digits)
    };

    if rules.calendar == CalendarRule::Strict {
        let year: i32 = canonical[..4].parse().unwrap_or_default();
        if NaiveDate::from_ymd_opt(year, month, day_of_month).is_none() {
            return Err(FormatError::InvalidRange {
                kind: IdentifierKind::PersonalId,
                field: "date of birth",
            });
        }
    }

    Ok(canonical)
}

/// Checks month and day fields; returns the day of month with any
/// coordination offset removed.
fn check_month_day(month: u32, day: u32, rules: &PersonalIdRules) -> FormatResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(FormatError::InvalidRange {
            kind: IdentifierKind::PersonalId,
            field: "month",
        });
    }

    let day_of_month = if rules.coordination_numbers && day > COORDINATION_DAY_OFFSET {
        day - COORDINATION_DAY_OFFSET
    } else {
        day
    };

    let max_day = DAYS_IN_MONTH[(month - 1) as usize];
    if day_of_month < 1 || day_of_month > max_day {
        return Err(FormatError::InvalidRange {
            kind: IdentifierKind::PersonalId,
            field: "day",
        });
    }

    Ok(day_of_month)
}

// =============================================================================
// Unit Tests
// =============================================================================
