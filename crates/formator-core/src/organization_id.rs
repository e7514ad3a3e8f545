//! # Organization Identity Numbers
//!
//! Swedish organisationsnummer per the Act on identity designation of legal
//! persons (SFS 1974:174) and SKV 709.
//!
//! ## Group Digit
//! ```text
//!   5 5 6 0 3 6 - 0 7 9 3
//!       │
//!       └── third digit of the ten-digit core
//!
//!   < 2  ──►  sole proprietorship: the number IS a personal identity
//!             number, validated by personal_id (dates, century)
//!   >= 2 ──►  legal entity: canonical form is "16" + core
//! ```

use chrono::NaiveDate;
use tracing::debug;

use crate::checksum::luhn;
use crate::clock::{Clock, SystemClock};
use crate::digits::Digits;
use crate::error::{FormatError, FormatResult};
use crate::personal_id::{
    canonical_personal_id, PersonalIdRules, CANONICAL_LENGTH, CHECKED_LENGTH,
};
use crate::types::{IdentifierKind, OrganizationIdFormat};

/// Century prefix of legal-entity numbers in twelve-digit form.
///
/// ## Revision Trigger
/// The prefix assumes the current century is the 2000s. Revisit when the
/// century changes.
pub const LEGAL_ENTITY_CENTURY: &str = "16";

/// Group digits from this value up denote legal entities.
const LEGAL_ENTITY_MIN_GROUP: u32 = 2;

/// Validates an organization number against today's date.
///
/// Equivalent to [`organization_id_on`] with the system clock and default
/// rules. The date only matters for sole proprietorships.
pub fn organization_id(input: &str, format: OrganizationIdFormat) -> FormatResult<String> {
    organization_id_on(
        input,
        format,
        SystemClock.today(),
        &PersonalIdRules::default(),
    )
}

/// Validates an organization number and returns it in `format`.
///
/// ## Formats
/// - `Default`: `NNNNNN-NNNN`
/// - `Full`: twelve digits, `16NNNNNNNNNN` for legal entities and the
///   canonical personal identity number for sole proprietorships
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use formator_core::{organization_id_on, OrganizationIdFormat, PersonalIdRules};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
/// let rules = PersonalIdRules::default();
///
/// assert_eq!(
///     organization_id_on("5560360793", OrganizationIdFormat::Default, today, &rules).unwrap(),
///     "556036-0793"
/// );
/// assert_eq!(
///     organization_id_on("556036-0793", OrganizationIdFormat::Full, today, &rules).unwrap(),
///     "165560360793"
/// );
/// ```
pub fn organization_id_on(
    input: &str,
    format: OrganizationIdFormat,
    today: NaiveDate,
    rules: &PersonalIdRules,
) -> FormatResult<String> {
    let canonical = canonical_organization_id(input, today, rules)?;

    Ok(match format {
        OrganizationIdFormat::Default => format!("{}-{}", &canonical[2..8], &canonical[8..]),
        OrganizationIdFormat::Full => canonical,
    })
}

/// Validates the input and returns the canonical twelve-digit form.
pub(crate) fn canonical_organization_id(
    input: &str,
    today: NaiveDate,
    rules: &PersonalIdRules,
) -> FormatResult<String> {
    let digits = Digits::from_input(input);

    if digits.len() != CHECKED_LENGTH && digits.len() != CANONICAL_LENGTH {
        return Err(FormatError::InvalidLength {
            kind: IdentifierKind::OrganizationId,
            found: digits.len(),
            expected: "10 or 12",
        });
    }

    let core = digits.tail(CHECKED_LENGTH);
    if !luhn(core) {
        return Err(FormatError::InvalidChecksum {
            kind: IdentifierKind::OrganizationId,
        });
    }

    let group = core[2..3].parse::<u32>().unwrap_or_default();
    if group < LEGAL_ENTITY_MIN_GROUP {
        debug!(group, "Group digit denotes a sole proprietorship, validating as personal identity number");
        return canonical_personal_id(input, today, rules);
    }

    Ok(format!("{}{}", LEGAL_ENTITY_CENTURY, core))
}

// =============================================================================
// Unit Tests
// =============================================================================
