//! # VAT Identification Numbers
//!
//! Swedish momsregistreringsnummer in the international form used on
//! invoices across the EU: `SE` + the ten-digit organization number + `01`.

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::error::FormatResult;
use crate::organization_id::canonical_organization_id;
use crate::personal_id::{PersonalIdRules, CHECKED_LENGTH};

/// Suffix of the default VAT branch.
pub const VAT_BRANCH_SUFFIX: &str = "01";

/// Validates a VAT number (or the organization number it derives from)
/// against today's date.
pub fn vat_id(input: &str) -> FormatResult<String> {
    vat_id_on(input, SystemClock.today(), &PersonalIdRules::default())
}

/// Validates a VAT number and returns it as `SE NNNNNNNNNN01`.
///
/// There is no format choice; the same shape is always returned.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use formator_core::{vat_id_on, PersonalIdRules};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
/// assert_eq!(
///     vat_id_on("556036-0793", today, &PersonalIdRules::default()).unwrap(),
///     "SE 556036079301"
/// );
/// ```
pub fn vat_id_on(input: &str, today: NaiveDate, rules: &PersonalIdRules) -> FormatResult<String> {
    let canonical = canonical_organization_id(input, today, rules)?;
    let core = &canonical[canonical.len() - CHECKED_LENGTH..];

    Ok(format!("SE {}{}", core, VAT_BRANCH_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use crate::types::IdentifierKind;

    fn vat(input: &str) -> FormatResult<String> {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        vat_id_on(input, today, &PersonalIdRules::default())
    }

    #[test]
    fn test_legal_entity() {
        assert_eq!(vat("5560360793").unwrap(), "SE 556036079301");
        assert_eq!(vat("165566778899").unwrap(), "SE 556677889901");
    }

    #[test]
    fn test_sole_proprietorship() {
        assert_eq!(vat("850612-1238").unwrap(), "SE 850612123801");
        assert_eq!(vat("19850612-1238").unwrap(), "SE 850612123801");
    }

    #[test]
    fn test_input_is_read_as_organization_number() {
        assert_eq!(vat("SE 5560360793").unwrap(), "SE 556036079301");
        // The branch suffix shifts the last ten digits off the organization number.
        assert!(vat("SE 556036079301").is_err());
    }

    #[test]
    fn test_failures_pass_through() {
        assert_eq!(
            vat("556036-0794"),
            Err(FormatError::InvalidChecksum {
                kind: IdentifierKind::OrganizationId
            })
        );
        assert!(vat("").is_err());
    }
}
