//! # Postal Codes
//!
//! Swedish postal codes per the Swedish postal code system (SS 613401:2011).
//!
//! The check is a range test only: a code that passes lies in a series that
//! may be assigned, it is not confirmed to belong to a place or a PO box.

use crate::digits::Digits;
use crate::error::{FormatError, FormatResult};
use crate::types::{IdentifierKind, PostalCodeFormat};

/// Number of digits in a postal code.
pub const POSTAL_CODE_LENGTH: usize = 5;

/// Lowest and highest accepted postal code.
pub const POSTAL_CODE_RANGE: (u32, u32) = (10000, 99000);

/// Leading pairs of reserved or unassigned series.
pub const EXCLUDED_POSTAL_PREFIXES: [&str; 4] = ["32", "48", "49", "99"];

/// Validates a Swedish postal code and returns it in `format`.
///
/// ## Formats
/// - `Default`: `NNNNN`
/// - `NatFormat`: `NNN NN`
/// - `IntFormat`: `SE-NNN NN`
///
/// ## Example
/// ```rust
/// use formator_core::{postal_code, PostalCodeFormat};
///
/// assert_eq!(postal_code("123 45", PostalCodeFormat::IntFormat).unwrap(), "SE-123 45");
/// assert!(postal_code("99000", PostalCodeFormat::Default).is_err());
/// ```
pub fn postal_code(input: &str, format: PostalCodeFormat) -> FormatResult<String> {
    let digits = Digits::from_input(input);

    if digits.len() != POSTAL_CODE_LENGTH {
        return Err(FormatError::InvalidLength {
            kind: IdentifierKind::PostalCode,
            found: digits.len(),
            expected: "5",
        });
    }

    let (min, max) = POSTAL_CODE_RANGE;
    let value = digits.number_at(0, POSTAL_CODE_LENGTH).unwrap_or_default();
    if !(min..=max).contains(&value) {
        return Err(FormatError::InvalidRange {
            kind: IdentifierKind::PostalCode,
            field: "number range",
        });
    }

    let code = digits.as_str();
    if EXCLUDED_POSTAL_PREFIXES.contains(&&code[..2]) {
        return Err(FormatError::InvalidRange {
            kind: IdentifierKind::PostalCode,
            field: "series",
        });
    }

    Ok(match format {
        PostalCodeFormat::Default => digits.into_string(),
        PostalCodeFormat::NatFormat => format!("{} {}", &code[..3], &code[3..]),
        PostalCodeFormat::IntFormat => format!("SE-{} {}", &code[..3], &code[3..]),
    })
}
