//! # Mobile Phone Numbers
//!
//! Swedish mobile numbers per the PTS numbering plan for mobile services:
//! a national significant number of nine digits starting with 70, 72, 73,
//! 76 or 79.
//!
//! ## Prefix Search
//! ```text
//!   input "+46 70-123 45 67"  ──►  digits "46701234567"
//!
//!   for prefix in [70, 72, 73, 76, 79]:
//!       first occurrence of prefix in digits ──► "701234567"
//!       exactly 9 digits from there to the end? ──► accept
//! ```
//!
//! Only the first occurrence of each prefix is looked at, and it may sit
//! anywhere in the sequence, so `+46 8 70 123 45 67` (a Stockholm landline
//! with a "70" inside) is accepted as `0701234567`. This matches the
//! numbering-plan check forms have always run and is kept as is.

use crate::digits::Digits;
use crate::error::{FormatError, FormatResult};
use crate::types::{IdentifierKind, PhoneFormat};

/// Mobile prefixes, in the order they are searched.
pub const MOBILE_PREFIXES: [&str; 5] = ["70", "72", "73", "76", "79"];

/// Length of the national significant number (without trunk prefix `0`).
pub const NATIONAL_NUMBER_LENGTH: usize = 9;

/// Validates a Swedish mobile phone number and returns it in `format`.
///
/// ## Formats
/// - `Default`: `0NNNNNNNNN`
/// - `IntFormat`: E.164, `+46NNNNNNNNN`
/// - `NatFormat`: `0NN-NNN NN NN`
///
/// ## Example
/// ```rust
/// use formator_core::{cellphone, PhoneFormat};
///
/// assert_eq!(cellphone("+46 70 123 45 67", PhoneFormat::Default).unwrap(), "0701234567");
/// assert_eq!(cellphone("0701234567", PhoneFormat::NatFormat).unwrap(), "070-123 45 67");
/// assert!(cellphone("08-123 456", PhoneFormat::Default).is_err());
/// ```
pub fn cellphone(input: &str, format: PhoneFormat) -> FormatResult<String> {
    let digits = Digits::from_input(input);
    let number = national_number(&digits)?;

    Ok(match format {
        PhoneFormat::Default => format!("0{}", number),
        PhoneFormat::IntFormat => format!("+46{}", number),
        PhoneFormat::NatFormat => format!(
            "0{}-{} {} {}",
            &number[..2],
            &number[2..5],
            &number[5..7],
            &number[7..]
        ),
    })
}

/// Finds the nine-digit national significant number.
fn national_number(digits: &Digits) -> FormatResult<&str> {
    let digits = digits.as_str();
    let mut prefix_seen = false;

    for prefix in MOBILE_PREFIXES {
        if let Some(start) = digits.find(prefix) {
            prefix_seen = true;
            let tail = &digits[start..];
            if tail.len() == NATIONAL_NUMBER_LENGTH {
                return Ok(tail);
            }
        }
    }

    if prefix_seen {
        Err(FormatError::InvalidLength {
            kind: IdentifierKind::Cellphone,
            found: digits.len(),
            expected: "9 from the mobile prefix onward",
        })
    } else {
        Err(FormatError::InvalidRange {
            kind: IdentifierKind::Cellphone,
            field: "mobile prefix",
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        assert_eq!(
            cellphone("0701234567", PhoneFormat::Default).unwrap(),
            "0701234567"
        );
        assert_eq!(
            cellphone("0701234567", PhoneFormat::IntFormat).unwrap(),
            "+46701234567"
        );
        assert_eq!(
            cellphone("0701234567", PhoneFormat::NatFormat).unwrap(),
            "070-123 45 67"
        );
    }

    #[test]
    fn test_all_mobile_prefixes() {
        for (input, expected) in [
            ("0721234567", "072-123 45 67"),
            ("0731234567", "073-123 45 67"),
            ("0761234567", "076-123 45 67"),
            ("0791234567", "079-123 45 67"),
        ] {
            assert_eq!(cellphone(input, PhoneFormat::NatFormat).unwrap(), expected);
        }
    }

    #[test]
    fn test_country_code_and_separators_are_stripped() {
        for input in [
            "+46701234567",
            "46701234567",
            "0046 70 123 45 67",
            "070-123 45 67",
            "(070) 123-45-67",
        ] {
            assert_eq!(
                cellphone(input, PhoneFormat::Default).unwrap(),
                "0701234567",
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn test_prefix_inside_subscriber_number() {
        // First "70" is the prefix itself, the later one is ignored.
        assert_eq!(
            cellphone("0707012345", PhoneFormat::NatFormat).unwrap(),
            "070-701 23 45"
        );
        // Landline 08-701 234 567 contains "70" followed by nine digits.
        assert_eq!(
            cellphone("+46 8 70 123 45 67", PhoneFormat::Default).unwrap(),
            "0701234567"
        );
    }

    #[test]
    fn test_rejections() {
        assert!(matches!(
            cellphone("0711234567", PhoneFormat::Default),
            Err(FormatError::InvalidRange { .. })
        ));
        assert!(matches!(
            cellphone("", PhoneFormat::Default),
            Err(FormatError::InvalidRange { .. })
        ));
        assert!(matches!(
            cellphone("070123456", PhoneFormat::Default),
            Err(FormatError::InvalidLength { found: 9, .. })
        ));
        assert!(matches!(
            cellphone("07012345678", PhoneFormat::Default),
            Err(FormatError::InvalidLength { .. })
        ));
        // "70" occurs, but only eight digits follow it.
        assert!(cellphone("0770123456", PhoneFormat::Default).is_err());
    }
}
