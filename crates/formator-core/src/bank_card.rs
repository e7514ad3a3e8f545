//! # Bank Card Numbers
//!
//! Card numbers per ISO/IEC 7812-1: 11 to 21 digits, Luhn-checked.

use crate::digits::Digits;
use crate::error::{FormatError, FormatResult};
use crate::types::{BankCardFormat, IdentifierKind};

/// Accepted digit counts, inclusive.
pub const CARD_LENGTH_RANGE: (usize, usize) = (11, 21);

/// Digits per printed group.
const GROUP_SIZE: usize = 4;

/// Validates a bank card number and returns it in `format`.
///
/// ## Formats
/// - `Default`: digits only
/// - `Space` / `Dash`: groups of four, the last group may be shorter
///
/// ## Example
/// ```rust
/// use formator_core::{bank_card, BankCardFormat};
///
/// assert_eq!(
///     bank_card("4539148803436467", BankCardFormat::Dash).unwrap(),
///     "4539-1488-0343-6467"
/// );
/// assert_eq!(
///     bank_card("3782 822463 10005", BankCardFormat::Space).unwrap(),
///     "3782 8224 6310 005"
/// );
/// ```
pub fn bank_card(input: &str, format: BankCardFormat) -> FormatResult<String> {
    let digits = Digits::from_input(input);

    let (min, max) = CARD_LENGTH_RANGE;
    if !(min..=max).contains(&digits.len()) {
        return Err(FormatError::InvalidLength {
            kind: IdentifierKind::BankCard,
            found: digits.len(),
            expected: "11 to 21",
        });
    }

    if !digits.passes_luhn() {
        return Err(FormatError::InvalidChecksum {
            kind: IdentifierKind::BankCard,
        });
    }

    Ok(match format {
        BankCardFormat::Default => digits.into_string(),
        BankCardFormat::Space => group(digits.as_str(), " "),
        BankCardFormat::Dash => group(digits.as_str(), "-"),
    })
}

/// Splits ASCII digits into groups of four joined by `separator`.
fn group(digits: &str, separator: &str) -> String {
    digits
        .as_bytes()
        .chunks(GROUP_SIZE)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        let input = "4539 1488 0343 6467";
        assert_eq!(
            bank_card(input, BankCardFormat::Default).unwrap(),
            "4539148803436467"
        );
        assert_eq!(
            bank_card(input, BankCardFormat::Space).unwrap(),
            "4539 1488 0343 6467"
        );
        assert_eq!(
            bank_card(input, BankCardFormat::Dash).unwrap(),
            "4539-1488-0343-6467"
        );
    }

    #[test]
    fn test_short_last_group_is_not_padded() {
        assert_eq!(
            bank_card("4222222222222", BankCardFormat::Space).unwrap(),
            "4222 2222 2222 2"
        );
        assert_eq!(
            bank_card("12345678903", BankCardFormat::Dash).unwrap(),
            "1234-5678-903"
        );
    }

    #[test]
    fn test_length_bounds() {
        assert!(matches!(
            bank_card("4111111111", BankCardFormat::Default),
            Err(FormatError::InvalidLength { found: 10, .. })
        ));
        // 22 digits, Luhn-valid after the leading zeros.
        assert!(matches!(
            bank_card("0000004539148803436467", BankCardFormat::Default),
            Err(FormatError::InvalidLength { found: 22, .. })
        ));
        assert!(bank_card("000004539148803436467", BankCardFormat::Default).is_ok());
    }

    #[test]
    fn test_checksum() {
        assert!(matches!(
            bank_card("4111 1111 1111 1112", BankCardFormat::Default),
            Err(FormatError::InvalidChecksum { .. })
        ));
        assert!(matches!(
            bank_card("00000000000", BankCardFormat::Default),
            Err(FormatError::InvalidChecksum { .. })
        ));
    }
}
