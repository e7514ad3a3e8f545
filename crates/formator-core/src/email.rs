//! # Email Addresses
//!
//! Minimal shape check `*@*.*`, one `@` only, and at most 254 characters
//! (RFC 3696 with errata). Deliverability is not checked.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FormatError, FormatResult};
use crate::types::EmailFormat;

/// Maximum accepted length, in characters.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Non-whitespace, `@`, non-whitespace, `.`, non-whitespace, anywhere in the value.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email shape pattern is valid")
});

/// Validates an email address and returns it in `format`, trimmed.
///
/// The shape rule is applied to the input as given; surrounding whitespace
/// is removed only from the returned value.
///
/// ## Formats
/// - `Default`: unchanged case
/// - `Uppercase` / `Lowercase`: case-folded
///
/// ## Example
/// ```rust
/// use formator_core::{email, EmailFormat};
///
/// assert_eq!(email("Test@Example.com", EmailFormat::Lowercase).unwrap(), "test@example.com");
/// assert!(email("bad-email", EmailFormat::Default).is_err());
/// ```
pub fn email(input: &str, format: EmailFormat) -> FormatResult<String> {
    if !is_email_shaped(input) {
        return Err(FormatError::InvalidShape);
    }

    let cased = match format {
        EmailFormat::Default => input.to_string(),
        EmailFormat::Uppercase => input.to_uppercase(),
        EmailFormat::Lowercase => input.to_lowercase(),
    };

    Ok(cased.trim().to_string())
}

fn is_email_shaped(input: &str) -> bool {
    EMAIL_SHAPE.is_match(input)
        && input.matches('@').count() == 1
        && input.chars().count() <= MAX_EMAIL_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        assert_eq!(
            email("Test@Example.com", EmailFormat::Default).unwrap(),
            "Test@Example.com"
        );
        assert_eq!(
            email("Test@Example.com", EmailFormat::Uppercase).unwrap(),
            "TEST@EXAMPLE.COM"
        );
        assert_eq!(
            email("Test@Example.com", EmailFormat::Lowercase).unwrap(),
            "test@example.com"
        );
    }

    #[test]
    fn test_output_is_trimmed() {
        assert_eq!(
            email("  kund@butik.se \n", EmailFormat::Default).unwrap(),
            "kund@butik.se"
        );
    }

    #[test]
    fn test_shape_rejections() {
        for input in [
            "bad-email",
            "kund@butik",
            "@butik.se",
            "kund @butik.se",
            "kund@butik.",
            "",
        ] {
            assert_eq!(
                email(input, EmailFormat::Default),
                Err(FormatError::InvalidShape),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_single_at_sign() {
        assert!(email("a@b@butik.se", EmailFormat::Default).is_err());
        assert!(email("a.b@butik.co.uk", EmailFormat::Default).is_ok());
    }

    #[test]
    fn test_length_limit() {
        let domain = "@butik.se";
        let local = "a".repeat(MAX_EMAIL_LENGTH - domain.len());
        let longest = format!("{}{}", local, domain);
        assert_eq!(longest.len(), 254);
        assert!(email(&longest, EmailFormat::Default).is_ok());

        let too_long = format!("a{}", longest);
        assert!(email(&too_long, EmailFormat::Default).is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        let domain = "@bänk.se";
        let local = "å".repeat(MAX_EMAIL_LENGTH - domain.chars().count());
        assert!(email(&format!("{}{}", local, domain), EmailFormat::Default).is_ok());
    }
}
