//! # Formator Facade
//!
//! Bundles a [`FormatorConfig`] with a [`Clock`] so form handlers can call
//! one object for every field.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Checkout form (JSON)                                                   │
//! │  { "personalid": "850612-1238", "postalcode": 11351, ... }              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  validate_value(kind, &Value, token) ← untyped boundary                 │
//! │         │                                                               │
//! │         ├── not a string?  → InvalidType                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  validate(kind, &str, token)                                            │
//! │         │   token None      → configured default format                 │
//! │         │   token unknown   → operation's DEFAULT                       │
//! │         ▼                                                               │
//! │  cellphone / postal_code / ... / vat_id                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde_json::Value;
use tracing::trace;

use crate::bank_card::bank_card;
use crate::clock::{Clock, SystemClock};
use crate::config::FormatorConfig;
use crate::email::email;
use crate::error::{FormatError, FormatResult};
use crate::organization_id::organization_id_on;
use crate::personal_id::personal_id_on;
use crate::phone::cellphone;
use crate::postal_code::postal_code;
use crate::types::{
    BankCardFormat, EmailFormat, IdentifierKind, OrganizationIdFormat, PersonalIdFormat,
    PhoneFormat, PostalCodeFormat,
};
use crate::vat_id::vat_id_on;

/// Validators with configured default formats and an injected clock.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use formator_core::clock::FixedClock;
/// use formator_core::{Formator, FormatorConfig, IdentifierKind};
///
/// let config = FormatorConfig::from_toml_str("[formats]\npostalcode = \"INT_FORMAT\"\n").unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
/// let formator = Formator::with_clock(config, FixedClock::new(today));
///
/// assert_eq!(formator.postal_code("11351", None).unwrap(), "SE-113 51");
/// assert_eq!(
///     formator.validate(IdentifierKind::PersonalId, "850612-1238", Some("SHORT")).unwrap(),
///     "850612-1238"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Formator<C: Clock = SystemClock> {
    config: FormatorConfig,
    clock: C,
}

impl Formator<SystemClock> {
    /// Creates a formator reading today's date from the system clock.
    pub fn new(config: FormatorConfig) -> Self {
        Formator {
            config,
            clock: SystemClock,
        }
    }
}

impl Default for Formator<SystemClock> {
    fn default() -> Self {
        Formator::new(FormatorConfig::default())
    }
}

impl<C: Clock> Formator<C> {
    /// Creates a formator with an explicit clock.
    pub fn with_clock(config: FormatorConfig, clock: C) -> Self {
        Formator { config, clock }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FormatorConfig {
        &self.config
    }

    /// Today's date according to the clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // =========================================================================
    // Typed Operations
    // =========================================================================

    /// See [`crate::cellphone`]. `None` selects the configured format.
    pub fn cellphone(&self, input: &str, format: Option<PhoneFormat>) -> FormatResult<String> {
        cellphone(input, format.unwrap_or(self.config.formats.cellphone))
    }

    /// See [`crate::postal_code`]. `None` selects the configured format.
    pub fn postal_code(
        &self,
        input: &str,
        format: Option<PostalCodeFormat>,
    ) -> FormatResult<String> {
        postal_code(input, format.unwrap_or(self.config.formats.postalcode))
    }

    /// See [`crate::email`]. `None` selects the configured format.
    pub fn email(&self, input: &str, format: Option<EmailFormat>) -> FormatResult<String> {
        email(input, format.unwrap_or(self.config.formats.email))
    }

    /// See [`crate::bank_card`]. `None` selects the configured format.
    pub fn bank_card(&self, input: &str, format: Option<BankCardFormat>) -> FormatResult<String> {
        bank_card(input, format.unwrap_or(self.config.formats.bankcard))
    }

    /// See [`crate::personal_id_on`]. Uses the clock and configured rules.
    pub fn personal_id(
        &self,
        input: &str,
        format: Option<PersonalIdFormat>,
    ) -> FormatResult<String> {
        personal_id_on(
            input,
            format.unwrap_or(self.config.formats.personalid),
            self.today(),
            &self.config.personal_id,
        )
    }

    /// See [`crate::organization_id_on`]. Uses the clock and configured rules.
    pub fn organization_id(
        &self,
        input: &str,
        format: Option<OrganizationIdFormat>,
    ) -> FormatResult<String> {
        organization_id_on(
            input,
            format.unwrap_or(self.config.formats.organizationid),
            self.today(),
            &self.config.personal_id,
        )
    }

    /// See [`crate::vat_id_on`]. Uses the clock and configured rules.
    pub fn vat_id(&self, input: &str) -> FormatResult<String> {
        vat_id_on(input, self.today(), &self.config.personal_id)
    }

    // =========================================================================
    // Token Dispatch
    // =========================================================================

    /// Validates `input` as `kind`, with the format given as a token.
    ///
    /// `None` selects the configured format; an unrecognized token selects
    /// the operation's `DEFAULT`. `vatid` ignores the token.
    pub fn validate(
        &self,
        kind: IdentifierKind,
        input: &str,
        token: Option<&str>,
    ) -> FormatResult<String> {
        match kind {
            IdentifierKind::Cellphone => {
                self.cellphone(input, token.map(PhoneFormat::from_token))
            }
            IdentifierKind::PostalCode => {
                self.postal_code(input, token.map(PostalCodeFormat::from_token))
            }
            IdentifierKind::Email => self.email(input, token.map(EmailFormat::from_token)),
            IdentifierKind::BankCard => {
                self.bank_card(input, token.map(BankCardFormat::from_token))
            }
            IdentifierKind::PersonalId => {
                self.personal_id(input, token.map(PersonalIdFormat::from_token))
            }
            IdentifierKind::OrganizationId => {
                self.organization_id(input, token.map(OrganizationIdFormat::from_token))
            }
            IdentifierKind::VatId => self.vat_id(input),
        }
    }

    /// Validates an untyped value, e.g. a field of a JSON form payload.
    ///
    /// Anything other than a JSON string fails with
    /// [`FormatError::InvalidType`] before any parsing.
    pub fn validate_value(
        &self,
        kind: IdentifierKind,
        value: &Value,
        token: Option<&str>,
    ) -> FormatResult<String> {
        trace!(kind = kind.operation(), token, "Validating form value");

        let input = value.as_str().ok_or(FormatError::InvalidType {
            kind,
            found: json_type_name(value),
        })?;

        self.validate(kind, input, token)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::personal_id::CalendarRule;
    use serde_json::json;

    fn formator(config: FormatorConfig) -> Formator<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        Formator::with_clock(config, FixedClock::new(today))
    }

    #[test]
    fn test_non_string_values_are_invalid_type() {
        let formator = formator(FormatorConfig::default());
        for (value, found) in [
            (json!(null), "null"),
            (json!(12345), "number"),
            (json!(true), "boolean"),
            (json!(["12345"]), "array"),
            (json!({ "code": "12345" }), "object"),
        ] {
            assert_eq!(
                formator.validate_value(IdentifierKind::PostalCode, &value, None),
                Err(FormatError::InvalidType {
                    kind: IdentifierKind::PostalCode,
                    found,
                })
            );
        }
    }

    #[test]
    fn test_string_values_are_validated() {
        let formator = formator(FormatorConfig::default());
        assert_eq!(
            formator
                .validate_value(IdentifierKind::PostalCode, &json!("12345"), Some("NAT_FORMAT"))
                .unwrap(),
            "123 45"
        );
        assert_eq!(
            formator
                .validate_value(IdentifierKind::VatId, &json!("556036-0793"), Some("FULL"))
                .unwrap(),
            "SE 556036079301"
        );
    }

    #[test]
    fn test_configured_default_format() {
        let mut config = FormatorConfig::default();
        config.formats.cellphone = PhoneFormat::IntFormat;
        config.formats.bankcard = BankCardFormat::Dash;
        let formator = formator(config);

        assert_eq!(formator.cellphone("0701234567", None).unwrap(), "+46701234567");
        assert_eq!(
            formator
                .cellphone("0701234567", Some(PhoneFormat::Default))
                .unwrap(),
            "0701234567"
        );
        assert_eq!(
            formator
                .validate(IdentifierKind::BankCard, "4539148803436467", None)
                .unwrap(),
            "4539-1488-0343-6467"
        );
    }

    #[test]
    fn test_unknown_token_selects_operation_default() {
        let mut config = FormatorConfig::default();
        config.formats.email = EmailFormat::Uppercase;
        let formator = formator(config);

        assert_eq!(
            formator
                .validate(IdentifierKind::Email, "Kund@Butik.se", Some("TITLECASE"))
                .unwrap(),
            "Kund@Butik.se"
        );
        assert_eq!(
            formator
                .validate(IdentifierKind::Email, "Kund@Butik.se", None)
                .unwrap(),
            "KUND@BUTIK.SE"
        );
    }

    #[test]
    fn test_personal_id_uses_clock_and_rules() {
        let mut config = FormatorConfig::default();
        config.personal_id.calendar = CalendarRule::Strict;
        let formator = formator(config);

        assert_eq!(
            formator.personal_id("121212-1212", None).unwrap(),
            "201212121212"
        );
        assert!(formator.personal_id("230229-1238", None).is_err());
        assert!(formator.organization_id("230229-1238", None).is_err());
    }
}
