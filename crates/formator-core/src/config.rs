//! # Formator Configuration
//!
//! Which output shape each validator uses when the caller asks for none,
//! and how strictly personal identity numbers are read.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     FORMATOR_CELLPHONE_FORMAT=INT_FORMAT                               │
//! │     FORMATOR_CALENDAR=strict                                           │
//! │                                                                         │
//! │  2. TOML text handed over by the host application                      │
//! │     (the crate never opens files itself)                               │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     DEFAULT shape everywhere, lenient calendar, no coordination nos.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration Format
//! ```toml
//! [formats]
//! cellphone = "INT_FORMAT"
//! postalcode = "NAT_FORMAT"
//! email = "LOWERCASE"
//! bankcard = "SPACE"
//! personalid = "SHORT"
//! organizationid = "FULL"
//!
//! [personal_id]
//! calendar = "strict"          # lenient | strict
//! coordination_numbers = true
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::personal_id::{CalendarRule, PersonalIdRules};
use crate::types::{
    BankCardFormat, EmailFormat, OrganizationIdFormat, PersonalIdFormat, PhoneFormat,
    PostalCodeFormat,
};

// =============================================================================
// Default Formats
// =============================================================================

/// Format used by [`crate::Formator`] when the caller passes none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DefaultFormats {
    #[serde(default)]
    pub cellphone: PhoneFormat,

    #[serde(default)]
    pub postalcode: PostalCodeFormat,

    #[serde(default)]
    pub email: EmailFormat,

    #[serde(default)]
    pub bankcard: BankCardFormat,

    #[serde(default)]
    pub personalid: PersonalIdFormat,

    #[serde(default)]
    pub organizationid: OrganizationIdFormat,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete validator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatorConfig {
    /// Default output shapes.
    #[serde(default)]
    pub formats: DefaultFormats,

    /// Personal identity number rules, also used for sole proprietorships.
    #[serde(default)]
    pub personal_id: PersonalIdRules,
}

impl FormatorConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from TOML text.
    ///
    /// Missing sections and keys take their defaults; unknown format tokens
    /// select the operation's `DEFAULT` shape.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: FormatorConfig = toml::from_str(text)?;
        debug!(?config, "Parsed formator config");
        Ok(config)
    }

    /// Loads configuration from optional TOML text, then the environment.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. TOML text
    /// 3. Environment variables
    pub fn load(text: Option<&str>) -> ConfigResult<Self> {
        let mut config = match text {
            Some(text) => Self::from_toml_str(text)?,
            None => Self::default(),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(text: Option<&str>) -> Self {
        Self::load(text).unwrap_or_else(|e| {
            warn!("Failed to load formator config: {}. Using defaults.", e);
            let mut config = Self::default();
            config.apply_env_overrides();
            config
        })
    }

    /// Renders the configuration as TOML, e.g. to seed a host's config file.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Applies overrides from process environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|var| std::env::var(var).ok());
    }

    /// Applies overrides from `lookup`, keyed by environment variable name.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let formats = &mut self.formats;

        if let Some(token) = lookup("FORMATOR_CELLPHONE_FORMAT") {
            formats.cellphone = PhoneFormat::from_token(&token);
            check_token(&token, formats.cellphone.token());
        }
        if let Some(token) = lookup("FORMATOR_POSTALCODE_FORMAT") {
            formats.postalcode = PostalCodeFormat::from_token(&token);
            check_token(&token, formats.postalcode.token());
        }
        if let Some(token) = lookup("FORMATOR_EMAIL_FORMAT") {
            formats.email = EmailFormat::from_token(&token);
            check_token(&token, formats.email.token());
        }
        if let Some(token) = lookup("FORMATOR_BANKCARD_FORMAT") {
            formats.bankcard = BankCardFormat::from_token(&token);
            check_token(&token, formats.bankcard.token());
        }
        if let Some(token) = lookup("FORMATOR_PERSONALID_FORMAT") {
            formats.personalid = PersonalIdFormat::from_token(&token);
            check_token(&token, formats.personalid.token());
        }
        if let Some(token) = lookup("FORMATOR_ORGANIZATIONID_FORMAT") {
            formats.organizationid = OrganizationIdFormat::from_token(&token);
            check_token(&token, formats.organizationid.token());
        }

        if let Some(value) = lookup("FORMATOR_CALENDAR") {
            match value.parse::<CalendarRule>() {
                Ok(rule) => {
                    debug!(calendar = %rule, "Overriding calendar rule from environment");
                    self.personal_id.calendar = rule;
                }
                Err(e) => warn!(error = %e, "Ignoring FORMATOR_CALENDAR"),
            }
        }

        if let Some(value) = lookup("FORMATOR_COORDINATION_NUMBERS") {
            match parse_flag(&value) {
                Ok(enabled) => {
                    debug!(enabled, "Overriding coordination number support from environment");
                    self.personal_id.coordination_numbers = enabled;
                }
                Err(e) => warn!(error = %e, "Ignoring FORMATOR_COORDINATION_NUMBERS"),
            }
        }
    }
}

/// Warns when an override token was not recognized and fell back to DEFAULT.
fn check_token(token: &str, resolved: &str) {
    if token != resolved {
        warn!(token = %token, "Unknown format token in environment, using DEFAULT");
    } else {
        debug!(format = %resolved, "Overriding default format from environment");
    }
}

fn parse_flag(value: &str) -> ConfigResult<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: "FORMATOR_COORDINATION_NUMBERS".to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = FormatorConfig::default();
        assert_eq!(config.formats.cellphone, PhoneFormat::Default);
        assert_eq!(config.personal_id.calendar, CalendarRule::Lenient);
        assert!(!config.personal_id.coordination_numbers);
    }

    #[test]
    fn test_from_toml() {
        let config = FormatorConfig::from_toml_str(
            r#"
            [formats]
            cellphone = "INT_FORMAT"
            bankcard = "SPACE"
            organizationid = "FULL"

            [personal_id]
            calendar = "strict"
            coordination_numbers = true
            "#,
        )
        .unwrap();

        assert_eq!(config.formats.cellphone, PhoneFormat::IntFormat);
        assert_eq!(config.formats.bankcard, BankCardFormat::Space);
        assert_eq!(config.formats.organizationid, OrganizationIdFormat::Full);
        assert_eq!(config.formats.email, EmailFormat::Default);
        assert_eq!(config.personal_id.calendar, CalendarRule::Strict);
        assert!(config.personal_id.coordination_numbers);
    }

    #[test]
    fn test_empty_and_partial_toml() {
        assert_eq!(
            FormatorConfig::from_toml_str("").unwrap(),
            FormatorConfig::default()
        );

        let config = FormatorConfig::from_toml_str("[personal_id]\ncoordination_numbers = true\n")
            .unwrap();
        assert_eq!(config.personal_id.calendar, CalendarRule::Lenient);
        assert!(config.personal_id.coordination_numbers);
    }

    #[test]
    fn test_unknown_token_in_toml_is_default() {
        let config = FormatorConfig::from_toml_str("[formats]\npostalcode = \"ZIP\"\n").unwrap();
        assert_eq!(config.formats.postalcode, PostalCodeFormat::Default);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(FormatorConfig::from_toml_str("[formats").is_err());
        assert!(FormatorConfig::from_toml_str("[personal_id]\ncalendar = \"exact\"\n").is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = FormatorConfig::default();
        config.apply_overrides(lookup_from(&[
            ("FORMATOR_EMAIL_FORMAT", "LOWERCASE"),
            ("FORMATOR_PERSONALID_FORMAT", "SHORT"),
            ("FORMATOR_CALENDAR", "strict"),
            ("FORMATOR_COORDINATION_NUMBERS", "yes"),
        ]));

        assert_eq!(config.formats.email, EmailFormat::Lowercase);
        assert_eq!(config.formats.personalid, PersonalIdFormat::Short);
        assert_eq!(config.personal_id.calendar, CalendarRule::Strict);
        assert!(config.personal_id.coordination_numbers);
    }

    #[test]
    fn test_bad_overrides_are_ignored() {
        let mut config = FormatorConfig::from_toml_str(
            "[formats]\nbankcard = \"DASH\"\n[personal_id]\ncalendar = \"strict\"\n",
        )
        .unwrap();
        config.apply_overrides(lookup_from(&[
            ("FORMATOR_CALENDAR", "exact"),
            ("FORMATOR_COORDINATION_NUMBERS", "maybe"),
            ("FORMATOR_BANKCARD_FORMAT", "DOTS"),
        ]));

        assert_eq!(config.personal_id.calendar, CalendarRule::Strict);
        assert!(!config.personal_id.coordination_numbers);
        // Unknown format tokens still resolve, to DEFAULT.
        assert_eq!(config.formats.bankcard, BankCardFormat::Default);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = FormatorConfig::default().to_toml_string().unwrap();
        assert!(toml_str.contains("[formats]"));
        assert!(toml_str.contains("[personal_id]"));
        assert!(toml_str.contains("cellphone = \"DEFAULT\""));

        let parsed = FormatorConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed, FormatorConfig::default());
    }
}
