//! # Domain Types
//!
//! Identifier kinds and the output-format specifiers of each validator.
//!
//! ## Format Tokens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Format Specifiers                               │
//! │                                                                         │
//! │  cellphone       DEFAULT 0701234567   INT_FORMAT +46701234567          │
//! │                  NAT_FORMAT 070-123 45 67                               │
//! │  postalcode      DEFAULT 12345        NAT_FORMAT 123 45                 │
//! │                  INT_FORMAT SE-123 45                                   │
//! │  email           DEFAULT as typed     UPPERCASE / LOWERCASE             │
//! │  bankcard        DEFAULT digits       SPACE / DASH groups of four       │
//! │  personalid      DEFAULT YYYYMMDDNNNN SHORT YYMMDD-NNNN                 │
//! │  organizationid  DEFAULT NNNNNN-NNNN  FULL 16NNNNNNNNNN                 │
//! │  vatid           always SE NNNNNNNNNN01                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient Tokens
//! Tokens come from form markup and host configuration. An unknown token is
//! never an error: it selects the operation's `Default` shape. The same rule
//! holds when deserializing, so a typo in config degrades to the default
//! instead of refusing to start.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ConfigError;

// =============================================================================
// Identifier Kind
// =============================================================================

/// The identifiers this crate validates.
///
/// Serialized with the operation names used by form markup
/// (`cellphone`, `postalcode`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Swedish mobile phone number.
    Cellphone,
    /// Swedish postal code.
    PostalCode,
    /// Email address.
    Email,
    /// Bank card number (ISO/IEC 7812).
    BankCard,
    /// Swedish personal identity number (personnummer).
    PersonalId,
    /// Swedish organization identity number (organisationsnummer).
    OrganizationId,
    /// Swedish VAT identification number (momsregistreringsnummer).
    VatId,
}

impl IdentifierKind {
    /// All kinds, in the order the operations are documented.
    pub const ALL: [IdentifierKind; 7] = [
        IdentifierKind::Cellphone,
        IdentifierKind::PostalCode,
        IdentifierKind::Email,
        IdentifierKind::BankCard,
        IdentifierKind::PersonalId,
        IdentifierKind::OrganizationId,
        IdentifierKind::VatId,
    ];

    /// Returns the operation name (`"postalcode"`, `"vatid"`, ...).
    pub const fn operation(&self) -> &'static str {
        match self {
            IdentifierKind::Cellphone => "cellphone",
            IdentifierKind::PostalCode => "postalcode",
            IdentifierKind::Email => "email",
            IdentifierKind::BankCard => "bankcard",
            IdentifierKind::PersonalId => "personalid",
            IdentifierKind::OrganizationId => "organizationid",
            IdentifierKind::VatId => "vatid",
        }
    }
}

/// Human-readable name, used in error messages.
impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdentifierKind::Cellphone => "mobile phone number",
            IdentifierKind::PostalCode => "postal code",
            IdentifierKind::Email => "email address",
            IdentifierKind::BankCard => "bank card number",
            IdentifierKind::PersonalId => "personal identity number",
            IdentifierKind::OrganizationId => "organization number",
            IdentifierKind::VatId => "VAT number",
        };
        f.write_str(name)
    }
}

impl FromStr for IdentifierKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        IdentifierKind::ALL
            .into_iter()
            .find(|kind| kind.operation() == name)
            .ok_or_else(|| ConfigError::UnknownKind(s.to_string()))
    }
}

// =============================================================================
// Format Specifiers
// =============================================================================

/// Declares a format enum with a `Default` variant plus the listed ones.
///
/// Variant names are chosen so that `SCREAMING_SNAKE_CASE` yields the token
/// (`IntFormat` -> `INT_FORMAT`).
macro_rules! format_specifier {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, TS)]
        #[ts(export)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            /// The operation's default output shape.
            #[default]
            Default,
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Resolves a format token. Unknown tokens select `Default`.
            pub fn from_token(token: &str) -> Self {
                match token {
                    $( $token => $name::$variant, )+
                    _ => $name::Default,
                }
            }

            /// Resolves an optional token; absent selects `Default`.
            pub fn from_optional_token(token: Option<&str>) -> Self {
                token.map(Self::from_token).unwrap_or_default()
            }

            /// Returns the token naming this format.
            pub const fn token(&self) -> &'static str {
                match self {
                    $name::Default => "DEFAULT",
                    $( $name::$variant => $token, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let token = String::deserialize(deserializer)?;
                Ok($name::from_token(&token))
            }
        }
    };
}

format_specifier! {
    /// Output shape of [`crate::cellphone`].
    PhoneFormat {
        /// E.164, `+46NNNNNNNNN`.
        IntFormat => "INT_FORMAT",
        /// National grouping, `0NN-NNN NN NN`.
        NatFormat => "NAT_FORMAT",
    }
}

format_specifier! {
    /// Output shape of [`crate::postal_code`].
    PostalCodeFormat {
        /// `NNN NN`.
        NatFormat => "NAT_FORMAT",
        /// `SE-NNN NN`.
        IntFormat => "INT_FORMAT",
    }
}

format_specifier! {
    /// Output shape of [`crate::email`].
    EmailFormat {
        Uppercase => "UPPERCASE",
        Lowercase => "LOWERCASE",
    }
}

format_specifier! {
    /// Output shape of [`crate::bank_card`].
    BankCardFormat {
        /// Groups of four separated by `' '`.
        Space => "SPACE",
        /// Groups of four separated by `'-'`.
        Dash => "DASH",
    }
}

format_specifier! {
    /// Output shape of [`crate::personal_id`].
    PersonalIdFormat {
        /// `YYMMDD-NNNN`, or `YYMMDD+NNNN` for people aged 100 or more.
        Short => "SHORT",
    }
}

format_specifier! {
    /// Output shape of [`crate::organization_id`].
    OrganizationIdFormat {
        /// Twelve digits without separator.
        Full => "FULL",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
