//! # Error Types
//!
//! Domain-specific error types for formator-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  formator-core errors (this file)                                      │
//! │  ├── FormatError   - Why an identifier was rejected                    │
//! │  │   ├── InvalidType      (untyped boundary only)                      │
//! │  │   ├── InvalidLength    (digit count)                                │
//! │  │   ├── InvalidChecksum  (Luhn)                                       │
//! │  │   ├── InvalidRange     (month, day, postal range, prefix)           │
//! │  │   └── InvalidShape     (email)                                      │
//! │  └── ConfigError   - Configuration text or environment is unusable     │
//! │                                                                         │
//! │  Flow: FormatError → { code, message } → form front-end               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. A rejection is a value, never a panic and never a `false` sentinel
//! 3. Only structural context is attached (kind, digit count, field name)

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;
use ts_rs::TS;

use crate::types::IdentifierKind;

// =============================================================================
// Format Error
// =============================================================================

/// Why an input was rejected by one of the validators.
///
/// There is no partial success: an operation either returns the normalized
/// value or exactly one of these causes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input is not character data.
    ///
    /// ## When This Occurs
    /// Only at the untyped boundary ([`crate::Formator::validate_value`]),
    /// e.g. a JSON form payload carrying a number or `null` for a field.
    /// The typed functions take `&str` and can never produce it.
    #[error("{kind} must be text, got {found}")]
    InvalidType {
        kind: IdentifierKind,
        found: &'static str,
    },

    /// Digit count does not match any accepted length.
    #[error("{kind} has {found} digits, expected {expected}")]
    InvalidLength {
        kind: IdentifierKind,
        found: usize,
        expected: &'static str,
    },

    /// Luhn checksum fails on the relevant digit span.
    #[error("{kind} fails the Luhn checksum")]
    InvalidChecksum { kind: IdentifierKind },

    /// A structural field falls outside its allowed range.
    ///
    /// ## When This Occurs
    /// - Postal code below 10000, above 99000, or in an excluded series
    /// - Month outside 1-12, day outside the month table
    /// - Phone number without a recognized mobile prefix
    #[error("{kind} has an invalid {field}")]
    InvalidRange {
        kind: IdentifierKind,
        field: &'static str,
    },

    /// Email fails the minimal shape, single-`@` or length rule.
    #[error("email address is not of the form name@domain.tld")]
    InvalidShape,
}

impl FormatError {
    /// Returns the machine-readable failure code.
    pub fn code(&self) -> FailureCode {
        match self {
            FormatError::InvalidType { .. } => FailureCode::InvalidType,
            FormatError::InvalidLength { .. } => FailureCode::InvalidLength,
            FormatError::InvalidChecksum { .. } => FailureCode::InvalidChecksum,
            FormatError::InvalidRange { .. } => FailureCode::InvalidRange,
            FormatError::InvalidShape => FailureCode::InvalidShape,
        }
    }

    /// Returns the identifier the error was raised for.
    pub fn kind(&self) -> IdentifierKind {
        match self {
            FormatError::InvalidType { kind, .. }
            | FormatError::InvalidLength { kind, .. }
            | FormatError::InvalidChecksum { kind }
            | FormatError::InvalidRange { kind, .. } => *kind,
            FormatError::InvalidShape => IdentifierKind::Email,
        }
    }
}

/// Serialized as `{ "code": "INVALID_CHECKSUM", "message": "..." }` so a form
/// front-end can branch on the code and show the message.
impl Serialize for FormatError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("FormatError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Failure codes for form front-ends.
///
/// ## Usage in Frontend
/// ```typescript
/// switch (e.code) {
///   case 'INVALID_CHECKSUM':
///     showFieldError('Check the last digit');
///     break;
///   default:
///     showFieldError(e.message);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureCode {
    InvalidType,
    InvalidLength,
    InvalidChecksum,
    InvalidRange,
    InvalidShape,
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config text is not valid TOML or has the wrong shape.
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config could not be rendered as TOML.
    #[error("Failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: String, value: String },

    /// Name does not denote one of the supported identifiers.
    #[error("Unknown identifier kind: '{0}'. Valid options: cellphone, postalcode, email, bankcard, personalid, organizationid, vatid")]
    UnknownKind(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result of a validation: the normalized value or the rejection cause.
pub type FormatResult<T> = Result<T, FormatError>;

/// Result of loading configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
