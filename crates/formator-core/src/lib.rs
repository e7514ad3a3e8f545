//! # formator-core: Swedish Form-Data Validators
//!
//! Validates and normalizes the identifiers a Swedish checkout or signup
//! form collects. Every operation takes raw user input plus an output-format
//! specifier and returns either the normalized string or a typed rejection.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Form Validation Flow                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Host application (web form)                    │   │
//! │  │    field value + format token  ──►  normalized value | error    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ formator-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌──────────┐  │   │
//! │  │   │ cellphone │  │postal_code│  │personal_id │  │  digits  │  │   │
//! │  │   │   email   │  │ bank_card │  │organization│  │ checksum │  │   │
//! │  │   │           │  │           │  │   vat_id   │  │  clock   │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • TODAY'S DATE VIA Clock       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`phone`], [`mod@postal_code`], [`mod@email`], [`mod@bank_card`] - Stand-alone validators
//! - [`mod@personal_id`], [`mod@organization_id`], [`mod@vat_id`] - Identity numbers, layered
//! - [`digits`], [`checksum`] - Digit extraction and the Luhn check
//! - [`clock`] - Source of "today" for century inference
//! - [`config`], [`formator`] - Configured default formats and the facade
//! - [`error`] - Rejection causes
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Given the same input, format and date, the result is the same
//! 2. **Digits First**: Identity inputs are reduced to their ASCII digits before any check
//! 3. **Typed Rejections**: A failure is a [`FormatError`], never a `false` or a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use formator_core::{bank_card, cellphone, postal_code};
//! use formator_core::{BankCardFormat, PhoneFormat, PostalCodeFormat};
//!
//! assert_eq!(
//!     cellphone("070-123 45 67", PhoneFormat::IntFormat).unwrap(),
//!     "+46701234567"
//! );
//! assert_eq!(
//!     postal_code("113 51", PostalCodeFormat::IntFormat).unwrap(),
//!     "SE-113 51"
//! );
//! assert_eq!(
//!     bank_card("4539148803436467", BankCardFormat::Space).unwrap(),
//!     "4539 1488 0343 6467"
//! );
//! assert!(postal_code("32100", PostalCodeFormat::Default).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bank_card;
pub mod checksum;
pub mod clock;
pub mod config;
pub mod digits;
pub mod email;
pub mod error;
pub mod formator;
pub mod organization_id;
pub mod personal_id;
pub mod phone;
pub mod postal_code;
pub mod types;
pub mod vat_id;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use formator_core::personal_id` instead of
// `use formator_core::personal_id::personal_id`

pub use bank_card::bank_card;
pub use checksum::luhn;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DefaultFormats, FormatorConfig};
pub use email::email;
pub use error::{ConfigError, ConfigResult, FailureCode, FormatError, FormatResult};
pub use formator::Formator;
pub use organization_id::{organization_id, organization_id_on};
pub use personal_id::{
    infer_century, personal_id, personal_id_on, CalendarRule, PersonalIdRules, Separator,
};
pub use phone::cellphone;
pub use postal_code::postal_code;
pub use types::*;
pub use vat_id::{vat_id, vat_id_on};
