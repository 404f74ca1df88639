//! # formcheck-validator
//!
//! A schema-driven value validation engine.
//!
//! A [`Schema`](schema::Schema) maps field names to [`RuleSet`](schema::RuleSet)s.
//! A [`Validator`](engine::Validator) runs each field's rules against a
//! [`ValueMap`](schema::ValueMap) and reports failures as localized,
//! interpolated messages in a [`ValidationResult`](result::ValidationResult).
//!
//! ## Quick Start
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! let schema = Schema::new()
//!     .field("email", RuleSet::new().rule("required", true).rule("email", true))
//!     .field(
//!         "confirm",
//!         RuleSet::new()
//!             .rule("equalTo", "email")
//!             .label("email", "your email"),
//!     );
//!
//! let values = ValueMap::from([
//!     ("email".to_owned(), FieldValue::from("ada@example.com")),
//!     ("confirm".to_owned(), FieldValue::from("ada@example.org")),
//! ]);
//!
//! let result = Validator::default().validate(&schema, &values);
//! assert!(!result.valid);
//! assert_eq!(result.first_message("confirm"), Some("This field must match your email."));
//! ```
//!
//! ## Custom Rules
//!
//! Register a [`CustomRule`](custom::CustomRule) with
//! [`Validator::add_rule`](engine::Validator::add_rule). Rules answering with
//! a deferred verdict are only observed by
//! [`Validator::validate_async`](engine::Validator::validate_async).
//!
//! ## Locales
//!
//! Templates live in a shared [`LocaleRegistry`](i18n::LocaleRegistry)
//! seeded with English. Register more with
//! [`register_locale`](i18n::LocaleRegistry::register_locale).

pub mod custom;
pub mod engine;
pub mod error;
pub mod executor;
pub mod i18n;
mod macros;
pub mod message;
pub mod prelude;
pub mod result;
pub mod schema;
pub mod validators;
pub mod value;
