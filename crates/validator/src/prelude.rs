//! Prelude module for convenient imports.
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! let validator = Validator::default();
//! assert!(validator.has_rule("creditCard"));
//! ```

pub use crate::custom::{CustomRule, RuleMessage, Verdict};
pub use crate::engine::{Validator, ValidatorOptions};
pub use crate::error::ConfigError;
pub use crate::i18n::{LocaleRegistry, MessageMap};
pub use crate::result::{ErrorEntry, UnknownRule, ValidationResult};
pub use crate::schema::{RuleParam, RuleSet, Schema, ValueMap};
pub use crate::validators::BuiltinRule;
pub use crate::value::{FieldValue, FileInfo, FileList};
