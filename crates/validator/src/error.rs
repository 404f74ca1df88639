//! Configuration errors.
//!
//! Data that fails a rule is not an error: it is reported through
//! [`ValidationResult`](crate::result::ValidationResult). The variants here
//! abort the call that triggered them.

/// A caller mistake detected while configuring an engine or a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A locale was activated before being registered.
    #[error("locale '{0}' is not registered")]
    UnknownLocale(String),

    /// A custom rule name cannot be used.
    #[error("invalid custom rule name '{name}': {reason}")]
    InvalidRuleName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A rule parameter has a shape no rule accepts.
    #[error("invalid rule parameter: {0}")]
    InvalidParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConfigError::UnknownLocale("xx".into());
        assert_eq!(err.to_string(), "locale 'xx' is not registered");

        let err = ConfigError::InvalidRuleName {
            name: String::new(),
            reason: "name must not be empty",
        };
        assert!(err.to_string().contains("must not be empty"));
    }
}
