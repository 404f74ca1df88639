//! Layered CLI configuration.
//!
//! Sources, lowest priority first:
//!
//! 1. built-in defaults
//! 2. `formcheck.toml` in the working directory, or the file given by `--config`
//! 3. `FORMCHECK_*` environment variables (e.g. `FORMCHECK_LOCALE=de`)
//! 4. command-line flags, applied by the subcommand
//!
//! ```toml
//! locale = "de"
//! format = "text"
//!
//! [messages]
//! required = "Please fill this in."
//!
//! [locales.de]
//! path = "locales/de.yaml"
//! extend = true
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "formcheck.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "FORMCHECK_";

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON `ValidationResult`.
    #[default]
    Json,
    /// One line per error.
    Text,
}

/// A locale catalog file to register before validating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSource {
    /// Catalog file (JSON, YAML or TOML map of rule name to template).
    pub path: PathBuf,
    /// Layer the catalog over the default language.
    #[serde(default = "extend_by_default")]
    pub extend: bool,
}

const fn extend_by_default() -> bool {
    true
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Locale to activate.
    pub locale: Option<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Engine-level message overrides.
    pub messages: HashMap<String, String>,
    /// Locale catalogs keyed by locale.
    pub locales: BTreeMap<String, LocaleSource>,
}

impl CliConfig {
    /// Loads the layered configuration.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.is_file() => {
                bail!("config file {} does not exist", path.display())
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        let mut config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(&file))
            .merge(Env::prefixed(ENV_PREFIX).only(&["locale", "format"]))
            .extract()
            .with_context(|| format!("invalid configuration (file: {})", file.display()))?;

        // Catalog paths are relative to the config file.
        let base = file.parent().unwrap_or_else(|| Path::new(""));
        for source in config.locales.values_mut() {
            if source.path.is_relative() {
                source.path = base.join(&source.path);
            }
        }

        tracing::debug!(
            file = %file.display(),
            locale = ?config.locale,
            locales = config.locales.len(),
            "configuration loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(CliConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn reads_file_and_resolves_catalog_paths() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("formcheck.toml");
        std::fs::write(
            &file,
            r#"
                locale = "de"
                format = "text"

                [messages]
                required = "Bitte ausfüllen."

                [locales.de]
                path = "de.yaml"
            "#,
        )
        .unwrap();

        let config = CliConfig::load(Some(&file)).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.messages["required"], "Bitte ausfüllen.");
        let de = &config.locales["de"];
        assert_eq!(de.path, dir.path().join("de.yaml"));
        assert!(de.extend);
    }
}
