//! Document loading by file extension.
//!
//! `.yaml`/`.yml` read as YAML, `.toml` as TOML, everything else as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Input document syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Json,
    Yaml,
    Toml,
}

impl Syntax {
    /// Picks the syntax from the file extension.
    pub fn of(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Reads and deserializes `path`.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_document(&text, Syntax::of(path))
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Deserializes `text` in the given syntax.
pub fn parse_document<T: DeserializeOwned>(text: &str, syntax: Syntax) -> Result<T> {
    let value = match syntax {
        Syntax::Json => serde_json::from_str(text)?,
        Syntax::Yaml => serde_yaml::from_str(text)?,
        Syntax::Toml => toml::from_str(text)?,
    };
    Ok(value)
}
