//! Result printing.

use std::fmt::Write as _;

use anyhow::Result;
use formcheck_validator::result::ValidationResult;

use crate::config::OutputFormat;

/// Renders a result in the requested format, without a trailing newline.
pub fn render(result: &ValidationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(render_text(result)),
    }
}

fn render_text(result: &ValidationResult) -> String {
    if result.valid {
        return "valid".to_owned();
    }

    let count = result.error_count();
    let mut out = format!(
        "invalid: {count} error{}",
        if count == 1 { "" } else { "s" }
    );
    for (field, errors) in &result.errors {
        for entry in errors {
            let _ = write!(out, "\n{field} [{}]: {}", entry.rule, entry.message);
        }
    }
    out
}
