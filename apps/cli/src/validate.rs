//! `formcheck validate`: run a schema against a values file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use formcheck_validator::prelude::*;

use crate::config::{CliConfig, LocaleSource, OutputFormat};
use crate::load::read_document;
use crate::render::render;

/// Arguments of `formcheck validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema file: field name → rule set.
    #[arg(long)]
    pub schema: PathBuf,

    /// Values file: field name → value.
    #[arg(long)]
    pub values: PathBuf,

    /// Locale to activate (overrides the config file).
    #[arg(long)]
    pub locale: Option<String>,

    /// Register a locale catalog before validating. Repeatable.
    #[arg(long = "locale-file", value_name = "KEY=FILE", value_parser = parse_pair::<PathBuf>)]
    pub locale_files: Vec<(String, PathBuf)>,

    /// Store `--locale-file` catalogs as given instead of layering them over
    /// the default language.
    #[arg(long)]
    pub no_extend: bool,

    /// Override the message of one rule. Repeatable.
    #[arg(long = "message", value_name = "RULE=TEXT", value_parser = parse_pair::<String>)]
    pub messages: Vec<(String, String)>,

    /// Output format (overrides the config file).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Parses `KEY=VALUE`.
fn parse_pair<T>(raw: &str) -> Result<(String, T), String>
where
    T: From<String>,
{
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_owned(), T::from(value.to_owned())))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Executes the subcommand. Returns `0` when valid and `1` when not.
pub async fn run(args: &ValidateArgs, config_path: Option<&Path>) -> Result<u8> {
    let mut config = CliConfig::load(config_path)?;
    apply_flags(&mut config, args);

    let registry = LocaleRegistry::shared();
    for (key, source) in &config.locales {
        let catalog: MessageMap = read_document(&source.path)
            .with_context(|| format!("failed to load catalog for locale '{key}'"))?;
        registry.register_locale(key.clone(), catalog, source.extend);
    }

    let options = ValidatorOptions {
        locale: None,
        messages: config.messages.clone(),
    };
    let mut validator = Validator::new(registry, options);
    if let Some(locale) = &config.locale {
        validator.set_locale(locale)?;
    }

    let schema: Schema = read_document(&args.schema).context("failed to load schema")?;
    let values: ValueMap = read_document(&args.values).context("failed to load values")?;
    tracing::info!(
        fields = schema.len(),
        values = values.len(),
        locale = validator.locale(),
        "validating"
    );

    let result = validator.validate_async(&schema, &values).await;
    println!("{}", render(&result, config.format)?);
    Ok(u8::from(!result.valid))
}

/// Applies command-line flags over the loaded configuration.
fn apply_flags(config: &mut CliConfig, args: &ValidateArgs) {
    if let Some(locale) = &args.locale {
        config.locale = Some(locale.clone());
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    for (rule, text) in &args.messages {
        config.messages.insert(rule.clone(), text.clone());
    }
    for (key, path) in &args.locale_files {
        config.locales.insert(
            key.clone(),
            LocaleSource {
                path: path.clone(),
                extend: !args.no_extend,
            },
        );
    }
}
