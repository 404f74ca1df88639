//! `formcheck check`: find rule names that resolve to nothing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use formcheck_validator::prelude::*;

use crate::load::read_document;

/// Arguments of `formcheck check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema file to inspect.
    #[arg(long)]
    pub schema: PathBuf,
}

/// Prints every unresolvable `field.rule`. Returns `1` if there is any.
pub fn run(args: &CheckArgs) -> Result<u8> {
    let schema: Schema = read_document(&args.schema).context("failed to load schema")?;
    let unknown = Validator::default().check_schema(&schema);

    if unknown.is_empty() {
        println!("ok: {} fields, all rules resolve", schema.len());
        return Ok(0);
    }
    for UnknownRule { field, rule } in &unknown {
        println!("{field}: unknown rule '{rule}'");
    }
    Ok(1)
}
