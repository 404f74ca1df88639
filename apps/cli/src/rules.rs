//! `formcheck rules`: list built-in rules with their default message.

use anyhow::Result;
use formcheck_validator::prelude::*;

pub fn run() -> Result<u8> {
    let registry = LocaleRegistry::shared();
    let locale = registry.default_locale();
    for rule in BuiltinRule::ALL {
        let template = registry.template(&locale, rule.name()).unwrap_or_default();
        println!("{:<16} {template}", rule.name());
    }
    Ok(0)
}
