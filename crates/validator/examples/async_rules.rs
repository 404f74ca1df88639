//! Custom rules with deferred verdicts and a second locale.

use std::time::Duration;

use formcheck_validator::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ConfigError> {
    let registry = LocaleRegistry::shared();
    registry.register_locale(
        "de",
        MessageMap::from([(
            "minLength".to_owned(),
            "Bitte mindestens {min} Zeichen eingeben.".to_owned(),
        )]),
        true,
    );

    let mut validator = Validator::with_locale("de");
    validator.add_rule(
        "available",
        CustomRule::deferred(|value, _, _| {
            let name = value.to_text();
            async move {
                // Stand-in for a lookup against a user store.
                tokio::time::sleep(Duration::from_millis(10)).await;
                !matches!(name.as_str(), "admin" | "root")
            }
        }),
        [("en", "This name is taken."), ("de", "Dieser Name ist vergeben.")],
    )?;

    let schema = Schema::new().field(
        "username",
        RuleSet::new()
            .rule("available", true)
            .rule("minLength", 6),
    );
    let values = ValueMap::from([("username".to_owned(), FieldValue::from("root"))]);

    let quick = validator.validate(&schema, &values);
    println!("sync pass:  {} error(s)", quick.error_count());

    let full = validator.validate_async(&schema, &values).await;
    for entry in full.field_errors("username") {
        println!("async pass: {} -> {}", entry.rule, entry.message);
    }
    Ok(())
}
