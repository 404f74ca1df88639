//! Basic usage example for formcheck-validator

use formcheck_validator::prelude::*;

fn main() {
    let schema = Schema::new()
        .field(
            "username",
            RuleSet::new()
                .rule("required", true)
                .rule("minLength", 3)
                .rule("alphanumeric", true),
        )
        .field("email", RuleSet::new().rule("required", true).rule("email", true))
        .field("password", RuleSet::new().rule("strongPassword", true))
        .field(
            "confirm",
            RuleSet::new()
                .rule("equalTo", "password")
                .label("password", "the password"),
        );

    let values = ValueMap::from([
        ("username".to_owned(), FieldValue::from("al")),
        ("email".to_owned(), FieldValue::from("al@example")),
        ("password".to_owned(), FieldValue::from("Secret1!")),
        ("confirm".to_owned(), FieldValue::from("Secret2!")),
    ]);

    let result = Validator::default().validate(&schema, &values);
    if result.valid {
        println!("✓ all fields are valid");
        return;
    }

    for (field, errors) in &result.errors {
        for entry in errors {
            println!("✗ {field} ({}): {}", entry.rule, entry.message);
        }
    }
}
