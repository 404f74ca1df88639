//! Field and schema passes, synchronous and asynchronous.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use formcheck_validator::prelude::*;
use pretty_assertions::assert_eq;

fn validator() -> Validator {
    Validator::new(LocaleRegistry::new(), ValidatorOptions::new())
}

fn values(entries: &[(&str, FieldValue)]) -> ValueMap {
    entries
        .iter()
        .map(|(name, value)| ((*name).to_owned(), value.clone()))
        .collect()
}

fn rule_names(errors: &[ErrorEntry]) -> Vec<&str> {
    errors.iter().map(|entry| entry.rule.as_str()).collect()
}

/// Deferred rule that fails after yielding to the runtime.
fn slow_failure() -> CustomRule {
    CustomRule::deferred(|_, _, _| async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        false
    })
}

// ============================================================================
// CROSS-FIELD
// ============================================================================

#[test]
fn equal_to_reads_other_field() {
    let schema = Schema::new()
        .field("password", RuleSet::new().rule("required", true))
        .field("confirm", RuleSet::new().rule("equalTo", "password"));
    let validator = validator();

    let matching = values(&[("password", "x".into()), ("confirm", "x".into())]);
    assert!(validator.validate(&schema, &matching).valid);

    let differing = values(&[("password", "x".into()), ("confirm", "y".into())]);
    let result = validator.validate(&schema, &differing);
    assert!(!result.valid);
    assert_eq!(rule_names(result.field_errors("confirm")), ["equalTo"]);
    assert_eq!(
        result.first_message("confirm"),
        Some("This field must match password.")
    );
}

// ============================================================================
// SCHEMA AGGREGATION
// ============================================================================

#[test]
fn passing_fields_have_no_error_key() {
    let schema = Schema::new()
        .field("name", RuleSet::new().rule("required", true))
        .field("age", RuleSet::new().rule("min", 18))
        .field("nickname", RuleSet::new().rule("maxLength", 3));
    let data = values(&[("name", "Ada".into()), ("age", 12.into())]);

    let result = validator().validate(&schema, &data);
    assert!(!result.valid);
    assert_eq!(result.errors.keys().collect::<Vec<_>>(), ["age"]);
    assert_eq!(result.error_count(), 1);
}

#[test]
fn valid_is_and_of_fields() {
    let schema = Schema::new()
        .field("a", RuleSet::new().rule("required", true))
        .field("b", RuleSet::new().rule("email", true));
    let validator = validator();

    assert!(validator.validate(&schema, &values(&[("a", 1.into())])).valid);
    assert!(
        !validator
            .validate(&schema, &values(&[("a", 1.into()), ("b", "nope".into())]))
            .valid
    );
    assert!(!validator.validate(&schema, &ValueMap::new()).valid);
}

#[test]
fn errors_follow_declaration_order() {
    let rules = RuleSet::new()
        .rule("maxLength", 2)
        .rule("numeric", true)
        .rule("email", true);
    let errors = validator().validate_field(&"abc".into(), &rules, &ValueMap::new());
    assert_eq!(rule_names(&errors), ["maxLength", "numeric", "email"]);
}

#[test]
fn validate_is_idempotent() {
    let schema = Schema::new()
        .field("email", RuleSet::new().rule("required", true).rule("email", true))
        .field("card", RuleSet::new().rule("creditCard", true));
    let data = values(&[("email", "bad".into()), ("card", "1234".into())]);
    let validator = validator();

    assert_eq!(
        validator.validate(&schema, &data),
        validator.validate(&schema, &data)
    );
}

#[test]
fn schema_from_json() {
    let schema: Schema = serde_json::from_str(
        r#"{
            "username": {"required": true, "minLength": 3, "minLengthMessage": "Too short"},
            "role": {"in": ["admin", "user"]}
        }"#,
    )
    .unwrap();
    let data: ValueMap = serde_json::from_str(r#"{"username": "ab", "role": "guest"}"#).unwrap();

    let result = validator().validate(&schema, &data);
    assert_eq!(result.first_message("username"), Some("Too short"));
    assert_eq!(
        result.first_message("role"),
        Some("Please select one of: admin, user.")
    );
}

// ============================================================================
// ASYNC
// ============================================================================

#[tokio::test]
async fn sync_failures_precede_async_failures() {
    let mut validator = validator();
    validator
        .add_rule("customAsync", slow_failure(), "Not available")
        .unwrap();
    let rules = RuleSet::new()
        .rule("customAsync", true)
        .rule("required", true)
        .rule("minLength", 10);

    let errors = validator
        .validate_field_async(&"abc".into(), &rules, &ValueMap::new())
        .await;
    assert_eq!(rule_names(&errors), ["minLength", "customAsync"]);
    assert_eq!(errors[1].message, "Not available");
}

#[tokio::test]
async fn async_rule_short_circuits_on_empty() {
    let mut validator = validator();
    validator
        .add_rule("customAsync", slow_failure(), "Not available")
        .unwrap();
    let rules = RuleSet::new()
        .rule("required", true)
        .rule("customAsync", true);

    let errors = validator
        .validate_field_async(&"".into(), &rules, &ValueMap::new())
        .await;
    assert_eq!(rule_names(&errors), ["required"]);
}

#[tokio::test]
async fn deferred_rules_keep_declaration_order() {
    let mut validator = validator();
    validator
        .add_rule(
            "first",
            CustomRule::deferred(|_, _, _| async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                false
            }),
            "first",
        )
        .unwrap();
    validator
        .add_rule("second", CustomRule::deferred(|_, _, _| async { false }), "second")
        .unwrap();
    let rules = RuleSet::new().rule("first", true).rule("second", true);

    let errors = validator
        .validate_field_async(&"x".into(), &rules, &ValueMap::new())
        .await;
    assert_eq!(rule_names(&errors), ["first", "second"]);
}

#[tokio::test]
async fn predicates_are_invoked_once_per_pass() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut validator = validator();
    validator
        .add_rule(
            "counted",
            CustomRule::deferred(move |_, _, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                async { true }
            }),
            "counted",
        )
        .unwrap();
    let schema = Schema::new().field("f", RuleSet::new().rule("counted", true));
    let data = values(&[("f", "x".into())]);

    assert!(validator.validate_async(&schema, &data).await.valid);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn sync_and_async_schema_passes_differ_only_by_deferred_rules() {
    let mut validator = validator();
    validator
        .add_rule("taken", slow_failure(), "Username is taken")
        .unwrap();
    validator
        .add_rule(
            "even",
            CustomRule::sync(|value, _, _| value.to_number() % 2.0 == 0.0),
            "Must be even",
        )
        .unwrap();
    let schema = Schema::new()
        .field("username", RuleSet::new().rule("required", true).rule("taken", true))
        .field("count", RuleSet::new().rule("even", true));
    let data = values(&[("username", "ada".into()), ("count", 3.into())]);

    let sync = validator.validate(&schema, &data);
    assert_eq!(sync.errors.keys().collect::<Vec<_>>(), ["count"]);

    let full = validator.validate_async(&schema, &data).await;
    assert_eq!(full.errors.keys().collect::<Vec<_>>(), ["username", "count"]);
    assert_eq!(full.first_message("username"), Some("Username is taken"));
    assert_eq!(full.first_message("count"), Some("Must be even"));
}

#[tokio::test]
async fn validate_async_future_is_send() {
    fn assert_send<T: Send>(value: T) -> T {
        value
    }

    let validator = validator();
    let schema = Schema::new().field("a", RuleSet::new().rule("required", true));
    let data = ValueMap::new();
    let result = assert_send(validator.validate_async(&schema, &data)).await;
    assert!(!result.valid);
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

#[test]
fn unknown_rules_are_reported_not_failed() {
    let schema = Schema::new().field(
        "email",
        RuleSet::new().rule("required", true).rule("emial", true),
    );
    let validator = validator();

    let result = validator.validate(&schema, &values(&[("email", "ada@example.com".into())]));
    assert!(result.valid);

    let unknown = validator.check_schema(&schema);
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].rule, "emial");
}
