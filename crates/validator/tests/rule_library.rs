//! Built-in rules exercised through the engine.

use formcheck_validator::prelude::*;
use rstest::rstest;

fn passes(rule: &str, param: RuleParam, value: FieldValue) -> bool {
    let validator = Validator::new(LocaleRegistry::new(), ValidatorOptions::new());
    let rules = RuleSet::new().rule(rule, param);
    validator
        .validate_field(&value, &rules, &ValueMap::new())
        .is_empty()
}

#[rstest]
#[case::required_text("required", true.into(), "x".into(), true)]
#[case::required_zero("required", true.into(), 0.into(), true)]
#[case::required_false("required", true.into(), false.into(), true)]
#[case::required_zero_text("required", true.into(), "0".into(), true)]
#[case::required_blank("required", true.into(), "  ".into(), false)]
#[case::required_null("required", true.into(), FieldValue::Null, false)]
#[case::required_empty_list("required", true.into(), FieldValue::List(vec![]), false)]
#[case::required_no_files("required", true.into(), FieldValue::files([]), false)]
#[case::min_length_ok("minLength", 3.into(), "abc".into(), true)]
#[case::min_length_short("minLength", 3.into(), "ab".into(), false)]
#[case::max_length_ok("maxLength", 3.into(), "abc".into(), true)]
#[case::max_length_long("maxLength", 3.into(), "abcd".into(), false)]
#[case::min_ok("min", 18.into(), "18".into(), true)]
#[case::min_low("min", 18.into(), 17.into(), false)]
#[case::min_not_number("min", 18.into(), "old".into(), false)]
#[case::max_ok("max", 10.into(), 9.5.into(), true)]
#[case::max_high("max", 10.into(), 11.into(), false)]
#[case::email_ok("email", true.into(), "user@example.com".into(), true)]
#[case::email_no_tld("email", true.into(), "user@example".into(), false)]
#[case::email_space("email", true.into(), "us er@example.com".into(), false)]
#[case::url_ok("url", true.into(), "https://example.com/path?q=1".into(), true)]
#[case::url_relative("url", true.into(), "example.com".into(), false)]
#[case::pattern_ok("pattern", "^[A-Z]{3}$".into(), "ABC".into(), true)]
#[case::pattern_miss("pattern", "^[A-Z]{3}$".into(), "abc".into(), false)]
#[case::pattern_invalid_skipped("pattern", "([".into(), "anything".into(), true)]
#[case::numeric_ok("numeric", true.into(), "-12.5".into(), true)]
#[case::numeric_bad("numeric", true.into(), "12abc".into(), false)]
#[case::integer_ok("integer", true.into(), "42".into(), true)]
#[case::integer_fraction("integer", true.into(), 4.2.into(), false)]
#[case::alpha_unicode("alpha", true.into(), "Größe".into(), true)]
#[case::alpha_digits("alpha", true.into(), "abc1".into(), false)]
#[case::alphanumeric_ok("alphanumeric", true.into(), "abc123".into(), true)]
#[case::alphanumeric_space("alphanumeric", true.into(), "abc 123".into(), false)]
#[case::phone_ok("phone", true.into(), "+1 (555) 123-4567".into(), true)]
#[case::phone_letters("phone", true.into(), "555-CALL-NOW".into(), false)]
#[case::date_ok("date", true.into(), "2024-02-29".into(), true)]
#[case::date_bad("date", true.into(), "2023-02-29".into(), false)]
#[case::date_min_ok("dateMin", "2024-01-01".into(), "2024-06-01".into(), true)]
#[case::date_min_early("dateMin", "2024-01-01".into(), "2023-06-01".into(), false)]
#[case::date_max_ok("dateMax", "2024-01-01".into(), "2024-01-01".into(), true)]
#[case::in_ok("in", "red,green".into(), "green".into(), true)]
#[case::in_miss("in", ["red", "green"].into(), "blue".into(), false)]
#[case::not_in_ok("notIn", "admin,root".into(), "ada".into(), true)]
#[case::not_in_hit("notIn", "admin,root".into(), "root".into(), false)]
#[case::credit_card_ok("creditCard", true.into(), "4532015112830366".into(), true)]
#[case::credit_card_bad("creditCard", true.into(), "4532015112830367".into(), false)]
#[case::strong_password_ok("strongPassword", true.into(), "Abcdef1!".into(), true)]
#[case::strong_password_lower("strongPassword", true.into(), "abcdefgh".into(), false)]
#[case::strong_password_upper("strongPassword", true.into(), "ABCDEFG1".into(), false)]
#[case::strong_password_no_special("strongPassword", true.into(), "Abcdefg1".into(), false)]
#[case::strong_password_short("strongPassword", true.into(), "Ab1!".into(), false)]
#[case::hex_color_short("hexColor", true.into(), "#fa0".into(), true)]
#[case::hex_color_long("hexColor", true.into(), "#FFAA00".into(), true)]
#[case::hex_color_bad("hexColor", true.into(), "#ffaa0".into(), false)]
#[case::ipv4_ok("ipv4", true.into(), "10.0.0.255".into(), true)]
#[case::ipv4_bad("ipv4", true.into(), "10.0.0.256".into(), false)]
#[case::ipv6_ok("ipv6", true.into(), "fe80::1".into(), true)]
#[case::ipv6_bad("ipv6", true.into(), "fe80:::zz".into(), false)]
#[case::json_ok("json", true.into(), r#"{"a": [1, 2]}"#.into(), true)]
#[case::json_bad("json", true.into(), "{a: 1}".into(), false)]
fn builtin_rule(
    #[case] rule: &str,
    #[case] param: RuleParam,
    #[case] value: FieldValue,
    #[case] expected: bool,
) {
    assert_eq!(passes(rule, param, value), expected, "{rule}");
}

#[rstest]
#[case::size_ok(2_000_000.into(), true)]
#[case::size_too_big(1_000_000.into(), false)]
fn file_size_checks_every_file(#[case] max: RuleParam, #[case] expected: bool) {
    let files = FieldValue::files([
        FileInfo::new("a.png", 500_000, "image/png"),
        FileInfo::new("b.png", 1_500_000, "image/png"),
    ]);
    assert_eq!(passes("fileSize", max, files), expected);
}

#[rstest]
#[case::extension("pdf", true)]
#[case::dotted_extension(".PDF", true)]
#[case::mime_wildcard("application/*", true)]
#[case::other("png,jpg", false)]
fn file_type_tokens(#[case] types: &str, #[case] expected: bool) {
    let files = FieldValue::files([FileInfo::new("Report.pdf", 10, "application/pdf")]);
    assert_eq!(passes("fileType", types.into(), files), expected);
}

#[rstest]
#[case::min_length("minLength", 5.into())]
#[case::email("email", true.into())]
#[case::date("date", true.into())]
#[case::credit_card("creditCard", true.into())]
#[case::equal_to("equalTo", "other".into())]
#[case::file_type("fileType", "pdf".into())]
fn empty_values_pass_non_required_rules(#[case] rule: &str, #[case] param: RuleParam) {
    for value in [
        FieldValue::Null,
        FieldValue::from(""),
        FieldValue::from("   "),
        FieldValue::List(vec![]),
        FieldValue::files([]),
    ] {
        assert!(passes(rule, param.clone(), value.clone()), "{rule} on {value:?}");
    }
}

#[test]
fn every_builtin_is_resolvable() {
    let validator = Validator::new(LocaleRegistry::new(), ValidatorOptions::new());
    for rule in BuiltinRule::ALL {
        assert!(validator.has_rule(rule.name()));
    }
}
