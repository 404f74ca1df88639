//! IP address rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

static IPV4_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .unwrap()
});

// Loose: 2 to 8 colon-separated groups of up to four hex digits.
static IPV6_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9a-fA-F]{0,4}:){1,7}[0-9a-fA-F]{0,4}$").unwrap());

/// Four dot-separated octets in `0..=255`.
pub fn ipv4(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    IPV4_REGEX.is_match(&value.to_text())
}

/// Colon-grouped hex segments.
pub fn ipv6(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    IPV6_REGEX.is_match(&value.to_text())
}
