//! Text format rules: email, URL, hex color.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

// ============================================================================
// EMAIL
// ============================================================================

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn email(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    EMAIL_REGEX.is_match(&value.to_text())
}

// ============================================================================
// URL
// ============================================================================

/// Parses as an absolute URL; the scheme is mandatory.
pub fn url(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    url::Url::parse(&value.to_text()).is_ok()
}

// ============================================================================
// HEX COLOR
// ============================================================================

/// `#RGB` or `#RRGGBB`.
pub fn hex_color(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    HEX_COLOR_REGEX.is_match(&value.to_text())
}
