//! Built-in rules.
//!
//! Every rule is a plain predicate
//! `fn(&FieldValue, &RuleParam, &ValueMap) -> bool`. The emptiness
//! short-circuit is applied by the executor, so predicates assume a
//! non-empty value (except [`required`](nullable::required)).
//!
//! # Categories
//!
//! - **Presence**: `required`
//! - **Text**: `minLength`, `maxLength`, `pattern`, `alpha`, `alphanumeric`,
//!   `email`, `url`, `phone`, `hexColor`, `strongPassword`, `json`
//! - **Numbers**: `min`, `max`, `numeric`, `integer`, `creditCard`
//! - **Dates**: `date`, `dateMin`, `dateMax`
//! - **Other fields**: `equalTo`, `notEqualTo`
//! - **Sets**: `in`, `notIn`
//! - **Files**: `fileSize`, `fileType`
//! - **Network**: `ipv4`, `ipv6`
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::schema::{RuleParam, ValueMap};
//! use formcheck_validator::validators::BuiltinRule;
//!
//! let rule = BuiltinRule::from_name("minLength").unwrap();
//! assert!(rule.check(&"hello".into(), &RuleParam::from(3), &ValueMap::new()));
//! assert_eq!(rule.name(), "minLength");
//! ```

pub mod content;
pub mod credit_card;
pub mod cross_field;
pub mod files;
pub mod json_string;
pub mod length;
pub mod network;
pub mod nullable;
pub mod numeric;
pub mod password;
pub mod pattern;
pub mod phone;
pub mod range;
pub mod sets;
pub mod time;

crate::macros::builtin_rules! {
    /// Value is not empty.
    Required => "required" => nullable::required,
    /// Text has at least `param` characters.
    MinLength => "minLength" => length::min_length,
    /// Text has at most `param` characters.
    MaxLength => "maxLength" => length::max_length,
    /// Number is at least `param`.
    Min => "min" => range::min,
    /// Number is at most `param`.
    Max => "max" => range::max,
    /// Looks like an email address.
    Email => "email" => content::email,
    /// Absolute URL.
    Url => "url" => content::url,
    /// Matches a regular expression.
    Pattern => "pattern" => pattern::pattern,
    /// Numeric text.
    Numeric => "numeric" => numeric::numeric,
    /// Whole number.
    Integer => "integer" => numeric::integer,
    /// Letters only.
    Alpha => "alpha" => pattern::alpha,
    /// Letters and digits only.
    Alphanumeric => "alphanumeric" => pattern::alphanumeric,
    /// Loose phone number.
    Phone => "phone" => phone::phone,
    /// Valid calendar date.
    Date => "date" => time::date,
    /// Date on or after `param`.
    DateMin => "dateMin" => time::date_min,
    /// Date on or before `param`.
    DateMax => "dateMax" => time::date_max,
    /// Equals the field named by `param`.
    EqualTo => "equalTo" => cross_field::equal_to,
    /// Differs from the field named by `param`.
    NotEqualTo => "notEqualTo" => cross_field::not_equal_to,
    /// One of the listed tokens.
    In => "in" => sets::one_of,
    /// None of the listed tokens.
    NotIn => "notIn" => sets::not_in,
    /// Every file is at most `param` bytes.
    FileSize => "fileSize" => files::file_size,
    /// Every file has an allowed extension or MIME type.
    FileType => "fileType" => files::file_type,
    /// Card number with a valid Luhn checksum.
    CreditCard => "creditCard" => credit_card::credit_card,
    /// Mixed-class password of at least 8 characters.
    StrongPassword => "strongPassword" => password::strong_password,
    /// `#RGB` or `#RRGGBB`.
    HexColor => "hexColor" => content::hex_color,
    /// Dotted IPv4 address.
    Ipv4 => "ipv4" => network::ipv4,
    /// Colon-grouped IPv6 address.
    Ipv6 => "ipv6" => network::ipv6,
    /// JSON text.
    Json => "json" => json_string::json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_table() {
        for rule in BuiltinRule::ALL {
            assert_eq!(BuiltinRule::from_name(rule.name()), Some(*rule));
        }
        assert_eq!(BuiltinRule::ALL.len(), 28);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(BuiltinRule::from_name("Required"), None);
        assert_eq!(BuiltinRule::from_name("requiredMessage"), None);
    }

    #[test]
    fn test_display_uses_rule_name() {
        assert_eq!(BuiltinRule::In.to_string(), "in");
        assert_eq!(BuiltinRule::DateMin.to_string(), "dateMin");
    }
}
