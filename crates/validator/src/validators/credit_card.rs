//! Card number rule: 13 to 19 digits with a valid Luhn checksum.

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

/// Whitespace is ignored; anything else must be a digit.
///
/// # Examples
///
/// ```
/// use formcheck_validator::schema::{RuleParam, ValueMap};
/// use formcheck_validator::validators::credit_card::credit_card;
///
/// let (on, all) = (RuleParam::Flag(true), ValueMap::new());
/// assert!(credit_card(&"4532 0151 1283 0366".into(), &on, &all));
/// assert!(!credit_card(&"4532015112830367".into(), &on, &all));
/// ```
pub fn credit_card(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    let digits: String = value
        .to_text()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    (13..=19).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
        && luhn(&digits)
}

/// Luhn checksum over ASCII digits.
///
/// Every second digit from the right is doubled, with 9 subtracted when the
/// double exceeds 9; the total must be a multiple of 10.
pub(crate) fn luhn(digits: &str) -> bool {
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ON: RuleParam = RuleParam::Flag(true);

    #[test]
    fn test_luhn() {
        assert!(luhn("4532015112830366"));
        assert!(!luhn("4532015112830367"));
        assert!(luhn("4111111111111111"));
        assert!(luhn("5555555555554444"));
    }

    #[test]
    fn test_credit_card_shape() {
        let all = ValueMap::new();
        assert!(credit_card(&"4111 1111 1111 1111".into(), &ON, &all));
        assert!(!credit_card(&"4111-1111-1111-1111".into(), &ON, &all));
        assert!(!credit_card(&"0".into(), &ON, &all));
        assert!(!credit_card(&"00000000000000000000".into(), &ON, &all));
    }
}
