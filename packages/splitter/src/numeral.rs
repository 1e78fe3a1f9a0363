//! Chinese numeral conversion.
//!
//! Converts numerals such as "三百二十一" to integers. Used to read the
//! number out of 编/章/节/条 markers.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Result, SplitterError};

/// Glyph to value table, built once.
static NUMERAL_VALUES: LazyLock<HashMap<char, u64>> = LazyLock::new(|| {
    HashMap::from([
        ('零', 0),
        ('一', 1),
        ('二', 2),
        ('三', 3),
        ('四', 4),
        ('五', 5),
        ('六', 6),
        ('七', 7),
        ('八', 8),
        ('九', 9),
        ('十', 10),
        ('百', 100),
        ('千', 1_000),
        ('万', 10_000),
        ('亿', 100_000_000),
    ])
});

/// Values at or above this are units (十, 百, ...), below are digits.
const UNIT_THRESHOLD: u64 = 10;

/// Check whether `s` consists only of Chinese numeral glyphs.
///
/// The empty string is not a numeral.
///
/// # Examples
/// ```
/// use legal_splitter::numeral::is_chinese_numeral;
///
/// assert!(is_chinese_numeral("三百二十一"));
/// assert!(!is_chinese_numeral("第一"));
/// assert!(!is_chinese_numeral(""));
/// ```
#[must_use]
pub fn is_chinese_numeral(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| NUMERAL_VALUES.contains_key(&c))
}

/// Convert a Chinese numeral string to its integer value.
///
/// Single greedy pass: a digit directly followed by a unit is multiplied by
/// it and the unit position is skipped; a bare unit counts as itself; a
/// trailing digit is added as-is. Well-formedness is not checked, so "十十"
/// yields 20.
///
/// # Errors
/// `SplitterError::InvalidNumeral` if `s` is empty, contains a character
/// outside the glyph table, or the sum overflows `u64`.
///
/// # Examples
/// ```
/// use legal_splitter::numeral::convert;
///
/// assert_eq!(convert("十一").unwrap(), 11);
/// assert_eq!(convert("三百二十一").unwrap(), 321);
/// assert!(convert("").is_err());
/// ```
pub fn convert(s: &str) -> Result<u64> {
    let invalid = || SplitterError::InvalidNumeral(s.to_string());

    let values: Vec<u64> = s
        .chars()
        .map(|c| NUMERAL_VALUES.get(&c).copied())
        .collect::<Option<_>>()
        .ok_or_else(invalid)?;
    if values.is_empty() {
        return Err(invalid());
    }

    let mut result: u64 = 0;
    let mut skip_next = false;

    for (index, &current) in values.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }

        let term = if current >= UNIT_THRESHOLD {
            match index.checked_sub(1).map(|prev| values[prev]) {
                Some(prev) if prev < UNIT_THRESHOLD => prev.checked_mul(current),
                // Leading unit ("十" = 10) or consecutive units ("百亿")
                _ => Some(current),
            }
        } else {
            match values.get(index + 1) {
                Some(&next) if next >= UNIT_THRESHOLD => {
                    skip_next = true;
                    current.checked_mul(next)
                }
                _ => Some(current),
            }
        };

        result = term
            .and_then(|t| result.checked_add(t))
            .ok_or_else(invalid)?;
    }

    Ok(result)
}
