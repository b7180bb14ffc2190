use std::fmt;

use serde::Deserializer;
use serde::de::{self, Visitor};

/// Lenient amount parse used at the input boundary.
///
/// Skips leading whitespace, accepts an optional sign and reads the leading
/// run of decimal digits, ignoring whatever follows (`"12.5"` is 12,
/// `"7 bags"` is 7). Input with no leading digits reads as 0, negative
/// amounts clamp to 0 and values past `u64::MAX` saturate.
#[must_use]
pub fn parse_amount(input: &str) -> u64 {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if negative || digits.is_empty() {
        return 0;
    }

    digits
        .bytes()
        .fold(0u64, |acc, b| acc.saturating_mul(10).saturating_add(u64::from(b - b'0')))
}

fn amount_from_float(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        // `as` saturates at u64::MAX
        value.trunc() as u64
    }
}

/// Serde hook for amount fields: accepts integers, floats, numeric strings
/// and null, normalizing them the same way [`parse_amount`] does.
pub(super) fn deserialize_amount<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AmountVisitor)
}

struct AmountVisitor;

impl Visitor<'_> for AmountVisitor {
    type Value = u64;

    fn expecting(
        &self,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        formatter.write_str("an amount as a number or numeric string")
    }

    fn visit_u64<E: de::Error>(
        self,
        value: u64,
    ) -> Result<u64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(
        self,
        value: i64,
    ) -> Result<u64, E> {
        Ok(u64::try_from(value).unwrap_or(0))
    }

    fn visit_f64<E: de::Error>(
        self,
        value: f64,
    ) -> Result<u64, E> {
        Ok(amount_from_float(value))
    }

    fn visit_str<E: de::Error>(
        self,
        value: &str,
    ) -> Result<u64, E> {
        Ok(parse_amount(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }
}
