// Module name shadows the `serde` crate; use `::serde` for the external crate.
//! Lenient numeric decoding for store rows.
//!
//! PostgreSQL `NUMERIC` values (e.g. `AVG(...)`, or `SUM(...)` over numeric
//! columns) reach JSON as decimal strings, while integer and float columns
//! arrive as JSON numbers. These helpers accept either form.

use ::serde::de::Error as _;
use ::serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

fn to_f64<E: ::serde::de::Error>(value: NumberOrText) -> Result<f64, E> {
    match value {
        NumberOrText::Number(n) => n
            .as_f64()
            .ok_or_else(|| E::custom(format!("number {n} out of range"))),
        NumberOrText::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("expected a decimal, got {s:?}"))),
    }
}

/// Deserialize an optional float from a JSON number or decimal string.
pub fn opt_f64<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrText>::deserialize(d)?
        .map(to_f64::<D::Error>)
        .transpose()
}

/// Deserialize an integer from a JSON number or an integral decimal string
/// (`"150"` or `"150.0000"`).
pub fn i64_lenient<'de, D>(d: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = NumberOrText::deserialize(d)?;
    if let NumberOrText::Number(ref n) = value {
        if let Some(i) = n.as_i64() {
            return Ok(i);
        }
    }
    let f = to_f64::<D::Error>(value)?;
    if f.fract() != 0.0 || !f.is_finite() || f.abs() > i64::MAX as f64 {
        return Err(D::Error::custom(format!("expected an integer, got {f}")));
    }
    Ok(f as i64)
}
