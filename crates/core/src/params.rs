//! Pure helpers for coercing raw `serde_json::Value`s into typed parameters.
//!
//! The control surface forwards edits as JSON numbers or strings (slider and
//! select widgets report strings). These helpers never clamp; range policy
//! lives in [`crate::config`].

use serde_json::Value;

/// Returns a short JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parses the leading integer of `s` the way form widgets are usually read.
///
/// Skips leading whitespace, accepts an optional `+`/`-` sign, then consumes
/// decimal digits until the first non-digit. Returns `None` if no digit was
/// found. Saturates at the `i64` bounds instead of overflowing.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits
        .iter()
        .fold(0_i64, |acc, &d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerces a raw value to an integer.
///
/// Integers pass through, finite floats truncate toward zero, strings go
/// through [`parse_int_prefix`]. Everything else yields `None`.
pub fn value_as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

/// Returns the string payload of a raw value, or `None` for non-strings.
pub fn value_as_str(value: &Value) -> Option<&str> {
    value.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- parse_int_prefix --

    #[test]
    fn parse_int_prefix_reads_plain_digits() {
        assert_eq!(parse_int_prefix("142"), Some(142));
    }

    #[test]
    fn parse_int_prefix_stops_at_first_non_digit() {
        assert_eq!(parse_int_prefix("42px"), Some(42));
        assert_eq!(parse_int_prefix("12.9"), Some(12));
    }

    #[test]
    fn parse_int_prefix_accepts_sign_and_leading_whitespace() {
        assert_eq!(parse_int_prefix("  -7"), Some(-7));
        assert_eq!(parse_int_prefix("+15"), Some(15));
    }

    #[test]
    fn parse_int_prefix_rejects_strings_without_leading_digits() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("px42"), None);
    }

    #[test]
    fn parse_int_prefix_saturates_on_overflow() {
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999999"), Some(-i64::MAX));
    }

    // -- value_as_int --

    #[test]
    fn value_as_int_accepts_integers_and_truncates_floats() {
        assert_eq!(value_as_int(&json!(30)), Some(30));
        assert_eq!(value_as_int(&json!(-4)), Some(-4));
        assert_eq!(value_as_int(&json!(12.7)), Some(12));
        assert_eq!(value_as_int(&json!(-12.7)), Some(-12));
    }

    #[test]
    fn value_as_int_parses_strings() {
        assert_eq!(value_as_int(&json!("110")), Some(110));
        assert_eq!(value_as_int(&json!("nope")), None);
    }

    #[test]
    fn value_as_int_rejects_other_types() {
        assert_eq!(value_as_int(&json!(null)), None);
        assert_eq!(value_as_int(&json!(true)), None);
        assert_eq!(value_as_int(&json!([1])), None);
    }

    // -- value_as_str / json_type_name --

    #[test]
    fn value_as_str_only_accepts_strings() {
        assert_eq!(value_as_str(&json!("round")), Some("round"));
        assert_eq!(value_as_str(&json!(1)), None);
    }

    #[test]
    fn json_type_name_covers_every_variant() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(false)), "boolean");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }
}
