//! Human-readable rendering of values.
//!
//! Strings are quoted so that `"1"` and `1` stay distinguishable in error
//! messages and test snapshots.

use super::value::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_value(self))
    }
}

/// Format a Value as a string representation
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Decimal(d) => format_decimal(*d),
        Value::String(s) => format!("{:?}", s),
        Value::Date(date) => format!("Date({})", date.to_rfc3339()),
        Value::Array(list) => {
            let items: Vec<String> = list.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(object) => {
            let items: Vec<String> = object
                .iter()
                .map(|(k, v)| format!("{}: {}", k, format_value(v)))
                .collect();
            format!("{{{}}}", items.join(", "))
        }
    }
}

fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let s = value.to_string();
    if s.contains('.') || s.contains('e') || s.contains('E') {
        s
    } else {
        format!("{s}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn decimals_keep_a_fraction() {
        assert_eq!(format_decimal(2.0), "2.0");
        assert_eq!(format_decimal(2.5), "2.5");
        assert_eq!(format_decimal(f64::NAN), "NaN");
        assert_eq!(format_decimal(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn nested_values() {
        let value: Value = [
            ("name", Value::from("ld")),
            ("tags", Value::from(vec![Value::from(1), Value::null(), Value::undefined()])),
            ("empty", Value::empty_object()),
        ]
        .into_iter()
        .collect();
        expect![[r#"{name: "ld", tags: [1, null, undefined], empty: {}}"#]].assert_eq(&value.to_string());
    }
}
