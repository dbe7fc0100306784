use super::value::Value;

/// `type_of(value)` → String
///
/// Classify a value with a fixed precedence: the array check runs first,
/// then null, then date, and everything else falls through to the plain
/// dynamic type tag.
///
/// - type_of([]) → "array"
/// - type_of(null) → "null"
/// - type_of(date) → "date"
/// - type_of(1) → "number", type_of(1.5) → "number"
/// - type_of("a") → "string"
/// - type_of({}) → "object"
pub fn type_of(value: &Value) -> &'static str {
    if value.as_list().is_some() {
        "array"
    } else if value.is_null() {
        "null"
    } else if value.as_date().is_some() {
        "date"
    } else {
        type_name(value)
    }
}

/// Dynamic type tag of a value, without the array/null/date refinements.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Undefined => "undefined",
        Value::Boolean(_) => "boolean",
        Value::Integer(_) | Value::Decimal(_) => "number",
        Value::String(_) => "string",
        Value::Null | Value::Date(_) | Value::Array(_) | Value::Object(_) => "object",
    }
}

/// Strict equality between two values.
///
/// Values of different types are never equal (`3` vs `"3"`, `0` vs `false`,
/// `null` vs `undefined`). Integers and decimals share the `number` type and
/// compare numerically, so `1` equals `1.0` but `NaN` equals nothing.
/// Arrays and objects compare element by element; object key order does not
/// matter.
pub fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Integer(l), Value::Integer(r)) => l == r,
        (Value::Decimal(l), Value::Decimal(r)) => l == r,
        (Value::Integer(i), Value::Decimal(d)) | (Value::Decimal(d), Value::Integer(i)) => {
            integer_equals_decimal(*i, *d)
        }
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Date(l), Value::Date(r)) => l == r,
        (Value::Array(l), Value::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(a, b)| strict_equals(a, b))
        }
        (Value::Object(l), Value::Object(r)) => {
            l.len() == r.len()
                && l
                    .iter()
                    .all(|(k, v)| r.get(k).is_some_and(|other| strict_equals(v, other)))
        }
        _ => false,
    }
}

/// Exact comparison: the decimal must be whole and inside the `i64` range,
/// so large integers never collapse onto a neighbouring decimal.
fn integer_equals_decimal(i: i64, d: f64) -> bool {
    // i64::MAX as f64 rounds up to 2^63, which is out of range.
    d.fract() == 0.0 && d >= i64::MIN as f64 && d < i64::MAX as f64 && d as i64 == i
}
