use crate::operations::strict_equals;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Keyed mapping. Keys enumerate in insertion order, and re-inserting an
/// existing key keeps its original slot.
pub type Object = IndexMap<String, Value>;

/// Dynamically typed value
///
/// Sequences live in a persistent vector so cloning a whole array (or
/// handing one back from `first`/`last`) shares structure instead of copying.
///
/// Integers and decimals are both the `number` type: they compare
/// numerically and `type_of` reports them the same way.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    String(String),
    Date(DateTime<Utc>),
    Array(im::Vector<Value>),
    Object(Object),
}

// Strict equality: no coercion between types, NaN never equal
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        strict_equals(self, other)
    }
}

impl Value {
    // ===== Construction =====

    pub fn undefined() -> Self {
        Value::Undefined
    }

    pub fn null() -> Self {
        Value::Null
    }

    pub fn from_integer(i: i64) -> Self {
        Value::Integer(i)
    }

    pub fn from_decimal(d: f64) -> Self {
        Value::Decimal(d)
    }

    pub fn from_bool(b: bool) -> Self {
        Value::Boolean(b)
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn from_date(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }

    pub fn from_list(elements: im::Vector<Value>) -> Self {
        Value::Array(elements)
    }

    pub fn from_object(entries: Object) -> Self {
        Value::Object(entries)
    }

    /// An empty array
    pub fn empty_list() -> Self {
        Value::Array(im::Vector::new())
    }

    /// An empty object
    pub fn empty_object() -> Self {
        Value::Object(Object::new())
    }

    // ===== Inspection =====

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Decimal(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Numeric view of either number representation
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(date) => Some(date),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&im::Vector<Value>> {
        match self {
            Value::Array(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    // ===== Truthiness =====

    /// Falsy values are `undefined`, `null`, `false`, zero, `NaN` and the
    /// empty string. Arrays, objects and dates are always truthy, even when
    /// empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Integer(i) => *i != 0,
            Value::Decimal(d) => *d != 0.0 && !d.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Date(_) | Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        match i64::try_from(i) {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::Decimal(i as f64),
        }
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

impl From<im::Vector<Value>> for Value {
    fn from(list: im::Vector<Value>) -> Self {
        Value::Array(list)
    }
}

impl From<Vec<Value>> for Value {
    fn from(list: Vec<Value>) -> Self {
        Value::Array(list.into_iter().collect())
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
