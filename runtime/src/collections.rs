//! Shape-resolved view over the two traversable value kinds.
//!
//! A [`Collection`] is resolved once per call from a [`Value`]; after that
//! the traversal code never inspects the value's type again. Each variant
//! supplies its own enumeration order and its own [`Position`] type.

use super::error::LdError;
use super::operations::type_of;
use super::value::{Object, Value};
use std::fmt;

/// Location of an element during traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position<'a> {
    /// Offset into a sequence
    Index(usize),
    /// Key of a mapping entry
    Key(&'a str),
}

impl<'a> Position<'a> {
    pub fn index(&self) -> Option<usize> {
        match self {
            Position::Index(i) => Some(*i),
            Position::Key(_) => None,
        }
    }

    pub fn key(&self) -> Option<&'a str> {
        match self {
            Position::Index(_) => None,
            Position::Key(k) => Some(*k),
        }
    }

    /// Position as a value: an integer for sequences, a string for mappings
    pub fn to_value(&self) -> Value {
        match self {
            Position::Index(i) => Value::from(*i),
            Position::Key(k) => Value::from(*k),
        }
    }
}

// Index positions render as their decimal key, which is how `extend` names
// entries copied out of an array.
impl fmt::Display for Position<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Index(i) => write!(f, "{}", i),
            Position::Key(k) => f.write_str(k),
        }
    }
}

/// An ordered sequence or a keyed mapping, borrowed from a [`Value`]
#[derive(Debug, Clone, Copy)]
pub enum Collection<'a> {
    Sequence(&'a im::Vector<Value>),
    Mapping(&'a Object),
}

impl<'a> Collection<'a> {
    /// Resolve the shape of `value`, failing with `InvalidArgument` on
    /// anything that is neither an array nor an object.
    pub fn of(operation: &'static str, value: &'a Value) -> Result<Self, LdError> {
        Collection::from_value(value).ok_or_else(|| {
            LdError::invalid_argument(
                operation,
                format!("expects Array or Object, got {}", type_of(value)),
            )
        })
    }

    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(list) => Some(Collection::Sequence(list)),
            Value::Object(object) => Some(Collection::Mapping(object)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(list) => list.len(),
            Collection::Mapping(object) => object.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `"array"` or `"object"`
    pub fn shape(&self) -> &'static str {
        match self {
            Collection::Sequence(_) => "array",
            Collection::Mapping(_) => "object",
        }
    }

    /// Element at `offset` in enumeration order, with its position
    pub fn entry(&self, offset: usize) -> Option<(&'a Value, Position<'a>)> {
        match *self {
            Collection::Sequence(list) => list.get(offset).map(|v| (v, Position::Index(offset))),
            Collection::Mapping(object) => object
                .get_index(offset)
                .map(|(k, v)| (v, Position::Key(k.as_str()))),
        }
    }

    pub fn first(&self) -> Option<&'a Value> {
        self.entry(0).map(|(value, _)| value)
    }

    pub fn last(&self) -> Option<&'a Value> {
        let offset = self.len().checked_sub(1)?;
        self.entry(offset).map(|(value, _)| value)
    }

    /// Copy the borrowed collection back into an owned value
    pub fn to_value(&self) -> Value {
        match self {
            Collection::Sequence(list) => Value::Array((*list).clone()),
            Collection::Mapping(object) => Value::Object((*object).clone()),
        }
    }
}
