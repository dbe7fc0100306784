pub mod builtins;
pub mod collections;
pub mod error;
pub mod format;
pub mod iteration;
#[cfg(feature = "serde")]
pub mod json;
pub mod operations;
pub mod value;

pub use builtins::{
    contains, every, extend, filter, first, identity, index_of, last, map, partition, pluck,
    reduce, reduce_right, reject, some, unique, Predicate,
};
pub use collections::{Collection, Position};
pub use error::LdError;
pub use iteration::{each, each_at, each_at_right, each_right};
pub use operations::{strict_equals, type_name, type_of};
pub use value::{Object, Value};
