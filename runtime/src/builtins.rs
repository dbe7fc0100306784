use super::collections::{Collection, Position};
use super::error::LdError;
use super::iteration::{walk, walk_right};
use super::operations::{strict_equals, type_of};
use super::value::Value;
use std::ops::ControlFlow;

/// Optional test for [`some`] and [`every`]; `None` tests the truthiness of
/// each value.
pub type Predicate<'p, 'a> = &'p mut dyn FnMut(&'a Value, Position<'a>, Collection<'a>) -> bool;

// ============================================================================
// Basics
// ============================================================================

/// `identity(value)` → value
///
/// Return the argument unchanged. Useful where a function is required but
/// no transformation is wanted.
pub fn identity<T>(value: T) -> T {
    value
}

/// `first(sequence, n)` → Value
///
/// - first(["a", "b", "c"], None) → "a"
/// - first(["a", "b", "c"], Some(2)) → ["a", "b"]
/// - first(["a", "b", "c"], Some(5)) → ["a", "b", "c"]
/// - first(["a", "b", "c"], Some(-1)) → []
/// - first({a: "b"}, Some(2)) → []
/// - first([], None) → undefined
pub fn first(sequence: &Value, n: Option<i64>) -> Value {
    match take_count(sequence, n) {
        Some((list, Take::One)) => list.front().cloned().unwrap_or_default(),
        Some((list, Take::Many(count))) => Value::Array(list.take(count)),
        None => Value::empty_list(),
    }
}

/// `last(sequence, n)` → Value
///
/// Mirror of [`first`], counted from the tail.
///
/// - last(["a", "b", "c"], None) → "c"
/// - last(["a", "b", "c"], Some(2)) → ["b", "c"]
pub fn last(sequence: &Value, n: Option<i64>) -> Value {
    match take_count(sequence, n) {
        Some((list, Take::One)) => list.back().cloned().unwrap_or_default(),
        Some((list, Take::Many(count))) => Value::Array(list.skip(list.len() - count)),
        None => Value::empty_list(),
    }
}

enum Take {
    One,
    Many(usize),
}

/// `None` when the answer is an empty array: a count below one, or a value
/// that is not an array.
fn take_count(sequence: &Value, n: Option<i64>) -> Option<(&im::Vector<Value>, Take)> {
    let n = n.unwrap_or(1);
    match sequence {
        Value::Array(list) if n == 1 => Some((list, Take::One)),
        Value::Array(list) if n > 1 => {
            let count = usize::try_from(n).map_or(list.len(), |n| n.min(list.len()));
            Some((list, Take::Many(count)))
        }
        _ => None,
    }
}

// ============================================================================
// Transformation
// ============================================================================

/// `map(collection, transform)` → Array
///
/// Collect `transform(value, position, collection)` for every element in
/// iteration order. Mappings map their values; the result is always an
/// array with one entry per input element.
///
/// - map([1, 2], |v| v * 2) → [2, 4]
/// - map({a: 1, b: 2}, |v, k| k) → ["a", "b"]
pub fn map<'a, F>(collection: &'a Value, mut transform: F) -> Result<Value, LdError>
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>) -> Value,
{
    const OPERATION: &str = "map(collection, transform)";
    let collection = Collection::of(OPERATION, collection)?;
    let mut mapped = im::Vector::new();
    let _ = walk::<(), _>(OPERATION, collection, 0, |value, position, collection| {
        mapped.push_back(transform(value, position, collection));
        ControlFlow::Continue(())
    });
    Ok(Value::Array(mapped))
}

/// `filter(collection, test)` → Array
///
/// Keep the values for which `test` returns true, in iteration order.
///
/// - filter([1, 2, 3], |v| v > 1) → [2, 3]
/// - filter({a: 1, b: 2}, |v| v > 1) → [2]
pub fn filter<'a, F>(collection: &'a Value, test: F) -> Result<Value, LdError>
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>) -> bool,
{
    filter_as("filter(collection, test)", collection, test)
}

/// `reject(collection, test)` → Array
///
/// The values for which `test` returns false. The complement of [`filter`].
///
/// - reject([1, 2, 3], |v| v > 1) → [1]
pub fn reject<'a, F>(collection: &'a Value, mut test: F) -> Result<Value, LdError>
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>) -> bool,
{
    filter_as("reject(collection, test)", collection, |value, position, collection| {
        !test(value, position, collection)
    })
}

/// `partition(collection, test)` → (passing, failing)
///
/// Both halves are computed over the same borrowed collection, so every
/// element lands in exactly one of them.
///
/// - partition([1, 2, 3, 4], is_even) → ([2, 4], [1, 3])
pub fn partition<'a, F>(collection: &'a Value, mut test: F) -> Result<(Value, Value), LdError>
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>) -> bool,
{
    const OPERATION: &str = "partition(collection, test)";
    let passing = filter_as(OPERATION, collection, &mut test)?;
    let failing = filter_as(OPERATION, collection, |value, position, collection| {
        !test(value, position, collection)
    })?;
    Ok((passing, failing))
}

fn filter_as<'a, F>(operation: &'static str, collection: &'a Value, mut test: F) -> Result<Value, LdError>
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>) -> bool,
{
    let collection = Collection::of(operation, collection)?;
    let mut filtered = im::Vector::new();
    let _ = walk::<(), _>(operation, collection, 0, |value, position, collection| {
        if test(value, position, collection) {
            filtered.push_back(value.clone());
        }
        ControlFlow::Continue(())
    });
    Ok(Value::Array(filtered))
}

/// `pluck(collection, key)` → Array
///
/// Map every element to `element[key]`. Objects yield the bound value (or
/// `undefined` when absent); arrays answer decimal index keys and
/// `"length"`; strings answer `"length"`; other primitives yield
/// `undefined`.
///
/// - pluck([{a: 1}, {a: 2}, {}], "a") → [1, 2, undefined]
/// - pluck([null], "a") → InvalidArgument
pub fn pluck(collection: &Value, key: &str) -> Result<Value, LdError> {
    const OPERATION: &str = "pluck(collection, key)";
    let collection = Collection::of(OPERATION, collection)?;
    let mut plucked = im::Vector::new();
    let outcome = walk(OPERATION, collection, 0, |value, _, _| match property(value, key) {
        Some(found) => {
            plucked.push_back(found);
            ControlFlow::Continue(())
        }
        None => ControlFlow::Break(LdError::invalid_argument(
            OPERATION,
            format!("cannot read key '{}' of {}", key, type_of(value)),
        )),
    });
    match outcome {
        ControlFlow::Break(err) => Err(err),
        ControlFlow::Continue(()) => Ok(Value::Array(plucked)),
    }
}

/// Key lookup on a single value. `None` when the value supports no lookup.
fn property(value: &Value, key: &str) -> Option<Value> {
    match value {
        Value::Undefined | Value::Null => None,
        Value::Object(object) => Some(object.get(key).cloned().unwrap_or_default()),
        Value::Array(list) if key == "length" => Some(Value::from(list.len())),
        Value::Array(list) => Some(
            array_index(key)
                .and_then(|index| list.get(index))
                .cloned()
                .unwrap_or_default(),
        ),
        Value::String(s) if key == "length" => Some(Value::from(s.chars().count())),
        _ => Some(Value::Undefined),
    }
}

/// Canonical decimal index keys only: "0", "12", never "01" or "+1".
fn array_index(key: &str) -> Option<usize> {
    key.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == key)
}

// ============================================================================
// Folding
// ============================================================================

/// `reduce(collection, combine, seed)` → Value
///
/// Fold left to right with `combine(accumulator, value, position,
/// collection)`. Without a seed the first element is the starting
/// accumulator and folding starts at the second. `Some(0)`, `Some("")` and
/// `Some(false)` are real seeds.
///
/// - reduce([1, 2, 3], +, None) → 6
/// - reduce([1, 2, 3], +, Some(10)) → 16
/// - reduce([], +, Some(0)) → 0
/// - reduce([], +, None) → EmptyCollection
pub fn reduce<'a, F>(collection: &'a Value, combine: F, seed: Option<Value>) -> Result<Value, LdError>
where
    F: FnMut(Value, &'a Value, Position<'a>, Collection<'a>) -> Value,
{
    const OPERATION: &str = "reduce(collection, combine)";
    let collection = Collection::of(OPERATION, collection)?;
    let (seed, start) = match seed {
        Some(seed) => (seed, 0),
        None => {
            let first = collection
                .first()
                .ok_or_else(|| LdError::empty_collection(OPERATION))?;
            (first.clone(), 1)
        }
    };
    Ok(fold(OPERATION, collection, seed, start, combine))
}

/// `reduce_right(collection, combine, seed)` → Value
///
/// Mirror of [`reduce`]: folds right to left, and without a seed the last
/// element is the starting accumulator.
///
/// - reduce_right(["a", "b", "c"], concat, None) → "cba"
/// - reduce_right([], concat, None) → EmptyCollection
pub fn reduce_right<'a, F>(
    collection: &'a Value,
    mut combine: F,
    seed: Option<Value>,
) -> Result<Value, LdError>
where
    F: FnMut(Value, &'a Value, Position<'a>, Collection<'a>) -> Value,
{
    const OPERATION: &str = "reduce_right(collection, combine)";
    let collection = Collection::of(OPERATION, collection)?;
    let (mut accumulator, start) = match seed {
        Some(seed) => (seed, collection.len().checked_sub(1)),
        None => {
            let last = collection
                .last()
                .ok_or_else(|| LdError::empty_collection(OPERATION))?;
            (last.clone(), collection.len().checked_sub(2))
        }
    };
    if let Some(start) = start {
        let _ = walk_right::<(), _>(OPERATION, collection, Some(start), |value, position, collection| {
            accumulator = combine(std::mem::take(&mut accumulator), value, position, collection);
            ControlFlow::Continue(())
        });
    }
    Ok(accumulator)
}

/// Left fold from offset `start` with an accumulator of any type.
fn fold<'a, A, F>(
    operation: &'static str,
    collection: Collection<'a>,
    seed: A,
    start: usize,
    mut combine: F,
) -> A
where
    A: Default,
    F: FnMut(A, &'a Value, Position<'a>, Collection<'a>) -> A,
{
    let mut accumulator = seed;
    let _ = walk::<(), _>(operation, collection, start, |value, position, collection| {
        accumulator = combine(std::mem::take(&mut accumulator), value, position, collection);
        ControlFlow::Continue(())
    });
    accumulator
}

// ============================================================================
// Searching
// ============================================================================

/// `some(collection, test)` → Boolean
///
/// True as soon as one element passes; stops at the first success.
///
/// - some([1, 2], Some(is_even)) → true
/// - some([0, "", null], None) → false
/// - some([], _) → false
pub fn some<'a>(collection: &'a Value, test: Option<Predicate<'_, 'a>>) -> Result<bool, LdError> {
    const OPERATION: &str = "some(collection, test)";
    let collection = Collection::of(OPERATION, collection)?;
    let found = match test {
        Some(test) => find_entry(OPERATION, collection, |value, position, collection| {
            test(value, position, collection)
        }),
        None => find_entry(OPERATION, collection, |value, _, _| value.is_truthy()),
    };
    Ok(found)
}

/// `every(collection, test)` → Boolean
///
/// True when no element fails; stops at the first failure.
///
/// - every([2, 4], Some(is_even)) → true
/// - every([1, 0], None) → false
/// - every([], _) → true (vacuous truth)
pub fn every<'a>(collection: &'a Value, test: Option<Predicate<'_, 'a>>) -> Result<bool, LdError> {
    const OPERATION: &str = "every(collection, test)";
    let collection = Collection::of(OPERATION, collection)?;
    let failed = match test {
        Some(test) => find_entry(OPERATION, collection, |value, position, collection| {
            !test(value, position, collection)
        }),
        None => find_entry(OPERATION, collection, |value, _, _| !value.is_truthy()),
    };
    Ok(!failed)
}

/// Whether any element satisfies `matches`, stopping at the first hit.
fn find_entry<'a, F>(operation: &'static str, collection: Collection<'a>, mut matches: F) -> bool
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>) -> bool,
{
    walk(operation, collection, 0, |value, position, collection| {
        if matches(value, position, collection) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .is_break()
}

/// `contains(collection, target)` → Boolean
///
/// Strict-equality search over the values (never the keys) of a collection.
///
/// - contains([1, "3", 4], 3) → false
/// - contains({one: "a", two: "b"}, "b") → true
/// - contains({one: "a"}, "one") → false
pub fn contains(collection: &Value, target: &Value) -> Result<bool, LdError> {
    const OPERATION: &str = "contains(collection, target)";
    let collection = Collection::of(OPERATION, collection)?;
    Ok(find_entry(OPERATION, collection, |value, _, _| {
        strict_equals(value, target)
    }))
}

/// `index_of(sequence, target)` → Option<Integer>
///
/// First index holding a value strictly equal to `target`.
///
/// - index_of([1, 2, 1], 1) → Some(0)
/// - index_of([1, 2], "1") → None
/// - index_of({a: 1}, 1) → InvalidArgument
pub fn index_of(sequence: &Value, target: &Value) -> Result<Option<usize>, LdError> {
    const OPERATION: &str = "index_of(sequence, target)";
    match sequence {
        Value::Array(list) => Ok(position_in(list, target)),
        other => Err(LdError::invalid_argument(
            OPERATION,
            format!("expects Array, got {}", type_of(other)),
        )),
    }
}

fn position_in(list: &im::Vector<Value>, target: &Value) -> Option<usize> {
    list.iter().position(|value| strict_equals(value, target))
}

/// `unique(collection)` → Array
///
/// Drop every value strictly equal to an earlier one, keeping
/// first-occurrence order. Membership is a linear scan of the result so far,
/// which is quadratic in the worst case; inputs are expected to be small.
///
/// - unique([1, 2, 1, "1"]) → [1, 2, "1"]
pub fn unique(collection: &Value) -> Result<Value, LdError> {
    const OPERATION: &str = "unique(collection)";
    let collection = Collection::of(OPERATION, collection)?;
    let seen = fold(
        OPERATION,
        collection,
        im::Vector::new(),
        0,
        |mut seen: im::Vector<Value>, value, _, _| {
            if position_in(&seen, value).is_none() {
                seen.push_back(value.clone());
            }
            seen
        },
    );
    Ok(Value::Array(seen))
}

// ============================================================================
// Mutation
// ============================================================================

/// `extend(target, ...sources)` → target
///
/// Copy every entry of each source into `target`, in argument order. Later
/// sources overwrite earlier ones and the target's own keys; a key that
/// already exists keeps its place in the target's enumeration order. Array
/// sources contribute their indices as keys ("0", "1", ...).
///
/// All arguments are checked before the target is touched.
///
/// - extend({a: 1, b: 2}, [{c: 3, d: 4}]) → {a: 1, b: 2, c: 3, d: 4}
/// - extend({a: 1}, [{a: 3, d: 4}, {d: 5, c: 6}]) → {a: 3, d: 5, c: 6}
pub fn extend<'t>(target: &'t mut Value, sources: &[Value]) -> Result<&'t mut Value, LdError> {
    const OPERATION: &str = "extend(target, ...sources)";
    let object = match &mut *target {
        Value::Object(object) => object,
        other => {
            return Err(LdError::invalid_argument(
                OPERATION,
                format!("expects Object target, got {}", type_of(other)),
            ))
        }
    };
    let sources = sources
        .iter()
        .map(|source| Collection::of(OPERATION, source))
        .collect::<Result<Vec<_>, _>>()?;

    for source in sources {
        let _ = walk::<(), _>(OPERATION, source, 0, |value, position, _| {
            object.insert(position.to_string(), value.clone());
            ControlFlow::Continue(())
        });
    }
    Ok(target)
}
