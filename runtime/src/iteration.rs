//! Traversal primitives.
//!
//! `each`, `each_right`, `each_at` and `each_at_right` walk a sequence in
//! index order or a mapping in insertion order, handing every element to a
//! callback together with its [`Position`] and the [`Collection`] itself.
//! All derived operations in [`crate::builtins`] are built on the crate-level
//! `walk`/`walk_right`, which add early exit through [`ControlFlow`].

use crate::collections::{Collection, Position};
use crate::error::LdError;
use crate::value::Value;
use std::ops::ControlFlow;
use tracing::trace;

/// Visit elements from `start` to the end, stopping at the first `Break`.
pub(crate) fn walk<'a, B, F>(
    operation: &'static str,
    collection: Collection<'a>,
    start: usize,
    mut visit: F,
) -> ControlFlow<B>
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>) -> ControlFlow<B>,
{
    trace!(
        operation,
        shape = collection.shape(),
        len = collection.len(),
        start,
        "walking collection"
    );
    for offset in start..collection.len() {
        if let Some((value, position)) = collection.entry(offset) {
            visit(value, position, collection)?;
        }
    }
    ControlFlow::Continue(())
}

/// Visit elements from `start` down to the first, stopping at the first
/// `Break`. `None` starts at the last element; a start past the end is
/// clamped to it.
pub(crate) fn walk_right<'a, B, F>(
    operation: &'static str,
    collection: Collection<'a>,
    start: Option<usize>,
    mut visit: F,
) -> ControlFlow<B>
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>) -> ControlFlow<B>,
{
    trace!(
        operation,
        shape = collection.shape(),
        len = collection.len(),
        ?start,
        "walking collection in reverse"
    );
    let Some(last) = collection.len().checked_sub(1) else {
        return ControlFlow::Continue(());
    };
    let start = start.map_or(last, |start| start.min(last));
    for offset in (0..=start).rev() {
        if let Some((value, position)) = collection.entry(offset) {
            visit(value, position, collection)?;
        }
    }
    ControlFlow::Continue(())
}

/// `each(collection, action)`
///
/// Invoke `action(value, position, collection)` for every element in
/// iteration order.
///
/// - each([1, 2], f) → f(1, 0), f(2, 1)
/// - each({a: 1}, f) → f(1, "a")
/// - each(5, f) → InvalidArgument
pub fn each<'a, F>(collection: &'a Value, action: F) -> Result<(), LdError>
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>),
{
    const OPERATION: &str = "each(collection, action)";
    let collection = Collection::of(OPERATION, collection)?;
    let _ = walk(OPERATION, collection, 0, continuing(action));
    Ok(())
}

/// `each_right(collection, action)`
///
/// Like [`each`], last element first.
pub fn each_right<'a, F>(collection: &'a Value, action: F) -> Result<(), LdError>
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>),
{
    const OPERATION: &str = "each_right(collection, action)";
    let collection = Collection::of(OPERATION, collection)?;
    let _ = walk_right(OPERATION, collection, None, continuing(action));
    Ok(())
}

/// `each_at(collection, action, start)`
///
/// Like [`each`], beginning at offset `start` (an index for sequences, a
/// key index for mappings). Folds use this to skip a seed they already
/// consumed.
pub fn each_at<'a, F>(collection: &'a Value, action: F, start: usize) -> Result<(), LdError>
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>),
{
    const OPERATION: &str = "each_at(collection, action, start)";
    let collection = Collection::of(OPERATION, collection)?;
    let _ = walk(OPERATION, collection, start, continuing(action));
    Ok(())
}

/// `each_at_right(collection, action, start)`
///
/// Like [`each_right`], beginning at offset `start` and walking down to the
/// first element. `None` begins at the last element.
pub fn each_at_right<'a, F>(
    collection: &'a Value,
    action: F,
    start: Option<usize>,
) -> Result<(), LdError>
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>),
{
    const OPERATION: &str = "each_at_right(collection, action, start)";
    let collection = Collection::of(OPERATION, collection)?;
    let _ = walk_right(OPERATION, collection, start, continuing(action));
    Ok(())
}

/// Adapt a plain action into a visitor that never breaks.
fn continuing<'a, F>(
    mut action: F,
) -> impl FnMut(&'a Value, Position<'a>, Collection<'a>) -> ControlFlow<()>
where
    F: FnMut(&'a Value, Position<'a>, Collection<'a>),
{
    move |value, position, collection| {
        action(value, position, collection);
        ControlFlow::Continue(())
    }
}
