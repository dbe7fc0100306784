//! Input builders shared by the collection benchmarks.

use ld::Value;

/// `[0, 1, ..., n - 1]`
pub fn numbers(n: usize) -> Value {
    (0..n).map(Value::from).collect()
}

/// `n` records shaped `{id, group, score}`, with `group` cycling through
/// `groups` distinct values.
pub fn records(n: usize, groups: usize) -> Value {
    (0..n)
        .map(|i| {
            [
                ("id", Value::from(i)),
                ("group", Value::from(format!("g{}", i % groups.max(1)))),
                ("score", Value::from(i as f64 * 0.5)),
            ]
            .into_iter()
            .collect::<Value>()
        })
        .collect()
}

/// An object keyed `k0..k{n-1}`, for mapping traversals.
pub fn mapping(n: usize) -> Value {
    (0..n).map(|i| (format!("k{i}"), Value::from(i))).collect()
}
