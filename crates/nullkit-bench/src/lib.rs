//! Shared fixtures for the nullkit benchmarks

/// Alternating present/absent integers, starting with a present value
///
/// Each present value is its own index. A non-positive `len` yields nothing.
pub fn mixed_ints(len: i32) -> Vec<Option<i32>> {
    (0..len).map(|i| (i % 2 == 0).then_some(i)).collect()
}

/// Alternating present/absent strings, starting with a present value
pub fn mixed_strings(len: usize) -> Vec<Option<String>> {
    (0..len)
        .map(|i| (i % 2 == 0).then(|| format!("value-{i}")))
        .collect()
}
