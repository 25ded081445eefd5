// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Collects the first `n` elements of `source` into a `Vec`.
///
/// Returns fewer than `n` elements when the source runs out first. Exactly
/// `min(n, len)` elements are pulled, so infinite sources are fine.
///
/// # Examples
///
/// ```
/// use chunkwise::take;
///
/// assert_eq!(take(0.., 3), vec![0, 1, 2]);
/// assert_eq!(take([1, 2], 10), vec![1, 2]);
/// assert!(take(0.., 0).is_empty());
/// ```
pub fn take<S: IntoIterator>(source: S, n: usize) -> Vec<S::Item> {
    source.into_iter().take(n).collect()
}
