// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise_core::Reversible;

/// Iterates `source` back to front, whatever kind of source it is.
///
/// Collections and double-ended iterators are walked from the back directly.
/// A [`SinglePass`](chunkwise_core::SinglePass) source is first drained into
/// a buffer, which takes memory proportional to its length.
///
/// # Examples
///
/// ```
/// use chunkwise::{always_reversible, SourceExt};
///
/// assert_eq!(always_reversible(vec![1, 2, 3]).collect::<Vec<_>>(), vec![3, 2, 1]);
/// assert_eq!(always_reversible(0..3).collect::<Vec<_>>(), vec![2, 1, 0]);
///
/// let squares = (1..=3).map(|n| n * n).filter(|n| n % 2 == 1).single_pass();
/// assert_eq!(always_reversible(squares).collect::<Vec<_>>(), vec![9, 1]);
/// ```
pub fn always_reversible<S: Reversible>(source: S) -> S::Reversed {
    source.reversed()
}
