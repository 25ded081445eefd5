// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators that reach for the end of a source.
//!
//! [`last`] dispatches on the [`Tail`] capability of its argument, so the cost
//! depends on what the caller hands over rather than on a runtime check:
//!
//! ```
//! use chunkwise::{last, Fallback, SourceExt};
//!
//! // Random access: one lookup.
//! assert_eq!(last(vec![1, 2, 3], Fallback::Unset)?, 3);
//! // Reverse iteration: one step from the back.
//! assert_eq!(last((0..10).map(|x| x * 2).double_ended(), Fallback::Unset)?, 18);
//! // Single pass: walks the source keeping only the latest element.
//! assert_eq!(last((0..10).filter(|x| x % 4 == 1).single_pass(), Fallback::Unset)?, 9);
//! # Ok::<(), chunkwise::ChunkwiseError>(())
//! ```

use chunkwise_core::{Fallback, Result, SinglePass, Tail};

/// Returns the final element of `source`, or `default` if it is empty.
///
/// See the [module documentation](self) for how sources are handled.
///
/// # Errors
///
/// Returns [`ChunkwiseError::EmptyInput`](chunkwise_core::ChunkwiseError::EmptyInput)
/// if the source is empty and no default was supplied.
pub fn last<S: Tail>(source: S, default: impl Into<Fallback<S::Item>>) -> Result<S::Item> {
    default.into().resolve(source.tail(), "last")
}

/// Returns the element at index `n`, or the final element if the source is
/// shorter than `n + 1`, or `default` if it is empty.
///
/// Pulls at most `n + 1` elements.
///
/// # Errors
///
/// Returns [`ChunkwiseError::EmptyInput`](chunkwise_core::ChunkwiseError::EmptyInput)
/// if the source is empty and no default was supplied.
///
/// # Examples
///
/// ```
/// use chunkwise::{nth_or_last, Fallback};
///
/// assert_eq!(nth_or_last([0, 1, 2, 3], 2, Fallback::Unset)?, 2);
/// assert_eq!(nth_or_last([0, 1], 5, Fallback::Unset)?, 1);
/// assert_eq!(nth_or_last(Vec::<&str>::new(), 0, "some default")?, "some default");
/// # Ok::<(), chunkwise::ChunkwiseError>(())
/// ```
pub fn nth_or_last<S>(source: S, n: usize, default: impl Into<Fallback<S::Item>>) -> Result<S::Item>
where
    S: IntoIterator,
{
    let prefix = SinglePass::new(source.into_iter().take(n.saturating_add(1)));
    default.into().resolve(prefix.tail(), "nth_or_last")
}
