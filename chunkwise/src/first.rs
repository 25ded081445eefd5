// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise_core::{Fallback, Result};

/// Returns the first element of `source`, or `default` if it is empty.
///
/// Pulls at most one element. `default` is anything convertible into a
/// [`Fallback`]: pass a plain value to supply one, or [`Fallback::Unset`] to
/// make an empty source an error. Because `Unset` is its own variant, `None`
/// and `false` work as ordinary defaults.
///
/// # Errors
///
/// Returns [`ChunkwiseError::EmptyInput`](chunkwise_core::ChunkwiseError::EmptyInput)
/// if the source is empty and no default was supplied.
///
/// # Examples
///
/// ```
/// use chunkwise::{first, Fallback};
///
/// assert_eq!(first([0, 1, 2, 3], Fallback::Unset)?, 0);
/// assert_eq!(first(Vec::<&str>::new(), "some default")?, "some default");
/// assert!(first(Vec::<u8>::new(), Fallback::Unset).is_err());
/// # Ok::<(), chunkwise::ChunkwiseError>(())
/// ```
pub fn first<S>(source: S, default: impl Into<Fallback<S::Item>>) -> Result<S::Item>
where
    S: IntoIterator,
{
    default.into().resolve(source.into_iter().next(), "first")
}
