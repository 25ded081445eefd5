// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise_core::{ChunkwiseError, Result};
use std::fmt::Debug;

/// Returns the single element of `source`, or `None` if it is empty.
///
/// Unlike [`one`](crate::one), an empty source is fine. A second element is
/// still an error. Pulls at most two elements.
///
/// # Errors
///
/// Returns [`ChunkwiseError::TooMany`] naming the first two elements if the
/// source has more than one.
///
/// # Examples
///
/// ```
/// use chunkwise::only;
///
/// assert_eq!(only(Vec::<i32>::new())?, None);
/// assert_eq!(only([42])?, Some(42));
/// assert!(only([1, 2]).is_err());
/// # Ok::<(), chunkwise::ChunkwiseError>(())
/// ```
pub fn only<S>(source: S) -> Result<Option<S::Item>>
where
    S: IntoIterator,
    S::Item: Debug,
{
    let mut iter = source.into_iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    match iter.next() {
        Some(second) => Err(ChunkwiseError::too_many_values(&first, &second)),
        None => Ok(Some(first)),
    }
}

/// Like [`only`], returning `default` for an empty source.
///
/// # Errors
///
/// Returns [`ChunkwiseError::TooMany`] if the source has more than one element.
///
/// # Examples
///
/// ```
/// use chunkwise::only_or;
///
/// assert_eq!(only_or(Vec::<&str>::new(), "missing")?, "missing");
/// assert_eq!(only_or(["found"], "missing")?, "found");
/// # Ok::<(), chunkwise::ChunkwiseError>(())
/// ```
pub fn only_or<S>(source: S, default: S::Item) -> Result<S::Item>
where
    S: IntoIterator,
    S::Item: Debug,
{
    Ok(only(source)?.unwrap_or(default))
}

/// Like [`only_or`], with a caller-supplied error for sources holding more
/// than one element.
///
/// # Errors
///
/// Whatever `too_long` returns, if the source has more than one element.
pub fn only_with<S, G>(source: S, default: S::Item, too_long: G) -> Result<S::Item>
where
    S: IntoIterator,
    G: FnOnce() -> ChunkwiseError,
{
    let mut iter = source.into_iter();
    let Some(first) = iter.next() else {
        return Ok(default);
    };
    match iter.next() {
        Some(_) => Err(too_long()),
        None => Ok(first),
    }
}
