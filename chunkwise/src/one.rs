// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise_core::{ChunkwiseError, Result};
use std::fmt::Debug;

/// Returns the only element of `source`.
///
/// Pulls at most two elements, so it is safe on infinite sources.
///
/// # Errors
///
/// - [`ChunkwiseError::TooFew`] if the source is empty
/// - [`ChunkwiseError::TooMany`] if a second element exists; the message
///   names the first two elements seen
///
/// # Examples
///
/// ```
/// use chunkwise::{one, ChunkwiseError};
///
/// assert_eq!(one(["too many"])?, "too many");
///
/// let err = one([1, 2, 3]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Expected exactly one item in iterable, but got 1, 2 and perhaps more"
/// );
/// # Ok::<(), ChunkwiseError>(())
/// ```
pub fn one<S>(source: S) -> Result<S::Item>
where
    S: IntoIterator,
    S::Item: Debug,
{
    let mut iter = source.into_iter();
    let first = iter.next().ok_or(ChunkwiseError::too_few(1, 0))?;
    match iter.next() {
        Some(second) => Err(ChunkwiseError::too_many_values(&first, &second)),
        None => Ok(first),
    }
}

/// Like [`one`], but with caller-supplied errors.
///
/// `too_short` is called if the source is empty, `too_long` if it has a
/// second element. Each is called at most once. Foreign errors can be wrapped
/// with [`IntoChunkwiseError`](chunkwise_core::IntoChunkwiseError).
///
/// # Errors
///
/// Whatever `too_short` or `too_long` returns.
///
/// # Examples
///
/// ```
/// use chunkwise::{one_with, ChunkwiseError, IntoChunkwiseError};
/// use std::io;
///
/// let err = one_with(
///     Vec::<i32>::new(),
///     || io::Error::other("nothing here").into_chunkwise(),
///     || ChunkwiseError::too_many(1, 2),
/// )
/// .unwrap_err();
/// assert_eq!(err.to_string(), "User error: nothing here");
/// ```
pub fn one_with<S, F, G>(source: S, too_short: F, too_long: G) -> Result<S::Item>
where
    S: IntoIterator,
    F: FnOnce() -> ChunkwiseError,
    G: FnOnce() -> ChunkwiseError,
{
    let mut iter = source.into_iter();
    let first = iter.next().ok_or_else(too_short)?;
    match iter.next() {
        Some(_) => Err(too_long()),
        None => Ok(first),
    }
}
