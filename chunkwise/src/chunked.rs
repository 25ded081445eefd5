// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Chunking operators that break a source into fixed-size `Vec`s.
//!
//! - [`chunked`]: the final chunk may be shorter than the rest
//! - [`chunked_strict`]: a short final chunk is reported as
//!   [`ChunkwiseError::SizeMismatch`] instead of being yielded
//!
//! Both pull one chunk from the source per call to `next`, so they work on
//! infinite sources.
//!
//! ```
//! use chunkwise::ChunkedExt;
//!
//! let chunks: Vec<_> = (1..=8).chunked(Some(3))?.collect();
//! assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]);
//! # Ok::<(), chunkwise::ChunkwiseError>(())
//! ```

use crate::logging::{log_debug, log_warn};
use chunkwise_core::{ChunkwiseError, Result};
use std::iter::FusedIterator;

/// Iterator returned by [`chunked`] and [`ChunkedExt::chunked`].
#[derive(Debug, Clone)]
pub struct Chunked<I> {
    iter: I,
    size: Option<usize>,
    done: bool,
}

impl<I: Iterator> Iterator for Chunked<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let chunk: Vec<_> = match self.size {
            Some(n) => self.iter.by_ref().take(n).collect(),
            None => self.iter.by_ref().collect(),
        };

        // A short chunk means the source is spent; don't poll it again.
        if chunk.is_empty() || self.size.map_or(true, |n| chunk.len() < n) {
            self.done = true;
        }

        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        match self.size {
            Some(n) => (lower.div_ceil(n), upper.map(|upper| upper.div_ceil(n))),
            None => (usize::from(lower > 0), Some(usize::from(upper != Some(0)))),
        }
    }
}

impl<I: Iterator> FusedIterator for Chunked<I> {}

/// Iterator returned by [`chunked_strict`] and [`ChunkedExt::chunked_strict`].
#[derive(Debug, Clone)]
pub struct StrictChunked<I> {
    inner: Chunked<I>,
    size: usize,
}

impl<I: Iterator> Iterator for StrictChunked<I> {
    type Item = Result<Vec<I::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.inner.next()?;
        if chunk.len() == self.size {
            return Some(Ok(chunk));
        }

        log_debug!(
            "chunked_strict: final chunk has {} items, expected {}",
            chunk.len(),
            self.size
        );
        self.inner.done = true;
        Some(Err(ChunkwiseError::size_mismatch(self.size, chunk.len())))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: Iterator> FusedIterator for StrictChunked<I> {}

fn check_size(n: Option<usize>) -> Result<()> {
    if n == Some(0) {
        log_warn!("chunked: rejected chunk size 0");
        return Err(ChunkwiseError::invalid_argument(
            "chunk size must be at least 1",
        ));
    }
    Ok(())
}

/// Breaks `source` into `Vec`s of length `n`.
///
/// With `n = None` the whole source is returned as a single chunk. An empty
/// source yields no chunks at all, whatever `n` is.
///
/// # Errors
///
/// Returns [`ChunkwiseError::InvalidArgument`] if `n` is `Some(0)`.
///
/// # Examples
///
/// ```
/// use chunkwise::chunked;
///
/// let chunks: Vec<_> = chunked(vec!['a', 'b', 'c'], Some(2))?.collect();
/// assert_eq!(chunks, vec![vec!['a', 'b'], vec!['c']]);
///
/// let everything: Vec<_> = chunked(1..=4, None)?.collect();
/// assert_eq!(everything, vec![vec![1, 2, 3, 4]]);
/// # Ok::<(), chunkwise::ChunkwiseError>(())
/// ```
pub fn chunked<S: IntoIterator>(source: S, n: Option<usize>) -> Result<Chunked<S::IntoIter>> {
    check_size(n)?;
    Ok(Chunked {
        iter: source.into_iter(),
        size: n,
        done: false,
    })
}

/// Like [`chunked`], but every chunk must have exactly `n` elements.
///
/// Full chunks are yielded as `Ok`. If the source length is not a multiple of
/// `n`, the short final chunk is replaced by a single
/// [`ChunkwiseError::SizeMismatch`] and iteration ends. Chunks yielded before
/// the error stay valid.
///
/// # Errors
///
/// Returns [`ChunkwiseError::InvalidArgument`] if `n` is `None` or `Some(0)`.
///
/// # Examples
///
/// ```
/// use chunkwise::{chunked_strict, ChunkwiseError};
///
/// let mut chunks = chunked_strict(1..=5, Some(2))?;
/// assert_eq!(chunks.next().transpose()?, Some(vec![1, 2]));
/// assert_eq!(chunks.next().transpose()?, Some(vec![3, 4]));
/// assert!(matches!(
///     chunks.next(),
///     Some(Err(ChunkwiseError::SizeMismatch { expected: 2, actual: 1 }))
/// ));
/// assert!(chunks.next().is_none());
/// # Ok::<(), ChunkwiseError>(())
/// ```
pub fn chunked_strict<S: IntoIterator>(
    source: S,
    n: Option<usize>,
) -> Result<StrictChunked<S::IntoIter>> {
    let Some(size) = n else {
        log_warn!("chunked_strict: rejected missing chunk size");
        return Err(ChunkwiseError::invalid_argument(
            "chunk size is required in strict mode",
        ));
    };
    Ok(StrictChunked {
        inner: chunked(source, n)?,
        size,
    })
}

/// Extension trait providing the chunking operators on any iterator.
pub trait ChunkedExt: Iterator + Sized {
    /// See [`chunked`].
    ///
    /// # Errors
    ///
    /// Returns [`ChunkwiseError::InvalidArgument`] if `n` is `Some(0)`.
    fn chunked(self, n: Option<usize>) -> Result<Chunked<Self>> {
        chunked(self, n)
    }

    /// See [`chunked_strict`].
    ///
    /// # Errors
    ///
    /// Returns [`ChunkwiseError::InvalidArgument`] if `n` is `None` or `Some(0)`.
    fn chunked_strict(self, n: Option<usize>) -> Result<StrictChunked<Self>> {
        chunked_strict(self, n)
    }
}

impl<I: Iterator> ChunkedExt for I {}
