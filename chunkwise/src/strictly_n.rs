// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazily enforce an exact element count.
//!
//! [`strictly_n`] yields the first `n` elements as `Ok` and then checks the
//! count. A source that is too short or too long is reported by a callback;
//! if the callback returns `Err`, that error is yielded as the final item.
//! Callbacks returning `Ok(())` end iteration silently, so
//! [`strictly_n_with`] can also be used to merely observe a mismatch.
//!
//! ```
//! use chunkwise::StrictlyNExt;
//!
//! let items: Vec<_> = "abc".chars().strictly_n(3).collect::<Result<_, _>>()?;
//! assert_eq!(items, vec!['a', 'b', 'c']);
//!
//! let short: Result<Vec<_>, _> = "ab".chars().strictly_n(3).collect();
//! assert_eq!(
//!     short.unwrap_err().to_string(),
//!     "Too few items in iterable (expected 3, got 2)"
//! );
//! # Ok::<(), chunkwise::ChunkwiseError>(())
//! ```

use chunkwise_core::{ChunkwiseError, Result};
use std::iter::FusedIterator;

/// Iterator returned by [`strictly_n_with`].
#[derive(Debug, Clone)]
pub struct StrictlyN<I, S, L> {
    iter: I,
    n: usize,
    yielded: usize,
    too_short: Option<S>,
    too_long: Option<L>,
    done: bool,
}

impl<I, S, L> Iterator for StrictlyN<I, S, L>
where
    I: Iterator,
    S: FnOnce(usize) -> Result<()>,
    L: FnOnce(usize) -> Result<()>,
{
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.yielded < self.n {
            if let Some(item) = self.iter.next() {
                self.yielded += 1;
                return Some(Ok(item));
            }
            self.done = true;
            let too_short = self.too_short.take()?;
            return too_short(self.yielded).err().map(Err);
        }

        // Probe for one extra element; anything past it is never pulled.
        self.done = true;
        self.iter.next()?;
        let too_long = self.too_long.take()?;
        too_long(self.n + 1).err().map(Err)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = self.n - self.yielded;
        let (lower, upper) = self.iter.size_hint();
        (
            lower.min(remaining),
            upper.map(|upper| upper.min(remaining) + 1),
        )
    }
}

impl<I, S, L> FusedIterator for StrictlyN<I, S, L>
where
    I: Iterator,
    S: FnOnce(usize) -> Result<()>,
    L: FnOnce(usize) -> Result<()>,
{
}

/// Yields exactly the first `n` elements of `source`.
///
/// If the source has fewer, a [`ChunkwiseError::TooFew`] is yielded after the
/// available elements. If it has more, a [`ChunkwiseError::TooMany`] is
/// yielded after the first `n`. Either way iteration then ends.
pub fn strictly_n<S>(source: S, n: usize) -> impl Iterator<Item = Result<S::Item>>
where
    S: IntoIterator,
{
    strictly_n_with(
        source,
        n,
        move |got| Err(ChunkwiseError::too_few(n, got)),
        move |at_least| Err(ChunkwiseError::too_many(n, at_least)),
    )
}

/// Like [`strictly_n`], with caller-supplied callbacks.
///
/// `too_short` receives the number of elements actually available,
/// `too_long` receives `n + 1`. Each is called at most once. Elements beyond
/// the first `n` are never yielded, even when `too_long` returns `Ok(())`.
///
/// # Examples
///
/// ```
/// use chunkwise::strictly_n_with;
/// use std::cell::Cell;
///
/// let seen = Cell::new(None);
/// let items: Vec<_> = strictly_n_with(
///     1..=5,
///     3,
///     |_| Ok(()),
///     |at_least| {
///         seen.set(Some(at_least));
///         Ok(())
///     },
/// )
/// .collect::<Result<_, _>>()?;
///
/// assert_eq!(items, vec![1, 2, 3]);
/// assert_eq!(seen.get(), Some(4));
/// # Ok::<(), chunkwise::ChunkwiseError>(())
/// ```
pub fn strictly_n_with<S, F, G>(
    source: S,
    n: usize,
    too_short: F,
    too_long: G,
) -> StrictlyN<S::IntoIter, F, G>
where
    S: IntoIterator,
    F: FnOnce(usize) -> Result<()>,
    G: FnOnce(usize) -> Result<()>,
{
    StrictlyN {
        iter: source.into_iter(),
        n,
        yielded: 0,
        too_short: Some(too_short),
        too_long: Some(too_long),
        done: false,
    }
}

/// Extension trait providing [`strictly_n`] on any iterator.
pub trait StrictlyNExt: Iterator + Sized {
    /// See [`strictly_n`].
    fn strictly_n(self, n: usize) -> impl Iterator<Item = Result<Self::Item>> {
        strictly_n(self, n)
    }

    /// See [`strictly_n_with`].
    fn strictly_n_with<F, G>(self, n: usize, too_short: F, too_long: G) -> StrictlyN<Self, F, G>
    where
        F: FnOnce(usize) -> Result<()>,
        G: FnOnce(usize) -> Result<()>,
    {
        strictly_n_with(self, n, too_short, too_long)
    }
}

impl<I: Iterator> StrictlyNExt for I {}
