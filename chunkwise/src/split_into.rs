// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::log_warn;
use chunkwise_core::{ChunkwiseError, Result};
use std::fmt::Debug;
use std::iter::FusedIterator;

/// Iterator returned by [`split_into`].
#[derive(Debug, Clone)]
pub struct SplitInto<I, Z> {
    iter: I,
    sizes: Z,
    done: bool,
}

impl<I, Z, N> Iterator for SplitInto<I, Z>
where
    I: Iterator,
    Z: Iterator<Item = Option<N>>,
    N: TryInto<usize> + Clone + Debug,
{
    type Item = Result<Vec<I::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(size) = self.sizes.next() else {
            self.done = true;
            return None;
        };

        let Some(size) = size else {
            self.done = true;
            return Some(Ok(self.iter.by_ref().collect()));
        };

        match size.clone().try_into() {
            Ok(len) => Some(Ok(self.iter.by_ref().take(len).collect())),
            Err(_) => {
                log_warn!("split_into: rejected group size {:?}", size);
                self.done = true;
                Some(Err(ChunkwiseError::invalid_argument(format!(
                    "group size {size:?} is not a valid length"
                ))))
            }
        }
    }
}

impl<I, Z, N> FusedIterator for SplitInto<I, Z>
where
    I: Iterator,
    Z: Iterator<Item = Option<N>>,
    N: TryInto<usize> + Clone + Debug,
{
}

/// Splits `source` into consecutive groups with the lengths given by `sizes`.
///
/// One group is yielded per size, in order. Groups come out shorter, and
/// eventually empty, once the source runs dry. A `None` size takes every
/// remaining element and ends iteration without looking at further sizes.
/// Elements beyond the sum of the sizes are never pulled. Sizes are read
/// lazily, one per group, and may be any type convertible to `usize`
/// (unsigned and signed integers, `bool`).
///
/// A size that does not convert, such as a negative number, is yielded as
/// [`ChunkwiseError::InvalidArgument`] and ends iteration.
///
/// # Examples
///
/// ```
/// use chunkwise::split_into;
///
/// let groups: Vec<_> = split_into(1..=9, [Some(2), Some(3), None])
///     .collect::<Result<_, _>>()?;
/// assert_eq!(groups, vec![vec![1, 2], vec![3, 4, 5], vec![6, 7, 8, 9]]);
///
/// let mut groups = split_into(1..=9, [Some(1), Some(-1)]);
/// assert_eq!(groups.next().transpose()?, Some(vec![1]));
/// assert!(groups.next().is_some_and(|group| group.is_err()));
/// assert!(groups.next().is_none());
/// # Ok::<(), chunkwise::ChunkwiseError>(())
/// ```
pub fn split_into<S, Z, N>(source: S, sizes: Z) -> SplitInto<S::IntoIter, Z::IntoIter>
where
    S: IntoIterator,
    Z: IntoIterator<Item = Option<N>>,
    N: TryInto<usize> + Clone + Debug,
{
    SplitInto {
        iter: source.into_iter(),
        sizes: sizes.into_iter(),
        done: false,
    }
}

/// Extension trait providing [`split_into`] on any iterator.
pub trait SplitIntoExt: Iterator + Sized {
    /// See [`split_into`].
    fn split_into<Z, N>(self, sizes: Z) -> SplitInto<Self, Z::IntoIter>
    where
        Z: IntoIterator<Item = Option<N>>,
        N: TryInto<usize> + Clone + Debug,
    {
        split_into(self, sizes)
    }
}

impl<I: Iterator> SplitIntoExt for I {}
