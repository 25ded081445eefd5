// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Inverse of a running accumulation.
//!
//! [`difference`] undoes a running sum: the first element is passed through,
//! every later one is replaced by its difference to the element before it.
//! [`difference_by`] takes any binary operation in place of subtraction.
//!
//! ```
//! use chunkwise::DifferenceExt;
//!
//! let running_total = [0, 1, 3, 6, 10];
//! let steps: Vec<_> = running_total.into_iter().difference().collect();
//! assert_eq!(steps, vec![0, 1, 2, 3, 4]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Sub;

/// Iterator returned by [`difference`] and [`difference_by`].
pub struct Difference<I: Iterator, F> {
    iter: I,
    op: F,
    previous: Option<I::Item>,
    skip_first: bool,
}

impl<I, F> Clone for Difference<I, F>
where
    I: Iterator + Clone,
    I::Item: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            op: self.op.clone(),
            previous: self.previous.clone(),
            skip_first: self.skip_first,
        }
    }
}

// The operation is usually a closure, so it is left out.
impl<I, F> fmt::Debug for Difference<I, F>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Difference")
            .field("iter", &self.iter)
            .field("previous", &self.previous)
            .field("skip_first", &self.skip_first)
            .finish_non_exhaustive()
    }
}

impl<I, F> Iterator for Difference<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let mut current = self.iter.next()?;
        let mut previous = self.previous.replace(current.clone());
        if previous.is_none() && self.skip_first {
            // The first element is only the baseline the accumulation started from.
            previous = Some(current);
            current = self.iter.next()?;
            self.previous = Some(current.clone());
        }
        match previous {
            Some(previous) => Some((self.op)(current, previous)),
            None => Some(current),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.skip_first && self.previous.is_none() {
            (
                lower.saturating_sub(1),
                upper.map(|upper| upper.saturating_sub(1)),
            )
        } else {
            (lower, upper)
        }
    }
}

impl<I, F> FusedIterator for Difference<I, F>
where
    I: FusedIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
}

/// Yields the first element of `source`, then each element minus its predecessor.
///
/// An empty source gives an empty iterator.
pub fn difference<S>(source: S) -> Difference<S::IntoIter, fn(S::Item, S::Item) -> S::Item>
where
    S: IntoIterator,
    S::Item: Sub<Output = S::Item> + Clone,
{
    let op: fn(S::Item, S::Item) -> S::Item = <S::Item as Sub>::sub;
    difference_by(source, op, false)
}

/// Like [`difference`], with `op(current, previous)` in place of subtraction.
///
/// Set `initial` when the accumulation being undone was seeded with a
/// starting value: the first element of `source` is then only used as the
/// predecessor of the second and is not yielded itself.
///
/// # Examples
///
/// ```
/// use chunkwise::difference_by;
///
/// let sums: Vec<_> = difference_by([10, 20, 30, 40, 50], |a, b| a + b, false).collect();
/// assert_eq!(sums, vec![10, 30, 50, 70, 90]);
///
/// // Running sum of [1, 2, 3] seeded with 10.
/// let seeded = [10, 11, 13, 16];
/// let steps: Vec<_> = difference_by(seeded, |a, b| a - b, true).collect();
/// assert_eq!(steps, vec![1, 2, 3]);
/// ```
pub fn difference_by<S, F>(source: S, op: F, initial: bool) -> Difference<S::IntoIter, F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    Difference {
        iter: source.into_iter(),
        op,
        previous: None,
        skip_first: initial,
    }
}

/// Extension trait providing [`difference`] and [`difference_by`] on any iterator.
pub trait DifferenceExt: Iterator + Sized
where
    Self::Item: Clone,
{
    /// See [`difference`].
    fn difference(self) -> Difference<Self, fn(Self::Item, Self::Item) -> Self::Item>
    where
        Self::Item: Sub<Output = Self::Item>,
    {
        difference(self)
    }

    /// See [`difference_by`].
    fn difference_by<F>(self, op: F, initial: bool) -> Difference<Self, F>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        difference_by(self, op, initial)
    }
}

impl<I> DifferenceExt for I
where
    I: Iterator,
    I::Item: Clone,
{
}
