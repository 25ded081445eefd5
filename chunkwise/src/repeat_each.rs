// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;
use std::iter::FusedIterator;

/// Iterator returned by [`repeat_each`].
pub struct RepeatEach<I: Iterator> {
    iter: I,
    times: usize,
    current: Option<I::Item>,
    left: usize,
}

impl<I> Clone for RepeatEach<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            times: self.times,
            current: self.current.clone(),
            left: self.left,
        }
    }
}

impl<I> fmt::Debug for RepeatEach<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepeatEach")
            .field("iter", &self.iter)
            .field("times", &self.times)
            .field("current", &self.current)
            .field("left", &self.left)
            .finish()
    }
}

impl<I> Iterator for RepeatEach<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.times == 0 {
            return None;
        }
        if self.left == 0 {
            self.current = Some(self.iter.next()?);
            self.left = self.times;
        }
        self.left -= 1;
        if self.left == 0 {
            // Last copy: hand over the original instead of cloning it.
            self.current.take()
        } else {
            self.current.clone()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.times == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_mul(self.times).saturating_add(self.left),
            upper
                .and_then(|upper| upper.checked_mul(self.times))
                .and_then(|upper| upper.checked_add(self.left)),
        )
    }
}

impl<I> FusedIterator for RepeatEach<I>
where
    I: FusedIterator,
    I::Item: Clone,
{
}

/// Repeats each element of `source` `n` times in a row.
///
/// Lazy: one element is pulled for every `n` yielded. With `n == 0` the result
/// is empty and the source is never touched.
///
/// # Examples
///
/// ```
/// use chunkwise::repeat_each;
///
/// let doubled: String = repeat_each("abc".chars(), 2).collect();
/// assert_eq!(doubled, "aabbcc");
/// ```
pub fn repeat_each<S>(source: S, n: usize) -> RepeatEach<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    RepeatEach {
        iter: source.into_iter(),
        times: n,
        current: None,
        left: 0,
    }
}

/// Extension trait providing [`repeat_each`] on any iterator.
pub trait RepeatEachExt: Iterator + Sized
where
    Self::Item: Clone,
{
    /// See [`repeat_each`].
    fn repeat_each(self, n: usize) -> RepeatEach<Self> {
        repeat_each(self, n)
    }
}

impl<I> RepeatEachExt for I
where
    I: Iterator,
    I::Item: Clone,
{
}
