// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

/// Iterator returned by [`interleave`].
pub struct Interleave<I: Iterator> {
    sources: Vec<I>,
    round: VecDeque<I::Item>,
    done: bool,
}

impl<I> Clone for Interleave<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            sources: self.sources.clone(),
            round: self.round.clone(),
            done: self.done,
        }
    }
}

impl<I> fmt::Debug for Interleave<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interleave")
            .field("sources", &self.sources)
            .field("round", &self.round)
            .field("done", &self.done)
            .finish()
    }
}

impl<I: Iterator> Iterator for Interleave<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(item) = self.round.pop_front() {
            return Some(item);
        }
        if self.done {
            return None;
        }

        // A round is only released once every source has contributed to it.
        for source in &mut self.sources {
            match source.next() {
                Some(item) => self.round.push_back(item),
                None => {
                    self.done = true;
                    self.round.clear();
                    return None;
                }
            }
        }

        let item = self.round.pop_front();
        if item.is_none() {
            self.done = true;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.round.len();
        if self.done {
            return (buffered, Some(buffered));
        }
        let rounds = self
            .sources
            .iter()
            .map(Iterator::size_hint)
            .reduce(|(lo_a, hi_a), (lo_b, hi_b)| {
                let hi = match (hi_a, hi_b) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
                (lo_a.min(lo_b), hi)
            })
            .unwrap_or((0, Some(0)));
        let width = self.sources.len();
        (
            buffered.saturating_add(rounds.0.saturating_mul(width)),
            rounds
                .1
                .and_then(|hi| hi.checked_mul(width))
                .and_then(|hi| hi.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> FusedIterator for Interleave<I> {}

/// Takes one element from each source in turn, round-robin.
///
/// Stops as soon as any source runs out. A round that cannot be completed is
/// dropped, so the output length is the number of sources times the length of
/// the shortest one. No sources at all give an empty iterator.
///
/// # Examples
///
/// ```
/// use chunkwise::interleave;
///
/// let merged: Vec<_> = interleave([vec![1, 4], vec![2, 5, 7], vec![3, 6, 8]]).collect();
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn interleave<S>(sources: S) -> Interleave<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Interleave {
        sources: sources.into_iter().map(IntoIterator::into_iter).collect(),
        round: VecDeque::new(),
        done: false,
    }
}

/// Extension trait providing [`interleave`] with other iterators of the same type.
pub trait InterleaveExt: Iterator + Sized {
    /// Interleaves `self` with `others`, `self` first in every round.
    ///
    /// ```
    /// use chunkwise::InterleaveExt;
    ///
    /// let merged: String = "ace".chars().interleave_with(["bdf".chars()]).collect();
    /// assert_eq!(merged, "abcdef");
    /// ```
    fn interleave_with<O>(self, others: O) -> Interleave<Self>
    where
        O: IntoIterator<Item = Self>,
    {
        interleave(std::iter::once(self).chain(others))
    }
}

impl<I: Iterator> InterleaveExt for I {}
