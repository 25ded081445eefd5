// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Splitting,
    Remainder,
    Done,
}

/// Iterator returned by [`split_after`].
#[derive(Debug, Clone)]
pub struct SplitAfter<I, P> {
    iter: I,
    pred: P,
    splits_left: Option<usize>,
    phase: Phase,
}

impl<I, P> Iterator for SplitAfter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Done => None,
            Phase::Remainder => {
                self.phase = Phase::Done;
                Some(self.iter.by_ref().collect())
            }
            Phase::Splitting => {
                let mut group = Vec::new();
                for item in self.iter.by_ref() {
                    let split = (self.pred)(&item);
                    group.push(item);
                    if split {
                        match &mut self.splits_left {
                            Some(1) => self.phase = Phase::Remainder,
                            Some(left) => *left -= 1,
                            None => {}
                        }
                        return Some(group);
                    }
                }
                self.phase = Phase::Done;
                (!group.is_empty()).then_some(group)
            }
        }
    }
}

impl<I, P> FusedIterator for SplitAfter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Splits `source` into groups, each ending with an element matching `pred`.
///
/// A trailing group without a match is yielded at the end if it is not empty.
/// With `max_splits = Some(k)` at most `k` splits are made and everything
/// after the last one is yielded as a final group, which may be empty.
/// `Some(0)` yields the whole source as one group, even when it is empty.
/// `pred` is called once per element up to the last split.
///
/// # Examples
///
/// ```
/// use chunkwise::split_after;
///
/// let groups: Vec<String> = split_after("one1two2".chars(), char::is_ascii_digit, None)
///     .map(String::from_iter)
///     .collect();
/// assert_eq!(groups, vec!["one1", "two2"]);
///
/// let groups: Vec<_> = split_after(0..10, |n| n % 3 == 0, Some(2)).collect();
/// assert_eq!(groups, vec![vec![0], vec![1, 2, 3], vec![4, 5, 6, 7, 8, 9]]);
/// ```
pub fn split_after<S, P>(source: S, pred: P, max_splits: Option<usize>) -> SplitAfter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    SplitAfter {
        iter: source.into_iter(),
        pred,
        splits_left: max_splits,
        phase: if max_splits == Some(0) {
            Phase::Remainder
        } else {
            Phase::Splitting
        },
    }
}

/// Extension trait providing [`split_after`] on any iterator.
pub trait SplitAfterExt: Iterator + Sized {
    /// See [`split_after`].
    fn split_after<P>(self, pred: P, max_splits: Option<usize>) -> SplitAfter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        split_after(self, pred, max_splits)
    }
}

impl<I: Iterator> SplitAfterExt for I {}
