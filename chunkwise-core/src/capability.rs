// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Capability traits for reaching the end of a source.
//!
//! Operators such as `last` and `always_reversible` pick their strategy by what
//! a source can do rather than what it is:
//!
//! | Capability | Examples | `Tail` cost | `Reversible` cost |
//! |------------|----------|-------------|-------------------|
//! | random access | `Vec`, `VecDeque`, slices, arrays | $O(1)$ | no copy |
//! | reverse iteration | ranges, [`DoubleEnded`] | $O(1)$ | no copy |
//! | single pass | [`SinglePass`] | $O(n)$ time, $O(1)$ space | $O(n)$ buffer |
//!
//! Arbitrary iterators are routed through a wrapper that names the capability
//! they have, see [`SourceExt`]. Custom sequence types join in by implementing
//! the traits directly.

use std::collections::{btree_set, vec_deque, BTreeMap, BTreeSet, VecDeque};
use std::iter::{FusedIterator, Rev};
use std::ops::{Range, RangeInclusive};
use std::str::Chars;
use std::{array, slice, vec};

/// Sources that can hand over their final element.
pub trait Tail {
    /// Element type
    type Item;

    /// Consumes the source and returns its final element, if any.
    fn tail(self) -> Option<Self::Item>;
}

/// Sources that can be iterated back to front.
pub trait Reversible {
    /// Element type
    type Item;
    /// Iterator over the elements in reverse order
    type Reversed: Iterator<Item = Self::Item>;

    /// Consumes the source and returns an iterator over its elements, last first.
    fn reversed(self) -> Self::Reversed;
}

/// Marks an iterator whose back end is directly reachable.
#[derive(Debug, Clone)]
pub struct DoubleEnded<I>(I);

impl<I: DoubleEndedIterator> DoubleEnded<I> {
    /// Wraps `iter`.
    pub const fn new(iter: I) -> Self {
        Self(iter)
    }
}

impl<I> DoubleEnded<I> {
    /// Unwraps the iterator.
    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<I: Iterator> Iterator for DoubleEnded<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for DoubleEnded<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<I: DoubleEndedIterator> Tail for DoubleEnded<I> {
    type Item = I::Item;

    fn tail(mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<I: DoubleEndedIterator> Reversible for DoubleEnded<I> {
    type Item = I::Item;
    type Reversed = Rev<I>;

    fn reversed(self) -> Self::Reversed {
        self.0.rev()
    }
}

/// Marks an iterator that can only be walked forward, once.
#[derive(Debug, Clone)]
pub struct SinglePass<I>(I);

impl<I: Iterator> SinglePass<I> {
    /// Wraps `iter`.
    pub const fn new(iter: I) -> Self {
        Self(iter)
    }
}

impl<I> SinglePass<I> {
    /// Unwraps the iterator.
    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<I: Iterator> Iterator for SinglePass<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I: Iterator> Tail for SinglePass<I> {
    type Item = I::Item;

    // Keeps only the most recent element; never buffers the whole source.
    fn tail(self) -> Option<Self::Item> {
        self.0.fold(None, |_, item| Some(item))
    }
}

impl<I: Iterator> Reversible for SinglePass<I> {
    type Item = I::Item;
    type Reversed = Rev<vec::IntoIter<I::Item>>;

    fn reversed(self) -> Self::Reversed {
        self.0.collect::<Vec<_>>().into_iter().rev()
    }
}

/// Extension trait tagging iterators with the capability they offer.
///
/// ```
/// use chunkwise_core::{SourceExt, Tail};
///
/// assert_eq!((1..=4).map(|x| x * 10).double_ended().tail(), Some(40));
/// assert_eq!((1..=4).filter(|x| x % 2 == 1).single_pass().tail(), Some(3));
/// ```
pub trait SourceExt: Iterator + Sized {
    /// Declares that the back end of this iterator is directly reachable.
    fn double_ended(self) -> DoubleEnded<Self>
    where
        Self: DoubleEndedIterator,
    {
        DoubleEnded::new(self)
    }

    /// Declares that this iterator can only be walked forward.
    fn single_pass(self) -> SinglePass<Self> {
        SinglePass::new(self)
    }
}

impl<I: Iterator> SourceExt for I {}

impl<I: FusedIterator> FusedIterator for DoubleEnded<I> {}
impl<I: FusedIterator> FusedIterator for SinglePass<I> {}

impl<T> Tail for Vec<T> {
    type Item = T;

    fn tail(mut self) -> Option<T> {
        self.pop()
    }
}

impl<'a, T> Tail for &'a Vec<T> {
    type Item = &'a T;

    fn tail(self) -> Option<&'a T> {
        self.last()
    }
}

impl<'a, T> Tail for &'a [T] {
    type Item = &'a T;

    fn tail(self) -> Option<&'a T> {
        self.last()
    }
}

impl<T, const N: usize> Tail for [T; N] {
    type Item = T;

    fn tail(self) -> Option<T> {
        self.into_iter().next_back()
    }
}

impl<T> Tail for VecDeque<T> {
    type Item = T;

    fn tail(mut self) -> Option<T> {
        self.pop_back()
    }
}

impl<'a, T> Tail for &'a VecDeque<T> {
    type Item = &'a T;

    fn tail(self) -> Option<&'a T> {
        self.back()
    }
}

impl<T: Ord> Tail for BTreeSet<T> {
    type Item = T;

    fn tail(mut self) -> Option<T> {
        self.pop_last()
    }
}

impl<K: Ord, V> Tail for BTreeMap<K, V> {
    type Item = (K, V);

    fn tail(mut self) -> Option<(K, V)> {
        self.pop_last()
    }
}

impl<A> Tail for Range<A>
where
    Range<A>: DoubleEndedIterator,
{
    type Item = <Range<A> as Iterator>::Item;

    fn tail(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<A> Tail for RangeInclusive<A>
where
    RangeInclusive<A>: DoubleEndedIterator,
{
    type Item = <RangeInclusive<A> as Iterator>::Item;

    fn tail(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl Tail for &str {
    type Item = char;

    fn tail(self) -> Option<char> {
        self.chars().next_back()
    }
}

impl<T> Reversible for Vec<T> {
    type Item = T;
    type Reversed = Rev<vec::IntoIter<T>>;

    fn reversed(self) -> Self::Reversed {
        self.into_iter().rev()
    }
}

impl<'a, T> Reversible for &'a Vec<T> {
    type Item = &'a T;
    type Reversed = Rev<slice::Iter<'a, T>>;

    fn reversed(self) -> Self::Reversed {
        self.iter().rev()
    }
}

impl<'a, T> Reversible for &'a [T] {
    type Item = &'a T;
    type Reversed = Rev<slice::Iter<'a, T>>;

    fn reversed(self) -> Self::Reversed {
        self.iter().rev()
    }
}

impl<T, const N: usize> Reversible for [T; N] {
    type Item = T;
    type Reversed = Rev<array::IntoIter<T, N>>;

    fn reversed(self) -> Self::Reversed {
        self.into_iter().rev()
    }
}

impl<T> Reversible for VecDeque<T> {
    type Item = T;
    type Reversed = Rev<vec_deque::IntoIter<T>>;

    fn reversed(self) -> Self::Reversed {
        self.into_iter().rev()
    }
}

impl<'a, T> Reversible for &'a VecDeque<T> {
    type Item = &'a T;
    type Reversed = Rev<vec_deque::Iter<'a, T>>;

    fn reversed(self) -> Self::Reversed {
        self.iter().rev()
    }
}

impl<T> Reversible for BTreeSet<T> {
    type Item = T;
    type Reversed = Rev<btree_set::IntoIter<T>>;

    fn reversed(self) -> Self::Reversed {
        self.into_iter().rev()
    }
}

impl<A> Reversible for Range<A>
where
    Range<A>: DoubleEndedIterator,
{
    type Item = <Range<A> as Iterator>::Item;
    type Reversed = Rev<Range<A>>;

    fn reversed(self) -> Self::Reversed {
        self.rev()
    }
}

impl<A> Reversible for RangeInclusive<A>
where
    RangeInclusive<A>: DoubleEndedIterator,
{
    type Item = <RangeInclusive<A> as Iterator>::Item;
    type Reversed = Rev<RangeInclusive<A>>;

    fn reversed(self) -> Self::Reversed {
        self.rev()
    }
}

impl<'a> Reversible for &'a str {
    type Item = char;
    type Reversed = Rev<Chars<'a>>;

    fn reversed(self) -> Self::Reversed {
        self.chars().rev()
    }
}
