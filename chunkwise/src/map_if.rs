// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::convert::identity;
use std::iter::FusedIterator;

/// Iterator returned by [`map_if`] and [`map_if_else`].
#[derive(Debug, Clone)]
pub struct MapIf<I, P, F, G> {
    iter: I,
    pred: P,
    then: F,
    otherwise: G,
}

impl<I, P, F, G, U> Iterator for MapIf<I, P, F, G>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> U,
    G: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let item = self.iter.next()?;
        Some(if (self.pred)(&item) {
            (self.then)(item)
        } else {
            (self.otherwise)(item)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, P, F, G, U> FusedIterator for MapIf<I, P, F, G>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> U,
    G: FnMut(I::Item) -> U,
{
}

/// Applies `then` to the elements matching `pred`, passing the others through.
///
/// # Examples
///
/// ```
/// use chunkwise::map_if;
///
/// let clamped: Vec<_> = map_if([-2, 3, -5], |n| *n < 0, |_| 0).collect();
/// assert_eq!(clamped, vec![0, 3, 0]);
/// ```
pub fn map_if<S, P, F>(source: S, pred: P, then: F) -> MapIf<S::IntoIter, P, F, fn(S::Item) -> S::Item>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
    F: FnMut(S::Item) -> S::Item,
{
    let otherwise: fn(S::Item) -> S::Item = identity;
    map_if_else(source, pred, then, otherwise)
}

/// Applies `then` to the elements matching `pred` and `otherwise` to the rest.
///
/// Exactly one of the two is called per element, in element order.
///
/// # Examples
///
/// ```
/// use chunkwise::map_if_else;
///
/// let labels: Vec<_> = map_if_else(
///     1..=4,
///     |n| n % 2 == 0,
///     |n| format!("{n} is even"),
///     |n| format!("{n} is odd"),
/// )
/// .collect();
/// assert_eq!(labels[1], "2 is even");
/// assert_eq!(labels[2], "3 is odd");
/// ```
pub fn map_if_else<S, P, F, G, U>(source: S, pred: P, then: F, otherwise: G) -> MapIf<S::IntoIter, P, F, G>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
    F: FnMut(S::Item) -> U,
    G: FnMut(S::Item) -> U,
{
    MapIf {
        iter: source.into_iter(),
        pred,
        then,
        otherwise,
    }
}

/// Extension trait providing [`map_if`] and [`map_if_else`] on any iterator.
pub trait MapIfExt: Iterator + Sized {
    /// See [`map_if`].
    fn map_if<P, F>(self, pred: P, then: F) -> MapIf<Self, P, F, fn(Self::Item) -> Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnMut(Self::Item) -> Self::Item,
    {
        map_if(self, pred, then)
    }

    /// See [`map_if_else`].
    fn map_if_else<P, F, G, U>(self, pred: P, then: F, otherwise: G) -> MapIf<Self, P, F, G>
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnMut(Self::Item) -> U,
        G: FnMut(Self::Item) -> U,
    {
        map_if_else(self, pred, then, otherwise)
    }
}

impl<I: Iterator> MapIfExt for I {}
