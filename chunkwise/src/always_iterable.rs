// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Uniform iteration over values that may or may not be collections.
//!
//! [`AlwaysIterable`] decides per type whether a value is a container to be
//! expanded or an atomic value to be yielded as-is:
//!
//! | Input | Yields |
//! |-------|--------|
//! | `None` | nothing |
//! | `Some(x)` | whatever `x` yields |
//! | numbers, `bool`, `char` | the value itself |
//! | `String`, `&str`, `Box<str>`, `Cow<str>` | the whole string, once |
//! | [`Atomic(x)`](Atomic) | `x`, once, whatever its type |
//! | `Vec`, `VecDeque`, arrays, slices, sets | their elements |
//! | `BTreeMap`, `HashMap` | their keys |
//! | [`Spread(x)`](Spread) | the elements of any `IntoIterator`, e.g. a string's `chars()` |
//!
//! Every numeric type has its own implementation, so a bare numeric literal
//! is ambiguous: write `7i32` or `2.5f64` when passing one directly.
//!
//! ```
//! use chunkwise::{always_iterable, Atomic, Spread};
//!
//! assert_eq!(always_iterable(None::<i32>).count(), 0);
//! assert_eq!(always_iterable(7i32).collect::<Vec<_>>(), vec![7]);
//! assert_eq!(always_iterable("foo").collect::<Vec<_>>(), vec!["foo"]);
//! assert_eq!(always_iterable(vec![1, 2]).collect::<Vec<_>>(), vec![1, 2]);
//! assert_eq!(always_iterable(Spread("ab".chars())).collect::<String>(), "ab");
//! assert_eq!(always_iterable(Atomic(vec![1, 2])).collect::<Vec<_>>(), vec![vec![1, 2]]);
//! ```

use std::borrow::Cow;
use std::collections::{
    btree_map, btree_set, hash_map, hash_set, vec_deque, BTreeMap, BTreeSet, HashMap, HashSet,
    VecDeque,
};
use std::iter::{self, Flatten, Once};
use std::{array, option, slice, vec};

/// Values that can always be iterated, either as containers or as a single
/// atomic element.
pub trait AlwaysIterable {
    /// Element type
    type Item;
    /// Iterator over the elements
    type IntoIter: Iterator<Item = Self::Item>;

    /// Converts the value into an iterator.
    fn always_iter(self) -> Self::IntoIter;
}

/// Treats the wrapped value as a single element, even if it is a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Atomic<T>(pub T);

/// Expands any `IntoIterator` into its elements.
///
/// Use it for iterators, ranges and for strings that should be taken apart,
/// as in `Spread(s.chars())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Spread<I>(pub I);

impl<T> AlwaysIterable for Atomic<T> {
    type Item = T;
    type IntoIter = Once<T>;

    fn always_iter(self) -> Self::IntoIter {
        iter::once(self.0)
    }
}

impl<I: IntoIterator> AlwaysIterable for Spread<I> {
    type Item = I::Item;
    type IntoIter = I::IntoIter;

    fn always_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: AlwaysIterable> AlwaysIterable for Option<T> {
    type Item = T::Item;
    type IntoIter = Flatten<option::IntoIter<T::IntoIter>>;

    fn always_iter(self) -> Self::IntoIter {
        self.map(AlwaysIterable::always_iter).into_iter().flatten()
    }
}

macro_rules! atomic {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AlwaysIterable for $ty {
                type Item = $ty;
                type IntoIter = Once<$ty>;

                fn always_iter(self) -> Self::IntoIter {
                    iter::once(self)
                }
            }
        )*
    };
}

atomic!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    Box<str>,
);

impl<'a> AlwaysIterable for &'a str {
    type Item = &'a str;
    type IntoIter = Once<&'a str>;

    fn always_iter(self) -> Self::IntoIter {
        iter::once(self)
    }
}

impl<'a> AlwaysIterable for Cow<'a, str> {
    type Item = Cow<'a, str>;
    type IntoIter = Once<Cow<'a, str>>;

    fn always_iter(self) -> Self::IntoIter {
        iter::once(self)
    }
}

macro_rules! spread {
    ($(impl<$($gen:tt),*> for $ty:ty => $iter:ty;)*) => {
        $(
            impl<$($gen),*> AlwaysIterable for $ty {
                type Item = <$iter as Iterator>::Item;
                type IntoIter = $iter;

                fn always_iter(self) -> Self::IntoIter {
                    self.into_iter()
                }
            }
        )*
    };
}

spread! {
    impl<T> for Vec<T> => vec::IntoIter<T>;
    impl<T> for VecDeque<T> => vec_deque::IntoIter<T>;
    impl<T> for BTreeSet<T> => btree_set::IntoIter<T>;
    impl<T, S> for HashSet<T, S> => hash_set::IntoIter<T>;
    impl<'a, T> for &'a [T] => slice::Iter<'a, T>;
    impl<'a, T> for &'a Vec<T> => slice::Iter<'a, T>;
    impl<'a, T> for &'a VecDeque<T> => vec_deque::Iter<'a, T>;
}

impl<T, const N: usize> AlwaysIterable for [T; N] {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn always_iter(self) -> Self::IntoIter {
        self.into_iter()
    }
}

impl<K, V> AlwaysIterable for BTreeMap<K, V> {
    type Item = K;
    type IntoIter = btree_map::IntoKeys<K, V>;

    fn always_iter(self) -> Self::IntoIter {
        self.into_keys()
    }
}

impl<K, V, S> AlwaysIterable for HashMap<K, V, S> {
    type Item = K;
    type IntoIter = hash_map::IntoKeys<K, V>;

    fn always_iter(self) -> Self::IntoIter {
        self.into_keys()
    }
}

/// Converts `value` into an iterator, see the [module documentation](self).
pub fn always_iterable<T: AlwaysIterable>(value: T) -> T::IntoIter {
    value.always_iter()
}
