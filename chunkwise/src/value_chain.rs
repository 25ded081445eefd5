// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::always_iterable::AlwaysIterable;

/// Chains `values` together, expanding containers by one level.
///
/// Each value goes through [`AlwaysIterable`]: strings and scalars are yielded
/// whole, collections contribute their elements. For arguments of different
/// types use the [`value_chain!`](crate::value_chain!) macro.
///
/// # Examples
///
/// ```
/// use chunkwise::value_chain;
///
/// let flat: Vec<_> = value_chain([vec![1, 2], vec![], vec![3]]).collect();
/// assert_eq!(flat, vec![1, 2, 3]);
///
/// let words: Vec<_> = value_chain(["foo", "bar"]).collect();
/// assert_eq!(words, vec!["foo", "bar"]);
/// ```
pub fn value_chain<S>(values: S) -> impl Iterator<Item = <S::Item as AlwaysIterable>::Item>
where
    S: IntoIterator,
    S::Item: AlwaysIterable,
{
    values.into_iter().flat_map(AlwaysIterable::always_iter)
}

/// Chains heterogeneous arguments that share an element type.
///
/// Each argument is expanded through [`AlwaysIterable`], left to right.
/// Scalar literals need a type suffix, as in `1i32`.
///
/// ```
/// use chunkwise::{value_chain, Spread};
///
/// let numbers: Vec<i32> = value_chain!(1i32, [2, 3], Some(4i32), None::<i32>, Spread(5..7)).collect();
/// assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
///
/// let words: Vec<&str> = value_chain!("abc", vec!["def", "ghi"]).collect();
/// assert_eq!(words, vec!["abc", "def", "ghi"]);
///
/// let nothing: Vec<u8> = value_chain!().collect();
/// assert!(nothing.is_empty());
/// ```
#[macro_export]
macro_rules! value_chain {
    () => {
        ::core::iter::empty()
    };
    ($($value:expr),+ $(,)?) => {
        ::core::iter::empty()
            $(.chain($crate::AlwaysIterable::always_iter($value)))+
    };
}
