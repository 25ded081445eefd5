// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise_core::{ChunkwiseError, Result};

/// Drains a fallible iterator, returning the values yielded before the first
/// error together with that error.
///
/// Panics if anything is yielded after the error, since every operator in the
/// workspace stops right after reporting one.
pub fn drain_results<T>(
    iter: impl IntoIterator<Item = Result<T>>,
) -> (Vec<T>, Option<ChunkwiseError>) {
    let mut iter = iter.into_iter();
    let mut values = Vec::new();
    while let Some(item) = iter.next() {
        match item {
            Ok(value) => values.push(value),
            Err(err) => {
                assert!(
                    iter.next().is_none(),
                    "iterator kept yielding after an error"
                );
                return (values, Some(err));
            }
        }
    }
    (values, None)
}

/// Collects a fallible iterator that is expected to succeed throughout.
///
/// # Panics
///
/// Panics with the error message if any item is an error.
pub fn unwrap_all<T>(iter: impl IntoIterator<Item = Result<T>>) -> Vec<T> {
    iter.into_iter()
        .map(|item| match item {
            Ok(value) => value,
            Err(err) => panic!("unexpected error: {err}"),
        })
        .collect()
}
