// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise::{split_after, SplitAfterExt};
use chunkwise_test_utils::CountingSource;
use std::cell::Cell;

fn groups(text: &str, sep: impl FnMut(&char) -> bool, max_splits: Option<usize>) -> Vec<String> {
    split_after(text.chars(), sep, max_splits)
        .map(String::from_iter)
        .collect()
}

#[test]
fn test_start_with_sep() {
    assert_eq!(groups("xooxoo", |c| *c == 'x', None), vec!["x", "oox", "oo"]);
}

#[test]
fn test_ends_with_sep() {
    assert_eq!(groups("ooxoox", |c| *c == 'x', None), vec!["oox", "oox"]);
}

#[test]
fn test_no_sep() {
    assert_eq!(groups("ooo", |c| *c == 'x', None), vec!["ooo"]);
}

#[test]
fn test_max_split() {
    let comma = |c: &char| *c == ',';
    let cases: [(Option<usize>, Vec<&str>); 5] = [
        (None, vec!["a,", "b,", "c,", "d"]),
        (Some(0), vec!["a,b,c,d"]),
        (Some(1), vec!["a,", "b,c,d"]),
        (Some(2), vec!["a,", "b,", "c,d"]),
        (Some(10), vec!["a,", "b,", "c,", "d"]),
    ];
    for (max_splits, expected) in cases {
        assert_eq!(groups("a,b,c,d", comma, max_splits), expected, "{max_splits:?}");
    }

    assert_eq!(groups("a,b,c,d", |c| *c == '@', Some(2)), vec!["a,b,c,d"]);
    assert_eq!(
        groups("a,b,c,d", |c| *c != ',', Some(2)),
        vec!["a", ",b", ",c,d"]
    );
}

#[test]
fn test_last_split_at_end_yields_empty_remainder() {
    assert_eq!(groups("ab,", |c| *c == ',', Some(1)), vec!["ab,", ""]);
}

#[test]
fn test_zero_splits_on_empty_source() {
    let all: Vec<Vec<char>> = split_after("".chars(), |_| true, Some(0)).collect();
    assert_eq!(all, vec![Vec::<char>::new()]);
}

#[test]
fn test_empty_source() {
    assert!(groups("", |_| true, None).is_empty());
}

#[test]
fn test_predicate_called_once_per_element() {
    // Arrange
    let calls = Cell::new(0);
    let source = CountingSource::new(0..10);
    let pulls = source.pulls();

    // Act
    let split: Vec<_> = source
        .split_after(
            |n| {
                calls.set(calls.get() + 1);
                n % 4 == 3
            },
            None,
        )
        .collect();

    // Assert
    assert_eq!(split, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9]]);
    assert_eq!(calls.get(), 10);
    assert_eq!(pulls.get(), 10);
}

#[test]
fn test_groups_are_pulled_lazily() {
    let mut split = (0..).split_after(|n| n % 2 == 1, None);
    assert_eq!(split.next(), Some(vec![0, 1]));
    assert_eq!(split.next(), Some(vec![2, 3]));
}
