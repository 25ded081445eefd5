// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise::{interleave, InterleaveExt};
use chunkwise_test_utils::CountingSource;

#[test]
fn test_even() {
    let merged: Vec<_> = interleave([vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]]).collect();
    assert_eq!(merged, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_short() {
    let merged: Vec<_> = interleave([vec![1, 4], vec![2, 5, 7], vec![3, 6, 8]]).collect();
    assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_mixed_sources_with_infinite_one() {
    // Arrange
    let letters: Box<dyn Iterator<Item = String>> =
        Box::new(['a', 'b', 'c', 'd'].into_iter().map(String::from));
    let digits: Box<dyn Iterator<Item = String>> =
        Box::new("123456".chars().map(String::from));
    let counter: Box<dyn Iterator<Item = String>> = Box::new((0..).map(|n: u32| n.to_string()));

    // Act
    let merged: Vec<_> = interleave([letters, digits, counter]).collect();

    // Assert
    let expected = [
        "a", "1", "0", "b", "2", "1", "c", "3", "2", "d", "4", "3",
    ];
    assert_eq!(merged, expected);
}

#[test]
fn test_no_sources() {
    let sources: Vec<Vec<i32>> = Vec::new();
    assert_eq!(interleave(sources).count(), 0);
}

#[test]
fn test_single_source_passes_through() {
    let merged: Vec<_> = interleave([0..3]).collect();
    assert_eq!(merged, vec![0, 1, 2]);
}

#[test]
fn test_partial_round_is_dropped() {
    // Arrange
    let long = CountingSource::new(vec![1, 3, 5]);
    let pulls = long.pulls();
    let short = CountingSource::new(vec![2]);

    // Act
    let merged: Vec<_> = long.interleave_with([short]).collect();

    // Assert
    assert_eq!(merged, vec![1, 2]);
    assert_eq!(pulls.get(), 2);
}

#[test]
fn test_is_lazy_over_infinite_sources() {
    let merged: Vec<_> = (0..).step_by(2).interleave_with([(1..).step_by(2)]).take(6).collect();
    assert_eq!(merged, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_clone_mid_round_continues_identically() {
    // Arrange
    let mut merged = interleave([vec![1, 4], vec![2, 5], vec![3, 6]]);
    assert_eq!(merged.next(), Some(1));

    // Act
    let copy = merged.clone();

    // Assert
    assert_eq!(merged.collect::<Vec<_>>(), vec![2, 3, 4, 5, 6]);
    assert_eq!(copy.collect::<Vec<_>>(), vec![2, 3, 4, 5, 6]);
}

#[test]
fn test_debug_shows_pending_round() {
    let mut merged = interleave([vec![1, 4], vec![2, 5], vec![3, 6]]);
    merged.next();

    let text = format!("{:?}", merged);
    assert!(text.starts_with("Interleave {"), "{}", text);
    assert!(text.contains("round: [2, 3]"), "{}", text);
}
