// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise::{repeat_each, take, RepeatEachExt};
use chunkwise_test_utils::test_data::{person_artin, person_saman};
use chunkwise_test_utils::CountingSource;

#[test]
fn test_twice() {
    let repeated: String = repeat_each("ABC".chars(), 2).collect();
    assert_eq!(repeated, "AABBCC");
}

#[test]
fn test_basic() {
    let repeated: String = repeat_each("ABC".chars(), 3).collect();
    assert_eq!(repeated, "AAABBBCCC");
}

#[test]
fn test_empty() {
    assert_eq!(repeat_each("".chars(), 2).count(), 0);
}

#[test]
fn test_no_repeat() {
    assert_eq!(repeat_each("ABC".chars(), 0).count(), 0);
}

#[test]
fn test_no_repeat_never_pulls() {
    // Arrange
    let source = CountingSource::new(0..);
    let pulls = source.pulls();

    // Act
    let count = source.repeat_each(0).count();

    // Assert
    assert_eq!(count, 0);
    assert_eq!(pulls.get(), 0);
}

#[test]
fn test_infinite_repeat() {
    let repeater = "AB".chars().cycle().repeat_each(2);
    assert_eq!(take(repeater, 6), vec!['A', 'A', 'B', 'B', 'A', 'A']);
}

#[test]
fn test_owned_values_are_cloned() {
    let repeated: Vec<_> = repeat_each([person_saman(), person_artin()], 2).collect();
    assert_eq!(
        repeated,
        vec![person_saman(), person_saman(), person_artin(), person_artin()]
    );
}

#[test]
fn test_size_hint_is_exact() {
    let mut repeated = repeat_each([1, 2, 3], 3);
    assert_eq!(repeated.size_hint(), (9, Some(9)));
    repeated.next();
    assert_eq!(repeated.size_hint(), (8, Some(8)));
}

#[test]
fn test_clone_mid_repetition_continues_identically() {
    // Arrange
    let mut repeated = repeat_each("AB".chars(), 2);
    assert_eq!(repeated.next(), Some('A'));

    // Act
    let copy = repeated.clone();

    // Assert
    assert_eq!(repeated.collect::<String>(), "ABB");
    assert_eq!(copy.collect::<String>(), "ABB");
}

#[test]
fn test_debug_shows_progress() {
    let mut repeated = repeat_each(vec![7, 8], 3);
    repeated.next();

    let text = format!("{:?}", repeated);
    assert!(text.starts_with("RepeatEach {"), "{}", text);
    assert!(text.contains("times: 3"), "{}", text);
    assert!(text.contains("current: Some(7)"), "{}", text);
    assert!(text.contains("left: 2"), "{}", text);
}
