// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise::{last, nth_or_last, ChunkwiseError, Fallback, SequenceView, SourceExt};
use chunkwise_test_utils::test_data::{people, person_omid};
use chunkwise_test_utils::CountingSource;
use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

#[test]
fn test_basic() -> anyhow::Result<()> {
    assert_eq!(last(0..4, Fallback::Unset)?, 3);
    assert_eq!(last((0..4).single_pass(), Fallback::Unset)?, 3);
    assert_eq!(last(0..1, Fallback::Unset)?, 0);
    assert_eq!(last((0..1).single_pass(), Fallback::Unset)?, 0);

    let map: BTreeMap<_, _> = (0..5).map(|n| (n, n.to_string())).collect();
    assert_eq!(last(map, Fallback::Unset)?, (4, "4".to_string()));
    Ok(())
}

#[test]
fn test_default() -> anyhow::Result<()> {
    assert_eq!(last(vec![Some(0)], None)?, Some(0));
    assert_eq!(last(Vec::<Option<i32>>::new(), None)?, None);
    assert_eq!(last(BTreeSet::<Option<u8>>::new(), None)?, None);
    assert_eq!(
        last(std::iter::empty::<Option<i32>>().single_pass(), None)?,
        None
    );
    Ok(())
}

#[test]
fn test_empty() {
    let err = last(Vec::<i32>::new(), Fallback::Unset).unwrap_err();
    assert!(matches!(
        err,
        ChunkwiseError::EmptyInput {
            operation: "last",
            ..
        }
    ));

    let err = last((0..0).single_pass(), Fallback::Unset).unwrap_err();
    assert!(err.is_cardinality());
}

#[test]
fn test_agrees_across_representations() -> anyhow::Result<()> {
    // Arrange
    let items = vec![4, 8, 15, 16, 23, 42];
    let deque: VecDeque<_> = items.iter().copied().collect();

    // Act
    let from_vec = last(items.clone(), Fallback::Unset)?;
    let from_slice = *last(items.as_slice(), Fallback::Unset)?;
    let from_deque = last(deque, Fallback::Unset)?;
    let from_view = last(SequenceView::new(&items), Fallback::Unset)?;
    let from_double_ended = last(items.iter().copied().double_ended(), Fallback::Unset)?;
    let from_single_pass = last(items.iter().copied().single_pass(), Fallback::Unset)?;

    // Assert
    for value in [from_slice, from_deque, from_view, from_double_ended, from_single_pass] {
        assert_eq!(value, from_vec);
    }
    Ok(())
}

#[test]
fn test_double_ended_reads_only_the_back() -> anyhow::Result<()> {
    // Arrange
    let visited = Cell::new(0);
    let source = (0..1_000).map(|n| {
        visited.set(visited.get() + 1);
        n
    });

    // Act
    let value = last(source.double_ended(), Fallback::Unset)?;

    // Assert
    assert_eq!(value, 999);
    assert_eq!(visited.get(), 1);
    Ok(())
}

#[test]
fn test_owned_values() -> anyhow::Result<()> {
    assert_eq!(last(people(), Fallback::Unset)?, person_omid());
    Ok(())
}

#[test]
fn test_nth_or_last_basic() -> anyhow::Result<()> {
    assert_eq!(nth_or_last(0..3, 1, Fallback::Unset)?, 1);
    assert_eq!(nth_or_last(0..3, 3, Fallback::Unset)?, 2);
    Ok(())
}

#[test]
fn test_nth_or_last_default_value() -> anyhow::Result<()> {
    assert_eq!(nth_or_last(0..0, 3, 42)?, 42);
    Ok(())
}

#[test]
fn test_nth_or_last_no_default() {
    let err = nth_or_last(0..0, 0, Fallback::Unset).unwrap_err();
    assert!(matches!(err, ChunkwiseError::EmptyInput { .. }));
}

#[test]
fn test_nth_or_last_pulls_at_most_n_plus_one() -> anyhow::Result<()> {
    // Arrange
    let source = CountingSource::new(0..);
    let pulls = source.pulls();

    // Act
    let value = nth_or_last(source, 5, Fallback::Unset)?;

    // Assert
    assert_eq!(value, 5);
    assert_eq!(pulls.get(), 6);
    Ok(())
}

#[test]
fn test_nth_or_last_saturates_huge_index() -> anyhow::Result<()> {
    assert_eq!(nth_or_last(0..4, usize::MAX, Fallback::Unset)?, 3);
    Ok(())
}
