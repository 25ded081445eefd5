// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise_core::{ChunkwiseError, Fallback};

#[test]
fn test_default_is_unset() {
    let fallback: Fallback<i32> = Fallback::default();
    assert!(fallback.is_unset());
    assert!(!fallback.is_value());
}

#[test]
fn test_none_is_a_real_default() {
    let fallback: Fallback<Option<&str>> = None.into();
    assert!(fallback.is_value());
    assert_eq!(fallback.into_option(), Some(None));
}

#[test]
fn test_resolve_prefers_found_element() -> anyhow::Result<()> {
    let fallback = Fallback::Value(7);
    assert_eq!(fallback.resolve(Some(3), "first")?, 3);
    Ok(())
}

#[test]
fn test_resolve_uses_default_when_nothing_found() -> anyhow::Result<()> {
    let fallback = Fallback::Value(false);
    assert!(!fallback.resolve(None, "last")?);
    Ok(())
}

#[test]
fn test_resolve_without_default_is_empty_input() {
    let err = Fallback::<u8>::Unset.resolve(None, "last").unwrap_err();
    assert!(matches!(
        err,
        ChunkwiseError::EmptyInput {
            operation: "last",
            ..
        }
    ));
}

#[test]
fn test_or_else_err_calls_factory_only_when_unset() {
    let mut calls = 0;
    let value = Fallback::Value(1).or_else_err(|| {
        calls += 1;
        ChunkwiseError::too_few(1, 0)
    });
    assert_eq!(value.ok(), Some(1));
    assert_eq!(calls, 0);

    let err = Fallback::<i32>::Unset
        .or_else_err(|| ChunkwiseError::too_few(1, 0))
        .unwrap_err();
    assert!(matches!(err, ChunkwiseError::TooFew { .. }));
}
