// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise_error::{ChunkwiseError, Exhausted, IntoChunkwiseError, Result};
use std::error::Error;
use std::io;

#[test]
fn test_error_display() {
    let err = ChunkwiseError::empty_input("first");
    assert_eq!(
        err.to_string(),
        "first() was called on an empty iterable and no default value was provided"
    );

    let err = ChunkwiseError::too_few(5, 4);
    assert_eq!(
        err.to_string(),
        "Too few items in iterable (expected 5, got 4)"
    );

    let err = ChunkwiseError::too_many(3, 4);
    assert_eq!(
        err.to_string(),
        "Too many items in iterable (expected 3, got at least 4)"
    );

    let err = ChunkwiseError::size_mismatch(3, 2);
    assert_eq!(
        err.to_string(),
        "iterable is not divisible by n: final chunk has 2 items, expected 3"
    );
}

#[test]
fn test_too_many_values_names_both_values() {
    let err = ChunkwiseError::too_many_values(&"foo", &"boo");
    assert_eq!(
        err.to_string(),
        "Expected exactly one item in iterable, but got \"foo\", \"boo\" and perhaps more"
    );
    assert!(matches!(
        err,
        ChunkwiseError::TooMany {
            expected: 1,
            at_least: 2,
            ..
        }
    ));
}

#[test]
fn test_exhaustion_is_the_source() {
    let err = ChunkwiseError::empty_input("last");
    let source = err.source().expect("empty input carries a cause");
    assert!(source.downcast_ref::<Exhausted>().is_some());

    let err = ChunkwiseError::too_few(1, 0);
    let source = err.source().expect("too few carries a cause");
    assert_eq!(source.to_string(), "source iterator exhausted");
}

#[test]
fn test_size_mismatch_has_no_source() {
    assert!(ChunkwiseError::size_mismatch(2, 1).source().is_none());
    assert!(ChunkwiseError::invalid_argument("n").source().is_none());
}

#[test]
fn test_is_cardinality() {
    assert!(ChunkwiseError::empty_input("first").is_cardinality());
    assert!(ChunkwiseError::too_few(1, 0).is_cardinality());
    assert!(ChunkwiseError::too_many(1, 2).is_cardinality());
    assert!(ChunkwiseError::size_mismatch(3, 1).is_cardinality());
    assert!(!ChunkwiseError::invalid_argument("n must be positive").is_cardinality());
    assert!(!ChunkwiseError::user_error(io::Error::other("boom")).is_cardinality());
}

#[test]
fn test_is_invalid_argument() {
    assert!(ChunkwiseError::invalid_argument("limit is negative").is_invalid_argument());
    assert!(!ChunkwiseError::too_few(2, 1).is_invalid_argument());
}

#[test]
fn test_user_error_preserves_source() {
    let err = io::Error::new(io::ErrorKind::InvalidInput, "index out of range").into_chunkwise();
    assert_eq!(err.to_string(), "User error: index out of range");

    let source = err.source().expect("user error keeps the wrapped error");
    let io_err = source
        .downcast_ref::<io::Error>()
        .expect("source is the io error");
    assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
}

#[test]
fn test_result_alias_propagates() {
    fn inner() -> Result<u8> {
        Err(ChunkwiseError::invalid_argument("n cannot be zero"))
    }

    fn outer() -> Result<u8> {
        let value = inner()?;
        Ok(value + 1)
    }

    let err = outer().unwrap_err();
    assert_eq!(err.to_string(), "Invalid argument: n cannot be zero");
}
