// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the chunkwise sequence utilities
//!
//! This crate defines the root [`ChunkwiseError`] type shared by every operator.
//! Each variant corresponds to one way a sequence can violate the contract an
//! operator was asked to enforce: too few elements, too many, a final chunk of
//! the wrong size, or an argument that can never work.
//!
//! # Examples
//!
//! ```
//! use chunkwise_error::{ChunkwiseError, Result};
//!
//! fn exactly_two(items: &[i32]) -> Result<(i32, i32)> {
//!     match items {
//!         [a, b] => Ok((*a, *b)),
//!         [] | [_] => Err(ChunkwiseError::too_few(2, items.len())),
//!         _ => Err(ChunkwiseError::too_many(2, 3)),
//!     }
//! }
//!
//! assert!(exactly_two(&[1]).is_err());
//! ```

use std::fmt::Debug;

/// Cause attached to errors raised because a source ran dry.
///
/// Exposed through [`std::error::Error::source`] so callers can tell "the
/// sequence ended" apart from other failures further up the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("source iterator exhausted")]
pub struct Exhausted;

/// Root error type for all chunkwise operations
#[derive(Debug, thiserror::Error)]
pub enum ChunkwiseError {
    /// A terminal operation found no element and no default was supplied
    #[error("{operation}() was called on an empty iterable and no default value was provided")]
    EmptyInput {
        /// Name of the operation that gave up
        operation: &'static str,
        /// Always [`Exhausted`]
        #[source]
        source: Exhausted,
    },

    /// The source ended before the expected number of elements was seen
    #[error("Too few items in iterable (expected {expected}, got {actual})")]
    TooFew {
        /// Number of elements the operation required
        expected: usize,
        /// Number of elements actually available
        actual: usize,
        /// Always [`Exhausted`]
        #[source]
        source: Exhausted,
    },

    /// The source produced more elements than the operation allows
    #[error("{message}")]
    TooMany {
        /// Number of elements the operation allowed
        expected: usize,
        /// Lower bound on the number of elements the source holds
        at_least: usize,
        /// Human readable description, naming offending values when known
        message: String,
    },

    /// A strict chunking operation met a final chunk of the wrong length
    #[error("iterable is not divisible by n: final chunk has {actual} items, expected {expected}")]
    SizeMismatch {
        /// Requested chunk size
        expected: usize,
        /// Length of the offending chunk
        actual: usize,
    },

    /// A parameter can never produce a valid result
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// What was wrong with it
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by caller-supplied error factories and callbacks.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ChunkwiseError {
    /// Create an empty-input error for the named operation
    #[must_use]
    pub const fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput {
            operation,
            source: Exhausted,
        }
    }

    /// Create a too-few error
    #[must_use]
    pub const fn too_few(expected: usize, actual: usize) -> Self {
        Self::TooFew {
            expected,
            actual,
            source: Exhausted,
        }
    }

    /// Create a too-many error when only the count is known
    #[must_use]
    pub fn too_many(expected: usize, at_least: usize) -> Self {
        Self::TooMany {
            expected,
            at_least,
            message: format!(
                "Too many items in iterable (expected {expected}, got at least {at_least})"
            ),
        }
    }

    /// Create a too-many error for an operation that expected a single element,
    /// naming the first two values it observed
    pub fn too_many_values<T: Debug>(first: &T, second: &T) -> Self {
        Self::TooMany {
            expected: 1,
            at_least: 2,
            message: format!(
                "Expected exactly one item in iterable, but got {first:?}, {second:?} and perhaps more"
            ),
        }
    }

    /// Create a size mismatch error
    #[must_use]
    pub const fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Create an invalid argument error with the given context
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error reports an element count that broke a contract
    #[must_use]
    pub const fn is_cardinality(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. }
                | Self::TooFew { .. }
                | Self::TooMany { .. }
                | Self::SizeMismatch { .. }
        )
    }

    /// Check if this error was raised while validating parameters
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Specialized Result type for chunkwise operations
///
/// # Examples
///
/// ```
/// use chunkwise_error::Result;
///
/// fn process() -> Result<Vec<u8>> {
///     Ok(vec![1, 2, 3])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChunkwiseError>;

/// Extension trait for converting errors into `ChunkwiseError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`, which
/// makes custom error factories a one-liner:
///
/// ```
/// use chunkwise_error::{ChunkwiseError, IntoChunkwiseError};
/// use std::io;
///
/// let err = io::Error::other("index out of range").into_chunkwise();
/// assert!(matches!(err, ChunkwiseError::UserError(_)));
/// ```
pub trait IntoChunkwiseError {
    /// Convert this error into a `ChunkwiseError`
    fn into_chunkwise(self) -> ChunkwiseError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoChunkwiseError for E {
    fn into_chunkwise(self) -> ChunkwiseError {
        ChunkwiseError::user_error(self)
    }
}
