// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise_error::{ChunkwiseError, Result};

/// A default value that may or may not have been supplied.
///
/// Terminal operations such as `first` and `last` fail when the source is
/// empty *and* the caller gave no default. Using `Option<T>` for that would
/// make "default is `None`" indistinguishable from "no default", so the
/// absence of a default is its own variant:
///
/// ```
/// use chunkwise_core::Fallback;
///
/// let unset: Fallback<Option<i32>> = Fallback::Unset;
/// let none: Fallback<Option<i32>> = None.into();
///
/// assert!(unset.is_unset());
/// assert_eq!(none, Fallback::Value(None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback<T> {
    /// No default was supplied
    Unset,
    /// The caller supplied this default
    Value(T),
}

impl<T> Fallback<T> {
    /// Returns `true` when no default was supplied.
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` when a default was supplied.
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Converts into an `Option`, forgetting the distinction this type exists for.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Unset => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Returns the supplied default, or the error produced by `error` if there is none.
    ///
    /// # Errors
    ///
    /// Returns the result of `error()` when the fallback is [`Fallback::Unset`].
    pub fn or_else_err<F>(self, error: F) -> Result<T>
    where
        F: FnOnce() -> ChunkwiseError,
    {
        match self {
            Self::Unset => Err(error()),
            Self::Value(value) => Ok(value),
        }
    }

    /// Resolves the outcome of a terminal operation: the element found, else
    /// the default, else an [`ChunkwiseError::EmptyInput`] naming `operation`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when `found` is `None` and no default was supplied.
    pub fn resolve(self, found: Option<T>, operation: &'static str) -> Result<T> {
        match found {
            Some(value) => Ok(value),
            None => self.or_else_err(|| ChunkwiseError::empty_input(operation)),
        }
    }
}

impl<T> Default for Fallback<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<T> for Fallback<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}
