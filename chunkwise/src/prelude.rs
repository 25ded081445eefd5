// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the extension traits and the types most
//! call sites need.
//!
//! ```
//! use chunkwise::prelude::*;
//!
//! let groups: Vec<_> = (1..=7)
//!     .map_if(|n| n % 2 == 0, |n| n * 10)
//!     .chunked(Some(3))?
//!     .collect();
//! assert_eq!(groups, vec![vec![1, 20, 3], vec![40, 5, 60], vec![7]]);
//! # Ok::<(), ChunkwiseError>(())
//! ```
//!
//! # Contents
//!
//! ## Extension Traits (Operators)
//!
//! - [`ChunkedExt`] - Fixed-size chunks, lenient or strict
//! - [`DifferenceExt`] - Undo a running accumulation
//! - [`InterleaveExt`] - Round-robin merge with other iterators
//! - [`MapIfExt`] - Conditional mapping
//! - [`RepeatEachExt`] - Repeat every element in place
//! - [`SplitAfterExt`] - Split after matching elements
//! - [`SplitIntoExt`] - Split into groups of given lengths
//! - [`StrictlyNExt`] - Enforce an exact element count
//! - [`TimeLimitedExt`] - Stop after a time limit
//! - [`SourceExt`] - Tag an iterator with its capability
//!
//! ## Types
//!
//! - [`Fallback`] - Optional default for terminal operations
//! - [`Atomic`] / [`Spread`] - Steer [`AlwaysIterable`]
//! - [`ChunkwiseError`]

pub use crate::always_iterable::{AlwaysIterable, Atomic, Spread};
pub use crate::chunked::ChunkedExt;
pub use crate::difference::DifferenceExt;
pub use crate::interleave::InterleaveExt;
pub use crate::map_if::MapIfExt;
pub use crate::repeat_each::RepeatEachExt;
pub use crate::split_after::SplitAfterExt;
pub use crate::split_into::SplitIntoExt;
pub use crate::strictly_n::StrictlyNExt;
pub use crate::time_limited::TimeLimitedExt;
pub use chunkwise_core::{ChunkwiseError, Fallback, SourceExt};
