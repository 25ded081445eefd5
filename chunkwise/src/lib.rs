// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy sequence utilities.
//!
//! Every operator works on any [`IntoIterator`]. Operators that produce a
//! sequence return a lazy [`Iterator`] and pull from their source only as far
//! as the caller asks; the few that produce a single value pull the minimum
//! number of elements they need. Most lazy operators are also available as
//! methods through an extension trait, see the [`prelude`].
//!
//! # Architecture
//!
//! - **`chunkwise-error`**: [`ChunkwiseError`], one variant per broken contract
//! - **`chunkwise-core`**: [`Fallback`] for optional defaults, the [`Tail`] and
//!   [`Reversible`] capability traits, [`SequenceView`] and [`Clock`]
//! - **this crate**: the operators
//!
//! ## Operator Categories
//!
//! ### Chunking
//!
//! - **[`take`]**: first `n` elements as a `Vec`
//! - **[`chunked`]**: fixed-size `Vec`s, last one possibly short
//! - **[`chunked_strict`]**: fixed-size `Vec`s, a short last one is an error
//!
//! ### Selection
//!
//! - **[`first`]** / **[`last`]** / **[`nth_or_last`]**: a single element, with an optional default
//! - **[`one`]** / **[`only`]**: the single element of a source that must not hold more
//! - **[`strictly_n`]**: exactly `n` elements, lazily checked
//!
//! ### Combination
//!
//! - **[`interleave`]**: round-robin over several sources
//! - **[`repeat_each`]**: every element `n` times in a row
//! - **[`value_chain`]** / **[`value_chain!`]**: flatten containers and scalars alike
//! - **[`difference`]**: undo a running accumulation
//!
//! ### Splitting
//!
//! - **[`split_after`]**: groups ending at matching elements
//! - **[`split_into`]**: groups of given lengths
//! - **[`map_if`]**: conditional mapping
//!
//! ### Views
//!
//! - **[`time_limited`]**: stop after a time limit
//! - **[`always_reversible`]**: back to front, buffering only when necessary
//! - **[`always_iterable`]**: treat any value as a sequence
//! - **[`SequenceView`]**: live, read-only view on indexable storage
//!
//! # Operator Selection Guide
//!
//! | Operator | Evaluation | Pulls | Fails with |
//! |----------|------------|-------|------------|
//! | [`take`] | eager | `n` | never |
//! | [`chunked`] | lazy | one chunk per `next` | `InvalidArgument` on `Some(0)` |
//! | [`chunked_strict`] | lazy | one chunk per `next` | `SizeMismatch` on a short last chunk |
//! | [`first`] | eager | 1 | `EmptyInput` |
//! | [`last`] | eager | depends on [`Tail`] | `EmptyInput` |
//! | [`one`] | eager | 2 | `TooFew`, `TooMany` |
//! | [`only`] | eager | 2 | `TooMany` |
//! | [`strictly_n`] | lazy | `n + 1` | `TooFew`, `TooMany` |
//! | [`split_into`] | lazy | sum of sizes | `InvalidArgument` on a bad size |
//! | [`time_limited`] | lazy | until the limit | never, sets `timed_out` |
//!
//! # Errors
//!
//! Fallible operators return [`Result`]. Lazy operators whose contract can
//! only be checked mid-stream yield `Result` items and end right after the
//! first `Err`; everything yielded before it stays valid.
//!
//! ```
//! use chunkwise::{first, one, ChunkwiseError, Fallback};
//!
//! let err = first(Vec::<i32>::new(), Fallback::Unset).unwrap_err();
//! assert!(err.is_cardinality());
//!
//! let err = one(vec![1, 2]).unwrap_err();
//! assert!(matches!(err, ChunkwiseError::TooMany { expected: 1, .. }));
//! ```
//!
//! # Logging
//!
//! With the `tracing` feature, rejected arguments and expired time limits are
//! reported at `warn` level and strict chunk mismatches at `debug` level.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
mod logging;
pub mod always_iterable;
pub mod always_reversible;
pub mod chunked;
pub mod difference;
pub mod first;
pub mod interleave;
pub mod last;
pub mod map_if;
pub mod one;
pub mod only;
pub mod prelude;
pub mod repeat_each;
pub mod split_after;
pub mod split_into;
pub mod strictly_n;
pub mod take;
pub mod time_limited;
pub mod value_chain;

pub use self::always_iterable::{always_iterable, AlwaysIterable, Atomic, Spread};
pub use self::always_reversible::always_reversible;
pub use self::chunked::{chunked, chunked_strict, Chunked, ChunkedExt, StrictChunked};
pub use self::difference::{difference, difference_by, Difference, DifferenceExt};
pub use self::first::first;
pub use self::interleave::{interleave, Interleave, InterleaveExt};
pub use self::last::{last, nth_or_last};
pub use self::map_if::{map_if, map_if_else, MapIf, MapIfExt};
pub use self::one::{one, one_with};
pub use self::only::{only, only_or, only_with};
pub use self::repeat_each::{repeat_each, RepeatEach, RepeatEachExt};
pub use self::split_after::{split_after, SplitAfter, SplitAfterExt};
pub use self::split_into::{split_into, SplitInto, SplitIntoExt};
pub use self::strictly_n::{strictly_n, strictly_n_with, StrictlyN, StrictlyNExt};
pub use self::take::take;
pub use self::time_limited::{time_limited, TimeLimited, TimeLimitedExt};
pub use self::value_chain::value_chain;

pub use chunkwise_core::{
    Clock, DoubleEnded, Fallback, Indexed, MonotonicClock, Reversible, SequenceView,
    SequenceViewIter, SinglePass, SourceExt, Tail,
};
pub use chunkwise_error::{ChunkwiseError, Exhausted, IntoChunkwiseError, Result};
