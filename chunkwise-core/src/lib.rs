// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core traits and types shared by the chunkwise operators.
//!
//! - [`Fallback`]: the "was a default supplied?" marker
//! - [`Tail`] / [`Reversible`]: capability traits used to pick the cheapest way
//!   to reach the end of a source, with [`DoubleEnded`] and [`SinglePass`]
//!   wrappers for arbitrary iterators
//! - [`Indexed`] and [`SequenceView`]: a live, non-owning window on indexable storage
//! - [`Clock`]: monotonic time source for time-bounded iteration

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod capability;
pub mod clock;
pub mod fallback;
pub mod indexed;
pub mod sequence_view;

pub use self::capability::{DoubleEnded, Reversible, SinglePass, SourceExt, Tail};
pub use self::clock::{Clock, MonotonicClock};
pub use self::fallback::Fallback;
pub use self::indexed::Indexed;
pub use self::sequence_view::{SequenceView, SequenceViewIter};
pub use chunkwise_error::{ChunkwiseError, Exhausted, IntoChunkwiseError, Result};
