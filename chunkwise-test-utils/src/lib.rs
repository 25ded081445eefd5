// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the chunkwise sequence utilities.
//!
//! This crate is meant for tests and benchmarks only.
//!
//! # Key Types
//!
//! - [`Person`]: owned, non-`Copy` payload for exercising operators that move
//!   or clone their elements
//! - [`CountingSource`]: reports how many elements an operator actually pulled
//! - [`StallingSource`] and [`ScriptedSource`]: sources that take time between
//!   elements, on the real clock or on a [`ManualClock`]
//!
//! ```rust
//! use chunkwise_test_utils::test_data::person_saman;
//!
//! let saman = person_saman();
//! assert_eq!(saman.full_name(), "saman amini");
//! assert_eq!(saman.email(), "samanamini@email.com");
//! ```

pub mod clock;
pub mod helpers;
pub mod person;
pub mod sources;
pub mod test_data;

pub use self::clock::ManualClock;
pub use self::helpers::{drain_results, unwrap_all};
pub use self::person::Person;
pub use self::sources::{CountingSource, PullCount, ScriptedSource, StallingSource};
