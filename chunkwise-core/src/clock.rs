// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::Debug;
use std::ops::Sub;
use std::time::{Duration, Instant};

/// Monotonic time source.
///
/// Time-bounded operators only ever subtract two readings of the same clock,
/// so an implementation is free to pick any epoch. It must never go backwards.
pub trait Clock: Clone + Debug {
    type Instant: Copy + Debug + Ord + Sub<Self::Instant, Output = Duration>;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;
}

/// [`Clock`] backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }
}
