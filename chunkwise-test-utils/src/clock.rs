// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise_core::Clock;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Deterministic [`Clock`] that only moves when told to.
///
/// Clones share the same reading, so a test can keep one handle and give
/// another to the operator under test.
///
/// ```rust
/// use chunkwise_core::Clock;
/// use chunkwise_test_utils::ManualClock;
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_millis(5));
/// assert_eq!(clock.now(), Duration::from_millis(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.now.set(self.now.get() + step);
    }

    /// Current reading, measured from the moment the clock was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.now.get()
    }
}

impl Clock for ManualClock {
    type Instant = Duration;

    fn now(&self) -> Duration {
        self.now.get()
    }
}
