// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Iteration bounded by wall-clock time.
//!
//! [`TimeLimited`] starts its clock when it is created. Every call to `next`
//! pulls one element from the source and then compares the elapsed time with
//! the limit: if the limit has passed, the element is dropped, the iterator
//! records that it [timed out](TimeLimited::timed_out) and ends for good.
//!
//! The check happens after each pull, so a source that blocks is never
//! interrupted; the deadline only stops the element it finally produces.
//!
//! ```
//! use chunkwise::TimeLimitedExt;
//! use std::time::Duration;
//!
//! let mut limited = (0..10).time_limited(Duration::from_secs(60));
//! assert_eq!(limited.by_ref().count(), 10);
//! assert!(!limited.timed_out());
//! ```
//!
//! Tests and simulations can inject their own [`Clock`] with
//! [`TimeLimited::with_clock`].

use crate::logging::log_warn;
use chunkwise_core::{ChunkwiseError, Clock, MonotonicClock, Result};
use std::iter::FusedIterator;
use std::time::Duration;

/// Iterator that stops yielding once a time limit has passed.
#[derive(Debug, Clone)]
pub struct TimeLimited<I, C: Clock = MonotonicClock> {
    iter: I,
    clock: C,
    start: C::Instant,
    limit: Duration,
    timed_out: bool,
}

impl<I: Iterator> TimeLimited<I> {
    /// Bounds `source` by `limit`, measured on the monotonic system clock from now.
    ///
    /// A zero limit yields nothing: the first element pulled is already late.
    pub fn new(limit: Duration, source: impl IntoIterator<IntoIter = I>) -> Self {
        Self::with_clock(limit, source, MonotonicClock)
    }

    /// Like [`TimeLimited::new`], with the limit given in fractional seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkwiseError::InvalidArgument`] if `secs` is negative, not
    /// a number, or too large to be represented as a [`Duration`].
    ///
    /// ```
    /// use chunkwise::TimeLimited;
    ///
    /// assert!(TimeLimited::from_secs_f64(0.5, 0..).is_ok());
    /// assert!(TimeLimited::from_secs_f64(-0.1, 0..).is_err());
    /// assert!(TimeLimited::from_secs_f64(f64::NAN, 0..).is_err());
    /// ```
    pub fn from_secs_f64(secs: f64, source: impl IntoIterator<IntoIter = I>) -> Result<Self> {
        let limit = Duration::try_from_secs_f64(secs).map_err(|err| {
            log_warn!("time_limited: rejected limit {}: {}", secs, err);
            ChunkwiseError::invalid_argument(format!("time limit {secs} is not usable: {err}"))
        })?;
        Ok(Self::new(limit, source))
    }
}

impl<I: Iterator, C: Clock> TimeLimited<I, C> {
    /// Bounds `source` by `limit`, measured on `clock` from now.
    pub fn with_clock(limit: Duration, source: impl IntoIterator<IntoIter = I>, clock: C) -> Self {
        let start = clock.now();
        Self {
            iter: source.into_iter(),
            clock,
            start,
            limit,
            timed_out: false,
        }
    }
}

impl<I, C: Clock> TimeLimited<I, C> {
    /// Returns `true` once the iterator has stopped because the limit passed.
    ///
    /// Stays `false` if the source simply ran out in time.
    pub const fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// The configured limit.
    pub const fn limit(&self) -> Duration {
        self.limit
    }

    /// Time elapsed on the clock since construction.
    pub fn elapsed(&self) -> Duration {
        self.clock.now() - self.start
    }

    /// Unwraps the source, which may still hold elements.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator, C: Clock> Iterator for TimeLimited<I, C> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.timed_out {
            return None;
        }

        let item = self.iter.next()?;
        let elapsed = self.elapsed();
        if self.limit.is_zero() || elapsed > self.limit {
            log_warn!(
                "time_limited: limit of {:?} passed after {:?}, stopping",
                self.limit, elapsed
            );
            self.timed_out = true;
            return None;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.timed_out {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I: FusedIterator, C: Clock> FusedIterator for TimeLimited<I, C> {}

/// Bounds `source` by `limit` on the monotonic system clock.
///
/// See the [module documentation](self).
pub fn time_limited<S: IntoIterator>(limit: Duration, source: S) -> TimeLimited<S::IntoIter> {
    TimeLimited::new(limit, source)
}

/// Extension trait providing [`time_limited`] on any iterator.
pub trait TimeLimitedExt: Iterator + Sized {
    /// See [`time_limited`].
    fn time_limited(self, limit: Duration) -> TimeLimited<Self> {
        TimeLimited::new(limit, self)
    }

    /// Like [`time_limited`](TimeLimitedExt::time_limited), measured on `clock`.
    fn time_limited_with_clock<C: Clock>(self, limit: Duration, clock: C) -> TimeLimited<Self, C> {
        TimeLimited::with_clock(limit, self, clock)
    }
}

impl<I: Iterator> TimeLimitedExt for I {}
