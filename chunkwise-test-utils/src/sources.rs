// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Instrumented sources for observing how operators pull.

use crate::clock::ManualClock;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

/// Shared view on how many elements a [`CountingSource`] has handed out.
#[derive(Debug, Clone, Default)]
pub struct PullCount(Rc<Cell<usize>>);

impl PullCount {
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// Wraps an iterator and counts every element it yields.
///
/// ```rust
/// use chunkwise_test_utils::CountingSource;
///
/// let source = CountingSource::new(0..);
/// let pulls = source.pulls();
/// let first_three: Vec<_> = source.take(3).collect();
///
/// assert_eq!(first_three, vec![0, 1, 2]);
/// assert_eq!(pulls.get(), 3);
/// ```
#[derive(Debug)]
pub struct CountingSource<I> {
    inner: I,
    pulls: PullCount,
}

impl<I: Iterator> CountingSource<I> {
    pub fn new(inner: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            inner: inner.into_iter(),
            pulls: PullCount::default(),
        }
    }

    /// Handle that keeps reporting the count after the source is moved away.
    #[must_use]
    pub fn pulls(&self) -> PullCount {
        self.pulls.clone()
    }
}

impl<I: Iterator> Iterator for CountingSource<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next()?;
        self.pulls.0.set(self.pulls.0.get() + 1);
        Some(item)
    }
}

/// Yields its items, sleeping for real before the item at `stall_at`.
#[derive(Debug)]
pub struct StallingSource<T> {
    items: VecDeque<T>,
    yielded: usize,
    stall_at: usize,
    stall: Duration,
}

impl<T> StallingSource<T> {
    pub fn new(items: impl IntoIterator<Item = T>, stall_at: usize, stall: Duration) -> Self {
        Self {
            items: items.into_iter().collect(),
            yielded: 0,
            stall_at,
            stall,
        }
    }
}

impl<T> Iterator for StallingSource<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.yielded == self.stall_at {
            thread::sleep(self.stall);
        }
        let item = self.items.pop_front()?;
        self.yielded += 1;
        Some(item)
    }
}

/// Yields scripted items, advancing a [`ManualClock`] by the paired delay
/// before handing each one out.
#[derive(Debug)]
pub struct ScriptedSource<T> {
    clock: ManualClock,
    script: VecDeque<(Duration, T)>,
}

impl<T> ScriptedSource<T> {
    pub fn new(clock: &ManualClock, script: impl IntoIterator<Item = (Duration, T)>) -> Self {
        Self {
            clock: clock.clone(),
            script: script.into_iter().collect(),
        }
    }
}

impl<T> Iterator for ScriptedSource<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (delay, item) = self.script.pop_front()?;
        self.clock.advance(delay);
        Some(item)
    }
}
