// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise::{time_limited, ChunkwiseError, TimeLimited, TimeLimitedExt};
use chunkwise_test_utils::{CountingSource, ManualClock, ScriptedSource, StallingSource};
use std::time::Duration;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_basic() {
    // Arrange
    let source = StallingSource::new([1, 2, 3], 2, ms(200));

    // Act
    let mut limited = time_limited(ms(100), source);
    let actual: Vec<_> = limited.by_ref().collect();

    // Assert
    assert_eq!(actual, vec![1, 2]);
    assert!(limited.timed_out());
}

#[test]
fn test_complete() {
    let mut limited = time_limited(Duration::from_secs(2), 0..10);
    assert_eq!(limited.by_ref().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
    assert!(!limited.timed_out());
}

#[test]
fn test_zero_limit() {
    let mut limited = time_limited(Duration::ZERO, 0..);
    assert_eq!(limited.next(), None);
    assert!(limited.timed_out());
}

#[test]
fn test_invalid_limit() {
    let err = TimeLimited::from_secs_f64(-0.1, 0..10).unwrap_err();
    assert!(matches!(err, ChunkwiseError::InvalidArgument { .. }));
    assert!(TimeLimited::from_secs_f64(f64::INFINITY, 0..10).is_err());
}

#[test]
fn test_fractional_limit() -> anyhow::Result<()> {
    let limited = TimeLimited::from_secs_f64(0.25, 0..3)?;
    assert_eq!(limited.limit(), ms(250));
    assert_eq!(limited.count(), 3);
    Ok(())
}

#[test]
fn test_deadline_on_manual_clock() {
    // Arrange
    let clock = ManualClock::new();
    let source = ScriptedSource::new(
        &clock,
        [(ms(10), 'a'), (ms(10), 'b'), (ms(50), 'c'), (ms(1), 'd')],
    );

    // Act
    let mut limited = source.time_limited_with_clock(ms(60), clock.clone());
    let actual: Vec<_> = limited.by_ref().collect();

    // Assert
    assert_eq!(actual, vec!['a', 'b']);
    assert!(limited.timed_out());
    assert_eq!(limited.elapsed(), ms(70));
    assert_eq!(limited.into_inner().collect::<Vec<_>>(), vec!['d']);
}

#[test]
fn test_reaching_the_limit_exactly_is_in_time() {
    let clock = ManualClock::new();
    let source = ScriptedSource::new(&clock, [(ms(30), 1), (ms(30), 2)]);

    let mut limited = TimeLimited::with_clock(ms(60), source, clock.clone());

    assert_eq!(limited.by_ref().collect::<Vec<_>>(), vec![1, 2]);
    assert!(!limited.timed_out());
}

#[test]
fn test_no_pulls_after_timing_out() {
    // Arrange
    let clock = ManualClock::new();
    let scripted = ScriptedSource::new(&clock, (0..10).map(|n| (ms(40), n)));
    let source = CountingSource::new(scripted);
    let pulls = source.pulls();
    let mut limited = source.time_limited_with_clock(ms(100), clock.clone());

    // Act
    let actual: Vec<_> = limited.by_ref().collect();
    let after = limited.next();

    // Assert
    assert_eq!(actual, vec![0, 1]);
    assert_eq!(after, None);
    assert_eq!(pulls.get(), 3);
    assert_eq!(limited.size_hint(), (0, Some(0)));
}

#[test]
fn test_exhausted_source_is_not_a_timeout() {
    let clock = ManualClock::new();
    let mut limited = std::iter::empty::<u8>().time_limited_with_clock(ms(1), clock.clone());
    clock.advance(ms(5));

    assert_eq!(limited.next(), None);
    assert!(!limited.timed_out());
}
