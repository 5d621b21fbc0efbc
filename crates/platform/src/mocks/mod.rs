//! Mock implementations for testing
//!
//! This module provides mock implementations of all platform traits
//! for use in unit and integration tests.

use crate::*;

/// Mock sample source: replays queued samples, then reports no touch.
pub struct MockSampleSource {
    samples: heapless::Deque<TouchSample, 32>,
    fail_next: bool,
    reads: usize,
}

/// Error returned by [`MockSampleSource`] when a failure was injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSourceError;

impl MockSampleSource {
    /// Create new mock source with an empty queue
    pub fn new() -> Self {
        Self {
            samples: heapless::Deque::new(),
            fail_next: false,
            reads: 0,
        }
    }

    /// Queue a sample for a later read
    pub fn push(&mut self, sample: TouchSample) -> Result<(), TouchSample> {
        self.samples.push_back(sample)
    }

    /// Make the next read fail
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    /// Total number of reads so far
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Default for MockSampleSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSource for MockSampleSource {
    type Error = MockSourceError;

    fn read_raw(&mut self, _orientation: ScreenOrientation) -> Result<TouchSample, Self::Error> {
        self.reads = self.reads.saturating_add(1);
        if core::mem::take(&mut self.fail_next) {
            return Err(MockSourceError);
        }
        Ok(self.samples.pop_front().unwrap_or(TouchSample::NONE))
    }
}

/// Mock touch controller: replays queued reports.
pub struct MockTouchController {
    reports: heapless::Deque<TouchReport, 16>,
}

impl MockTouchController {
    /// Create new mock controller
    pub fn new() -> Self {
        Self {
            reports: heapless::Deque::new(),
        }
    }

    /// Queue a report for a later read
    pub fn push(&mut self, report: TouchReport) -> Result<(), TouchReport> {
        self.reports.push_back(report)
    }
}

impl Default for MockTouchController {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchController for MockTouchController {
    type Error = core::convert::Infallible;

    fn read_report(&mut self) -> Result<TouchReport, Self::Error> {
        Ok(self.reports.pop_front().unwrap_or_default())
    }
}

/// Mock standby coordinator: a settable sleep flag and a wake counter.
#[derive(Debug, Default)]
pub struct MockStandby {
    asleep: bool,
    wake_count: usize,
}

impl MockStandby {
    /// Create an awake coordinator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a coordinator already in standby
    pub fn asleep() -> Self {
        Self {
            asleep: true,
            wake_count: 0,
        }
    }

    /// Force the sleep flag
    pub fn set_asleep(&mut self, asleep: bool) {
        self.asleep = asleep;
    }

    /// Number of wake signals received
    pub fn wake_count(&self) -> usize {
        self.wake_count
    }
}

impl StandbyCoordinator for MockStandby {
    fn is_asleep(&self) -> bool {
        self.asleep
    }

    fn wake(&mut self) {
        self.wake_count = self.wake_count.saturating_add(1);
    }
}

/// Error returned by [`MockDisplaySink`] when a failure was injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSinkError;

/// Mock display sink recording every brightness write.
pub struct MockDisplaySink {
    backlight: bool,
    writes: heapless::Vec<u8, 1024>,
    write_count: usize,
    black_fills: usize,
    fail_after: Option<usize>,
}

impl MockDisplaySink {
    /// Sink with a controllable backlight (hardware-like)
    pub fn with_backlight() -> Self {
        Self {
            backlight: true,
            writes: heapless::Vec::new(),
            write_count: 0,
            black_fills: 0,
            fail_after: None,
        }
    }

    /// Sink without backlight control (simulator-like)
    pub fn without_backlight() -> Self {
        Self {
            backlight: false,
            ..Self::with_backlight()
        }
    }

    /// Fail every write once `writes` successful writes have happened
    #[must_use]
    pub fn failing_after(mut self, writes: usize) -> Self {
        self.fail_after = Some(writes);
        self
    }

    /// Levels written so far, in order (first 1024 only)
    pub fn writes(&self) -> &[u8] {
        &self.writes
    }

    /// Total number of successful brightness writes
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Number of black fills
    pub fn black_fills(&self) -> usize {
        self.black_fills
    }
}

impl DisplaySink for MockDisplaySink {
    type Error = MockSinkError;

    fn has_backlight(&self) -> bool {
        self.backlight
    }

    fn write_brightness(&mut self, level: BrightnessLevel) -> Result<(), Self::Error> {
        if self.fail_after.is_some_and(|limit| self.write_count >= limit) {
            return Err(MockSinkError);
        }
        self.write_count = self.write_count.saturating_add(1);
        let _ = self.writes.push(level.get());
        Ok(())
    }

    fn fill_black(&mut self) -> Result<(), Self::Error> {
        self.black_fills = self.black_fills.saturating_add(1);
        Ok(())
    }
}
