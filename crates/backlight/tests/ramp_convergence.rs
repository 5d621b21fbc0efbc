//! Brightness ramp behaviour against mock and threaded collaborators.

// Test files legitimately use expect() for readable assertions.
#![allow(clippy::expect_used)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use backlight::{
    BrightnessRampController, LocalRampController, RampConfig, RampOutcome, RampPhase,
};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embedded_hal::delay::DelayNs;
use embedded_hal_mock::eh1::delay::NoopDelay;
use platform::mocks::MockDisplaySink;
use platform::{BrightnessLevel, DisplaySink};

fn at(level: u8) -> RampConfig {
    RampConfig::default()
        .with_current(BrightnessLevel::from_u8(level))
        .with_target(BrightnessLevel::from_u8(level))
}

#[test]
fn ramp_up_converges_in_unit_steps() {
    let mut ctl =
        LocalRampController::new(MockDisplaySink::with_backlight(), NoopDelay::new(), at(85));

    assert_eq!(
        ctl.set_brightness(255, false),
        Ok(RampOutcome::Ramped { steps: 170 })
    );
    assert_eq!(ctl.current().get(), 255);
    assert_eq!(ctl.brightness().get(), 255);

    let writes = ctl.sink_mut().writes();
    assert_eq!(writes.len(), 170);
    assert_eq!(writes.first(), Some(&86));
    assert_eq!(writes.last(), Some(&255));
    assert!(writes.windows(2).all(|w| w[1] == w[0] + 1));

    assert_eq!(ctl.set_brightness(255, false), Ok(RampOutcome::Unchanged));
    assert_eq!(ctl.sink_mut().write_count(), 170, "repeat call performs zero steps");
}

#[test]
fn temporary_request_keeps_baseline() {
    let mut ctl =
        LocalRampController::new(MockDisplaySink::with_backlight(), NoopDelay::new(), at(255));

    assert_eq!(
        ctl.set_brightness(0, true),
        Ok(RampOutcome::Ramped { steps: 255 })
    );
    assert_eq!(ctl.current(), BrightnessLevel::OFF);
    assert_eq!(ctl.brightness().get(), 255);
    assert_eq!(ctl.sink_mut().black_fills(), 0, "real backlight is not painted");
}

#[test]
fn baseline_is_recorded_even_when_level_is_unchanged() {
    let ctl = LocalRampController::new(
        MockDisplaySink::with_backlight(),
        NoopDelay::new(),
        at(40).with_target(BrightnessLevel::from_u8(200)),
    );
    assert_eq!(ctl.set_brightness(40, false), Ok(RampOutcome::Unchanged));
    assert_eq!(ctl.brightness().get(), 40);
}

/// Delay double that counts requested microseconds.
#[derive(Default)]
struct RecordingDelay {
    total_us: u64,
    calls: usize,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_us += u64::from(ns / 1_000);
        self.calls += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.total_us += u64::from(us);
        self.calls += 1;
    }
}

#[test]
fn pauses_once_per_step() {
    let ctl = BrightnessRampController::<CriticalSectionRawMutex, _, _>::new(
        MockDisplaySink::with_backlight(),
        RecordingDelay::default(),
        at(10).with_step_delay_us(1_000),
    );
    assert_eq!(
        ctl.set_brightness(0, false),
        Ok(RampOutcome::Ramped { steps: 10 })
    );

    let (_sink, delay) = ctl.into_parts();
    assert_eq!(delay.calls, 10);
    assert_eq!(delay.total_us, 10_000);
}

/// Sink whose write counter is visible from outside the controller.
struct SharedCountSink {
    writes: Arc<AtomicUsize>,
}

impl DisplaySink for SharedCountSink {
    type Error = core::convert::Infallible;

    fn has_backlight(&self) -> bool {
        true
    }

    fn write_brightness(&mut self, _level: BrightnessLevel) -> Result<(), Self::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn fill_black(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

struct ThreadSleep;

impl DelayNs for ThreadSleep {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

#[test]
fn concurrent_request_is_dropped_not_queued() {
    let writes = Arc::new(AtomicUsize::new(0));
    let ctl = BrightnessRampController::<CriticalSectionRawMutex, _, _>::new(
        SharedCountSink {
            writes: Arc::clone(&writes),
        },
        ThreadSleep,
        at(0).with_step_delay_us(1_000),
    );

    std::thread::scope(|s| {
        let ramp = s.spawn(|| ctl.set_brightness(255, false));

        while writes.load(Ordering::SeqCst) == 0 {
            std::thread::yield_now();
        }
        assert_eq!(ctl.phase(), RampPhase::Ramping);
        assert_eq!(ctl.set_brightness(10, false), Ok(RampOutcome::Busy));
        assert_eq!(ctl.brightness().get(), 255, "dropped request must not persist");

        let outcome = ramp.join().expect("ramp thread panicked");
        assert_eq!(outcome, Ok(RampOutcome::Ramped { steps: 255 }));
    });

    assert_eq!(ctl.phase(), RampPhase::Idle);
    assert_eq!(ctl.current().get(), 255);
    assert_eq!(writes.load(Ordering::SeqCst), 255);
}

proptest::proptest! {
    /// Any request lands exactly on the clamped value with |delta| writes.
    #[test]
    fn any_request_converges(start in 0u8..=255u8, value in 0u16..=400u16, temporary in proptest::bool::ANY) {
        let mut ctl = LocalRampController::new(
            MockDisplaySink::with_backlight(),
            NoopDelay::new(),
            at(start),
        );
        let expected = BrightnessLevel::new(value);
        let distance = BrightnessLevel::from_u8(start).distance(expected);

        let outcome = ctl.set_brightness(value, temporary);
        if distance == 0 {
            proptest::prop_assert_eq!(outcome, Ok(RampOutcome::Unchanged));
        } else {
            proptest::prop_assert_eq!(outcome, Ok(RampOutcome::Ramped { steps: distance }));
        }
        proptest::prop_assert_eq!(ctl.current(), expected);
        let baseline = if temporary { BrightnessLevel::from_u8(start) } else { expected };
        proptest::prop_assert_eq!(ctl.brightness(), baseline);
        proptest::prop_assert_eq!(ctl.sink_mut().write_count(), usize::from(distance));
    }
}
