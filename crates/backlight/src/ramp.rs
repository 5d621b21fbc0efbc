//! Unit-step brightness ramp.
//!
//! `set_brightness` walks the hardware level one unit at a time toward the
//! requested value, writing every intermediate level and pausing
//! `step_delay_us` after each write. The call blocks for the whole ramp and
//! cannot be cancelled.
//!
//! Requests arriving while a ramp runs, from another execution context or
//! from inside the sink itself, are dropped and reported as
//! [`RampOutcome::Busy`]. They are never queued.
//!
//! # Choosing the raw mutex
//!
//! The sink and delay sit behind an `embassy_sync` blocking mutex that is
//! held for the whole ramp. Use [`NoopRawMutex`] (see [`LocalRampController`])
//! when the controller stays on one executor; `CriticalSectionRawMutex` makes
//! it `Sync` but masks interrupts for the ramp's duration on bare metal.

use core::cell::RefCell;
use core::sync::atomic::{AtomicU8, Ordering};

use embassy_sync::blocking_mutex::raw::{NoopRawMutex, RawMutex};
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal::delay::DelayNs;
use platform::{BrightnessLevel, DisplaySink};

use crate::config::RampConfig;
use crate::guard::{RampGuard, RampPhase};

/// What a [`BrightnessRampController::set_brightness`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampOutcome {
    /// Another ramp held the guard; the request was dropped.
    Busy,
    /// The hardware was already at the requested level.
    Unchanged,
    /// The level was stepped to the request.
    Ramped {
        /// Number of levels written, `|requested - previous|`.
        steps: u16,
    },
    /// Sink without backlight: the level was recorded without stepping.
    Switched,
}

/// Errors returned by [`BrightnessRampController::set_brightness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampError<E> {
    /// The display sink rejected a write. `current()` holds the last level
    /// that was written successfully.
    Sink(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for RampError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sink(e) => write!(f, "display sink error during ramp: {e:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for RampError<E> {}

struct RampIo<S, D> {
    sink: S,
    delay: D,
}

/// Drives a [`DisplaySink`] from its current level toward a requested one.
///
/// `target` is the persisted baseline returned by [`brightness`]; temporary
/// requests move the hardware without touching it.
///
/// [`brightness`]: Self::brightness
pub struct BrightnessRampController<M: RawMutex, S, D> {
    guard: RampGuard,
    target: AtomicU8,
    current: AtomicU8,
    step_delay_us: u32,
    io: Mutex<M, RefCell<RampIo<S, D>>>,
}

/// Controller confined to a single execution context.
pub type LocalRampController<S, D> = BrightnessRampController<NoopRawMutex, S, D>;

impl<M, S, D> BrightnessRampController<M, S, D>
where
    M: RawMutex,
    S: DisplaySink,
    D: DelayNs,
{
    /// Create a controller owning `sink` and `delay`.
    pub fn new(sink: S, delay: D, config: RampConfig) -> Self {
        Self {
            guard: RampGuard::new(),
            target: AtomicU8::new(config.target.get()),
            current: AtomicU8::new(config.current.get()),
            step_delay_us: config.step_delay_us,
            io: Mutex::new(RefCell::new(RampIo { sink, delay })),
        }
    }

    /// Move the backlight to `value`.
    ///
    /// Values above 255 are clamped. Unless `temporary`, `value` also becomes
    /// the persisted baseline, recorded before the ramp starts.
    ///
    /// # Errors
    ///
    /// [`RampError::Sink`] when the sink fails; the ramp stops at the last
    /// good level and the guard is released.
    pub fn set_brightness(
        &self,
        value: u16,
        temporary: bool,
    ) -> Result<RampOutcome, RampError<S::Error>> {
        let Some(_ramp) = self.guard.try_begin() else {
            debug!("brightness {} dropped, ramp in progress", value);
            return Ok(RampOutcome::Busy);
        };

        let requested = BrightnessLevel::new(value);
        if !temporary {
            self.target.store(requested.get(), Ordering::Relaxed);
        }

        self.io.lock(|io| {
            // Only reachable from a sink calling back into the controller,
            // which the guard has already turned away.
            let Ok(mut io) = io.try_borrow_mut() else {
                return Ok(RampOutcome::Busy);
            };
            let RampIo { sink, delay } = &mut *io;

            if !sink.has_backlight() {
                return self.switch(sink, requested);
            }

            let from = self.current();
            if requested == from {
                return Ok(RampOutcome::Unchanged);
            }

            info!("Brightness: {}", requested.get());
            self.ramp(sink, delay, from, requested)
        })
    }

    fn ramp(
        &self,
        sink: &mut S,
        delay: &mut D,
        from: BrightnessLevel,
        to: BrightnessLevel,
    ) -> Result<RampOutcome, RampError<S::Error>> {
        let mut level = from;
        let mut steps: u16 = 0;

        while level != to {
            let next = level.step_toward(to);
            if let Err(e) = sink.write_brightness(next) {
                warn!("brightness ramp aborted at {}", level.get());
                return Err(RampError::Sink(e));
            }
            level = next;
            self.current.store(level.get(), Ordering::Relaxed);
            steps = steps.saturating_add(1);
            delay.delay_us(self.step_delay_us);
        }

        Ok(RampOutcome::Ramped { steps })
    }

    fn switch(
        &self,
        sink: &mut S,
        requested: BrightnessLevel,
    ) -> Result<RampOutcome, RampError<S::Error>> {
        self.current.store(requested.get(), Ordering::Relaxed);
        if requested == BrightnessLevel::OFF {
            sink.fill_black().map_err(RampError::Sink)?;
        }
        Ok(RampOutcome::Switched)
    }

    /// Persisted baseline (not the transient hardware level).
    pub fn brightness(&self) -> BrightnessLevel {
        BrightnessLevel::from_u8(self.target.load(Ordering::Relaxed))
    }

    /// Last level actually written to the hardware.
    pub fn current(&self) -> BrightnessLevel {
        BrightnessLevel::from_u8(self.current.load(Ordering::Relaxed))
    }

    /// Whether a ramp is running right now.
    pub fn phase(&self) -> RampPhase {
        self.guard.phase()
    }

    /// Exclusive access to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.io.get_mut().get_mut().sink
    }

    /// Tear down, returning the sink and delay.
    pub fn into_parts(self) -> (S, D) {
        let RampIo { sink, delay } = self.io.into_inner().into_inner();
        (sink, delay)
    }
}
