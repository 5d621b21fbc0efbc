//! Touch synchronisation state machine.
//!
//! `TouchStateMachine` decouples the sensor cadence from the application's
//! read cadence with three slots:
//!
//! - `live`: latest normalised reading, refreshed every awake tick
//! - `pending`: the value waiting to be delivered, mirrors `live`
//! - `acknowledged`: what [`is_touched`] and [`position`] report
//!
//! The application calls [`request_consume`] once it has handled the
//! acknowledged value; the next awake tick then moves `pending` into
//! `acknowledged` and clears `pending`.
//!
//! Wake edges are detected against `acknowledged`, the application's view,
//! so a held touch the application has not yet seen raises one wake signal,
//! not one per tick.
//!
//! [`is_touched`]: TouchStateMachine::is_touched
//! [`position`]: TouchStateMachine::position
//! [`request_consume`]: TouchStateMachine::request_consume

use platform::{ScreenGeometry, StandbyCoordinator, TouchSample};

use crate::normalize::normalize;

/// What a single [`TouchStateMachine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// The system was in standby; nothing was read or changed.
    Suspended,
    /// The sample was tracked.
    Tracked {
        /// A wake signal was sent to the standby coordinator.
        woke: bool,
        /// A pending consume request was honoured this tick.
        consumed: bool,
    },
}

/// Owned touch state, created once and driven once per frame.
///
/// No I/O and no hardware dependencies: the raw sample, screen geometry and
/// standby coordinator are all supplied by the caller.
#[derive(Debug, Clone)]
pub struct TouchStateMachine {
    live: TouchSample,
    pending: TouchSample,
    acknowledged: TouchSample,
    consume_requested: bool,
    // Sample that raised the outstanding wake; reset whenever the hardware
    // agrees with `acknowledged` again.
    signalled: TouchSample,
}

impl TouchStateMachine {
    /// All slots at the sentinel, no consume request.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            live: TouchSample::NONE,
            pending: TouchSample::NONE,
            acknowledged: TouchSample::NONE,
            consume_requested: false,
            signalled: TouchSample::NONE,
        }
    }

    /// Advance by one frame with `raw`.
    ///
    /// Order within a tick is fixed: standby check, normalise, wake-edge
    /// detection, refresh `live`/`pending`, then consumption.
    pub fn tick<S>(
        &mut self,
        raw: TouchSample,
        geometry: ScreenGeometry,
        standby: &mut S,
    ) -> TickOutcome
    where
        S: StandbyCoordinator + ?Sized,
    {
        // Touch is not tracked at all in standby, not even for the wake edge.
        if standby.is_asleep() {
            return TickOutcome::Suspended;
        }

        let normalized = normalize(raw, geometry);
        let woke = self.detect_wake_edge(normalized, standby);

        self.live = normalized;
        self.pending = normalized;

        let consumed = core::mem::take(&mut self.consume_requested);
        if consumed {
            self.acknowledged = self.pending;
            self.pending = TouchSample::NONE;
            trace!(
                "touch consumed x={} y={}",
                self.acknowledged.x,
                self.acknowledged.y
            );
        }

        TickOutcome::Tracked { woke, consumed }
    }

    fn detect_wake_edge<S>(&mut self, normalized: TouchSample, standby: &mut S) -> bool
    where
        S: StandbyCoordinator + ?Sized,
    {
        if normalized == self.acknowledged {
            self.signalled = self.acknowledged;
            return false;
        }
        if normalized == self.signalled || standby.is_asleep() {
            return false;
        }

        debug!("touch wake edge x={} y={}", normalized.x, normalized.y);
        self.signalled = normalized;
        standby.wake();
        true
    }

    /// The application has read the acknowledged value; let the next one in.
    ///
    /// Idempotent until the next tick.
    pub fn request_consume(&mut self) {
        self.consume_requested = true;
    }

    /// Whether the acknowledged sample is a touch.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.acknowledged.touching()
    }

    /// Acknowledged position; `(-1, -1)` when not touched.
    #[must_use]
    pub fn position(&self) -> (i16, i16) {
        self.acknowledged.position()
    }

    /// Most recent normalised reading.
    #[must_use]
    pub fn live(&self) -> TouchSample {
        self.live
    }

    /// Value waiting for the next consumption.
    #[must_use]
    pub fn pending(&self) -> TouchSample {
        self.pending
    }

    /// Value visible to the application.
    #[must_use]
    pub fn acknowledged(&self) -> TouchSample {
        self.acknowledged
    }

    /// Whether a consume request is outstanding.
    #[must_use]
    pub fn consume_requested(&self) -> bool {
        self.consume_requested
    }
}

impl Default for TouchStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
