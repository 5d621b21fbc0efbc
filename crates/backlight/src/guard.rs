//! Overlap guard for brightness ramps.
//!
//! A two-state machine (`Idle` ⇄ `Ramping`) held in one atomic byte. Entering
//! `Ramping` is a compare-exchange, so of two contexts racing for the guard
//! exactly one wins; the other is told to drop its request. Leaving happens
//! when the returned [`RampToken`] is dropped, on every exit path.

use core::sync::atomic::{AtomicU8, Ordering};

/// Phase of the ramp guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RampPhase {
    /// No ramp running; the next request may start one.
    Idle = 0,
    /// A ramp is running; requests are dropped.
    Ramping = 1,
}

/// Atomic `Idle`/`Ramping` flag.
#[derive(Debug)]
pub struct RampGuard {
    phase: AtomicU8,
}

impl RampGuard {
    /// A guard in the `Idle` phase.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: AtomicU8::new(RampPhase::Idle as u8),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> RampPhase {
        if self.phase.load(Ordering::Acquire) == RampPhase::Ramping as u8 {
            RampPhase::Ramping
        } else {
            RampPhase::Idle
        }
    }

    /// Move `Idle → Ramping`, or `None` if a ramp already holds the guard.
    pub fn try_begin(&self) -> Option<RampToken<'_>> {
        self.phase
            .compare_exchange(
                RampPhase::Idle as u8,
                RampPhase::Ramping as u8,
                Ordering::Acquire,
                Ordering::Relaxed,
            )
            .ok()
            .map(|_| RampToken { guard: self })
    }
}

impl Default for RampGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Proof of holding the guard; returns it to `Idle` on drop.
#[derive(Debug)]
#[must_use = "the guard is released as soon as the token is dropped"]
pub struct RampToken<'a> {
    guard: &'a RampGuard,
}

impl Drop for RampToken<'_> {
    fn drop(&mut self) {
        self.guard
            .phase
            .store(RampPhase::Idle as u8, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(RampGuard::new().phase(), RampPhase::Idle);
    }

    #[test]
    fn second_begin_is_refused_while_held() {
        let guard = RampGuard::new();
        let token = guard.try_begin();
        assert!(token.is_some());
        assert_eq!(guard.phase(), RampPhase::Ramping);
        assert!(guard.try_begin().is_none());
        drop(token);
        assert_eq!(guard.phase(), RampPhase::Idle);
        assert!(guard.try_begin().is_some());
    }
}
