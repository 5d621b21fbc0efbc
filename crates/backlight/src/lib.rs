//! Backlight brightness ramp — unit-step transitions toward a requested
//! level with an atomic guard against overlapping ramps.
#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod fmt;

pub mod config;
pub mod guard;
pub mod ramp;

pub use config::RampConfig;
pub use guard::{RampGuard, RampPhase, RampToken};
pub use ramp::{BrightnessRampController, LocalRampController, RampError, RampOutcome};
