//! Touch input core — bounds normalisation, panel calibration and the
//! consume-then-refill synchronisation state machine.
//!
//! ```
//! use platform::{mocks::MockStandby, ScreenOrientation, TouchSample};
//! use touch::TouchStateMachine;
//!
//! let geometry = ScreenOrientation::Portrait.geometry();
//! let mut standby = MockStandby::new();
//! let mut touch = TouchStateMachine::new();
//!
//! touch.tick(TouchSample::new(150, 200), geometry, &mut standby);
//! touch.request_consume();
//! touch.tick(TouchSample::new(150, 200), geometry, &mut standby);
//! assert_eq!(touch.position(), (150, 200));
//! ```
#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]

#[macro_use]
mod fmt;

pub mod calibration;
pub mod machine;
pub mod normalize;

pub use calibration::{AxisMap, Calibration, OrientationMap, RawAxis};
pub use machine::{TickOutcome, TouchStateMachine};
pub use normalize::normalize;
