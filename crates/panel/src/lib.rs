//! Screen-side composition for the Paxo device.
//!
//! [`Panel`] ties the touch state machine and the backlight ramp to concrete
//! collaborators chosen at composition time:
//!
//! | Feature     | Touch source                | Display sink          |
//! |-------------|-----------------------------|-----------------------|
//! | `hardware`  | [`CalibratedTouchSource`]   | [`PwmBacklight`]      |
//! | `simulator` | [`SimulatedPointer`]        | [`FramebufferSink`]   |
//!
//! Application code only talks to [`Panel`], so the frame loop is identical
//! across targets:
//!
//! ```no_run
//! # use panel::Panel;
//! # use platform::{DisplaySink, SampleSource, StandbyCoordinator};
//! # use embedded_hal::delay::DelayNs;
//! fn frame_loop<Src, Sb, Sk, D>(panel: &mut Panel<Src, Sb, Sk, D>)
//! where
//!     Src: SampleSource,
//!     Sb: StandbyCoordinator,
//!     Sk: DisplaySink,
//!     D: DelayNs,
//! {
//!     while panel.is_running() {
//!         panel.tick();
//!         if panel.is_touched() {
//!             let (_x, _y) = panel.position();
//!             panel.request_consume();
//!         }
//!     }
//! }
//! ```
#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

#[macro_use]
mod fmt;

pub mod panel;

#[cfg(feature = "hardware")]
pub mod hardware;
#[cfg(feature = "simulator")]
pub mod simulator;

pub use panel::{Panel, PanelConfig};

#[cfg(feature = "hardware")]
pub use hardware::{CalibratedTouchSource, PwmBacklight};
#[cfg(feature = "simulator")]
pub use simulator::{FramebufferSink, SimulatedPointer};

pub use backlight::{RampError, RampOutcome};
pub use touch::TickOutcome;
