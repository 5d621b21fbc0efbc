//! Hardware Abstraction Layer (HAL) for the Paxo touch panel
//!
//! This crate provides the trait-based seams between the touch/backlight
//! core and the outside world, enabling development and testing without
//! physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Composition Layer (panel crate)
//!         ↓
//! Core Layers (touch, backlight)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Hardware / simulator backends
//! ```
//!
//! # Abstractions
//!
//! - [`SampleSource`] - One raw touch sample per tick
//! - [`TouchController`] - Raw multi-point controller reports
//! - [`StandbyCoordinator`] - System-wide sleep state and wake signal
//! - [`DisplaySink`] - Brightness levels and the "screen off" fill
//!
//! # Features
//!
//! - `std`: `std::error::Error` impls and the [`mocks`] module
//! - `defmt`: `defmt::Format` derives on all value types
//! - `serde`: serde derives on configuration value types
//!
//! # Example
//!
//! ```
//! use platform::{ScreenOrientation, TouchSample};
//!
//! let geometry = ScreenOrientation::Portrait.geometry();
//! assert_eq!((geometry.width, geometry.height), (320, 480));
//! assert!(!TouchSample::NONE.touching());
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[cfg(feature = "std")]
extern crate std;

pub mod backlight_types;
pub mod config;
pub mod display;
pub mod standby;
pub mod touch;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main high-level traits
pub use backlight_types::{BrightnessLevel, OutOfRangeError};
pub use display::{DisplaySink, ScreenGeometry, ScreenOrientation};
pub use standby::StandbyCoordinator;
pub use touch::{RawPoint, SampleSource, TouchController, TouchReport, TouchSample};
