//! Desktop simulator backends.
//!
//! The window thread owns the event loop and writes pointer state into a
//! [`SimulatedPointer`]; the frame loop reads it back through
//! `&SimulatedPointer` as a [`SampleSource`]. The simulated screen has no
//! backlight, so [`FramebufferSink`] can only go black or stay as it is.

use core::cell::Cell;
use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_graphics::pixelcolor::RgbColor;
use embedded_graphics::prelude::DrawTarget;
use platform::{BrightnessLevel, DisplaySink, SampleSource, ScreenOrientation, TouchSample};

/// Pointer state shared between the window thread and the frame loop.
///
/// Coordinates are already in screen space for the current orientation.
pub struct SimulatedPointer {
    sample: Mutex<CriticalSectionRawMutex, Cell<TouchSample>>,
}

impl SimulatedPointer {
    /// Released pointer. `const` so it can live in a `static`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sample: Mutex::new(Cell::new(TouchSample::NONE)),
        }
    }

    /// Button held at `(x, y)`.
    pub fn press(&self, x: i16, y: i16) {
        self.sample.lock(|s| s.set(TouchSample::new(x, y)));
    }

    /// Button released.
    pub fn release(&self) {
        self.sample.lock(|s| s.set(TouchSample::NONE));
    }

    /// Latest pointer state.
    pub fn sample(&self) -> TouchSample {
        self.sample.lock(Cell::get)
    }
}

impl Default for SimulatedPointer {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSource for &SimulatedPointer {
    type Error = Infallible;

    fn read_raw(&mut self, _orientation: ScreenOrientation) -> Result<TouchSample, Self::Error> {
        Ok(self.sample())
    }
}

/// [`DisplaySink`] for a framebuffer without backlight control.
///
/// Level 0 clears the framebuffer to black; other levels render nothing.
pub struct FramebufferSink<T> {
    target: T,
}

impl<T> FramebufferSink<T>
where
    T: DrawTarget,
    T::Color: RgbColor,
{
    /// Wrap a draw target.
    pub fn new(target: T) -> Self {
        Self { target }
    }

    /// The wrapped target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Release the wrapped target.
    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T> DisplaySink for FramebufferSink<T>
where
    T: DrawTarget,
    T::Color: RgbColor,
    T::Error: core::fmt::Debug,
{
    type Error = T::Error;

    fn has_backlight(&self) -> bool {
        false
    }

    fn write_brightness(&mut self, _level: BrightnessLevel) -> Result<(), Self::Error> {
        Ok(())
    }

    fn fill_black(&mut self) -> Result<(), Self::Error> {
        self.target.clear(T::Color::BLACK)
    }
}
