//! Ramp controller configuration.

use platform::config::{BOOT_BACKLIGHT_LEVEL, DEFAULT_BRIGHTNESS, DEFAULT_RAMP_STEP_DELAY_US};
use platform::BrightnessLevel;

/// Initial levels and timing for a [`BrightnessRampController`].
///
/// [`BrightnessRampController`]: crate::BrightnessRampController
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RampConfig {
    /// Persisted baseline reported by `brightness()` before any request.
    pub target: BrightnessLevel,
    /// Level the hardware is at when the controller is created.
    pub current: BrightnessLevel,
    /// Pause after each unit step, in microseconds.
    pub step_delay_us: u32,
}

impl RampConfig {
    /// Set the persisted baseline.
    #[must_use]
    pub fn with_target(mut self, target: BrightnessLevel) -> Self {
        self.target = target;
        self
    }

    /// Set the starting hardware level.
    #[must_use]
    pub fn with_current(mut self, current: BrightnessLevel) -> Self {
        self.current = current;
        self
    }

    /// Set the pause between steps.
    #[must_use]
    pub fn with_step_delay_us(mut self, step_delay_us: u32) -> Self {
        self.step_delay_us = step_delay_us;
        self
    }
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_BRIGHTNESS,
            current: BOOT_BACKLIGHT_LEVEL,
            step_delay_us: DEFAULT_RAMP_STEP_DELAY_US,
        }
    }
}
