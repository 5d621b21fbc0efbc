//! Application configuration and constants
//!
//! Central defaults shared by the core crates and the composition layer.
//! Reference these constants rather than hardcoding values.

use crate::backlight_types::BrightnessLevel;
use crate::display::ScreenOrientation;

/// The application name (boot splash text)
pub const APP_NAME: &str = "Paxo";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Orientation the panel boots in.
pub const DEFAULT_ORIENTATION: ScreenOrientation = ScreenOrientation::Portrait;

/// Persisted brightness baseline at boot (one third of full scale).
pub const DEFAULT_BRIGHTNESS: BrightnessLevel = BrightnessLevel::from_u8(u8::MAX / 3);

/// Level the backlight hardware is assumed to sit at before the first ramp.
pub const BOOT_BACKLIGHT_LEVEL: BrightnessLevel = BrightnessLevel::OFF;

/// Pause between two ramp steps, in microseconds.
pub const DEFAULT_RAMP_STEP_DELAY_US: u32 = 1_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_brightness_is_a_third() {
        assert_eq!(DEFAULT_BRIGHTNESS.get(), 85);
    }

    #[test]
    fn version_matches_manifest() {
        assert!(!APP_VERSION.is_empty());
    }
}
