//! Display abstraction layer

use crate::backlight_types::BrightnessLevel;

/// Screen orientations supported by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScreenOrientation {
    /// 320 wide, 480 high
    #[default]
    Portrait,
    /// 480 wide, 320 high
    Landscape,
}

impl ScreenOrientation {
    /// Screen size for this orientation.
    #[must_use]
    pub const fn geometry(self) -> ScreenGeometry {
        match self {
            Self::Portrait => ScreenGeometry::new(320, 480),
            Self::Landscape => ScreenGeometry::new(480, 320),
        }
    }
}

/// Screen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenGeometry {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl ScreenGeometry {
    /// Create a geometry of `width` × `height`.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Output side of the panel as seen by the brightness ramp.
///
/// Pixel pushing is handled by the rendering layer and is not part of this
/// trait.
pub trait DisplaySink {
    /// Error type for display operations
    type Error: core::fmt::Debug;

    /// Whether the panel has a controllable backlight.
    ///
    /// Sinks without one (the desktop simulator) are never stepped; they only
    /// receive [`fill_black`](Self::fill_black) as a stand-in for "off".
    fn has_backlight(&self) -> bool;

    /// Write one backlight level.
    fn write_brightness(&mut self, level: BrightnessLevel) -> Result<(), Self::Error>;

    /// Make the screen fully dark.
    fn fill_black(&mut self) -> Result<(), Self::Error>;
}
