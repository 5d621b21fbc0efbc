//! Orientation-keyed calibration from raw controller axes to screen axes.
//!
//! The panel is mounted rotated relative to the controller, so each screen
//! axis is computed from one raw axis with a linear fit:
//!
//! ```text
//! screen = (raw - offset) * screen_span / raw_span
//! ```
//!
//! optionally mirrored as `screen_span - screen - margin`. One
//! [`OrientationMap`] per [`ScreenOrientation`] forms the strategy table.
//! Results are not bounds-checked here; that is the normaliser's job.

use platform::{RawPoint, ScreenOrientation, TouchReport, TouchSample};

/// Raw controller axis feeding a screen axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RawAxis {
    /// Controller X register
    X,
    /// Controller Y register
    Y,
}

/// Linear fit for one screen axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisMap {
    /// Which raw axis is read.
    pub source: RawAxis,
    /// Raw value corresponding to screen coordinate 0.
    pub offset: i32,
    /// Raw distance covering the full screen span. Must be non-zero.
    pub raw_span: i32,
    /// Screen span in pixels.
    pub screen_span: i32,
    /// Flip the axis as `screen_span - value - margin`.
    pub mirror_margin: Option<i32>,
}

impl AxisMap {
    /// Screen coordinate for `point`, or `None` on arithmetic overflow or a
    /// zero `raw_span`.
    pub fn apply(&self, point: RawPoint) -> Option<i32> {
        let raw = i32::from(match self.source {
            RawAxis::X => point.x,
            RawAxis::Y => point.y,
        });
        let scaled = raw
            .checked_sub(self.offset)?
            .checked_mul(self.screen_span)?
            .checked_div(self.raw_span)?;

        match self.mirror_margin {
            Some(margin) => self.screen_span.checked_sub(scaled)?.checked_sub(margin),
            None => Some(scaled),
        }
    }
}

/// Calibration for both screen axes in one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OrientationMap {
    /// Screen X
    pub x: AxisMap,
    /// Screen Y
    pub y: AxisMap,
}

impl OrientationMap {
    /// Map one raw point; values that do not fit an `i16` become the sentinel.
    pub fn apply(&self, point: RawPoint) -> TouchSample {
        let x = self.x.apply(point).and_then(|v| i16::try_from(v).ok());
        let y = self.y.apply(point).and_then(|v| i16::try_from(v).ok());
        match (x, y) {
            (Some(x), Some(y)) => TouchSample::new(x, y),
            _ => TouchSample::NONE,
        }
    }
}

/// Strategy table: one [`OrientationMap`] per orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Used in [`ScreenOrientation::Portrait`]
    pub portrait: OrientationMap,
    /// Used in [`ScreenOrientation::Landscape`]
    pub landscape: OrientationMap,
}

const FT6236_X: AxisMap = AxisMap {
    source: RawAxis::X,
    offset: 16,
    raw_span: 303,
    screen_span: 320,
    mirror_margin: None,
};

const FT6236_Y: AxisMap = AxisMap {
    source: RawAxis::Y,
    offset: 23,
    raw_span: 442,
    screen_span: 480,
    mirror_margin: None,
};

impl Calibration {
    /// Factory fit for the FT6236 controller on the 320×480 panel.
    pub const FT6236: Self = Self {
        portrait: OrientationMap {
            x: FT6236_X,
            y: FT6236_Y,
        },
        landscape: OrientationMap {
            x: FT6236_Y,
            y: AxisMap {
                mirror_margin: Some(10),
                ..FT6236_X
            },
        },
    };

    /// Map for `orientation`.
    pub fn for_orientation(&self, orientation: ScreenOrientation) -> &OrientationMap {
        match orientation {
            ScreenOrientation::Portrait => &self.portrait,
            ScreenOrientation::Landscape => &self.landscape,
        }
    }

    /// Turn a controller report into a screen sample.
    ///
    /// Only single-point reports describe a position; empty and multi-touch
    /// reports yield [`TouchSample::NONE`].
    pub fn apply(&self, orientation: ScreenOrientation, report: &TouchReport) -> TouchSample {
        match report.primary() {
            Some(point) => self.for_orientation(orientation).apply(point),
            None => TouchSample::NONE,
        }
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::FT6236
    }
}
