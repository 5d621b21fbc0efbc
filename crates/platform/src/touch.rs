//! Touch input abstraction

use crate::display::ScreenOrientation;

/// Maximum number of simultaneous points a controller report can carry.
pub const MAX_TOUCH_POINTS: usize = 2;

/// One touch reading in screen coordinates.
///
/// The reserved value [`TouchSample::NONE`] (`-1, -1`) means "not touching".
/// A sample is touching exactly when neither coordinate is `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchSample {
    /// Horizontal coordinate in pixels.
    pub x: i16,
    /// Vertical coordinate in pixels.
    pub y: i16,
}

impl TouchSample {
    /// The sentinel "no touch present" sample.
    pub const NONE: Self = Self { x: -1, y: -1 };

    /// Create a sample at `(x, y)`.
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Returns `true` unless either coordinate carries the sentinel.
    #[must_use]
    pub const fn touching(self) -> bool {
        self.x != -1 && self.y != -1
    }

    /// Coordinates as an `(x, y)` pair.
    #[must_use]
    pub const fn position(self) -> (i16, i16) {
        (self.x, self.y)
    }
}

impl Default for TouchSample {
    fn default() -> Self {
        Self::NONE
    }
}

/// A single raw point as reported by the touch controller, before calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawPoint {
    /// Raw controller X.
    pub x: u16,
    /// Raw controller Y.
    pub y: u16,
}

/// A raw controller report: zero, one or several simultaneous points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TouchReport {
    points: heapless::Vec<RawPoint, MAX_TOUCH_POINTS>,
}

impl TouchReport {
    /// An empty report (no finger on the panel).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            points: heapless::Vec::new(),
        }
    }

    /// A report holding exactly one point.
    #[must_use]
    pub fn single(x: u16, y: u16) -> Self {
        let mut report = Self::empty();
        // Capacity is at least one, the push cannot fail.
        let _ = report.points.push(RawPoint { x, y });
        report
    }

    /// Append a point, handing it back if the report is full.
    pub fn push(&mut self, point: RawPoint) -> Result<(), RawPoint> {
        self.points.push(point)
    }

    /// All points in report order.
    pub fn points(&self) -> &[RawPoint] {
        &self.points
    }

    /// The only point, when the report holds exactly one.
    ///
    /// Multi-touch reports are not a usable single position and yield `None`.
    pub fn primary(&self) -> Option<RawPoint> {
        match self.points.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// Produces one touch sample per tick, already mapped to screen axes.
///
/// Implementations apply any orientation-dependent axis remapping before
/// returning; normalisation against the screen bounds is not their concern.
pub trait SampleSource {
    /// Error type for sampling failures
    type Error: core::fmt::Debug;

    /// Read the current sample for the given screen orientation.
    fn read_raw(&mut self, orientation: ScreenOrientation) -> Result<TouchSample, Self::Error>;
}

/// Raw touch controller (register protocol lives in the implementation).
pub trait TouchController {
    /// Error type for bus/controller failures
    type Error: core::fmt::Debug;

    /// Read the latest report from the controller.
    fn read_report(&mut self) -> Result<TouchReport, Self::Error>;
}
