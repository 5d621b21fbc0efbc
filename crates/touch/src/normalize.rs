//! Bounds normalisation of raw samples.
//!
//! A raw sample is accepted only when it lies inside `1..=width` ×
//! `1..=height`. Everything else, including the controller's own "no touch"
//! report, collapses to [`TouchSample::NONE`].

use platform::{ScreenGeometry, TouchSample};

/// Map a raw sample onto the screen, or to the sentinel when it falls outside.
///
/// The lower bound is exclusive (`0` is rejected), the upper bound inclusive
/// (`width` / `height` are accepted).
#[must_use]
pub fn normalize(raw: TouchSample, geometry: ScreenGeometry) -> TouchSample {
    let (x, y) = (i32::from(raw.x), i32::from(raw.y));

    if !raw.touching()
        || x <= 0
        || y <= 0
        || x > i32::from(geometry.width)
        || y > i32::from(geometry.height)
    {
        return TouchSample::NONE;
    }

    raw
}
