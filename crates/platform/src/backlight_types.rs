//! Backlight domain newtypes.
//!
//! - `BrightnessLevel`: 0–255 backlight level. Wider inputs are clamped by
//!   [`BrightnessLevel::new`] or rejected by [`BrightnessLevel::try_new`].

// ── Error type ───────────────────────────────────────────────────────────────

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: u32,
    /// The inclusive minimum allowed value.
    pub min: u32,
    /// The inclusive maximum allowed value.
    pub max: u32,
}

impl core::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "value {} outside {}..={}",
            self.value, self.min, self.max
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRangeError {}

// ── BrightnessLevel ──────────────────────────────────────────────────────────

/// Backlight level, 0 (off) to 255 (full).
///
/// Wraps a `u8`, so every value of the type is a valid hardware level.
/// Construct from the wider `u16` API value with [`BrightnessLevel::new`]
/// (clamping) or [`BrightnessLevel::try_new`] (fallible, strict).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct BrightnessLevel(u8);

impl BrightnessLevel {
    /// Backlight off.
    pub const OFF: Self = Self(0);

    /// Full brightness.
    pub const MAX: Self = Self(u8::MAX);

    /// Create a `BrightnessLevel`, clamping values above 255 to 255.
    #[must_use]
    pub fn new(value: u16) -> Self {
        Self(u8::try_from(value).unwrap_or(u8::MAX))
    }

    /// Create a `BrightnessLevel`, returning an error if `value > 255`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `value > 255`.
    pub fn try_new(value: u16) -> Result<Self, OutOfRangeError> {
        u8::try_from(value).map(Self).map_err(|_| OutOfRangeError {
            value: u32::from(value),
            min: 0,
            max: u32::from(u8::MAX),
        })
    }

    /// Wrap an 8-bit level (always valid).
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        Self(value)
    }

    /// Return the inner level (0–255).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// One unit closer to `target`, or `self` when already there.
    #[must_use]
    pub fn step_toward(self, target: Self) -> Self {
        match self.0.cmp(&target.0) {
            core::cmp::Ordering::Less => Self(self.0.saturating_add(1)),
            core::cmp::Ordering::Greater => Self(self.0.saturating_sub(1)),
            core::cmp::Ordering::Equal => self,
        }
    }

    /// Number of unit steps between `self` and `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> u16 {
        u16::from(self.0.abs_diff(other.0))
    }
}

impl From<u8> for BrightnessLevel {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<BrightnessLevel> for u16 {
    fn from(level: BrightnessLevel) -> Self {
        u16::from(level.0)
    }
}
