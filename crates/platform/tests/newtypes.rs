//! Type system enforcement tests for the backlight and touch newtypes.

// Test files legitimately use unwrap_err() for readable assertions.
#![allow(clippy::unwrap_used)]

// ── BrightnessLevel ──────────────────────────────────────────────────────────

#[test]
fn brightness_level_new_clamps_over_255() {
    use platform::BrightnessLevel;
    let level = BrightnessLevel::new(300);
    assert_eq!(level.get(), 255, "BrightnessLevel::new(300) should clamp to 255");
}

#[test]
fn brightness_level_new_allows_bounds() {
    use platform::BrightnessLevel;
    assert_eq!(BrightnessLevel::new(0), BrightnessLevel::OFF);
    assert_eq!(BrightnessLevel::new(255), BrightnessLevel::MAX);
}

#[test]
fn brightness_level_try_new_rejects_over_255() {
    use platform::{BrightnessLevel, OutOfRangeError};
    assert_eq!(
        BrightnessLevel::try_new(256),
        Err(OutOfRangeError {
            value: 256,
            min: 0,
            max: 255
        })
    );
    assert!(BrightnessLevel::try_new(u16::MAX).is_err());
}

#[test]
fn brightness_level_try_new_accepts_valid_range() {
    use platform::BrightnessLevel;
    assert!(BrightnessLevel::try_new(0).is_ok());
    assert!(BrightnessLevel::try_new(85).is_ok());
    assert!(BrightnessLevel::try_new(255).is_ok());
}

#[test]
fn brightness_level_is_one_byte() {
    use platform::BrightnessLevel;
    assert_eq!(core::mem::size_of::<BrightnessLevel>(), 1);
}

#[test]
fn brightness_level_steps_one_unit_each_way() {
    use platform::BrightnessLevel;
    let low = BrightnessLevel::from_u8(10);
    let high = BrightnessLevel::from_u8(12);
    assert_eq!(low.step_toward(high).get(), 11);
    assert_eq!(high.step_toward(low).get(), 11);
    assert_eq!(low.step_toward(low), low);
    assert_eq!(low.distance(high), 2);
    assert_eq!(high.distance(low), 2);
}

#[test]
fn out_of_range_error_message_names_bounds() {
    use platform::BrightnessLevel;
    let err = BrightnessLevel::try_new(1000).unwrap_err();
    assert_eq!(err.to_string(), "value 1000 outside 0..=255");
}

// ── TouchSample ──────────────────────────────────────────────────────────────

#[test]
fn touch_sample_position_roundtrips_fields() {
    use platform::TouchSample;
    let sample = TouchSample::new(150, 200);
    assert_eq!(sample.position(), (150, 200));
    assert!(sample.touching());
}
