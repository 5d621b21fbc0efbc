//! Hardware backends: calibrated capacitive touch and PWM backlight.
//!
//! # Wiring
//!
//! | Signal     | Peripheral            | Notes                               |
//! |------------|-----------------------|-------------------------------------|
//! | Touch      | FT6236-class over I²C | polled once per frame, no interrupt |
//! | Backlight  | PWM channel           | duty = level / 255                  |
//!
//! The I²C register protocol stays in the [`TouchController`] implementation;
//! this module only turns its reports into screen coordinates.

use embedded_hal::pwm::SetDutyCycle;
use platform::{
    BrightnessLevel, DisplaySink, SampleSource, ScreenOrientation, TouchController, TouchSample,
};
use touch::Calibration;

/// [`SampleSource`] that calibrates raw controller reports for the current
/// orientation.
///
/// Reports with zero or several contact points read as "no touch".
pub struct CalibratedTouchSource<C> {
    controller: C,
    calibration: Calibration,
}

impl<C: TouchController> CalibratedTouchSource<C> {
    /// Wrap `controller` with the FT6236 calibration table.
    pub fn new(controller: C) -> Self {
        Self::with_calibration(controller, Calibration::FT6236)
    }

    /// Wrap `controller` with a board-specific calibration table.
    pub fn with_calibration(controller: C, calibration: Calibration) -> Self {
        Self {
            controller,
            calibration,
        }
    }

    /// Active calibration table.
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Underlying controller.
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// Release the controller.
    pub fn into_inner(self) -> C {
        self.controller
    }
}

impl<C: TouchController> SampleSource for CalibratedTouchSource<C> {
    type Error = C::Error;

    fn read_raw(&mut self, orientation: ScreenOrientation) -> Result<TouchSample, Self::Error> {
        let report = self.controller.read_report()?;
        Ok(self.calibration.apply(orientation, &report))
    }
}

/// [`DisplaySink`] driving the backlight LED through a PWM channel.
pub struct PwmBacklight<P> {
    pwm: P,
}

impl<P: SetDutyCycle> PwmBacklight<P> {
    /// Take ownership of the PWM channel.
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    /// Underlying PWM channel.
    pub fn pwm_mut(&mut self) -> &mut P {
        &mut self.pwm
    }

    /// Release the PWM channel.
    pub fn into_inner(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> DisplaySink for PwmBacklight<P> {
    type Error = P::Error;

    fn has_backlight(&self) -> bool {
        true
    }

    fn write_brightness(&mut self, level: BrightnessLevel) -> Result<(), Self::Error> {
        if level == BrightnessLevel::OFF {
            return self.pwm.set_duty_cycle_fully_off();
        }
        self.pwm.set_duty_cycle_fraction(
            u16::from(level),
            u16::from(BrightnessLevel::MAX),
        )
    }

    // The LED going dark is enough; the framebuffer is left alone.
    fn fill_black(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;
    use platform::mocks::MockTouchController;
    use platform::{RawPoint, TouchReport};

    #[derive(Default)]
    struct RecordingPwm {
        duties: std::vec::Vec<u16>,
    }

    impl ErrorType for RecordingPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for RecordingPwm {
        fn max_duty_cycle(&self) -> u16 {
            1000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duties.push(duty);
            Ok(())
        }
    }

    #[test]
    fn test_pwm_duty_tracks_level() {
        let mut sink = PwmBacklight::new(RecordingPwm::default());
        assert!(sink.has_backlight());
        assert!(sink.write_brightness(BrightnessLevel::MAX).is_ok());
        assert!(sink.write_brightness(BrightnessLevel::from_u8(85)).is_ok());
        assert!(sink.write_brightness(BrightnessLevel::OFF).is_ok());
        assert_eq!(sink.into_inner().duties, [1000, 333, 0]);
    }

    #[test]
    fn test_single_point_is_calibrated() {
        let mut controller = MockTouchController::new();
        assert!(controller.push(TouchReport::single(319, 465)).is_ok());
        let mut source = CalibratedTouchSource::new(controller);

        let sample = source.read_raw(ScreenOrientation::Portrait);
        assert_eq!(sample, Ok(TouchSample::new(320, 480)));
    }

    #[test]
    fn test_multi_touch_reads_as_release() {
        let mut report = TouchReport::single(100, 100);
        assert!(report.push(RawPoint { x: 200, y: 200 }).is_ok());
        let mut controller = MockTouchController::new();
        assert!(controller.push(report).is_ok());
        let mut source = CalibratedTouchSource::new(controller);

        assert_eq!(
            source.read_raw(ScreenOrientation::Portrait),
            Ok(TouchSample::NONE)
        );
    }
}
