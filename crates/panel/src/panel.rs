//! Touch + backlight façade.
//!
//! [`Panel`] owns every collaborator the frame loop needs and exposes the
//! small surface applications use: tick once per frame, read the
//! acknowledged touch, consume it, and set the brightness.

use core::sync::atomic::{AtomicBool, Ordering};

use backlight::{BrightnessRampController, RampConfig, RampError, RampOutcome};
use embassy_sync::blocking_mutex::raw::{NoopRawMutex, RawMutex};
use embedded_hal::delay::DelayNs;
use platform::config::DEFAULT_ORIENTATION;
use platform::{
    BrightnessLevel, DisplaySink, SampleSource, ScreenOrientation, StandbyCoordinator, TouchSample,
};
use touch::{TickOutcome, TouchStateMachine};

/// Startup settings for a [`Panel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Orientation at boot.
    pub orientation: ScreenOrientation,
    /// Initial backlight levels and step timing.
    pub ramp: RampConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            orientation: DEFAULT_ORIENTATION,
            ramp: RampConfig::default(),
        }
    }
}

/// Screen-side state of the device: touch tracking, backlight and orientation.
///
/// `M` selects the raw mutex guarding the backlight sink; the default
/// [`NoopRawMutex`] suits a single frame loop.
pub struct Panel<Src, Standby, Sink, D, M = NoopRawMutex>
where
    M: RawMutex,
{
    source: Src,
    standby: Standby,
    touch: TouchStateMachine,
    backlight: BrightnessRampController<M, Sink, D>,
    orientation: ScreenOrientation,
    running: AtomicBool,
}

impl<Src, Standby, Sink, D, M> Panel<Src, Standby, Sink, D, M>
where
    Src: SampleSource,
    Standby: StandbyCoordinator,
    Sink: DisplaySink,
    D: DelayNs,
    M: RawMutex,
{
    /// Assemble a panel with the default configuration.
    pub fn new(source: Src, standby: Standby, sink: Sink, delay: D) -> Self {
        Self::with_config(source, standby, sink, delay, PanelConfig::default())
    }

    /// Assemble a panel with explicit startup settings.
    pub fn with_config(
        source: Src,
        standby: Standby,
        sink: Sink,
        delay: D,
        config: PanelConfig,
    ) -> Self {
        Self {
            source,
            standby,
            touch: TouchStateMachine::new(),
            backlight: BrightnessRampController::new(sink, delay, config.ramp),
            orientation: config.orientation,
            running: AtomicBool::new(true),
        }
    }

    /// Read the touch source once and advance the touch state machine.
    ///
    /// Nothing is read while the device is in standby. A failed read counts
    /// as "no touch" for this frame.
    pub fn tick(&mut self) -> TickOutcome {
        if self.standby.is_asleep() {
            return TickOutcome::Suspended;
        }

        let raw = match self.source.read_raw(self.orientation) {
            Ok(sample) => sample,
            Err(_) => {
                warn!("touch read failed, treating as released");
                TouchSample::NONE
            }
        };

        self.touch
            .tick(raw, self.orientation.geometry(), &mut self.standby)
    }

    /// Mark the acknowledged touch as handled.
    pub fn request_consume(&mut self) {
        self.touch.request_consume();
    }

    /// Whether the acknowledged touch is a real contact.
    pub fn is_touched(&self) -> bool {
        self.touch.is_touched()
    }

    /// Acknowledged touch position, `(-1, -1)` when released.
    pub fn position(&self) -> (i16, i16) {
        self.touch.position()
    }

    /// Ramp the backlight to `value`; see
    /// [`BrightnessRampController::set_brightness`].
    ///
    /// # Errors
    ///
    /// Propagates sink failures from the ramp.
    pub fn set_brightness(
        &self,
        value: u16,
        temporary: bool,
    ) -> Result<RampOutcome, RampError<Sink::Error>> {
        self.backlight.set_brightness(value, temporary)
    }

    /// Persisted brightness baseline.
    pub fn brightness(&self) -> BrightnessLevel {
        self.backlight.brightness()
    }

    /// Switch orientation; subsequent ticks use the new geometry and
    /// calibration.
    pub fn set_orientation(&mut self, orientation: ScreenOrientation) {
        if orientation != self.orientation {
            info!(
                "screen {}x{}",
                orientation.geometry().width,
                orientation.geometry().height
            );
        }
        self.orientation = orientation;
    }

    /// Current orientation.
    pub fn orientation(&self) -> ScreenOrientation {
        self.orientation
    }

    /// Screen width for the current orientation.
    pub fn width(&self) -> u16 {
        self.orientation.geometry().width
    }

    /// Screen height for the current orientation.
    pub fn height(&self) -> u16 {
        self.orientation.geometry().height
    }

    /// False once [`stop`](Self::stop) has been called.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Ask the frame loop to exit. Callable from any context holding `&self`.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Touch state, for diagnostics.
    pub fn touch(&self) -> &TouchStateMachine {
        &self.touch
    }

    /// Backlight controller.
    pub fn backlight(&self) -> &BrightnessRampController<M, Sink, D> {
        &self.backlight
    }

    /// Standby coordinator.
    pub fn standby_mut(&mut self) -> &mut Standby {
        &mut self.standby
    }

    /// Touch sample source.
    pub fn source_mut(&mut self) -> &mut Src {
        &mut self.source
    }

    /// Display sink owned by the backlight controller.
    pub fn sink_mut(&mut self) -> &mut Sink {
        self.backlight.sink_mut()
    }
}
