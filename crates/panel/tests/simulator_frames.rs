//! Frame-loop scenarios on the simulator backends.
#![cfg(feature = "simulator")]
// Test files legitimately use expect() for readable assertions.
#![allow(clippy::expect_used)]

use embedded_graphics::mock_display::MockDisplay;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::Point;
use embedded_hal_mock::eh1::delay::NoopDelay;
use panel::{FramebufferSink, Panel, RampOutcome, SimulatedPointer, TickOutcome};
use platform::mocks::MockStandby;
use platform::ScreenOrientation;

type SimPanel<'a> =
    Panel<&'a SimulatedPointer, MockStandby, FramebufferSink<MockDisplay<Rgb565>>, NoopDelay>;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn sim_panel(pointer: &SimulatedPointer) -> SimPanel<'_> {
    Panel::new(
        pointer,
        MockStandby::new(),
        FramebufferSink::new(MockDisplay::new()),
        NoopDelay::new(),
    )
}

#[test]
fn tap_is_delivered_once_after_consume() {
    init_logging();
    let pointer = SimulatedPointer::new();
    let mut panel = sim_panel(&pointer);

    pointer.press(100, 200);
    assert_eq!(
        panel.tick(),
        TickOutcome::Tracked {
            woke: true,
            consumed: false
        }
    );
    assert!(!panel.is_touched(), "not visible before the first consume");

    panel.request_consume();
    panel.tick();
    assert!(panel.is_touched());
    assert_eq!(panel.position(), (100, 200));

    // Held: nothing new to report and no further wake.
    panel.tick();
    panel.tick();
    assert_eq!(panel.standby_mut().wake_count(), 1);

    pointer.release();
    panel.request_consume();
    panel.tick();
    assert!(!panel.is_touched());
    assert_eq!(panel.position(), (-1, -1));
}

#[test]
fn pointer_outside_landscape_bounds_is_ignored() {
    let pointer = SimulatedPointer::new();
    let mut panel = sim_panel(&pointer);
    panel.set_orientation(ScreenOrientation::Landscape);

    // Wider than the portrait screen, inside the landscape one.
    pointer.press(400, 300);
    panel.request_consume();
    panel.tick();
    assert_eq!(panel.position(), (400, 300));

    pointer.press(400, 400);
    panel.request_consume();
    panel.tick();
    assert!(!panel.is_touched());
}

#[test]
fn sleeping_device_ignores_the_pointer() {
    let pointer = SimulatedPointer::new();
    let mut panel = sim_panel(&pointer);
    panel.standby_mut().set_asleep(true);

    pointer.press(50, 50);
    panel.request_consume();
    assert_eq!(panel.tick(), TickOutcome::Suspended);
    assert!(!panel.is_touched());
    assert_eq!(panel.standby_mut().wake_count(), 0);
}

#[test]
fn zero_brightness_blanks_the_framebuffer() {
    init_logging();
    let pointer = SimulatedPointer::new();
    let mut panel = sim_panel(&pointer);

    assert_eq!(panel.set_brightness(0, true), Ok(RampOutcome::Switched));
    assert_eq!(panel.brightness().get(), 85, "temporary keeps the baseline");
    assert_eq!(
        panel.sink_mut().target().get_pixel(Point::new(10, 10)),
        Some(Rgb565::BLACK)
    );
}

#[test]
fn window_thread_drives_the_pointer() {
    static POINTER: SimulatedPointer = SimulatedPointer::new();
    let mut panel = sim_panel(&POINTER);

    std::thread::spawn(|| POINTER.press(12, 34))
        .join()
        .expect("window thread panicked");

    panel.request_consume();
    panel.tick();
    assert_eq!(panel.position(), (12, 34));
}
