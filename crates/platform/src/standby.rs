//! Standby coordination abstraction

/// System-wide low-power state, owned outside the touch core.
///
/// The touch state machine only reads the sleep flag and raises the wake
/// signal; deciding when to fall asleep is the implementation's business.
pub trait StandbyCoordinator {
    /// Returns `true` while the system is in standby.
    fn is_asleep(&self) -> bool;

    /// Signal touch activity (wake, or restart the idle countdown).
    fn wake(&mut self);
}

impl<T: StandbyCoordinator + ?Sized> StandbyCoordinator for &mut T {
    fn is_asleep(&self) -> bool {
        (**self).is_asleep()
    }

    fn wake(&mut self) {
        (**self).wake();
    }
}
