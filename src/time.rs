//! Tick abstraction for the superloop time base.

/// Trait for abstracting the loop's time base.
///
/// One call blocks for one tick (nominally ~1ms). There is no notion of
/// absolute time: everything in the clock is expressed as a count of
/// `wait_tick` calls. Implement this with a calibrated busy-wait on hardware
/// and with a plain counter in tests.
pub trait TickSource {
    /// Blocks for one tick.
    fn wait_tick(&mut self);
}

impl<T: TickSource + ?Sized> TickSource for &mut T {
    #[inline]
    fn wait_tick(&mut self) {
        (**self).wait_tick();
    }
}
