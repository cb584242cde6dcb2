//! Counter-based button debouncer with one-shot press events.

/// Debounce threshold used by the clock: 5 ticks, about 5ms.
pub const DEFAULT_DEBOUNCE_TICKS: u8 = 5;

/// Debounces a mechanical button sampled once per tick.
///
/// A raw change restarts the stability counter. Once the raw level has
/// repeated for `threshold` further samples it becomes the stable level.
/// A promotion to pressed latches a pending press which the consumer must
/// collect with [`take_press`](Self::take_press) in the same tick; a
/// promotion to released latches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonDebouncer {
    last_raw: bool,
    stable: bool,
    counter: u8,
    threshold: u8,
    pending_press: bool,
}

impl ButtonDebouncer {
    /// Creates a debouncer that starts released.
    ///
    /// # Arguments
    /// * `threshold` - Consecutive repeated samples required before a level is trusted
    pub const fn new(threshold: u8) -> Self {
        Self {
            last_raw: false,
            stable: false,
            counter: 0,
            threshold,
            pending_press: false,
        }
    }

    /// Feeds one raw sample (`true` = pressed).
    ///
    /// Returns true if this sample confirmed a new press. The press also stays
    /// latched until [`take_press`](Self::take_press) is called.
    pub fn scan(&mut self, raw_pressed: bool) -> bool {
        if raw_pressed != self.last_raw {
            self.counter = 0;
            self.last_raw = raw_pressed;
            return false;
        }

        if self.counter < self.threshold {
            self.counter += 1;
        }

        if self.counter >= self.threshold && self.stable != raw_pressed {
            self.stable = raw_pressed;
            if raw_pressed {
                self.pending_press = true;
                return true;
            }
        }
        false
    }

    /// Consumes the latched press, if any.
    ///
    /// Returns true at most once per confirmed press.
    #[inline]
    pub fn take_press(&mut self) -> bool {
        core::mem::take(&mut self.pending_press)
    }

    /// Returns true if a confirmed press has not been consumed yet.
    #[inline]
    pub fn has_pending_press(&self) -> bool {
        self.pending_press
    }

    /// Debounced level (`true` = pressed).
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    #[inline]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}

impl Default for ButtonDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(debouncer: &mut ButtonDebouncer, level: bool, samples: usize) -> usize {
        let mut presses = 0;
        for _ in 0..samples {
            debouncer.scan(level);
            if debouncer.take_press() {
                presses += 1;
            }
        }
        presses
    }

    #[test]
    fn press_confirmed_after_threshold_repeats() {
        let mut debouncer = ButtonDebouncer::new(5);

        // First sample only records the new raw level
        assert!(!debouncer.scan(true));
        for _ in 0..4 {
            assert!(!debouncer.scan(true));
        }
        assert!(debouncer.scan(true));
        assert!(debouncer.is_pressed());
    }

    #[test]
    fn bounce_restarts_stability_counter() {
        let mut debouncer = ButtonDebouncer::new(3);

        for level in [true, true, false, true, false, true, true] {
            debouncer.scan(level);
        }
        assert!(!debouncer.has_pending_press());

        debouncer.scan(true);
        assert!(!debouncer.has_pending_press());
        debouncer.scan(true);
        assert!(debouncer.has_pending_press());
    }

    #[test]
    fn press_is_consumed_exactly_once() {
        let mut debouncer = ButtonDebouncer::new(1);
        debouncer.scan(true);
        debouncer.scan(true);

        assert!(debouncer.take_press());
        assert!(!debouncer.take_press());
    }

    #[test]
    fn release_does_not_emit_press() {
        let mut debouncer = ButtonDebouncer::new(2);
        assert_eq!(feed(&mut debouncer, true, 10), 1);
        assert_eq!(feed(&mut debouncer, false, 10), 0);
        assert!(!debouncer.is_pressed());
    }

    #[test]
    fn holding_button_does_not_repeat() {
        let mut debouncer = ButtonDebouncer::default();
        assert_eq!(feed(&mut debouncer, true, 1000), 1);
    }

    #[test]
    fn second_press_after_release_is_reported() {
        let mut debouncer = ButtonDebouncer::default();
        assert_eq!(feed(&mut debouncer, true, 20), 1);
        assert_eq!(feed(&mut debouncer, false, 20), 0);
        assert_eq!(feed(&mut debouncer, true, 20), 1);
    }
}
