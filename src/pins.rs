//! GPIO capabilities consumed by the clock core.
//!
//! The core never touches registers. Boards implement these traits against
//! their memory-mapped GPIO (typically a set/reset register, so that a write
//! changes only the masked bits without a read-modify-write cycle).

/// A group of output pins driven as a bitmask.
///
/// Bit `n` of a mask addresses the `n`th pin of the group. Used for the
/// seven segment lines and for the four digit-enable lines.
pub trait OutputPort {
    /// Drives every pin whose bit is set in `mask` to its active level.
    /// Pins outside the mask are left untouched.
    fn set_bits(&mut self, mask: u8);

    /// Drives every pin whose bit is set in `mask` to its inactive level.
    /// Pins outside the mask are left untouched.
    fn clear_bits(&mut self, mask: u8);
}

/// A single on/off output such as the AM indicator LED or the buzzer.
pub trait OutputLine {
    /// Drives the line to its ON level.
    fn set_on(&mut self);

    /// Drives the line to its OFF level.
    fn set_off(&mut self);

    /// Reads back the level the line is currently driven to.
    ///
    /// The buzzer toggle relies on this to invert the output.
    fn is_set_on(&self) -> bool;

    /// Drives the line to `on`.
    #[inline]
    fn set_level(&mut self, on: bool) {
        if on {
            self.set_on();
        } else {
            self.set_off();
        }
    }
}

/// A single digital input, already normalized to "pressed" semantics.
///
/// Implementations for active-low buttons invert the electrical level so
/// that `true` always means pressed.
pub trait InputLine {
    /// Samples the input.
    fn is_pressed(&mut self) -> bool;
}

impl<T: OutputPort + ?Sized> OutputPort for &mut T {
    #[inline]
    fn set_bits(&mut self, mask: u8) {
        (**self).set_bits(mask);
    }

    #[inline]
    fn clear_bits(&mut self, mask: u8) {
        (**self).clear_bits(mask);
    }
}

impl<T: OutputLine + ?Sized> OutputLine for &mut T {
    #[inline]
    fn set_on(&mut self) {
        (**self).set_on();
    }

    #[inline]
    fn set_off(&mut self) {
        (**self).set_off();
    }

    #[inline]
    fn is_set_on(&self) -> bool {
        (**self).is_set_on()
    }
}

impl<T: InputLine + ?Sized> InputLine for &mut T {
    #[inline]
    fn is_pressed(&mut self) -> bool {
        (**self).is_pressed()
    }
}
