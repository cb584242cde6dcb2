//! Four-digit display multiplexing.
//!
//! One digit is lit per tick. Every step first blanks all digit-enable and
//! segment lines, then drives the new pattern and enables exactly one digit,
//! so the previous digit's segments never bleed into the next one.

use crate::format::DisplayDigits;
use crate::pins::OutputPort;
use crate::segments::{self, ALL_DIGITS_MASK, DigitMask, SEGMENT_MASK, SegmentPattern};
use crate::types::DigitPosition;

/// What a multiplex step put on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MultiplexFrame {
    /// Digit that was lit.
    pub position: DigitPosition,
    /// Segment pattern driven.
    pub segments: SegmentPattern,
    /// Digit-enable mask driven.
    pub enable: DigitMask,
}

/// Round-robin digit multiplexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitMultiplexer {
    position: DigitPosition,
}

impl DigitMultiplexer {
    /// Creates a multiplexer that lights minute units first.
    pub const fn new() -> Self {
        Self {
            position: DigitPosition::MinuteUnits,
        }
    }

    /// Lights the next digit of `digits` and advances the position.
    ///
    /// # Arguments
    /// * `digits` - Already format-translated digits to show
    /// * `segment_port` - Seven segment lines, segment `a` on bit 0
    /// * `digit_port` - Four digit-enable lines, minute units on bit 0
    pub fn step<S: OutputPort, D: OutputPort>(
        &mut self,
        digits: &DisplayDigits,
        segment_port: &mut S,
        digit_port: &mut D,
    ) -> MultiplexFrame {
        digit_port.clear_bits(ALL_DIGITS_MASK);
        segment_port.clear_bits(SEGMENT_MASK);

        let position = self.position;
        let pattern = segments::encode(digits.at(position));
        let enable = DigitMask::for_position(position);

        segment_port.set_bits(pattern.bits());
        digit_port.set_bits(enable.bits());

        self.position = position.next();

        MultiplexFrame {
            position,
            segments: pattern,
            enable,
        }
    }

    /// Position that the next step will light.
    #[inline]
    pub fn position(&self) -> DigitPosition {
        self.position
    }
}
