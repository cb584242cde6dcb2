//! Seven-segment glyph encoding.
//!
//! Bit 0 is segment `a`, bit 6 is segment `g`; a set bit lights the segment.
//!
//! ```text
//!     aaa
//!    f   b
//!     ggg
//!    e   c
//!     ddd
//! ```

use crate::types::{Digit, DigitPosition};

/// Mask covering the seven segment lines.
pub const SEGMENT_MASK: u8 = 0x7F;

/// Mask covering the four digit-enable lines.
pub const ALL_DIGITS_MASK: u8 = 0x0F;

const GLYPHS: [u8; 10] = [
    0x3F, // 0: a b c d e f
    0x06, // 1: b c
    0x5B, // 2: a b d e g
    0x4F, // 3: a b c d g
    0x66, // 4: b c f g
    0x6D, // 5: a c d f g
    0x7D, // 6: a c d e f g
    0x07, // 7: a b c
    0x7F, // 8: all
    0x6F, // 9: a b c d f g
];

/// Segment illumination pattern for one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// All segments off.
    pub const BLANK: SegmentPattern = SegmentPattern(0);

    /// Raw bits, `a` in bit 0.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if segment `index` (0 = `a` .. 6 = `g`) is lit.
    #[inline]
    pub const fn is_lit(self, index: u8) -> bool {
        index < 7 && self.0 & (1 << index) != 0
    }
}

/// Digit-enable mask with exactly one line selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitMask(u8);

impl DigitMask {
    /// Enable mask for the digit at `position`.
    #[inline]
    pub const fn for_position(position: DigitPosition) -> Self {
        DigitMask(1 << position.index())
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Maps a decimal digit to its standard seven-segment glyph.
#[inline]
pub const fn encode(digit: Digit) -> SegmentPattern {
    SegmentPattern(GLYPHS[digit.get() as usize])
}
