//! Multi-pin output ports written through the GPIO set/reset register.
//!
//! BSRR writes only touch the bits that are set in the written word, so a
//! whole group of pins changes in one store and no read-modify-write race
//! exists with other users of the same port.

use segclock::OutputPort;
use stm32f0xx_hal::{
    gpio::{gpiob, gpioc, Output, PushPull},
    pac,
};

/// Bit offset of the reset half of BSRR.
const BSRR_RESET_SHIFT: u32 = 16;

/// BSRR word that sets the pins in `mask`.
#[inline]
pub const fn bsrr_set(mask: u8) -> u32 {
    mask as u32
}

/// BSRR word that resets the pins in `mask`.
#[inline]
pub const fn bsrr_reset(mask: u8) -> u32 {
    (mask as u32) << BSRR_RESET_SHIFT
}

type Out = Output<PushPull>;

/// Segment lines a..g on PB0..PB6.
///
/// Owns the configured pins so nothing else can reconfigure them; writes go
/// straight to GPIOB's BSRR.
pub struct SegmentPort {
    _pins: (
        gpiob::PB0<Out>,
        gpiob::PB1<Out>,
        gpiob::PB2<Out>,
        gpiob::PB3<Out>,
        gpiob::PB4<Out>,
        gpiob::PB5<Out>,
        gpiob::PB6<Out>,
    ),
}

impl SegmentPort {
    pub fn new(
        pins: (
            gpiob::PB0<Out>,
            gpiob::PB1<Out>,
            gpiob::PB2<Out>,
            gpiob::PB3<Out>,
            gpiob::PB4<Out>,
            gpiob::PB5<Out>,
            gpiob::PB6<Out>,
        ),
    ) -> Self {
        Self { _pins: pins }
    }

    #[inline]
    fn write(&mut self, word: u32) {
        // SAFETY: BSRR is write-only and atomic; PB0..PB6 are owned by `self`
        // and the mask is limited to them.
        unsafe { (*pac::GPIOB::ptr()).bsrr.write(|w| w.bits(word)) }
    }
}

impl OutputPort for SegmentPort {
    fn set_bits(&mut self, mask: u8) {
        self.write(bsrr_set(mask & segclock::SEGMENT_MASK));
    }

    fn clear_bits(&mut self, mask: u8) {
        self.write(bsrr_reset(mask & segclock::SEGMENT_MASK));
    }
}

/// Digit-enable lines on PC0..PC3, minute units on PC0.
pub struct DigitPort {
    _pins: (
        gpioc::PC0<Out>,
        gpioc::PC1<Out>,
        gpioc::PC2<Out>,
        gpioc::PC3<Out>,
    ),
}

impl DigitPort {
    pub fn new(
        pins: (
            gpioc::PC0<Out>,
            gpioc::PC1<Out>,
            gpioc::PC2<Out>,
            gpioc::PC3<Out>,
        ),
    ) -> Self {
        Self { _pins: pins }
    }

    #[inline]
    fn write(&mut self, word: u32) {
        // SAFETY: as for SegmentPort; PC13 (the button) is an input and is
        // never part of the mask.
        unsafe { (*pac::GPIOC::ptr()).bsrr.write(|w| w.bits(word)) }
    }
}

impl OutputPort for DigitPort {
    fn set_bits(&mut self, mask: u8) {
        self.write(bsrr_set(mask & segclock::ALL_DIGITS_MASK));
    }

    fn clear_bits(&mut self, mask: u8) {
        self.write(bsrr_reset(mask & segclock::ALL_DIGITS_MASK));
    }
}
