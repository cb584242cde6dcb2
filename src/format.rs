//! Hour formatting and AM/PM indication.
//!
//! Time is always kept in 24-hour form; these helpers derive what is shown.

use crate::types::{ClockTime, Digit, DigitPosition, DisplayMode};

/// Hour to show for a 24-hour `hour` under `mode`.
///
/// In 12-hour mode midnight shows as 12 and afternoon hours drop by 12.
/// Noon stays 12.
#[inline]
pub const fn display_hour(hour: u8, mode: DisplayMode) -> u8 {
    match mode {
        DisplayMode::TwentyFourHour => hour,
        DisplayMode::TwelveHour => {
            if hour == 0 {
                12
            } else if hour > 12 {
                hour - 12
            } else {
                hour
            }
        }
    }
}

/// AM indicator level for a 24-hour `hour`: on before noon.
#[inline]
pub const fn is_morning(hour: u8) -> bool {
    hour < 12
}

/// The four digits to display, indexed by [`DigitPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayDigits([Digit; 4]);

impl DisplayDigits {
    /// Digits for `time` rendered in `mode`.
    ///
    /// Minutes are copied from the time fields; hours go through
    /// [`display_hour`] first.
    pub const fn from_time(time: &ClockTime, mode: DisplayMode) -> Self {
        let hour = display_hour(time.hour(), mode);
        DisplayDigits([
            time.minute_units(),
            time.minute_tens(),
            Digit::units_of(hour),
            Digit::tens_of(hour),
        ])
    }

    /// Digit shown at `position`.
    #[inline]
    pub const fn at(&self, position: DigitPosition) -> Digit {
        self.0[position.index()]
    }

    /// Digits in multiplex order (minute units first).
    #[inline]
    pub const fn as_array(&self) -> &[Digit; 4] {
        &self.0
    }
}
