//! Core value types shared by the clock components.

/// A decimal digit, guaranteed to be in `0..=9`.
///
/// This is the only input the segment encoder accepts, so an out-of-range
/// glyph lookup cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// The digit zero.
    pub const ZERO: Digit = Digit(0);

    /// Creates a digit, rejecting values above 9.
    #[inline]
    pub const fn new(value: u8) -> Result<Self, DigitError> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    /// Units digit of `value` (`value % 10`). Always valid.
    #[inline]
    pub const fn units_of(value: u8) -> Self {
        Digit(value % 10)
    }

    /// Tens digit of a value below 100. Wraps for larger inputs.
    #[inline]
    pub const fn tens_of(value: u8) -> Self {
        Digit((value / 10) % 10)
    }

    /// Returns the digit as a plain integer.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Time of day held as four independent decimal digits (HH:MM, 24-hour).
///
/// Invariants: minute tens stay in `0..=5`, hour tens in `0..=2`, and the
/// composite hour never reaches 24. Construct with [`ClockTime::from_hm`] or
/// start from [`ClockTime::MIDNIGHT`]; only the time accumulator advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    pub(crate) minute_units: u8,
    pub(crate) minute_tens: u8,
    pub(crate) hour_units: u8,
    pub(crate) hour_tens: u8,
}

impl ClockTime {
    /// 00:00.
    pub const MIDNIGHT: ClockTime = ClockTime {
        minute_units: 0,
        minute_tens: 0,
        hour_units: 0,
        hour_tens: 0,
    };

    /// Creates a time from a 24-hour `hour` and a `minute`.
    pub const fn from_hm(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(ClockTime {
            minute_units: minute % 10,
            minute_tens: minute / 10,
            hour_units: hour % 10,
            hour_tens: hour / 10,
        })
    }

    /// Composite hour, `hour_tens * 10 + hour_units`, in `0..=23`.
    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour_tens * 10 + self.hour_units
    }

    /// Composite minute, `minute_tens * 10 + minute_units`, in `0..=59`.
    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute_tens * 10 + self.minute_units
    }

    #[inline]
    pub const fn minute_units(&self) -> Digit {
        Digit(self.minute_units)
    }

    #[inline]
    pub const fn minute_tens(&self) -> Digit {
        Digit(self.minute_tens)
    }

    #[inline]
    pub const fn hour_units(&self) -> Digit {
        Digit(self.hour_units)
    }

    #[inline]
    pub const fn hour_tens(&self) -> Digit {
        Digit(self.hour_tens)
    }
}

impl core::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}{}:{}{}",
            self.hour_tens, self.hour_units, self.minute_tens, self.minute_units
        )
    }
}

/// Which of the four display digits is currently lit.
///
/// Positions are numbered right to left, matching the digit-enable lines:
/// position 0 drives the minute-units digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitPosition {
    #[default]
    MinuteUnits,
    MinuteTens,
    HourUnits,
    HourTens,
}

impl DigitPosition {
    /// All positions in multiplex order.
    pub const ALL: [DigitPosition; 4] = [
        DigitPosition::MinuteUnits,
        DigitPosition::MinuteTens,
        DigitPosition::HourUnits,
        DigitPosition::HourTens,
    ];

    /// Index of this position, `0..=3`.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            DigitPosition::MinuteUnits => 0,
            DigitPosition::MinuteTens => 1,
            DigitPosition::HourUnits => 2,
            DigitPosition::HourTens => 3,
        }
    }

    /// Next position in the cycle, wrapping from hour tens back to minute units.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            DigitPosition::MinuteUnits => DigitPosition::MinuteTens,
            DigitPosition::MinuteTens => DigitPosition::HourUnits,
            DigitPosition::HourUnits => DigitPosition::HourTens,
            DigitPosition::HourTens => DigitPosition::MinuteUnits,
        }
    }
}

/// Hour format used on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// 0..=23, the power-on default.
    #[default]
    TwentyFourHour,

    /// 1..=12.
    TwelveHour,
}

impl DisplayMode {
    /// The other mode.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            DisplayMode::TwentyFourHour => DisplayMode::TwelveHour,
            DisplayMode::TwelveHour => DisplayMode::TwentyFourHour,
        }
    }
}

/// Time of day at which the alarm rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmSetpoint {
    hour: u8,
    minute: u8,
}

impl AlarmSetpoint {
    /// Creates a setpoint from a 24-hour `hour` and a `minute`.
    pub const fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(AlarmSetpoint { hour, minute })
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns true when `time` shows exactly this hour and minute.
    #[inline]
    pub const fn matches(&self, time: &ClockTime) -> bool {
        time.hour() == self.hour && time.minute() == self.minute
    }
}

/// Digit construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitError {
    /// Value is not a decimal digit.
    OutOfRange(u8),
}

impl core::fmt::Display for DigitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DigitError::OutOfRange(value) => {
                write!(f, "{} is not a decimal digit (expected 0-9)", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitError {}

/// Time-of-day construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Hour above 23.
    HourOutOfRange(u8),

    /// Minute above 59.
    MinuteOutOfRange(u8),
}

impl core::fmt::Display for TimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeError::HourOutOfRange(hour) => {
                write!(f, "hour {} out of range (expected 0-23)", hour)
            }
            TimeError::MinuteOutOfRange(minute) => {
                write!(f, "minute {} out of range (expected 0-59)", minute)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_rejects_values_above_nine() {
        assert_eq!(Digit::new(9).map(Digit::get), Ok(9));
        assert_eq!(Digit::new(10), Err(DigitError::OutOfRange(10)));
        assert!(Digit::try_from(255u8).is_err());
    }

    #[test]
    fn from_hm_splits_into_digit_fields() {
        let time = ClockTime::from_hm(23, 59).unwrap();
        assert_eq!(time.hour_tens().get(), 2);
        assert_eq!(time.hour_units().get(), 3);
        assert_eq!(time.minute_tens().get(), 5);
        assert_eq!(time.minute_units().get(), 9);
        assert_eq!(time.hour(), 23);
        assert_eq!(time.minute(), 59);
    }

    #[test]
    fn from_hm_rejects_out_of_range_fields() {
        assert_eq!(ClockTime::from_hm(24, 0), Err(TimeError::HourOutOfRange(24)));
        assert_eq!(ClockTime::from_hm(0, 60), Err(TimeError::MinuteOutOfRange(60)));
    }

    #[test]
    fn position_cycles_through_all_four_digits() {
        let mut position = DigitPosition::default();
        for expected in DigitPosition::ALL.iter().cycle().take(9) {
            assert_eq!(position, *expected);
            position = position.next();
        }
    }

    #[test]
    fn setpoint_matches_only_exact_hour_and_minute() {
        let alarm = AlarmSetpoint::new(5, 30).unwrap();
        assert!(alarm.matches(&ClockTime::from_hm(5, 30).unwrap()));
        assert!(!alarm.matches(&ClockTime::from_hm(5, 31).unwrap()));
        assert!(!alarm.matches(&ClockTime::from_hm(17, 30).unwrap()));
    }
}
