//! Time accumulation from loop ticks.
//!
//! The clock has no real-time reference: [`TimeKeeper`] counts loop passes
//! and advances the displayed time by one minute whenever the count reaches
//! the calibrated ticks-per-minute threshold.

use crate::types::ClockTime;

/// Tick counter that advances a [`ClockTime`] once per logical minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeKeeper {
    ticks: u32,
    ticks_per_minute: u32,
}

impl TimeKeeper {
    /// Creates a keeper with an empty tick count.
    ///
    /// A threshold of zero is treated as one (advance on every tick).
    pub const fn new(ticks_per_minute: u32) -> Self {
        Self {
            ticks: 0,
            ticks_per_minute: if ticks_per_minute == 0 { 1 } else { ticks_per_minute },
        }
    }

    /// Counts one tick and, when the threshold is reached, resets the count
    /// and advances `time` by one minute.
    ///
    /// Returns true if the time changed.
    pub fn advance_if_due(&mut self, time: &mut ClockTime) -> bool {
        self.ticks += 1;
        if self.ticks < self.ticks_per_minute {
            return false;
        }

        self.ticks = 0;
        advance_minute(time);
        true
    }

    /// Ticks counted since the last minute boundary.
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    #[inline]
    pub fn ticks_per_minute(&self) -> u32 {
        self.ticks_per_minute
    }
}

/// Adds one minute to `time`, propagating carries digit by digit.
///
/// The 24:00 wrap is detected after the hour-units increment: hour tens
/// never reaches 3 because 2 with hour units 4 is reset to 00 first.
pub fn advance_minute(time: &mut ClockTime) {
    time.minute_units += 1;
    if time.minute_units < 10 {
        return;
    }
    time.minute_units = 0;

    time.minute_tens += 1;
    if time.minute_tens < 6 {
        return;
    }
    time.minute_tens = 0;

    time.hour_units += 1;
    if time.hour_units == 10 {
        time.hour_units = 0;
        time.hour_tens += 1;
    }

    if time.hour_tens == 2 && time.hour_units == 4 {
        time.hour_tens = 0;
        time.hour_units = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u8, minute: u8) -> ClockTime {
        ClockTime::from_hm(hour, minute).unwrap()
    }

    #[test]
    fn minute_units_carry_into_tens() {
        let mut time = hm(0, 9);
        advance_minute(&mut time);
        assert_eq!(time, hm(0, 10));
    }

    #[test]
    fn minute_tens_carry_into_hour() {
        let mut time = hm(9, 59);
        advance_minute(&mut time);
        assert_eq!(time, hm(10, 0));
    }

    #[test]
    fn end_of_day_wraps_to_midnight() {
        let mut time = hm(23, 59);
        advance_minute(&mut time);
        assert_eq!(time, ClockTime::MIDNIGHT);
    }

    #[test]
    fn nineteen_to_twenty_does_not_wrap() {
        let mut time = hm(19, 59);
        advance_minute(&mut time);
        assert_eq!(time, hm(20, 0));
    }

    #[test]
    fn keeper_advances_only_when_threshold_reached() {
        let mut keeper = TimeKeeper::new(3);
        let mut time = ClockTime::MIDNIGHT;

        assert!(!keeper.advance_if_due(&mut time));
        assert!(!keeper.advance_if_due(&mut time));
        assert_eq!(keeper.ticks(), 2);
        assert!(keeper.advance_if_due(&mut time));
        assert_eq!(keeper.ticks(), 0);
        assert_eq!(time, hm(0, 1));
    }

    #[test]
    fn zero_threshold_advances_every_tick() {
        let mut keeper = TimeKeeper::new(0);
        let mut time = ClockTime::MIDNIGHT;
        assert!(keeper.advance_if_due(&mut time));
        assert!(keeper.advance_if_due(&mut time));
        assert_eq!(time, hm(0, 2));
    }

    #[test]
    fn full_day_returns_to_start() {
        let mut time = hm(7, 42);
        for _ in 0..24 * 60 {
            advance_minute(&mut time);
        }
        assert_eq!(time, hm(7, 42));
    }
}
