//! Fixed-setpoint alarm.

use crate::buzzer::Buzzer;
use crate::types::{AlarmSetpoint, ClockTime};

/// Arms the buzzer when the clock shows the setpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm {
    setpoint: AlarmSetpoint,
    duration_ticks: u32,
}

impl Alarm {
    /// Creates an alarm ringing for `duration_ticks` at `setpoint`.
    pub const fn new(setpoint: AlarmSetpoint, duration_ticks: u32) -> Self {
        Self {
            setpoint,
            duration_ticks,
        }
    }

    /// Checks `time` against the setpoint and arms `buzzer` on a match.
    ///
    /// A buzzer that is already ringing is left alone, so the countdown is
    /// not restarted while the setpoint minute is still showing.
    /// Returns true if the buzzer was armed by this call.
    pub fn check(&self, time: &ClockTime, buzzer: &mut Buzzer) -> bool {
        self.setpoint.matches(time) && buzzer.arm(self.duration_ticks)
    }

    #[inline]
    pub fn setpoint(&self) -> AlarmSetpoint {
        self.setpoint
    }

    #[inline]
    pub fn duration_ticks(&self) -> u32 {
        self.duration_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alarm() -> Alarm {
        Alarm::new(AlarmSetpoint::new(5, 30).unwrap(), 50)
    }

    #[test]
    fn arms_on_exact_match() {
        let mut buzzer = Buzzer::new(0);
        assert!(alarm().check(&ClockTime::from_hm(5, 30).unwrap(), &mut buzzer));
        assert_eq!(buzzer.remaining_ticks(), 50);
    }

    #[test]
    fn ignores_other_times() {
        let mut buzzer = Buzzer::new(0);
        for (hour, minute) in [(5, 29), (5, 31), (17, 30), (0, 0)] {
            let time = ClockTime::from_hm(hour, minute).unwrap();
            assert!(!alarm().check(&time, &mut buzzer));
        }
        assert!(!buzzer.is_active());
    }

    #[test]
    fn does_not_rearm_while_ringing() {
        let mut buzzer = Buzzer::new(0);
        let time = ClockTime::from_hm(5, 30).unwrap();
        let alarm = alarm();

        assert!(alarm.check(&time, &mut buzzer));
        assert!(!alarm.check(&time, &mut buzzer));
        assert!(!alarm.check(&time, &mut buzzer));
        assert_eq!(buzzer.remaining_ticks(), 50);
    }
}
