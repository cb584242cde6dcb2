//! Tick-driven square-wave buzzer.
//!
//! The buzzer has split ownership: [`Buzzer::arm`] is the only way to start
//! it and [`Buzzer::update`] is the only way it stops. The alarm evaluator
//! calls the former, the superloop calls the latter once per tick.

use crate::pins::OutputLine;

/// Activity of the buzzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerState {
    /// Silent, output held OFF.
    #[default]
    Idle,
    /// Sounding.
    Active {
        /// Updates left before the buzzer silences itself. Never zero.
        remaining_ticks: u32,
        /// Ticks since the last output inversion.
        phase_ticks: u32,
    },
}

/// Result of a buzzer update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerUpdate {
    /// Buzzer idle, output forced OFF.
    Silent,
    /// Buzzer sounding; `toggled` is true if the output was inverted this tick.
    Sounding { toggled: bool },
    /// Countdown reached zero this tick; output forced OFF.
    Finished,
}

/// Square-wave tone generator with a self-terminating countdown.
///
/// The output is inverted every `tone_period_ticks` updates. A period of zero
/// (what integer division yields when the tick rate is below twice the tone
/// frequency) inverts on every update, the same as a period of one, giving a
/// tone at half the tick rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buzzer {
    state: BuzzerState,
    tone_period_ticks: u32,
}

impl Buzzer {
    /// Creates an idle buzzer.
    pub const fn new(tone_period_ticks: u32) -> Self {
        Self {
            state: BuzzerState::Idle,
            tone_period_ticks,
        }
    }

    /// Toggle period for a tone of `frequency_hz` at `tick_rate_hz` loop
    /// passes per second: `tick_rate / (2 * frequency)`, rounded down.
    pub const fn tone_period_for(tick_rate_hz: u32, frequency_hz: u32) -> u32 {
        match frequency_hz.checked_mul(2) {
            Some(0) | None => 0,
            Some(half_periods) => tick_rate_hz / half_periods,
        }
    }

    /// Starts sounding for `duration_ticks` updates.
    ///
    /// Does nothing if already active or if `duration_ticks` is zero.
    /// Returns true if the buzzer was started.
    pub fn arm(&mut self, duration_ticks: u32) -> bool {
        if self.is_active() || duration_ticks == 0 {
            return false;
        }
        self.state = BuzzerState::Active {
            remaining_ticks: duration_ticks,
            phase_ticks: 0,
        };
        true
    }

    /// Advances the tone and countdown by one tick and drives `output`.
    pub fn update<P: OutputLine>(&mut self, output: &mut P) -> BuzzerUpdate {
        let BuzzerState::Active {
            remaining_ticks,
            phase_ticks,
        } = self.state
        else {
            output.set_off();
            return BuzzerUpdate::Silent;
        };

        let mut phase_ticks = phase_ticks + 1;
        let toggled = phase_ticks >= self.tone_period_ticks;
        if toggled {
            phase_ticks = 0;
            let was_on = output.is_set_on();
            output.set_level(!was_on);
        }

        let remaining_ticks = remaining_ticks - 1;
        if remaining_ticks == 0 {
            self.state = BuzzerState::Idle;
            output.set_off();
            return BuzzerUpdate::Finished;
        }

        self.state = BuzzerState::Active {
            remaining_ticks,
            phase_ticks,
        };
        BuzzerUpdate::Sounding { toggled }
    }

    #[inline]
    pub fn state(&self) -> BuzzerState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.state, BuzzerState::Active { .. })
    }

    /// Updates left before the buzzer stops, zero when idle.
    #[inline]
    pub fn remaining_ticks(&self) -> u32 {
        match self.state {
            BuzzerState::Active { remaining_ticks, .. } => remaining_ticks,
            BuzzerState::Idle => 0,
        }
    }

    #[inline]
    pub fn tone_period_ticks(&self) -> u32 {
        self.tone_period_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Line {
        on: bool,
        toggles: u32,
    }

    impl OutputLine for Line {
        fn set_on(&mut self) {
            if !self.on {
                self.toggles += 1;
            }
            self.on = true;
        }

        fn set_off(&mut self) {
            if self.on {
                self.toggles += 1;
            }
            self.on = false;
        }

        fn is_set_on(&self) -> bool {
            self.on
        }
    }

    #[test]
    fn idle_update_forces_output_off() {
        let mut buzzer = Buzzer::new(2);
        let mut line = Line { on: true, toggles: 0 };
        assert_eq!(buzzer.update(&mut line), BuzzerUpdate::Silent);
        assert!(!line.on);
    }

    #[test]
    fn tone_period_uses_integer_division() {
        assert_eq!(Buzzer::tone_period_for(1000, 500), 1);
        assert_eq!(Buzzer::tone_period_for(1000, 100), 5);
        assert_eq!(Buzzer::tone_period_for(383, 500), 0);
        assert_eq!(Buzzer::tone_period_for(1000, 0), 0);
    }

    #[test]
    fn output_inverts_every_period() {
        let mut buzzer = Buzzer::new(3);
        let mut line = Line::default();
        buzzer.arm(100);

        let mut levels = [false; 9];
        for level in levels.iter_mut() {
            buzzer.update(&mut line);
            *level = line.on;
        }
        assert_eq!(
            levels,
            [false, false, true, true, true, false, false, false, true]
        );
    }

    #[test]
    fn zero_period_toggles_every_tick() {
        let mut buzzer = Buzzer::new(0);
        let mut line = Line::default();
        buzzer.arm(100);

        for _ in 0..10 {
            assert_eq!(buzzer.update(&mut line), BuzzerUpdate::Sounding { toggled: true });
        }
        assert_eq!(line.toggles, 10);
    }

    #[test]
    fn countdown_silences_after_exactly_duration_updates() {
        let mut buzzer = Buzzer::new(0);
        let mut line = Line::default();
        buzzer.arm(5);

        for _ in 0..4 {
            assert!(matches!(buzzer.update(&mut line), BuzzerUpdate::Sounding { .. }));
            assert!(buzzer.is_active());
        }
        assert_eq!(buzzer.update(&mut line), BuzzerUpdate::Finished);
        assert!(!buzzer.is_active());
        assert!(!line.on);
    }

    #[test]
    fn arm_does_not_restart_active_buzzer() {
        let mut buzzer = Buzzer::new(1);
        let mut line = Line::default();
        assert!(buzzer.arm(10));
        buzzer.update(&mut line);
        buzzer.update(&mut line);

        assert!(!buzzer.arm(10));
        assert_eq!(buzzer.remaining_ticks(), 8);
    }

    #[test]
    fn zero_duration_is_ignored() {
        let mut buzzer = Buzzer::new(1);
        assert!(!buzzer.arm(0));
        assert_eq!(buzzer.state(), BuzzerState::Idle);
    }
}
