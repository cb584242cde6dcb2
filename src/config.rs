//! Calibration constants for the clock.
//!
//! The loop has no hardware timer, so every duration is a count of loop
//! passes. The defaults match a board whose loop runs at about 383 passes per
//! second with a 1ms busy-wait tick.

use crate::buzzer::Buzzer;
use crate::types::{AlarmSetpoint, ClockTime, DisplayMode, TimeError};

/// Loop passes per calibrated second.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 383;

/// Debounce threshold in ticks.
pub const DEFAULT_DEBOUNCE_TICKS: u8 = crate::button::DEFAULT_DEBOUNCE_TICKS;

/// Alarm setpoint hour.
pub const DEFAULT_ALARM_HOUR: u8 = 5;

/// Alarm setpoint minute.
pub const DEFAULT_ALARM_MINUTE: u8 = 30;

const DEFAULT_ALARM: AlarmSetpoint =
    match AlarmSetpoint::new(DEFAULT_ALARM_HOUR, DEFAULT_ALARM_MINUTE) {
        Ok(setpoint) => setpoint,
        Err(_) => panic!("default alarm setpoint out of range"),
    };

/// Target buzzer tone.
pub const DEFAULT_BUZZER_FREQUENCY_HZ: u32 = 500;

/// How long the alarm rings.
pub const DEFAULT_ALARM_DURATION_SECONDS: u32 = 10;

/// Validated clock calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    ticks_per_second: u32,
    ticks_per_minute: u32,
    debounce_ticks: u8,
    alarm: AlarmSetpoint,
    buzzer_frequency_hz: u32,
    alarm_duration_ticks: u32,
    tone_period_ticks: u32,
    initial_time: ClockTime,
    initial_mode: DisplayMode,
}

impl ClockConfig {
    /// Creates a builder preloaded with the default calibration.
    pub fn builder() -> ClockConfigBuilder {
        ClockConfigBuilder::new()
    }

    #[inline]
    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    /// Threshold at which the time advances by one minute.
    #[inline]
    pub fn ticks_per_minute(&self) -> u32 {
        self.ticks_per_minute
    }

    #[inline]
    pub fn debounce_ticks(&self) -> u8 {
        self.debounce_ticks
    }

    #[inline]
    pub fn alarm(&self) -> AlarmSetpoint {
        self.alarm
    }

    #[inline]
    pub fn buzzer_frequency_hz(&self) -> u32 {
        self.buzzer_frequency_hz
    }

    /// Ring duration in ticks. Never zero.
    #[inline]
    pub fn alarm_duration_ticks(&self) -> u32 {
        self.alarm_duration_ticks
    }

    /// Buzzer toggle period in ticks. Zero selects toggle-every-tick.
    #[inline]
    pub fn tone_period_ticks(&self) -> u32 {
        self.tone_period_ticks
    }

    #[inline]
    pub fn initial_time(&self) -> ClockTime {
        self.initial_time
    }

    #[inline]
    pub fn initial_mode(&self) -> DisplayMode {
        self.initial_mode
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        let ticks_per_minute = 60 * DEFAULT_TICKS_PER_SECOND;
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            ticks_per_minute,
            debounce_ticks: DEFAULT_DEBOUNCE_TICKS,
            alarm: DEFAULT_ALARM,
            buzzer_frequency_hz: DEFAULT_BUZZER_FREQUENCY_HZ,
            alarm_duration_ticks: DEFAULT_TICKS_PER_SECOND * DEFAULT_ALARM_DURATION_SECONDS,
            tone_period_ticks: Buzzer::tone_period_for(
                DEFAULT_TICKS_PER_SECOND,
                DEFAULT_BUZZER_FREQUENCY_HZ,
            ),
            initial_time: ClockTime::MIDNIGHT,
            initial_mode: DisplayMode::TwentyFourHour,
        }
    }
}

/// Builder for [`ClockConfig`].
#[derive(Debug, Clone)]
pub struct ClockConfigBuilder {
    ticks_per_second: u32,
    ticks_per_minute: Option<u32>,
    debounce_ticks: u8,
    alarm: (u8, u8),
    buzzer_frequency_hz: u32,
    alarm_duration_seconds: u32,
    alarm_duration_ticks: Option<u32>,
    initial_time: (u8, u8),
    initial_mode: DisplayMode,
}

impl ClockConfigBuilder {
    /// Creates a builder with the default calibration.
    pub fn new() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            ticks_per_minute: None,
            debounce_ticks: DEFAULT_DEBOUNCE_TICKS,
            alarm: (DEFAULT_ALARM_HOUR, DEFAULT_ALARM_MINUTE),
            buzzer_frequency_hz: DEFAULT_BUZZER_FREQUENCY_HZ,
            alarm_duration_seconds: DEFAULT_ALARM_DURATION_SECONDS,
            alarm_duration_ticks: None,
            initial_time: (0, 0),
            initial_mode: DisplayMode::TwentyFourHour,
        }
    }

    /// Sets the measured loop passes per second.
    ///
    /// Also rescales the minute threshold, ring duration and tone period
    /// unless those were set explicitly.
    pub fn ticks_per_second(mut self, ticks: u32) -> Self {
        self.ticks_per_second = ticks;
        self
    }

    /// Overrides the minute threshold (default `60 * ticks_per_second`).
    ///
    /// Small values make the clock run fast, which is handy on the bench.
    pub fn ticks_per_minute(mut self, ticks: u32) -> Self {
        self.ticks_per_minute = Some(ticks);
        self
    }

    /// Sets the debounce threshold.
    pub fn debounce_ticks(mut self, ticks: u8) -> Self {
        self.debounce_ticks = ticks;
        self
    }

    /// Sets the alarm setpoint (24-hour).
    pub fn alarm(mut self, hour: u8, minute: u8) -> Self {
        self.alarm = (hour, minute);
        self
    }

    /// Sets the buzzer tone frequency.
    pub fn buzzer_frequency_hz(mut self, hz: u32) -> Self {
        self.buzzer_frequency_hz = hz;
        self
    }

    /// Sets how long the alarm rings, in calibrated seconds.
    pub fn alarm_duration_seconds(mut self, seconds: u32) -> Self {
        self.alarm_duration_seconds = seconds;
        self.alarm_duration_ticks = None;
        self
    }

    /// Sets how long the alarm rings, in ticks.
    pub fn alarm_duration_ticks(mut self, ticks: u32) -> Self {
        self.alarm_duration_ticks = Some(ticks);
        self
    }

    /// Sets the power-on time (24-hour).
    pub fn initial_time(mut self, hour: u8, minute: u8) -> Self {
        self.initial_time = (hour, minute);
        self
    }

    /// Sets the power-on display mode.
    pub fn initial_mode(mut self, mode: DisplayMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroTicksPerSecond` / `ZeroTicksPerMinute` - No time base
    /// * `ZeroDebounce` - Debouncer would trust every sample
    /// * `ZeroBuzzerFrequency` - No tone to generate
    /// * `ZeroAlarmDuration` - Alarm would never sound
    /// * `InvalidAlarm` / `InvalidInitialTime` - Hour or minute out of range
    /// * `Overflow` - A derived tick count does not fit in `u32`
    pub fn build(self) -> Result<ClockConfig, ConfigError> {
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTicksPerSecond);
        }
        if self.debounce_ticks == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.buzzer_frequency_hz == 0 {
            return Err(ConfigError::ZeroBuzzerFrequency);
        }

        let ticks_per_minute = match self.ticks_per_minute {
            Some(ticks) => ticks,
            None => self
                .ticks_per_second
                .checked_mul(60)
                .ok_or(ConfigError::Overflow)?,
        };
        if ticks_per_minute == 0 {
            return Err(ConfigError::ZeroTicksPerMinute);
        }

        let alarm_duration_ticks = match self.alarm_duration_ticks {
            Some(ticks) => ticks,
            None => self
                .ticks_per_second
                .checked_mul(self.alarm_duration_seconds)
                .ok_or(ConfigError::Overflow)?,
        };
        if alarm_duration_ticks == 0 {
            return Err(ConfigError::ZeroAlarmDuration);
        }

        let alarm = AlarmSetpoint::new(self.alarm.0, self.alarm.1)
            .map_err(ConfigError::InvalidAlarm)?;
        let initial_time = ClockTime::from_hm(self.initial_time.0, self.initial_time.1)
            .map_err(ConfigError::InvalidInitialTime)?;

        Ok(ClockConfig {
            ticks_per_second: self.ticks_per_second,
            ticks_per_minute,
            debounce_ticks: self.debounce_ticks,
            alarm,
            buzzer_frequency_hz: self.buzzer_frequency_hz,
            alarm_duration_ticks,
            tone_period_ticks: Buzzer::tone_period_for(
                self.ticks_per_second,
                self.buzzer_frequency_hz,
            ),
            initial_time,
            initial_mode: self.initial_mode,
        })
    }
}

impl Default for ClockConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Ticks per second is zero.
    ZeroTicksPerSecond,

    /// Minute threshold is zero.
    ZeroTicksPerMinute,

    /// Debounce threshold is zero.
    ZeroDebounce,

    /// Buzzer frequency is zero.
    ZeroBuzzerFrequency,

    /// Alarm ring duration is zero ticks.
    ZeroAlarmDuration,

    /// Alarm setpoint out of range.
    InvalidAlarm(TimeError),

    /// Initial time out of range.
    InvalidInitialTime(TimeError),

    /// A derived tick count overflowed.
    Overflow,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTicksPerSecond => write!(f, "ticks per second must be non-zero"),
            ConfigError::ZeroTicksPerMinute => write!(f, "ticks per minute must be non-zero"),
            ConfigError::ZeroDebounce => write!(f, "debounce threshold must be non-zero"),
            ConfigError::ZeroBuzzerFrequency => write!(f, "buzzer frequency must be non-zero"),
            ConfigError::ZeroAlarmDuration => write!(f, "alarm duration must be non-zero"),
            ConfigError::InvalidAlarm(err) => write!(f, "invalid alarm setpoint: {}", err),
            ConfigError::InvalidInitialTime(err) => write!(f, "invalid initial time: {}", err),
            ConfigError::Overflow => write!(f, "derived tick count overflows u32"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
