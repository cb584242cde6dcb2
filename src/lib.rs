#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DigitalClock`**: Owns the tick source and pins and runs the superloop
//! - **`ClockState`**: All mutable clock state, updated once per tick in a fixed order
//! - **`ClockConfig`**: Calibration (ticks per minute, debounce, alarm, buzzer tone)
//! - **`TickSource`**: Trait to implement for your "wait one tick" primitive
//! - **`OutputPort`** / **`OutputLine`** / **`InputLine`**: Traits to implement for your GPIO
//! - **`TimeKeeper`**: Counts ticks and advances the time once per logical minute
//! - **`ButtonDebouncer`**: Counter-based debouncer with one-shot press events
//! - **`DigitMultiplexer`**: Lights one of the four digits per tick, blanking in between
//! - **`Alarm`** / **`Buzzer`**: Fixed-setpoint alarm and its self-terminating tone
//!
//! There is no interrupt, timer or RTC involved: a tick is one pass of the
//! loop, and every duration in the crate is a count of ticks.

pub mod accumulator;
pub mod alarm;
pub mod button;
pub mod buzzer;
pub mod clock;
pub mod config;
pub mod format;
pub mod multiplexer;
pub mod pins;
pub mod segments;
pub mod time;
pub mod types;

pub use accumulator::TimeKeeper;
pub use alarm::Alarm;
pub use button::ButtonDebouncer;
pub use buzzer::{Buzzer, BuzzerState, BuzzerUpdate};
pub use clock::{ClockEvent, ClockPins, ClockState, DigitalClock, TickReport};
pub use config::{ClockConfig, ClockConfigBuilder, ConfigError};
pub use format::{DisplayDigits, display_hour, is_morning};
pub use multiplexer::{DigitMultiplexer, MultiplexFrame};
pub use pins::{InputLine, OutputLine, OutputPort};
pub use segments::{ALL_DIGITS_MASK, DigitMask, SEGMENT_MASK, SegmentPattern};
pub use time::TickSource;
pub use types::{AlarmSetpoint, ClockTime, Digit, DigitError, DigitPosition, DisplayMode, TimeError};
