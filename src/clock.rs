//! The cooperative superloop.
//!
//! Provides [`ClockState`], the context that every component updates once
//! per tick, and [`DigitalClock`], which owns the tick source and the pins
//! and runs the loop. One call to [`DigitalClock::tick`] is one pass:
//!
//! 1. wait one tick
//! 2. time accumulation
//! 3. button scan and 12h/24h toggle
//! 4. AM indicator
//! 5. alarm evaluation
//! 6. buzzer update
//! 7. one multiplex step
//!
//! Each field of [`ClockState`] has a single writer within the pass.

use heapless::Vec;

use crate::accumulator::TimeKeeper;
use crate::alarm::Alarm;
use crate::button::ButtonDebouncer;
use crate::buzzer::{Buzzer, BuzzerUpdate};
use crate::config::ClockConfig;
use crate::format::{self, DisplayDigits};
use crate::multiplexer::{DigitMultiplexer, MultiplexFrame};
use crate::pins::{InputLine, OutputLine, OutputPort};
use crate::segments::{ALL_DIGITS_MASK, SEGMENT_MASK};
use crate::time::TickSource;
use crate::types::{ClockTime, DigitPosition, DisplayMode};

/// Upper bound of events one pass can produce (one of each kind).
pub const MAX_EVENTS_PER_TICK: usize = 4;

/// Something noteworthy that happened during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockEvent {
    /// The time advanced by one minute to the contained value.
    MinuteElapsed(ClockTime),
    /// A debounced press switched the display to the contained mode.
    ModeToggled(DisplayMode),
    /// The alarm setpoint matched and the buzzer started.
    AlarmTriggered,
    /// The buzzer countdown ran out.
    BuzzerSilenced,
}

/// Outcome of one pass through the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Time after the pass.
    pub time: ClockTime,
    /// Display mode after the pass.
    pub mode: DisplayMode,
    /// AM indicator level driven.
    pub am: bool,
    /// What the multiplex step lit.
    pub frame: MultiplexFrame,
    /// Events in the order they occurred.
    pub events: Vec<ClockEvent, MAX_EVENTS_PER_TICK>,
}

impl TickReport {
    /// Returns true if `event` occurred during the pass.
    pub fn contains(&self, event: &ClockEvent) -> bool {
        self.events.contains(event)
    }
}

/// Output and input lines used by the clock.
pub struct ClockPins<S, D, B, L, Z> {
    /// Seven segment lines, segment `a` on bit 0.
    pub segments: S,
    /// Four digit-enable lines, minute units on bit 0.
    pub digits: D,
    /// Mode button.
    pub button: B,
    /// AM indicator LED.
    pub am_led: L,
    /// Buzzer output.
    pub buzzer: Z,
}

/// All mutable clock state, threaded through the components each tick.
#[derive(Debug, Clone)]
pub struct ClockState {
    time: ClockTime,
    mode: DisplayMode,
    keeper: TimeKeeper,
    button: ButtonDebouncer,
    alarm: Alarm,
    buzzer: Buzzer,
    mux: DigitMultiplexer,
    am: bool,
}

impl ClockState {
    /// Creates the power-on state described by `config`.
    pub fn new(config: &ClockConfig) -> Self {
        let time = config.initial_time();
        Self {
            time,
            mode: config.initial_mode(),
            keeper: TimeKeeper::new(config.ticks_per_minute()),
            button: ButtonDebouncer::new(config.debounce_ticks()),
            alarm: Alarm::new(config.alarm(), config.alarm_duration_ticks()),
            buzzer: Buzzer::new(config.tone_period_ticks()),
            mux: DigitMultiplexer::new(),
            am: format::is_morning(time.hour()),
        }
    }

    /// Runs every component once, in loop order, without waiting.
    pub fn step<S, D, B, L, Z>(&mut self, pins: &mut ClockPins<S, D, B, L, Z>) -> TickReport
    where
        S: OutputPort,
        D: OutputPort,
        B: InputLine,
        L: OutputLine,
        Z: OutputLine,
    {
        let mut events = Vec::new();

        if self.keeper.advance_if_due(&mut self.time) {
            let _ = events.push(ClockEvent::MinuteElapsed(self.time));
        }

        self.button.scan(pins.button.is_pressed());
        if self.button.take_press() {
            self.mode = self.mode.toggled();
            let _ = events.push(ClockEvent::ModeToggled(self.mode));
        }

        let hour = self.time.hour();
        self.am = format::is_morning(hour);
        pins.am_led.set_level(self.am);

        if self.alarm.check(&self.time, &mut self.buzzer) {
            let _ = events.push(ClockEvent::AlarmTriggered);
        }

        if self.buzzer.update(&mut pins.buzzer) == BuzzerUpdate::Finished {
            let _ = events.push(ClockEvent::BuzzerSilenced);
        }

        let digits = DisplayDigits::from_time(&self.time, self.mode);
        let frame = self.mux.step(&digits, &mut pins.segments, &mut pins.digits);

        TickReport {
            time: self.time,
            mode: self.mode,
            am: self.am,
            frame,
            events,
        }
    }

    #[inline]
    pub fn time(&self) -> ClockTime {
        self.time
    }

    #[inline]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// AM indicator level as of the last pass.
    #[inline]
    pub fn is_morning(&self) -> bool {
        self.am
    }

    #[inline]
    pub fn buzzer(&self) -> &Buzzer {
        &self.buzzer
    }

    #[inline]
    pub fn button(&self) -> &ButtonDebouncer {
        &self.button
    }

    #[inline]
    pub fn keeper(&self) -> &TimeKeeper {
        &self.keeper
    }

    #[inline]
    pub fn alarm(&self) -> &Alarm {
        &self.alarm
    }

    /// Digit the next pass will light.
    #[inline]
    pub fn position(&self) -> DigitPosition {
        self.mux.position()
    }

    /// Digits currently rendered.
    pub fn display_digits(&self) -> DisplayDigits {
        DisplayDigits::from_time(&self.time, self.mode)
    }
}

/// A 4-digit alarm clock driven by a superloop.
///
/// # Type Parameters
/// * `T` - Tick source
/// * `S` - Segment port
/// * `D` - Digit-enable port
/// * `B` - Button input
/// * `L` - AM indicator output
/// * `Z` - Buzzer output
pub struct DigitalClock<T, S, D, B, L, Z> {
    ticker: T,
    pins: ClockPins<S, D, B, L, Z>,
    state: ClockState,
}

impl<T, S, D, B, L, Z> DigitalClock<T, S, D, B, L, Z>
where
    T: TickSource,
    S: OutputPort,
    D: OutputPort,
    B: InputLine,
    L: OutputLine,
    Z: OutputLine,
{
    /// Creates a clock with every output driven OFF.
    pub fn new(config: &ClockConfig, ticker: T, mut pins: ClockPins<S, D, B, L, Z>) -> Self {
        pins.digits.clear_bits(ALL_DIGITS_MASK);
        pins.segments.clear_bits(SEGMENT_MASK);
        pins.buzzer.set_off();
        pins.am_led.set_off();

        Self {
            ticker,
            pins,
            state: ClockState::new(config),
        }
    }

    /// Waits one tick, then runs one pass of the loop.
    pub fn tick(&mut self) -> TickReport {
        self.ticker.wait_tick();
        self.state.step(&mut self.pins)
    }

    /// Runs the loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Runs the loop forever, handing every non-empty report to `on_events`.
    pub fn run_with<F: FnMut(&TickReport)>(&mut self, mut on_events: F) -> ! {
        loop {
            let report = self.tick();
            if !report.events.is_empty() {
                on_events(&report);
            }
        }
    }

    #[inline]
    pub fn state(&self) -> &ClockState {
        &self.state
    }

    #[inline]
    pub fn pins(&self) -> &ClockPins<S, D, B, L, Z> {
        &self.pins
    }

    #[inline]
    pub fn pins_mut(&mut self) -> &mut ClockPins<S, D, B, L, Z> {
        &mut self.pins
    }

    #[inline]
    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Releases the tick source and pins.
    pub fn release(self) -> (T, ClockPins<S, D, B, L, Z>) {
        (self.ticker, self.pins)
    }
}
