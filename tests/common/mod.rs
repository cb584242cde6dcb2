//! Shared test infrastructure for segclock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};

use segclock::{
    ClockConfig, ClockPins, DigitalClock, InputLine, OutputLine, OutputPort, TickSource,
};

// ============================================================================
// Mock Tick Source
// ============================================================================

/// Tick source that only counts how often it was waited on
pub struct CountingTicker {
    ticks: Cell<u64>,
}

impl CountingTicker {
    pub fn new() -> Self {
        Self { ticks: Cell::new(0) }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks.get()
    }
}

impl TickSource for CountingTicker {
    fn wait_tick(&mut self) {
        self.ticks.set(self.ticks.get() + 1);
    }
}

// ============================================================================
// Shared write log for the display ports
// ============================================================================

/// Which display port a write went to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bus {
    Segments,
    Digits,
}

/// One port write, in program order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusWrite {
    Set(Bus, u8),
    Clear(Bus, u8),
}

/// Write log shared by the segment and digit ports so that ordering across
/// both ports can be checked
pub struct BusLog {
    writes: RefCell<heapless::Vec<BusWrite, 512>>,
}

impl BusLog {
    pub fn new() -> Self {
        Self {
            writes: RefCell::new(heapless::Vec::new()),
        }
    }

    pub fn writes(&self) -> heapless::Vec<BusWrite, 512> {
        self.writes.borrow().clone()
    }

    pub fn clear(&self) {
        self.writes.borrow_mut().clear();
    }

    fn record(&self, write: BusWrite) {
        let _ = self.writes.borrow_mut().push(write);
    }
}

/// Output port that latches its level and logs every write
pub struct LoggedPort<'a> {
    bus: Bus,
    level: u8,
    log: &'a BusLog,
}

impl<'a> LoggedPort<'a> {
    pub fn new(bus: Bus, log: &'a BusLog) -> Self {
        Self { bus, level: 0, log }
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

impl OutputPort for LoggedPort<'_> {
    fn set_bits(&mut self, mask: u8) {
        self.level |= mask;
        self.log.record(BusWrite::Set(self.bus, mask));
    }

    fn clear_bits(&mut self, mask: u8) {
        self.level &= !mask;
        self.log.record(BusWrite::Clear(self.bus, mask));
    }
}

// ============================================================================
// Mock Lines
// ============================================================================

/// Output line that counts level changes
pub struct MockLine {
    on: bool,
    transitions: u32,
}

impl MockLine {
    pub fn new() -> Self {
        Self {
            on: false,
            transitions: 0,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn transitions(&self) -> u32 {
        self.transitions
    }
}

impl OutputLine for MockLine {
    fn set_on(&mut self) {
        if !self.on {
            self.transitions += 1;
        }
        self.on = true;
    }

    fn set_off(&mut self) {
        if self.on {
            self.transitions += 1;
        }
        self.on = false;
    }

    fn is_set_on(&self) -> bool {
        self.on
    }
}

/// Button that plays back a script of raw samples, then holds `rest`
pub struct ScriptedButton<'a> {
    script: &'a [bool],
    index: usize,
    rest: bool,
}

impl<'a> ScriptedButton<'a> {
    pub fn new(script: &'a [bool], rest: bool) -> Self {
        Self {
            script,
            index: 0,
            rest,
        }
    }

    pub fn released() -> ScriptedButton<'static> {
        ScriptedButton::new(&[], false)
    }

    /// Replaces the level held once the script is exhausted
    pub fn hold(&mut self, pressed: bool) {
        self.rest = pressed;
    }
}

impl InputLine for ScriptedButton<'_> {
    fn is_pressed(&mut self) -> bool {
        let sample = self.script.get(self.index).copied().unwrap_or(self.rest);
        self.index += 1;
        sample
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestClock<'a> = DigitalClock<
    CountingTicker,
    LoggedPort<'a>,
    LoggedPort<'a>,
    ScriptedButton<'a>,
    MockLine,
    MockLine,
>;

/// Builds a clock on mock hardware
pub fn test_clock<'a>(
    config: &ClockConfig,
    log: &'a BusLog,
    button: ScriptedButton<'a>,
) -> TestClock<'a> {
    let pins = ClockPins {
        segments: LoggedPort::new(Bus::Segments, log),
        digits: LoggedPort::new(Bus::Digits, log),
        button,
        am_led: MockLine::new(),
        buzzer: MockLine::new(),
    };
    DigitalClock::new(config, CountingTicker::new(), pins)
}
