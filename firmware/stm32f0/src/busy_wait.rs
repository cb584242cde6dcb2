use segclock::TickSource;
use stm32f0xx_hal::time::Hertz;

/// Tick length used by the clock loop.
pub const TICK_MICROS: u32 = 1_000;

/// Tick source that spins the core for a fixed number of cycles.
///
/// No timer or interrupt is involved. The wait does not account for the time
/// the rest of the loop body takes, so the effective tick rate is lower than
/// `1 / TICK_MICROS` and has to be calibrated through `ClockConfig`.
pub struct BusyWaitTicker {
    cycles_per_tick: u32,
}

impl BusyWaitTicker {
    /// Creates a ticker for a core running at `sysclk`.
    pub fn new(sysclk: Hertz) -> Self {
        Self {
            cycles_per_tick: Self::cycles_for(sysclk.0, TICK_MICROS),
        }
    }

    /// Core cycles in `micros` microseconds at `sysclk_hz`, at least one.
    pub const fn cycles_for(sysclk_hz: u32, micros: u32) -> u32 {
        let cycles = (sysclk_hz as u64 * micros as u64) / 1_000_000;
        if cycles == 0 {
            1
        } else if cycles > u32::MAX as u64 {
            u32::MAX
        } else {
            cycles as u32
        }
    }

    pub fn cycles_per_tick(&self) -> u32 {
        self.cycles_per_tick
    }
}

impl TickSource for BusyWaitTicker {
    fn wait_tick(&mut self) {
        cortex_m::asm::delay(self.cycles_per_tick);
    }
}
