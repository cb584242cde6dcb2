#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};

use segclock::{ClockConfig, ClockEvent, DigitalClock};

mod hardware_setup;

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== 7-Segment Alarm Clock ===");
    rprintln!("Starting initialization...");

    let hw = hardware_setup::init_hardware();
    rprintln!("Hardware initialized successfully");

    let config = ClockConfig::default();
    rprintln!(
        "Calibration: {} ticks/min, alarm {:02}:{:02} for {} ticks, tone period {} ticks",
        config.ticks_per_minute(),
        config.alarm().hour(),
        config.alarm().minute(),
        config.alarm_duration_ticks(),
        config.tone_period_ticks()
    );

    let mut clock = DigitalClock::new(&config, hw.ticker, hw.pins);

    rprintln!("=== System Ready ===");
    rprintln!("Press button to toggle 12h/24h display");

    clock.run_with(|report| {
        for event in &report.events {
            match event {
                ClockEvent::MinuteElapsed(time) => rprintln!("Time: {}", time),
                ClockEvent::ModeToggled(mode) => rprintln!("Display mode: {:?}", mode),
                ClockEvent::AlarmTriggered => rprintln!("Alarm triggered at {}", report.time),
                ClockEvent::BuzzerSilenced => rprintln!("Buzzer silenced"),
            }
        }
    })
}
