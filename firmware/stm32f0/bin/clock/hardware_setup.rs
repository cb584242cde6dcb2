use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{gpioa, gpioc, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};

use segclock::ClockPins;
use stm32f0_segclock::busy_wait::BusyWaitTicker;
use stm32f0_segclock::gpio_port::{DigitPort, SegmentPort};
use stm32f0_segclock::lines::{ActiveLowButton, PinLine};

/// Button type (user button on PC13)
pub type Button = ActiveLowButton<gpioc::PC13<Input<PullUp>>>;

/// AM indicator (onboard LED on PA5)
pub type AmLed = PinLine<gpioa::PA5<Output<PushPull>>>;

/// Buzzer output on PA6
pub type BuzzerLine = PinLine<gpioa::PA6<Output<PushPull>>>;

/// Pins in the shape the clock expects
pub type BoardPins = ClockPins<SegmentPort, DigitPort, Button, AmLed, BuzzerLine>;

/// Container for all initialized hardware
pub struct HardwareContext {
    pub ticker: BusyWaitTicker,
    pub pins: BoardPins,
}

/// Initialize all hardware peripherals
///
/// - System clock configuration
/// - GPIO port clocks (A, B, C) via `split`
/// - Segment outputs PB0..PB6, digit enables PC0..PC3
/// - AM LED on PA5, buzzer on PA6
/// - Button on PC13 with pull-up
///
/// All outputs come up low. `DigitalClock::new` drives them OFF again.
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().freeze(&mut dp.FLASH);
    let sysclk = rcc.clocks.sysclk();
    rprintln!("System clock configured: {} Hz", sysclk.0);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let (segments, digits, button, am_led, buzzer) = cortex_m::interrupt::free(|cs| {
        let segments = SegmentPort::new((
            gpiob.pb0.into_push_pull_output(cs),
            gpiob.pb1.into_push_pull_output(cs),
            gpiob.pb2.into_push_pull_output(cs),
            gpiob.pb3.into_push_pull_output(cs),
            gpiob.pb4.into_push_pull_output(cs),
            gpiob.pb5.into_push_pull_output(cs),
            gpiob.pb6.into_push_pull_output(cs),
        ));
        let digits = DigitPort::new((
            gpioc.pc0.into_push_pull_output(cs),
            gpioc.pc1.into_push_pull_output(cs),
            gpioc.pc2.into_push_pull_output(cs),
            gpioc.pc3.into_push_pull_output(cs),
        ));
        let button = ActiveLowButton::new(gpioc.pc13.into_pull_up_input(cs));
        let am_led = PinLine::new(gpioa.pa5.into_push_pull_output(cs));
        let buzzer = PinLine::new(gpioa.pa6.into_push_pull_output(cs));
        (segments, digits, button, am_led, buzzer)
    });

    rprintln!("Segments on PB0..PB6, digit enables on PC0..PC3");
    rprintln!("AM LED on PA5, buzzer on PA6, button on PC13");

    let ticker = BusyWaitTicker::new(sysclk);
    rprintln!("Busy-wait tick: {} cycles", ticker.cycles_per_tick());

    HardwareContext {
        ticker,
        pins: ClockPins {
            segments,
            digits,
            button,
            am_led,
            buzzer,
        },
    }
}
