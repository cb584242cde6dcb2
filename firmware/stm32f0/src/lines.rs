use core::convert::Infallible;

use embedded_hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin};
use segclock::{InputLine, OutputLine};

/// Single output line backed by a HAL pin, active high.
pub struct PinLine<P> {
    pin: P,
}

impl<P> PinLine<P>
where
    P: OutputPin<Error = Infallible> + StatefulOutputPin,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> OutputLine for PinLine<P>
where
    P: OutputPin<Error = Infallible> + StatefulOutputPin,
{
    fn set_on(&mut self) {
        self.pin.set_high().unwrap_or_else(|e| match e {});
    }

    fn set_off(&mut self) {
        self.pin.set_low().unwrap_or_else(|e| match e {});
    }

    fn is_set_on(&self) -> bool {
        self.pin.is_set_high().unwrap_or_else(|e| match e {})
    }
}

/// Push button wired to ground with a pull-up: low means pressed.
pub struct ActiveLowButton<P> {
    pin: P,
}

impl<P> ActiveLowButton<P>
where
    P: InputPin<Error = Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> InputLine for ActiveLowButton<P>
where
    P: InputPin<Error = Infallible>,
{
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or_else(|e| match e {})
    }
}
