#![no_std]

//! STM32F0 bindings for the `segclock` capabilities.

pub mod busy_wait;
pub mod gpio_port;
pub mod lines;
