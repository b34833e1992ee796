//! GPIO wrappers for STM32F1

use dhtstat_hal::{DataLine, InputPin};
use embassy_stm32::gpio::{Flex, Input, Pull, Speed};

/// Single-wire data line on a flexible pin
///
/// Drives push-pull for the start signal and switches to input with the
/// internal pull-up to hand the line to the sensor.
pub struct FlexLine<'d> {
    pin: Flex<'d>,
}

impl<'d> FlexLine<'d> {
    /// Wrap a pin; it starts released (input, pulled up)
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_as_input(Pull::Up);
        Self { pin }
    }
}

impl DataLine for FlexLine<'_> {
    fn drive_low(&mut self) {
        self.pin.set_low();
        self.pin.set_as_output(Speed::Low);
    }

    fn drive_high(&mut self) {
        self.pin.set_high();
        self.pin.set_as_output(Speed::Low);
    }

    fn release(&mut self) {
        self.pin.set_as_input(Pull::Up);
    }

    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Button on a pulled-up input
pub struct ButtonInput<'d> {
    pin: Input<'d>,
}

impl<'d> ButtonInput<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for ButtonInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
