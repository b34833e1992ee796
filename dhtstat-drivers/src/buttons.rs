//! Three-button setpoint panel

use dhtstat_core::buttons::ButtonLevels;
use dhtstat_core::traits::ButtonSource;
use dhtstat_hal::InputPin;

/// Reset, decrement and increment inputs, active-low with pull-ups
pub struct ButtonPanel<P> {
    reset: P,
    decrement: P,
    increment: P,
}

impl<P: InputPin> ButtonPanel<P> {
    pub fn new(reset: P, decrement: P, increment: P) -> Self {
        Self {
            reset,
            decrement,
            increment,
        }
    }
}

impl<P: InputPin> ButtonSource for ButtonPanel<P> {
    fn levels(&mut self) -> ButtonLevels {
        ButtonLevels {
            reset: self.reset.is_high(),
            decrement: self.decrement.is_high(),
            increment: self.increment.is_high(),
        }
    }
}
