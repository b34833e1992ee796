//! Events that change the setpoint

use crate::buttons::Button;

/// Button-driven setpoint events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Raise the target by one degree
    Increment,
    /// Lower the target by one degree
    Decrement,
    /// Reseed the target from the live reading
    Reset,
}

impl Event {
    /// Change applied after seeding
    pub const fn delta(self) -> i16 {
        match self {
            Event::Increment => 1,
            Event::Decrement => -1,
            Event::Reset => 0,
        }
    }
}

impl From<Button> for Event {
    fn from(button: Button) -> Self {
        match button {
            Button::Increment => Event::Increment,
            Button::Decrement => Event::Decrement,
            Button::Reset => Event::Reset,
        }
    }
}
