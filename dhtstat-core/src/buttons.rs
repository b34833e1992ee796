//! Button edge detection
//!
//! All three inputs are active-low with pull-ups: released reads high,
//! pressed reads low. A press registers on the high to low transition
//! between two consecutive polls. Holding a button never repeats.
//!
//! Debouncing is blocking: after each edge the caller's delay provider is
//! held for that button's guard interval, so nothing else (other buttons
//! included) is observed until it expires. Presses inside the window are
//! dropped, not queued.

use embedded_hal::delay::DelayNs;

use crate::config::ButtonTiming;

/// Setpoint buttons, in the order they are serviced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Reset,
    Decrement,
    Increment,
}

impl Button {
    /// Service order within one poll
    pub const ALL: [Button; 3] = [Button::Reset, Button::Decrement, Button::Increment];

    const fn bit(self) -> u8 {
        match self {
            Button::Reset => 1 << 0,
            Button::Decrement => 1 << 1,
            Button::Increment => 1 << 2,
        }
    }
}

/// Electrical level of every button at one instant (`true` = high = released)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels {
    pub reset: bool,
    pub decrement: bool,
    pub increment: bool,
}

impl ButtonLevels {
    /// Nothing pressed
    pub const RELEASED: Self = Self {
        reset: true,
        decrement: true,
        increment: true,
    };

    /// Level of one button
    pub const fn level(&self, button: Button) -> bool {
        match button {
            Button::Reset => self.reset,
            Button::Decrement => self.decrement,
            Button::Increment => self.increment,
        }
    }

    /// Same levels with one button held down
    pub const fn with_pressed(mut self, button: Button) -> Self {
        match button {
            Button::Reset => self.reset = false,
            Button::Decrement => self.decrement = false,
            Button::Increment => self.increment = false,
        }
        self
    }
}

impl Default for ButtonLevels {
    fn default() -> Self {
        Self::RELEASED
    }
}

/// Set of buttons that saw a falling edge in one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Edges(u8);

impl Edges {
    pub const NONE: Self = Self(0);

    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Buttons with an edge, in service order
    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

/// Falling-edge detector over consecutive polls
///
/// Starts with every level high, so a button already held at power-up
/// registers once on the first poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeDetector {
    previous: ButtonLevels,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            previous: ButtonLevels::RELEASED,
        }
    }

    /// Compare against the previous sample and remember this one
    pub fn poll(&mut self, current: ButtonLevels) -> Edges {
        let mut edges = Edges::NONE;
        for button in Button::ALL {
            if self.previous.level(button) && !current.level(button) {
                edges.insert(button);
            }
        }
        self.previous = current;
        edges
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Edge detector plus per-button guard delays
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    detector: EdgeDetector,
    timing: ButtonTiming,
}

impl Debouncer {
    pub const fn new(timing: ButtonTiming) -> Self {
        Self {
            detector: EdgeDetector::new(),
            timing,
        }
    }

    /// Run one poll
    ///
    /// Each detected edge is handed to `on_edge` in service order, then
    /// the guard for that button is waited out before the next one.
    pub fn service<D: DelayNs>(
        &mut self,
        levels: ButtonLevels,
        delay: &mut D,
        mut on_edge: impl FnMut(Button),
    ) -> Edges {
        let edges = self.detector.poll(levels);
        for button in edges.iter() {
            on_edge(button);
            delay.delay_ms(self.timing.guard_ms(button));
        }
        edges
    }
}
