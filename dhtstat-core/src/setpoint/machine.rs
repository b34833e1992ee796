//! Setpoint state definition

use super::events::Event;
use crate::format::{round_half_up, OneDecimal};
use crate::reading::Temperature;

/// Setpoint states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    /// No edit yet; the target shows the live reading
    #[default]
    Tracking,
    /// User-chosen integer target in °C
    Locked(i16),
}

impl State {
    /// Check if the target has been fixed by the user
    pub fn is_locked(&self) -> bool {
        matches!(self, State::Locked(_))
    }

    /// Locked integer target, if any
    pub fn target(&self) -> Option<i16> {
        match self {
            State::Locked(t) => Some(*t),
            State::Tracking => None,
        }
    }

    /// Value to show on the target line
    ///
    /// Tracking mirrors the live reading exactly. Locked shows the integer
    /// with a zero decimal digit and skips rounding entirely.
    pub fn display_value(&self, live: Temperature) -> OneDecimal {
        match self {
            State::Tracking => OneDecimal::from(live),
            State::Locked(t) => OneDecimal::whole(*t as i32),
        }
    }

    /// Process an event and return the next state
    ///
    /// `live` is the last good reading. Leaving Tracking seeds the target
    /// with [`round_half_up`] and applies the event's delta in the same
    /// step. Reset always reseeds without a delta.
    pub fn transition(self, event: Event, live: Temperature) -> Self {
        use Event::*;
        use State::*;

        let seed = round_half_up(live);

        match (self, event) {
            (_, Reset) => Locked(seed),
            (Tracking, Increment | Decrement) => Locked(seed.saturating_add(event.delta())),
            (Locked(t), Increment | Decrement) => Locked(t.saturating_add(event.delta())),
        }
    }
}
