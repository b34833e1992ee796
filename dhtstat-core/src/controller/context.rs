//! Shared loop state and per-tick results

use crate::buttons::{Debouncer, Edges};
use crate::config::ButtonTiming;
use crate::reading::Temperature;
use crate::setpoint::State;
use crate::traits::{DisplayError, SensorError};

/// Everything the loop remembers between ticks
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Last temperature that passed validation
    pub last_good: Temperature,
    pub setpoint: State,
    pub debouncer: Debouncer,
    /// Time of the last sensor attempt, `None` before the first
    pub last_poll_ms: Option<u32>,
}

impl Context {
    pub const fn new(timing: ButtonTiming) -> Self {
        Self {
            last_good: Temperature::ZERO,
            setpoint: State::Tracking,
            debouncer: Debouncer::new(timing),
            last_poll_ms: None,
        }
    }

    /// Check whether a sensor read is due at `now_ms`
    ///
    /// Uses wrapping arithmetic so the millisecond counter may roll over.
    pub fn poll_due(&self, now_ms: u32, period_ms: u32) -> bool {
        match self.last_poll_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= period_ms,
        }
    }
}

/// A validated frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub temperature: Temperature,
    pub humidity_x10: u16,
}

/// What happened to the sensor this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// Throttled, no read attempted
    #[default]
    NotDue,
    /// Frame validated and stored as last good
    Updated(Reading),
    /// Read or validation failed; last good kept
    Failed(SensorError),
}

/// Summary of one tick, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Buttons whose edge was handled
    pub edges: Edges,
    pub poll: PollOutcome,
    /// Screen was redrawn
    pub rendered: bool,
    /// Redraw was attempted and failed
    pub render_error: Option<DisplayError>,
}
