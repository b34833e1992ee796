//! Setpoint state machine
//!
//! The target starts out following the live reading. The first button
//! edge locks it to an integer; from then on it only moves on button
//! edges and never follows the reading again.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
