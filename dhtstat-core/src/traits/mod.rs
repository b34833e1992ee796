//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the sensor driver, the button panel and the display renderer.

pub mod buttons;
pub mod display;
pub mod sensor;

pub use buttons::ButtonSource;
pub use display::{DisplayError, RenderSink};
pub use sensor::{FrameSource, SensorError};
