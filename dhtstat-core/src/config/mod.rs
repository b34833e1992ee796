//! Configuration types
//!
//! Board-agnostic timing and layout settings, with a small TOML reader
//! for the file embedded in the firmware image.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError, ParseErrorKind};
pub use types::*;
