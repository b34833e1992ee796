//! Minimal TOML reader for thermostat configuration
//!
//! Handles only the subset the config file uses and allocates nothing.
//!
//! Supported:
//! - `[section]` headers
//! - `key = integer` pairs, with `_` digit separators
//! - Comments (`# ...`), whole-line or trailing
//!
//! Every key is optional; missing keys keep their default. Unknown
//! sections and keys are rejected so that typos do not go unnoticed.

use super::types::ThermostatConfig;

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseErrorKind {
    /// Malformed `[section]` header
    InvalidSection,
    /// Section name not recognised
    UnknownSection,
    /// Key not valid in its section
    UnknownKey,
    /// Key outside any section
    KeyOutsideSection,
    /// Line is neither a header nor `key = value`
    InvalidLine,
    /// Value is not a non-negative integer
    InvalidValue,
    /// Value does not fit the field
    OutOfRange,
}

/// Parse error with the 1-based line it occurred on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Sensor,
    Buttons,
    Poll,
    Display,
}

/// Parse TOML text on top of the default configuration
pub fn parse_config(input: &str) -> Result<ThermostatConfig, ParseError> {
    let mut config = ThermostatConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let at = |kind| ParseError {
            line: index + 1,
            kind,
        };
        let line = strip_comment(raw).trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or(at(ParseErrorKind::InvalidSection))?;
            section = parse_section_header(name).map_err(at)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(at(ParseErrorKind::InvalidLine))?;
        apply_value(&mut config, section, key, value).map_err(at)?;
    }

    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(name: &str) -> Result<Section, ParseErrorKind> {
    match name.trim() {
        "sensor" => Ok(Section::Sensor),
        "buttons" => Ok(Section::Buttons),
        "poll" => Ok(Section::Poll),
        "display" => Ok(Section::Display),
        "" => Err(ParseErrorKind::InvalidSection),
        _ => Err(ParseErrorKind::UnknownSection),
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a non-negative decimal integer, allowing `_` between digits
fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ParseErrorKind> {
    let digits = value.strip_prefix('+').unwrap_or(value);
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return Err(ParseErrorKind::InvalidValue);
    }

    let mut acc: u32 = 0;
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let d = c.to_digit(10).ok_or(ParseErrorKind::InvalidValue)?;
        acc = acc
            .checked_mul(10)
            .and_then(|v| v.checked_add(d))
            .ok_or(ParseErrorKind::OutOfRange)?;
    }

    T::try_from(acc).map_err(|_| ParseErrorKind::OutOfRange)
}

fn apply_value(
    config: &mut ThermostatConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseErrorKind> {
    match section {
        Section::Root => return Err(ParseErrorKind::KeyOutsideSection),
        Section::Sensor => {
            let s = &mut config.sensor;
            match key {
                "start_low_ms" => s.start_low_ms = parse_int(value)?,
                "start_high_us" => s.start_high_us = parse_int(value)?,
                "ack_timeout_us" => s.ack_timeout_us = parse_int(value)?,
                "bit_sample_us" => s.bit_sample_us = parse_int(value)?,
                "max_wait_us" => s.max_wait_us = parse_int(value)?,
                _ => return Err(ParseErrorKind::UnknownKey),
            }
        }
        Section::Buttons => {
            let b = &mut config.buttons;
            match key {
                "step_guard_ms" => b.step_guard_ms = parse_int(value)?,
                "reset_guard_ms" => b.reset_guard_ms = parse_int(value)?,
                _ => return Err(ParseErrorKind::UnknownKey),
            }
        }
        Section::Poll => {
            let p = &mut config.poll;
            match key {
                "sensor_period_ms" => p.sensor_period_ms = parse_int(value)?,
                "loop_delay_ms" => p.loop_delay_ms = parse_int(value)?,
                _ => return Err(ParseErrorKind::UnknownKey),
            }
        }
        Section::Display => {
            let d = &mut config.display;
            match key {
                "width" => d.width = parse_int(value)?,
                "height" => d.height = parse_int(value)?,
                "bottom_margin" => d.bottom_margin = parse_int(value)?,
                _ => return Err(ParseErrorKind::UnknownKey),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), ThermostatConfig::default());
        assert_eq!(
            parse_config("# nothing here\n\n").unwrap(),
            ThermostatConfig::default()
        );
    }

    #[test]
    fn test_parse_full_config() {
        let input = r#"
# Thermostat timing
[sensor]
start_low_ms = 18
max_wait_us = 1_500   # per edge

[buttons]
step_guard_ms = 100
reset_guard_ms = 300

[poll]
sensor_period_ms = 2000

[display]
bottom_margin = 4
"#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.sensor.start_low_ms, 18);
        assert_eq!(config.sensor.max_wait_us, 1500);
        assert_eq!(config.sensor.ack_timeout_us, 200);
        assert_eq!(config.buttons.step_guard_ms, 100);
        assert_eq!(config.buttons.reset_guard_ms, 300);
        assert_eq!(config.poll.sensor_period_ms, 2000);
        assert_eq!(config.poll.loop_delay_ms, 20);
        assert_eq!(config.display.bottom_margin, 4);
        assert_eq!(config.display.width, 128);
    }

    #[test]
    fn test_unknown_key_reports_line() {
        let err = parse_config("[poll]\nperiod = 5\n").unwrap_err();
        assert_eq!(
            err,
            ParseError {
                line: 2,
                kind: ParseErrorKind::UnknownKey
            }
        );
    }

    #[test]
    fn test_unknown_section() {
        let err = parse_config("\n\n[heater]\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ParseErrorKind::UnknownSection);
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(
            parse_config("[sensor\n").unwrap_err().kind,
            ParseErrorKind::InvalidSection
        );
        assert_eq!(
            parse_config("[sensor]\nstart_low_ms\n").unwrap_err().kind,
            ParseErrorKind::InvalidLine
        );
        assert_eq!(
            parse_config("start_low_ms = 3\n").unwrap_err().kind,
            ParseErrorKind::KeyOutsideSection
        );
    }

    #[test]
    fn test_value_validation() {
        assert_eq!(parse_int::<u32>("1_000"), Ok(1000));
        assert_eq!(parse_int::<u32>("-5"), Err(ParseErrorKind::InvalidValue));
        assert_eq!(parse_int::<u32>("_5"), Err(ParseErrorKind::InvalidValue));
        assert_eq!(parse_int::<u32>("\"5\""), Err(ParseErrorKind::InvalidValue));
        assert_eq!(parse_int::<u16>("70000"), Err(ParseErrorKind::OutOfRange));
        assert_eq!(
            parse_int::<u32>("99999999999"),
            Err(ParseErrorKind::OutOfRange)
        );
    }
}
