//! Build script for dhtstat-firmware
//!
//! - Passes the cortex-m-rt and defmt linker scripts
//! - Validates thermostat.toml at compile time

use std::fs;
use std::path::Path;

/// Keys accepted in each section of thermostat.toml
const SCHEMA: &[(&str, &[&str])] = &[
    (
        "sensor",
        &[
            "start_low_ms",
            "start_high_us",
            "ack_timeout_us",
            "bit_sample_us",
            "max_wait_us",
        ],
    ),
    ("buttons", &["step_guard_ms", "reset_guard_ms"]),
    ("poll", &["sensor_period_ms", "loop_delay_ms"]),
    ("display", &["width", "height", "bottom_margin"]),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Linker scripts; memory.x comes from embassy-stm32's `memory-x` feature
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate thermostat.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=thermostat.toml");

    let config_path = Path::new("thermostat.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read thermostat.toml", &[e.to_string()]),
    };

    let config: toml::Table = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in thermostat.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let errors = check_schema(&config);
    if !errors.is_empty() {
        fail("Invalid thermostat configuration", &errors);
    }

    println!("cargo:warning=thermostat.toml validated successfully");
}

/// Every section and key must be known, every value a non-negative integer
fn check_schema(config: &toml::Table) -> Vec<String> {
    let mut errors = Vec::new();

    for (section, value) in config {
        let Some((_, keys)) = SCHEMA.iter().find(|(name, _)| name == section) else {
            errors.push(format!("unknown section [{}]", section));
            continue;
        };

        let Some(table) = value.as_table() else {
            errors.push(format!("[{}] must be a table", section));
            continue;
        };

        for (key, value) in table {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", section, key));
                continue;
            }

            match value.as_integer() {
                Some(n) if (0..=i64::from(u32::MAX)).contains(&n) => {}
                Some(_) => errors.push(format!("[{}] {} out of range", section, key)),
                None => errors.push(format!("[{}] {} must be an integer", section, key)),
            }
        }
    }

    if let Some(n) = config
        .get("sensor")
        .and_then(|s| s.get("max_wait_us"))
        .and_then(|v| v.as_integer())
    {
        if n == 0 {
            errors.push("[sensor] max_wait_us must be greater than 0".to_string());
        }
    }

    errors
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
