//! dhtstat - DHT11 Thermometer Firmware
//!
//! Main firmware binary for STM32F103 "blue pill" boards. Reads a DHT11
//! once per second, shows the reading on an SSD1306 OLED and lets three
//! buttons pin an integer target temperature below it.
//!
//! Pin map:
//!
//! | Signal         | Pin  |
//! |----------------|------|
//! | DHT11 data     | PB9  |
//! | Decrement      | PA3  |
//! | Increment      | PA4  |
//! | Reset          | PA5  |
//! | OLED SCL / SDA | PB6 / PB7 (I2C1) |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Flex, Input, Pull};
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::time::Hertz;
use embassy_time::{Delay, Duration, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use dhtstat_core::controller::{Controller, PollOutcome, TickReport};
use dhtstat_core::setpoint::State;
use dhtstat_display::{DisplayBackend, Renderer};
use dhtstat_drivers::buttons::ButtonPanel;
use dhtstat_drivers::sensor::Dht11;
use dhtstat_hal_stm32f1::{ButtonInput, EmbassyMicros, FlexLine};

use crate::display::Ssd1306;

mod config;
mod display;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("dhtstat firmware starting...");

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Setup I2C for OLED (PB6=SCL, PB7=SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = Hertz(400_000);
    i2c_config.timeout = Duration::from_millis(100);
    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, i2c_config);

    let mut oled = Ssd1306::new(i2c);
    match oled.init() {
        Ok(()) => info!("OLED initialized"),
        // Keep running: the renderer re-runs init before each redraw until it succeeds
        Err(e) => error!("Failed to initialize display: {:?}", e),
    }
    let renderer = Renderer::new(oled, config.display);

    let sensor = Dht11::new(
        FlexLine::new(Flex::new(p.PB9)),
        EmbassyMicros,
        config.sensor,
    );

    let buttons = ButtonPanel::new(
        ButtonInput::new(Input::new(p.PA5, Pull::Up)),
        ButtonInput::new(Input::new(p.PA3, Pull::Up)),
        ButtonInput::new(Input::new(p.PA4, Pull::Up)),
    );

    let mut controller = Controller::new(sensor, buttons, renderer, Delay, config);
    info!("Entering main loop");

    loop {
        let now_ms = Instant::now().as_millis() as u32;
        let report = controller.tick(now_ms);
        log_tick(&report, controller.setpoint());

        Timer::after_millis(u64::from(config.poll.loop_delay_ms)).await;
    }
}

/// Log what a tick did; sensor failures are routine and only warned about
fn log_tick(report: &TickReport, setpoint: State) {
    for button in report.edges.iter() {
        match setpoint {
            State::Locked(target) => info!("{:?} pressed, target {}°C", button, target),
            State::Tracking => info!("{:?} pressed", button),
        }
    }

    match report.poll {
        PollOutcome::Updated(reading) => debug!(
            "DHT11: {}.{}°C, RH {}.{}%",
            reading.temperature.tenths() / 10,
            (reading.temperature.tenths() % 10).unsigned_abs(),
            reading.humidity_x10 / 10,
            reading.humidity_x10 % 10
        ),
        PollOutcome::Failed(e) if e.is_timeout() => warn!("DHT11 not answering: {:?}", e),
        PollOutcome::Failed(e) => warn!("DHT11 frame rejected: {:?}", e),
        PollOutcome::NotDue => {}
    }

    if let Some(e) = report.render_error {
        warn!("Display update failed: {:?}", e);
    }
}
