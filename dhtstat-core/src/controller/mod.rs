//! Tick controller tying sensor, buttons and display together
//!
//! One call to [`Controller::tick`] is one pass of the main loop:
//!
//! ```text
//!   ButtonSource ──► Debouncer ──► setpoint::State
//!                       │ guard delays (blocking)
//!                       ▼
//!   FrameSource ──► validate_and_derive ──► last good Temperature
//!                       │ at most once per sensor period
//!                       ▼
//!   RenderSink ◄── live + target, when either changed
//! ```
//!
//! Buttons are serviced first so a slow or failing sensor never hides a
//! press. A failed read keeps the last good value and leaves the screen
//! alone until something changes.

mod context;

pub use context::{Context, PollOutcome, Reading, TickReport};

use embedded_hal::delay::DelayNs;

use crate::config::ThermostatConfig;
use crate::format::OneDecimal;
use crate::reading::{validate_and_derive, Temperature};
use crate::setpoint::{Event, State};
use crate::traits::{ButtonSource, FrameSource, RenderSink};

/// Main-loop controller, generic over its collaborators
pub struct Controller<S, B, R, D> {
    sensor: S,
    buttons: B,
    sink: R,
    delay: D,
    config: ThermostatConfig,
    context: Context,
}

impl<S, B, R, D> Controller<S, B, R, D>
where
    S: FrameSource,
    B: ButtonSource,
    R: RenderSink,
    D: DelayNs,
{
    pub fn new(sensor: S, buttons: B, sink: R, delay: D, config: ThermostatConfig) -> Self {
        Self {
            sensor,
            buttons,
            sink,
            delay,
            context: Context::new(config.buttons),
            config,
        }
    }

    /// Run one loop pass at time `now_ms`
    pub fn tick(&mut self, now_ms: u32) -> TickReport {
        let mut report = TickReport {
            edges: self.service_buttons(),
            ..TickReport::default()
        };

        if self
            .context
            .poll_due(now_ms, self.config.poll.sensor_period_ms)
        {
            report.poll = self.poll_sensor(now_ms);
        }

        let reading_changed = matches!(report.poll, PollOutcome::Updated(_));
        if reading_changed || !report.edges.is_empty() {
            match self.render() {
                Ok(()) => report.rendered = true,
                Err(e) => report.render_error = Some(e),
            }
        }

        report
    }

    fn service_buttons(&mut self) -> crate::buttons::Edges {
        let levels = self.buttons.levels();
        let Context {
            debouncer,
            setpoint,
            last_good,
            ..
        } = &mut self.context;
        let live = *last_good;

        debouncer.service(levels, &mut self.delay, |button| {
            *setpoint = setpoint.transition(Event::from(button), live);
        })
    }

    fn poll_sensor(&mut self, now_ms: u32) -> PollOutcome {
        self.context.last_poll_ms = Some(now_ms);

        let result = self
            .sensor
            .read_frame()
            .and_then(|raw| validate_and_derive(raw).map(|temp| (raw, temp)));

        match result {
            Ok((raw, temperature)) => {
                self.context.last_good = temperature;
                PollOutcome::Updated(Reading {
                    temperature,
                    humidity_x10: raw.humidity_x10(),
                })
            }
            Err(e) => PollOutcome::Failed(e),
        }
    }

    fn render(&mut self) -> Result<(), crate::traits::DisplayError> {
        let live = self.context.last_good;
        let target = self.context.setpoint.display_value(live);
        self.sink.render(OneDecimal::from(live), target)
    }

    /// Current setpoint state
    pub fn setpoint(&self) -> State {
        self.context.setpoint
    }

    /// Last validated temperature (0.0°C until the first good frame)
    pub fn last_good(&self) -> Temperature {
        self.context.last_good
    }

    pub fn config(&self) -> &ThermostatConfig {
        &self.config
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }
}
