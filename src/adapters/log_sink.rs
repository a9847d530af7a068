//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the logger
//! (UART / USB-CDC in production).  The wording of the operator-facing
//! lines is fixed; people grep serial captures for "Start" and "Stop".

use log::{error, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::RtcNotFound => warn!("Couldn't find RTC"),
            AppEvent::RtcNotRunning => warn!("RTC is NOT running, let's set the time!"),
            AppEvent::ClockSet(t) => {
                info!(
                    "RTC set to build time {:04}-{:02}-{:02} {}",
                    t.year, t.month, t.day, t
                );
            }
            AppEvent::ConfigInvalid(e) => {
                error!("Active time must be shorter than period time ({})", e);
            }
            AppEvent::Started(c) => {
                info!(
                    "START | period={}min active={}min pin={} refresh={}ms",
                    c.period_time_min, c.active_time_min, c.output_pin, c.refresh_interval_ms
                );
            }
            AppEvent::Sample(t) => info!("{}", t),
            AppEvent::ClockRollback {
                from_minute,
                to_minute,
            } => {
                warn!(
                    "CLOCK | minute-of-day went back {} -> {}, elapsed time wraps",
                    from_minute, to_minute
                );
            }
            AppEvent::RelayStarted { .. } => info!("Start"),
            AppEvent::RelayStopped { .. } => info!("Stop"),
        }
    }
}
