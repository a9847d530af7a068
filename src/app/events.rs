//! Outbound application events.
//!
//! The [`RelayService`](super::service::RelayService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  The serial log adapter
//! turns them into human-readable lines.

use crate::clock::DateTime;
use crate::config::RelayConfig;
use crate::error::ConfigError;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The RTC did not answer during startup.
    RtcNotFound,

    /// The RTC oscillator is halted.
    RtcNotRunning,

    /// The RTC was set to the firmware build time.
    ClockSet(DateTime),

    /// Configuration rejected; the service will never switch the relay.
    ConfigInvalid(ConfigError),

    /// The service is running with this configuration.
    Started(RelayConfig),

    /// The clock was sampled (once per refresh window).
    Sample(DateTime),

    /// The minute-of-day went backwards since the previous sample.
    ClockRollback { from_minute: u16, to_minute: u16 },

    /// Relay energised.
    RelayStarted { minute: u16 },

    /// Relay released.
    RelayStopped { minute: u16 },
}
