//! Relay timing configuration.
//!
//! Everything here is fixed at compile time.  Change a constant and
//! reflash; there is no runtime override path.

use serde::{Deserialize, Serialize};

use crate::clock::DateTime;
use crate::error::ConfigError;
use crate::pins;

/// Period between relay activations (minutes, measured activation to activation).
pub const PERIOD_TIME_MIN: u16 = 15;
/// How long the relay stays on once activated (minutes).
pub const ACTIVE_TIME_MIN: u16 = 2;
/// GPIO driving the relay coil.
pub const OUTPUT_PIN: i32 = pins::RELAY_GPIO;
/// Minimum uptime between two RTC samples (milliseconds).
pub const REFRESH_INTERVAL_MS: u32 = 15_000;

/// How long the firmware main loop sleeps between polls (milliseconds).
/// Keeps the FreeRTOS idle task fed; far below the refresh interval.
pub const LOOP_YIELD_MS: u32 = 10;

/// Local wall-clock time of the build, as seconds since 1970-01-01.
/// Exported by `build.rs`.
pub const BUILD_UNIX_SECS: &str = env!("TIMERELAY_BUILD_UNIX_SECS");

/// The build time as a clock-set value, written to the RTC on every boot.
pub fn build_time() -> Option<DateTime> {
    BUILD_UNIX_SECS.parse().ok().map(DateTime::from_unix_secs)
}

/// Core relay configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Cycle length in minutes
    pub period_time_min: u16,
    /// Assertion duration in minutes, must be shorter than the period
    pub active_time_min: u16,
    /// Relay output GPIO
    pub output_pin: i32,
    /// Poll cadence in milliseconds
    pub refresh_interval_ms: u32,
}

impl RelayConfig {
    /// The configuration baked into the firmware.
    pub const BUILTIN: Self = Self {
        period_time_min: PERIOD_TIME_MIN,
        active_time_min: ACTIVE_TIME_MIN,
        output_pin: OUTPUT_PIN,
        refresh_interval_ms: REFRESH_INTERVAL_MS,
    };

    /// Check the one cross-field rule: the relay must switch off before the
    /// next period starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.active_time_min >= self.period_time_min {
            return Err(ConfigError::ActiveNotShorterThanPeriod {
                active_min: self.active_time_min,
                period_min: self.period_time_min,
            });
        }
        Ok(())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::BUILTIN
    }
}
