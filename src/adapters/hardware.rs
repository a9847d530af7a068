//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`Ds1307`] driver and the [`RelayDriver`], exposing them
//! through [`RtcPort`] and [`RelayPort`].  Driver errors stop here: they
//! are logged and replaced with the fallback the domain expects.

use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use log::warn;

use crate::app::ports::{RelayPort, RtcPort};
use crate::clock::DateTime;
use crate::drivers::ds1307::Ds1307;
use crate::drivers::relay::RelayDriver;
use crate::error::Error;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I2C, P> {
    rtc: Ds1307<I2C>,
    relay: RelayDriver<P>,
}

impl<I2C: I2c, P: OutputPin> HardwareAdapter<I2C, P> {
    pub fn new(rtc: Ds1307<I2C>, relay: RelayDriver<P>) -> Self {
        Self { rtc, relay }
    }

    /// Hand the drivers back, e.g. to release the I²C bus for another device.
    pub fn into_parts(self) -> (Ds1307<I2C>, RelayDriver<P>) {
        (self.rtc, self.relay)
    }
}

// ── RtcPort implementation ────────────────────────────────────

impl<I2C: I2c, P: OutputPin> RtcPort for HardwareAdapter<I2C, P> {
    fn begin(&mut self) -> bool {
        match self.rtc.probe() {
            Ok(()) => true,
            Err(e) => {
                warn!("RTC probe failed: {}", Error::from(e));
                false
            }
        }
    }

    fn is_running(&mut self) -> bool {
        self.rtc.is_running().unwrap_or_else(|e| {
            warn!("RTC status read failed: {}", Error::from(e));
            false
        })
    }

    fn adjust(&mut self, time: &DateTime) -> bool {
        match self.rtc.set_datetime(time) {
            Ok(()) => true,
            Err(e) => {
                warn!("RTC adjust to {} failed: {}", time, Error::from(e));
                false
            }
        }
    }

    fn now(&mut self) -> DateTime {
        self.rtc.datetime().unwrap_or_else(|e| {
            warn!("RTC read failed ({}), using {:?}", Error::from(e), DateTime::EPOCH);
            DateTime::EPOCH
        })
    }
}

// ── RelayPort implementation ──────────────────────────────────

impl<I2C: I2c, P: OutputPin> RelayPort for HardwareAdapter<I2C, P> {
    fn set_relay(&mut self, on: bool) {
        if let Err(e) = self.relay.set(on) {
            warn!("{}", e);
        }
    }

    fn is_relay_on(&self) -> bool {
        self.relay.is_on()
    }
}
