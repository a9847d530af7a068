//! Relay output driver.
//!
//! A relay module on one digital output, HIGH = energised.  Generic over
//! [`embedded_hal::digital::OutputPin`]: an ESP-IDF `PinDriver` in firmware,
//! a recording pin in tests.
//!
//! The pin is driven low as soon as the driver takes ownership, so the
//! relay never floats between reset and the first sequencer decision.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutput {
    Released,
    Energised,
}

pub struct RelayDriver<P> {
    pin: P,
    output: RelayOutput,
}

impl<P: OutputPin> RelayDriver<P> {
    pub fn new(mut pin: P) -> Self {
        if pin.set_low().is_err() {
            warn!("relay: initial set_low failed");
        }
        Self {
            pin,
            output: RelayOutput::Released,
        }
    }

    /// Drive the coil.  The tracked state only changes when the write succeeds.
    pub fn set(&mut self, on: bool) -> Result<()> {
        let res = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|_| Error::Relay)?;

        self.output = if on {
            RelayOutput::Energised
        } else {
            RelayOutput::Released
        };
        Ok(())
    }

    pub fn output(&self) -> RelayOutput {
        self.output
    }

    pub fn is_on(&self) -> bool {
        self.output == RelayOutput::Energised
    }
}
