//! Unified error types for the TimeRelay firmware.
//!
//! One `Error` enum that every subsystem converts into.  All variants are
//! `Copy` so they can be logged and passed around without allocation.

use core::fmt;

use embedded_hal::i2c::ErrorKind;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible hardware operation funnels into this type.  Configuration
/// errors are checked once at startup and stay [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The real-time clock could not be reached or returned garbage.
    Rtc(RtcError),
    /// The relay output pin rejected a write.
    Relay,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rtc(e) => write!(f, "rtc: {e}"),
            Self::Relay => write!(f, "relay: GPIO write failed"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// RTC errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcError {
    /// The I²C transaction failed (NACK, arbitration loss, bus fault).
    Bus(ErrorKind),
    /// Registers decoded to an impossible date or time.
    InvalidData,
}

impl fmt::Display for RtcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(kind) => write!(f, "I2C bus error ({kind:?})"),
            Self::InvalidData => write!(f, "invalid register contents"),
        }
    }
}

impl From<RtcError> for Error {
    fn from(e: RtcError) -> Self {
        Self::Rtc(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The relay would still be on when the next period begins.
    ActiveNotShorterThanPeriod { active_min: u16, period_min: u16 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActiveNotShorterThanPeriod {
                active_min,
                period_min,
            } => write!(
                f,
                "active time ({active_min} min) must be shorter than period time ({period_min} min)"
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
