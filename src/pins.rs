//! GPIO / peripheral pin assignments for the TimeRelay board.
//!
//! Single source of truth — drivers and `main` reference this module rather
//! than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Relay
// ---------------------------------------------------------------------------

/// Digital output to the relay driver transistor.  HIGH = relay energised.
pub const RELAY_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// I²C bus (DS1307 RTC module)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 8;
pub const I2C_SCL_GPIO: i32 = 9;

/// DS1307 only supports standard mode.
pub const I2C_BAUDRATE_HZ: u32 = 100_000;
