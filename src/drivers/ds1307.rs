//! DS1307 real-time clock driver (I²C, blocking).
//!
//! Register map (all BCD):
//!
//! | Reg  | Contents                                   |
//! |------|--------------------------------------------|
//! | 0x00 | bit 7 CH (clock halt), seconds 00-59       |
//! | 0x01 | minutes 00-59                              |
//! | 0x02 | bit 6 12/24, bit 5 PM in 12 h mode, hours  |
//! | 0x03 | day of week 1-7                            |
//! | 0x04 | date 01-31                                 |
//! | 0x05 | month 01-12                                |
//! | 0x06 | year 00-99 (2000-2099)                     |
//!
//! The driver is generic over [`embedded_hal::i2c::I2c`], so it runs on the
//! ESP-IDF I²C driver in firmware and on a register-file mock in tests.

use embedded_hal::i2c::{Error as _, I2c};

use crate::clock::DateTime;
use crate::error::RtcError;

/// Fixed 7-bit bus address.
pub const ADDRESS: u8 = 0x68;

const REG_SECONDS: u8 = 0x00;
const TIME_REGISTERS: usize = 7;

const CLOCK_HALT: u8 = 0b1000_0000;
const HOUR_MODE_12H: u8 = 0b0100_0000;
const HOUR_PM: u8 = 0b0010_0000;

const BASE_YEAR: u16 = 2000;

pub struct Ds1307<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Ds1307<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Check that the chip acknowledges a register read.
    pub fn probe(&mut self) -> Result<(), RtcError> {
        let mut buf = [0u8; 1];
        self.read_registers(REG_SECONDS, &mut buf)
    }

    /// `true` while the oscillator runs (CH bit clear).
    pub fn is_running(&mut self) -> Result<bool, RtcError> {
        let mut buf = [0u8; 1];
        self.read_registers(REG_SECONDS, &mut buf)?;
        Ok(buf[0] & CLOCK_HALT == 0)
    }

    /// Read the current date and time.
    pub fn datetime(&mut self) -> Result<DateTime, RtcError> {
        let mut regs = [0u8; TIME_REGISTERS];
        self.read_registers(REG_SECONDS, &mut regs)?;
        decode(&regs)
    }

    /// Set the date and time.  Starts the oscillator and selects 24 h mode.
    pub fn set_datetime(&mut self, time: &DateTime) -> Result<(), RtcError> {
        let regs = encode(time)?;
        let mut frame = [0u8; TIME_REGISTERS + 1];
        frame[0] = REG_SECONDS;
        frame[1..].copy_from_slice(&regs);
        self.i2c
            .write(ADDRESS, &frame)
            .map_err(|e| RtcError::Bus(e.kind()))
    }

    fn read_registers(&mut self, start: u8, buf: &mut [u8]) -> Result<(), RtcError> {
        self.i2c
            .write_read(ADDRESS, &[start], buf)
            .map_err(|e| RtcError::Bus(e.kind()))
    }
}

// ── Register codec ────────────────────────────────────────────

fn bcd_to_bin(bcd: u8) -> Result<u8, RtcError> {
    let (hi, lo) = (bcd >> 4, bcd & 0x0F);
    if hi > 9 || lo > 9 {
        return Err(RtcError::InvalidData);
    }
    Ok(hi * 10 + lo)
}

fn bin_to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

fn decode(regs: &[u8; TIME_REGISTERS]) -> Result<DateTime, RtcError> {
    let second = bcd_to_bin(regs[0] & !CLOCK_HALT)?;
    let minute = bcd_to_bin(regs[1] & 0x7F)?;

    let hour_reg = regs[2];
    let hour = if hour_reg & HOUR_MODE_12H != 0 {
        let h12 = bcd_to_bin(hour_reg & 0x1F)?;
        if !(1..=12).contains(&h12) {
            return Err(RtcError::InvalidData);
        }
        let pm = if hour_reg & HOUR_PM != 0 { 12 } else { 0 };
        h12 % 12 + pm
    } else {
        bcd_to_bin(hour_reg & 0x3F)?
    };

    // regs[3] is the day of week; derived from the date instead.
    let day = bcd_to_bin(regs[4] & 0x3F)?;
    let month = bcd_to_bin(regs[5] & 0x1F)?;
    let year = BASE_YEAR + u16::from(bcd_to_bin(regs[6])?);

    if second > 59 || minute > 59 || hour > 23 || !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(RtcError::InvalidData);
    }

    Ok(DateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

fn encode(time: &DateTime) -> Result<[u8; TIME_REGISTERS], RtcError> {
    if !(BASE_YEAR..BASE_YEAR + 100).contains(&time.year)
        || !(1..=12).contains(&time.month)
        || !(1..=31).contains(&time.day)
        || time.hour > 23
        || time.minute > 59
        || time.second > 59
    {
        return Err(RtcError::InvalidData);
    }

    Ok([
        bin_to_bcd(time.second), // CH = 0
        bin_to_bcd(time.minute),
        bin_to_bcd(time.hour), // 24 h mode
        time.day_of_week() + 1,
        bin_to_bcd(time.day),
        bin_to_bcd(time.month),
        bin_to_bcd((time.year - BASE_YEAR) as u8),
    ])
}
