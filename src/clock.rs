//! Wall-clock values and minute-of-day arithmetic.
//!
//! [`DateTime`] is what the RTC hands back.  The sequencer only ever looks
//! at hour and minute, reduced to a single minute-of-day count by
//! [`minutes_of_day`].

use core::fmt;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: u16 = 60;

/// Minutes in one day; every minute-of-day value is below this.
pub const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

const SECS_PER_DAY: u64 = 86_400;

/// Calendar date and time of day, as kept by an RTC chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

impl DateTime {
    /// 2000-01-01 00:00:00, the start of the DS1307 calendar.  Reported
    /// whenever the clock cannot be read.
    pub const EPOCH: Self = Self {
        year: 2000,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Time-of-day only, on the epoch date.  Handy for simulated clocks.
    pub const fn from_hms(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            ..Self::EPOCH
        }
    }

    /// Convert seconds since 1970-01-01 into a calendar value.
    ///
    /// Uses the days-to-civil algorithm (proleptic Gregorian calendar).
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = secs / SECS_PER_DAY;
        let rem = secs % SECS_PER_DAY;

        // Shift the epoch to 0000-03-01 so leap days fall at the end of
        // each 400-year era.
        let z = days as i64 + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);

        Self {
            year: year as u16,
            month: month as u8,
            day: day as u8,
            hour: (rem / 3600) as u8,
            minute: ((rem % 3600) / 60) as u8,
            second: (rem % 60) as u8,
        }
    }

    /// Minute-of-day for this timestamp.
    pub fn minutes_of_day(&self) -> u16 {
        minutes_of_day(self)
    }

    /// Day of the week, 0 = Sunday (Sakamoto's method).
    pub fn day_of_week(&self) -> u8 {
        const MONTH_OFFSET: [u16; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let y = if self.month < 3 { self.year.saturating_sub(1) } else { self.year };
        let m = usize::from(self.month.clamp(1, 12) - 1);
        ((y + y / 4 - y / 100 + y / 400 + MONTH_OFFSET[m] + u16::from(self.day)) % 7) as u8
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::EPOCH
    }
}

/// `H:M:S`, unpadded, the way the serial console has always shown it.
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hour, self.minute, self.second)
    }
}

/// Reduce a timestamp to minutes since midnight (`hour * 60 + minute`).
///
/// Inputs are trusted: the RTC driver has already range-checked them.
pub fn minutes_of_day(time: &DateTime) -> u16 {
    u16::from(time.hour) * MINUTES_PER_HOUR + u16::from(time.minute)
}

/// `true` iff `start <= current < end`, compared as minute-of-day.
///
/// Does not wrap past midnight: an interval with `end <= start` contains
/// nothing.
pub fn is_in_range(current: &DateTime, start: &DateTime, end: &DateTime) -> bool {
    let current = minutes_of_day(current);
    let start = minutes_of_day(start);
    let end = minutes_of_day(end);

    current >= start && current < end
}
