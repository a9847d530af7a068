//! Mock hardware for integration tests.
//!
//! - [`MockHardware`] implements the domain ports directly and records
//!   every call, with a scripted clock.
//! - [`MockBus`] and [`MockPin`] sit one layer lower, behind the real
//!   DS1307 and relay drivers, and share their state through `Rc` so tests
//!   can inspect and steer them while the adapter owns them.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_hal::i2c::{ErrorKind, ErrorType as I2cErrorType, I2c, NoAcknowledgeSource, Operation};
use timerelay::app::events::AppEvent;
use timerelay::app::ports::{EventSink, RelayPort, RtcPort};
use timerelay::clock::DateTime;

// ── Port-level mock ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum HwCall {
    Begin,
    IsRunning,
    Adjust(DateTime),
    Now,
    SetRelay(bool),
}

pub struct MockHardware {
    pub calls: Vec<HwCall>,
    /// Minute-of-day returned by `now()`.
    pub minute: u16,
    pub present: bool,
    pub running: bool,
    relay: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            minute: 0,
            present: true,
            running: true,
            relay: false,
        }
    }

    pub fn relay_writes(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HwCall::SetRelay(on) => Some(*on),
                _ => None,
            })
            .collect()
    }

    pub fn clock_reads(&self) -> usize {
        self.calls.iter().filter(|c| **c == HwCall::Now).count()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl RtcPort for MockHardware {
    fn begin(&mut self) -> bool {
        self.calls.push(HwCall::Begin);
        self.present
    }

    fn is_running(&mut self) -> bool {
        self.calls.push(HwCall::IsRunning);
        self.running
    }

    fn adjust(&mut self, time: &DateTime) -> bool {
        self.calls.push(HwCall::Adjust(*time));
        self.present
    }

    fn now(&mut self) -> DateTime {
        self.calls.push(HwCall::Now);
        DateTime::from_hms((self.minute / 60) as u8, (self.minute % 60) as u8, 0)
    }
}

impl RelayPort for MockHardware {
    fn set_relay(&mut self, on: bool) {
        self.calls.push(HwCall::SetRelay(on));
        self.relay = on;
    }

    fn is_relay_on(&self) -> bool {
        self.relay
    }
}

// ── Recording event sink ──────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Bus-level mocks ───────────────────────────────────────────

/// DS1307 register file on a fake I²C bus.
#[derive(Clone)]
pub struct MockBus {
    pub regs: Rc<RefCell<[u8; 64]>>,
    pub present: Rc<Cell<bool>>,
    ptr: Rc<Cell<usize>>,
}

#[allow(dead_code)]
impl MockBus {
    pub const ADDRESS: u8 = 0x68;

    pub fn new() -> Self {
        Self {
            regs: Rc::new(RefCell::new([0; 64])),
            present: Rc::new(Cell::new(true)),
            ptr: Rc::new(Cell::new(0)),
        }
    }

    /// Load a 24 h time into the time registers (date 2021-06-30).
    pub fn set_time(&self, hour: u8, minute: u8, second: u8) {
        let bcd = |v: u8| ((v / 10) << 4) | (v % 10);
        let mut regs = self.regs.borrow_mut();
        regs[..7].copy_from_slice(&[bcd(second), bcd(minute), bcd(hour), 0x04, 0x30, 0x06, 0x21]);
    }

    pub fn time_registers(&self) -> [u8; 7] {
        let mut out = [0; 7];
        out.copy_from_slice(&self.regs.borrow()[..7]);
        out
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl I2cErrorType for MockBus {
    type Error = ErrorKind;
}

impl I2c for MockBus {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if !self.present.get() || address != Self::ADDRESS {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        let mut regs = self.regs.borrow_mut();
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let Some((&reg, data)) = bytes.split_first() {
                        let mut ptr = usize::from(reg);
                        for &b in data {
                            regs[ptr % 64] = b;
                            ptr += 1;
                        }
                        self.ptr.set(ptr);
                    }
                }
                Operation::Read(buf) => {
                    let mut ptr = self.ptr.get();
                    for b in buf.iter_mut() {
                        *b = regs[ptr % 64];
                        ptr += 1;
                    }
                    self.ptr.set(ptr);
                }
            }
        }
        Ok(())
    }
}

/// Output pin that records every level written.
#[derive(Clone, Default)]
pub struct MockPin {
    pub levels: Rc<RefCell<Vec<bool>>>,
}

impl PinErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.borrow_mut().push(true);
        Ok(())
    }
}
