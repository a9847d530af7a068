//! TimeRelay Firmware — Main Entry Point
//!
//! Switches one relay on a fixed duty cycle read off a DS1307 RTC.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter            LogEventSink        UptimeClock    │
//! │  (RtcPort + RelayPort)      (EventSink)         (loop pacing)  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            RelayService (pure logic)                   │    │
//! │  │            Sequencer                                   │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, PinDriver};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::{error, info};

use timerelay::adapters::hardware::HardwareAdapter;
use timerelay::adapters::log_sink::LogEventSink;
use timerelay::adapters::time::UptimeClock;
use timerelay::app::service::RelayService;
use timerelay::config::{self, RelayConfig};
use timerelay::drivers::ds1307::Ds1307;
use timerelay::drivers::relay::RelayDriver;
use timerelay::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("TimeRelay v{}", env!("CARGO_PKG_VERSION"));

    let relay_config = RelayConfig::BUILTIN;

    // ── 2. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;

    // SAFETY: each GPIO number is claimed exactly once, here, and the
    // typed pins in `peripherals.pins` are never used.
    let (relay_pin, sda, scl) = unsafe {
        (
            AnyOutputPin::new(relay_config.output_pin),
            AnyIOPin::new(pins::I2C_SDA_GPIO),
            AnyIOPin::new(pins::I2C_SCL_GPIO),
        )
    };

    let relay = RelayDriver::new(PinDriver::output(relay_pin)?);
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        sda,
        scl,
        &I2cConfig::new().baudrate(Hertz(pins::I2C_BAUDRATE_HZ)),
    )?;

    let mut hw = HardwareAdapter::new(Ds1307::new(i2c), relay);
    let mut sink = LogEventSink::new();
    let clock = UptimeClock::new();

    // ── 3. Startup checks, clock set, config validation ───────
    let mut app = RelayService::start(relay_config, config::build_time(), &mut hw, &mut sink);

    if app.is_halted() {
        error!("Relay control disabled until the firmware is rebuilt with a valid config");
        loop {
            FreeRtos::delay_ms(1000);
        }
    }

    info!("System ready. Entering control loop.");

    // ── 4. Control loop ───────────────────────────────────────
    loop {
        app.poll(clock.uptime_ms(), &mut hw, &mut sink);
        FreeRtos::delay_ms(config::LOOP_YIELD_MS);
    }
}
