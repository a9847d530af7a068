//! Integration tests: HardwareAdapter → DS1307 / relay drivers → mock bus and pin.

use timerelay::adapters::hardware::HardwareAdapter;
use timerelay::app::events::AppEvent;
use timerelay::app::ports::{RelayPort, RtcPort};
use timerelay::app::service::RelayService;
use timerelay::clock::DateTime;
use timerelay::config::RelayConfig;
use timerelay::drivers::ds1307::Ds1307;
use timerelay::drivers::relay::RelayDriver;

use super::mock_hw::{MockBus, MockPin, RecordingSink};

fn make_hw() -> (HardwareAdapter<MockBus, MockPin>, MockBus, MockPin) {
    let bus = MockBus::new();
    let pin = MockPin::default();
    let hw = HardwareAdapter::new(Ds1307::new(bus.clone()), RelayDriver::new(pin.clone()));
    (hw, bus, pin)
}

#[test]
fn relay_pin_is_driven_low_on_construction() {
    let (hw, _bus, pin) = make_hw();
    assert!(!hw.is_relay_on());
    assert_eq!(*pin.levels.borrow(), [false]);
}

#[test]
fn set_relay_drives_the_pin() {
    let (mut hw, _bus, pin) = make_hw();
    hw.set_relay(true);
    assert!(hw.is_relay_on());
    hw.set_relay(false);
    assert_eq!(*pin.levels.borrow(), [false, true, false]);
}

#[test]
fn now_reads_the_registers() {
    let (mut hw, bus, _pin) = make_hw();
    bus.set_time(14, 5, 9);
    let t = hw.now();
    assert_eq!((t.hour, t.minute, t.second), (14, 5, 9));
    assert_eq!((t.year, t.month, t.day), (2021, 6, 30));
}

#[test]
fn unreachable_rtc_falls_back_to_epoch() {
    let (mut hw, bus, _pin) = make_hw();
    bus.present.set(false);

    assert!(!hw.begin());
    assert!(!hw.is_running());
    assert!(!hw.adjust(&DateTime::from_hms(12, 0, 0)));
    assert_eq!(hw.now(), DateTime::EPOCH);
}

#[test]
fn into_parts_hands_back_working_drivers() {
    let (mut hw, bus, _pin) = make_hw();
    bus.set_time(9, 30, 0);
    hw.set_relay(true);

    let (mut rtc, relay) = hw.into_parts();
    assert!(relay.is_on());
    assert_eq!(rtc.datetime().map(|t| t.minutes_of_day()), Ok(570));

    // The released bus still addresses the same register file.
    let released = rtc.release();
    assert_eq!(released.time_registers()[2], 0x09);
}

#[test]
fn failed_clock_set_is_not_reported() {
    let (mut hw, bus, _pin) = make_hw();
    bus.present.set(false);
    let mut sink = RecordingSink::new();
    let build = DateTime::from_unix_secs(1_625_097_599);
    let app = RelayService::start(RelayConfig::BUILTIN, Some(build), &mut hw, &mut sink);

    assert!(!app.is_halted());
    assert_eq!(
        sink.events,
        [
            AppEvent::RtcNotFound,
            AppEvent::RtcNotRunning,
            AppEvent::Started(RelayConfig::BUILTIN),
        ]
    );
}

#[test]
fn corrupt_registers_fall_back_to_epoch() {
    let (mut hw, bus, _pin) = make_hw();
    bus.set_time(12, 0, 0);
    bus.regs.borrow_mut()[1] = 0x7A; // minutes, invalid BCD
    assert_eq!(hw.now(), DateTime::EPOCH);
}

#[test]
fn adjust_writes_and_starts_the_oscillator() {
    let (mut hw, bus, _pin) = make_hw();
    bus.regs.borrow_mut()[0] = 0x80; // CH set
    assert!(!hw.is_running());

    let build = DateTime::from_unix_secs(1_625_097_599); // 2021-06-30 23:59:59, Wednesday
    assert!(hw.adjust(&build));

    assert_eq!(bus.time_registers(), [0x59, 0x59, 0x23, 0x04, 0x30, 0x06, 0x21]);
    assert!(hw.is_running());
    assert_eq!(hw.now(), build);
}

#[test]
fn full_stack_duty_cycle() {
    let (mut hw, bus, pin) = make_hw();
    let mut sink = RecordingSink::new();
    let config = RelayConfig {
        refresh_interval_ms: 15_000,
        ..RelayConfig::BUILTIN
    };
    bus.set_time(6, 0, 0);
    let mut app = RelayService::start(config, None, &mut hw, &mut sink);
    assert!(!app.is_halted());

    // Poll every 100 ms for 20 simulated minutes; the RTC advances one
    // second per second of uptime.
    let start_secs = 6 * 3600u64;
    for uptime_ms in (0..20 * 60_000u64).step_by(100) {
        let secs = start_secs + uptime_ms / 1000;
        bus.set_time((secs / 3600) as u8, ((secs / 60) % 60) as u8, (secs % 60) as u8);
        app.poll(uptime_ms, &mut hw, &mut sink);
    }

    // One evaluation every 15 s of uptime, from 0:15 up to 19:45.
    assert_eq!(app.evaluations(), 79);
    // Seeded at 06:00:15, on at 06:15, off at 06:17.
    assert_eq!(*pin.levels.borrow(), [false, true, false]);
}
