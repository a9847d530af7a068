//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RelayService (domain)
//! ```
//!
//! Driven adapters (RTC, relay output, event sinks) implement these traits.
//! The [`RelayService`](super::service::RelayService) consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! Ports never return errors to the domain: adapters log their own
//! failures and fall back to a safe value or report `false`.  Nothing is
//! retried.

use crate::clock::DateTime;

// ───────────────────────────────────────────────────────────────
// RTC port (driven adapter: hardware clock ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Real-time clock the domain samples and sets.
pub trait RtcPort {
    /// Bring up the clock.  `false` if the chip did not respond.
    fn begin(&mut self) -> bool;

    /// Whether the oscillator is running.
    fn is_running(&mut self) -> bool;

    /// Set the clock.  `false` if the write did not reach the chip.
    fn adjust(&mut self, time: &DateTime) -> bool;

    /// Current time.  Adapters return [`DateTime::EPOCH`] when the read fails.
    fn now(&mut self) -> DateTime;
}

// ───────────────────────────────────────────────────────────────
// Relay port (driven adapter: domain → GPIO)
// ───────────────────────────────────────────────────────────────

/// The single digital output the controller drives.  The pin is put in
/// output mode, driven low, when the adapter is constructed.
pub trait RelayPort {
    /// Drive the output HIGH (`true`) or LOW (`false`).
    fn set_relay(&mut self, on: bool);

    /// Last level successfully written.
    fn is_relay_on(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Delivery is best effort.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
