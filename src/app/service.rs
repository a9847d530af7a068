//! Application service — the hexagonal core.
//!
//! [`RelayService`] owns the [`Sequencer`] and runs the startup checks.
//! All I/O flows through port traits injected at call sites, making the
//! whole service testable with mock adapters.
//!
//! ```text
//!  RtcPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!              │      RelayService      │
//! RelayPort ◀──│       Sequencer        │
//!              └────────────────────────┘
//! ```

use crate::clock::DateTime;
use crate::config::RelayConfig;
use crate::error::ConfigError;
use crate::sequencer::{RelayState, Sequencer, Transition};

use super::events::AppEvent;
use super::ports::{EventSink, RelayPort, RtcPort};

enum Mode {
    Running(Sequencer),
    /// Startup found an invalid configuration.  Terminal.
    Halted(ConfigError),
}

/// The application service orchestrates all domain logic.
pub struct RelayService {
    mode: Mode,
}

impl RelayService {
    /// Run the startup sequence and construct the service.
    ///
    /// 1. Bring up the RTC; a missing chip is reported, not fatal.
    /// 2. Report a halted oscillator, not fatal either.
    /// 3. Set the clock to `build_time` when one is supplied; `ClockSet`
    ///    is only reported when the write succeeded.
    /// 4. Validate the configuration.  An invalid one halts the service
    ///    for good: every later [`poll`](Self::poll) is a no-op.
    pub fn start(
        config: RelayConfig,
        build_time: Option<DateTime>,
        hw: &mut impl RtcPort,
        sink: &mut impl EventSink,
    ) -> Self {
        if !hw.begin() {
            sink.emit(&AppEvent::RtcNotFound);
        }

        if !hw.is_running() {
            sink.emit(&AppEvent::RtcNotRunning);
        }

        if let Some(time) = build_time {
            if hw.adjust(&time) {
                sink.emit(&AppEvent::ClockSet(time));
            }
        }

        let mode = match Sequencer::new(&config) {
            Ok(seq) => {
                sink.emit(&AppEvent::Started(config));
                Mode::Running(seq)
            }
            Err(e) => {
                sink.emit(&AppEvent::ConfigInvalid(e));
                Mode::Halted(e)
            }
        };

        Self { mode }
    }

    // ── Per-poll orchestration ────────────────────────────────

    /// Run one pass of the control loop.
    ///
    /// Inside the refresh window this touches nothing: no RTC read, no
    /// relay write, no event.  Returns `true` when an evaluation happened.
    ///
    /// The `hw` parameter satisfies **both** [`RtcPort`] and [`RelayPort`].
    pub fn poll(
        &mut self,
        uptime_ms: u64,
        hw: &mut (impl RtcPort + RelayPort),
        sink: &mut impl EventSink,
    ) -> bool {
        let Mode::Running(seq) = &mut self.mode else {
            return false;
        };

        let Some(eval) = seq.poll(uptime_ms, || hw.now()) else {
            return false;
        };

        sink.emit(&AppEvent::Sample(eval.now));

        if let Some(from_minute) = eval.rollback_from {
            sink.emit(&AppEvent::ClockRollback {
                from_minute,
                to_minute: eval.minute,
            });
        }

        for transition in &eval.transitions {
            match *transition {
                Transition::Start { minute } => {
                    sink.emit(&AppEvent::RelayStarted { minute });
                    hw.set_relay(true);
                }
                Transition::Stop { minute } => {
                    sink.emit(&AppEvent::RelayStopped { minute });
                    hw.set_relay(false);
                }
            }
        }

        true
    }

    // ── Queries ───────────────────────────────────────────────

    /// Sequencer state; a halted service always reports `Off`.
    pub fn state(&self) -> RelayState {
        match &self.mode {
            Mode::Running(seq) => seq.state(),
            Mode::Halted(_) => RelayState::Off,
        }
    }

    pub fn is_halted(&self) -> bool {
        matches!(self.mode, Mode::Halted(_))
    }

    /// The configuration error that halted the service, if any.
    pub fn halt_reason(&self) -> Option<ConfigError> {
        match self.mode {
            Mode::Halted(e) => Some(e),
            Mode::Running(_) => None,
        }
    }

    /// Evaluations performed since startup.
    pub fn evaluations(&self) -> u64 {
        match &self.mode {
            Mode::Running(seq) => seq.evaluations(),
            Mode::Halted(_) => 0,
        }
    }
}
