//! Duty-cycle sequencer.
//!
//! Two states, one rule each:
//!
//! ```text
//!            elapsed >= period            elapsed >= active
//!   ┌─────┐ ───────────────────▶ ┌────┐ ───────────────────▶ ┌─────┐
//!   │ Off │   last_active = now  │ On │   (last_active kept) │ Off │
//!   └─────┘                      └────┘                      └─────┘
//! ```
//!
//! `elapsed` is `minute_of_day(now) - last_active` in wrapping `u16`
//! arithmetic.  The period is measured from one activation to the next,
//! never from the deactivation.
//!
//! The sequencer does no I/O.  [`Sequencer::poll`] gates on monotonic
//! uptime and only asks for the wall-clock time when a refresh window has
//! passed; [`Sequencer::evaluate`] turns one time sample into the
//! transitions the caller has to carry out.

use heapless::Vec;
use log::debug;

use crate::clock::DateTime;
use crate::config::RelayConfig;
use crate::error::ConfigError;

/// Both rules can fire in the same evaluation (only when `active_time` is 0).
pub const MAX_TRANSITIONS: usize = 2;

/// Relay output state as tracked by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayState {
    Off,
    On,
}

/// A state change the caller must apply to the relay output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Assert the output.
    Start { minute: u16 },
    /// Deassert the output.
    Stop { minute: u16 },
}

/// Result of evaluating one time sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The sampled wall-clock time.
    pub now: DateTime,
    /// `now` reduced to minute-of-day.
    pub minute: u16,
    /// Transitions in the order they must be applied.
    pub transitions: Vec<Transition, MAX_TRANSITIONS>,
    /// Previous sample's minute-of-day, when the clock went backwards
    /// since then (midnight or a clock reset).
    pub rollback_from: Option<u16>,
}

/// State retained between polls.
#[derive(Debug, Clone)]
pub struct Sequencer {
    period_min: u16,
    active_min: u16,
    refresh_interval_ms: u32,

    state: RelayState,
    /// Minute-of-day of the last activation.  Seeded by the first sample.
    last_active_minute: Option<u16>,
    /// Uptime of the last evaluation.
    last_eval_ms: u64,
    last_sample_minute: Option<u16>,
    evaluations: u64,
}

impl Sequencer {
    /// Build a sequencer for `config`, rejecting configurations where the
    /// relay would still be on when the next period begins.
    pub fn new(config: &RelayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            period_min: config.period_time_min,
            active_min: config.active_time_min,
            refresh_interval_ms: config.refresh_interval_ms,
            state: RelayState::Off,
            last_active_minute: None,
            last_eval_ms: 0,
            last_sample_minute: None,
            evaluations: 0,
        })
    }

    /// Whether a refresh window has elapsed since the last evaluation.
    ///
    /// Uptime is compared with wrapping subtraction so a counter wrap
    /// does not stall the sequencer.
    pub fn is_due(&self, uptime_ms: u64) -> bool {
        uptime_ms.wrapping_sub(self.last_eval_ms) >= u64::from(self.refresh_interval_ms)
    }

    /// One pass of the control loop.
    ///
    /// Returns `None` without calling `read_time` while inside the current
    /// refresh window.  Otherwise samples the clock once and evaluates it.
    pub fn poll(
        &mut self,
        uptime_ms: u64,
        read_time: impl FnOnce() -> DateTime,
    ) -> Option<Evaluation> {
        if !self.is_due(uptime_ms) {
            return None;
        }
        let now = read_time();
        self.last_eval_ms = uptime_ms;
        Some(self.evaluate(now))
    }

    /// Apply both transition rules to one time sample.
    pub fn evaluate(&mut self, now: DateTime) -> Evaluation {
        self.evaluations += 1;

        let minute = now.minutes_of_day();
        let rollback_from = self.last_sample_minute.filter(|&prev| minute < prev);
        self.last_sample_minute = Some(minute);

        let mut last_active = *self.last_active_minute.get_or_insert(minute);
        let mut transitions = Vec::new();

        if self.state == RelayState::Off && minute.wrapping_sub(last_active) >= self.period_min {
            self.state = RelayState::On;
            last_active = minute;
            self.last_active_minute = Some(minute);
            // Capacity covers both rules; cannot fail.
            let _ = transitions.push(Transition::Start { minute });
        }

        if self.state == RelayState::On && minute.wrapping_sub(last_active) >= self.active_min {
            self.state = RelayState::Off;
            let _ = transitions.push(Transition::Stop { minute });
        }

        debug!(
            "sequencer: minute={} last_active={} state={:?} transitions={}",
            minute,
            last_active,
            self.state,
            transitions.len()
        );

        Evaluation {
            now,
            minute,
            transitions,
            rollback_from,
        }
    }

    pub fn state(&self) -> RelayState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state == RelayState::On
    }

    /// `None` until the first sample has been evaluated.
    pub fn last_active_minute(&self) -> Option<u16> {
        self.last_active_minute
    }

    /// Number of evaluations performed (polls outside the gate do not count).
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }
}
