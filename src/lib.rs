//! TimeRelay firmware library.
//!
//! Exposes the pure-logic modules for host-side testing.  All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod pins;
pub mod sequencer;

pub mod adapters;
pub mod drivers;
