//! Application core — pure domain logic, zero I/O.
//!
//! The relay sequencing rules live in [`crate::sequencer`]; this module
//! wires them to the outside world.  All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
