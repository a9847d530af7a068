//! Peripheral drivers: the DS1307 clock and the relay output.

pub mod ds1307;
pub mod relay;
