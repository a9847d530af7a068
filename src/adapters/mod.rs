//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements          | Connects to                |
//! |------------|---------------------|----------------------------|
//! | `hardware` | RtcPort, RelayPort  | DS1307 over I²C, relay GPIO |
//! | `log_sink` | EventSink           | Serial log output          |
//! | `time`     | —                   | ESP32 system timer (uptime) |

pub mod hardware;
pub mod log_sink;
pub mod time;
