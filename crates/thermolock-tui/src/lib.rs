//! Thermolock TUI Library
//!
//! A terminal thermostat card whose lock toggle is guarded by a PIN keypad,
//! backed by a simulated thermostat.

pub mod app;
pub mod device;
pub mod ui;

pub use app::{App, TuiConfig};
