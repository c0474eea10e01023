//! Screen modules for different views

pub mod thermostat;
