//! Reusable UI components

pub mod keypad;
pub mod notification;
pub mod status_bar;
