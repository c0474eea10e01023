//! Thermolock Core - lock interception and PIN keypad state machine
//!
//! A thermostat widget routes its lock toggle through [`LockControl`]. The
//! gate in [`gate`] decides whether the toggle dispatches a command directly
//! or opens an [`EntrySession`]; the session collects a [`CODE_LENGTH`]-digit
//! code and hands it to the [`CommandExecutor`] once complete.

pub mod code;
pub mod control;
pub mod device;
pub mod error;
pub mod gate;
pub mod session;

pub use code::{Digit, DigitBuffer, PinCode, CODE_LENGTH};
pub use control::LockControl;
pub use device::{
    ChallengeRequest, CommandExecutor, DeviceAttributeSource, DeviceAttributes, LockStatus,
    PermissionSource,
};
pub use error::{Error, Result};
pub use gate::{decide, GateDecision};
pub use session::{Effect, EntryEvent, EntrySession, EntryState, Transition};
