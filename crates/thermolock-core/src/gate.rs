//! Interception gate guarding the lock toggle

use crate::device::{ChallengeRequest, LockStatus};

/// What a toggle request turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Toggling is not permitted; nothing happens
    Ignore,
    /// Send the lock command
    Lock,
    /// Send the plain unlock command
    Unlock,
    /// Defer the unlock until a code has been entered
    Challenge,
}

impl GateDecision {
    /// Whether the decision dispatches a command straight away
    pub fn dispatches(self) -> bool {
        matches!(self, GateDecision::Lock | GateDecision::Unlock)
    }
}

/// Decide how a toggle request proceeds
///
/// Locking never needs a code. Unlocking needs one only when the device says so.
pub fn decide(toggle_allowed: bool, request: &ChallengeRequest) -> GateDecision {
    if !toggle_allowed {
        return GateDecision::Ignore;
    }

    match request.attributes.status {
        LockStatus::Unlocked => GateDecision::Lock,
        LockStatus::Locked if request.attributes.requires_code => GateDecision::Challenge,
        LockStatus::Locked => GateDecision::Unlock,
    }
}
