//! Device attributes and the collaborator traits the lock control consumes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::code::PinCode;

/// Lock state reported by the thermostat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockStatus {
    Locked,
    #[default]
    Unlocked,
}

impl LockStatus {
    pub fn is_locked(self) -> bool {
        matches!(self, LockStatus::Locked)
    }

    /// The state a toggle would move to
    pub fn toggled(self) -> Self {
        match self {
            LockStatus::Locked => LockStatus::Unlocked,
            LockStatus::Unlocked => LockStatus::Locked,
        }
    }
}

impl fmt::Display for LockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockStatus::Locked => write!(f, "Locked"),
            LockStatus::Unlocked => write!(f, "Unlocked"),
        }
    }
}

/// Attributes read from the device at decision time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceAttributes {
    /// Whether unlocking needs a code
    #[serde(default)]
    pub requires_code: bool,

    /// Current lock state
    #[serde(default)]
    pub status: LockStatus,
}

impl DeviceAttributes {
    pub fn new(status: LockStatus, requires_code: bool) -> Self {
        Self {
            requires_code,
            status,
        }
    }
}

/// A user asked to flip the lock state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeRequest {
    /// Requested lock state
    pub target: LockStatus,
    /// Device attributes observed when the request was made
    pub attributes: DeviceAttributes,
}

impl ChallengeRequest {
    /// Build a toggle request from the device's current attributes
    pub fn toggle(attributes: DeviceAttributes) -> Self {
        Self {
            target: attributes.status.toggled(),
            attributes,
        }
    }
}

/// Read-only view of the device's lock attributes
pub trait DeviceAttributeSource {
    fn attributes(&self) -> DeviceAttributes;
}

/// Read-only toggle capability
pub trait PermissionSource {
    fn toggle_allowed(&self) -> bool;
}

/// Fire-and-forget lock commands
///
/// Nothing returned by an implementation is observed by the lock control.
pub trait CommandExecutor {
    fn lock(&mut self);

    fn unlock(&mut self);

    fn unlock_with_code(&mut self, code: &PinCode);
}

impl PermissionSource for bool {
    fn toggle_allowed(&self) -> bool {
        *self
    }
}

impl DeviceAttributeSource for DeviceAttributes {
    fn attributes(&self) -> DeviceAttributes {
        *self
    }
}

impl<T: DeviceAttributeSource + ?Sized> DeviceAttributeSource for &T {
    fn attributes(&self) -> DeviceAttributes {
        (**self).attributes()
    }
}

impl<T: PermissionSource + ?Sized> PermissionSource for &T {
    fn toggle_allowed(&self) -> bool {
        (**self).toggle_allowed()
    }
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for &mut T {
    fn lock(&mut self) {
        (**self).lock();
    }

    fn unlock(&mut self) {
        (**self).unlock();
    }

    fn unlock_with_code(&mut self, code: &PinCode) {
        (**self).unlock_with_code(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_request_targets_opposite_state() {
        let locked = DeviceAttributes::new(LockStatus::Locked, true);
        assert_eq!(ChallengeRequest::toggle(locked).target, LockStatus::Unlocked);

        let unlocked = DeviceAttributes::new(LockStatus::Unlocked, true);
        assert_eq!(ChallengeRequest::toggle(unlocked).target, LockStatus::Locked);
    }

    #[test]
    fn test_blanket_sources() {
        let attrs = DeviceAttributes::new(LockStatus::Locked, false);
        let by_ref = &attrs;
        assert_eq!(by_ref.attributes(), attrs);
        assert!(true.toggle_allowed());
        assert!(!(&false).toggle_allowed());
    }
}
