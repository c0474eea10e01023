//! Widget-side lock control: gate, entry session and collaborators in one place

use tracing::debug;

use crate::code::Digit;
use crate::device::{ChallengeRequest, CommandExecutor, DeviceAttributeSource, PermissionSource};
use crate::gate::{self, GateDecision};
use crate::session::{Effect, EntryEvent, EntrySession, Transition};

/// Owns the single entry session of a thermostat widget
///
/// All user input reaches the gate and the session through this type, so a
/// toggle either dispatches one command or opens the keypad, never both.
#[derive(Debug)]
pub struct LockControl<P, D, X> {
    permission: P,
    device: D,
    executor: X,
    session: EntrySession,
}

impl<P, D, X> LockControl<P, D, X>
where
    P: PermissionSource,
    D: DeviceAttributeSource,
    X: CommandExecutor,
{
    pub fn new(permission: P, device: D, executor: X) -> Self {
        Self {
            permission,
            device,
            executor,
            session: EntrySession::new(),
        }
    }

    /// Handle the lock toggle
    pub fn toggle(&mut self) -> GateDecision {
        let request = ChallengeRequest::toggle(self.device.attributes());
        let decision = gate::decide(self.permission.toggle_allowed(), &request);

        debug!(
            ?decision,
            status = %request.attributes.status,
            requires_code = request.attributes.requires_code,
            "Toggle intercepted"
        );

        match decision {
            GateDecision::Ignore => {}
            GateDecision::Lock => self.executor.lock(),
            GateDecision::Unlock => self.executor.unlock(),
            GateDecision::Challenge => {
                self.session.open();
            }
        }

        decision
    }

    /// Keypad digit
    pub fn press_digit(&mut self, digit: Digit) -> Transition {
        self.apply(EntryEvent::Digit(digit))
    }

    /// Keypad clear
    pub fn clear(&mut self) -> Transition {
        self.apply(EntryEvent::Clear)
    }

    /// Backdrop or close button
    pub fn dismiss(&mut self) -> Transition {
        self.apply(EntryEvent::Dismiss)
    }

    fn apply(&mut self, event: EntryEvent) -> Transition {
        let transition = self.session.handle(event);

        if let Some(Effect::Submit(code)) = &transition.effect {
            debug!("Code complete, dispatching unlock");
            self.executor.unlock_with_code(code);
        }

        transition
    }

    pub fn session(&self) -> &EntrySession {
        &self.session
    }

    pub fn permission(&self) -> &P {
        &self.permission
    }

    pub fn permission_mut(&mut self) -> &mut P {
        &mut self.permission
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn executor(&self) -> &X {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut X {
        &mut self.executor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::PinCode;
    use crate::device::{DeviceAttributes, LockStatus};
    use crate::session::EntryState;

    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl CommandExecutor for Recorder {
        fn lock(&mut self) {
            self.calls.push("lock".into());
        }

        fn unlock(&mut self) {
            self.calls.push("unlock".into());
        }

        fn unlock_with_code(&mut self, code: &PinCode) {
            self.calls.push(format!("unlock:{}", code.as_str()));
        }
    }

    fn control(
        status: LockStatus,
        requires_code: bool,
    ) -> LockControl<bool, DeviceAttributes, Recorder> {
        LockControl::new(
            true,
            DeviceAttributes::new(status, requires_code),
            Recorder::default(),
        )
    }

    fn d(c: char) -> Digit {
        Digit::try_from(c).unwrap()
    }

    #[test]
    fn test_challenge_defers_command() {
        let mut control = control(LockStatus::Locked, true);
        assert_eq!(control.toggle(), GateDecision::Challenge);
        assert!(control.session().visible());
        assert!(control.executor().calls.is_empty());
    }

    #[test]
    fn test_no_permission_does_nothing() {
        let mut control = control(LockStatus::Locked, true);
        *control.permission_mut() = false;
        assert_eq!(control.toggle(), GateDecision::Ignore);
        assert!(!control.session().visible());
        assert!(control.executor().calls.is_empty());
    }

    #[test]
    fn test_full_code_dispatches_once() {
        let mut control = control(LockStatus::Locked, true);
        control.toggle();
        for c in "4821".chars() {
            control.press_digit(d(c));
        }
        assert_eq!(control.executor().calls, vec!["unlock:4821"]);
        assert_eq!(control.session().state(), EntryState::Closed);

        // Session is closed, further digits go nowhere
        control.press_digit(d('1'));
        assert_eq!(control.executor().calls.len(), 1);
    }

    #[test]
    fn test_dismiss_dispatches_nothing() {
        let mut control = control(LockStatus::Locked, true);
        control.toggle();
        control.press_digit(d('1'));
        control.press_digit(d('2'));
        control.dismiss();
        assert!(control.executor().calls.is_empty());
        assert!(!control.session().visible());
    }

    #[test]
    fn test_device_state_is_read_at_toggle_time() {
        let mut control = control(LockStatus::Locked, false);
        assert_eq!(control.toggle(), GateDecision::Unlock);

        control.device_mut().status = LockStatus::Unlocked;
        assert_eq!(control.toggle(), GateDecision::Lock);
        assert_eq!(control.executor().calls, vec!["unlock", "lock"]);
    }
}
