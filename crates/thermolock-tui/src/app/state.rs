//! Application state

use std::path::PathBuf;

use thermolock_core::{GateDecision, LockControl};
use tokio::sync::mpsc;

use super::{Action, TuiConfig};
use crate::device::{CommandSender, DeviceEvent, SimulatedThermostat};
use crate::ui::components::notification::{Toast, Toasts};
use crate::ui::Theme;

/// Lock control wired to the simulated thermostat
pub type CardControl = LockControl<bool, SimulatedThermostat, CommandSender>;

/// Application state
pub struct AppState {
    /// Gate, keypad session and thermostat
    pub control: CardControl,

    /// Outcomes reported by the thermostat
    pub device_events: mpsc::UnboundedReceiver<DeviceEvent>,

    /// Active toasts
    pub toasts: Toasts,

    /// Color palette
    pub theme: Theme,

    /// Settings as last loaded or changed from the card
    config: TuiConfig,

    /// Where setting changes are written; `None` keeps them in memory
    config_path: Option<PathBuf>,
}

impl AppState {
    /// Create state from configuration
    pub fn from_config(config: &TuiConfig) -> thermolock_core::Result<Self> {
        let (device, sender, device_events) = SimulatedThermostat::from_config(config)?;
        let theme = if config.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::default()
        };

        Ok(Self {
            control: LockControl::new(config.toggle_allowed, device, sender),
            device_events,
            toasts: Toasts::new(),
            theme,
            config: config.clone(),
            config_path: None,
        })
    }

    /// Write setting changes made on the card to `path`
    pub fn persist_to(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    fn save_config(&self) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = self.config.save_to(path) {
            tracing::warn!("Failed to save config: {}", e);
        }
    }

    /// Whether the keypad modal is showing
    pub fn keypad_open(&self) -> bool {
        self.control.session().visible()
    }

    /// Apply a user action. [`Action::Quit`] is left to the caller.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ToggleLock => {
                if self.control.toggle() == GateDecision::Ignore {
                    self.toasts.push(Toast::ControlBlocked);
                }
            }
            Action::Digit(digit) => {
                self.control.press_digit(digit);
            }
            Action::Clear => {
                self.control.clear();
            }
            Action::Dismiss => {
                self.control.dismiss();
            }
            Action::TogglePermission => {
                let allowed = self.control.permission_mut();
                *allowed = !*allowed;
                let allowed = *allowed;

                self.config.toggle_allowed = allowed;
                self.save_config();
                self.toasts.push(Toast::ControlAllowed(allowed));
            }
            Action::ToggleRequiresCode => {
                let device = self.control.device_mut();
                let requires_code = !device.requires_code();
                device.set_requires_code(requires_code);

                self.config.requires_code = requires_code;
                self.save_config();
                self.toasts.push(Toast::CodeRequired(requires_code));
            }
            Action::Quit => {}
        }
    }

    /// Advance one UI tick: let the thermostat work and surface its events
    pub fn tick(&mut self) {
        self.control.device_mut().process_pending();

        while let Ok(event) = self.device_events.try_recv() {
            self.toasts.push(Toast::from(&event));
        }

        self.toasts.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use thermolock_core::{Digit, LockStatus};

    fn state(status: LockStatus, requires_code: bool) -> AppState {
        let config = TuiConfig {
            initial_status: status,
            requires_code,
            accepted_code: "1234".to_string(),
            ..TuiConfig::default()
        };
        AppState::from_config(&config).unwrap()
    }

    fn enter(state: &mut AppState, code: &str) {
        for c in code.chars() {
            state.apply(Action::Digit(Digit::try_from(c).unwrap()));
        }
    }

    #[test]
    fn test_correct_code_unlocks_thermostat() {
        let mut state = state(LockStatus::Locked, true);
        state.apply(Action::ToggleLock);
        assert!(state.keypad_open());

        enter(&mut state, "1234");
        assert!(!state.keypad_open());

        state.tick();
        assert_eq!(state.control.device().status(), LockStatus::Unlocked);
        assert_eq!(state.toasts.latest(), Some(Toast::Unlocked));
    }

    #[test]
    fn test_wrong_code_notifies_without_reopening() {
        let mut state = state(LockStatus::Locked, true);
        state.apply(Action::ToggleLock);
        enter(&mut state, "9999");
        state.tick();

        assert!(!state.keypad_open());
        assert_eq!(state.control.device().status(), LockStatus::Locked);
        assert_eq!(state.toasts.latest(), Some(Toast::CodeRejected));
    }

    #[test]
    fn test_lock_round_trip_without_code() {
        let mut state = state(LockStatus::Unlocked, false);
        state.apply(Action::ToggleLock);
        state.tick();
        assert_eq!(state.control.device().status(), LockStatus::Locked);

        state.apply(Action::ToggleLock);
        assert!(!state.keypad_open());
        state.tick();
        assert_eq!(state.control.device().status(), LockStatus::Unlocked);
    }

    #[test]
    fn test_permission_toggle_blocks_lock() {
        let mut state = state(LockStatus::Unlocked, false);
        state.apply(Action::TogglePermission);
        state.apply(Action::ToggleLock);
        state.tick();

        assert_eq!(state.control.device().status(), LockStatus::Unlocked);
        assert!(!state.keypad_open());
    }

    #[test]
    fn test_requires_code_toggle_changes_gate() {
        let mut state = state(LockStatus::Locked, false);
        state.apply(Action::ToggleRequiresCode);
        state.apply(Action::ToggleLock);
        assert!(state.keypad_open());

        state.apply(Action::Dismiss);
        assert!(!state.keypad_open());
    }

    #[test]
    fn test_setting_toggles_are_saved() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("thermolock").join("config.json");
        let mut state = state(LockStatus::Locked, true).persist_to(Some(path.clone()));

        state.apply(Action::ToggleRequiresCode);
        state.apply(Action::TogglePermission);

        let saved = TuiConfig::load_from(&path);
        assert!(!saved.requires_code);
        assert!(!saved.toggle_allowed);
        assert_eq!(saved.accepted_code, "1234");
        assert_eq!(&saved, state.config());
    }

    #[test]
    fn test_settings_stay_in_memory_without_path() {
        let mut state = state(LockStatus::Locked, true);
        state.apply(Action::ToggleRequiresCode);

        assert!(!state.config().requires_code);
        assert_eq!(state.toasts.latest(), Some(Toast::CodeRequired(false)));
    }

    #[test]
    fn test_failed_save_keeps_running() {
        let temp_dir = tempdir().unwrap();
        // A directory where the file should be makes the write fail
        let path = temp_dir.path().to_path_buf();
        let mut state = state(LockStatus::Locked, true).persist_to(Some(path));

        state.apply(Action::TogglePermission);
        assert!(!*state.control.permission());
        assert_eq!(state.toasts.latest(), Some(Toast::ControlAllowed(false)));
    }
}
