//! Simulated thermostat standing in for the real device connection
//!
//! The card sends commands through [`CommandSender`] without waiting for a
//! reply. The thermostat drains its queue on each UI tick and reports what
//! happened as [`DeviceEvent`]s on a separate channel.

use thermolock_core::{
    CommandExecutor, DeviceAttributeSource, DeviceAttributes, LockStatus, PinCode,
};
use tokio::sync::mpsc::{self, error::TryRecvError};

use crate::app::TuiConfig;

/// Command sent to the thermostat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCommand {
    Lock,
    Unlock,
    UnlockWithCode(PinCode),
}

/// Outcome reported by the thermostat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    Locked,
    Unlocked,
    /// A code was wrong, or missing where one is required
    CodeRejected,
}

/// Command executor that queues commands for the thermostat
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<DeviceCommand>,
}

impl CommandSender {
    fn send(&self, command: DeviceCommand) {
        if self.tx.send(command).is_err() {
            tracing::warn!("Thermostat command channel closed");
        }
    }
}

impl CommandExecutor for CommandSender {
    fn lock(&mut self) {
        self.send(DeviceCommand::Lock);
    }

    fn unlock(&mut self) {
        self.send(DeviceCommand::Unlock);
    }

    fn unlock_with_code(&mut self, code: &PinCode) {
        self.send(DeviceCommand::UnlockWithCode(code.clone()));
    }
}

/// In-memory thermostat with a lock and an optional unlock code
pub struct SimulatedThermostat {
    name: String,
    attributes: DeviceAttributes,
    accepted_code: PinCode,
    commands: mpsc::UnboundedReceiver<DeviceCommand>,
    events: mpsc::UnboundedSender<DeviceEvent>,
}

impl SimulatedThermostat {
    /// Build the thermostat from configuration
    ///
    /// Returns the device, the executor the card uses, and the event stream.
    pub fn from_config(
        config: &TuiConfig,
    ) -> thermolock_core::Result<(Self, CommandSender, mpsc::UnboundedReceiver<DeviceEvent>)> {
        let accepted_code = PinCode::parse(&config.accepted_code)?;
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let device = Self {
            name: config.device_name.clone(),
            attributes: config.initial_attributes(),
            accepted_code,
            commands: command_rx,
            events: event_tx,
        };

        Ok((device, CommandSender { tx: command_tx }, event_rx))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> LockStatus {
        self.attributes.status
    }

    pub fn requires_code(&self) -> bool {
        self.attributes.requires_code
    }

    /// Flip whether unlocking demands a code
    pub fn set_requires_code(&mut self, requires_code: bool) {
        self.attributes.requires_code = requires_code;
    }

    /// Apply every queued command; returns how many were handled
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        loop {
            match self.commands.try_recv() {
                Ok(command) => {
                    self.apply(command);
                    handled += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        handled
    }

    fn apply(&mut self, command: DeviceCommand) {
        let event = match command {
            DeviceCommand::Lock => {
                self.attributes.status = LockStatus::Locked;
                DeviceEvent::Locked
            }
            DeviceCommand::Unlock if self.attributes.requires_code => DeviceEvent::CodeRejected,
            DeviceCommand::Unlock => {
                self.attributes.status = LockStatus::Unlocked;
                DeviceEvent::Unlocked
            }
            DeviceCommand::UnlockWithCode(code) if code == self.accepted_code => {
                self.attributes.status = LockStatus::Unlocked;
                DeviceEvent::Unlocked
            }
            DeviceCommand::UnlockWithCode(_) => DeviceEvent::CodeRejected,
        };

        tracing::info!(device = %self.name, ?event, "Thermostat handled command");
        // Nobody listening is fine; the card may already be shutting down
        let _ = self.events.send(event);
    }
}

impl DeviceAttributeSource for SimulatedThermostat {
    fn attributes(&self) -> DeviceAttributes {
        self.attributes
    }
}
