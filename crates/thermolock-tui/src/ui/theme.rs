//! Card palette and the styles derived from lock and keypad state

use ratatui::style::{Color, Modifier, Style};
use thermolock_core::{EntrySession, LockStatus};

use crate::ui::components::notification::Tone;

/// Colors used by the thermostat card
#[derive(Debug, Clone)]
pub struct Theme {
    /// Titles, focused keypad, entered code slots
    pub accent: Color,
    pub locked: Color,
    pub unlocked: Color,
    /// Rejections and the keypad error flag
    pub alert: Color,
    pub notice: Color,
    pub frame: Color,
    pub text: Color,
    pub dim: Color,
    /// Keypad key background
    pub key_face: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(255, 138, 101),
            locked: Color::Rgb(255, 167, 38),
            unlocked: Color::Rgb(102, 187, 106),
            alert: Color::Rgb(239, 83, 80),
            notice: Color::Rgb(79, 195, 247),
            frame: Color::Rgb(84, 110, 122),
            text: Color::Rgb(236, 239, 241),
            dim: Color::Rgb(120, 144, 156),
            key_face: Color::Rgb(38, 50, 56),
        }
    }
}

impl Theme {
    /// Palette for `high_contrast = true`
    pub fn high_contrast() -> Self {
        Self {
            frame: Color::White,
            text: Color::White,
            dim: Color::Gray,
            key_face: Color::Black,
            ..Self::default()
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn frame(&self) -> Style {
        Style::default().fg(self.frame)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Key names in the footer
    pub fn hint_key(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn lock_status(&self, status: LockStatus) -> Style {
        let color = match status {
            LockStatus::Locked => self.locked,
            LockStatus::Unlocked => self.unlocked,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Lock button; dimmed while the card may not toggle
    pub fn lock_button(&self, allowed: bool) -> Style {
        if allowed {
            self.hint_key()
        } else {
            self.dim()
        }
    }

    /// Keypad border follows the error flag
    pub fn keypad_frame(&self, session: &EntrySession) -> Style {
        if session.error_flag() {
            self.alert()
        } else {
            Style::default().fg(self.accent)
        }
    }

    /// Code slots: alert on error, dim while empty, accent once digits exist
    pub fn code_slots(&self, session: &EntrySession) -> Style {
        if session.error_flag() {
            self.alert()
        } else if session.buffer().is_empty() {
            self.dim()
        } else {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        }
    }

    pub fn alert(&self) -> Style {
        Style::default().fg(self.alert).add_modifier(Modifier::BOLD)
    }

    /// Digit keys vs. the Clear/Close keys
    pub fn key(&self, function: bool) -> Style {
        let fg = if function { self.accent } else { self.text };
        Style::default().fg(fg).bg(self.key_face)
    }

    pub fn toast(&self, tone: Tone) -> Style {
        let color = match tone {
            Tone::Confirm => self.unlocked,
            Tone::Notice => self.notice,
            Tone::Alert => self.alert,
        };
        Style::default().fg(color).bg(self.key_face)
    }
}
