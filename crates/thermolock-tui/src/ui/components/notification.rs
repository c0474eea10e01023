//! Toasts reporting what the thermostat and the card just did

use std::collections::VecDeque;

use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::device::DeviceEvent;
use crate::ui::Theme;

/// Toasts on screen at once; the oldest is dropped first
pub const MAX_TOASTS: usize = 3;

/// How a toast is styled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// The thermostat did what was asked
    Confirm,
    /// A card setting changed
    Notice,
    /// Something was refused
    Alert,
}

impl Tone {
    fn icon(self) -> &'static str {
        match self {
            Tone::Confirm => "✓",
            Tone::Notice => "•",
            Tone::Alert => "✗",
        }
    }

    /// Lifetime in UI ticks
    fn lifetime(self) -> u16 {
        match self {
            Tone::Confirm => 30,
            Tone::Notice => 40,
            Tone::Alert => 60,
        }
    }
}

/// Something worth telling the user about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toast {
    Locked,
    Unlocked,
    CodeRejected,
    /// Toggle pressed while lock control is not permitted
    ControlBlocked,
    ControlAllowed(bool),
    CodeRequired(bool),
}

impl Toast {
    pub fn message(self) -> &'static str {
        match self {
            Toast::Locked => "Thermostat locked",
            Toast::Unlocked => "Thermostat unlocked",
            Toast::CodeRejected => "Incorrect code",
            Toast::ControlBlocked => "Lock control is not permitted",
            Toast::ControlAllowed(true) => "Lock control enabled",
            Toast::ControlAllowed(false) => "Lock control disabled",
            Toast::CodeRequired(true) => "Unlock now requires a code",
            Toast::CodeRequired(false) => "Unlock no longer requires a code",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Toast::Locked | Toast::Unlocked => Tone::Confirm,
            Toast::ControlAllowed(_) | Toast::CodeRequired(_) => Tone::Notice,
            Toast::CodeRejected | Toast::ControlBlocked => Tone::Alert,
        }
    }
}

impl From<&DeviceEvent> for Toast {
    fn from(event: &DeviceEvent) -> Self {
        match event {
            DeviceEvent::Locked => Toast::Locked,
            DeviceEvent::Unlocked => Toast::Unlocked,
            DeviceEvent::CodeRejected => Toast::CodeRejected,
        }
    }
}

/// Active toasts with the ticks each has left, oldest first
#[derive(Debug, Default)]
pub struct Toasts {
    active: VecDeque<(Toast, u16)>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        tracing::debug!(?toast, "Toast");
        if self.active.len() == MAX_TOASTS {
            self.active.pop_front();
        }
        self.active.push_back((toast, toast.tone().lifetime()));
    }

    /// Age every toast by one tick and drop the expired ones
    pub fn tick(&mut self) {
        for (_, ticks_left) in self.active.iter_mut() {
            *ticks_left = ticks_left.saturating_sub(1);
        }
        self.active.retain(|(_, ticks_left)| *ticks_left > 0);
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn latest(&self) -> Option<Toast> {
        self.active.back().map(|(toast, _)| *toast)
    }
}

/// Draw toasts as one-line strips in the top-right corner, newest on top
pub fn render(frame: &mut Frame, area: Rect, toasts: &Toasts, theme: &Theme) {
    for (row, (toast, _)) in toasts.active.iter().rev().enumerate() {
        let row = row as u16;
        if row >= area.height {
            break;
        }

        let text = format!(" {} {} ", toast.tone().icon(), toast.message());
        let width = (text.chars().count() as u16).min(area.width);
        let strip = Rect::new(area.x + area.width - width, area.y + row, width, 1);

        frame.render_widget(Clear, strip);
        frame.render_widget(Paragraph::new(text).style(theme.toast(toast.tone())), strip);
    }
}
