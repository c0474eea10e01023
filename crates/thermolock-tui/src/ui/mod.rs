//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::{hints, AppState};
use components::{keypad, notification, status_bar};
use layout::ScreenLayout;

/// Main render function: card, keypad overlay, toasts
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let layout = ScreenLayout::new(area);

    screens::thermostat::render(frame, layout.content, state);
    keypad::render(frame, layout.content, state.control.session(), &state.theme);
    notification::render(frame, layout.content, &state.toasts, &state.theme);

    status_bar::render_help_footer(
        frame,
        layout.footer,
        hints(state.keypad_open()),
        &state.theme,
    );
}
