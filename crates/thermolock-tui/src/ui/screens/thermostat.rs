//! Thermostat card with its lock control

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use thermolock_core::LockStatus;

use crate::app::AppState;
use crate::ui::layout::centered_rect;

/// Draw the thermostat card
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let device = state.control.device();
    let allowed = *state.control.permission();

    let card = centered_rect(60, 70, area);

    let block = Block::default()
        .title(format!(" {} ", device.name()))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.frame());

    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Lock status
            Constraint::Length(1), // Code requirement
            Constraint::Length(1), // Permission
            Constraint::Min(1),    // Spacer
            Constraint::Length(1), // Lock button
        ])
        .split(inner);

    let icon = match device.status() {
        LockStatus::Locked => "🔒",
        LockStatus::Unlocked => "🔓",
    };
    let status = Paragraph::new(format!("{} {}", icon, device.status()))
        .style(theme.lock_status(device.status()))
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[0]);

    let code_line = if device.requires_code() {
        "Unlock requires a code"
    } else {
        "Unlock does not require a code"
    };
    frame.render_widget(
        Paragraph::new(code_line)
            .style(theme.secondary())
            .alignment(Alignment::Center),
        chunks[1],
    );

    let (permission_line, permission_style) = if allowed {
        ("Lock control enabled", theme.secondary())
    } else {
        ("Lock control disabled", theme.dim())
    };
    frame.render_widget(
        Paragraph::new(permission_line)
            .style(permission_style)
            .alignment(Alignment::Center),
        chunks[2],
    );

    let button_label = match device.status() {
        LockStatus::Locked => "[ Unlock ]",
        LockStatus::Unlocked => "[ Lock ]",
    };
    frame.render_widget(
        Paragraph::new(button_label)
            .style(theme.lock_button(allowed))
            .alignment(Alignment::Center),
        chunks[4],
    );
}
