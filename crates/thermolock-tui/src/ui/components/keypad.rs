//! Keypad modal for entering an unlock code
//!
//! Rendering reads only the session's visibility, buffer length and error
//! flag; the digits themselves are never drawn.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use thermolock_core::{EntrySession, CODE_LENGTH};

use crate::ui::layout::centered_fixed;
use crate::ui::Theme;

const MODAL_WIDTH: u16 = 32;
const MODAL_HEIGHT: u16 = 17;

/// Keypad rows as drawn, top to bottom
pub const KEY_ROWS: [[&str; 3]; 4] = [
    ["1", "2", "3"],
    ["4", "5", "6"],
    ["7", "8", "9"],
    ["Clear", "0", "Close"],
];

/// Masked code display: one filled dot per entered digit
pub fn code_slots(entered: usize) -> String {
    (0..CODE_LENGTH)
        .map(|i| if i < entered { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the keypad over `area` if the session is visible
pub fn render(frame: &mut Frame, area: Rect, session: &EntrySession, theme: &Theme) {
    if !session.visible() {
        return;
    }

    let modal = centered_fixed(MODAL_WIDTH, MODAL_HEIGHT, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(" Enter Code ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.keypad_frame(session));

    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Code slots
            Constraint::Length(1), // Error message
            Constraint::Length(1), // Spacer
            Constraint::Length(8), // Keys
            Constraint::Min(0),
        ])
        .split(inner);

    let slots = Paragraph::new(code_slots(session.buffer().len()))
        .style(theme.code_slots(session))
        .alignment(Alignment::Center);
    frame.render_widget(slots, chunks[0]);

    if session.error_flag() {
        let message = Paragraph::new(format!("Enter all {} digits", CODE_LENGTH))
            .style(theme.alert())
            .alignment(Alignment::Center);
        frame.render_widget(message, chunks[1]);
    }

    render_keys(frame, chunks[3], theme);
}

fn render_keys(frame: &mut Frame, area: Rect, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2); 4])
        .split(area);

    for (row, labels) in rows.iter().zip(KEY_ROWS.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*row);

        for (cell, label) in cells.iter().zip(labels.iter()) {
            let key = Paragraph::new(format!(" {} ", label))
                .style(theme.key(label.len() > 1))
                .alignment(Alignment::Center);
            // Leave a gap between keys
            let face = Rect::new(cell.x + 1, cell.y, cell.width.saturating_sub(2), 1);
            frame.render_widget(key, face);
        }
    }
}
