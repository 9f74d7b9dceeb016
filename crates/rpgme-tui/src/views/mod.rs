//! The editor screen: control panel on the left, avatar preview on the right.

pub mod controls;
pub mod preview;

use ratatui::prelude::*;

use rpgme_core::CharacterView;

use crate::app::EditorApp;

/// Draw the editor panels into `area`.
pub fn draw_editor(frame: &mut Frame, app: &EditorApp, view: &CharacterView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    controls::draw_controls(frame, app, view, chunks[0]);
    preview::draw_preview(frame, view, chunks[1]);
}
