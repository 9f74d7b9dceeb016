//! Terminal setup, teardown, and main event loop.

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use rpgme_core::Location;

use crate::app::EditorApp;
use crate::shared;
use crate::views;

/// Launch the editor. Returns the app once the user quits, so the caller can
/// read the final address.
pub fn run(mut app: EditorApp) -> Result<EditorApp, String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map(|()| app)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut EditorApp,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        match event::read().map_err(|e| format!("event error: {e}"))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            _ => {}
        }
    }
}

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, app: &EditorApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Editor
            Constraint::Length(1), // Address
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let view = app.view();
    views::draw_editor(frame, app, &view, chunks[0]);

    let address = Paragraph::new(Line::from(vec![
        Span::styled(" url ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(" "),
        Span::raw(app.editor().location().current().to_string()),
    ]));
    frame.render_widget(address, chunks[1]);

    let status = Paragraph::new(app.status_hint())
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if let Some(message) = &app.popup {
        shared::draw_message_popup(frame, " Share ", message);
    }
    if app.show_help {
        shared::draw_help_popup(frame);
    }
}
