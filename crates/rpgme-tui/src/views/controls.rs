//! The control panel.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use rpgme_core::render::{ControlValue, ControlView};
use rpgme_core::{CharacterView, ControlKind, FieldValue};

use crate::app::{EditorApp, InputMode};

/// Width of a slider bar in cells.
const BAR_WIDTH: usize = 12;

/// Draw the list of controls with the cursor highlighted.
pub fn draw_controls(frame: &mut Frame, app: &EditorApp, view: &CharacterView, area: Rect) {
    let editing = app.mode == InputMode::Name;
    let items: Vec<ListItem> = view
        .controls
        .iter()
        .map(|c| ListItem::new(control_line(c, editing)))
        .collect();

    let border = if editing { Color::Green } else { Color::Yellow };
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", title(view)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White).bold())
        .highlight_symbol("\u{25b6} ");

    let mut state = ListState::default();
    state.select(Some(app.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

/// One row: label, then the control's current value.
fn control_line(view: &ControlView, editing: bool) -> Line<'static> {
    let label = Span::styled(
        format!("{:<12}", view.control.label),
        Style::default().fg(Color::Cyan),
    );

    let value = match (&view.control.kind, &view.value) {
        (ControlKind::NameInput, ControlValue::Text(name)) => {
            let cursor = if editing { "_" } else { "" };
            vec![Span::styled(
                format!("[{name}{cursor}]"),
                Style::default().fg(Color::White),
            )]
        }
        (ControlKind::Checkbox(_), ControlValue::Checked(checked)) => {
            let (mark, color) = if *checked {
                ("[x]", Color::Green)
            } else {
                ("[ ]", Color::DarkGray)
            };
            vec![Span::styled(mark, Style::default().fg(color))]
        }
        (ControlKind::Slider { range, .. }, ControlValue::Position(value)) => {
            let (start, end) = (*range.start(), *range.end());
            vec![
                Span::styled(
                    slider_bar(*value, start, end),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!(" {value}")),
            ]
        }
        _ => Vec::new(),
    };

    let mut spans = vec![label];
    spans.extend(value);
    Line::from(spans)
}

/// A text gauge for a slider. NaN shows as an empty bar.
pub fn slider_bar(value: FieldValue, start: i64, end: i64) -> String {
    let span = (end - start).max(1);
    let filled = match value.as_int() {
        Some(n) => {
            let pos = n.clamp(start, end) - start;
            usize::try_from(pos * BAR_WIDTH as i64 / span).unwrap_or(0)
        }
        None => 0,
    };
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(BAR_WIDTH - filled)
    )
}

fn title(view: &CharacterView) -> &str {
    if view.name.is_empty() {
        "Character"
    } else {
        &view.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(bar: &str) -> usize {
        bar.chars().filter(|c| *c == '\u{2588}').count()
    }

    #[test]
    fn bar_fills_with_value() {
        assert_eq!(filled(&slider_bar(FieldValue::Int(0), 0, 9)), 0);
        assert_eq!(filled(&slider_bar(FieldValue::Int(9), 0, 9)), BAR_WIDTH);
        assert_eq!(filled(&slider_bar(FieldValue::Int(300), 100, 500)), 6);
    }

    #[test]
    fn bar_handles_out_of_range_and_nan() {
        assert_eq!(slider_bar(FieldValue::Int(42), 0, 9).chars().count(), BAR_WIDTH);
        assert_eq!(slider_bar(FieldValue::NotANumber, 0, 9), "\u{2591}".repeat(BAR_WIDTH));
    }
}
