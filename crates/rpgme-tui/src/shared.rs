//! Layout helpers and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the key binding help.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  j / k       Select next / previous control"),
        Line::from("  g / G       First / last control"),
        Line::from("  h / l       Slider down / up"),
        Line::from("  PgDn / PgUp Slider down / up by 10"),
        Line::from("  Space       Toggle checkbox"),
        Line::from("  Enter       Edit name / toggle checkbox"),
        Line::from("  Esc         Finish editing the name"),
        Line::from(""),
        Line::from("  s           Copy the share link"),
        Line::from("  r           Randomize the character"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Draw a one-message popup, dismissed by any key.
pub fn draw_message_popup(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(70, 20, frame.area());

    let popup = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
