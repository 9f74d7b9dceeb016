//! Avatar preview: a small text figure plus the raw attribute list.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use rpgme_core::{AvatarAttributes, CharacterView, Field, FieldValue};

/// Colour for each digit value.
const PALETTE: [Color; 10] = [
    Color::White,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::LightRed,
    Color::LightGreen,
    Color::LightBlue,
];

/// One expression per face value.
const FACES: [&str; 6] = ["(o_o)", "(^_^)", "(-_-)", "(>_<)", "(O_O)", "(~_~)"];

/// Glyphs for face items; 0 is none.
const FACE_ITEMS: [&str; 10] = ["", "8", "*", "+", "#", "%", "&", "@", "$", "~"];

/// Colour for an attribute, or dark grey when it has no palette entry.
fn colour(value: FieldValue) -> Color {
    value
        .as_int()
        .and_then(|n| usize::try_from(n).ok())
        .and_then(|i| PALETTE.get(i).copied())
        .unwrap_or(Color::DarkGray)
}

/// Index into a glyph table, falling back to the first entry.
fn glyph<'a>(table: &[&'a str], value: FieldValue) -> &'a str {
    value
        .as_int()
        .and_then(|n| usize::try_from(n).ok())
        .and_then(|i| table.get(i).copied())
        .unwrap_or(table[0])
}

fn is_on(attrs: &AvatarAttributes, field: Field) -> bool {
    attrs.get(field) == FieldValue::Int(1)
}

/// The figure, top to bottom.
pub fn avatar_lines(attrs: &AvatarAttributes) -> Vec<Line<'static>> {
    let styled = |text: String, field: Field| {
        Span::styled(text, Style::default().fg(colour(attrs.get(field))))
    };
    let mut lines = Vec::new();

    if is_on(attrs, Field::Fire) {
        lines.push(Line::from(Span::styled(
            "  ) ( ) (",
            Style::default().fg(Color::Red).bold(),
        )));
    }
    lines.push(Line::from(styled("   _===_".to_string(), Field::HatColor)));
    if is_on(attrs, Field::Base) {
        lines.push(Line::from(styled("  ~~~~~~~".to_string(), Field::Hair)));
    }

    let face = glyph(&FACES, attrs.get(Field::Face));
    let item = glyph(&FACE_ITEMS, attrs.get(Field::FaceItem));
    lines.push(Line::from(vec![
        Span::raw("   "),
        styled(face.to_string(), Field::Skin),
        Span::styled(item.to_string(), Style::default().fg(Color::White)),
    ]));

    let accessory = if attrs.get(Field::Accessories) == FieldValue::Int(0) {
        " "
    } else {
        "o"
    };
    lines.push(Line::from(vec![
        Span::raw("   "),
        styled(format!("/|{accessory}|\\"), Field::Shirt),
    ]));

    let legs = if is_on(attrs, Field::Walking) {
        "    / \\"
    } else {
        "    | |"
    };
    lines.push(Line::from(styled(legs.to_string(), Field::Pants)));
    lines
}

/// Draw the avatar, its attributes, and the seed.
pub fn draw_preview(frame: &mut Frame, view: &CharacterView, area: Rect) {
    let mut lines = avatar_lines(&view.attributes);
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("seed ", Style::default().fg(Color::DarkGray)),
        Span::styled(view.seed.to_string(), Style::default().fg(Color::Yellow).bold()),
    ]));
    if !view.name.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("name ", Style::default().fg(Color::DarkGray)),
            Span::raw(view.name.clone()),
        ]));
    }
    lines.push(Line::from(""));

    for (name, value) in view.attributes.pairs() {
        lines.push(Line::from(vec![
            Span::styled(format!("{name:<12}"), Style::default().fg(Color::Cyan)),
            Span::raw(value.to_string()),
        ]));
    }

    let preview = Paragraph::new(lines).block(
        Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(preview, area);
}

#[cfg(test)]
mod tests {
    use rpgme_core::{ConfigStore, Seed, SeedProfile, render};

    use super::*;

    fn attrs(assignments: &[(Field, &str)]) -> AvatarAttributes {
        let mut store = ConfigStore::default();
        for (field, raw) in assignments {
            store.set_field(*field, raw);
        }
        render(&store, &Seed::zeros(SeedProfile::Classic), SeedProfile::Classic).attributes
    }

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn default_figure() {
        let figure = text(&avatar_lines(&attrs(&[])));
        assert!(figure.contains("(o_o)"));
        assert!(figure.contains("| |"));
        assert!(!figure.contains(") ("));
        assert!(!figure.contains("~~~"));
    }

    #[test]
    fn toggles_change_figure() {
        let figure = text(&avatar_lines(&attrs(&[
            (Field::Fire, "1"),
            (Field::Base, "1"),
            (Field::Walking, "1"),
            (Field::Face, "1"),
        ])));
        assert!(figure.contains(") ("));
        assert!(figure.contains("~~~"));
        assert!(figure.contains("/ \\"));
        assert!(figure.contains("(^_^)"));
    }

    #[test]
    fn odd_values_fall_back() {
        let a = attrs(&[(Field::Face, "12"), (Field::Hair, "x")]);
        assert!(text(&avatar_lines(&a)).contains("(o_o)"));
        assert_eq!(colour(a.get(Field::Hair)), Color::DarkGray);
        assert_eq!(colour(FieldValue::Int(2)), Color::Green);
    }
}
