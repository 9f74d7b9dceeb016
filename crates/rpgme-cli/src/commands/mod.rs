pub mod decode;
pub mod edit;
pub mod encode;
pub mod fields;
pub mod random;
pub mod share;
pub mod tui;

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rpgme_core::{
    BufferClipboard, CharacterConfig, CharacterEditor, CharacterView, EditorConfig, LatestView,
    MemoryHistory, SeedProfile, WidgetEvent, parse_assignment,
};

/// The editor type every command drives.
pub type Editor = CharacterEditor<MemoryHistory, LatestView, BufferClipboard>;

/// Build the editor config from the optional file, then apply `--profile`.
pub fn load_config(path: Option<&Path>, profile: Option<SeedProfile>) -> Result<EditorConfig, String> {
    let config = match path {
        Some(p) => EditorConfig::from_json_file(p).map_err(|e| e.to_string())?,
        None => EditorConfig::default(),
    };
    Ok(match profile {
        Some(p) => config.with_profile(p),
        None => config,
    })
}

/// Open an editor on `url` and hydrate it from the address.
pub fn open_editor(config: EditorConfig, url: &str) -> Result<Editor, String> {
    let history = MemoryHistory::parse(url).map_err(|e| e.to_string())?;
    let mut editor = CharacterEditor::new(
        config,
        history,
        LatestView::default(),
        BufferClipboard::default(),
    );
    if !editor.connect() {
        tracing::info!(url, "starting from the default character");
    }
    Ok(editor)
}

/// Parse every `field=value` argument before anything is applied.
fn parse_assignments(assignments: &[String]) -> Result<Vec<WidgetEvent>, String> {
    assignments
        .iter()
        .map(|a| parse_assignment(a).map_err(|e| e.to_string()))
        .collect()
}

/// Print a record as a two-column table.
fn print_record(config: &CharacterConfig, profile: SeedProfile) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value", "Seed position"]);

    for (field, value) in config.iter() {
        let position = profile
            .position(field)
            .map(|p| (p + 1).to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![field.name().to_string(), value.to_string(), position]);
    }

    println!("{table}");
}

/// Print a view header: seed, name, then the record.
fn print_view(view: &CharacterView, config: &CharacterConfig, profile: SeedProfile) {
    println!("  {} {}", "seed:".dimmed(), view.seed.as_str().bold());
    if !view.name.is_empty() {
        println!("  {} {}", "name:".dimmed(), view.name);
    }
    println!();
    print_record(config, profile);
}
