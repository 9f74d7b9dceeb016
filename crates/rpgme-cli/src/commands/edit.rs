use colored::Colorize;
use rpgme_core::{EditorConfig, Location, WidgetEvent};

pub fn run(
    config: EditorConfig,
    url: &str,
    assignments: &[String],
    name: Option<String>,
    json: bool,
) -> Result<(), String> {
    let events = super::parse_assignments(assignments)?;
    let profile = config.profile;
    let mut editor = super::open_editor(config, url)?;

    for event in events {
        editor.handle(event);
    }
    if let Some(name) = name {
        editor.handle(WidgetEvent::Name(name));
    }

    let record = editor.store().snapshot();
    if json {
        let out = serde_json::json!({
            "url": editor.location().current().as_str(),
            "seed": editor.seed(),
            "name": editor.store().name(),
            "character": record,
        });
        let text = serde_json::to_string_pretty(&out)
            .map_err(|e| format!("cannot serialize record: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    println!("  {} {}", "url:".dimmed(), editor.location().current());
    super::print_view(&editor.view(), &record, profile);

    Ok(())
}
