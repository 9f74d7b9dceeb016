use comfy_table::{ContentArrangement, Table};
use rpgme_core::{EditorConfig, Field, FieldKind};

pub fn run(config: &EditorConfig) -> Result<(), String> {
    let profile = config.profile;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Kind", "Range", "Seed position"]);

    for field in Field::ALL {
        let kind = match field.kind() {
            FieldKind::Toggle => "toggle",
            FieldKind::Digit => "digit",
            FieldKind::Size => "size",
        };
        let range = profile.range_of(field);
        let position = profile
            .position(field)
            .map(|p| (p + 1).to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            field.name().to_string(),
            kind.to_string(),
            format!("{}-{}", range.start(), range.end()),
            position,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} profile, {}-digit seeds", profile, profile.width());

    Ok(())
}
