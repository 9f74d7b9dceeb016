use rpgme_core::{ConfigStore, EditorConfig, SeedCodec, WidgetEvent};

pub fn run(config: &EditorConfig, assignments: &[String]) -> Result<(), String> {
    let events = super::parse_assignments(assignments)?;

    let mut store = ConfigStore::default();
    for event in events {
        match event {
            WidgetEvent::Slider { field, raw } => {
                store.set_field(field, &raw);
            }
            WidgetEvent::Checkbox { field, checked } => {
                store.set_field(field, if checked { "1" } else { "0" });
            }
            WidgetEvent::Name(name) => {
                store.set_name(name);
            }
        }
    }

    let seed = SeedCodec::new(config.profile).encode(store.get());
    println!("{seed}");

    Ok(())
}
