use colored::Colorize;
use rpgme_core::{CharacterConfig, ConfigStore, EditorConfig, SeedCodec};

pub fn run(config: &EditorConfig, seed: &str, json: bool) -> Result<(), String> {
    let codec = SeedCodec::new(config.profile);
    let mut store = ConfigStore::default();

    match codec.decode(seed) {
        Some(partial) => {
            store.apply_partial(&partial);
        }
        None => {
            eprintln!(
                "  {} expected {} characters, got {}; showing defaults",
                "seed ignored:".yellow(),
                codec.width(),
                seed.chars().count()
            );
        }
    }

    let record: CharacterConfig = store.snapshot();
    if json {
        let out = serde_json::to_string_pretty(&record)
            .map_err(|e| format!("cannot serialize record: {e}"))?;
        println!("{out}");
    } else {
        super::print_record(&record, config.profile);
    }

    Ok(())
}
