use rpgme_core::{EditorConfig, MemoryHistory, Seed, SeedCodec, SyncController};

pub fn run(config: &EditorConfig, seed: &str, url: &str) -> Result<(), String> {
    let codec = SeedCodec::new(config.profile);
    if !codec.accepts(seed) {
        return Err(format!(
            "seed \"{seed}\" has {} characters, a {} seed has {}",
            seed.chars().count(),
            config.profile,
            codec.width()
        ));
    }

    let history = MemoryHistory::parse(url).map_err(|e| e.to_string())?;
    let sync = SyncController::new(history, codec);
    println!("{}", sync.build_share_link(&Seed::new(seed)));

    Ok(())
}
