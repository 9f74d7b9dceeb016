use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rpgme_core::{EditorConfig, Location};

pub fn run(config: EditorConfig, url: &str, rng_seed: Option<u64>) -> Result<(), String> {
    let mut rng = match rng_seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let mut editor = super::open_editor(config, url)?;
    editor.randomize(&mut rng);

    println!("{}", editor.seed());
    println!("  {} {}", "url:".dimmed(), editor.location().current());

    Ok(())
}
