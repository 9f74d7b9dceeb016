//! Standalone terminal editor for rpgme characters.

use std::process;

use clap::Parser;
use rpgme_core::{
    BufferClipboard, CharacterEditor, EditorConfig, LatestView, Location, MemoryHistory,
    SeedProfile,
};

#[derive(Parser)]
#[command(
    name = "rpgme-tui",
    about = "Terminal editor for rpgme characters",
    version
)]
struct Args {
    /// Page address, optionally carrying a seed
    #[arg(long, default_value = "http://localhost:8000/")]
    url: String,

    /// Seed layout: classic or compact
    #[arg(long, default_value = "classic")]
    profile: SeedProfile,

    /// Initial display name
    #[arg(long)]
    name: Option<String>,

    /// RNG seed for the randomize key
    #[arg(long)]
    rng_seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let history = match MemoryHistory::parse(&args.url) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let mut config = EditorConfig::default().with_profile(args.profile);
    if let Some(name) = args.name {
        config = config.with_name(name);
    }

    let mut editor = CharacterEditor::new(
        config,
        history,
        LatestView::default(),
        BufferClipboard::default(),
    );
    editor.connect();

    let app = match args.rng_seed {
        Some(seed) => rpgme_tui::app::EditorApp::seeded(editor, seed),
        None => rpgme_tui::app::EditorApp::new(editor),
    };

    match rpgme_tui::terminal::run(app) {
        Ok(app) => println!("{}", app.editor().location().current()),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
