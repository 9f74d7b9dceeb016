//! Launch the terminal editor.

use rpgme_core::{EditorConfig, Location};

pub fn run(config: EditorConfig, url: &str) -> Result<(), String> {
    let editor = super::open_editor(config, url)?;
    let app = rpgme_tui::app::EditorApp::new(editor);
    let app = rpgme_tui::terminal::run(app)?;

    // Leave the final address on the normal screen.
    println!("{}", app.editor().location().current());

    Ok(())
}
