//! Editor application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;

use rpgme_core::render::{ControlValue, ControlView};
use rpgme_core::{
    BufferClipboard, CharacterEditor, CharacterView, ControlKind, FieldValue, LatestView,
    MemoryHistory, WidgetEvent,
};

/// The editor type the terminal front end drives.
pub type Editor = CharacterEditor<MemoryHistory, LatestView, BufferClipboard>;

/// Large slider step (PageUp/PageDown).
const BIG_STEP: i64 = 10;

/// Whether keys navigate the panel or type into the name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// j/k/h/l navigation.
    Nav,
    /// Typing into the name input.
    Name,
}

/// Main application state.
pub struct EditorApp {
    editor: Editor,
    rng: StdRng,
    /// Index of the selected control.
    pub cursor: usize,
    /// Current input mode.
    pub mode: InputMode,
    /// Message popup (share confirmation), if open.
    pub popup: Option<String>,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl EditorApp {
    /// Wrap an editor that has already been connected to its location.
    pub fn new(editor: Editor) -> Self {
        Self::with_rng(editor, StdRng::from_os_rng())
    }

    /// Wrap an editor with a fixed RNG for the randomize key.
    pub fn with_rng(editor: Editor, rng: StdRng) -> Self {
        Self {
            editor,
            rng,
            cursor: 0,
            mode: InputMode::Nav,
            popup: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// A fixed-seed app, for reproducible sessions.
    pub fn seeded(editor: Editor, seed: u64) -> Self {
        Self::with_rng(editor, StdRng::seed_from_u64(seed))
    }

    /// The wrapped editor.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Unwrap the editor.
    pub fn into_editor(self) -> Editor {
        self.editor
    }

    /// The view to draw: the last one rendered, or a fresh one.
    pub fn view(&self) -> CharacterView {
        self.editor
            .renderer()
            .view()
            .cloned()
            .unwrap_or_else(|| self.editor.view())
    }

    /// The selected control and its value.
    pub fn selected(&self) -> Option<ControlView> {
        self.view().controls.get(self.cursor).cloned()
    }

    /// Status bar text for the current mode.
    pub fn status_hint(&self) -> &'static str {
        match self.mode {
            InputMode::Nav => {
                "j/k:select  h/l:adjust  Space:toggle  Enter:edit  s:share  r:random  ?:help  q:quit"
            }
            InputMode::Name => "type a name  Enter/Esc:done",
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            InputMode::Nav => self.handle_nav_key(key),
            InputMode::Name => self.handle_name_key(key),
        }
    }

    fn handle_nav_key(&mut self, key: KeyEvent) {
        // Any key closes an open popup.
        if self.popup.take().is_some() {
            return;
        }
        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        let count = self.view().controls.len();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('j') | KeyCode::Down => {
                if self.cursor + 1 < count {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Char('g') => self.cursor = 0,
            KeyCode::Char('G') => self.cursor = count.saturating_sub(1),
            KeyCode::Char('h') | KeyCode::Left => self.step(-1),
            KeyCode::Char('l') | KeyCode::Right => self.step(1),
            KeyCode::PageDown => self.step(-BIG_STEP),
            KeyCode::PageUp => self.step(BIG_STEP),
            KeyCode::Char(' ') => self.toggle(),
            KeyCode::Enter => match self.selected().map(|c| c.control.kind) {
                Some(ControlKind::NameInput) => self.mode = InputMode::Name,
                Some(ControlKind::Checkbox(_)) => self.toggle(),
                _ => {}
            },
            KeyCode::Char('s') => {
                let outcome = self.editor.share();
                self.popup = Some(outcome.to_string());
            }
            KeyCode::Char('r') => self.editor.randomize(&mut self.rng),
            _ => {}
        }
    }

    fn handle_name_key(&mut self, key: KeyEvent) {
        let mut name = self.editor.store().name().to_string();
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.mode = InputMode::Nav;
                return;
            }
            KeyCode::Backspace => {
                if name.pop().is_none() {
                    return;
                }
            }
            KeyCode::Char(c) => name.push(c),
            _ => return,
        }
        self.editor.handle(WidgetEvent::Name(name));
    }

    /// Move the selected slider by `delta`, staying inside its range.
    fn step(&mut self, delta: i64) {
        let Some(selected) = self.selected() else {
            return;
        };
        if let ControlKind::Slider { field, range } = selected.control.kind {
            let current = match selected.value {
                ControlValue::Position(FieldValue::Int(n)) => n,
                _ => *range.start(),
            };
            let next = current.saturating_add(delta).clamp(*range.start(), *range.end());
            self.editor.handle(WidgetEvent::slider(field, next));
        }
    }

    /// Flip the selected checkbox.
    fn toggle(&mut self) {
        let Some(selected) = self.selected() else {
            return;
        };
        if let (ControlKind::Checkbox(field), ControlValue::Checked(checked)) =
            (selected.control.kind, selected.value)
        {
            self.editor.handle(WidgetEvent::Checkbox {
                field,
                checked: !checked,
            });
        }
    }
}
