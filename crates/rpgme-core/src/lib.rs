//! Core of the rpgme character editor.
//!
//! A character is a flat record of integer attributes ([`CharacterConfig`]).
//! The seeded subset of those attributes is encoded positionally into a short
//! digit string ([`Seed`]) that travels in the `seed` query parameter of the
//! page address, so a design can be reproduced from a link.
//!
//! [`CharacterEditor`] ties it together: widget events update the
//! [`ConfigStore`], every change re-encodes the seed and rewrites the
//! [`Location`] in place, and the result is handed to an [`AvatarRenderer`].

/// The character record and partial updates.
pub mod character;
/// Clipboard capability for share links.
pub mod clipboard;
/// Editor configuration.
pub mod config;
/// The editor that wires everything together.
pub mod editor;
/// Error types.
pub mod error;
/// Character attributes.
pub mod field;
/// Navigation state and session history.
pub mod location;
/// Seed layouts.
pub mod profile;
/// View building and the renderer capability.
pub mod render;
/// The seed codec.
pub mod seed;
/// The record owner with change notification.
pub mod store;
/// Seed <-> location synchronisation.
pub mod sync;
/// Field values and input coercion.
pub mod value;
/// Controls and widget events.
pub mod widget;

pub use character::{CharacterConfig, PartialConfig};
pub use clipboard::{BufferClipboard, Clipboard, NoClipboard};
pub use config::EditorConfig;
pub use editor::{CharacterEditor, ShareOutcome};
pub use error::{ClipboardError, RpgError, RpgResult};
pub use field::{Field, FieldKind};
pub use location::{Location, MemoryHistory};
pub use profile::SeedProfile;
pub use render::{AvatarAttributes, AvatarRenderer, CharacterView, LatestView, render};
pub use seed::{Seed, SeedCodec};
pub use store::{ConfigStore, StoreEvent};
pub use sync::SyncController;
pub use value::FieldValue;
pub use widget::{Control, ControlKind, WidgetEvent};

/// Parse a `field=value` assignment into a widget event.
///
/// Toggle fields become checkbox events (any value coercing to non-zero is
/// checked); every other field becomes a slider event carrying the raw text.
pub fn parse_assignment(s: &str) -> RpgResult<WidgetEvent> {
    let (name, raw) = s
        .split_once('=')
        .ok_or_else(|| RpgError::InvalidAssignment(s.to_string()))?;
    let field = Field::parse(name)?;

    if field.is_toggle() {
        let checked = FieldValue::coerce(raw).to_toggle() == FieldValue::Int(1);
        Ok(WidgetEvent::Checkbox { field, checked })
    } else {
        Ok(WidgetEvent::Slider {
            field,
            raw: raw.to_string(),
        })
    }
}
