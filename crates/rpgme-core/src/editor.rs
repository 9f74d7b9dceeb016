//! The character editor: wires widgets, store, seed, and location together.
//!
//! `CharacterEditor` owns a [`ConfigStore`] and drives the injected
//! [`Location`], [`AvatarRenderer`], and [`Clipboard`]. Every record change
//! re-encodes the seed, rewrites the location in place, and renders.

use std::fmt;

use rand::Rng;
use tracing::{debug, info};
use url::Url;

use crate::character::{CharacterConfig, PartialConfig};
use crate::clipboard::Clipboard;
use crate::config::EditorConfig;
use crate::location::Location;
use crate::profile::SeedProfile;
use crate::render::{AvatarRenderer, CharacterView, render};
use crate::seed::{Seed, SeedCodec};
use crate::store::{ConfigStore, ListenerId, StoreEvent};
use crate::sync::SyncController;
use crate::value::FieldValue;
use crate::widget::WidgetEvent;

/// Result of a share action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The link is on the clipboard.
    Copied(Url),
    /// The clipboard write failed and was dropped.
    Dropped,
}

impl fmt::Display for ShareOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareOutcome::Copied(link) => write!(f, "Link copied to clipboard: {link}"),
            ShareOutcome::Dropped => f.write_str("Link not copied"),
        }
    }
}

/// An interactive character editor bound to one location.
pub struct CharacterEditor<L, R, C> {
    codec: SeedCodec,
    store: ConfigStore,
    seed: Seed,
    sync: SyncController<L>,
    renderer: R,
    clipboard: C,
}

impl<L, R, C> CharacterEditor<L, R, C>
where
    L: Location,
    R: AvatarRenderer,
    C: Clipboard,
{
    /// Create an editor with default attributes. The location is not read
    /// until [`CharacterEditor::connect`].
    pub fn new(config: EditorConfig, location: L, renderer: R, clipboard: C) -> Self {
        let codec = SeedCodec::new(config.profile);
        let mut store = ConfigStore::default();
        store.set_name(config.name);
        let seed = codec.encode(store.get());

        Self {
            codec,
            store,
            seed,
            sync: SyncController::new(location, codec),
            renderer,
            clipboard,
        }
    }

    /// Hydrate from the location's seed, if it has an acceptable one, and
    /// render. Returns true if a seed was applied.
    ///
    /// The location itself is left untouched.
    pub fn connect(&mut self) -> bool {
        let hydrated = match self.sync.read_from_location() {
            Some(seed) => match self.codec.decode(seed.as_str()) {
                Some(partial) => {
                    self.store.apply_partial(&partial);
                    self.seed = self.codec.encode(self.store.get());
                    info!(seed = %self.seed, "hydrated from location");
                    true
                }
                None => false,
            },
            None => {
                debug!("no usable seed in location, keeping defaults");
                false
            }
        };
        self.refresh();
        hydrated
    }

    /// Apply one widget change.
    pub fn handle(&mut self, event: WidgetEvent) -> StoreEvent {
        let change = match event {
            WidgetEvent::Slider { field, raw } => self.store.set_field(field, &raw),
            WidgetEvent::Checkbox { field, checked } => self
                .store
                .set_value(field, FieldValue::Int(i64::from(checked))),
            WidgetEvent::Name(name) => self.store.set_name(name),
        };

        if change.touches_record() {
            self.resync();
        }
        self.refresh();
        change
    }

    /// Copy a share link for the current seed to the clipboard.
    ///
    /// A failed write is logged and dropped.
    pub fn share(&mut self) -> ShareOutcome {
        let link = self.share_link();
        match self.clipboard.write_text(link.as_str()) {
            Ok(()) => ShareOutcome::Copied(link),
            Err(e) => {
                debug!(error = %e, "share link not copied");
                ShareOutcome::Dropped
            }
        }
    }

    /// The share link for the current seed.
    pub fn share_link(&self) -> Url {
        self.sync.build_share_link(&self.seed)
    }

    /// Give every seeded field a random in-range value. Size is unchanged.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        let profile = self.profile();
        let partial: PartialConfig = profile
            .order()
            .iter()
            .map(|field| {
                let value = rng.random_range(profile.range_of(*field));
                (*field, FieldValue::Int(value))
            })
            .collect();
        self.store.apply_partial(&partial);
        self.resync();
        self.refresh();
    }

    /// Register a store listener.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&StoreEvent, &CharacterConfig) + 'static,
    ) -> ListenerId {
        self.store.subscribe(listener)
    }

    /// The current view, built fresh from the store.
    pub fn view(&self) -> CharacterView {
        render(&self.store, &self.seed, self.profile())
    }

    /// The store (read-only; edits go through [`CharacterEditor::handle`]).
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// The current seed.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// The seed profile in use.
    pub fn profile(&self) -> SeedProfile {
        self.codec.profile()
    }

    /// The location the seed is synced to.
    pub fn location(&self) -> &L {
        self.sync.location()
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The clipboard.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Tear the editor down into its location, renderer, and clipboard.
    pub fn into_parts(self) -> (L, R, C) {
        (self.sync.into_location(), self.renderer, self.clipboard)
    }

    fn resync(&mut self) {
        self.seed = self.codec.encode(self.store.get());
        self.sync.apply_to_location(&self.seed);
    }

    fn refresh(&mut self) {
        let view = render(&self.store, &self.seed, self.profile());
        self.renderer.render(&view);
    }
}

impl<L, R, C> fmt::Debug for CharacterEditor<L, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterEditor")
            .field("profile", &self.codec.profile())
            .field("seed", &self.seed)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
