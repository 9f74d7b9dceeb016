//! Turning the store into something a view can draw.
//!
//! [`render`] is a pure function of the store snapshot; drawing the result
//! is left to an [`AvatarRenderer`].

use crate::character::CharacterConfig;
use crate::field::Field;
use crate::profile::SeedProfile;
use crate::seed::Seed;
use crate::store::ConfigStore;
use crate::value::FieldValue;
use crate::widget::{Control, ControlKind, controls};

/// Attribute order expected by the avatar display.
const ATTRIBUTE_ORDER: [Field; 12] = [
    Field::Base,
    Field::Face,
    Field::FaceItem,
    Field::Accessories,
    Field::Hair,
    Field::HatColor,
    Field::Pants,
    Field::Shirt,
    Field::Skin,
    Field::Fire,
    Field::Walking,
    Field::Size,
];

/// The attributes passed to the avatar display, unchanged from the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarAttributes {
    config: CharacterConfig,
}

impl AvatarAttributes {
    /// Value of one attribute.
    pub fn get(&self, field: Field) -> FieldValue {
        self.config.get(field)
    }

    /// `(name, value)` pairs in display order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, FieldValue)> + '_ {
        ATTRIBUTE_ORDER
            .iter()
            .map(move |f| (f.name(), self.config.get(*f)))
    }
}

/// The value shown by a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    /// Text of the name input.
    Text(String),
    /// Checkbox state.
    Checked(bool),
    /// Slider position.
    Position(FieldValue),
}

/// A control together with its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    /// The control.
    pub control: Control,
    /// What it currently shows.
    pub value: ControlValue,
}

/// Everything a view needs to draw the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterView {
    /// Current seed.
    pub seed: Seed,
    /// Display name.
    pub name: String,
    /// Attributes for the avatar display.
    pub attributes: AvatarAttributes,
    /// Controls in display order.
    pub controls: Vec<ControlView>,
}

/// Build the view for the current store contents.
pub fn render(store: &ConfigStore, seed: &Seed, profile: SeedProfile) -> CharacterView {
    let config = store.snapshot();
    let controls = controls(profile)
        .into_iter()
        .map(|control| {
            let value = match &control.kind {
                ControlKind::NameInput => ControlValue::Text(store.name().to_string()),
                ControlKind::Checkbox(field) => {
                    ControlValue::Checked(config.get(*field) == FieldValue::Int(1))
                }
                ControlKind::Slider { field, .. } => ControlValue::Position(config.get(*field)),
            };
            ControlView { control, value }
        })
        .collect();

    CharacterView {
        seed: seed.clone(),
        name: store.name().to_string(),
        attributes: AvatarAttributes { config },
        controls,
    }
}

/// Draws views. Implemented by whatever displays the avatar.
pub trait AvatarRenderer {
    /// Draw a new view.
    fn render(&mut self, view: &CharacterView);
}

/// Keeps the most recent view, for callers that draw on their own schedule.
#[derive(Debug, Clone, Default)]
pub struct LatestView {
    view: Option<CharacterView>,
    frames: usize,
}

impl LatestView {
    /// The last view received.
    pub fn view(&self) -> Option<&CharacterView> {
        self.view.as_ref()
    }

    /// How many views were received.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl AvatarRenderer for LatestView {
    fn render(&mut self, view: &CharacterView) {
        self.view = Some(view.clone());
        self.frames += 1;
    }
}
