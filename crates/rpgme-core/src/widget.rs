//! The input controls the editor exposes, and the events they emit.

use std::ops::RangeInclusive;

use crate::field::Field;
use crate::profile::SeedProfile;

/// A change coming from one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A slider moved. `raw` is the control's value as text.
    Slider {
        /// Field bound to the slider.
        field: Field,
        /// Raw value as reported by the widget.
        raw: String,
    },
    /// A checkbox was toggled.
    Checkbox {
        /// Field bound to the checkbox.
        field: Field,
        /// New checked state.
        checked: bool,
    },
    /// The name input changed.
    Name(String),
}

impl WidgetEvent {
    /// A slider event from any displayable value.
    pub fn slider(field: Field, raw: impl ToString) -> Self {
        WidgetEvent::Slider {
            field,
            raw: raw.to_string(),
        }
    }
}

/// What kind of control a [`Control`] is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// Free-text name input.
    NameInput,
    /// On/off checkbox bound to a toggle field.
    Checkbox(Field),
    /// Integer slider, step 1.
    Slider {
        /// Field bound to the slider.
        field: Field,
        /// Slider bounds.
        range: RangeInclusive<i64>,
    },
}

/// One control in the editor panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Label shown next to the control.
    pub label: &'static str,
    /// Kind and binding.
    pub kind: ControlKind,
}

impl Control {
    /// The field this control edits, if any.
    pub fn field(&self) -> Option<Field> {
        match &self.kind {
            ControlKind::NameInput => None,
            ControlKind::Checkbox(field) => Some(*field),
            ControlKind::Slider { field, .. } => Some(*field),
        }
    }
}

const CHECKBOXES: [(&str, Field); 3] = [
    ("Show Hair", Field::Base),
    ("On Fire?", Field::Fire),
    ("Walking?", Field::Walking),
];

const SLIDERS: [(&str, Field); 9] = [
    ("Face", Field::Face),
    ("Face Item", Field::FaceItem),
    ("Accessories", Field::Accessories),
    ("Pants", Field::Pants),
    ("Shirt", Field::Shirt),
    ("Skin", Field::Skin),
    ("Size", Field::Size),
    ("Hair Color", Field::Hair),
    ("Hat Color", Field::HatColor),
];

/// The editor's controls in display order.
pub fn controls(profile: SeedProfile) -> Vec<Control> {
    let mut out = Vec::with_capacity(1 + CHECKBOXES.len() + SLIDERS.len());
    out.push(Control {
        label: "Name",
        kind: ControlKind::NameInput,
    });
    out.extend(CHECKBOXES.iter().map(|&(label, field)| Control {
        label,
        kind: ControlKind::Checkbox(field),
    }));
    out.extend(SLIDERS.iter().map(|&(label, field)| Control {
        label,
        kind: ControlKind::Slider {
            field,
            range: profile.range_of(field),
        },
    }));
    out
}
