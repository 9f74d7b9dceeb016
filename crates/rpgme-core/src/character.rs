//! The character record and partial updates to it.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::value::FieldValue;

/// Default render size in pixels.
pub const DEFAULT_SIZE: i64 = 200;

/// Every adjustable attribute of a character.
///
/// Values are stored exactly as set; nothing here enforces the documented
/// ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    /// Hair layer visible (0/1).
    pub base: FieldValue,
    /// Hair colour index.
    pub hair: FieldValue,
    /// Face variant.
    pub face: FieldValue,
    /// Face accessory variant.
    pub faceitem: FieldValue,
    /// Accessory variant.
    pub accessories: FieldValue,
    /// Pants colour index.
    pub pants: FieldValue,
    /// Shirt colour index.
    pub shirt: FieldValue,
    /// Skin tone index.
    pub skin: FieldValue,
    /// Hat colour index.
    pub hatcolor: FieldValue,
    /// Animated fire effect (0/1).
    pub fire: FieldValue,
    /// Animated walking (0/1).
    pub walking: FieldValue,
    /// Render size in pixels.
    pub size: FieldValue,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            base: FieldValue::Int(0),
            hair: FieldValue::Int(0),
            face: FieldValue::Int(0),
            faceitem: FieldValue::Int(0),
            accessories: FieldValue::Int(0),
            pants: FieldValue::Int(0),
            shirt: FieldValue::Int(0),
            skin: FieldValue::Int(0),
            hatcolor: FieldValue::Int(0),
            fire: FieldValue::Int(0),
            walking: FieldValue::Int(0),
            size: FieldValue::Int(DEFAULT_SIZE),
        }
    }
}

impl CharacterConfig {
    /// Read one field.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Base => self.base,
            Field::Hair => self.hair,
            Field::Face => self.face,
            Field::FaceItem => self.faceitem,
            Field::Accessories => self.accessories,
            Field::Pants => self.pants,
            Field::Shirt => self.shirt,
            Field::Skin => self.skin,
            Field::HatColor => self.hatcolor,
            Field::Fire => self.fire,
            Field::Walking => self.walking,
            Field::Size => self.size,
        }
    }

    /// Mutable access to one field's slot.
    pub fn slot_mut(&mut self, field: Field) -> &mut FieldValue {
        match field {
            Field::Base => &mut self.base,
            Field::Hair => &mut self.hair,
            Field::Face => &mut self.face,
            Field::FaceItem => &mut self.faceitem,
            Field::Accessories => &mut self.accessories,
            Field::Pants => &mut self.pants,
            Field::Shirt => &mut self.shirt,
            Field::Skin => &mut self.skin,
            Field::HatColor => &mut self.hatcolor,
            Field::Fire => &mut self.fire,
            Field::Walking => &mut self.walking,
            Field::Size => &mut self.size,
        }
    }

    /// Fields paired with their values, in record order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldValue)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// An ordered set of field assignments, produced by decoding a seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConfig {
    assignments: Vec<(Field, FieldValue)>,
}

impl PartialConfig {
    /// An empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an assignment. A later assignment to the same field wins.
    pub fn set(&mut self, field: Field, value: FieldValue) {
        self.assignments.push((field, value));
    }

    /// Builder form of [`PartialConfig::set`].
    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.set(field, value.into());
        self
    }

    /// Value assigned to a field, if any.
    pub fn get(&self, field: Field) -> Option<FieldValue> {
        self.assignments
            .iter()
            .rev()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| *v)
    }

    /// The assignments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(Field, FieldValue)> {
        self.assignments.iter()
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true if nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl FromIterator<(Field, FieldValue)> for PartialConfig {
    fn from_iter<T: IntoIterator<Item = (Field, FieldValue)>>(iter: T) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = CharacterConfig::default();
        for (field, value) in cfg.iter() {
            if field == Field::Size {
                assert_eq!(value, FieldValue::Int(200));
            } else {
                assert_eq!(value, FieldValue::Int(0), "{field}");
            }
        }
    }

    #[test]
    fn get_and_slot_agree() {
        let mut cfg = CharacterConfig::default();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            *cfg.slot_mut(field) = FieldValue::Int(i as i64 + 10);
        }
        for (i, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(cfg.get(field), FieldValue::Int(i as i64 + 10));
        }
    }

    #[test]
    fn partial_last_assignment_wins() {
        let partial = PartialConfig::new()
            .with(Field::Hair, 3)
            .with(Field::Hair, 5);
        assert_eq!(partial.get(Field::Hair), Some(FieldValue::Int(5)));
        assert_eq!(partial.get(Field::Skin), None);
        assert_eq!(partial.len(), 2);
    }

    #[test]
    fn serializes_as_flat_record() {
        let mut cfg = CharacterConfig::default();
        cfg.face = FieldValue::NotANumber;
        let json = serde_json::to_value(cfg).unwrap();
        assert_eq!(json["size"], 200);
        assert!(json["face"].is_null());
        assert_eq!(json["hatcolor"], 0);
    }

    #[test]
    fn deserialize_fills_missing_with_defaults() {
        let cfg: CharacterConfig = serde_json::from_str(r#"{"hair": 4}"#).unwrap();
        assert_eq!(cfg.hair, FieldValue::Int(4));
        assert_eq!(cfg.size, FieldValue::Int(200));
    }
}
