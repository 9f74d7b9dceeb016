//! The adjustable attributes of a character.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::RpgError;

/// Minimum similarity for suggesting a field name on a typo.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// One named attribute of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Hair layer visible.
    Base,
    /// Hair colour index.
    Hair,
    /// Face variant.
    Face,
    /// Face accessory variant.
    #[serde(rename = "faceitem")]
    FaceItem,
    /// Accessory variant.
    Accessories,
    /// Pants colour index.
    Pants,
    /// Shirt colour index.
    Shirt,
    /// Skin tone index.
    Skin,
    /// Hat colour index.
    #[serde(rename = "hatcolor")]
    HatColor,
    /// Animated fire effect.
    Fire,
    /// Animated walking.
    Walking,
    /// Render size in pixels. Never part of a seed.
    Size,
}

/// How a field's value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// On/off flag stored as 0 or 1.
    Toggle,
    /// A single-digit index.
    Digit,
    /// The pixel size of the avatar.
    Size,
}

impl Field {
    /// Every field, in record order.
    pub const ALL: [Field; 12] = [
        Field::Base,
        Field::Hair,
        Field::Face,
        Field::FaceItem,
        Field::Accessories,
        Field::Pants,
        Field::Shirt,
        Field::Skin,
        Field::HatColor,
        Field::Fire,
        Field::Walking,
        Field::Size,
    ];

    /// The attribute name used in URLs, CLI assignments, and renderer output.
    pub fn name(self) -> &'static str {
        match self {
            Field::Base => "base",
            Field::Hair => "hair",
            Field::Face => "face",
            Field::FaceItem => "faceitem",
            Field::Accessories => "accessories",
            Field::Pants => "pants",
            Field::Shirt => "shirt",
            Field::Skin => "skin",
            Field::HatColor => "hatcolor",
            Field::Fire => "fire",
            Field::Walking => "walking",
            Field::Size => "size",
        }
    }

    /// How values of this field are interpreted.
    pub fn kind(self) -> FieldKind {
        match self {
            Field::Base | Field::Fire | Field::Walking => FieldKind::Toggle,
            Field::Size => FieldKind::Size,
            _ => FieldKind::Digit,
        }
    }

    /// Returns true for the on/off fields.
    pub fn is_toggle(self) -> bool {
        self.kind() == FieldKind::Toggle
    }

    /// Documented range for toggle and digit fields.
    ///
    /// `Size` has no fixed range; it depends on the seed profile.
    pub fn range(self) -> Option<RangeInclusive<i64>> {
        match self {
            Field::Base | Field::Fire | Field::Walking => Some(0..=1),
            Field::Face => Some(0..=5),
            Field::Size => None,
            _ => Some(0..=9),
        }
    }

    /// Parse a field name, case-insensitively.
    ///
    /// Unknown names produce an error carrying the closest known name.
    pub fn parse(name: &str) -> Result<Self, RpgError> {
        let lower = name.trim().to_lowercase();
        if let Some(field) = Field::ALL.iter().find(|f| f.name() == lower) {
            return Ok(*field);
        }

        let suggestion = Field::ALL
            .iter()
            .map(|f| (f.name(), jaro_winkler(&lower, f.name())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(n, _)| n.to_string());

        Err(RpgError::UnknownField {
            name: name.to_string(),
            suggestion,
        })
    }
}

impl FromStr for Field {
    type Err = RpgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::parse(s)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Field::parse("FaceItem").unwrap(), Field::FaceItem);
        assert_eq!(Field::parse("HATCOLOR").unwrap(), Field::HatColor);
        assert_eq!(Field::parse(" skin ").unwrap(), Field::Skin);
    }

    #[test]
    fn parse_suggests_close_name() {
        match Field::parse("shrit") {
            Err(RpgError::UnknownField { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("shirt"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn parse_gives_no_suggestion_for_garbage() {
        match Field::parse("zzzzzzzz") {
            Err(RpgError::UnknownField { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.name()).unwrap(), field);
        }
    }

    #[test]
    fn toggles() {
        let toggles: Vec<Field> = Field::ALL.into_iter().filter(|f| f.is_toggle()).collect();
        assert_eq!(toggles, vec![Field::Base, Field::Fire, Field::Walking]);
    }

    #[test]
    fn face_has_narrow_range() {
        assert_eq!(Field::Face.range(), Some(0..=5));
        assert_eq!(Field::Hair.range(), Some(0..=9));
        assert_eq!(Field::Size.range(), None);
    }
}
