//! The seed codec: character record <-> fixed-width digit string.
//!
//! Encoding writes one character per seeded field, in profile order.
//! Values outside `0..=9` are saturated and the not-a-number sentinel is
//! written as `0`, so an encoded seed always has exactly the profile width.
//!
//! Decoding is all-or-nothing and gated purely on length: a string of the
//! wrong width is rejected outright, and within an accepted string any
//! non-digit character decodes as `0`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::character::{CharacterConfig, PartialConfig};
use crate::profile::SeedProfile;
use crate::value::FieldValue;

/// A shareable digit string describing a character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    /// Wrap a string as a seed without checking it.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The all-zero seed of a profile.
    pub fn zeros(profile: SeedProfile) -> Self {
        Self("0".repeat(profile.width()))
    }

    /// The seed text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Seed {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Encoder/decoder bound to one seed profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedCodec {
    profile: SeedProfile,
}

impl SeedCodec {
    /// A codec for the given profile.
    pub fn new(profile: SeedProfile) -> Self {
        Self { profile }
    }

    /// The profile this codec reads and writes.
    pub fn profile(&self) -> SeedProfile {
        self.profile
    }

    /// Expected seed length in characters.
    pub fn width(&self) -> usize {
        self.profile.width()
    }

    /// Returns true if `s` has exactly the expected width.
    pub fn accepts(&self, s: &str) -> bool {
        s.chars().count() == self.width()
    }

    /// Encode the seeded fields of a record.
    pub fn encode(&self, config: &CharacterConfig) -> Seed {
        let s: String = self
            .profile
            .order()
            .iter()
            .map(|field| config.get(*field).seed_digit())
            .collect();
        Seed(s)
    }

    /// Decode a seed into positional field assignments.
    ///
    /// Returns `None` when the length does not match the profile width.
    pub fn decode(&self, seed: &str) -> Option<PartialConfig> {
        if !self.accepts(seed) {
            return None;
        }

        let partial = self
            .profile
            .order()
            .iter()
            .zip(seed.chars())
            .map(|(field, c)| {
                let digit = c.to_digit(10).map_or(0, i64::from);
                (*field, FieldValue::Int(digit))
            })
            .collect();
        Some(partial)
    }
}
