//! Configuration for an editor instance.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RpgError, RpgResult};
use crate::profile::SeedProfile;

/// Settings that are fixed for the lifetime of an editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Seed layout to read and write.
    pub profile: SeedProfile,
    /// Display name to start with.
    pub name: String,
}

impl EditorConfig {
    /// Set the seed profile.
    pub fn with_profile(mut self, profile: SeedProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the initial display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Read a config from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> RpgResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| RpgError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| RpgError::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}
