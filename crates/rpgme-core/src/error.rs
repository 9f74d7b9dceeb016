use std::path::PathBuf;

/// Alias for `Result<T, RpgError>`.
pub type RpgResult<T> = Result<T, RpgError>;

/// Errors raised at the edges of the editor: parsing names, URLs, and
/// configuration. The editing flow itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum RpgError {
    /// The name does not match any character field.
    #[error("unknown field: \"{name}\"{}", suggestion_suffix(.suggestion))]
    UnknownField {
        /// The name as given.
        name: String,
        /// The closest known field name, if any is similar enough.
        suggestion: Option<String>,
    },

    /// The name does not match any seed profile.
    #[error("unknown profile: \"{0}\" (expected classic or compact)")]
    UnknownProfile(String),

    /// A `field=value` assignment is missing its `=`.
    #[error("invalid assignment \"{0}\": expected field=value")]
    InvalidAssignment(String),

    /// A page URL could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The editor configuration file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    ConfigIo {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The editor configuration file is not valid JSON for an `EditorConfig`.
    #[error("invalid config {}: {source}", path.display())]
    ConfigFormat {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean \"{s}\"?)"),
        None => String::new(),
    }
}

/// A clipboard write that did not go through.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard is reachable from this process.
    #[error("clipboard unavailable")]
    Unavailable,

    /// The clipboard refused the text.
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}
