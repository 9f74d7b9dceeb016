//! Clipboard capability used by the share action.

use crate::error::ClipboardError;

/// Somewhere share links can be copied to.
pub trait Clipboard {
    /// Copy `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps the last copied text in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferClipboard {
    contents: Option<String>,
}

impl BufferClipboard {
    /// The last copied text.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for BufferClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// A clipboard that refuses every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_keeps_last_write() {
        let mut clip = BufferClipboard::default();
        assert_eq!(clip.contents(), None);
        clip.write_text("one").unwrap();
        clip.write_text("two").unwrap();
        assert_eq!(clip.contents(), Some("two"));
    }

    #[test]
    fn no_clipboard_fails() {
        assert!(NoClipboard.write_text("x").is_err());
    }
}
