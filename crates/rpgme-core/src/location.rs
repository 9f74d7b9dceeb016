//! Navigation state: the address the editor reads its seed from and
//! writes it back to.

use url::Url;

use crate::error::RpgResult;

/// A navigable location with session history.
pub trait Location {
    /// The current address.
    fn current(&self) -> &Url;

    /// Replace the current history entry without navigating.
    fn replace(&mut self, url: Url);

    /// Push a new history entry and make it current.
    fn push(&mut self, url: Url);
}

/// In-process session history: a list of entries and a cursor.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Url>,
    cursor: usize,
}

impl MemoryHistory {
    /// A history holding a single entry.
    pub fn new(url: Url) -> Self {
        Self {
            entries: vec![url],
            cursor: 0,
        }
    }

    /// Parse `href` and start a history at it.
    pub fn parse(href: &str) -> RpgResult<Self> {
        Ok(Self::new(Url::parse(href)?))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Url] {
        &self.entries
    }

    /// Move one entry back. Returns false at the start.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move one entry forward. Returns false at the end.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl Location for MemoryHistory {
    fn current(&self) -> &Url {
        &self.entries[self.cursor]
    }

    fn replace(&mut self, url: Url) {
        self.entries[self.cursor] = url;
    }

    fn push(&mut self, url: Url) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url);
        self.cursor = self.entries.len() - 1;
    }
}
