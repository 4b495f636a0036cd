//! Navigation history.
//!
//! The reader records page changes through the [`History`] trait, the way a
//! browser tab records `pushState` calls. [`MemoryHistory`] keeps the entries
//! in a list with a cursor for back/forward.

/// Session history the reader pushes page changes onto.
pub trait History {
    /// URL of the entry the user is currently on.
    fn current_url(&self) -> Option<&str>;

    /// Add an entry after the current one, dropping any forward entries.
    fn push(&mut self, url: &str, title: &str);

    /// Move one entry back and return its URL.
    fn back(&mut self) -> Option<String>;

    /// Move one entry forward and return its URL.
    fn forward(&mut self) -> Option<String>;
}

/// A recorded history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: String,
    pub title: String,
}

/// In-memory [`History`].
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    position: usize,
}

impl MemoryHistory {
    /// Empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// History whose first entry is the URL the session was opened at.
    #[must_use]
    pub fn starting_at(url: &str) -> Self {
        Self {
            entries: vec![HistoryEntry {
                url: url.to_owned(),
                title: String::new(),
            }],
            position: 0,
        }
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for MemoryHistory {
    fn current_url(&self) -> Option<&str> {
        self.entries.get(self.position).map(|e| e.url.as_str())
    }

    fn push(&mut self, url: &str, title: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.position + 1);
        }
        self.entries.push(HistoryEntry {
            url: url.to_owned(),
            title: title.to_owned(),
        });
        self.position = self.entries.len() - 1;
    }

    fn back(&mut self) -> Option<String> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.current_url().map(str::to_owned)
    }

    fn forward(&mut self) -> Option<String> {
        if self.position + 1 >= self.entries.len() {
            return None;
        }
        self.position += 1;
        self.current_url().map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty() {
        let mut history = MemoryHistory::new();
        assert_eq!(history.current_url(), None);
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_and_walk() {
        let mut history = MemoryHistory::starting_at("/");
        history.push("/a", "A");
        history.push("/b", "B");
        assert_eq!(history.current_url(), Some("/b"));

        assert_eq!(history.back().as_deref(), Some("/a"));
        assert_eq!(history.back().as_deref(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward().as_deref(), Some("/a"));
        assert_eq!(history.current_url(), Some("/a"));
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = MemoryHistory::starting_at("/");
        history.push("/a", "A");
        history.push("/b", "B");
        history.back();
        history.push("/c", "C");

        let urls: Vec<_> = history.entries().iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, vec!["/", "/a", "/c"]);
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_onto_empty() {
        let mut history = MemoryHistory::new();
        history.push("/a", "A");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_url(), Some("/a"));
    }
}
