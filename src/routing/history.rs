use std::sync::Mutex;

use super::Navigator;

/// In-memory navigation history: a stack of visited paths.
///
/// `back` pops the current entry. With no previous entry it does nothing,
/// the same way a browser ignores `history.back()` on its first page.
#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<String>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a history at `path`.
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(vec![path.into()]),
        }
    }

    pub fn push(&self, path: impl Into<String>) {
        let path = path.into();
        tracing::debug!("History push: {}", path);
        self.entries
            .lock()
            .expect("history lock poisoned")
            .push(path);
    }

    pub fn current(&self) -> Option<String> {
        self.entries
            .lock()
            .expect("history lock poisoned")
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("history lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Navigator for History {
    fn back(&self) {
        let mut entries = self.entries.lock().expect("history lock poisoned");
        if entries.len() > 1 {
            if let Some(left) = entries.pop() {
                tracing::debug!("History back from {}", left);
            }
        } else {
            tracing::debug!("History back ignored: no previous entry");
        }
    }
}
