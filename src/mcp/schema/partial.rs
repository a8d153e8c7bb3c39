use serde::Serialize;

/// Result of a batch where individual items may fail without aborting the
/// rest. `errors` holds one human-readable line per skipped item.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Partial<T> {
    pub items: Vec<T>,
    pub errors: Vec<String>,
}

impl<T> Partial<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn record(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<T> Default for Partial<T> {
    fn default() -> Self {
        Self::new()
    }
}
