use std::cell::RefCell;

use shared::{
    domain::{ContentItem, DEFAULT_CONTENT_PREFIX},
    error::AppError,
};
use tracing::debug;

/// Append-only source of screen content.
pub trait ItemRepository {
    fn items(&self) -> Vec<ContentItem>;
    fn current(&self) -> Result<ContentItem, AppError>;
    fn add_item(&self);

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store seeded with one unsuffixed item.
///
/// Appended items are named `<prefix>.<n>` where `n` is the item count before
/// the append, so the first append is `.1`.
#[derive(Debug)]
pub struct InMemoryItemStore {
    prefix: String,
    items: RefCell<Vec<ContentItem>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_CONTENT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let seed = ContentItem::new(prefix.clone());
        Self {
            prefix,
            items: RefCell::new(vec![seed]),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRepository for InMemoryItemStore {
    fn items(&self) -> Vec<ContentItem> {
        self.items.borrow().clone()
    }

    fn current(&self) -> Result<ContentItem, AppError> {
        self.items
            .borrow()
            .last()
            .cloned()
            .ok_or(AppError::EmptyStore)
    }

    fn add_item(&self) {
        let mut items = self.items.borrow_mut();
        let item = ContentItem::new(format!("{}.{}", self.prefix, items.len()));
        debug!(content = item.content(), count = items.len() + 1, "appended item");
        items.push(item);
    }

    fn len(&self) -> usize {
        self.items.borrow().len()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
