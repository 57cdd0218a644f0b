use std::sync::{Arc, PoisonError, RwLock};

use crate::parser::types::Ticket;

/// Session-scoped ticket store. The collection is replaced wholesale on a
/// new import and cleared on logout/reset, never mutated in place, so a
/// snapshot taken before a `replace` keeps observing the old collection.
#[derive(Default)]
pub struct AppState {
    tickets: RwLock<Arc<Vec<Ticket>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a new collection, discarding the previous reference.
    pub fn replace(&self, tickets: Vec<Ticket>) {
        let mut guard = self
            .tickets
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(tickets);
    }

    pub fn clear(&self) {
        self.replace(Vec::new());
    }

    /// Current collection reference. Safe to hold across a later `replace`.
    pub fn snapshot(&self) -> Arc<Vec<Ticket>> {
        let guard = self
            .tickets
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}
