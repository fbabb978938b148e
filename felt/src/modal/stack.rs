use std::sync::{Arc, RwLock};

use crate::notify::{Notifier, Subscription};

use super::slot::ModalSlot;

/// Ordered set of currently open modals, oldest first.
///
/// The stack index of a modal is its distance from the top: the most
/// recently opened modal is at index 0. Registration is deduplicated, so a
/// modal that reports "open" twice still occupies a single position.
#[derive(Debug, Clone, Default)]
pub struct ModalStack {
    open: Arc<RwLock<Vec<String>>>,
    notifier: Notifier,
}

impl ModalStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as open, pushing it on top.
    ///
    /// Returns false if `id` was already open; its position is unchanged.
    pub fn register(&self, id: impl Into<String>) -> bool {
        let id = id.into();
        let added = {
            let mut open = self.open.write().unwrap_or_else(|e| e.into_inner());
            if open.contains(&id) {
                false
            } else {
                log::debug!("ModalStack: open '{}' at depth {}", id, open.len());
                open.push(id);
                true
            }
        };
        if added {
            self.notifier.notify();
        }
        added
    }

    /// Mark `id` as closed.
    ///
    /// Returns false if `id` was not open.
    pub fn unregister(&self, id: &str) -> bool {
        let removed = {
            let mut open = self.open.write().unwrap_or_else(|e| e.into_inner());
            let before = open.len();
            open.retain(|i| i != id);
            open.len() != before
        };
        if removed {
            log::debug!("ModalStack: closed '{}'", id);
            self.notifier.notify();
        }
        removed
    }

    /// Depth of `id` from the top, or `None` if it is not open.
    pub fn stack_index(&self, id: &str) -> Option<usize> {
        let open = self.open.read().unwrap_or_else(|e| e.into_inner());
        open.iter()
            .position(|i| i == id)
            .map(|position| open.len() - position - 1)
    }

    /// Whether `id` is open.
    pub fn contains(&self, id: &str) -> bool {
        self.stack_index(id).is_some()
    }

    /// The topmost open modal.
    pub fn top(&self) -> Option<String> {
        self.open
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    /// Open modal IDs, top first.
    pub fn ids(&self) -> Vec<String> {
        self.open
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .rev()
            .cloned()
            .collect()
    }

    /// Number of open modals.
    pub fn len(&self) -> usize {
        self.open.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Check if no modal is open.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a slot for a new modal instance with a generated ID.
    pub fn slot(&self) -> ModalSlot {
        ModalSlot::new(self.clone())
    }

    /// Subscribe to open/close changes.
    pub fn subscribe(&self) -> Subscription {
        self.notifier.subscribe()
    }
}
