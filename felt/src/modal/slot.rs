use crate::id::ContributorId;

use super::stack::ModalStack;
use super::visuals::StackVisuals;

/// One modal instance's membership in a [`ModalStack`].
///
/// Follows the modal's `open` flag: opening registers it, closing or
/// dropping the slot unregisters it.
#[derive(Debug)]
pub struct ModalSlot {
    stack: ModalStack,
    id: String,
    open: bool,
}

impl ModalSlot {
    /// Create a closed slot with a generated ID.
    pub fn new(stack: ModalStack) -> Self {
        Self::with_id(stack, ContributorId::new())
    }

    /// Create a closed slot with a caller-chosen ID.
    pub fn with_id(stack: ModalStack, id: impl Into<String>) -> Self {
        Self {
            stack,
            id: id.into(),
            open: false,
        }
    }

    /// The ID this slot registers under.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sync the slot with the modal's open state.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if open {
            self.stack.register(self.id.clone());
        } else {
            self.stack.unregister(&self.id);
        }
    }

    /// Whether the modal is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Depth from the top of the stack, or `None` while closed.
    pub fn stack_index(&self) -> Option<usize> {
        self.stack.stack_index(&self.id)
    }

    /// Visual stacking parameters for the current depth.
    ///
    /// A closed modal renders as if it were on top.
    pub fn visuals(&self) -> StackVisuals {
        StackVisuals::for_index(self.stack_index().unwrap_or(0))
    }
}

impl Drop for ModalSlot {
    fn drop(&mut self) {
        self.stack.unregister(&self.id);
    }
}
