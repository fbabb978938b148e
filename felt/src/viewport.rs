//! Window size tracking.

use std::sync::{Arc, RwLock};

use crate::element_box::BoxSize;
use crate::notify::{Notifier, Subscription};

/// Widths below this are laid out as mobile.
pub const MOBILE_BREAKPOINT: u32 = 1023;

/// Current window size, updated from the platform's resize events.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    size: Arc<RwLock<BoxSize>>,
    notifier: Notifier,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Arc::new(RwLock::new(BoxSize::new(width, height))),
            notifier: Notifier::new(),
        }
    }

    /// Record a new window size. Notifies only if it changed.
    pub fn resize(&self, width: u32, height: u32) {
        let size = BoxSize::new(width, height);
        let changed = {
            let mut current = self.size.write().unwrap_or_else(|e| e.into_inner());
            let changed = *current != size;
            *current = size;
            changed
        };
        if changed {
            self.notifier.notify();
        }
    }

    pub fn size(&self) -> BoxSize {
        *self.size.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_mobile(&self) -> bool {
        self.size().width < MOBILE_BREAKPOINT
    }

    pub fn subscribe(&self) -> Subscription {
        self.notifier.subscribe()
    }
}
