use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::notify::{Notifier, Subscription};

use super::geometry::{BoxSize, ElementMetrics, ScrollMetrics};
use super::observer::{ElementRef, ResizeBackend, ResizeEntry, TrackableElement};

/// Last known content size of every observed element, keyed by ID.
///
/// One platform observer is shared by all elements. Without a backend
/// (server rendering, tests) every observation is a no-op and sizes read as
/// `None`.
#[derive(Clone)]
pub struct ElementBoxes {
    boxes: Arc<RwLock<HashMap<String, BoxSize>>>,
    backend: Option<Arc<dyn ResizeBackend>>,
    connected: Arc<AtomicBool>,
    notifier: Notifier,
}

impl ElementBoxes {
    /// Create a registry backed by a platform observer.
    pub fn new(backend: Arc<dyn ResizeBackend>) -> Self {
        Self::with_backend(Some(backend))
    }

    /// Create a registry with no observation primitive.
    pub fn detached() -> Self {
        Self::with_backend(None)
    }

    fn with_backend(backend: Option<Arc<dyn ResizeBackend>>) -> Self {
        let connected = backend.is_some();
        Self {
            boxes: Arc::new(RwLock::new(HashMap::new())),
            backend,
            connected: Arc::new(AtomicBool::new(connected)),
            notifier: Notifier::new(),
        }
    }

    /// Whether observations reach a live platform observer.
    pub fn is_available(&self) -> bool {
        self.active_backend().is_some()
    }

    /// Start tracking `element` under `id`.
    ///
    /// The element is measured immediately from its bounding rect, so the
    /// size is readable before the first resize callback. Missing elements
    /// and a missing backend yield a no-op observation.
    pub fn observe(&self, element: Option<&ElementRef>, id: impl Into<String>) -> Observation {
        let id = id.into();
        let (Some(backend), Some(element)) = (self.active_backend(), element) else {
            return Observation {
                boxes: None,
                element: None,
                id,
            };
        };

        element.set_tag(&id);
        backend.observe(element.as_ref(), element.kind().box_option());
        self.set_size(&id, Some(element.bounding_rect().size()));
        log::debug!("ElementBoxes: observing '{}'", id);

        Observation {
            boxes: Some(self.clone()),
            element: Some(Arc::clone(element)),
            id,
        }
    }

    /// Stop tracking `element` and forget its size.
    pub fn unobserve(&self, element: &dyn TrackableElement, id: &str) {
        if let Some(backend) = self.active_backend() {
            backend.unobserve(element);
        }
        self.set_size(id, None);
        log::debug!("ElementBoxes: unobserved '{}'", id);
    }

    /// Last known size of `id`.
    pub fn size(&self, id: &str) -> Option<BoxSize> {
        self.boxes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .copied()
    }

    /// Size of `id`, falling back to a live measurement of `element`.
    ///
    /// Returns `None` when nothing is cached and there is no element.
    pub fn element_metrics(&self, element: Option<&ElementRef>, id: &str) -> Option<ElementMetrics> {
        if let Some(size) = self.size(id) {
            return Some(ElementMetrics { size, scroll: None });
        }
        element.map(|element| measure(element.as_ref()))
    }

    /// Apply a batch of platform resize entries.
    ///
    /// Entries without a content rect or tag, and entries for IDs that are no
    /// longer observed, are ignored.
    pub fn handle_entries<I>(&self, entries: I)
    where
        I: IntoIterator<Item = ResizeEntry>,
    {
        let mut changed = false;
        {
            let mut boxes = self.boxes.write().unwrap_or_else(|e| e.into_inner());
            for entry in entries {
                let Some(rect) = entry.content_rect else {
                    continue;
                };
                let Some(tag) = entry.tag.filter(|tag| !tag.is_empty()) else {
                    continue;
                };
                let size = rect.size();
                match boxes.get_mut(&tag) {
                    Some(current) if *current != size => {
                        *current = size;
                        changed = true;
                    }
                    Some(_) => {}
                    None => log::debug!("ElementBoxes: ignoring resize for untracked '{}'", tag),
                }
            }
        }
        if changed {
            self.notifier.notify();
        }
    }

    /// Disconnect the platform observer and forget all sizes.
    pub fn disconnect(&self) {
        if self.connected.swap(false, Ordering::SeqCst) {
            if let Some(backend) = &self.backend {
                backend.disconnect();
            }
            log::debug!("ElementBoxes: disconnected");
        }
        let had_entries = {
            let mut boxes = self.boxes.write().unwrap_or_else(|e| e.into_inner());
            let had_entries = !boxes.is_empty();
            boxes.clear();
            had_entries
        };
        if had_entries {
            self.notifier.notify();
        }
    }

    /// Number of tracked elements.
    pub fn len(&self) -> usize {
        self.boxes.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Check if no element is tracked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to size changes.
    pub fn subscribe(&self) -> Subscription {
        self.notifier.subscribe()
    }

    fn active_backend(&self) -> Option<&Arc<dyn ResizeBackend>> {
        self.backend
            .as_ref()
            .filter(|_| self.connected.load(Ordering::SeqCst))
    }

    fn set_size(&self, id: &str, size: Option<BoxSize>) {
        let changed = {
            let mut boxes = self.boxes.write().unwrap_or_else(|e| e.into_inner());
            match size {
                Some(size) => boxes.insert(id.to_string(), size) != Some(size),
                None => boxes.remove(id).is_some(),
            }
        };
        if changed {
            self.notifier.notify();
        }
    }
}

impl Default for ElementBoxes {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for ElementBoxes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementBoxes")
            .field("tracked", &self.len())
            .field("available", &self.is_available())
            .finish()
    }
}

/// Take a live measurement of `element`, including scroll metrics.
pub fn measure(element: &dyn TrackableElement) -> ElementMetrics {
    let size = element.bounding_rect().size();
    let scroll = element.scroll_size();
    ElementMetrics {
        size,
        scroll: Some(ScrollMetrics {
            offset: element.offset_size(),
            client: element.client_size(),
            scroll,
            is_scrollable_x: scroll.width > size.width,
            is_scrollable_y: scroll.height > size.height,
        }),
    }
}

/// An active element observation; unobserves when dropped.
#[must_use = "dropping the observation stops tracking immediately"]
pub struct Observation {
    boxes: Option<ElementBoxes>,
    element: Option<ElementRef>,
    id: String,
}

impl Observation {
    /// The ID the element is tracked under.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// False for no-op observations (no backend or no element).
    pub fn is_active(&self) -> bool {
        self.boxes.is_some()
    }

    /// Stop tracking now.
    pub fn unobserve(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let (Some(boxes), Some(element)) = (self.boxes.take(), self.element.take()) {
            boxes.unobserve(element.as_ref(), &self.id);
        }
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observation")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
