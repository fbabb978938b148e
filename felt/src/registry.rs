//! Override registry: a base value plus ordered patches from contributors.
//!
//! The effective value is recomputed on every read by folding each
//! contributor's patch onto a clone of the base, in the order contributors
//! first registered. A later contributor wins on colliding fields. Updating an
//! existing contributor keeps its position; removing and re-adding moves it to
//! the end.

use std::sync::{Arc, RwLock};

use crate::notify::{Notifier, Subscription};

/// A partial change that can be folded onto a value of type `T`.
pub trait Patch<T> {
    /// Apply this patch to `target` in place.
    fn apply(&self, target: &mut T);
}

#[derive(Debug)]
struct Inner<T, P> {
    base: T,
    entries: Vec<(String, P)>,
}

/// Shared registry of contributor patches over a base value.
///
/// Cheap to clone; all clones share the same state.
#[derive(Debug)]
pub struct OverrideRegistry<T, P> {
    inner: Arc<RwLock<Inner<T, P>>>,
    notifier: Notifier,
}

impl<T, P> Clone for OverrideRegistry<T, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            notifier: self.notifier.clone(),
        }
    }
}

impl<T: Default, P> Default for OverrideRegistry<T, P> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, P> OverrideRegistry<T, P> {
    /// Create a registry with the given base value and no overrides.
    pub fn new(base: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                base,
                entries: Vec::new(),
            })),
            notifier: Notifier::new(),
        }
    }

    /// Replace the base value.
    pub fn set_base(&self, base: T) {
        self.write(|inner| inner.base = base);
        self.notifier.notify();
    }

    /// Insert or update the patch for `id`.
    ///
    /// An existing contributor keeps its position in the fold order.
    pub fn set(&self, id: impl Into<String>, patch: P) {
        let id = id.into();
        self.write(|inner| match inner.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, existing)) => *existing = patch,
            None => {
                log::debug!("OverrideRegistry: registering '{}'", id);
                inner.entries.push((id, patch));
            }
        });
        self.notifier.notify();
    }

    /// Register a patch and return a guard that removes it when dropped.
    pub fn override_patch(&self, id: impl Into<String>, patch: P) -> OverrideGuard<T, P> {
        let id = id.into();
        self.set(id.clone(), patch);
        OverrideGuard {
            registry: self.clone(),
            id,
            active: true,
        }
    }

    /// Remove the patch for `id`.
    ///
    /// Returns false (and notifies nobody) if `id` was not registered.
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.write(|inner| {
            let before = inner.entries.len();
            inner.entries.retain(|(key, _)| key != id);
            inner.entries.len() != before
        });
        if removed {
            log::debug!("OverrideRegistry: removed '{}'", id);
            self.notifier.notify();
        }
        removed
    }

    /// Whether `id` currently contributes a patch.
    pub fn contains(&self, id: &str) -> bool {
        self.read(|inner| inner.entries.iter().any(|(key, _)| key == id))
    }

    /// Contributor IDs in fold order.
    pub fn contributors(&self) -> Vec<String> {
        self.read(|inner| inner.entries.iter().map(|(key, _)| key.clone()).collect())
    }

    /// Number of registered patches.
    pub fn len(&self) -> usize {
        self.read(|inner| inner.entries.len())
    }

    /// Check if no patches are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to base and patch changes.
    pub fn subscribe(&self) -> Subscription {
        self.notifier.subscribe()
    }

    fn read<R>(&self, f: impl FnOnce(&Inner<T, P>) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    fn write<R>(&self, f: impl FnOnce(&mut Inner<T, P>) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

impl<T: Clone, P> OverrideRegistry<T, P> {
    /// Get a clone of the base value.
    pub fn base(&self) -> T {
        self.read(|inner| inner.base.clone())
    }

    /// Get a clone of the patch registered for `id`.
    pub fn patch(&self, id: &str) -> Option<P>
    where
        P: Clone,
    {
        self.read(|inner| {
            inner
                .entries
                .iter()
                .find(|(key, _)| key == id)
                .map(|(_, patch)| patch.clone())
        })
    }
}

impl<T: Clone, P: Patch<T>> OverrideRegistry<T, P> {
    /// Compute the effective value: the base with every patch applied.
    pub fn effective(&self) -> T {
        self.read(|inner| {
            inner
                .entries
                .iter()
                .fold(inner.base.clone(), |mut acc, (_, patch)| {
                    patch.apply(&mut acc);
                    acc
                })
        })
    }
}

/// Removes its contributor's patch when dropped.
#[derive(Debug)]
#[must_use = "dropping the guard removes the override immediately"]
pub struct OverrideGuard<T, P> {
    registry: OverrideRegistry<T, P>,
    id: String,
    active: bool,
}

impl<T, P> OverrideGuard<T, P> {
    /// The contributor ID this guard owns.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace this contributor's patch, keeping its fold position.
    pub fn update(&self, patch: P) {
        self.registry.set(self.id.clone(), patch);
    }

    /// Remove the override now.
    pub fn remove(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.active {
            self.active = false;
            self.registry.remove(&self.id);
        }
    }
}

impl<T, P> Drop for OverrideGuard<T, P> {
    fn drop(&mut self) {
        self.release();
    }
}
