//! Page layout with path-scoped overrides from mounted components.

use serde::Serialize;

use crate::error::LayoutError;
use crate::notify::Subscription;
use crate::path::Path;
use crate::registry::{OverrideGuard, OverrideRegistry};
use crate::theme::DocumentRoot;

use super::props::{LayoutProps, PathOverride};

/// Class toggled on the document root while a page is full screen.
pub const FULL_SCREEN_CLASS: &str = "global-full-screen";

/// Guard returned by [`LayoutProvider::override_prop`].
pub type LayoutOverrideGuard = OverrideGuard<LayoutProps, PathOverride>;

/// Holds the page layout and the overrides contributed on top of it.
///
/// The page sets the base with [`update_layout`](Self::update_layout); nested
/// components tweak single fields (`"hero.title"`, `"navbar.hideUser"`)
/// without clobbering each other.
#[derive(Debug, Clone, Default)]
pub struct LayoutProvider {
    registry: OverrideRegistry<LayoutProps, PathOverride>,
}

impl LayoutProvider {
    /// Create a provider with the given base layout.
    pub fn new(base: LayoutProps) -> Self {
        Self {
            registry: OverrideRegistry::new(base),
        }
    }

    /// Replace the base layout.
    pub fn update_layout(&self, props: LayoutProps) {
        self.registry.set_base(props);
    }

    /// Override the value at `path` until the returned guard is dropped.
    ///
    /// Registering again with the same `id` replaces the previous value.
    pub fn override_prop<V: Serialize>(
        &self,
        id: impl Into<String>,
        path: &str,
        value: V,
    ) -> Result<LayoutOverrideGuard, LayoutError> {
        let patch = Self::build_patch(path, value)?;
        Ok(self.registry.override_patch(id, patch))
    }

    /// Set or replace the override for `id` without a guard.
    ///
    /// The caller removes it with [`remove_override`](Self::remove_override).
    pub fn set_override<V: Serialize>(
        &self,
        id: impl Into<String>,
        path: &str,
        value: V,
    ) -> Result<(), LayoutError> {
        let patch = Self::build_patch(path, value)?;
        self.registry.set(id, patch);
        Ok(())
    }

    /// Remove the override for `id`. Returns false if none was registered.
    pub fn remove_override(&self, id: &str) -> bool {
        self.registry.remove(id)
    }

    /// The base layout without overrides.
    pub fn base(&self) -> LayoutProps {
        self.registry.base()
    }

    /// The effective layout, with the container resolved to its default.
    ///
    /// `is_full_screen` is included for convenience; pages normally observe it
    /// through the document class set by [`apply_to`](Self::apply_to) rather
    /// than reading it here.
    pub fn props(&self) -> LayoutProps {
        let mut props = self.registry.effective();
        props.container = Some(props.container());
        props
    }

    /// Whether the effective layout is full screen.
    pub fn is_full_screen(&self) -> bool {
        self.registry.effective().is_full_screen()
    }

    /// Toggle the full-screen class on the document root.
    pub fn apply_to(&self, root: &dyn DocumentRoot) {
        if self.is_full_screen() {
            root.add_class(FULL_SCREEN_CLASS);
        } else {
            root.remove_class(FULL_SCREEN_CLASS);
        }
    }

    /// Number of active overrides.
    pub fn override_count(&self) -> usize {
        self.registry.len()
    }

    /// Subscribe to layout changes.
    pub fn subscribe(&self) -> Subscription {
        self.registry.subscribe()
    }

    fn build_patch<V: Serialize>(path: &str, value: V) -> Result<PathOverride, LayoutError> {
        let path = Path::parse(path)?;
        let root = path.root().key();
        if !LayoutProps::FIELDS.contains(&root.as_str()) {
            return Err(LayoutError::UnknownField(root));
        }
        Ok(PathOverride::new(path, serde_json::to_value(value)?))
    }
}
