//! The UI context: every piece of shared UI state, constructed explicitly.
//!
//! A front-end builds one `UiContext` at startup and passes clones down to
//! whatever needs it. Clones share state, so a modal opened through one
//! clone is visible through all of them.
//!
//! # Example
//!
//! ```
//! use felt::prelude::*;
//!
//! let ui = UiContext::builder()
//!     .config(UiConfig::new(Theme::PurePoker))
//!     .origin("https://zkpoker.app")
//!     .build();
//!
//! assert_eq!(ui.environment(), Environment::Production);
//!
//! let mut slot = ui.modals().slot();
//! slot.set_open(true);
//! assert_eq!(slot.stack_index(), Some(0));
//!
//! ui.shutdown();
//! ```
//!
//! # Lifecycle
//!
//! - [`UiContextBuilder::build`] creates the registries. Nothing touches the
//!   document until [`UiContext::attach`].
//! - [`UiContext::attach`] writes the theme and full-screen state to the
//!   document root; call it again after changing either.
//! - [`UiContext::shutdown`] disconnects the resize backend and drops all
//!   cached element sizes. Contributors still holding guards can drop them
//!   afterwards without effect on other state.

use std::sync::Arc;

use crate::config::UiConfig;
use crate::element_box::{ElementBoxes, ResizeBackend};
use crate::env::Environment;
use crate::layout::{LayoutConfig, LayoutConfigRegistry, LayoutProps, LayoutProvider};
use crate::modal::ModalStack;
use crate::theme::{DocumentRoot, ThemeSettings, apply_theme};
use crate::viewport::Viewport;

/// Shared UI state for one mounted front-end.
#[derive(Debug, Clone)]
pub struct UiContext {
    config: Arc<UiConfig>,
    theme: ThemeSettings,
    environment: Environment,
    modals: ModalStack,
    layout: LayoutProvider,
    layout_config: LayoutConfigRegistry,
    boxes: ElementBoxes,
    viewport: Viewport,
}

impl UiContext {
    /// Start building a context.
    pub fn builder() -> UiContextBuilder {
        UiContextBuilder::new()
    }

    /// Brand and banner configuration.
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Color scheme settings.
    pub fn theme(&self) -> ThemeSettings {
        self.theme
    }

    /// Deployment environment.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Open modals.
    pub fn modals(&self) -> &ModalStack {
        &self.modals
    }

    /// Page layout and its overrides.
    pub fn layout(&self) -> &LayoutProvider {
        &self.layout
    }

    /// Site-wide layout config and its overrides.
    pub fn layout_config(&self) -> &LayoutConfigRegistry {
        &self.layout_config
    }

    /// Observed element sizes.
    pub fn boxes(&self) -> &ElementBoxes {
        &self.boxes
    }

    /// Window size.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// A child context with refined configuration.
    ///
    /// Registries are shared with the parent; only config and theme differ.
    pub fn nested(&self, config: &UiConfig, theme: ThemeSettings) -> UiContext {
        UiContext {
            config: Arc::new(self.config.nested(config)),
            theme,
            ..self.clone()
        }
    }

    /// Write theme and full-screen state to the document root.
    pub fn attach(&self, root: &dyn DocumentRoot) {
        apply_theme(root, self.config.theme);
        self.layout.apply_to(root);
    }

    /// Tear down platform observation.
    pub fn shutdown(&self) {
        log::debug!("UiContext: shutting down");
        self.boxes.disconnect();
    }
}

impl Default for UiContext {
    fn default() -> Self {
        UiContextBuilder::new().build()
    }
}

/// Builder for [`UiContext`].
#[derive(Default)]
pub struct UiContextBuilder {
    config: UiConfig,
    theme: ThemeSettings,
    environment: Environment,
    layout: LayoutProps,
    layout_config: LayoutConfig,
    backend: Option<Arc<dyn ResizeBackend>>,
    viewport: (u32, u32),
}

impl UiContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set brand and banner configuration.
    pub fn config(mut self, config: UiConfig) -> Self {
        self.config = config;
        self
    }

    /// Set color scheme settings.
    pub fn theme(mut self, theme: ThemeSettings) -> Self {
        self.theme = theme;
        self
    }

    /// Set the environment explicitly.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Detect the environment from the page origin.
    pub fn origin(mut self, origin: &str) -> Self {
        self.environment = Environment::detect(Some(origin), false);
        self
    }

    /// Set the base page layout.
    pub fn layout(mut self, layout: LayoutProps) -> Self {
        self.layout = layout;
        self
    }

    /// Set the base layout config.
    pub fn layout_config(mut self, layout_config: LayoutConfig) -> Self {
        self.layout_config = layout_config;
        self
    }

    /// Use a platform resize observer. Without one, size observation is a
    /// no-op.
    pub fn resize_backend(mut self, backend: Arc<dyn ResizeBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the initial window size.
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = (width, height);
        self
    }

    pub fn build(self) -> UiContext {
        let boxes = match self.backend {
            Some(backend) => ElementBoxes::new(backend),
            None => ElementBoxes::detached(),
        };
        log::debug!(
            "UiContext: theme '{}', environment '{}', resize observer {}",
            self.config.theme,
            self.environment,
            if boxes.is_available() { "available" } else { "unavailable" }
        );
        let (width, height) = self.viewport;
        UiContext {
            config: Arc::new(self.config),
            theme: self.theme,
            environment: self.environment,
            modals: ModalStack::new(),
            layout: LayoutProvider::new(self.layout),
            layout_config: LayoutConfigRegistry::new(self.layout_config),
            boxes,
            viewport: Viewport::new(width, height),
        }
    }
}
