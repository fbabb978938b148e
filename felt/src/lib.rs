pub mod config;
pub mod context;
pub mod element_box;
pub mod env;
pub mod error;
pub mod id;
pub mod layout;
pub mod modal;
pub mod notify;
pub mod path;
pub mod registry;
pub mod theme;
pub mod viewport;

pub use context::{UiContext, UiContextBuilder};

pub mod prelude {
    pub use crate::config::{BannerProps, UiConfig};
    pub use crate::context::{UiContext, UiContextBuilder};
    pub use crate::element_box::{
        BoxSize, DomRect, DynamicSize, ElementBoxes, ElementKind, ElementMetrics, ElementRef,
        Observation, ResizeBackend, ResizeEntry, TrackableElement,
    };
    pub use crate::env::{EnvMap, Environment};
    pub use crate::error::{ConfigError, LayoutError, PathError};
    pub use crate::id::ContributorId;
    pub use crate::layout::{
        Container, FooterLink, HeroProps, LayoutConfig, LayoutConfigPatch, LayoutConfigRegistry,
        LayoutProps, LayoutProvider, Tab,
    };
    pub use crate::modal::{ModalSlot, ModalStack, StackVisuals};
    pub use crate::notify::Subscription;
    pub use crate::registry::{OverrideGuard, OverrideRegistry, Patch};
    pub use crate::theme::{DocumentRoot, Theme, ThemeSettings};
    pub use crate::viewport::Viewport;
}
