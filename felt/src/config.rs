//! UI configuration types.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// A site-wide announcement shown above the navbar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerProps {
    pub content: String,
    pub href: Option<String>,
}

impl BannerProps {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            href: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Whether the banner links somewhere.
    pub fn is_interactive(&self) -> bool {
        self.href.is_some()
    }
}

/// Brand and announcement configuration.
///
/// Nested providers refine their parent's configuration with
/// [`nested`](Self::nested).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: Theme,
    pub banner: Option<BannerProps>,
}

impl UiConfig {
    /// Create a config for the given brand.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    /// Set the banner.
    pub fn banner(mut self, banner: BannerProps) -> Self {
        self.banner = Some(banner);
        self
    }

    /// Combine with a child provider's config.
    ///
    /// The child's theme always wins; its banner wins when set.
    pub fn nested(&self, child: &UiConfig) -> UiConfig {
        UiConfig {
            theme: child.theme,
            banner: child.banner.clone().or_else(|| self.banner.clone()),
        }
    }
}
