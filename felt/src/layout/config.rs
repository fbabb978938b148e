//! Site-wide layout configuration: navigation, footer links, navbar slots.

use serde::{Deserialize, Deserializer, Serialize};

use crate::registry::{OverrideGuard, OverrideRegistry, Patch};

/// A link shown in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterLink {
    pub label: String,
    pub href: Option<String>,
    /// Opens in a new tab.
    pub is_out_link: bool,
}

impl FooterLink {
    /// Create a footer link with a label and target.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            is_out_link: false,
        }
    }
}

/// A navigable navbar tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkTab {
    pub label: String,
    pub href: Option<String>,
    pub coming_soon: bool,
    pub mobile_only: bool,
}

/// An entry in the navbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Tab {
    Link(LinkTab),
    #[serde(alias = "seperator")]
    Separator {
        #[serde(default, rename = "mobileOnly")]
        mobile_only: bool,
    },
}

impl Tab {
    /// A link tab with a label and target.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Tab::Link(LinkTab {
            label: label.into(),
            href: Some(href.into()),
            ..Default::default()
        })
    }

    /// Whether this tab is only shown in the mobile menu.
    pub fn is_mobile_only(&self) -> bool {
        match self {
            Tab::Link(link) => link.mobile_only,
            Tab::Separator { mobile_only } => *mobile_only,
        }
    }

    /// Link tabs only, as shown in the collapsed mobile menu.
    pub fn links(tabs: &[Tab]) -> impl Iterator<Item = &LinkTab> {
        tabs.iter().filter_map(|tab| match tab {
            Tab::Link(link) => Some(link),
            Tab::Separator { .. } => None,
        })
    }
}

/// Layout configuration shared by every page.
///
/// `navbar_user` and `navbar_right_side` name render slots; the front-end
/// maps them to its own components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub footer_links: Vec<FooterLink>,
    pub navbar_tabs: Vec<Tab>,
    pub navbar_user: Option<String>,
    pub navbar_right_side: Option<String>,
    pub is_overlay: Option<bool>,
    pub hide_user: Option<bool>,
}

/// Partial [`LayoutConfig`]; set fields replace the whole field.
///
/// Optional fields are doubly wrapped: `None` leaves the field alone,
/// `Some(None)` clears it and `Some(Some(v))` sets it. In JSON an absent key
/// leaves the field and an explicit `null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_links: Option<Vec<FooterLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navbar_tabs: Option<Vec<Tab>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub navbar_user: Option<Option<String>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub navbar_right_side: Option<Option<String>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub is_overlay: Option<Option<bool>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub hide_user: Option<Option<bool>>,
}

// A key that is present, even as `null`, counts as set.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl LayoutConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn footer_links(mut self, links: Vec<FooterLink>) -> Self {
        self.footer_links = Some(links);
        self
    }

    pub fn navbar_tabs(mut self, tabs: Vec<Tab>) -> Self {
        self.navbar_tabs = Some(tabs);
        self
    }

    pub fn navbar_user(mut self, slot: impl Into<String>) -> Self {
        self.navbar_user = Some(Some(slot.into()));
        self
    }

    pub fn navbar_right_side(mut self, slot: impl Into<String>) -> Self {
        self.navbar_right_side = Some(Some(slot.into()));
        self
    }

    pub fn overlay(mut self, is_overlay: bool) -> Self {
        self.is_overlay = Some(Some(is_overlay));
        self
    }

    pub fn hide_user(mut self, hide_user: bool) -> Self {
        self.hide_user = Some(Some(hide_user));
        self
    }

    pub fn clear_navbar_user(mut self) -> Self {
        self.navbar_user = Some(None);
        self
    }

    pub fn clear_navbar_right_side(mut self) -> Self {
        self.navbar_right_side = Some(None);
        self
    }

    pub fn clear_overlay(mut self) -> Self {
        self.is_overlay = Some(None);
        self
    }

    pub fn clear_hide_user(mut self) -> Self {
        self.hide_user = Some(None);
        self
    }
}

impl Patch<LayoutConfig> for LayoutConfigPatch {
    fn apply(&self, target: &mut LayoutConfig) {
        if let Some(links) = &self.footer_links {
            target.footer_links = links.clone();
        }
        if let Some(tabs) = &self.navbar_tabs {
            target.navbar_tabs = tabs.clone();
        }
        if let Some(slot) = &self.navbar_user {
            target.navbar_user = slot.clone();
        }
        if let Some(slot) = &self.navbar_right_side {
            target.navbar_right_side = slot.clone();
        }
        if let Some(is_overlay) = self.is_overlay {
            target.is_overlay = is_overlay;
        }
        if let Some(hide_user) = self.hide_user {
            target.hide_user = hide_user;
        }
    }
}

/// Registry of layout config overrides from mounted pages.
pub type LayoutConfigRegistry = OverrideRegistry<LayoutConfig, LayoutConfigPatch>;

/// Guard returned by [`LayoutConfigRegistry::override_patch`].
pub type LayoutConfigGuard = OverrideGuard<LayoutConfig, LayoutConfigPatch>;
