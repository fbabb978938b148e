//! Page layout properties and the path-scoped overrides applied to them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::{Path, set_at_path};
use crate::registry::Patch;

/// Width of the main content container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    #[default]
    Default,
    Large,
}

/// Navbar options carried by the layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavbarProps {
    pub hide_user: Option<bool>,
}

/// An image reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub src: String,
    pub alt: Option<String>,
}

/// A call-to-action pill shown under the hero title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cta {
    pub label: String,
    pub href: Option<String>,
}

/// Hero banner at the top of a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroProps {
    pub title: String,
    pub sub_title: Option<String>,
    pub image: Option<Image>,
    pub mobile_image: Option<Image>,
    pub ctas: Vec<Cta>,
}

/// Layout of the page shell: navbar, hero, main container and footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutProps {
    pub navbar: Option<NavbarProps>,
    pub container: Option<Container>,
    pub is_full_screen: Option<bool>,
    pub class_name: Option<String>,
    pub footer: Option<bool>,
    pub hero: Option<HeroProps>,
}

impl LayoutProps {
    /// Serialized names of the top-level fields an override path may start with.
    pub const FIELDS: [&'static str; 6] = [
        "navbar",
        "container",
        "isFullScreen",
        "className",
        "footer",
        "hero",
    ];

    /// The container width, falling back to [`Container::Default`].
    pub fn container(&self) -> Container {
        self.container.unwrap_or_default()
    }

    /// Whether the page takes over the whole screen.
    pub fn is_full_screen(&self) -> bool {
        self.is_full_screen.unwrap_or(false)
    }

    /// Whether the footer is shown.
    pub fn has_footer(&self) -> bool {
        self.footer.unwrap_or(false)
    }
}

/// Sets a single value at a path inside the JSON form of the target.
///
/// A patch whose result no longer deserializes into the target type is
/// skipped and logged; the target is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PathOverride {
    pub path: Path,
    pub value: Value,
}

impl PathOverride {
    /// Create a path override from an already-parsed path.
    pub fn new(path: Path, value: Value) -> Self {
        Self { path, value }
    }
}

impl<T: Serialize + DeserializeOwned> Patch<T> for PathOverride {
    fn apply(&self, target: &mut T) {
        let mut tree = match serde_json::to_value(&*target) {
            Ok(tree) => tree,
            Err(err) => {
                log::warn!("Skipping override at '{}': {}", self.path, err);
                return;
            }
        };
        set_at_path(&mut tree, &self.path, self.value.clone());
        match serde_json::from_value(tree) {
            Ok(patched) => *target = patched,
            Err(err) => log::warn!("Skipping override at '{}': {}", self.path, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn apply(props: &mut LayoutProps, path: &str, value: Value) {
        PathOverride::new(Path::parse(path).unwrap(), value).apply(props);
    }

    #[test]
    fn test_field_names_match_serialization() {
        let tree = serde_json::to_value(LayoutProps::default()).unwrap();
        let keys: Vec<&str> = tree.as_object().unwrap().keys().map(String::as_str).collect();
        for field in LayoutProps::FIELDS {
            assert!(keys.contains(&field), "missing {field}");
        }
        assert_eq!(keys.len(), LayoutProps::FIELDS.len());
    }

    #[test]
    fn test_nested_override_creates_parent() {
        let mut props = LayoutProps::default();
        apply(&mut props, "navbar.hideUser", json!(true));
        assert_eq!(props.navbar, Some(NavbarProps { hide_user: Some(true) }));
    }

    #[test]
    fn test_hero_cta_override() {
        let mut props = LayoutProps::default();
        apply(&mut props, "hero.title", json!("Tournaments"));
        apply(&mut props, "hero.ctas[0].label", json!("Join"));

        let hero = props.hero.unwrap();
        assert_eq!(hero.title, "Tournaments");
        assert_eq!(hero.ctas, vec![Cta { label: "Join".into(), href: None }]);
    }

    #[test]
    fn test_type_mismatch_leaves_target_untouched() {
        let mut props = LayoutProps {
            footer: Some(true),
            ..Default::default()
        };
        apply(&mut props, "footer", json!("yes"));
        assert_eq!(props.footer, Some(true));
    }

    #[test]
    fn test_container_defaults() {
        let mut props = LayoutProps::default();
        assert_eq!(props.container(), Container::Default);
        apply(&mut props, "container", json!("large"));
        assert_eq!(props.container(), Container::Large);
    }
}
