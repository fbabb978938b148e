//! Brand themes and their application to the document root.
//!
//! The platform ships under two brands. The active brand is written to the
//! root element as a `data-theme` attribute and as a class, which the
//! front-end's stylesheets key off.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Attribute on the document root naming the active brand.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// A brand theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    ZkPoker,
    PurePoker,
}

impl Theme {
    /// Every brand, in declaration order.
    pub const ALL: [Theme; 2] = [Theme::ZkPoker, Theme::PurePoker];

    /// Identifier used for the `data-theme` attribute and root class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::ZkPoker => "zkpoker",
            Theme::PurePoker => "purepoker",
        }
    }

    /// Human-readable brand name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::ZkPoker => "ZKPoker",
            Theme::PurePoker => "PurePoker",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownTheme(s.to_string()))
    }
}

/// Color scheme settings shared below a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub is_dark: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self { is_dark: true }
    }
}

/// The root element of the hosting document.
pub trait DocumentRoot {
    fn set_attribute(&self, name: &str, value: &str);

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);
}

/// Mark `theme` as active on the document root.
pub fn apply_theme(root: &dyn DocumentRoot, theme: Theme) {
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    for brand in Theme::ALL {
        root.remove_class(brand.as_str());
    }
    root.add_class(theme.as_str());
    log::debug!("Applied theme '{}'", theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme() {
        assert_eq!("purepoker".parse::<Theme>(), Ok(Theme::PurePoker));
        assert_eq!("ZKPoker".parse::<Theme>(), Ok(Theme::ZkPoker));
        assert_eq!(
            "holdem".parse::<Theme>(),
            Err(ConfigError::UnknownTheme("holdem".into()))
        );
    }

    #[test]
    fn test_serde_names_match_ids() {
        for theme in Theme::ALL {
            let json = serde_json::to_value(theme).unwrap();
            assert_eq!(json, serde_json::Value::from(theme.as_str()));
        }
    }
}
