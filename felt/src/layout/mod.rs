//! Layout state: the page shell props and the site-wide layout config.
//!
//! Both follow the same shape: a base value set by whoever owns the page,
//! plus overrides registered by mounted components and removed when they
//! unmount.
//!
//! - [`LayoutProvider`] overrides single fields by path (`"hero.title"`).
//! - [`LayoutConfigRegistry`] merges [`LayoutConfigPatch`]es shallowly.

mod config;
mod props;
mod provider;

pub use config::*;
pub use props::*;
pub use provider::*;
