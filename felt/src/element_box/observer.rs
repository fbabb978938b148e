//! Platform seams for element measurement.

use std::sync::Arc;

use super::geometry::{BoxSize, DomRect};

/// Kinds of element that can be measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Div,
    Button,
    Anchor,
    Dialog,
}

/// Which box the platform observer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoxOption {
    #[default]
    ContentBox,
    DevicePixelContentBox,
}

impl ElementKind {
    /// Divs are observed in device pixels, everything else by content box.
    pub fn box_option(self) -> BoxOption {
        match self {
            ElementKind::Div => BoxOption::DevicePixelContentBox,
            _ => BoxOption::ContentBox,
        }
    }
}

/// A mounted element the platform can measure.
///
/// Elements carry a tag slot (a `data-rid` attribute in the browser) so one
/// platform observer can be shared by every tracked element: resize entries
/// are routed back to their registry entry by tag.
pub trait TrackableElement: Send + Sync {
    fn kind(&self) -> ElementKind;

    /// Bounding rectangle at the time of the call.
    fn bounding_rect(&self) -> DomRect;

    fn offset_size(&self) -> BoxSize;

    fn client_size(&self) -> BoxSize;

    fn scroll_size(&self) -> BoxSize;

    /// Current tag, if one was set.
    fn tag(&self) -> Option<String>;

    fn set_tag(&self, tag: &str);
}

/// Shared handle to a mounted element.
pub type ElementRef = Arc<dyn TrackableElement>;

/// One batch item delivered by the platform observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeEntry {
    /// Tag read off the resized element.
    pub tag: Option<String>,
    /// The observed box, if the platform reported one.
    pub content_rect: Option<DomRect>,
}

impl ResizeEntry {
    pub fn new(tag: impl Into<String>, content_rect: DomRect) -> Self {
        Self {
            tag: Some(tag.into()),
            content_rect: Some(content_rect),
        }
    }

    /// Build an entry for `element` from its current tag.
    pub fn for_element(element: &dyn TrackableElement, content_rect: DomRect) -> Self {
        Self {
            tag: element.tag(),
            content_rect: Some(content_rect),
        }
    }
}

/// The platform's resize observation primitive.
///
/// Implementations deliver callbacks by calling
/// [`ElementBoxes::handle_entries`](super::ElementBoxes::handle_entries).
pub trait ResizeBackend: Send + Sync {
    fn observe(&self, element: &dyn TrackableElement, options: BoxOption);

    fn unobserve(&self, element: &dyn TrackableElement);

    /// Stop observing everything.
    fn disconnect(&self);
}
