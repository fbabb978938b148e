//! Element size observation.
//!
//! [`ElementBoxes`] multiplexes one platform resize observer over every
//! tracked element and keeps the latest rounded content size per ID, so
//! several consumers can read the same element's size without each creating
//! their own observer.

mod dynamic;
mod geometry;
mod observer;
mod registry;

pub use dynamic::{AnimationTarget, DynamicSize};
pub use geometry::{BoxSize, DomRect, ElementMetrics, ScrollMetrics};
pub use observer::{
    BoxOption, ElementKind, ElementRef, ResizeBackend, ResizeEntry, TrackableElement,
};
pub use registry::{ElementBoxes, Observation, measure};
