/// An element's rounded content size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoxSize {
    pub width: u32,
    pub height: u32,
}

impl BoxSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Round fractional pixel sizes to the nearest whole pixel.
    pub fn rounded(width: f64, height: f64) -> Self {
        Self {
            width: round_px(width),
            height: round_px(height),
        }
    }

    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rectangle as reported by the platform, in fractional pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DomRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DomRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    pub fn size(&self) -> BoxSize {
        BoxSize::rounded(self.width, self.height)
    }
}

/// Scroll-related sizes of a live element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    pub offset: BoxSize,
    pub client: BoxSize,
    pub scroll: BoxSize,
    /// Content is wider than the rendered box.
    pub is_scrollable_x: bool,
    /// Content is taller than the rendered box.
    pub is_scrollable_y: bool,
}

/// What a consumer gets back when it asks for an element's size.
///
/// Cached sizes come from the resize observer and carry no scroll metrics;
/// a live measurement includes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementMetrics {
    pub size: BoxSize,
    pub scroll: Option<ScrollMetrics>,
}

pub(crate) fn round_px(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(u32::MAX as f64) as u32
    } else {
        0
    }
}
