use super::geometry::ElementMetrics;

/// Target dimensions for a container that animates to its content's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationTarget {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Which axes of a size-animated container follow the measured content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DynamicSize {
    pub animate_width: bool,
    pub animate_height: bool,
}

impl DynamicSize {
    pub fn new(animate_width: bool, animate_height: bool) -> Self {
        Self {
            animate_width,
            animate_height,
        }
    }

    /// Dimensions to animate to. Unmeasured content leaves both axes free.
    pub fn target(&self, metrics: Option<&ElementMetrics>) -> AnimationTarget {
        let Some(metrics) = metrics else {
            return AnimationTarget::default();
        };
        AnimationTarget {
            width: self.animate_width.then_some(metrics.size.width),
            height: self.animate_height.then_some(metrics.size.height),
        }
    }
}
