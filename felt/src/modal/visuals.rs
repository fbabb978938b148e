/// Scale lost per level below the top of the stack.
pub const SCALE_STEP: f32 = 0.1;

/// Vertical offset (px) of a modal's closed animation frame.
pub const CLOSED_OFFSET_Y: f32 = 4.0;

/// A single animation frame for a modal panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub opacity: f32,
    pub y: f32,
    pub scale: f32,
}

/// Depth-derived stacking for a modal: buried modals shrink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackVisuals {
    pub depth: usize,
    pub scale: f32,
}

impl StackVisuals {
    /// Visuals for a modal `depth` levels below the top.
    pub fn for_index(depth: usize) -> Self {
        let scale = (1.0 - depth as f32 * SCALE_STEP).max(0.0);
        Self { depth, scale }
    }

    /// Frame the modal animates to while open.
    pub fn open(&self) -> MotionFrame {
        MotionFrame {
            opacity: 1.0,
            y: 0.0,
            scale: self.scale,
        }
    }

    /// Frame the modal enters from and exits to.
    pub fn closed(&self) -> MotionFrame {
        MotionFrame {
            opacity: 0.0,
            y: CLOSED_OFFSET_Y,
            scale: self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_falloff() {
        assert_eq!(StackVisuals::for_index(0).scale, 1.0);
        assert!((StackVisuals::for_index(2).scale - 0.8).abs() < 1e-6);
        assert_eq!(StackVisuals::for_index(15).scale, 0.0);
    }

    #[test]
    fn test_frames_share_scale() {
        let visuals = StackVisuals::for_index(1);
        assert_eq!(visuals.open().scale, visuals.closed().scale);
        assert_eq!(visuals.open().opacity, 1.0);
        assert_eq!(visuals.closed().y, CLOSED_OFFSET_Y);
    }
}
