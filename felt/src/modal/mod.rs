//! Modal stack for overlay dialogs.
//!
//! Open modals are tracked in the order they opened. Each modal derives its
//! depth from the top and uses it for visual stacking only (buried modals
//! shrink); input blocking and exclusivity are left to the front-end.

mod slot;
mod stack;
mod visuals;

pub use slot::ModalSlot;
pub use stack::ModalStack;
pub use visuals::{CLOSED_OFFSET_Y, MotionFrame, SCALE_STEP, StackVisuals};
