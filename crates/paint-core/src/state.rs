//! Visual-side state types handed to the rendering frontends.
//!
//! These avoid referencing platform-specific APIs and are suitable for both
//! native and web targets. Frontends read them once per frame to place the
//! indicator sphere and the selection wheel.

use crate::constants::{ARROW_GAP, ARROW_LENGTH, WHEEL_RADIUS};
use crate::palette::{slot_local_position, Rgb, PALETTE};
use glam::{Quat, Vec3};

/// Sphere drawn in front of the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorState {
    pub position: Vec3,
    pub color: Rgb,
    pub radius: f32,
    /// Current offset along the controller's Z axis (negative is forward).
    pub offset: f32,
}

/// Selection wheel as it should appear this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelState {
    pub position: Vec3,
    pub orientation: Quat,
    /// Spin of the ring about its own Z axis.
    pub visual_angle: f32,
    pub selected_index: usize,
    pub slot_count: usize,
}

impl WheelState {
    /// Slot position in menu-local space, before the ring's spin.
    pub fn slot_local_position(&self, index: usize) -> Vec3 {
        slot_local_position(index, self.slot_count)
    }

    /// Slot center in world space, spin included.
    pub fn slot_world_position(&self, index: usize) -> Vec3 {
        self.position + self.orientation * self.spun_local(index)
    }

    /// Unit direction from the wheel center toward a slot, in world space.
    pub fn slot_world_direction(&self, index: usize) -> Vec3 {
        (self.orientation * self.spun_local(index)).normalize_or_zero()
    }

    pub fn slot_color(&self, index: usize) -> Rgb {
        PALETTE[index % PALETTE.len()]
    }

    /// Local position of the arrow cone that marks the selected slot.
    pub fn arrow_local_position(&self) -> Vec3 {
        Vec3::new(0.0, WHEEL_RADIUS + ARROW_LENGTH / 2.0 + ARROW_GAP, 0.0)
    }

    /// Slot whose world direction best matches `dir`, with the dot product.
    pub fn best_facing_slot(&self, dir: Vec3) -> Option<(usize, f32)> {
        let dir = dir.normalize_or_zero();
        (0..self.slot_count)
            .map(|i| (i, self.slot_world_direction(i).dot(dir)))
            .fold(None, |best, (i, d)| match best {
                Some((_, bd)) if bd >= d => best,
                _ => Some((i, d)),
            })
    }

    fn spun_local(&self, index: usize) -> Vec3 {
        Quat::from_rotation_z(self.visual_angle) * self.slot_local_position(index)
    }
}

/// Everything a frontend needs after one [`crate::PaintSession::frame`].
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub indicator: IndicatorState,
    pub wheel: Option<WheelState>,
    /// Fire a short haptic pulse: the wheel crossed into a new detent.
    pub haptic_pulse: bool,
}
