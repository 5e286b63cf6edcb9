use glam::{Quat, Vec3};

/// World-space controller pose sampled once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation: orientation.normalize(),
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    /// Direction the controller points at (its local -Z).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Point `z` units along the controller's local Z axis; negative `z` is in front.
    #[inline]
    pub fn offset_forward(&self, z: f32) -> Vec3 {
        self.position + self.orientation * Vec3::new(0.0, 0.0, z)
    }

    /// Same position, orientation rotated so that `forward()` equals `dir`.
    pub fn facing(&self, dir: Vec3) -> Self {
        let dir = dir.normalize_or_zero();
        if dir == Vec3::ZERO {
            return *self;
        }
        Self {
            position: self.position,
            orientation: Quat::from_rotation_arc(Vec3::NEG_Z, dir),
        }
    }
}
