//! Damped pose follower used to make the floating menu trail the controller.
//!
//! Each update closes a fixed fraction of the gap to the target (first-order
//! exponential decay). Gaps inside the dead zones are left alone so that pose
//! noise does not make the menu shimmer.

use crate::constants::{FOLLOW_FACTOR, POSITION_DEAD_ZONE, ROTATION_DEAD_ZONE};
use glam::{Quat, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct FollowerParams {
    pub follow_factor: f32,
    pub position_dead_zone: f32,
    pub rotation_dead_zone: f32,
}

impl Default for FollowerParams {
    fn default() -> Self {
        Self {
            follow_factor: FOLLOW_FACTOR,
            position_dead_zone: POSITION_DEAD_ZONE,
            rotation_dead_zone: ROTATION_DEAD_ZONE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Follower {
    pub params: FollowerParams,
    position: Vec3,
    orientation: Quat,
}

impl Default for Follower {
    fn default() -> Self {
        Self::new(FollowerParams::default())
    }
}

impl Follower {
    pub fn new(params: FollowerParams) -> Self {
        Self {
            params,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Jump straight to the given pose, e.g. when the menu is first shown.
    pub fn reset(&mut self, position: Vec3, orientation: Quat) {
        self.position = position;
        self.orientation = orientation.normalize();
    }

    pub fn update(&mut self, target_position: Vec3, target_orientation: Quat) -> (Vec3, Quat) {
        let delta = target_position - self.position;
        if delta.length() > self.params.position_dead_zone {
            self.position += delta * self.params.follow_factor;
        }

        let target_orientation = target_orientation.normalize();
        if self.orientation.angle_between(target_orientation) > self.params.rotation_dead_zone {
            self.orientation = self
                .orientation
                .slerp(target_orientation, self.params.follow_factor)
                .normalize();
        }

        (self.position, self.orientation)
    }
}
