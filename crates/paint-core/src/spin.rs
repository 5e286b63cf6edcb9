//! Joystick-driven selection wheel.
//!
//! The joystick sets a target angular velocity; the actual velocity eases
//! toward it and is integrated into an unbounded `continuous_angle`. That
//! angle is quantized to the nearest of N slots, and a separate visual angle
//! eases toward the selected slot so the ring clicks into detents while the
//! underlying angle keeps moving.

use crate::constants::{SPIN_INPUT_DEAD_ZONE, SPIN_MAX_VELOCITY, SPIN_SMOOTHING, SPIN_VISUAL_LERP};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug)]
pub struct SpinParams {
    pub slot_count: usize,
    pub input_dead_zone: f32,
    pub max_velocity: f32,
    pub smoothing: f32,
    pub visual_lerp: f32,
}

impl Default for SpinParams {
    fn default() -> Self {
        Self {
            slot_count: crate::palette::PALETTE.len(),
            input_dead_zone: SPIN_INPUT_DEAD_ZONE,
            max_velocity: SPIN_MAX_VELOCITY,
            smoothing: SPIN_SMOOTHING,
            visual_lerp: SPIN_VISUAL_LERP,
        }
    }
}

/// Result of one [`SpinSelector::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinStep {
    pub visual_angle: f32,
    pub selected_index: usize,
    pub index_changed: bool,
}

#[derive(Clone, Debug)]
pub struct SpinSelector {
    pub params: SpinParams,
    continuous_angle: f32,
    angular_velocity: f32,
    visual_angle: f32,
    selected_index: usize,
}

impl Default for SpinSelector {
    fn default() -> Self {
        Self::new(SpinParams::default())
    }
}

/// Wrap an angle difference into (-PI, PI].
#[inline]
pub fn wrap_delta(mut delta: f32) -> f32 {
    delta = delta.rem_euclid(TAU);
    if delta > PI {
        delta -= TAU;
    }
    delta
}

/// Wrap an angle into [0, TAU).
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Nearest slot for a wheel rotated by `angle`; slot boundaries sit halfway
/// between slot centers.
#[inline]
pub fn slot_for_angle(angle: f32, slot_count: usize) -> usize {
    let n = slot_count.max(1);
    let slot = TAU / n as f32;
    let normalized = wrap_angle(-angle);
    ((normalized + slot / 2.0) / slot).floor() as usize % n
}

impl SpinSelector {
    pub fn new(params: SpinParams) -> Self {
        Self {
            params,
            continuous_angle: 0.0,
            angular_velocity: 0.0,
            visual_angle: 0.0,
            selected_index: 0,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.params.slot_count.max(1)
    }

    pub fn slot_width(&self) -> f32 {
        TAU / self.slot_count() as f32
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn visual_angle(&self) -> f32 {
        self.visual_angle
    }

    pub fn continuous_angle(&self) -> f32 {
        self.continuous_angle
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn reset(&mut self) {
        self.continuous_angle = 0.0;
        self.angular_velocity = 0.0;
        self.visual_angle = 0.0;
        self.selected_index = 0;
    }

    pub fn update(&mut self, axis: f32) -> SpinStep {
        let axis = if axis.is_finite() {
            axis.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        let target_velocity = if axis.abs() > self.params.input_dead_zone {
            axis * self.params.max_velocity
        } else {
            0.0
        };
        self.angular_velocity += (target_velocity - self.angular_velocity) * self.params.smoothing;
        self.continuous_angle += self.angular_velocity;

        let previous = self.selected_index;
        self.selected_index = slot_for_angle(self.continuous_angle, self.slot_count());
        let target_snap = -(self.selected_index as f32) * self.slot_width();

        let delta = wrap_delta(target_snap - self.visual_angle);
        self.visual_angle = wrap_angle(self.visual_angle + delta * self.params.visual_lerp);

        SpinStep {
            visual_angle: self.visual_angle,
            selected_index: self.selected_index,
            index_changed: self.selected_index != previous,
        }
    }
}
