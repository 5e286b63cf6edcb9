use crate::constants::WHEEL_RADIUS;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Packed `0xRRGGBB` color, the form the host materials take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Components scaled to [0, 1].
    pub fn to_f32(self) -> [f32; 3] {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        [r, g, b]
    }

    /// CSS-style `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0 & 0x00ff_ffff)
    }
}

impl From<u32> for Rgb {
    fn from(v: u32) -> Self {
        Rgb(v & 0x00ff_ffff)
    }
}

// Wheel order is fixed; slot i sits at angle i/N * TAU - PI/2.
pub const PALETTE: [Rgb; 8] = [
    Rgb(0xff0000), // red
    Rgb(0xff8800), // orange
    Rgb(0xffff00), // yellow
    Rgb(0x00ff00), // green
    Rgb(0x0088ff), // blue
    Rgb(0x8800ff), // purple
    Rgb(0xffffff), // white
    Rgb(0x222222), // black
];

pub const PALETTE_NAMES: [&str; 8] = [
    "red", "orange", "yellow", "green", "blue", "purple", "white", "black",
];

// Ink used until the first pick from the wheel
pub const DEFAULT_STROKE_COLOR: Rgb = Rgb(0xff66aa);
pub const ERASER_COLOR: Rgb = Rgb(0x888888);

#[inline]
pub fn slot_angle(index: usize, slot_count: usize) -> f32 {
    (index as f32 / slot_count.max(1) as f32) * TAU - FRAC_PI_2
}

/// Menu-local position of a wheel slot before the wheel's own spin is applied.
#[inline]
pub fn slot_local_position(index: usize, slot_count: usize) -> Vec3 {
    let a = slot_angle(index, slot_count);
    Vec3::new(a.cos() * WHEEL_RADIUS, a.sin() * WHEEL_RADIUS, 0.0)
}

pub fn color_name(color: Rgb) -> &'static str {
    PALETTE
        .iter()
        .position(|c| *c == color)
        .map(|i| PALETTE_NAMES[i])
        .unwrap_or("custom")
}
