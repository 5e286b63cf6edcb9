use crate::constants::*;
use crate::follower::FollowerParams;
use crate::input::Hand;
use crate::palette::{Rgb, DEFAULT_STROKE_COLOR, PALETTE};
use crate::spin::SpinParams;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("stroke width range [{min}, {max}] is empty")]
    EmptyWidthRange { min: f32, max: f32 },
    #[error("default width {width} is outside [{min}, {max}]")]
    DefaultWidthOutOfRange { width: f32, min: f32, max: f32 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be in (0, 1], got {value}")]
    FactorOutOfRange { name: &'static str, value: f32 },
    #[error("selection wheel has {got} slots but the palette has {expected}")]
    SlotCount { expected: usize, got: usize },
}

/// Per-controller session parameters.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub hand: Hand,
    pub initial_color: Rgb,
    pub default_width: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub width_step: f32,
    pub stick_width_threshold: f32,
    pub erase_radius: f32,
    pub min_sample_spacing: f32,
    pub rest_offset: f32,
    pub menu_offset: f32,
    pub menu_transition_sec: f64,
    pub select_threshold: f32,
    pub follower: FollowerParams,
    pub spin: SpinParams,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hand: Hand::Right,
            initial_color: DEFAULT_STROKE_COLOR,
            default_width: DEFAULT_STROKE_WIDTH,
            min_width: MIN_STROKE_WIDTH,
            max_width: MAX_STROKE_WIDTH,
            width_step: STROKE_WIDTH_STEP,
            stick_width_threshold: STICK_WIDTH_THRESHOLD,
            erase_radius: ERASE_RADIUS,
            min_sample_spacing: MIN_SAMPLE_SPACING,
            rest_offset: INDICATOR_REST_Z,
            menu_offset: INDICATOR_MENU_Z,
            menu_transition_sec: INDICATOR_TRANSITION_SEC,
            select_threshold: SELECT_DOT_THRESHOLD,
            follower: FollowerParams::default(),
            spin: SpinParams::default(),
        }
    }
}

impl SessionConfig {
    pub fn for_hand(hand: Hand) -> Self {
        Self {
            hand,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_width <= self.max_width) {
            return Err(ConfigError::EmptyWidthRange {
                min: self.min_width,
                max: self.max_width,
            });
        }
        if !(self.min_width..=self.max_width).contains(&self.default_width) {
            return Err(ConfigError::DefaultWidthOutOfRange {
                width: self.default_width,
                min: self.min_width,
                max: self.max_width,
            });
        }
        for (name, value) in [
            ("min_width", self.min_width),
            ("width_step", self.width_step),
            ("erase_radius", self.erase_radius),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        for (name, value) in [
            ("follower.follow_factor", self.follower.follow_factor),
            ("spin.smoothing", self.spin.smoothing),
            ("spin.visual_lerp", self.spin.visual_lerp),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::FactorOutOfRange { name, value });
            }
        }
        if self.spin.slot_count != PALETTE.len() {
            return Err(ConfigError::SlotCount {
                expected: PALETTE.len(),
                got: self.spin.slot_count,
            });
        }
        Ok(())
    }
}
