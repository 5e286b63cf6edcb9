// Shared interaction tuning constants used by both web and native frontends.

// Menu follower
pub const FOLLOW_FACTOR: f32 = 0.1; // fraction of the remaining gap closed per frame
pub const POSITION_DEAD_ZONE: f32 = 0.002; // world units; smaller gaps are pose noise
pub const ROTATION_DEAD_ZONE: f32 = 0.01; // radians

// Spin selector
pub const SPIN_INPUT_DEAD_ZONE: f32 = 0.0; // any non-zero axis value spins
pub const SPIN_MAX_VELOCITY: f32 = 0.08; // radians per frame at full deflection
pub const SPIN_SMOOTHING: f32 = 0.15; // velocity ease per frame
pub const SPIN_VISUAL_LERP: f32 = 0.25; // visual angle ease toward the detent

// Selection wheel layout (menu-local space)
pub const WHEEL_RADIUS: f32 = 0.08;
pub const WHEEL_ITEM_RADIUS: f32 = 0.02;
pub const ARROW_LENGTH: f32 = 0.03;
pub const ARROW_WIDTH: f32 = 0.015;
pub const ARROW_GAP: f32 = 0.01; // space between the ring and the arrow tip
pub const SELECT_DOT_THRESHOLD: f32 = 0.5; // ~60 degrees off the slot direction

// Indicator sphere offsets along controller forward (-Z)
pub const INDICATOR_REST_Z: f32 = -0.12;
pub const INDICATOR_MENU_Z: f32 = -0.25;
pub const INDICATOR_TRANSITION_SEC: f64 = 0.2;
pub const INDICATOR_BASE_RADIUS: f32 = 0.01; // radius at the default stroke width

// Strokes
pub const DEFAULT_STROKE_WIDTH: f32 = 10.0;
pub const MIN_STROKE_WIDTH: f32 = 2.0;
pub const MAX_STROKE_WIDTH: f32 = 40.0;
pub const STROKE_WIDTH_STEP: f32 = 1.0;
pub const STICK_WIDTH_THRESHOLD: f32 = 0.5; // |axis y| needed to change width
pub const MIN_SAMPLE_SPACING: f32 = 0.002; // world units between stroke samples
pub const ERASE_RADIUS: f32 = 0.1;

