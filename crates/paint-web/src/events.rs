use glam::{Quat, Vec3};
use paint_core::{Button, Hand, InputEvent, Pose};

/// Map a controller event name from the host scene to a typed input event.
///
/// `x`/`y` are only read for `thumbstickmoved`.
#[inline]
pub fn event_for_name(name: &str, x: f32, y: f32) -> Option<InputEvent> {
    match name {
        "triggerdown" => Some(InputEvent::TriggerDown),
        "triggerup" => Some(InputEvent::TriggerUp),
        "gripdown" => Some(InputEvent::GripDown),
        "gripup" => Some(InputEvent::GripUp),
        "abuttondown" => Some(InputEvent::Button(Button::A)),
        "bbuttondown" => Some(InputEvent::Button(Button::B)),
        "xbuttondown" => Some(InputEvent::Button(Button::X)),
        "ybuttondown" => Some(InputEvent::Button(Button::Y)),
        "thumbstickdown" => Some(InputEvent::ThumbstickPress),
        "thumbstickmoved" => Some(InputEvent::ThumbstickMove { x, y }),
        _ => None,
    }
}

#[inline]
pub fn hand_for_name(name: &str) -> Option<Hand> {
    match name {
        "left" | "l" => Some(Hand::Left),
        "right" | "r" => Some(Hand::Right),
        _ => None,
    }
}

/// Build a pose from raw host floats; a degenerate quaternion falls back to identity.
pub fn pose_from_parts(position: [f32; 3], orientation: [f32; 4]) -> Pose {
    let q = Quat::from_array(orientation);
    let len = q.length();
    let orientation = if len.is_finite() && len > 1e-6 {
        q / len
    } else {
        Quat::IDENTITY
    };
    Pose {
        position: Vec3::from_array(position),
        orientation,
    }
}

/// Points as `[x, y, z, x, y, z, ..]` for a Float32Array.
pub fn flatten_points(points: &[Vec3]) -> Vec<f32> {
    bytemuck::cast_slice(points).to_vec()
}
