// Synthetic controller trace used when no script is given.
//
// Poses carry sub-millimetre jitter, like a real tracker, so the sample
// spacing and follower dead zones get exercised.

use crate::script::Step;
use glam::{EulerRot, Quat, Vec3};
use paint_core::{Button, Hand, InputEvent, Pose};
use rand::Rng;
use std::f32::consts::TAU;

const JITTER: f32 = 0.0005;

fn noisy<R: Rng>(rng: &mut R, position: Vec3, orientation: Quat) -> Pose {
    let jitter = Vec3::new(
        rng.gen_range(-JITTER..JITTER),
        rng.gen_range(-JITTER..JITTER),
        rng.gen_range(-JITTER..JITTER),
    );
    Pose::new(position + jitter, orientation)
}

fn event(hand: Hand, event: InputEvent) -> Step {
    Step::Event { hand, event }
}

/// Hold a pose for `frames` frames, re-sampling noise each frame.
fn hold<R: Rng>(rng: &mut R, hand: Hand, at: Vec3, q: Quat, frames: u32, out: &mut Vec<Step>) {
    for _ in 0..frames {
        out.push(Step::Pose {
            hand,
            pose: noisy(rng, at, q),
        });
    }
}

fn circle<R: Rng>(rng: &mut R, hand: Hand, center: Vec3, radius: f32, out: &mut Vec<Step>) {
    out.push(event(hand, InputEvent::TriggerDown));
    let steps = 90;
    for i in 0..=steps {
        let a = i as f32 / steps as f32 * TAU;
        let p = center + Vec3::new(a.cos() * radius, a.sin() * radius, 0.0);
        out.push(Step::Pose {
            hand,
            pose: noisy(rng, p, Quat::IDENTITY),
        });
    }
    out.push(event(hand, InputEvent::TriggerUp));
}

/// Draw, pick a new color from the wheel, draw again, then undo and erase.
pub fn demo_script<R: Rng>(rng: &mut R) -> Vec<Step> {
    let right = Hand::Right;
    let left = Hand::Left;
    let home = Vec3::new(0.2, 1.3, -0.3);
    let mut out = Vec::new();

    hold(rng, left, Vec3::new(-0.3, 1.1, -0.2), Quat::IDENTITY, 1, &mut out);
    circle(rng, right, home, 0.15, &mut out);

    // widen the brush a few notches
    for _ in 0..4 {
        out.push(event(right, InputEvent::ThumbstickMove { x: 0.0, y: -0.8 }));
        hold(rng, right, home, Quat::IDENTITY, 1, &mut out);
    }
    out.push(event(right, InputEvent::ThumbstickMove { x: 0.0, y: 0.0 }));

    // open the wheel, spin it, then tilt toward the top slot and let go
    out.push(event(right, InputEvent::GripDown));
    hold(rng, right, home, Quat::IDENTITY, 5, &mut out);
    out.push(event(right, InputEvent::ThumbstickMove { x: -1.0, y: 0.0 }));
    hold(rng, right, home, Quat::IDENTITY, 30, &mut out);
    out.push(event(right, InputEvent::ThumbstickMove { x: 0.0, y: 0.0 }));
    hold(rng, right, home, Quat::IDENTITY, 40, &mut out);
    let tilt = Quat::from_euler(EulerRot::YXZ, 0.0, 40f32.to_radians(), 0.0);
    hold(rng, right, home, tilt, 1, &mut out);
    out.push(event(right, InputEvent::GripUp));
    hold(rng, right, home, Quat::IDENTITY, 10, &mut out);

    circle(rng, right, home + Vec3::new(0.0, 0.4, 0.0), 0.1, &mut out);
    circle(rng, right, home + Vec3::new(0.4, 0.0, 0.0), 0.1, &mut out);

    // left hand undoes the last circle and erases the first
    out.push(event(left, InputEvent::Button(Button::Y)));
    out.push(event(left, InputEvent::ThumbstickPress));
    hold(rng, left, Vec3::new(-0.3, 1.1, -0.2), Quat::IDENTITY, 2, &mut out);
    out.push(event(left, InputEvent::TriggerDown));
    hold(
        rng,
        left,
        home + Vec3::new(0.15, 0.0, -0.12),
        Quat::IDENTITY,
        2,
        &mut out,
    );
    out.push(event(left, InputEvent::TriggerUp));
    out.push(Step::Frames(10));
    out
}
