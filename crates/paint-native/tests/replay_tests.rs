// Host-side tests for the trace parser and the replay rig.
// This crate is a binary, so we include its modules directly.
// Included files keep plain `//` headers: inner doc comments are rejected here.

#![allow(dead_code)]
mod script {
    include!("../src/script.rs");
}
mod sim {
    include!("../src/sim.rs");
}
mod rig {
    include!("../src/rig.rs");
}

use glam::Vec3;
use paint_core::{Button, Hand, InputEvent, Mode};
use rand::{rngs::StdRng, SeedableRng};
use rig::Rig;
use script::{parse_line, parse_script, Step};

#[test]
fn parses_events_for_either_hand() {
    assert_eq!(
        parse_line("trigger down").unwrap(),
        Some(Step::Event {
            hand: Hand::Right,
            event: InputEvent::TriggerDown
        })
    );
    assert_eq!(
        parse_line("left: button y").unwrap(),
        Some(Step::Event {
            hand: Hand::Left,
            event: InputEvent::Button(Button::Y)
        })
    );
    assert_eq!(
        parse_line("  stick 0.5 -1   # widen").unwrap(),
        Some(Step::Event {
            hand: Hand::Right,
            event: InputEvent::ThumbstickMove { x: 0.5, y: -1.0 }
        })
    );
    assert_eq!(parse_line("# comment only").unwrap(), None);
    assert_eq!(parse_line("   ").unwrap(), None);
}

#[test]
fn parses_poses_and_frame_counts() {
    match parse_line("pose 1 2 3").unwrap() {
        Some(Step::Pose { hand, pose }) => {
            assert_eq!(hand, Hand::Right);
            assert_eq!(pose.position, Vec3::new(1.0, 2.0, 3.0));
            assert!(pose.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        }
        other => panic!("expected pose, got {other:?}"),
    }
    match parse_line("right: pose 0 0 0 90 0").unwrap() {
        Some(Step::Pose { pose, .. }) => {
            // yaw 90 turns forward from -Z to -X
            assert!(pose.forward().abs_diff_eq(Vec3::NEG_X, 1e-5));
        }
        other => panic!("expected pose, got {other:?}"),
    }
    assert_eq!(parse_line("frames 12").unwrap(), Some(Step::Frames(12)));
}

#[test]
fn bad_lines_report_their_line_number() {
    let err = parse_script("trigger down\ngrip sideways\n").unwrap_err();
    assert!(format!("{err:#}").contains("line 2"));
    assert!(parse_line("middle: trigger down").is_err());
    assert!(parse_line("button z").is_err());
    assert!(parse_line("pose 1 2").is_err());
    assert!(parse_line("frames -3").is_err());
    assert!(parse_line("jump").is_err());
}

#[test]
fn scripted_stroke_lands_in_the_store() {
    let steps = parse_script(
        "trigger down\n\
         pose 0 1 0\n\
         pose 0.1 1 0\n\
         pose 0.2 1 0\n\
         trigger up\n\
         frames 2\n",
    )
    .unwrap();
    let mut rig = Rig::new().unwrap();
    let stats = rig.run(&steps);
    assert_eq!(stats.frames, 5);
    assert_eq!(stats.created, 1);
    assert_eq!(stats.released, 0);

    let store = rig.store().borrow();
    assert_eq!(store.len(), 1);
    let points = store.strokes()[0].points();
    assert_eq!(points.len(), 3);
    // samples sit at the resting indicator offset in front of the controller
    assert!(points[0].abs_diff_eq(Vec3::new(0.0, 1.0, -0.12), 1e-6));
    drop(store);
    assert_eq!(rig.session(Hand::Right).mode(), Mode::Idle);
}

#[test]
fn demo_trace_is_reproducible_for_a_seed() {
    let a = sim::demo_script(&mut StdRng::seed_from_u64(7));
    let b = sim::demo_script(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
    assert!(a.len() > 300);
}

#[test]
fn demo_replay_draws_undoes_and_erases() {
    let steps = sim::demo_script(&mut StdRng::seed_from_u64(42));
    let mut rig = Rig::new().unwrap();
    let stats = rig.run(&steps);

    assert_eq!(stats.created, 3);
    assert_eq!(stats.released, 2);
    assert!(stats.rebuilt > 0);
    assert!(stats.haptic_pulses > 0);

    let store = rig.store().borrow();
    assert_eq!(store.len(), 1);
    let survivor = &store.strokes()[0];
    assert_eq!(survivor.width, 14.0);
    assert!(survivor.points().len() > 50);
    drop(store);

    assert!(rig.session(Hand::Left).eraser_enabled());
    assert_eq!(rig.session(Hand::Right).current_width(), 14.0);
    assert_eq!(rig.session(Hand::Right).mode(), Mode::Idle);
}
