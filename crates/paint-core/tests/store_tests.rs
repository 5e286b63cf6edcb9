// Host-side tests for the stroke store: undo stack, erase and clear.

use glam::Vec3;
use paint_core::*;
use rand::prelude::*;
use std::collections::HashMap;

fn stroke_through(store: &mut StrokeStore, color: u32, points: &[Vec3]) -> StrokeId {
    let id = store.push(Rgb(color), 10.0);
    for p in points {
        assert!(store.append_point(id, *p));
    }
    id
}

fn ids(store: &StrokeStore) -> Vec<StrokeId> {
    store.strokes().iter().map(|s| s.id).collect()
}

#[test]
fn undo_removes_most_recent_stroke() {
    let mut store = StrokeStore::new();
    let a = stroke_through(&mut store, 0xff0000, &[Vec3::ZERO, Vec3::X]);
    let b = stroke_through(&mut store, 0x00ff00, &[Vec3::Y, Vec3::ONE]);
    assert_eq!(store.undo_last(), Some(b));
    assert_eq!(ids(&store), vec![a]);
}

#[test]
fn undo_on_empty_store_is_a_no_op() {
    let mut store = StrokeStore::new();
    assert_eq!(store.undo_last(), None);
    assert!(store.is_empty());
    assert!(store.drain_commands().is_empty());
}

#[test]
fn clear_all_is_idempotent() {
    let mut store = StrokeStore::new();
    stroke_through(&mut store, 0xff0000, &[Vec3::ZERO, Vec3::X]);
    stroke_through(&mut store, 0xff0000, &[Vec3::ZERO, Vec3::Y]);
    assert_eq!(store.clear_all(), 2);
    assert!(store.is_empty());
    assert_eq!(store.clear_all(), 0);
    assert!(store.is_empty());
}

#[test]
fn erase_prefers_most_recent_match() {
    let mut store = StrokeStore::new();
    let a = stroke_through(&mut store, 0xff0000, &[Vec3::ZERO, Vec3::new(0.05, 0.0, 0.0)]);
    let b = stroke_through(&mut store, 0x0000ff, &[Vec3::new(0.0, 0.02, 0.0), Vec3::ZERO]);
    assert_eq!(store.erase_near(Vec3::ZERO, 0.1), Some(b));
    assert_eq!(ids(&store), vec![a]);
    assert_eq!(store.erase_near(Vec3::ZERO, 0.1), Some(a));
    assert!(store.is_empty());
}

#[test]
fn erase_keeps_order_of_remaining_strokes() {
    let mut store = StrokeStore::new();
    let a = stroke_through(&mut store, 1, &[Vec3::new(-5.0, 0.0, 0.0), Vec3::new(-4.0, 0.0, 0.0)]);
    let b = stroke_through(&mut store, 2, &[Vec3::ZERO, Vec3::X]);
    let c = stroke_through(&mut store, 3, &[Vec3::new(5.0, 0.0, 0.0), Vec3::new(6.0, 0.0, 0.0)]);
    assert_eq!(store.erase_near(Vec3::new(0.5, 0.0, 0.0), 0.1), Some(b));
    assert_eq!(ids(&store), vec![a, c]);
}

#[test]
fn erase_uses_bounding_box_distance() {
    let mut store = StrokeStore::new();
    let id = stroke_through(&mut store, 1, &[Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)]);
    // beside the middle of the segment, far from both endpoints
    assert_eq!(store.erase_near(Vec3::new(0.5, 0.15, 0.0), 0.1), None);
    assert_eq!(store.erase_near(Vec3::new(0.5, 0.05, 0.0), 0.1), Some(id));
}

#[test]
fn erase_without_match_is_a_no_op() {
    let mut store = StrokeStore::new();
    stroke_through(&mut store, 1, &[Vec3::ZERO, Vec3::X]);
    store.drain_commands();
    assert_eq!(store.erase_near(Vec3::new(0.0, 3.0, 0.0), 0.1), None);
    assert_eq!(store.len(), 1);
    assert!(store.drain_commands().is_empty());
}

#[test]
fn strokes_without_points_are_never_erased() {
    let mut store = StrokeStore::new();
    store.push(Rgb(1), 4.0);
    assert_eq!(store.erase_near(Vec3::ZERO, 100.0), None);
}

#[test]
fn append_emits_rebuild_once_renderable() {
    let mut store = StrokeStore::new();
    let id = store.push(Rgb(0xff66aa), 12.0);
    let drawable = store.get(id).unwrap().drawable();
    assert_eq!(
        store.drain_commands(),
        vec![DrawableCommand::Create {
            drawable,
            color: Rgb(0xff66aa),
            width: 12.0
        }]
    );

    store.append_point(id, Vec3::ZERO);
    assert!(store.drain_commands().is_empty());
    assert!(!store.get(id).unwrap().is_renderable());

    store.append_point(id, Vec3::X);
    assert_eq!(
        store.drain_commands(),
        vec![DrawableCommand::Rebuild {
            drawable,
            points: vec![Vec3::ZERO, Vec3::X]
        }]
    );
    let stroke = store.get(id).unwrap();
    assert_eq!(stroke.points_flat(), &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    assert_eq!(stroke.bounds().unwrap().max, Vec3::X);
}

#[test]
fn append_to_removed_stroke_reports_failure() {
    let mut store = StrokeStore::new();
    let id = store.push(Rgb(1), 4.0);
    store.undo_last();
    assert!(!store.append_point(id, Vec3::ZERO));
    assert!(!store.contains(id));
}

#[test]
fn every_drawable_is_released_exactly_once() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut store = StrokeStore::new();
    let mut created: HashMap<DrawableId, usize> = HashMap::new();
    let mut released: HashMap<DrawableId, usize> = HashMap::new();

    for _ in 0..500 {
        match rng.gen_range(0..10) {
            0..=4 => {
                let id = store.push(Rgb(rng.gen::<u32>() & 0xffffff), 8.0);
                for _ in 0..rng.gen_range(0..5) {
                    let p = Vec3::new(rng.gen(), rng.gen(), rng.gen());
                    store.append_point(id, p);
                }
            }
            5 | 6 => {
                store.undo_last();
            }
            7 | 8 => {
                let p = Vec3::new(rng.gen(), rng.gen(), rng.gen());
                store.erase_near(p, 0.1);
            }
            _ => {
                store.clear_all();
            }
        }
        for cmd in store.drain_commands() {
            match cmd {
                DrawableCommand::Create { drawable, .. } => {
                    *created.entry(drawable).or_default() += 1;
                }
                DrawableCommand::Release { drawable } => {
                    assert!(created.contains_key(&drawable), "released before create");
                    *released.entry(drawable).or_default() += 1;
                }
                DrawableCommand::Rebuild { drawable, .. } => {
                    assert!(!released.contains_key(&drawable), "rebuild after release");
                }
            }
        }
    }
    store.clear_all();
    for cmd in store.drain_commands() {
        if let DrawableCommand::Release { drawable } = cmd {
            *released.entry(drawable).or_default() += 1;
        }
    }
    assert!(created.values().all(|n| *n == 1));
    assert_eq!(created.len(), released.len());
    assert!(released.values().all(|n| *n == 1));
}

#[test]
fn undrained_rebuilds_collapse_to_the_latest_polyline() {
    let mut store = StrokeStore::new();
    let a = store.push(Rgb(0xff0000), 10.0);
    let b = store.push(Rgb(0x00ff00), 10.0);
    for i in 0..500 {
        let p = Vec3::new(i as f32 * 0.01, 0.0, 0.0);
        store.append_point(a, p);
        store.append_point(b, p + Vec3::Y);
    }

    let pending = store.pending_commands();
    assert_eq!(pending.len(), 4);
    assert!(matches!(pending[0], DrawableCommand::Create { .. }));
    assert!(matches!(pending[1], DrawableCommand::Create { .. }));
    let drawable_a = store.get(a).unwrap().drawable();
    match &pending[2] {
        DrawableCommand::Rebuild { drawable, points } => {
            assert_eq!(*drawable, drawable_a);
            assert_eq!(points.len(), 500);
            assert_eq!(points.last(), Some(&Vec3::new(499.0 * 0.01, 0.0, 0.0)));
        }
        other => panic!("expected rebuild, got {other:?}"),
    }
    assert!(matches!(&pending[3], DrawableCommand::Rebuild { points, .. } if points.len() == 500));

    // once drained, the next append queues a fresh rebuild
    store.drain_commands();
    assert!(store.pending_commands().is_empty());
    store.append_point(a, Vec3::Z);
    assert!(matches!(
        store.pending_commands(),
        [DrawableCommand::Rebuild { points, .. }] if points.len() == 501
    ));
}

#[test]
fn release_after_pending_rebuild_keeps_order() {
    let mut store = StrokeStore::new();
    let id = store.push(Rgb(0xffffff), 10.0);
    store.append_point(id, Vec3::ZERO);
    store.append_point(id, Vec3::X);
    store.undo_last();
    store.append_point(id, Vec3::Y);
    let kinds: Vec<_> = store
        .pending_commands()
        .iter()
        .map(|c| match c {
            DrawableCommand::Create { .. } => "create",
            DrawableCommand::Rebuild { .. } => "rebuild",
            DrawableCommand::Release { .. } => "release",
        })
        .collect();
    assert_eq!(kinds, ["create", "rebuild", "release"]);
}
