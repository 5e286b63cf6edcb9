//! Ordered, undoable collection of committed strokes.
//!
//! The store owns every stroke from the moment drawing starts, together with
//! the renderer-side drawable behind it. Removal moves the stroke out and
//! emits its `Release` command from a single place, so each drawable is
//! released exactly once. The host drains [`DrawableCommand`]s after each
//! frame and mirrors them into its scene graph.

use crate::palette::Rgb;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(pub u64);

/// Opaque handle for the host-side line geometry and material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawableId(pub u64);

/// Axis-aligned bounds of a stroke's points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn from_point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    pub fn grow(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Distance from `p` to the box; zero inside.
    pub fn distance_to_point(&self, p: Vec3) -> f32 {
        p.clamp(self.min, self.max).distance(p)
    }
}

#[derive(Clone, Debug)]
pub struct Stroke {
    pub id: StrokeId,
    pub color: Rgb,
    pub width: f32,
    points: Vec<Vec3>,
    bounds: Option<Bounds>,
    drawable: DrawableId,
}

impl Stroke {
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Points as a flat `[x, y, z, x, y, z, ..]` view for vertex upload.
    pub fn points_flat(&self) -> &[f32] {
        bytemuck::cast_slice(self.points.as_slice())
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn drawable(&self) -> DrawableId {
        self.drawable
    }

    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Strokes without any points are never within erase range.
    pub fn distance_to(&self, p: Vec3) -> f32 {
        self.bounds
            .map(|b| b.distance_to_point(p))
            .unwrap_or(f32::INFINITY)
    }
}

/// Instructions for the renderer, emitted in order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawableCommand {
    Create {
        drawable: DrawableId,
        color: Rgb,
        width: f32,
    },
    Rebuild {
        drawable: DrawableId,
        points: Vec<Vec3>,
    },
    Release {
        drawable: DrawableId,
    },
}

#[derive(Debug, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    commands: Vec<DrawableCommand>,
    next_stroke: u64,
    next_drawable: u64,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Committed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn get(&self, id: StrokeId) -> Option<&Stroke> {
        self.strokes.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: StrokeId) -> bool {
        self.get(id).is_some()
    }

    /// Start a new stroke; it becomes the undo target.
    pub fn push(&mut self, color: Rgb, width: f32) -> StrokeId {
        let id = StrokeId(self.next_stroke);
        self.next_stroke += 1;
        let drawable = DrawableId(self.next_drawable);
        self.next_drawable += 1;

        self.strokes.push(Stroke {
            id,
            color,
            width,
            points: Vec::new(),
            bounds: None,
            drawable,
        });
        self.commands.push(DrawableCommand::Create {
            drawable,
            color,
            width,
        });
        log::debug!(
            "[store] push stroke={} color={} width={:.1} total={}",
            id.0,
            color.to_hex(),
            width,
            self.strokes.len()
        );
        id
    }

    /// Append a sample to a live stroke. Returns false if the stroke is gone.
    pub fn append_point(&mut self, id: StrokeId, point: Vec3) -> bool {
        let Some(stroke) = self.strokes.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        stroke.points.push(point);
        match stroke.bounds.as_mut() {
            Some(b) => b.grow(point),
            None => stroke.bounds = Some(Bounds::from_point(point)),
        }
        if stroke.is_renderable() {
            // an undrained rebuild for this drawable is superseded in place
            let pending = self.commands.iter_mut().rev().find_map(|cmd| match cmd {
                DrawableCommand::Rebuild { drawable, points } if *drawable == stroke.drawable => {
                    Some(points)
                }
                _ => None,
            });
            match pending {
                Some(points) => points.clone_from(&stroke.points),
                None => self.commands.push(DrawableCommand::Rebuild {
                    drawable: stroke.drawable,
                    points: stroke.points.clone(),
                }),
            }
        }
        true
    }

    pub fn undo_last(&mut self) -> Option<StrokeId> {
        let stroke = self.strokes.pop()?;
        log::debug!("[store] undo stroke={}", stroke.id.0);
        Some(self.release(stroke))
    }

    /// Remove the most recent stroke whose bounds come within `radius` of `point`.
    pub fn erase_near(&mut self, point: Vec3, radius: f32) -> Option<StrokeId> {
        let index = self
            .strokes
            .iter()
            .rposition(|s| s.distance_to(point) < radius)?;
        let stroke = self.strokes.remove(index);
        log::debug!("[store] erase stroke={}", stroke.id.0);
        Some(self.release(stroke))
    }

    pub fn clear_all(&mut self) -> usize {
        let removed = std::mem::take(&mut self.strokes);
        let count = removed.len();
        for stroke in removed {
            self.release(stroke);
        }
        if count > 0 {
            log::info!("[store] cleared {} strokes", count);
        }
        count
    }

    pub fn drain_commands(&mut self) -> Vec<DrawableCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands queued since the last drain, without taking them.
    pub fn pending_commands(&self) -> &[DrawableCommand] {
        &self.commands
    }

    // Sole release path: takes the stroke by value.
    fn release(&mut self, stroke: Stroke) -> StrokeId {
        self.commands.push(DrawableCommand::Release {
            drawable: stroke.drawable,
        });
        stroke.id
    }
}
