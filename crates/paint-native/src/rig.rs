// Fixed-rate replay of a controller trace through both hands' sessions.

use crate::script::Step;
use paint_core::{
    color_name, DrawableCommand, Hand, PaintSession, Pose, SessionConfig, StrokeStore,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const FRAME_RATE_HZ: f64 = 90.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub frames: u64,
    pub haptic_pulses: u32,
    pub created: u32,
    pub rebuilt: u32,
    pub released: u32,
}

pub struct Rig {
    store: Rc<RefCell<StrokeStore>>,
    left: PaintSession,
    right: PaintSession,
    left_pose: Pose,
    right_pose: Pose,
    stats: ReplayStats,
}

impl Rig {
    pub fn new() -> anyhow::Result<Self> {
        let store = Rc::new(RefCell::new(StrokeStore::new()));
        let left = PaintSession::new(SessionConfig::for_hand(Hand::Left), store.clone())?;
        let right = PaintSession::new(SessionConfig::for_hand(Hand::Right), store.clone())?;
        Ok(Self {
            store,
            left,
            right,
            left_pose: Pose::IDENTITY,
            right_pose: Pose::IDENTITY,
            stats: ReplayStats::default(),
        })
    }

    pub fn store(&self) -> &Rc<RefCell<StrokeStore>> {
        &self.store
    }

    pub fn session(&self, hand: Hand) -> &PaintSession {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }

    pub fn stats(&self) -> ReplayStats {
        self.stats
    }

    fn now_sec(&self) -> f64 {
        self.stats.frames as f64 / FRAME_RATE_HZ
    }

    pub fn apply(&mut self, step: &Step) {
        match step {
            Step::Event { hand, event } => match hand {
                Hand::Left => self.left.enqueue(*event),
                Hand::Right => self.right.enqueue(*event),
            },
            Step::Pose { hand, pose } => {
                match hand {
                    Hand::Left => self.left_pose = *pose,
                    Hand::Right => self.right_pose = *pose,
                }
                self.advance();
            }
            Step::Frames(n) => {
                for _ in 0..*n {
                    self.advance();
                }
            }
        }
    }

    pub fn run(&mut self, steps: &[Step]) -> ReplayStats {
        for step in steps {
            self.apply(step);
        }
        self.stats
    }

    /// One frame for both controllers, then flush the drawable outbox.
    pub fn advance(&mut self) {
        let now = self.now_sec();
        for (session, pose) in [
            (&mut self.left, &self.left_pose),
            (&mut self.right, &self.right_pose),
        ] {
            let out = session.frame(pose, now);
            if out.haptic_pulse {
                self.stats.haptic_pulses += 1;
                log::debug!(
                    "[rig] {} haptic at slot {}",
                    session.hand().label(),
                    out.wheel.map(|w| w.selected_index).unwrap_or(0)
                );
            }
        }
        for cmd in self.store.borrow_mut().drain_commands() {
            match cmd {
                DrawableCommand::Create { .. } => self.stats.created += 1,
                DrawableCommand::Rebuild { .. } => self.stats.rebuilt += 1,
                DrawableCommand::Release { .. } => self.stats.released += 1,
            }
        }
        self.stats.frames += 1;
    }

    pub fn log_summary(&self) {
        let s = self.stats;
        log::info!(
            "[rig] {} frames ({:.2}s), {} strokes live",
            s.frames,
            self.now_sec(),
            self.store.borrow().len()
        );
        log::info!(
            "[rig] drawables: {} created, {} rebuilds, {} released; {} haptic pulses",
            s.created,
            s.rebuilt,
            s.released,
            s.haptic_pulses
        );
        for session in [&self.left, &self.right] {
            log::info!(
                "[rig] {}: color {} ({}), width {}, eraser {}",
                session.hand().label(),
                session.current_color().to_hex(),
                color_name(session.current_color()),
                session.current_width(),
                if session.eraser_enabled() { "on" } else { "off" }
            );
        }
        for stroke in self.store.borrow().strokes() {
            log::debug!(
                "[rig] stroke {} {} w{} {} points",
                stroke.id.0,
                stroke.color.to_hex(),
                stroke.width,
                stroke.points().len()
            );
        }
    }
}
