//! Per-controller paint state machine.
//!
//! A session owns the mode (idle, drawing, menu open), the eraser toggle, the
//! current color and width, and the menu's follower and spin selector. Input
//! events are queued as they arrive and applied in order at the next frame
//! boundary, before that frame's pose is used to extend the active stroke or
//! move the menu. Strokes live in a [`StrokeStore`] shared by every session so
//! either hand can undo or erase the other's work.

use crate::config::{ConfigError, SessionConfig};
use crate::constants::INDICATOR_BASE_RADIUS;
use crate::follower::Follower;
use crate::indicator::IndicatorAnimator;
use crate::input::{ButtonAction, Hand, InputEvent, InputQueue};
use crate::palette::{color_name, Rgb, ERASER_COLOR, PALETTE};
use crate::pose::Pose;
use crate::spin::SpinSelector;
use crate::state::{FrameOutput, IndicatorState, WheelState};
use crate::store::{StrokeId, StrokeStore};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Drawing,
    MenuOpen,
}

pub struct PaintSession {
    config: SessionConfig,
    store: Rc<RefCell<StrokeStore>>,
    queue: InputQueue,
    mode: Mode,
    eraser_enabled: bool,
    current_color: Rgb,
    current_width: f32,
    active_stroke: Option<StrokeId>,
    last_sample: Option<Vec3>,
    stick_x: f32,
    spin: SpinSelector,
    follower: Follower,
    indicator: IndicatorAnimator,
}

impl PaintSession {
    pub fn new(
        config: SessionConfig,
        store: Rc<RefCell<StrokeStore>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            queue: InputQueue::new(),
            mode: Mode::Idle,
            eraser_enabled: false,
            current_color: config.initial_color,
            current_width: config.default_width,
            active_stroke: None,
            last_sample: None,
            stick_x: 0.0,
            spin: SpinSelector::new(config.spin),
            follower: Follower::new(config.follower),
            indicator: IndicatorAnimator::with_duration(
                config.rest_offset,
                config.menu_transition_sec,
            ),
            store,
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn hand(&self) -> Hand {
        self.config.hand
    }

    pub fn store(&self) -> &Rc<RefCell<StrokeStore>> {
        &self.store
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn eraser_enabled(&self) -> bool {
        self.eraser_enabled
    }

    pub fn current_color(&self) -> Rgb {
        self.current_color
    }

    pub fn current_width(&self) -> f32 {
        self.current_width
    }

    pub fn active_stroke(&self) -> Option<StrokeId> {
        self.active_stroke
    }

    pub fn spin(&self) -> &SpinSelector {
        &self.spin
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    pub fn indicator_offset(&self, now_sec: f64) -> f32 {
        self.indicator.value(now_sec)
    }

    /// Queue an event for the next frame boundary.
    pub fn enqueue(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Apply queued events, then advance drawing or the menu with this frame's pose.
    pub fn frame(&mut self, pose: &Pose, now_sec: f64) -> FrameOutput {
        for event in self.queue.drain() {
            self.handle(event, pose, now_sec);
        }

        let mut haptic_pulse = false;
        match self.mode {
            Mode::Drawing => self.sample_stroke(pose),
            Mode::MenuOpen => {
                let target = pose.offset_forward(self.config.menu_offset);
                self.follower.update(target, pose.orientation);
                haptic_pulse = self.spin.update(self.stick_x).index_changed;
            }
            Mode::Idle => {}
        }

        FrameOutput {
            indicator: self.indicator_state(pose, now_sec),
            wheel: self.wheel(),
            haptic_pulse,
        }
    }

    /// Apply one event immediately.
    pub fn handle(&mut self, event: InputEvent, pose: &Pose, now_sec: f64) {
        match event.sanitized() {
            InputEvent::TriggerDown => self.on_trigger_down(pose),
            InputEvent::TriggerUp => self.on_trigger_up(),
            InputEvent::GripDown => self.on_grip_down(pose, now_sec),
            InputEvent::GripUp => self.on_grip_up(pose, now_sec),
            InputEvent::Button(_) => match event.action() {
                Some(ButtonAction::Undo) => {
                    self.store.borrow_mut().undo_last();
                }
                Some(ButtonAction::Clear) => {
                    self.store.borrow_mut().clear_all();
                }
                None => {}
            },
            InputEvent::ThumbstickPress => {
                self.eraser_enabled = !self.eraser_enabled;
                log::info!(
                    "[session] {} eraser={}",
                    self.hand().label(),
                    self.eraser_enabled
                );
            }
            InputEvent::ThumbstickMove { x, y } => {
                self.stick_x = x;
                // one width step per move event past the threshold; holding the
                // stick still sends no events and does not repeat the step
                if y.abs() > self.config.stick_width_threshold {
                    // stick up reports negative y and widens the stroke
                    self.current_width = (self.current_width - y.signum() * self.config.width_step)
                        .clamp(self.config.min_width, self.config.max_width);
                }
            }
        }
    }

    pub fn wheel(&self) -> Option<WheelState> {
        (self.mode == Mode::MenuOpen).then(|| WheelState {
            position: self.follower.position(),
            orientation: self.follower.orientation(),
            visual_angle: self.spin.visual_angle(),
            selected_index: self.spin.selected_index(),
            slot_count: self.spin.slot_count(),
        })
    }

    pub fn indicator_state(&self, pose: &Pose, now_sec: f64) -> IndicatorState {
        let offset = self.indicator.value(now_sec);
        IndicatorState {
            position: pose.offset_forward(offset),
            color: if self.eraser_enabled {
                ERASER_COLOR
            } else {
                self.current_color
            },
            radius: INDICATOR_BASE_RADIUS * self.current_width / self.config.default_width,
            offset,
        }
    }

    fn on_trigger_down(&mut self, pose: &Pose) {
        if self.eraser_enabled {
            let erased = self
                .store
                .borrow_mut()
                .erase_near(pose.position, self.config.erase_radius);
            log::debug!("[session] {} erase hit={:?}", self.hand().label(), erased);
            return;
        }
        if self.mode != Mode::Idle {
            log::debug!("[session] trigger ignored in {:?}", self.mode);
            return;
        }
        let id = self
            .store
            .borrow_mut()
            .push(self.current_color, self.current_width);
        self.active_stroke = Some(id);
        self.last_sample = None;
        self.mode = Mode::Drawing;
    }

    fn on_trigger_up(&mut self) {
        if self.mode != Mode::Drawing {
            log::debug!("[session] trigger up ignored in {:?}", self.mode);
            return;
        }
        if let Some(id) = self.active_stroke.take() {
            let points = self
                .store
                .borrow()
                .get(id)
                .map(|s| s.points().len())
                .unwrap_or(0);
            log::debug!("[session] stroke={} finished points={}", id.0, points);
        }
        self.last_sample = None;
        self.mode = Mode::Idle;
    }

    fn on_grip_down(&mut self, pose: &Pose, now_sec: f64) {
        if self.mode != Mode::Idle {
            log::debug!("[session] grip ignored in {:?}", self.mode);
            return;
        }
        self.follower.reset(
            pose.offset_forward(self.config.menu_offset),
            pose.orientation,
        );
        self.indicator.animate_to(self.config.menu_offset, now_sec);
        self.mode = Mode::MenuOpen;
        log::debug!("[menu] {} open", self.hand().label());
    }

    fn on_grip_up(&mut self, pose: &Pose, now_sec: f64) {
        if self.mode != Mode::MenuOpen {
            log::debug!("[menu] grip up ignored in {:?}", self.mode);
            return;
        }
        let picked = self
            .wheel()
            .and_then(|w| w.best_facing_slot(pose.forward()))
            .filter(|(_, dot)| *dot > self.config.select_threshold);
        if let Some((index, dot)) = picked {
            self.current_color = PALETTE[index % PALETTE.len()];
            log::info!(
                "[menu] {} picked {} (dot={:.2})",
                self.hand().label(),
                color_name(self.current_color),
                dot
            );
        }
        self.indicator.animate_to(self.config.rest_offset, now_sec);
        self.mode = Mode::Idle;
    }

    fn sample_stroke(&mut self, pose: &Pose) {
        let Some(id) = self.active_stroke else {
            return;
        };
        let point = pose.offset_forward(self.config.rest_offset);
        if let Some(last) = self.last_sample {
            if last.distance(point) <= self.config.min_sample_spacing {
                return;
            }
        }
        if self.store.borrow_mut().append_point(id, point) {
            self.last_sample = Some(point);
        } else {
            // removed by undo, erase or clear while the trigger was held
            log::debug!("[session] stroke={} gone, sampling stopped", id.0);
            self.active_stroke = None;
        }
    }
}
