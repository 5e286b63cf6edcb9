use crate::events::{event_for_name, flatten_points, hand_for_name, pose_from_parts};
use crate::layout::{as_floats, wheel_slots, IndicatorInstance};
use instant::Instant;
use js_sys::{Array, Float32Array, Object, Reflect};
use paint_core::{
    DrawableCommand, FrameOutput, Hand, PaintSession, SessionConfig, StrokeStore, WheelState,
    ARROW_LENGTH, ARROW_WIDTH, WHEEL_ITEM_RADIUS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("paint-web starting");
    Ok(())
}

fn set(obj: &Object, key: &str, value: &JsValue) {
    if let Err(e) = Reflect::set(obj, &JsValue::from_str(key), value) {
        log::debug!("[web] could not set {}: {:?}", key, e);
    }
}

fn floats(values: &[f32]) -> JsValue {
    Float32Array::from(values).into()
}

struct Sessions {
    store: Rc<RefCell<StrokeStore>>,
    left: PaintSession,
    right: PaintSession,
}

fn build_sessions() -> anyhow::Result<Sessions> {
    let store = Rc::new(RefCell::new(StrokeStore::new()));
    let left = PaintSession::new(SessionConfig::for_hand(Hand::Left), store.clone())?;
    let right = PaintSession::new(SessionConfig::for_hand(Hand::Right), store.clone())?;
    Ok(Sessions { store, left, right })
}

/// Both controllers plus the stroke store they share.
#[wasm_bindgen]
pub struct PaintScene {
    sessions: Sessions,
    clock: Instant,
}

impl PaintScene {
    fn session_mut(&mut self, hand: &str) -> Option<&mut PaintSession> {
        match hand_for_name(hand)? {
            Hand::Left => Some(&mut self.sessions.left),
            Hand::Right => Some(&mut self.sessions.right),
        }
    }
}

#[wasm_bindgen]
impl PaintScene {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PaintScene, JsValue> {
        let sessions = build_sessions().map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
        Ok(PaintScene {
            sessions,
            clock: Instant::now(),
        })
    }

    /// Queue a controller event; returns false for unknown hands or names.
    pub fn push_event(&mut self, hand: &str, name: &str, x: f32, y: f32) -> bool {
        let Some(event) = event_for_name(name, x, y) else {
            log::debug!("[web] unhandled event {}", name);
            return false;
        };
        match self.session_mut(hand) {
            Some(session) => {
                session.enqueue(event);
                true
            }
            None => false,
        }
    }

    /// Advance one controller by a frame and describe what to draw for it.
    #[allow(clippy::too_many_arguments)]
    pub fn frame(
        &mut self,
        hand: &str,
        px: f32,
        py: f32,
        pz: f32,
        qx: f32,
        qy: f32,
        qz: f32,
        qw: f32,
    ) -> JsValue {
        let now_sec = self.clock.elapsed().as_secs_f64();
        let pose = pose_from_parts([px, py, pz], [qx, qy, qz, qw]);
        match self.session_mut(hand) {
            Some(session) => frame_to_js(&session.frame(&pose, now_sec)),
            None => JsValue::NULL,
        }
    }

    /// Drawable create/rebuild/release commands accumulated since the last call.
    pub fn drain_commands(&mut self) -> Array {
        let out = Array::new();
        for cmd in self.sessions.store.borrow_mut().drain_commands() {
            let obj = Object::new();
            match cmd {
                DrawableCommand::Create {
                    drawable,
                    color,
                    width,
                } => {
                    set(&obj, "kind", &"create".into());
                    set(&obj, "id", &JsValue::from_f64(drawable.0 as f64));
                    set(&obj, "color", &JsValue::from_f64(color.packed() as f64));
                    set(&obj, "width", &JsValue::from_f64(width as f64));
                }
                DrawableCommand::Rebuild { drawable, points } => {
                    set(&obj, "kind", &"rebuild".into());
                    set(&obj, "id", &JsValue::from_f64(drawable.0 as f64));
                    set(&obj, "points", &floats(&flatten_points(&points)));
                }
                DrawableCommand::Release { drawable } => {
                    set(&obj, "kind", &"release".into());
                    set(&obj, "id", &JsValue::from_f64(drawable.0 as f64));
                }
            }
            out.push(&obj);
        }
        out
    }

    pub fn stroke_count(&self) -> usize {
        self.sessions.store.borrow().len()
    }

    pub fn current_color(&self, hand: &str) -> Option<u32> {
        match hand_for_name(hand)? {
            Hand::Left => Some(self.sessions.left.current_color().packed()),
            Hand::Right => Some(self.sessions.right.current_color().packed()),
        }
    }
}

fn frame_to_js(out: &FrameOutput) -> JsValue {
    let obj = Object::new();
    let indicator = IndicatorInstance::from(&out.indicator);
    set(&obj, "indicator", &floats(&as_floats(&[indicator])));
    set(&obj, "haptic", &JsValue::from_bool(out.haptic_pulse));
    let wheel = out.wheel.as_ref().map(wheel_to_js).unwrap_or(JsValue::NULL);
    set(&obj, "wheel", &wheel);
    obj.into()
}

fn wheel_to_js(wheel: &WheelState) -> JsValue {
    let obj = Object::new();
    set(&obj, "position", &floats(&wheel.position.to_array()));
    set(&obj, "orientation", &floats(&wheel.orientation.to_array()));
    set(&obj, "angle", &JsValue::from_f64(wheel.visual_angle as f64));
    set(
        &obj,
        "selected",
        &JsValue::from_f64(wheel.selected_index as f64),
    );
    set(&obj, "arrow", &floats(&wheel.arrow_local_position().to_array()));
    set(&obj, "arrowSize", &floats(&[ARROW_WIDTH, ARROW_LENGTH]));
    set(&obj, "slotRadius", &JsValue::from_f64(WHEEL_ITEM_RADIUS as f64));
    set(&obj, "slots", &floats(&as_floats(&wheel_slots(wheel))));
    obj.into()
}
