use paint_core::{IndicatorState, WheelState};

/// Indicator sphere packed for a single instanced draw.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct IndicatorInstance {
    pub pos: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

impl From<&IndicatorState> for IndicatorInstance {
    fn from(s: &IndicatorState) -> Self {
        let [r, g, b] = s.color.to_f32();
        Self {
            pos: s.position.to_array(),
            radius: s.radius,
            color: [r, g, b, 1.0],
        }
    }
}

/// One wheel slot in world space, ready for instancing.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SlotInstance {
    pub pos: [f32; 3],
    pub selected: f32,
    pub color: [f32; 4],
}

pub fn wheel_slots(wheel: &WheelState) -> Vec<SlotInstance> {
    (0..wheel.slot_count)
        .map(|i| {
            let [r, g, b] = wheel.slot_color(i).to_f32();
            SlotInstance {
                pos: wheel.slot_world_position(i).to_array(),
                selected: if i == wheel.selected_index { 1.0 } else { 0.0 },
                color: [r, g, b, 1.0],
            }
        })
        .collect()
}

/// Flatten packed instances for upload as a Float32Array.
pub fn as_floats<T: bytemuck::Pod>(items: &[T]) -> Vec<f32> {
    bytemuck::cast_slice(items).to_vec()
}
