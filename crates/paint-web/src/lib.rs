pub mod events;
pub mod layout;

// Browser bindings; the modules above stay host-testable.
#[cfg(target_arch = "wasm32")]
mod bridge;
#[cfg(target_arch = "wasm32")]
pub use bridge::PaintScene;
