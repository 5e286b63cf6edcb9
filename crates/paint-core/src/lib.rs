pub mod config;
pub mod constants;
pub mod follower;
pub mod indicator;
pub mod input;
pub mod palette;
pub mod pose;
pub mod session;
pub mod spin;
pub mod state;
pub mod store;

pub use config::*;
pub use constants::*;
pub use follower::*;
pub use indicator::*;
pub use input::*;
pub use palette::*;
pub use pose::*;
pub use session::*;
pub use spin::*;
pub use state::*;
pub use store::*;
