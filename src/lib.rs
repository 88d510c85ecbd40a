pub mod config;
pub mod constants;
pub mod corridor;
pub mod door;
pub mod gen;
pub mod geometry;
pub mod random;
pub mod room;
pub mod room_connection;
pub mod room_manager;
pub mod stats;

pub use config::{LayoutConfig, LayoutConfigError};
pub use constants::{Direction, MAX_ROOM_DEPTH};
pub use gen::generate_layout;
pub use room::{Room, RoomId, RoomStatus};
pub use room_manager::RoomManager;
