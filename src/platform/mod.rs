//! Platform abstraction layer
//!
//! Host-facing glue that carries no game rules:
//! - Key mapping and pointer normalization
//! - Frame and paddle-timer callbacks with start/stop

pub mod driver;
pub mod input;

pub use driver::FrameDriver;
pub use input::{InputState, Key, pointer_to_canvas};
