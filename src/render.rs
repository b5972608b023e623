//! Frame assembly and screen painting.
//!
//! A frame is built completely in a [`FrameBuffer`] and reaches the device in a
//! single write, so the terminal never shows a half-drawn screen.

pub mod capabilities;
pub mod frame;
pub mod renderer;

pub use capabilities::Capabilities;
pub use frame::FrameBuffer;
pub use renderer::{Placeholder, Renderer, View, FILLER, ROW_SEPARATOR};
