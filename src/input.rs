//! Keyboard input: one blocking read, one decoded key.

pub mod key;
pub mod reader;

pub use key::KeyEvent;
pub use reader::InputReader;
