//! # pipit - A Collaborative Text Editor for the Terminal
//!
//! This crate is the terminal foundation of the editor: it takes exclusive
//! control of the controlling terminal, switches it to raw mode, paints
//! full-screen frames, and dispatches single keystrokes.
//!
//! ## Features
//!
//! - **Guaranteed restoration**: the original terminal mode comes back on
//!   normal exit, fatal errors, panics and termination signals
//! - **Flicker-free frames**: each screen paint is assembled in memory and
//!   written in a single call
//! - **Wide characters**: input is decoded one UTF-8 character at a time
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`terminal`] - Device seam, raw-mode session guard, real TTY
//! - [`render`] - Frame buffer, capability set, renderer
//! - [`input`] - Key events and the blocking input reader
//! - [`app`] - Event loop and session driver
//! - [`config`] - Command-line configuration
//!
//! Only Unix terminals are supported.

// Core modules
pub mod error;
pub mod terminal;

// Subsystems
pub mod input;
pub mod render;

// Core components
pub mod app;
pub mod config;
pub mod testing;

// Re-export commonly used types for convenience
pub use error::{PipitError, Result};

// Public API surface for external usage
pub use app::{EventLoop, LoopState, Termination, QUIT_KEY};
pub use config::SessionConfig;
pub use input::{InputReader, KeyEvent};
pub use render::{FrameBuffer, Renderer};
pub use terminal::{ScreenGeometry, TerminalDevice, TerminalSession, Tty};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run an editing session on the controlling terminal.
pub fn run(config: SessionConfig) -> Result<Termination> {
    app::run(config, Tty::new())
}
