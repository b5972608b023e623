//! Terminal device control: attribute snapshots, raw mode, and the session guard.
//!
//! [`TerminalSession`] is the only type in the crate that mutates OS-level
//! terminal state. It talks to the terminal through the [`TerminalDevice`]
//! trait so the event loop can be driven by [`Tty`] in production and by an
//! in-memory fake in tests.

pub mod attributes;
pub mod device;
pub mod session;
pub mod teardown;
pub mod tty;

pub use attributes::Attributes;
pub use device::{ScreenGeometry, TerminalDevice};
pub use session::TerminalSession;
pub use teardown::TeardownHook;
pub use tty::Tty;
