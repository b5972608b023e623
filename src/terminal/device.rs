//! The terminal device seam and screen geometry.

use crate::error::{PipitError, Result};
use crate::terminal::{Attributes, TeardownHook};
use std::io::{self, Read, Write};

/// Core trait for a character terminal.
///
/// `Read` is the keyboard input stream and `Write` the screen output stream.
/// The attribute methods operate on the input side, window size on the
/// output side, matching how a real TTY is queried.
pub trait TerminalDevice: Read + Write {
    /// Read the current mode flags.
    ///
    /// Fails when the input is not a terminal.
    fn attributes(&mut self) -> io::Result<Attributes>;

    /// Apply mode flags, discarding any pending unread input.
    fn apply_attributes(&mut self, attributes: &Attributes) -> io::Result<()>;

    /// Current window size as `(rows, cols)`.
    fn window_size(&self) -> io::Result<(u16, u16)>;

    /// Restoration action for the process-wide teardown registry.
    ///
    /// Called once, after [`attributes`](Self::attributes) succeeded. Devices
    /// that do not touch a real terminal return `None` and rely on the
    /// session guard alone.
    fn teardown_hook(&self) -> Option<TeardownHook> {
        None
    }
}

/// Visible size of the terminal. Both dimensions are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    rows: u16,
    cols: u16,
}

impl ScreenGeometry {
    /// Validate a window size reported by a device.
    pub fn new(rows: u16, cols: u16) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(PipitError::terminal_query(
                "window size",
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("terminal reported {rows} rows and {cols} columns"),
                ),
            ));
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }
}
