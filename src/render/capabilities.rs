//! Terminal capability set: the control sequences a frame is allowed to use.

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::Command;

/// Control sequences for one terminal capability model.
///
/// Rendering code asks for sequences by meaning rather than embedding escape
/// literals, so a different capability model only needs a new constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    clear_screen: String,
    cursor_home: String,
}

impl Capabilities {
    /// ANSI/VT100 sequences, as understood by every common terminal emulator.
    pub fn ansi() -> Self {
        Self {
            clear_screen: ansi_sequence(Clear(ClearType::All)),
            cursor_home: ansi_sequence(MoveTo(0, 0)),
        }
    }

    /// Erase the whole screen.
    pub fn clear_screen(&self) -> &str {
        &self.clear_screen
    }

    /// Move the cursor to the top-left cell.
    pub fn cursor_home(&self) -> &str {
        &self.cursor_home
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ansi()
    }
}

fn ansi_sequence(command: impl Command) -> String {
    let mut sequence = String::new();
    // Formatting into a String cannot fail
    let _ = command.write_ansi(&mut sequence);
    sequence
}
