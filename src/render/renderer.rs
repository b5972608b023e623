//! Full-screen frame rendering.
//!
//! Every frame follows the same protocol: clear the screen, home the cursor,
//! draw one fragment per row with `\r\n` between rows, then home the cursor
//! again so input and future cursor positioning start from a known cell.
//! Row content comes from a [`View`]; the protocol stays with [`Renderer`].

use crate::error::Result;
use crate::render::{Capabilities, FrameBuffer};
use crate::terminal::ScreenGeometry;
use std::io::Write;

/// Glyph drawn on rows that have no content.
pub const FILLER: char = '~';

/// Separator between rows. Output post-processing is off in raw mode, so the
/// carriage return has to be explicit.
pub const ROW_SEPARATOR: &str = "\r\n";

/// Source of row content.
pub trait View {
    /// Append the content of row `row` (zero based) to the frame.
    ///
    /// Must not append row separators; the renderer owns them.
    fn draw_row(&self, frame: &mut FrameBuffer, row: u16, geometry: ScreenGeometry)
        -> Result<()>;
}

/// Empty view: a single [`FILLER`] glyph on every row.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placeholder;

impl View for Placeholder {
    fn draw_row(&self, frame: &mut FrameBuffer, _row: u16, _geometry: ScreenGeometry) -> Result<()> {
        frame.append_char(FILLER)
    }
}

/// Builds frames for a view and flushes them to a device.
#[derive(Debug, Clone)]
pub struct Renderer<V = Placeholder> {
    capabilities: Capabilities,
    view: V,
}

impl Renderer<Placeholder> {
    /// Renderer for the placeholder view with ANSI control sequences.
    pub fn new() -> Self {
        Self::with_view(Capabilities::ansi(), Placeholder)
    }
}

impl Default for Renderer<Placeholder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: View> Renderer<V> {
    pub fn with_view(capabilities: Capabilities, view: V) -> Self {
        Self { capabilities, view }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Build one complete frame for `geometry`.
    pub fn render_frame(&self, geometry: ScreenGeometry) -> Result<FrameBuffer> {
        let mut frame = FrameBuffer::new();
        frame.append(self.capabilities.clear_screen())?;
        frame.append(self.capabilities.cursor_home())?;
        self.draw_rows(&mut frame, geometry)?;
        frame.append(self.capabilities.cursor_home())?;
        Ok(frame)
    }

    fn draw_rows(&self, frame: &mut FrameBuffer, geometry: ScreenGeometry) -> Result<()> {
        let rows = geometry.rows();
        for row in 0..rows {
            self.view.draw_row(frame, row, geometry)?;
            if row + 1 < rows {
                frame.append(ROW_SEPARATOR)?;
            }
        }
        Ok(())
    }

    /// Render a frame and write it to `device` in one write.
    pub fn paint<W: Write + ?Sized>(&self, geometry: ScreenGeometry, device: &mut W) -> Result<()> {
        self.render_frame(geometry)?.flush_to(device)
    }

    /// Blank the screen and home the cursor, used when the session ends.
    pub fn clear<W: Write + ?Sized>(&self, device: &mut W) -> Result<()> {
        let mut frame = FrameBuffer::new();
        frame.append(self.capabilities.clear_screen())?;
        frame.append(self.capabilities.cursor_home())?;
        frame.flush_to(device)
    }
}
