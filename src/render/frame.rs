//! Append-only buffer holding one full screen paint.

use crate::error::{PipitError, Result};
use std::io::Write;

/// Accumulates the fragments of one frame (control sequences, glyphs, row
/// separators) as UTF-8 text.
///
/// Buffers are not reused: [`flush_to`](Self::flush_to) consumes the buffer
/// and the next frame starts from a fresh one.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    data: String,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `fragment` onto the end of the frame.
    ///
    /// # Errors
    /// `Allocation` if the backing storage cannot grow.
    pub fn append(&mut self, fragment: &str) -> Result<()> {
        self.data
            .try_reserve(fragment.len())
            .map_err(|source| PipitError::allocation(fragment.len(), source))?;
        self.data.push_str(fragment);
        Ok(())
    }

    /// Append a single glyph, narrow or wide.
    pub fn append_char(&mut self, glyph: char) -> Result<()> {
        let mut encoded = [0u8; 4];
        self.append(glyph.encode_utf8(&mut encoded))
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write the whole frame to `device` in one write call and discard it.
    ///
    /// # Errors
    /// `Output` if the device rejects the write.
    pub fn flush_to<W: Write + ?Sized>(self, device: &mut W) -> Result<()> {
        device
            .write_all(self.data.as_bytes())
            .map_err(PipitError::output)?;
        device.flush().map_err(PipitError::output)
    }
}
