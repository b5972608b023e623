//! Raw terminal mode management with guaranteed restoration.

use crate::error::{PipitError, Result};
use crate::terminal::{teardown, Attributes, ScreenGeometry, TerminalDevice};

/// Guard that owns a terminal device in raw mode.
///
/// The attributes captured on entry are reapplied exactly once: by an explicit
/// [`restore`](Self::restore), by `Drop` (normal return and unwinding), or by
/// the teardown registry on panic/termination signal, whichever comes first.
pub struct TerminalSession<D: TerminalDevice> {
    device: D,
    /// Attributes observed before raw mode; `None` once restored
    original: Option<Attributes>,
    /// Whether a teardown hook was registered for this session
    armed: bool,
}

impl<D: TerminalDevice> TerminalSession<D> {
    /// Capture the current mode, register its restoration, and switch to raw mode.
    ///
    /// # Errors
    /// - `TerminalQuery` if the device cannot report its attributes
    /// - `TerminalConfig` if the raw attributes cannot be applied
    pub fn enter_raw_mode(mut device: D) -> Result<Self> {
        let original = device
            .attributes()
            .map_err(|e| PipitError::terminal_query("read terminal attributes", e))?;

        let armed = match device.teardown_hook() {
            Some(hook) => {
                teardown::arm(hook);
                true
            }
            None => false,
        };

        if let Err(e) = device.apply_attributes(&original.raw()) {
            if armed {
                teardown::disarm();
            }
            return Err(PipitError::terminal_config("enable raw mode", e));
        }

        log::debug!("Entered raw mode (original: {:?})", original);

        Ok(Self {
            device,
            original: Some(original),
            armed,
        })
    }

    /// Reapply the attributes captured on entry. Calling it again is a no-op.
    ///
    /// On failure the session stays active and the teardown hook stays
    /// registered, so a later call, `Drop` or a signal can still restore.
    pub fn restore(&mut self) -> Result<()> {
        let Some(original) = self.original else {
            return Ok(());
        };

        self.device
            .apply_attributes(&original)
            .map_err(|e| PipitError::terminal_config("restore terminal attributes", e))?;

        self.original = None;
        if self.armed {
            self.armed = false;
            teardown::disarm();
        }

        log::debug!("Terminal attributes restored");
        Ok(())
    }

    /// Query the current window size of the output device.
    ///
    /// # Errors
    /// `TerminalQuery` if the query fails or a dimension is zero.
    pub fn query_geometry(&self) -> Result<ScreenGeometry> {
        let (rows, cols) = self
            .device
            .window_size()
            .map_err(|e| PipitError::terminal_query("window size", e))?;
        ScreenGeometry::new(rows, cols)
    }

    /// Check if raw mode is still active (not yet restored).
    pub fn is_active(&self) -> bool {
        self.original.is_some()
    }

    /// Attributes captured on entry, until restored.
    pub fn original_attributes(&self) -> Option<&Attributes> {
        self.original.as_ref()
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }
}

impl<D: TerminalDevice> Drop for TerminalSession<D> {
    fn drop(&mut self) {
        // Best-effort cleanup - nothing left to propagate to
        if let Err(e) = self.restore() {
            log::warn!("{}", e);
        }
    }
}
