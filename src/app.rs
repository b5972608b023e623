//! Application orchestration layer
//!
//! The event loop owns the terminal session and alternates render, blocking
//! read, and dispatch until the quit key arrives or something fails.

use crate::config::SessionConfig;
use crate::error::Result;
use crate::input::{InputReader, KeyEvent};
use crate::render::Renderer;
use crate::terminal::{ScreenGeometry, TerminalDevice, TerminalSession};

/// Key that ends the session (Ctrl-D).
pub const QUIT_KEY: KeyEvent = KeyEvent::ctrl('d');

/// Lifecycle of the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated(Termination),
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The quit key was pressed
    QuitRequested,
    /// The input stream closed, so no further key can arrive
    EndOfInput,
    /// A fatal error ended the loop and the terminal was torn down
    Aborted,
}

/// Composition root: session, renderer and input reader wired together.
pub struct EventLoop<D: TerminalDevice> {
    config: SessionConfig,
    session: TerminalSession<D>,
    renderer: Renderer,
    input: InputReader,
    geometry: ScreenGeometry,
    state: LoopState,
    /// Most recent key that was not a command
    last_key: Option<KeyEvent>,
}

impl<D: TerminalDevice> EventLoop<D> {
    /// Enter raw mode on `device` and capture the initial geometry.
    ///
    /// If the geometry query fails the session guard is dropped here, which
    /// restores the terminal before the error reaches the caller.
    pub fn start(config: SessionConfig, device: D) -> Result<Self> {
        let session = TerminalSession::enter_raw_mode(device)?;
        let geometry = session.query_geometry()?;
        log::debug!(
            "Session started for {} ({}x{})",
            config.filename.display(),
            geometry.cols(),
            geometry.rows()
        );

        Ok(Self {
            config,
            session,
            renderer: Renderer::new(),
            input: InputReader::new(),
            geometry,
            state: LoopState::Running,
            last_key: None,
        })
    }

    /// Run one iteration: paint, read one key, dispatch it.
    ///
    /// Once terminated this returns the final state without touching the
    /// terminal.
    pub fn step(&mut self) -> Result<LoopState> {
        if self.state != LoopState::Running {
            return Ok(self.state);
        }

        self.renderer
            .paint(self.geometry, self.session.device_mut())?;

        let event = self.input.read_event(self.session.device_mut())?;
        self.state = match event {
            Some(key) => self.dispatch(key)?,
            None => self.terminate(Termination::EndOfInput)?,
        };
        Ok(self.state)
    }

    /// Step until the loop terminates.
    pub fn run(&mut self) -> Result<Termination> {
        loop {
            if let LoopState::Terminated(reason) = self.step()? {
                return Ok(reason);
            }
        }
    }

    fn dispatch(&mut self, key: KeyEvent) -> Result<LoopState> {
        if key == QUIT_KEY {
            return self.terminate(Termination::QuitRequested);
        }

        log::trace!("Key {} recorded", key);
        self.last_key = Some(key);
        Ok(LoopState::Running)
    }

    /// Final clear/home paint before leaving the loop.
    fn terminate(&mut self, reason: Termination) -> Result<LoopState> {
        self.renderer.clear(self.session.device_mut())?;
        log::debug!("Event loop terminated: {:?}", reason);
        Ok(LoopState::Terminated(reason))
    }

    /// Leave raw mode. Safe to call more than once.
    pub fn shutdown(&mut self) -> Result<()> {
        self.session.restore()
    }

    /// Best-effort cleanup after a fatal error: blank the screen and restore
    /// the terminal, logging anything that fails on the way.
    pub fn abort(&mut self) {
        self.state = LoopState::Terminated(Termination::Aborted);
        if let Err(e) = self.renderer.clear(self.session.device_mut()) {
            log::warn!("Failed to clear screen during shutdown: {}", e);
        }
        if let Err(e) = self.session.restore() {
            log::warn!("{}", e);
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn last_key(&self) -> Option<KeyEvent> {
        self.last_key
    }

    pub fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn session(&self) -> &TerminalSession<D> {
        &self.session
    }
}

/// Run a full session on `device`: raw mode in, event loop, raw mode out.
///
/// The terminal is restored before this returns on every path. On error
/// the screen is blanked first, then the error is returned for reporting.
pub fn run<D: TerminalDevice>(config: SessionConfig, device: D) -> Result<Termination> {
    let mut event_loop = EventLoop::start(config, device)?;

    match event_loop.run() {
        Ok(reason) => {
            event_loop.shutdown()?;
            Ok(reason)
        }
        Err(e) => {
            event_loop.abort();
            Err(e)
        }
    }
}
