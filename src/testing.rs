//! Test utilities shared by unit and integration tests.
//!
//! [`FakeTerminal`] is an in-memory [`TerminalDevice`]: scripted keyboard
//! input, recorded screen output, and mode flags that can be inspected after a
//! session ends.

use crate::terminal::{Attributes, TerminalDevice};
use nix::sys::termios::{ControlFlags, InputFlags, LocalFlags, OutputFlags};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::rc::Rc;

#[derive(Debug)]
struct FakeState {
    attributes: Attributes,
    applied: Vec<Attributes>,
    window_size: (u16, u16),
    input: VecDeque<u8>,
    output: Vec<u8>,
    writes: usize,
    fail_query: bool,
    fail_apply: bool,
    read_error: Option<io::ErrorKind>,
    write_error: Option<io::ErrorKind>,
}

/// In-memory terminal.
///
/// Clones share state, so a test keeps one handle while the session owns
/// another.
#[derive(Debug, Clone)]
pub struct FakeTerminal {
    state: Rc<RefCell<FakeState>>,
}

impl FakeTerminal {
    /// Create a terminal of the given size in cooked mode with no pending input.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            state: Rc::new(RefCell::new(FakeState {
                attributes: Self::cooked_attributes(),
                applied: Vec::new(),
                window_size: (rows, cols),
                input: VecDeque::new(),
                output: Vec::new(),
                writes: 0,
                fail_query: false,
                fail_apply: false,
                read_error: None,
                write_error: None,
            })),
        }
    }

    /// Typical line-discipline flags of an interactive shell.
    pub fn cooked_attributes() -> Attributes {
        Attributes {
            input: InputFlags::ICRNL | InputFlags::IXON | InputFlags::BRKINT,
            output: OutputFlags::OPOST | OutputFlags::ONLCR,
            control: ControlFlags::CS8 | ControlFlags::CREAD,
            local: LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::ISIG | LocalFlags::IEXTEN,
        }
    }

    /// Queue keyboard input. Reads report end-of-stream once it is consumed.
    pub fn with_input(self, bytes: impl AsRef<[u8]>) -> Self {
        self.push_input(bytes);
        self
    }

    pub fn push_input(&self, bytes: impl AsRef<[u8]>) {
        self.state.borrow_mut().input.extend(bytes.as_ref());
    }

    /// Make attribute queries fail as they do when input is not a TTY.
    pub fn fail_attribute_query(self) -> Self {
        self.state.borrow_mut().fail_query = true;
        self
    }

    /// Make every attribute change fail.
    pub fn fail_attribute_apply(self) -> Self {
        self.set_apply_failure(true);
        self
    }

    /// Switch attribute change failures on or off mid-session.
    pub fn set_apply_failure(&self, fail: bool) {
        self.state.borrow_mut().fail_apply = fail;
    }

    /// Make reads fail with `kind` once the queued input is exhausted.
    pub fn fail_reads(self, kind: io::ErrorKind) -> Self {
        self.state.borrow_mut().read_error = Some(kind);
        self
    }

    /// Make every write fail with `kind`.
    pub fn fail_writes(self, kind: io::ErrorKind) -> Self {
        self.state.borrow_mut().write_error = Some(kind);
        self
    }

    pub fn current_attributes(&self) -> Attributes {
        self.state.borrow().attributes
    }

    /// Every attribute set applied so far, in order.
    pub fn applied_attributes(&self) -> Vec<Attributes> {
        self.state.borrow().applied.clone()
    }

    pub fn output(&self) -> Vec<u8> {
        self.state.borrow().output.clone()
    }

    pub fn output_string(&self) -> String {
        String::from_utf8_lossy(&self.state.borrow().output).into_owned()
    }

    /// Number of write calls that reached the device.
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }

    pub fn pending_input(&self) -> usize {
        self.state.borrow().input.len()
    }
}

impl TerminalDevice for FakeTerminal {
    fn attributes(&mut self) -> io::Result<Attributes> {
        let state = self.state.borrow();
        if state.fail_query {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "Inappropriate ioctl for device",
            ));
        }
        Ok(state.attributes)
    }

    fn apply_attributes(&mut self, attributes: &Attributes) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_apply {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "Invalid argument"));
        }
        state.attributes = *attributes;
        state.applied.push(*attributes);
        // TCSAFLUSH semantics are not modelled: queued input stays readable
        Ok(())
    }

    fn window_size(&self) -> io::Result<(u16, u16)> {
        Ok(self.state.borrow().window_size)
    }
}

impl Read for FakeTerminal {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut state = self.state.borrow_mut();
        if state.input.is_empty() {
            if let Some(kind) = state.read_error {
                return Err(io::Error::new(kind, "scripted read failure"));
            }
            return Ok(0);
        }

        let count = buf.len().min(state.input.len());
        for (slot, byte) in buf.iter_mut().zip(state.input.drain(..count)) {
            *slot = byte;
        }
        Ok(count)
    }
}

impl Write for FakeTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.borrow_mut();
        if let Some(kind) = state.write_error {
            return Err(io::Error::new(kind, "scripted write failure"));
        }
        state.writes += 1;
        state.output.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
