//! The controlling terminal: stdin for keyboard input and mode flags, stdout
//! for output.

use crate::terminal::{Attributes, TeardownHook, TerminalDevice};
use nix::sys::termios::{tcgetattr, tcsetattr, SetArg, Termios};
use std::io::{self, Read, Stdin, Stdout, Write};
use std::os::fd::{AsFd, AsRawFd, BorrowedFd};

/// Unbuffered byte stream over a file descriptor.
///
/// std's `Stdout` is line buffered and `Stdin` reads ahead, so both are
/// bypassed: every `write` here is one write(2) and every `read` one read(2).
pub(crate) struct FdStream<F> {
    fd: F,
}

impl<F: AsFd> FdStream<F> {
    pub(crate) fn new(fd: F) -> Self {
        Self { fd }
    }
}

impl<F: AsFd> AsFd for FdStream<F> {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.fd.as_fd()
    }
}

impl<F: AsFd> Read for FdStream<F> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(nix::unistd::read(self.fd.as_fd().as_raw_fd(), buf)?)
    }
}

impl<F: AsFd> Write for FdStream<F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(nix::unistd::write(&self.fd, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Production [`TerminalDevice`] backed by the process's standard streams.
pub struct Tty {
    input: FdStream<Stdin>,
    output: FdStream<Stdout>,
    /// Full termios record from the first attribute query. Applied attributes
    /// are laid over it so control characters and speeds never change.
    original: Option<Termios>,
}

impl Tty {
    pub fn new() -> Self {
        Self {
            input: FdStream::new(io::stdin()),
            output: FdStream::new(io::stdout()),
            original: None,
        }
    }
}

impl Default for Tty {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDevice for Tty {
    fn attributes(&mut self) -> io::Result<Attributes> {
        let termios = tcgetattr(&self.input)?;
        let attributes = Attributes::from(&termios);
        if self.original.is_none() {
            self.original = Some(termios);
        }
        Ok(attributes)
    }

    fn apply_attributes(&mut self, attributes: &Attributes) -> io::Result<()> {
        let mut termios = match &self.original {
            Some(original) => original.clone(),
            None => tcgetattr(&self.input)?,
        };
        attributes.apply_to(&mut termios);
        tcsetattr(&self.input, SetArg::TCSAFLUSH, &termios)?;
        Ok(())
    }

    fn window_size(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok((rows, cols))
    }

    fn teardown_hook(&self) -> Option<TeardownHook> {
        let original = self.original.clone()?;
        Some(Box::new(move || {
            if let Err(err) = tcsetattr(io::stdin(), SetArg::TCSAFLUSH, &original) {
                log::warn!("Failed to restore terminal attributes: {}", err);
            }
        }))
    }
}

impl Read for Tty {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.input.read(buf)
    }
}

impl Write for Tty {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
