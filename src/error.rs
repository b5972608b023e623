//! Error types and handling infrastructure for pipit.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary wraps these in `anyhow` to add context when a
//! fatal error is reported.
//!
//! ## Design Principles
//!
//! - **Every error is fatal**: a terminal that cannot be controlled has no safe
//!   degraded mode, so nothing here is retried or recovered in place
//! - **Context preservation**: each variant names the failing operation and keeps
//!   the underlying OS error as its source
//! - **Consistency**: Standardized Result type across all modules

use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// The main error type for pipit operations.
#[derive(Error, Debug)]
pub enum PipitError {
    /// Terminal attributes or window size could not be read (not a TTY,
    /// unsupported device, or a zero-sized window)
    #[error("Failed to query terminal: {operation}")]
    TerminalQuery {
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// Raw-mode (or restored) attributes could not be applied
    #[error("Failed to configure terminal: {operation}")]
    TerminalConfig {
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// The frame buffer could not grow
    #[error("Frame buffer could not grow by {requested} bytes")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// Reading from the input stream failed for a reason other than end-of-stream
    #[error("Failed to read keyboard input")]
    InputRead {
        #[source]
        source: io::Error,
    },

    /// Writing a frame to the output device failed
    #[error("Failed to write frame to terminal")]
    Output {
        #[source]
        source: io::Error,
    },

    /// Invalid command line arguments
    #[error(transparent)]
    Usage(#[from] clap::Error),
}

/// Standard Result type for pipit operations.
pub type Result<T> = std::result::Result<T, PipitError>;

impl PipitError {
    /// Create a TerminalQuery error for the named operation
    pub fn terminal_query(operation: &'static str, source: io::Error) -> Self {
        Self::TerminalQuery { operation, source }
    }

    /// Create a TerminalConfig error for the named operation
    pub fn terminal_config(operation: &'static str, source: io::Error) -> Self {
        Self::TerminalConfig { operation, source }
    }

    /// Create an Allocation error for a failed reservation of `requested` bytes
    pub fn allocation(requested: usize, source: TryReserveError) -> Self {
        Self::Allocation { requested, source }
    }

    /// Create an InputRead error
    pub fn input_read(source: io::Error) -> Self {
        Self::InputRead { source }
    }

    /// Create an Output error
    pub fn output(source: io::Error) -> Self {
        Self::Output { source }
    }
}
