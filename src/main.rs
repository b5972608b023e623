//! pipit - A Collaborative Text Editor for the Terminal
//!
//! Parses the command line, then hands the terminal to the editor session.

use anyhow::{Context, Result};
use pipit::{PipitError, SessionConfig};

fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    // Usage errors, help and version are reported by clap before the
    // terminal is touched
    let config = match SessionConfig::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(PipitError::Usage(err)) => err.exit(),
        Err(err) => return Err(err.into()),
    };

    log::info!(
        "Opening {} ({} {}:{})",
        config.filename.display(),
        if config.server_mode { "serving on" } else { "connecting to" },
        config.host,
        config.port
    );

    // The terminal is already restored when an error comes back
    let termination = pipit::run(config).context("terminal session failed")?;
    log::info!("Session ended: {:?}", termination);

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        // Ensure version is accessible
        assert!(!pipit::VERSION.is_empty());
    }
}
