//! Command-line configuration.

use crate::error::Result;
use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, Command};
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "8080";

/// Settings for one editing session, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Host of the collaboration server
    pub host: String,
    /// Port of the collaboration server
    pub port: String,
    /// File to edit
    pub filename: PathBuf,
    /// Run as the server instead of connecting to one
    pub server_mode: bool,
}

impl SessionConfig {
    /// Command-line definition, also used to render help and usage errors.
    pub fn command() -> Command {
        Command::new("pipit")
            .version(crate::VERSION)
            .about("A collaborative text editor for the terminal.")
            .arg(
                Arg::new("host")
                    .short('i')
                    .long("host")
                    .value_name("HOST")
                    .default_value(DEFAULT_HOST)
                    .help("Host of server"),
            )
            .arg(
                Arg::new("port")
                    .short('p')
                    .long("port")
                    .value_name("PORT")
                    .default_value(DEFAULT_PORT)
                    .help("Port of server"),
            )
            .arg(
                Arg::new("server")
                    .short('s')
                    .long("server")
                    .action(ArgAction::SetTrue)
                    .help("Run as server"),
            )
            .arg(
                Arg::new("filename")
                    .value_name("FILENAME")
                    .help("File to edit")
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .index(1),
            )
    }

    /// Parse arguments, including the program name in first position.
    ///
    /// # Errors
    /// `Usage` for unknown flags, a missing filename, and the help/version
    /// requests (which clap reports as errors with a success exit code).
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;

        let filename = matches
            .get_one::<PathBuf>("filename")
            .cloned()
            .ok_or_else(|| {
                Self::command().error(ErrorKind::MissingRequiredArgument, "missing FILENAME")
            })?;

        Ok(Self {
            host: string_or(&matches, "host", DEFAULT_HOST),
            port: string_or(&matches, "port", DEFAULT_PORT),
            filename,
            server_mode: matches.get_flag("server"),
        })
    }
}

fn string_or(matches: &clap::ArgMatches, id: &str, default: &str) -> String {
    matches
        .get_one::<String>(id)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipitError;

    fn usage_kind(args: &[&str]) -> ErrorKind {
        match SessionConfig::from_args(args) {
            Err(PipitError::Usage(err)) => err.kind(),
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::from_args(["pipit", "notes.txt"]).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, "8080");
        assert_eq!(config.filename, PathBuf::from("notes.txt"));
        assert!(!config.server_mode);
    }

    #[test]
    fn test_short_flags() {
        let config =
            SessionConfig::from_args(["pipit", "-i", "example.org", "-p", "9000", "-s", "a.txt"])
                .unwrap();
        assert_eq!(config.host, "example.org");
        assert_eq!(config.port, "9000");
        assert!(config.server_mode);
        assert_eq!(config.filename, PathBuf::from("a.txt"));
    }

    #[test]
    fn test_long_flags() {
        let config = SessionConfig::from_args([
            "pipit",
            "--host",
            "10.0.0.1",
            "--port",
            "1234",
            "--server",
            "b.txt",
        ])
        .unwrap();
        assert_eq!(config.host, "10.0.0.1");
        assert_eq!(config.port, "1234");
        assert!(config.server_mode);
    }

    #[test]
    fn test_missing_filename() {
        assert_eq!(usage_kind(&["pipit"]), ErrorKind::MissingRequiredArgument);
        assert_eq!(usage_kind(&["pipit", "-s"]), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(usage_kind(&["pipit", "-x", "a.txt"]), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_exits_successfully() {
        match SessionConfig::from_args(["pipit", "-h"]) {
            Err(PipitError::Usage(err)) => {
                assert_eq!(err.kind(), ErrorKind::DisplayHelp);
                assert_eq!(err.exit_code(), 0);
            }
            other => panic!("expected help request, got {other:?}"),
        }
    }

    #[test]
    fn test_usage_error_exit_code_is_failure() {
        match SessionConfig::from_args(["pipit"]) {
            Err(PipitError::Usage(err)) => assert_ne!(err.exit_code(), 0),
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn test_command_definition_is_valid() {
        SessionConfig::command().debug_assert();
    }
}
