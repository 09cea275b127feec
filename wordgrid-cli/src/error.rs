//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::io;
use std::process;
use wordgrid::codec::{CodecError, WordTupleParseError};
use wordgrid::config::{config_file_path, ConfigFileError};
use wordgrid::converter::protocol::ErrorPayload;
use wordgrid::converter::{ConfigError, ConvertError, ErrorKind};
use wordgrid::grid::GridError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file error
    Config(ConfigFileError),
    /// Failed to build the converter from configuration
    Setup(ConfigError),
    /// The address argument could not be parsed
    InvalidAddress(WordTupleParseError),
    /// A conversion failed
    Conversion(ConvertError),
    /// A JSON request failed; the payload has already been printed
    Request(ErrorPayload),
    /// Failed to read input or write output
    Io(io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Setup(ConfigError::Codec(CodecError::InsufficientCapacity { .. })) => {
                eprintln!();
                eprintln!("The vocabulary is too small for the region. Either:");
                eprintln!("  1. Raise [vocabulary] generated_size");
                eprintln!("  2. Point [vocabulary] path at a longer word list");
                eprintln!("  3. Increase [region] cell_size_meters");
                eprintln!();
                eprintln!("Config file: {}", config_file_path().display());
            }
            CliError::Setup(_) | CliError::Config(_) => {
                eprintln!();
                eprintln!("Config file: {}", config_file_path().display());
                eprintln!("Run 'wordgrid config show' to see the effective settings.");
            }
            CliError::Conversion(ConvertError::Grid(GridError::OutOfBounds { .. })) => {
                eprintln!();
                eprintln!("Run 'wordgrid info' to see the region bounds.");
            }
            CliError::InvalidAddress(_) => {
                eprintln!();
                eprintln!("Addresses look like 'word.word.word' or 'word word word'.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Setup(e) => write!(f, "Cannot start: {}", e),
            CliError::InvalidAddress(e) => write!(f, "Invalid address: {}", e),
            CliError::Conversion(e) if e.kind() == ErrorKind::Internal => {
                write!(f, "The address could not be computed (internal error, see the log file)")
            }
            CliError::Conversion(e) => write!(f, "{}", e),
            CliError::Request(payload) => write!(f, "{} ({})", payload.message, payload.error),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Setup(e) => Some(e),
            CliError::InvalidAddress(e) => Some(e),
            CliError::Conversion(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Setup(e)
    }
}

impl From<ConvertError> for CliError {
    /// Internal failures are logged in full; the user sees a generic message.
    fn from(e: ConvertError) -> Self {
        if e.kind() == ErrorKind::Internal {
            tracing::error!(error = %e, "Internal conversion failure");
        }
        CliError::Conversion(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let err = CliError::LoggingInit("denied".to_string());
        assert_eq!(err.to_string(), "Failed to initialize logging: denied");

        let err = CliError::Conversion(ConvertError::UnknownWords {
            words: vec!["zulu".to_string()],
        });
        assert_eq!(err.to_string(), "Unknown words: zulu");

        let err = CliError::Request(ErrorPayload::new("out_of_bounds", "outside"));
        assert_eq!(err.to_string(), "outside (out_of_bounds)");
    }

    #[test]
    fn test_internal_conversion_error_is_generic() {
        let err = CliError::from(ConvertError::Codec(CodecError::Overflow {
            index: 500,
            radix: 5,
        }));
        let message = err.to_string();
        assert!(message.contains("could not be computed"));
        assert!(!message.contains("500"));
    }

    #[test]
    fn test_input_conversion_error_is_verbatim() {
        let err = CliError::from(ConvertError::UnknownWords {
            words: vec!["zulu".to_string()],
        });
        assert_eq!(err.to_string(), "Unknown words: zulu");
    }

    #[test]
    fn test_source_chain() {
        let err = CliError::from(io::Error::other("closed"));
        assert!(err.source().is_some());

        let err = CliError::LoggingInit("denied".to_string());
        assert!(err.source().is_none());
    }
}
