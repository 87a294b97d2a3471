use miette::Diagnostic;
use thiserror::Error;

/// Main error type for abstro operations
#[derive(Error, Diagnostic, Debug)]
pub enum AbstroError {
    #[error("IO error: {0}")]
    #[diagnostic(code(abstro::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(abstro::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(abstro::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid colour: {message}")]
    #[diagnostic(code(abstro::colour))]
    Colour {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, AbstroError>;
