//! Error handling for the JVIS scaffolder.
//! Defines custom error types and results used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for JVIS operations.
///
/// `DiscoveryError` and `MissingSourceFile` are logged and skipped by the
/// registry and the materializer respectively. Everything else aborts the
/// current operation.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// File system error tied to a specific path
    #[error("IO error at '{}': {source}.", path.display())]
    IoErrorAt {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal failure
    #[error("Walk error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// A stack manifest could not be turned into a descriptor
    #[error("Invalid stack manifest '{}': {reason}.", path.display())]
    DiscoveryError { path: PathBuf, reason: String },

    /// A stack manifest could not be loaded for scaffolding
    #[error("Manifest error in '{}': {reason}.", path.display())]
    ManifestError { path: PathBuf, reason: String },

    /// Template source is malformed. Bundled data is broken; never recovered.
    #[error("Template syntax error in '{}': {source}", path.display())]
    TemplateSyntaxError {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    /// Template evaluation failed for a reason other than syntax
    #[error("Template render error in '{}': {source}", path.display())]
    TemplateRenderError {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    /// A manifest entry points at a file missing from the stack bundle
    #[error("Template file not found: '{}'.", path.display())]
    MissingSourceFile { path: PathBuf },

    /// No stack is registered under the requested id
    #[error("Unknown stack '{id}'. Available: {available}.")]
    UnknownStack { id: String, available: String },

    /// Represents validation failures in user input
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results with `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an `io::Error` with the path it happened on.
    pub fn io_at<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::IoErrorAt {
            path: path.into(),
            source,
        }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
