//! # Errors
//!
//! [`AppError`] covers the few conditions that stop a documentation run:
//! an input that cannot be parsed, or an artifact that cannot be written.
//! Everything else (malformed fields, dead references, backend failures)
//! degrades to defaults and never becomes an `AppError`.

use derive_more::{Display, From};

/// Fatal error of a documentation run.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Writing an intermediate or final artifact failed.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The specification document or the Python test suite is unusable.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// Anything else, e.g. the Python grammar failing to load.
    #[display("General Error: {_0}")]
    General(String),
}

impl std::error::Error for AppError {}

/// Result alias used across the core crate.
pub type AppResult<T> = Result<T, AppError>;
