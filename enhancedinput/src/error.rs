//! Error types.
//!
//! Bad input typed by the user is never an error: the prompt engine absorbs it
//! and asks again. What reaches the caller is either a closed input stream, an
//! I/O failure, or a validator/theme that was configured wrong.
use std::io;
use thiserror::Error;

/// Failure of a prompt call.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The input stream reached end-of-file before a valid value was entered.
    #[error("Input stream closed before a valid value was entered")]
    InputClosed,

    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
}

/// Invalid configuration detected while building a validator or a theme.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `min` is greater than `max` (or one of the bounds is not comparable).
    #[error("Invalid bounds: minimum {min} is greater than maximum {max}")]
    InvertedBounds { min: String, max: String },

    /// A theme description could not be parsed.
    #[error("Invalid theme: {0}")]
    Theme(String),
}
