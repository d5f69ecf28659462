//! # enhancedinput
//!
//! Themed, validated interactive line input for command-line programs.
//!
//! Ask a question, decorate it with a [`Theme`], and keep asking until the
//! answer passes every [`Validator`] you supplied (and, optionally, converts
//! into the type you need).
//!
//! ## Features
//!
//! (Always available)
//! - **Prompt engine** - [`EnhancedInput`], a blocking read/validate/re-prompt loop
//! - **Validators** - blank, boolean, integer, float, email, URL, numeric range, length
//! - **Themes** - plain `Name (hints): ` prompts or the colored "fancy" layout
//! - **Colors** - ANSI escape constants in [`colors`]
//!
//! ("serde" feature)
//! - **Theme files** - load a [`Theme`] from JSON
//!
//! ("tokio-dep" feature)
//! - **Async prompt engine** - `AsyncEnhancedInput` over tokio's I/O traits
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use enhancedinput::{EnhancedInput, LengthValidator, Theme};
//!
//! let mut input = EnhancedInput::new(Theme::fancy());
//! let length = LengthValidator::new(1, Some(20))?;
//!
//! let name = input.get("What is your name?", &[&length])?;
//! println!("Hello, {name}!");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Typed input
//!
//! ```rust,no_run
//! use enhancedinput::{EnhancedInput, IntRange};
//!
//! let mut input = EnhancedInput::default();
//! let age: u8 = input.get_as("Age", &[&IntRange::new(1, 120)?])?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Invalid answers never reach the caller; they are answered with a red
//! `Invalid input` line and the question is asked again. What does reach the
//! caller:
//! - [`PromptError::InputClosed`] when stdin hits end-of-file,
//! - [`PromptError::Io`] when reading or writing fails,
//! - [`ConfigError`] when a validator is built with `min > max`.
//!
//! ## Logging
//!
//! Prompts, rejected attempts and closed input are reported through the
//! [`log`](https://docs.rs/log) facade. Nothing is printed unless the host
//! installs a logger.

pub mod colors;

pub mod error;
pub use error::{ConfigError, PromptError};

pub mod input;
pub use input::{EnhancedInput, LineSource};

pub mod theme;
pub use theme::Theme;

pub mod validator;
pub use validator::{
    BlankValidator, BooleanValidator, EmailValidator, FloatRange, FloatValidator, IntRange,
    IntValidator, LengthValidator, RangeBound, RangeValidator, UrlValidator, Validator,
};

cfg_if::cfg_if! {
    if #[cfg(feature = "tokio-dep")] {
        pub use input::AsyncEnhancedInput;
    }
}
