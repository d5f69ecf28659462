//! # Prompt Engine
//!
//! Renders a prompt with a [`Theme`](crate::Theme), reads one line, converts
//! it and runs the validators. Invalid input is answered with a red
//! `Invalid input` line and the prompt is shown again; only a closed input
//! stream or an I/O failure ends the call without a value.
//!
//! - [`EnhancedInput`]: blocking, over `std::io` (always available).
//! - `AsyncEnhancedInput`: async, over tokio (`tokio-dep` feature).

mod attempt;

mod blocking;
pub use blocking::{EnhancedInput, LineSource};

cfg_if::cfg_if! {
    if #[cfg(feature = "tokio-dep")] {
        mod nonblocking;
        pub use nonblocking::AsyncEnhancedInput;
    }
}
