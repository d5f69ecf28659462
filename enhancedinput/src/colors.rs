//! # Colors
//!
//! ANSI escape sequences used to decorate prompts and feedback messages.
//! They are plain string constants: concatenate them around the text you want
//! styled and finish with [`END`] to return the terminal to its default style.
//!
//! ```rust
//! use enhancedinput::colors;
//!
//! let warning = format!("{}careful{}", colors::RED, colors::END);
//! assert!(warning.ends_with("\x1b[0m"));
//! ```

/// Clears every style and color.
pub const END: &str = "\x1b[0m";
/// Same sequence as [`END`].
pub const RESET: &str = END;

pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const LIGHT_WHITE: &str = "\x1b[97m";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_is_sgr_zero() {
        assert_eq!(RESET, "\x1b[0m");
        assert_eq!(END, RESET);
    }

    #[test]
    fn test_codes_are_csi_sequences() {
        for code in [BOLD, UNDERLINE, RED, GREEN, YELLOW, BLUE, MAGENTA, CYAN, LIGHT_WHITE] {
            assert!(code.starts_with("\x1b["));
            assert!(code.ends_with('m'));
        }
    }
}
