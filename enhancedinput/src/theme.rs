//! # Themes
//!
//! A [`Theme`] decides how a prompt is decorated before it is shown to the
//! user. It wraps the prompt text between a prefix and a suffix and lists the
//! validator hints in parentheses right after the text.
//!
//! Two stock themes exist:
//! - [`Theme::default`]: no decoration, the prompt ends with `": "`.
//! - [`Theme::fancy`]: cyan prompt, then a bold white `> ` marker on its own line.
//!
//! ## Example
//! ```rust
//! use enhancedinput::Theme;
//!
//! let theme = Theme::default();
//! assert_eq!(theme.format("Age", &["integer", "1 - 120"]), "Age (integer, 1 - 120): ");
//! ```
//!
//! With the `serde` feature a theme can also be loaded from JSON:
//! ```rust,ignore
//! let theme = Theme::from_json(r#"{ "prefix": "» ", "suffix": " ? " }"#)?;
//! ```
use crate::colors;

/// Prefix/suffix decoration applied around a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    #[cfg_attr(feature = "serde", serde(default))]
    pub prefix: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub suffix: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new("", ": ")
    }
}

impl Theme {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Theme {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Cyan prompt followed by a bold white `> ` marker on the next line.
    pub fn fancy() -> Self {
        Theme::new(
            colors::CYAN,
            format!("{}\n{}{}> ", colors::END, colors::BOLD, colors::LIGHT_WHITE),
        )
    }

    /// Looks up a stock theme by name (`"default"` or `"fancy"`).
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Theme::default()),
            "fancy" => Some(Theme::fancy()),
            _ => None,
        }
    }

    /// Renders `prefix + text + " (" + hints + ")" + suffix`.
    ///
    /// The parenthesized hint list is always present, even when empty.
    pub fn format<S: AsRef<str>>(&self, text: &str, hints: &[S]) -> String {
        let hints = hints
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(", ");

        format!("{}{} ({}){}", self.prefix, text, hints, self.suffix)
    }

    /// Parses a theme from a JSON object with optional `prefix`/`suffix` keys.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, crate::ConfigError> {
        serde_json::from_str(json).map_err(|e| crate::ConfigError::Theme(e.to_string()))
    }
}
