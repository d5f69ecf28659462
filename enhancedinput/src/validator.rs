//! # Validators
//!
//! A [`Validator`] decides whether a raw line typed by the user is acceptable.
//! The prompt engine runs them in order and short-circuits on the first
//! rejection, asking the user again.
//!
//! Each validator may also carry a short hint (`"integer"`, `"1 - 10"`, ...)
//! which themes render next to the prompt so the user knows what is expected
//! before typing anything.
//!
//! ## Catalog
//! - [`BlankValidator`]: accepts anything, no hint.
//! - [`BooleanValidator`]: `true/false/1/0/yes/no/y/n/t/f`, any case.
//! - [`IntValidator`] / [`FloatValidator`]: parses as `i64` / `f64`.
//! - [`EmailValidator`]: `user@domain.tld` shape.
//! - [`UrlValidator`]: absolute URL with a scheme and a host.
//! - [`RangeValidator`]: numeric value within an inclusive range.
//! - [`LengthValidator`]: character count within an inclusive range.
//!
//! ## Custom validators
//! ```rust
//! use enhancedinput::Validator;
//!
//! struct NoSpaces;
//!
//! impl Validator for NoSpaces {
//!     fn valid(&self, value: &str) -> bool {
//!         !value.contains(' ')
//!     }
//!
//!     fn hint(&self) -> Option<&str> {
//!         Some("no spaces")
//!     }
//! }
//!
//! assert!(NoSpaces.valid("rust"));
//! ```
use crate::error::ConfigError;
use regex::Regex;
use std::{cmp::Ordering, fmt::Display, str::FromStr, sync::LazyLock};
use url::Url;

/// A predicate over raw user input, with an optional hint describing the
/// expected shape of the input.
///
/// Validators must be `Send + Sync`: async prompts hold them across `.await`
/// and may run on spawned tasks.
pub trait Validator: Send + Sync {
    fn valid(&self, value: &str) -> bool;

    /// Text shown in the prompt. `None` contributes nothing.
    fn hint(&self) -> Option<&str> {
        None
    }
}

/// Evaluates to `true` when `$input` parses into `$t`.
macro_rules! parses_as {
    ($input:expr, $t:ty) => {
        $input.parse::<$t>().is_ok()
    };
}

/// Accepts every input.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankValidator;

impl Validator for BlankValidator {
    fn valid(&self, _value: &str) -> bool {
        true
    }
}

const BOOLEAN_TOKENS: [&str; 10] = ["true", "false", "1", "0", "yes", "no", "y", "n", "t", "f"];

/// Accepts the usual yes/no spellings, case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanValidator;

impl Validator for BooleanValidator {
    fn valid(&self, value: &str) -> bool {
        BOOLEAN_TOKENS.contains(&value.to_lowercase().as_str())
    }

    fn hint(&self) -> Option<&str> {
        Some("y/n")
    }
}

/// Accepts base-10 integers with an optional sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntValidator;

impl Validator for IntValidator {
    fn valid(&self, value: &str) -> bool {
        parses_as!(value, i64)
    }

    fn hint(&self) -> Option<&str> {
        Some("integer")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FloatValidator;

impl Validator for FloatValidator {
    fn valid(&self, value: &str) -> bool {
        parses_as!(value, f64)
    }

    fn hint(&self) -> Option<&str> {
        Some("float")
    }
}

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$")
        .expect("email pattern compiles")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl Validator for EmailValidator {
    fn valid(&self, value: &str) -> bool {
        EMAIL_PATTERN.is_match(value)
    }

    fn hint(&self) -> Option<&str> {
        Some("email")
    }
}

/// Accepts absolute URLs that carry both a scheme and a host.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlValidator;

impl Validator for UrlValidator {
    fn valid(&self, value: &str) -> bool {
        match Url::parse(value) {
            Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
            Err(_) => false,
        }
    }

    fn hint(&self) -> Option<&str> {
        Some("url")
    }
}

/// Numeric type usable as a [`RangeValidator`] bound.
///
/// `render` controls how the bounds appear in the hint: integers as-is,
/// floats always with a fractional part (`1.0`) and, past `1e16` or below
/// `1e-4`, in exponent form with a signed two-digit exponent (`1e+16`).
pub trait RangeBound: FromStr + PartialOrd + Copy + Display {
    fn render(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_range_bound {
    ($($t:ty),*) => {
        $(impl RangeBound for $t {})*
    };
}

impl_range_bound!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Shortest round-trip form of a float, with a signed two-digit exponent
/// when one is used (`1e+16`, `2.5e-07`).
fn render_float(repr: String) -> String {
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

impl RangeBound for f32 {
    fn render(&self) -> String {
        render_float(format!("{self:?}"))
    }
}

impl RangeBound for f64 {
    fn render(&self) -> String {
        render_float(format!("{self:?}"))
    }
}

/// Accepts input that parses as `N` and lies within `[min, max]`.
///
/// ```rust
/// use enhancedinput::{IntRange, Validator};
///
/// let age = IntRange::new(1, 120).unwrap();
/// assert_eq!(age.hint(), Some("1 - 120"));
/// assert!(age.valid("42"));
/// assert!(!age.valid("0"));
/// ```
#[derive(Debug, Clone)]
pub struct RangeValidator<N: RangeBound> {
    min: N,
    max: N,
    hint: String,
}

pub type IntRange = RangeValidator<i64>;
pub type FloatRange = RangeValidator<f64>;

impl<N: RangeBound> RangeValidator<N> {
    /// Fails with [`ConfigError::InvertedBounds`] when `min > max` or the
    /// bounds cannot be ordered (NaN).
    pub fn new(min: N, max: N) -> Result<Self, ConfigError> {
        match min.partial_cmp(&max) {
            Some(Ordering::Less | Ordering::Equal) => Ok(RangeValidator {
                min,
                max,
                hint: format!("{} - {}", min.render(), max.render()),
            }),
            _ => Err(ConfigError::InvertedBounds {
                min: min.render(),
                max: max.render(),
            }),
        }
    }

    pub fn min(&self) -> N {
        self.min
    }

    pub fn max(&self) -> N {
        self.max
    }
}

impl<N: RangeBound + Send + Sync> Validator for RangeValidator<N> {
    fn valid(&self, value: &str) -> bool {
        match value.parse::<N>() {
            Ok(n) => self.min <= n && n <= self.max,
            Err(_) => false,
        }
    }

    fn hint(&self) -> Option<&str> {
        Some(&self.hint)
    }
}

/// Accepts input whose character count lies within `[min, max]`; without a
/// `max` there is no upper limit.
#[derive(Debug, Clone)]
pub struct LengthValidator {
    min: usize,
    max: Option<usize>,
    hint: String,
}

impl LengthValidator {
    pub fn new(min: usize, max: Option<usize>) -> Result<Self, ConfigError> {
        let hint = match max {
            Some(max) if min > max => {
                return Err(ConfigError::InvertedBounds {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
            Some(max) => format!("{min} - {max}"),
            None => format!("{min}+"),
        };

        Ok(LengthValidator { min, max, hint })
    }

    /// Length validator with no upper limit. Never fails.
    pub fn at_least(min: usize) -> Self {
        LengthValidator {
            min,
            max: None,
            hint: format!("{min}+"),
        }
    }
}

impl Validator for LengthValidator {
    fn valid(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && self.max.is_none_or(|max| len <= max)
    }

    fn hint(&self) -> Option<&str> {
        Some(&self.hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_accepts_everything() {
        assert!(BlankValidator.valid(""));
        assert!(BlankValidator.valid("anything at all"));
        assert_eq!(BlankValidator.hint(), None);
    }

    #[test]
    fn test_boolean_tokens() {
        for token in ["true", "FALSE", "1", "0", "Yes", "no", "Y", "n", "t", "F"] {
            assert!(BooleanValidator.valid(token), "{token} should be accepted");
        }
        assert!(!BooleanValidator.valid("maybe"));
        assert!(!BooleanValidator.valid(""));
        assert!(!BooleanValidator.valid(" yes"));
        assert_eq!(BooleanValidator.hint(), Some("y/n"));
    }

    #[test]
    fn test_int_matches_integer_parsing() {
        for input in ["0", "-12", "+7", "9223372036854775807", "", "1.5", " 3", "abc", "1e3"] {
            assert_eq!(IntValidator.valid(input), input.parse::<i64>().is_ok());
        }
        assert!(IntValidator.valid("-12"));
        assert!(!IntValidator.valid("12a"));
        assert_eq!(IntValidator.hint(), Some("integer"));
    }

    #[test]
    fn test_float() {
        assert!(FloatValidator.valid("3.14"));
        assert!(FloatValidator.valid("-2"));
        assert!(FloatValidator.valid("1e-3"));
        assert!(!FloatValidator.valid("pi"));
        assert!(!FloatValidator.valid(""));
        assert_eq!(FloatValidator.hint(), Some("float"));
    }

    #[test]
    fn test_email() {
        assert!(EmailValidator.valid("a@b.com"));
        assert!(EmailValidator.valid("first.last+tag@mail-host.co.uk"));
        assert!(!EmailValidator.valid("not-an-email"));
        assert!(!EmailValidator.valid("a@b"));
        assert!(!EmailValidator.valid("a b@c.com"));
        assert!(!EmailValidator.valid("@b.com"));
        assert_eq!(EmailValidator.hint(), Some("email"));
    }

    #[test]
    fn test_url() {
        assert!(UrlValidator.valid("https://example.com"));
        assert!(UrlValidator.valid("ftp://files.example.org/pub"));
        assert!(UrlValidator.valid("http://127.0.0.1:8080/api?q=1"));
        assert!(!UrlValidator.valid("example.com"));
        assert!(!UrlValidator.valid("mailto:someone@example.com"));
        assert!(!UrlValidator.valid(""));
        assert_eq!(UrlValidator.hint(), Some("url"));
    }

    #[test]
    fn test_int_range() {
        let range = IntRange::new(1, 10).unwrap();
        assert!(range.valid("1"));
        assert!(range.valid("10"));
        assert!(range.valid("5"));
        assert!(!range.valid("0"));
        assert!(!range.valid("11"));
        assert!(!range.valid("five"));
        assert!(!range.valid("5.5"));
        assert_eq!(range.hint(), Some("1 - 10"));
        assert_eq!((range.min(), range.max()), (1, 10));
    }

    #[test]
    fn test_float_range() {
        let range = FloatRange::new(0.0, 1.0).unwrap();
        assert!(range.valid("0.5"));
        assert!(range.valid("1"));
        assert!(!range.valid("1.01"));
        assert!(!range.valid("NaN"));
        assert_eq!(range.hint(), Some("0.0 - 1.0"));
    }

    #[test]
    fn test_float_range_exponent_hint() {
        let range = FloatRange::new(0.0, 1e16).unwrap();
        assert_eq!(range.hint(), Some("0.0 - 1e+16"));

        let range = FloatRange::new(1e-5, 2.5e300).unwrap();
        assert_eq!(range.hint(), Some("1e-05 - 2.5e+300"));

        let range = FloatRange::new(0.0001, 1e15).unwrap();
        assert_eq!(range.hint(), Some("0.0001 - 1000000000000000.0"));

        let range = FloatRange::new(f64::NEG_INFINITY, -1.5e-7).unwrap();
        assert_eq!(range.hint(), Some("-inf - -1.5e-07"));
    }

    #[test]
    fn test_validators_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Validator>();
        assert_send_sync::<[&dyn Validator]>();
    }

    #[test]
    fn test_range_single_point() {
        let range = RangeValidator::<u8>::new(7, 7).unwrap();
        assert!(range.valid("7"));
        assert!(!range.valid("8"));
        assert!(!range.valid("-7"));
    }

    #[test]
    fn test_range_inverted_bounds() {
        let res = IntRange::new(10, 1);
        assert!(matches!(res, Err(ConfigError::InvertedBounds { .. })));

        let res = FloatRange::new(f64::NAN, 1.0);
        assert!(matches!(res, Err(ConfigError::InvertedBounds { .. })));
    }

    #[test]
    fn test_length_bounded() {
        let length = LengthValidator::new(1, Some(20)).unwrap();
        assert!(length.valid("Ada"));
        assert!(!length.valid(""));
        assert!(length.valid(&"x".repeat(20)));
        assert!(!length.valid(&"x".repeat(21)));
        assert_eq!(length.hint(), Some("1 - 20"));
    }

    #[test]
    fn test_length_unbounded() {
        let length = LengthValidator::new(3, None).unwrap();
        for s in ["abc", "abcd", "y".repeat(500).as_str()] {
            assert!(length.valid(s));
        }
        assert!(!length.valid("ab"));
        assert_eq!(length.hint(), Some("3+"));

        let zero = LengthValidator::at_least(0);
        assert!(zero.valid(""));
        assert_eq!(zero.hint(), Some("0+"));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let length = LengthValidator::new(1, Some(3)).unwrap();
        assert!(length.valid("ñåé"));
    }

    #[test]
    fn test_length_inverted_bounds() {
        let res = LengthValidator::new(5, Some(2));
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(
                e.to_string(),
                "Invalid bounds: minimum 5 is greater than maximum 2"
            );
        }
    }
}
