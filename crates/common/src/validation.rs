//! Pattern-based validators.
//!
//! Each validator is a pure predicate: malformed input yields `false`, never
//! an error. The patterns are intentionally permissive and must not be
//! tightened; callers depend on exactly what they accept.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

// Browser whitespace set spelled out: it includes U+FEFF and leaves out
// U+0085, unlike the `regex` crate's Unicode `\s`.
const BROWSER_WS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^[^{BROWSER_WS}@]+@[^{BROWSER_WS}@]+\.[^{BROWSER_WS}]+$"
    ))
    .expect("valid regex")
});

// `\w` is ASCII-only here, matching the classic browser pattern.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/A-Za-z0-9_ .-]*)*/?$")
        .expect("valid regex")
});

// Whole input on a single line.
static PASSWORD_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\n\r\x{2028}\x{2029}]*$").expect("valid regex"));

const MIN_PASSWORD_UNITS: usize = 8;

/// Loose email check: `local@domain.tld` with no whitespace and a single `@`
/// on each side of the split.
///
/// ```
/// use utilbelt_common::is_valid_email;
///
/// assert!(is_valid_email("a@b.co"));
/// assert!(!is_valid_email("a@b"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Optional `http`/`https` scheme, a lowercase dotted host whose last label
/// is 2-6 letters, and an optional path.
pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

/// At least eight UTF-16 code units on a single line, with one ASCII digit,
/// one lowercase and one uppercase ASCII letter.
///
/// Length is measured in UTF-16 units, so a character outside the Basic
/// Multilingual Plane counts twice. The `regex` crate has no lookahead, so
/// the character-class requirements are checked separately from the shape.
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_SHAPE_RE.is_match(password)
        && password.encode_utf16().count() >= MIN_PASSWORD_UNITS
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
}

/// Numeric types that can report whether they hold a positive whole number.
pub trait WholeNumber: Copy {
    /// True iff the value is a whole number strictly greater than zero.
    fn is_positive_whole(self) -> bool;
}

macro_rules! impl_whole_number_signed {
    ($($t:ty),*) => {
        $(impl WholeNumber for $t {
            fn is_positive_whole(self) -> bool {
                self > 0
            }
        })*
    };
}

macro_rules! impl_whole_number_unsigned {
    ($($t:ty),*) => {
        $(impl WholeNumber for $t {
            fn is_positive_whole(self) -> bool {
                self != 0
            }
        })*
    };
}

impl_whole_number_signed!(i8, i16, i32, i64, i128, isize);
impl_whole_number_unsigned!(u8, u16, u32, u64, u128, usize);

impl WholeNumber for f64 {
    fn is_positive_whole(self) -> bool {
        self.is_finite() && self.fract() == 0.0 && self > 0.0
    }
}

impl WholeNumber for f32 {
    fn is_positive_whole(self) -> bool {
        f64::from(self).is_positive_whole()
    }
}

/// True iff `value` is a whole number strictly greater than zero.
///
/// ```
/// use utilbelt_common::is_positive_integer;
///
/// assert!(is_positive_integer(5));
/// assert!(is_positive_integer(5.0));
/// assert!(!is_positive_integer(0));
/// assert!(!is_positive_integer(-3));
/// assert!(!is_positive_integer(2.5));
/// ```
pub fn is_positive_integer<N: WholeNumber>(value: N) -> bool {
    value.is_positive_whole()
}

/// [`is_positive_integer`] over dynamically typed input.
///
/// Anything that is not a JSON number (strings, booleans, null, arrays,
/// objects) is rejected rather than coerced.
pub fn is_positive_integer_value(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u.is_positive_whole()
            } else if let Some(i) = n.as_i64() {
                i.is_positive_whole()
            } else {
                n.as_f64().is_some_and(WholeNumber::is_positive_whole)
            }
        }
        _ => false,
    }
}
