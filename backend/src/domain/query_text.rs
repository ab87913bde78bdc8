//! Whitespace normalisation for raw query text.
//!
//! Queries assembled from multi-line string literals often carry newlines,
//! tabs and indentation runs that some drivers reject or log badly. The
//! helpers here collapse every run of query whitespace to a single ASCII
//! space and strip the ends.
//!
//! The whitespace class is fixed to the six ASCII control/space characters
//! listed on [`is_query_whitespace`]. Unicode spaces such as U+00A0 or
//! U+2028 are left untouched.
//!
//! This is not a sanitiser. It has no notion of quoting, so whitespace inside
//! string literals is collapsed too, and it must never stand in for bound
//! parameters.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

static WHITESPACE_RUN_RE: OnceLock<Regex> = OnceLock::new();

fn whitespace_run_regex() -> &'static Regex {
    WHITESPACE_RUN_RE.get_or_init(|| {
        // Keep in sync with `is_query_whitespace`.
        let pattern = r"[ \t\n\x0B\x0C\r]+";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("query whitespace regex failed to compile: {error}"))
    })
}

/// Whether `c` belongs to the query whitespace class.
///
/// The class is space, horizontal tab, line feed, vertical tab, form feed and
/// carriage return.
#[must_use]
pub const fn is_query_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Collapse whitespace runs in `input` to single spaces and trim the ends.
///
/// Total over all strings and free of side effects.
///
/// # Examples
/// ```
/// use backend::domain::normalize_query_text;
///
/// let sql = "SELECT *\n  FROM table\n WHERE id = 1";
/// assert_eq!(normalize_query_text(sql), "SELECT * FROM table WHERE id = 1");
/// assert_eq!(normalize_query_text(" \n\t "), "");
/// ```
#[must_use]
pub fn normalize_query_text(input: &str) -> String {
    let collapsed = whitespace_run_regex().replace_all(input, " ");
    collapsed.trim_matches(' ').to_owned()
}

/// Query text whose whitespace has been normalised.
///
/// ## Invariants
/// - No leading or trailing query whitespace.
/// - No two consecutive query whitespace characters.
/// - Every whitespace character is an ASCII space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    /// Normalise `raw` and wrap the result.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(normalize_query_text(raw))
    }

    /// Borrow the normalised text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// True when the input held nothing but whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take ownership of the normalised text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedQuery {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NormalizedQuery> for String {
    fn from(value: NormalizedQuery) -> Self {
        value.0
    }
}

impl From<&str> for NormalizedQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
