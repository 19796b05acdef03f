//! Collapse a script onto a single line.

use regex::Regex;
use std::sync::OnceLock;

static WHITESPACE_RUN_RE: OnceLock<Regex> = OnceLock::new();

fn whitespace_run_re() -> &'static Regex {
    WHITESPACE_RUN_RE.get_or_init(|| {
        // SAFETY: constant pattern, never fails to compile.
        Regex::new(r"\s+").expect("whitespace regex is valid")
    })
}

/// Flatten a script to one line.
///
/// Newlines become spaces, carriage returns are dropped without replacement,
/// every run of whitespace becomes a single space, and the result is trimmed.
/// Flattening an already flat string returns it unchanged.
///
/// # Examples
///
/// ```
/// use bookmarkletize::transform::flatten;
///
/// assert_eq!(flatten("var x    =  5;\r\n\tvar y = 10;\n"), "var x = 5; var y = 10;");
/// assert_eq!(flatten(" \n\t "), "");
/// ```
pub fn flatten(source: &str) -> String {
    let single_line = source.replace('\n', " ").replace('\r', "");
    let collapsed = whitespace_run_re().replace_all(&single_line, " ");
    collapsed.trim().to_string()
}
