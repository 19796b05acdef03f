//! Comment removal for bookmarklet sources.
//!
//! This is a line/pattern heuristic, not a lexer. It handles the comment
//! styles found in hand-written automation scripts:
//! - whole lines starting with `//`
//! - trailing `//` comments, unless the `//` follows a `:` (as in `https://`)
//! - `/* ... */` blocks, closed by the first `*/` (no nesting)
//!
//! # Known limitations
//!
//! A `//` inside a string literal (not after a colon), a `/*` inside a string
//! or regex literal, and `//` inside template literals can all be mistaken for
//! comment starts. Keep such patterns out of comment-adjacent positions in
//! source scripts.

use regex::Regex;
use std::sync::OnceLock;

/// Compiled regex patterns for comment stripping (cached for performance)
static FULL_LINE_COMMENT_RE: OnceLock<Regex> = OnceLock::new();
static INLINE_COMMENT_RE: OnceLock<Regex> = OnceLock::new();
static BLOCK_COMMENT_RE: OnceLock<Regex> = OnceLock::new();

fn full_line_comment_re() -> &'static Regex {
    FULL_LINE_COMMENT_RE.get_or_init(|| {
        // SAFETY: constant pattern, never fails to compile.
        Regex::new(r"(?m)^\s*//.*$").expect("full-line comment regex is valid")
    })
}

fn inline_comment_re() -> &'static Regex {
    // No look-behind in `regex`: capture the character before `//` and put it back.
    INLINE_COMMENT_RE.get_or_init(|| {
        // SAFETY: constant pattern, never fails to compile.
        Regex::new(r"(?m)(^|[^:\n])//.*$").expect("inline comment regex is valid")
    })
}

fn block_comment_re() -> &'static Regex {
    BLOCK_COMMENT_RE.get_or_init(|| {
        // SAFETY: constant pattern, never fails to compile.
        Regex::new(r"(?s)/\*.*?\*/").expect("block comment regex is valid")
    })
}

/// Remove line and block comments from a script.
///
/// Line structure is otherwise kept; lines that held only a comment become
/// empty.
///
/// # Examples
///
/// ```
/// use bookmarkletize::transform::strip_comments;
///
/// let src = "// header\nvar u = \"https://example.com\"; // trailing\n/* block */var x = 1;";
/// let out = strip_comments(src);
///
/// assert!(!out.contains("header"));
/// assert!(!out.contains("trailing"));
/// assert!(!out.contains("block"));
/// assert!(out.contains("https://example.com"));
/// assert!(out.contains("var x = 1;"));
/// ```
pub fn strip_comments(source: &str) -> String {
    let without_full_lines = full_line_comment_re().replace_all(source, "");
    let without_inline = inline_comment_re().replace_all(&without_full_lines, "${1}");
    let stripped = block_comment_re().replace_all(&without_inline, "");

    log::debug!(
        "stripped comments: {} -> {} bytes",
        source.len(),
        stripped.len()
    );

    stripped.into_owned()
}
