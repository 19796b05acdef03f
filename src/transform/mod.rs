//! The bookmarklet text pipeline
//!
//! `transform` runs three pure stages in order:
//! 1. [`strip_comments`] removes `//` and `/* */` comments
//! 2. [`flatten`] collapses the script onto one line
//! 3. [`Bookmarklet::wrap`] frames it as `javascript:(function(){ ... })();`
//!
//! None of the stages can fail. They hold no state beyond cached, immutable
//! regexes, so they are safe to call from several threads at once.

pub mod flatten;
pub mod strip;
pub mod wrap;

pub use flatten::flatten;
pub use strip::strip_comments;
pub use wrap::{Bookmarklet, SCHEME_PREFIX};

/// Convert a script into a bookmarklet
///
/// # Examples
///
/// ```
/// use bookmarkletize::transform::transform;
///
/// let src = "// say hi\nfunction greet(name) {\n    return \"Hello, \" + name; /* friendly */\n}\ngreet(\"World\");\n";
/// let bm = transform(src);
///
/// assert_eq!(
///     bm.to_string(),
///     "javascript:(function(){ function greet(name) { return \"Hello, \" + name; } greet(\"World\"); })();"
/// );
/// ```
pub fn transform(source: &str) -> Bookmarklet {
    let stripped = strip_comments(source);
    let payload = flatten(&stripped);
    log::debug!(
        "flattened payload: {} bytes from {} bytes of source",
        payload.len(),
        source.len()
    );
    Bookmarklet::wrap(payload)
}
