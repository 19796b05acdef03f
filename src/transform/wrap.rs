//! IIFE wrapping and the `Bookmarklet` output value.

use std::fmt;

/// URL scheme every bookmarklet starts with
pub const SCHEME_PREFIX: &str = "javascript:";

const IIFE_OPEN: &str = "(function(){ ";
const IIFE_CLOSE: &str = " })();";

/// A finished bookmarklet: a flat payload inside an immediately-invoked function
///
/// The payload runs in its own function scope, so declarations do not leak
/// into the page's globals, and runs as soon as the bookmark is activated.
///
/// # Examples
///
/// ```
/// use bookmarkletize::transform::Bookmarklet;
///
/// let bm = Bookmarklet::wrap("alert(1);");
/// assert_eq!(bm.to_string(), "javascript:(function(){ alert(1); })();");
/// assert_eq!(bm.payload(), "alert(1);");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmarklet {
    payload: String,
}

impl Bookmarklet {
    /// Wrap an already flattened payload. Never fails; an empty payload is fine.
    pub fn wrap(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// The flat script between the IIFE braces
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Whether the wrapped script is empty
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Length in bytes of the rendered bookmarklet
    pub fn len(&self) -> usize {
        SCHEME_PREFIX.len() + IIFE_OPEN.len() + self.payload.len() + IIFE_CLOSE.len()
    }

    /// Render to the string stored in the bookmark's URL field
    pub fn into_url(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Bookmarklet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME_PREFIX}{IIFE_OPEN}{}{IIFE_CLOSE}", self.payload)
    }
}
