//! Merge several scripts into one bookmarklet body
//!
//! Standalone scripts usually end with a call that kicks off their own
//! behaviour (for example `downloadGemini();`). When scrapers are bundled
//! under a driver script that call has to go, otherwise the combined
//! bookmarklet would fire every scraper's standalone action. The composer
//! strips those calls and concatenates the bodies in the order given.
//!
//! Ordering is entirely the caller's: later scripts may use functions defined
//! by earlier ones, and no dependency analysis is done here.

/// Raw text of one source script plus the entry call to drop when composing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceScript {
    /// Script text as read from disk
    pub text: String,
    /// Literal self-invoking call to remove, e.g. `downloadAim();`
    pub entry_call: Option<String>,
}

impl SourceScript {
    /// Script that is kept whole (typically the driver)
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entry_call: None,
        }
    }

    /// Script whose `entry_call` is removed during composition
    pub fn with_entry_call(text: impl Into<String>, entry_call: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entry_call: Some(entry_call.into()),
        }
    }

    /// Script text with every occurrence of the entry call removed, trimmed
    ///
    /// Removal repeats until no occurrence is left, so deleting one copy can
    /// never splice together a new one.
    pub fn body(&self) -> String {
        let Some(call) = self.entry_call.as_deref().filter(|c| !c.is_empty()) else {
            return self.text.trim().to_string();
        };

        let mut text = self.text.clone();
        while text.contains(call) {
            text = text.replace(call, "");
        }
        text.trim().to_string()
    }
}

/// Separator placed between composed scripts
pub const SCRIPT_SEPARATOR: &str = "\n\n";

/// Concatenate scripts in order after removing each one's entry call
///
/// The result keeps each script's internal newlines; flattening happens later
/// in [`crate::transform::transform`].
///
/// # Examples
///
/// ```
/// use bookmarkletize::compose::{compose, SourceScript};
///
/// let scraper = SourceScript::with_entry_call(
///     "function scrape() { return 1; }\nscrape();\n",
///     "scrape();",
/// );
/// let driver = SourceScript::new("console.log(scrape());");
///
/// assert_eq!(
///     compose(&[scraper, driver]),
///     "function scrape() { return 1; }\n\nconsole.log(scrape());"
/// );
/// ```
pub fn compose(scripts: &[SourceScript]) -> String {
    let bodies: Vec<String> = scripts.iter().map(SourceScript::body).collect();
    log::debug!(
        "composed {} scripts into {} bytes",
        scripts.len(),
        bodies.iter().map(String::len).sum::<usize>()
    );
    bodies.join(SCRIPT_SEPARATOR)
}
