//! Test assertion helpers for bookmarklet output

/// Assert the output contract every bookmarklet must satisfy
///
/// - starts with `javascript:(function(){` and ends with `})();`
/// - contains no newline or carriage return
/// - contains no double space unless the payload is empty
#[allow(dead_code)]
pub fn assert_well_formed_bookmarklet(bookmarklet: &str) {
    assert!(
        bookmarklet.starts_with("javascript:(function(){"),
        "bad prefix: {:?}",
        bookmarklet
    );
    assert!(bookmarklet.ends_with("})();"), "bad suffix: {:?}", bookmarklet);
    assert!(
        !bookmarklet.contains('\n') && !bookmarklet.contains('\r'),
        "bookmarklet spans lines: {:?}",
        bookmarklet
    );
    if bookmarklet != "javascript:(function(){  })();" {
        assert!(
            !bookmarklet.contains("  "),
            "bookmarklet has a double space: {:?}",
            bookmarklet
        );
    }
}
