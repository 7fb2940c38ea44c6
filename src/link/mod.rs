//! Link detection for the toolbar's Link action.
//!
//! The toolbar takes detection as an injected [`LinkDetector`] so hosts and
//! tests can swap in their own matcher. The default is a regex over URLs,
//! `www.` hosts, `mailto:` addresses and bare domains with common TLDs.

use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;

/// Returns `true` when the given text contains a link.
pub type LinkDetector = Rc<dyn Fn(&str) -> bool>;

const URL_PATTERN: &str = concat!(
    r"(?i)\b(?:",
    r"(?:https?|ftp)://[^\s<>\x22]+",
    r"|mailto:[^\s<>\x22@]+@[^\s<>\x22]+",
    r"|www\.[a-z0-9-]+(?:\.[a-z0-9-]+)+[^\s<>\x22]*",
    r"|[a-z0-9-]+(?:\.[a-z0-9-]+)*\.(?:com|org|net|io|dev|edu|gov|app|rs)\b(?:/[^\s<>\x22]*)?",
    r")"
);

static URL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(URL_PATTERN));

/// Default detection over the built-in URL pattern.
///
/// A matcher that failed to build detects nothing.
pub fn contains_link(text: &str) -> bool {
    match URL_RE.as_ref() {
        Ok(re) => re.is_match(text),
        Err(err) => {
            tracing::warn!("link matcher unavailable, treating selection as plain text: {err}");
            false
        }
    }
}

/// The built-in detector.
pub fn default_detector() -> LinkDetector {
    Rc::new(contains_link)
}

/// A detector that never finds a link.
pub fn never_detector() -> LinkDetector {
    Rc::new(|_: &str| false)
}

/// Build a detector from a user-supplied pattern.
///
/// # Errors
///
/// Returns the regex compile error when `pattern` is not a valid regex.
pub fn detector_from_pattern(pattern: &str) -> Result<LinkDetector, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(Rc::new(move |text: &str| re.is_match(text)))
}
