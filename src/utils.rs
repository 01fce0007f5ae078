//! Common utility functions shared across the codebase.

/// Trims surrounding whitespace and decodes HTML entities, quotes included.
///
/// Covers the full HTML5 named-entity table plus decimal and hex references.
/// Unknown named entities are left untouched.
///
/// # Examples
///
/// ```
/// use langpack::utils::clean;
///
/// assert_eq!(clean("  Tom &amp; Jerry "), "Tom & Jerry");
/// assert_eq!(clean("&quot;quoted&#039;"), "\"quoted'");
/// assert_eq!(clean("&#x263A;"), "\u{263A}");
/// assert_eq!(clean("&bogus;"), "&bogus;");
/// ```
pub fn clean(text: &str) -> String {
    html_escape::decode_html_entities(text.trim()).into_owned()
}
