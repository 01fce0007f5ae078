use std::sync::{LazyLock, Mutex, PoisonError};

use regex::Regex;
use tracing::debug;

use super::hooks::Hooks;

// Must start with an alphanumeric, so "..", "/x" and "x/y" never match.
static VALID_FILENAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+[a-zA-Z_0-9.-]*$").unwrap());

/// Returns true if `name` can be used as a file name without escaping its directory.
///
/// # Examples
///
/// ```
/// use langpack::core::is_valid_filename;
///
/// assert!(is_valid_filename("en"));
/// assert!(is_valid_filename("zh-tw"));
/// assert!(!is_valid_filename("../en"));
/// assert!(!is_valid_filename(".."));
/// assert!(!is_valid_filename(""));
/// ```
pub fn is_valid_filename(name: &str) -> bool {
    VALID_FILENAME_REGEX.is_match(name)
}

/// Memoized language resolution for one execution context.
///
/// The first call to [`resolve`](Self::resolve) seeds the language with the
/// request hint, lets every registered [`LanguageOverride`](super::LanguageOverride)
/// adjust it, and caches the result. Later calls return the cached value
/// until [`reset`](Self::reset).
#[derive(Debug, Default)]
pub struct LanguageResolver {
    cached: Mutex<Option<String>>,
}

impl LanguageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hooks run without the cache lock held, so they may call back into the
    /// resolver. If two callers race, the first stored result wins.
    pub fn resolve(&self, request_hint: &str, hooks: &Hooks) -> String {
        if let Some(language) = self.resolved() {
            return language;
        }

        let mut language = request_hint.to_string();
        hooks.override_language(&mut language);

        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        let language = cached.get_or_insert(language).clone();
        debug!(hint = request_hint, language = %language, "resolved language");
        language
    }

    /// The cached language, if resolution already happened.
    pub fn resolved(&self) -> Option<String> {
        self.cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forgets the cached language so the next `resolve` runs the hooks again.
    pub fn reset(&self) {
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
