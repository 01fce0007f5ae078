//! Applies the catalog's `General.Locale` entry to the host.
//!
//! Application is best effort: when no candidate is accepted the load
//! still succeeds and the previous locale stays active.

use std::sync::{LazyLock, Mutex, PoisonError};

use regex::Regex;
use tracing::{debug, warn};

use super::Catalog;

/// Encoding spelling in catalog entries and the alternative some hosts expect.
const ENCODING_SPELLING: &str = "UTF-8";
const ENCODING_VARIANT: &str = "UTF8";

static POSIX_LOCALE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(C|POSIX|[a-zA-Z]{2,3}(_[a-zA-Z]{2})?(\.[a-zA-Z0-9-]+)?(@[a-zA-Z0-9]+)?)$")
        .unwrap()
});

/// Receives candidate locale names, in preference order.
pub trait LocaleSink: Send + Sync {
    /// Returns the candidate that was accepted, if any.
    fn apply(&self, candidates: &[&str]) -> Option<String>;

    /// The locale currently in effect, for sinks that track it.
    fn active(&self) -> Option<String> {
        None
    }
}

/// In-process record of the active locale.
///
/// Accepts any candidate shaped like a POSIX locale name
/// (`language[_territory][.codeset][@modifier]`).
#[derive(Debug, Default)]
pub struct HostLocale {
    active: Mutex<Option<String>>,
}

impl HostLocale {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocaleSink for HostLocale {
    fn apply(&self, candidates: &[&str]) -> Option<String> {
        let accepted = candidates
            .iter()
            .find(|candidate| POSIX_LOCALE_REGEX.is_match(candidate))?;
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = Some(accepted.to_string());
        Some(accepted.to_string())
    }

    fn active(&self) -> Option<String> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// The primary locale and its alternate-encoding spelling.
pub fn locale_candidates(locale: &str) -> (String, String) {
    (
        locale.to_string(),
        locale.replace(ENCODING_SPELLING, ENCODING_VARIANT),
    )
}

/// Reads `General.Locale` from `catalog` and offers it to `sink`.
///
/// Returns the accepted locale. A missing entry or a rejection is logged,
/// never reported as an error.
pub fn apply_catalog_locale(catalog: &Catalog, sink: &dyn LocaleSink) -> Option<String> {
    let Some(locale) = catalog.locale() else {
        debug!("catalog has no General.Locale entry");
        return None;
    };

    let (primary, variant) = locale_candidates(locale);
    match sink.apply(&[primary.as_str(), variant.as_str()]) {
        Some(accepted) => {
            debug!(locale = %accepted, "applied locale");
            Some(accepted)
        }
        None => {
            warn!(locale = %primary, variant = %variant, "host rejected locale");
            None
        }
    }
}
