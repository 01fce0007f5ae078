use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{
    Catalog, TranslateError, TranslateResult, is_valid_filename,
    locale::{LocaleSink, apply_catalog_locale},
};

/// The catalog together with what has been loaded into it.
#[derive(Debug, Default)]
pub struct CatalogState {
    pub catalog: Catalog,
    /// Language of the last full file load since the catalog was cleared.
    loaded_language: Option<String>,
    /// Every language merged from a file since the catalog was cleared.
    loaded_languages: BTreeSet<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded_language(&self) -> Option<&str> {
        self.loaded_language.as_deref()
    }

    pub fn loaded_languages(&self) -> &BTreeSet<String> {
        &self.loaded_languages
    }
}

/// Reads `<code>.json` artifacts from a language directory and merges them
/// into a [`CatalogState`].
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    lang_root: PathBuf,
    default_language: String,
}

impl CatalogLoader {
    pub fn new(lang_root: impl Into<PathBuf>, default_language: impl Into<String>) -> Self {
        Self {
            lang_root: lang_root.into(),
            default_language: default_language.into(),
        }
    }

    pub fn lang_root(&self) -> &Path {
        &self.lang_root
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Path of the artifact for `code`, after checking the code is a safe file name.
    pub fn language_file(&self, code: &str) -> TranslateResult<PathBuf> {
        if !is_valid_filename(code) {
            return Err(TranslateError::InvalidLanguageCode(code.to_string()));
        }
        Ok(self.lang_root.join(format!("{code}.json")))
    }

    /// Parses the artifact for `code` without touching any state.
    pub fn read_language_file(&self, code: &str) -> TranslateResult<Catalog> {
        let path = self.language_file(code)?;
        read_catalog(&path, code)
    }

    /// Loads `code` and merges it over the current catalog.
    ///
    /// On success the locale is re-derived and `code` becomes the loaded language.
    pub fn load_language_file(
        &self,
        state: &mut CatalogState,
        code: &str,
        locale: &dyn LocaleSink,
    ) -> TranslateResult<()> {
        let translations = self.read_language_file(code)?;
        debug!(language = code, entries = translations.len(), "merging language file");

        state.catalog.merge_into(translations);
        apply_catalog_locale(&state.catalog, locale);
        state.loaded_language = Some(code.to_string());
        state.loaded_languages.insert(code.to_string());
        Ok(())
    }

    pub fn load_default(&self, state: &mut CatalogState, locale: &dyn LocaleSink) -> TranslateResult<()> {
        self.load_language_file(state, &self.default_language, locale)
    }

    /// Empties the catalog and forgets every loaded language.
    pub fn unload_all(&self, state: &mut CatalogState) {
        state.catalog.clear();
        state.loaded_language = None;
        state.loaded_languages.clear();
    }

    /// Loads `code` unless it is already the loaded language.
    ///
    /// Returns whether a load happened.
    pub fn load_if_changed(
        &self,
        state: &mut CatalogState,
        code: &str,
        locale: &dyn LocaleSink,
    ) -> TranslateResult<bool> {
        if state.loaded_language() == Some(code) {
            debug!(language = code, "language already loaded, skipping");
            return Ok(false);
        }
        self.load_language_file(state, code, locale)?;
        Ok(true)
    }

    /// Language codes with a loadable artifact under the language root, sorted.
    pub fn available_languages(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.lang_root) else {
            return Vec::new();
        };

        let mut languages: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
            })
            .filter(|code| is_valid_filename(code))
            .collect();
        languages.sort();
        languages
    }
}

fn read_catalog(path: &Path, code: &str) -> TranslateResult<Catalog> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::InvalidData => TranslateError::UnreadableCatalog {
            code: code.to_string(),
            source,
        },
        _ => TranslateError::LanguageFileNotFound(code.to_string()),
    })?;

    let catalog: Catalog = serde_json::from_str(&content).map_err(|source| {
        TranslateError::MalformedCatalog {
            code: code.to_string(),
            source,
        }
    })?;
    Ok(catalog)
}
