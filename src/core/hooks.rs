//! Extension points called by the translator.
//!
//! Any number of collaborators can be registered for each hook; they run in
//! registration order. Plain closures implement every hook.

use super::{Catalog, TranslateResult};

/// Overrides the language guessed for the current context.
///
/// Receives the current best guess and may replace it in place.
pub trait LanguageOverride: Send + Sync {
    fn override_language(&self, language: &mut String);
}

impl<F> LanguageOverride for F
where
    F: Fn(&mut String) + Send + Sync,
{
    fn override_language(&self, language: &mut String) {
        self(language)
    }
}

/// Merges extra translations (e.g. from plugins) after a language reload.
pub trait TranslationContributor: Send + Sync {
    fn contribute(&self, language: &str, catalog: &mut Catalog) -> TranslateResult<()>;
}

impl<F> TranslationContributor for F
where
    F: Fn(&str, &mut Catalog) -> TranslateResult<()> + Send + Sync,
{
    fn contribute(&self, language: &str, catalog: &mut Catalog) -> TranslateResult<()> {
        self(language, catalog)
    }
}

/// Appends fully-qualified keys that must be available to client code.
pub trait ClientKeySource: Send + Sync {
    fn client_side_keys(&self, keys: &mut Vec<String>);
}

impl<F> ClientKeySource for F
where
    F: Fn(&mut Vec<String>) + Send + Sync,
{
    fn client_side_keys(&self, keys: &mut Vec<String>) {
        self(keys)
    }
}

/// Registered collaborators for all three hooks.
#[derive(Default)]
pub struct Hooks {
    pub(crate) language_overrides: Vec<Box<dyn LanguageOverride>>,
    pub(crate) contributors: Vec<Box<dyn TranslationContributor>>,
    pub(crate) key_sources: Vec<Box<dyn ClientKeySource>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language_override(mut self, hook: impl LanguageOverride + 'static) -> Self {
        self.language_overrides.push(Box::new(hook));
        self
    }

    pub fn with_contributor(mut self, hook: impl TranslationContributor + 'static) -> Self {
        self.contributors.push(Box::new(hook));
        self
    }

    pub fn with_key_source(mut self, hook: impl ClientKeySource + 'static) -> Self {
        self.key_sources.push(Box::new(hook));
        self
    }

    pub(crate) fn override_language(&self, language: &mut String) {
        for hook in &self.language_overrides {
            hook.override_language(language);
        }
    }

    pub(crate) fn contribute(&self, language: &str, catalog: &mut Catalog) -> TranslateResult<()> {
        for hook in &self.contributors {
            hook.contribute(language, catalog)?;
        }
        Ok(())
    }

    /// Collects keys from every source, dropping duplicates but keeping
    /// first-seen order.
    pub(crate) fn client_side_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for hook in &self.key_sources {
            hook.client_side_keys(&mut keys);
        }
        let mut seen = std::collections::HashSet::new();
        keys.retain(|key| seen.insert(key.clone()));
        keys
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("language_overrides", &self.language_overrides.len())
            .field("contributors", &self.contributors.len())
            .field("key_sources", &self.key_sources.len())
            .finish()
    }
}
