use std::{
    collections::BTreeSet,
    path::PathBuf,
    sync::{Mutex, MutexGuard, PoisonError},
};

use tracing::info;

use super::{
    Catalog, CatalogLoader, CatalogState, ClientExport, ClientScriptOptions, HostLocale, Hooks,
    LanguageResolver, LocaleSink, TranslateResult, build_client_export,
};

/// Owns the process catalog and sequences loads, reloads and exports.
///
/// All catalog mutation goes through one mutex. A reload holds it for the
/// whole unload -> default -> requested -> contributors sequence, so readers
/// never observe a half-built catalog.
pub struct Translator {
    loader: CatalogLoader,
    state: Mutex<CatalogState>,
    resolver: LanguageResolver,
    hooks: Hooks,
    locale: Box<dyn LocaleSink>,
    script: ClientScriptOptions,
}

impl Translator {
    pub fn new(lang_root: impl Into<PathBuf>, default_language: impl Into<String>) -> Self {
        Self {
            loader: CatalogLoader::new(lang_root, default_language),
            state: Mutex::new(CatalogState::new()),
            resolver: LanguageResolver::new(),
            hooks: Hooks::new(),
            locale: Box::new(HostLocale::new()),
            script: ClientScriptOptions::default(),
        }
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_locale_sink(mut self, sink: impl LocaleSink + 'static) -> Self {
        self.locale = Box::new(sink);
        self
    }

    pub fn with_script_options(mut self, options: ClientScriptOptions) -> Self {
        self.script = options;
        self
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    pub fn default_language(&self) -> &str {
        self.loader.default_language()
    }

    pub fn loaded_language(&self) -> Option<String> {
        self.lock().loaded_language().map(str::to_string)
    }

    pub fn loaded_languages(&self) -> BTreeSet<String> {
        self.lock().loaded_languages().clone()
    }

    pub fn available_languages(&self) -> Vec<String> {
        self.loader.available_languages()
    }

    /// Locale the sink reports as active, if it tracks one.
    pub fn active_locale(&self) -> Option<String> {
        self.locale.active()
    }

    /// Language for the current context, resolved once from `request_hint`.
    pub fn language_to_load(&self, request_hint: &str) -> String {
        self.resolver.resolve(request_hint, &self.hooks)
    }

    /// Forgets the resolved language. Intended for tests.
    pub fn reset(&self) {
        self.resolver.reset();
    }

    pub fn load_default(&self) -> TranslateResult<()> {
        let mut state = self.lock();
        self.loader.load_default(&mut state, self.locale.as_ref())
    }

    /// Merges `language` over the current catalog, even if it is already loaded.
    pub fn load_language_file(&self, language: &str) -> TranslateResult<()> {
        let mut state = self.lock();
        self.loader
            .load_language_file(&mut state, language, self.locale.as_ref())
    }

    pub fn unload_all(&self) {
        let mut state = self.lock();
        self.loader.unload_all(&mut state);
    }

    /// Loads `language` unless it is already loaded.
    ///
    /// An empty or missing language is resolved for the current context first.
    pub fn load_core_translation(&self, language: Option<&str>) -> TranslateResult<bool> {
        let language = self.language_or_resolved(language);
        let mut state = self.lock();
        self.loader
            .load_if_changed(&mut state, &language, self.locale.as_ref())
    }

    /// Rebuilds the catalog for `language` from scratch.
    ///
    /// Any failing step aborts the reload and the catalog keeps whatever was
    /// merged before the failure.
    pub fn reload_language(&self, language: Option<&str>) -> TranslateResult<()> {
        let language = self.language_or_resolved(language);
        let mut state = self.lock();

        self.loader.unload_all(&mut state);
        self.loader.load_default(&mut state, self.locale.as_ref())?;
        self.loader
            .load_language_file(&mut state, &language, self.locale.as_ref())?;
        self.hooks.contribute(&language, &mut state.catalog)?;

        info!(language = %language, entries = state.catalog.len(), "reloaded translations");
        Ok(())
    }

    /// Deep-merges `translations` into the catalog without touching the loaded language.
    pub fn merge_translations(&self, translations: Catalog) {
        self.lock().catalog.merge_into(translations);
    }

    pub fn translate(&self, namespace: &str, key: &str) -> Option<String> {
        self.lock().catalog.get(namespace, key).map(str::to_string)
    }

    /// Snapshot of the current catalog.
    pub fn catalog(&self) -> Catalog {
        self.lock().catalog.clone()
    }

    /// Builds the client export for every key registered by the key sources.
    pub fn client_export(&self) -> TranslateResult<ClientExport> {
        let keys = self.hooks.client_side_keys();
        let state = self.lock();
        build_client_export(&state.catalog, &keys, self.script.separator)
    }

    /// The client script for every registered key.
    ///
    /// Missing keys do not fail the build; see [`ClientExport::missing`].
    pub fn build_export_script(&self) -> TranslateResult<String> {
        Ok(self.client_export()?.to_script(&self.script))
    }

    fn language_or_resolved(&self, language: Option<&str>) -> String {
        match language {
            Some(language) if !language.is_empty() => language.to_string(),
            _ => self.language_to_load(""),
        }
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("loader", &self.loader)
            .field("resolver", &self.resolver)
            .field("hooks", &self.hooks)
            .field("script", &self.script)
            .finish_non_exhaustive()
    }
}
