//! File- and config-backed hook implementations.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::core::{
    Catalog, CatalogLoader, ClientKeySource, TranslateError, TranslateResult,
    TranslationContributor,
};

/// Contributes translations shipped by plugins.
///
/// Each directory under the plugins root may hold `lang/<code>.json`. For
/// every plugin the default language is merged first, then the requested
/// language, so partial plugin translations fall back per key.
#[derive(Debug, Clone)]
pub struct PluginDirectories {
    root: PathBuf,
    default_language: String,
}

impl PluginDirectories {
    pub fn new(root: impl Into<PathBuf>, default_language: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            default_language: default_language.into(),
        }
    }

    /// Plugin directories that contain a `lang` folder, sorted by name.
    pub fn plugin_lang_dirs(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path().join("lang"))
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();
        dirs
    }

    fn merge_plugin(&self, lang_dir: &Path, language: &str, catalog: &mut Catalog) -> TranslateResult<()> {
        let loader = CatalogLoader::new(lang_dir, &self.default_language);
        let mut codes = vec![self.default_language.as_str()];
        if language != self.default_language {
            codes.push(language);
        }

        for code in codes {
            match loader.read_language_file(code) {
                Ok(translations) => {
                    debug!(plugin = %lang_dir.display(), language = code, "merging plugin translations");
                    catalog.merge_into(translations);
                }
                Err(TranslateError::LanguageFileNotFound(_)) => {}
                Err(err) => {
                    return Err(TranslateError::Contributor {
                        language: language.to_string(),
                        message: format!("{}: {err}", lang_dir.display()),
                    });
                }
            }
        }
        Ok(())
    }
}

impl TranslationContributor for PluginDirectories {
    fn contribute(&self, language: &str, catalog: &mut Catalog) -> TranslateResult<()> {
        for lang_dir in self.plugin_lang_dirs() {
            self.merge_plugin(&lang_dir, language, catalog)?;
        }
        Ok(())
    }
}

/// A fixed list of client-side keys, typically from `clientSideKeys` in the config file.
#[derive(Debug, Clone, Default)]
pub struct StaticClientKeys(pub Vec<String>);

impl ClientKeySource for StaticClientKeys {
    fn client_side_keys(&self, keys: &mut Vec<String>) {
        keys.extend(self.0.iter().cloned());
    }
}
