use std::{env, path::Path};

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{ConfigLoadResult, load_config},
    contributors::{PluginDirectories, StaticClientKeys},
    core::{Hooks, Translator},
};

/// Configuration plus a translator wired from it.
pub struct CommandContext {
    pub config: ConfigLoadResult,
    pub translator: Translator,
}

impl CommandContext {
    pub fn new(common: &CommonArgs, extra_keys: &[String]) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        Self::from_dir(&cwd, common, extra_keys)
    }

    /// Loads config starting at `dir` and applies command-line overrides.
    pub fn from_dir(dir: &Path, common: &CommonArgs, extra_keys: &[String]) -> Result<Self> {
        let mut config = load_config(dir)?;
        if let Some(language) = &common.default_language {
            config.config.default_language = language.clone();
            config.config.validate()?;
        }

        let lang_root = match &common.lang_root {
            Some(root) => dir.join(root),
            None => config.lang_root(),
        };
        let default_language = config.config.default_language.clone();

        let mut client_keys = config.config.client_side_keys.clone();
        client_keys.extend(extra_keys.iter().cloned());
        let mut hooks = Hooks::new().with_key_source(StaticClientKeys(client_keys));
        if let Some(plugins_root) = config.plugins_root() {
            hooks = hooks.with_contributor(PluginDirectories::new(
                plugins_root,
                default_language.clone(),
            ));
        }

        let translator = Translator::new(lang_root, default_language)
            .with_hooks(hooks)
            .with_script_options(config.config.script_options());

        Ok(Self { config, translator })
    }

    /// Resolves the language for this run and rebuilds the catalog for it.
    pub fn reload(&self, requested: Option<&str>) -> Result<String> {
        let hint = requested.unwrap_or(self.translator.default_language());
        let language = self.translator.language_to_load(hint);
        self.translator
            .reload_language(Some(&language))
            .with_context(|| format!("Failed to load translations for \"{}\"", language))?;
        debug!(
            language = %language,
            locale = self.translator.active_locale().as_deref().unwrap_or("unchanged"),
            "translations ready"
        );
        Ok(language)
    }
}
