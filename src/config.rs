use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Ok, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{ClientScriptOptions, is_valid_filename};

pub const CONFIG_FILE_NAME: &str = ".langpackrc.json";

static SCRIPT_IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_lang_root")]
    pub lang_root: String,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default)]
    pub plugins_root: Option<String>,
    #[serde(default)]
    pub client_side_keys: Vec<String>,
    #[serde(default = "default_key_separator")]
    pub key_separator: String,
    #[serde(default = "default_client_global")]
    pub client_global: String,
    #[serde(default = "default_client_function")]
    pub client_function: String,
}

fn default_lang_root() -> String {
    "lang".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_key_separator() -> String {
    "_".to_string()
}

fn default_client_global() -> String {
    "langpack_translations".to_string()
}

fn default_client_function() -> String {
    "_lp_translate".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang_root: default_lang_root(),
            default_language: default_language(),
            plugins_root: None,
            client_side_keys: Vec::new(),
            key_separator: default_key_separator(),
            client_global: default_client_global(),
            client_function: default_client_function(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the default language is not a safe file name,
    /// the separator is not a single character, or a client name is not
    /// a valid script identifier.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_filename(&self.default_language) {
            bail!(
                "Invalid language code in 'defaultLanguage': \"{}\"",
                self.default_language
            );
        }

        if self.key_separator.chars().count() != 1 {
            bail!(
                "'keySeparator' must be a single character, got \"{}\"",
                self.key_separator
            );
        }

        for (field, name) in [
            ("clientGlobal", &self.client_global),
            ("clientFunction", &self.client_function),
        ] {
            if !SCRIPT_IDENTIFIER_REGEX.is_match(name) {
                bail!("Invalid identifier in '{}': \"{}\"", field, name);
            }
        }

        Ok(())
    }

    pub fn separator(&self) -> char {
        self.key_separator.chars().next().unwrap_or('_')
    }

    pub fn script_options(&self) -> ClientScriptOptions {
        ClientScriptOptions {
            separator: self.separator(),
            global: self.client_global.clone(),
            function: self.client_function.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    pub fn lang_root(&self) -> PathBuf {
        self.base_dir.join(&self.config.lang_root)
    }

    pub fn plugins_root(&self) -> Option<PathBuf> {
        self.config
            .plugins_root
            .as_ref()
            .map(|root| self.base_dir.join(root))
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
