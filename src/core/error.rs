use thiserror::Error;

/// Errors raised while loading catalogs or building client exports.
///
/// Loader and export errors are never retried. A failed
/// [`Translator::reload_language`](crate::core::Translator::reload_language)
/// leaves the catalog in whatever state the failing step reached.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The code contains characters that cannot appear in an artifact file name.
    #[error("invalid language code \"{0}\"")]
    InvalidLanguageCode(String),

    /// The code is well formed but no readable `<code>.json` exists.
    #[error("language file not found for \"{0}\"")]
    LanguageFileNotFound(String),

    /// The artifact exists but is not valid UTF-8.
    #[error("language file for \"{code}\" is not valid UTF-8")]
    UnreadableCatalog {
        code: String,
        #[source]
        source: std::io::Error,
    },

    /// The artifact was read but is not a namespace -> key -> string structure.
    #[error("language file for \"{code}\" is not a valid catalog")]
    MalformedCatalog {
        code: String,
        #[source]
        source: serde_json::Error,
    },

    /// A client-side key could not be split into namespace and key.
    #[error("client-side translation key \"{0}\" has no namespace separator")]
    MalformedClientExportKey(String),

    /// A client-side key names an entry that was never loaded.
    #[error("translation \"{0}\" is not loaded in the catalog")]
    MissingCatalogEntry(String),

    /// A translation contributor failed while merging its strings.
    ///
    /// `PluginDirectories` wraps unreadable plugin files in it, and third-party
    /// contributors should return it for their own failures.
    #[error("translation contributor failed for \"{language}\": {message}")]
    Contributor { language: String, message: String },
}

pub type TranslateResult<T> = Result<T, TranslateError>;
