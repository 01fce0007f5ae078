//! Translation catalog manager.
//!
//! ## Module Structure
//!
//! - `catalog`: Nested namespace -> key -> string store with recursive merge
//! - `language`: Per-context language resolution and file name validation
//! - `loader`: Reads `<code>.json` artifacts and merges them into the store
//! - `locale`: Derives the host locale from `General.Locale`
//! - `hooks`: Language override, translation contributor and client key extension points
//! - `export`: Builds the client-side translation script
//! - `translator`: Owns the store and sequences reloads behind one lock
//! - `error`: Error taxonomy
//!
//! ## Reload Sequence
//!
//! 1. Resolve the language (cached per context, hooks may override it)
//! 2. Clear the catalog and forget loaded languages
//! 3. Load the default language as a baseline
//! 4. Load the requested language over it
//! 5. Let contributors merge their own translations

pub mod catalog;
pub mod error;
pub mod export;
pub mod hooks;
pub mod language;
pub mod loader;
pub mod locale;
pub mod translator;

pub use catalog::{Catalog, LOCALE_KEY, LOCALE_NAMESPACE};
pub use error::{TranslateError, TranslateResult};
pub use export::{ClientExport, ClientScriptOptions, build_client_export, split_client_key};
pub use hooks::{ClientKeySource, Hooks, LanguageOverride, TranslationContributor};
pub use language::{LanguageResolver, is_valid_filename};
pub use loader::{CatalogLoader, CatalogState};
pub use locale::{HostLocale, LocaleSink, apply_catalog_locale, locale_candidates};
pub use translator::Translator;
