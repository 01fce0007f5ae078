//! Client-side translation export.
//!
//! Builds a script fragment that publishes a whitelisted subset of the
//! catalog to browser code:
//!
//! ```text
//! var translations = {"General_Save":"Save"};
//! if(typeof(<global>) == 'undefined') { var <global> = new Object; }for(var i in translations) { <global>[i] = translations[i];} function <lookup>(translationStringId) { ... }
//! ```
//!
//! The lookup function returns a placeholder sentence naming the id when a
//! key was never exported, so missing registrations show up on the page
//! instead of throwing.

use serde_json::{Map, Value};
use tracing::warn;

use super::{Catalog, TranslateError, TranslateResult};

/// Names used in the generated script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientScriptOptions {
    /// Joins namespace and key in a fully-qualified key.
    pub separator: char,
    /// Global object collecting translations across fragments.
    pub global: String,
    /// Lookup function exposed to client code.
    pub function: String,
}

impl Default for ClientScriptOptions {
    fn default() -> Self {
        Self {
            separator: '_',
            global: "langpack_translations".to_string(),
            function: "_lp_translate".to_string(),
        }
    }
}

/// The exported subset of a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientExport {
    /// Fully-qualified key -> translated string, in request order.
    pub translations: Map<String, Value>,
    /// Requested keys with no string in the catalog.
    pub missing: Vec<String>,
}

impl ClientExport {
    /// Fails with [`TranslateError::MissingCatalogEntry`] on the first missing key.
    pub fn ensure_complete(&self) -> TranslateResult<()> {
        match self.missing.first() {
            Some(key) => Err(TranslateError::MissingCatalogEntry(key.clone())),
            None => Ok(()),
        }
    }

    pub fn to_script(&self, options: &ClientScriptOptions) -> String {
        let global = &options.global;
        let function = &options.function;
        let json = escape_script_json(&Value::Object(self.translations.clone()).to_string());

        let mut js = format!("var translations = {json};");
        js.push('\n');
        js.push_str(&format!(
            "if(typeof({global}) == 'undefined') {{ var {global} = new Object; }}\
             for(var i in translations) {{ {global}[i] = translations[i];}} "
        ));
        js.push_str(&format!(
            "function {function}(translationStringId) {{ \
             if( typeof({global}[translationStringId]) != 'undefined' ){{  return {global}[translationStringId]; }}\
             return \"The string \"+translationStringId+\" was not loaded in javascript. \
             Make sure it is registered as a client-side translation key.\";}}"
        ));
        js
    }
}

/// Splits a fully-qualified key at the first separator.
///
/// # Examples
///
/// ```
/// use langpack::core::split_client_key;
///
/// assert_eq!(split_client_key("General_Save_As", '_'), Some(("General", "Save_As")));
/// assert_eq!(split_client_key("General", '_'), None);
/// ```
pub fn split_client_key(key: &str, separator: char) -> Option<(&str, &str)> {
    key.split_once(separator)
}

/// Looks up every key in `catalog`.
///
/// Keys without a separator abort the export. Keys that are well formed but
/// absent are left out of the mapping and reported in [`ClientExport::missing`].
pub fn build_client_export(
    catalog: &Catalog,
    keys: &[String],
    separator: char,
) -> TranslateResult<ClientExport> {
    let mut translations = Map::new();
    let mut missing = Vec::new();

    for key in keys {
        let (namespace, name) = split_client_key(key, separator)
            .ok_or_else(|| TranslateError::MalformedClientExportKey(key.clone()))?;

        match catalog.get(namespace, name) {
            Some(value) => {
                translations.insert(key.clone(), Value::String(value.to_string()));
            }
            None => {
                warn!(key = %key, "client-side translation key is not loaded");
                missing.push(key.clone());
            }
        }
    }

    Ok(ClientExport {
        translations,
        missing,
    })
}

/// Keeps `</script>` inside a string literal from closing the script element,
/// and escapes the two line separators older engines reject in string literals.
fn escape_script_json(json: &str) -> String {
    json.replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
