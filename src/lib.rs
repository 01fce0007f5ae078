//! langpack - translation catalogs for server-rendered applications
//!
//! langpack is a CLI tool and library that loads per-language JSON string
//! catalogs, layers a requested language over a default baseline, merges
//! plugin-contributed strings, and exports a whitelisted subset to client code.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `contributors`: File- and config-backed hook implementations
//! - `core`: Catalog store, language resolution, loading, locale and export
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod contributors;
pub mod core;
pub mod utils;
