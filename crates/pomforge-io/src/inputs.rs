//! Loading of catalog, module context and assembly configuration files.
//!
//! All inputs are JSON. A catalog file lists plugins by logical name:
//!
//! ```json
//! {
//!   "plugins": [
//!     {
//!       "name": "coverage",
//!       "group": "org.jacoco",
//!       "artifact": "jacoco-maven-plugin",
//!       "version": "0.8.12"
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use pomforge_core::{AssemblyConfig, Catalog, CatalogEntry, ModuleContext};

use crate::error::{FileError, FileResult};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    plugins: Vec<CatalogEntry>,
}

/// Parse a catalog from JSON text.
pub fn parse_catalog(json: &str) -> FileResult<Catalog> {
    let file: CatalogFile = serde_json::from_str(json)?;
    Ok(Catalog::from_entries(file.plugins)?)
}

/// Load a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> FileResult<Catalog> {
    let path = path.as_ref();
    let file: CatalogFile = read_json(path)?;
    let catalog = Catalog::from_entries(file.plugins)?;
    tracing::debug!(path = %path.display(), plugins = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Load a module context file.
pub fn load_module(path: impl AsRef<Path>) -> FileResult<ModuleContext> {
    read_json(path.as_ref())
}

/// Load an assembly configuration file. Missing fields take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> FileResult<AssemblyConfig> {
    read_json(path.as_ref())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> FileResult<T> {
    let text = fs::read_to_string(path).map_err(|e| FileError::ReadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|source| FileError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}
