//! File boundary for pomforge.
//!
//! Reads the JSON inputs the composition engine needs and writes assembled
//! descriptors as XML.
//!
//! # Architecture
//!
//! ```text
//! catalog.json ──► load_catalog ──┐
//!                                 ├──► pomforge_core::assemble ──► XmlRenderer ──► pom.xml
//! module.json ───► load_module ───┘
//! ```

mod error;
mod inputs;
mod xml;

pub use error::{FileError, FileResult};
pub use inputs::{load_catalog, load_config, load_module, parse_catalog};
pub use xml::{XmlRenderer, render};

use std::fs;
use std::path::{Path, PathBuf};

use pomforge_core::{AssemblyConfig, Node};

/// Write an assembled descriptor to `path` as XML.
pub fn write_descriptor(root: &Node, path: impl AsRef<Path>) -> FileResult<()> {
    let path = path.as_ref();
    fs::write(path, render(root)).map_err(|e| FileError::WriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::info!("Wrote descriptor {}", path.display());
    Ok(())
}

/// Load inputs, assemble the module and write the descriptor.
pub fn assemble_to_file(
    catalog_path: impl AsRef<Path>,
    module_path: impl AsRef<Path>,
    config: &AssemblyConfig,
    output_path: impl AsRef<Path>,
) -> FileResult<Node> {
    let catalog = load_catalog(catalog_path)?;
    let module = load_module(module_path)?;

    let root = pomforge_core::assemble(&catalog, config, &module)?;
    write_descriptor(&root, output_path)?;
    Ok(root)
}

/// Default output path: `pom.xml` next to the module context file.
pub fn default_output_path(module_path: impl AsRef<Path>) -> PathBuf {
    module_path
        .as_ref()
        .parent()
        .map(|dir| dir.join("pom.xml"))
        .unwrap_or_else(|| PathBuf::from("pom.xml"))
}
