//! Catalog command implementation.

use crate::colors;

/// List catalog entries sorted by name.
pub fn execute(catalog_path: &str) -> anyhow::Result<()> {
    let catalog = pomforge_io::load_catalog(catalog_path)?;

    println!(
        "{}Catalog{} - {} plugins",
        colors::BOLD,
        colors::RESET,
        catalog.len()
    );
    for (name, descriptor) in catalog.entries() {
        println!(
            "  {:<22} {}:{}:{}",
            name, descriptor.group, descriptor.artifact, descriptor.version
        );
    }
    Ok(())
}
