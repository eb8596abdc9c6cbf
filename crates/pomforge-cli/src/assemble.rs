//! Assemble command implementation.

use std::path::Path;
use std::time::Instant;

use pomforge_core::AssemblyConfig;

use crate::colors;

/// Execute the assemble command.
pub fn execute(
    catalog_path: &str,
    module_path: &str,
    config: &AssemblyConfig,
    output: Option<&str>,
) -> anyhow::Result<()> {
    for path in [catalog_path, module_path] {
        if !Path::new(path).exists() {
            anyhow::bail!("Input not found: {}", path);
        }
    }

    let Some(output) = output else {
        let catalog = pomforge_io::load_catalog(catalog_path)?;
        let module = pomforge_io::load_module(module_path)?;
        let root = pomforge_core::assemble(&catalog, config, &module)?;
        print!("{}", pomforge_io::render(&root));
        return Ok(());
    };

    let start = Instant::now();
    let root = pomforge_io::assemble_to_file(catalog_path, module_path, config, output)?;
    let plugins = root
        .walk()
        .into_iter()
        .filter(|(_, node)| node.name() == "plugin")
        .count();

    println!(
        "{}✓{} {} ({} plugins, {:.2}ms)",
        colors::GREEN,
        colors::RESET,
        output,
        plugins,
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}
