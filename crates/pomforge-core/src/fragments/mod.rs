//! Plugin fragment builders.
//!
//! One builder per plugin kind. Each resolves its descriptor from the
//! [`Catalog`], layers its structural defaults on top, and appends a
//! `plugin` subtree to the enclosing `plugins` element:
//!
//! ```text
//! plugin
//! ├── groupId / artifactId / version
//! ├── dependencies?      (tool overrides)
//! ├── configuration?     (catalog defaults, then builder defaults)
//! └── executions?
//! ```
//!
//! Builders never look at each other's output. Ordering is decided by the
//! assembler's plan.

mod compiler;
mod container_image;
mod coverage;
mod runtime_image;
mod schema_generator;
mod style_checker;

use std::fmt;

use crate::catalog::{Catalog, Execution, PluginDescriptor, names};
use crate::config::AssemblyConfig;
use crate::error::Result;
use crate::node::Node;

pub use container_image::{ARCHITECTURE_PROPERTY, BASE_IMAGE, OS_PROPERTY};
pub use coverage::COVERAGE_EXCLUDES;
pub use style_checker::VIOLATION_SEVERITY;

/// The plugin kinds a descriptor can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    SchemaGenerator,
    ContainerImage,
    RuntimeImage,
    Compiler,
    Coverage,
    StyleChecker,
}

impl Fragment {
    /// Logical catalog name of the plugin this fragment emits.
    pub fn catalog_name(self) -> &'static str {
        match self {
            Fragment::SchemaGenerator => names::SCHEMA_GENERATOR,
            Fragment::ContainerImage => names::IMAGE_BUILDER,
            Fragment::RuntimeImage => names::RUNTIME_IMAGE,
            Fragment::Compiler => names::COMPILER,
            Fragment::Coverage => names::COVERAGE,
            Fragment::StyleChecker => names::STYLE_CHECKER,
        }
    }

    /// Resolve the fragment's descriptor(s) and append its `plugin` element.
    ///
    /// Catalog misses and blank coordinates are reported before anything is
    /// appended, so `plugins` is unchanged on error.
    pub fn emit(
        self,
        catalog: &Catalog,
        config: &AssemblyConfig,
        plugins: &mut Node,
    ) -> Result<()> {
        let base = catalog.resolve(self.catalog_name())?;
        base.ensure_coordinates(self.catalog_name())?;

        let (descriptor, tools) = match self {
            Fragment::SchemaGenerator => (schema_generator::describe(base)?, Vec::new()),
            Fragment::ContainerImage => (container_image::describe(base)?, Vec::new()),
            Fragment::RuntimeImage => (runtime_image::describe(base)?, Vec::new()),
            Fragment::Compiler => (compiler::describe(base, config)?, Vec::new()),
            Fragment::Coverage => (coverage::describe(base)?, Vec::new()),
            Fragment::StyleChecker => {
                let engine = catalog.resolve(names::STYLE_CHECKER_ENGINE)?;
                engine.ensure_coordinates(names::STYLE_CHECKER_ENGINE)?;
                (style_checker::describe(base, config)?, vec![engine])
            }
        };

        tracing::debug!(
            plugin = self.catalog_name(),
            artifact = %descriptor.artifact,
            version = %descriptor.version,
            "emitting plugin fragment"
        );
        write_plugin(plugins, &descriptor, &tools)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.catalog_name())
    }
}

/// Catalog descriptor plus a builder's own configuration and executions.
///
/// Catalog-supplied configuration children come first, builder defaults
/// after; catalog executions likewise precede the builder's.
fn layered(
    base: &PluginDescriptor,
    configuration: Option<Node>,
    executions: Vec<Execution>,
) -> Result<PluginDescriptor> {
    let configuration = match (&base.configuration, configuration) {
        (None, own) => own,
        (Some(catalog), None) => Some(catalog.clone()),
        (Some(catalog), Some(own)) => {
            let mut merged = Node::new("configuration")?;
            for child in catalog.children().iter().chain(own.children()) {
                merged.adopt(child.clone());
            }
            Some(merged)
        }
    };

    let mut all_executions = base.executions.clone();
    all_executions.extend(executions);

    Ok(PluginDescriptor {
        group: base.group.clone(),
        artifact: base.artifact.clone(),
        version: base.version.clone(),
        configuration,
        executions: all_executions,
    })
}

/// A `configuration` element holding simple `name = text` entries.
fn configuration(entries: &[(&str, &str)]) -> Result<Node> {
    let mut node = Node::new("configuration")?;
    for (name, text) in entries {
        node.append_text(*name, *text)?;
    }
    Ok(node)
}

fn write_coordinates(node: &mut Node, descriptor: &PluginDescriptor) -> Result<()> {
    node.append_text("groupId", &descriptor.group)?;
    node.append_text("artifactId", &descriptor.artifact)?;
    node.append_text("version", &descriptor.version)?;
    Ok(())
}

fn write_plugin(
    plugins: &mut Node,
    descriptor: &PluginDescriptor,
    tools: &[&PluginDescriptor],
) -> Result<()> {
    plugins.append_with("plugin", |plugin| {
        write_coordinates(plugin, descriptor)?;

        if !tools.is_empty() {
            plugin.append_with("dependencies", |dependencies| {
                for tool in tools {
                    dependencies.append_with("dependency", |dependency| {
                        write_coordinates(dependency, tool)
                    })?;
                }
                Ok(())
            })?;
        }

        if let Some(own) = &descriptor.configuration {
            plugin.append_with("configuration", |configuration| {
                for child in own.children() {
                    configuration.adopt(child.clone());
                }
                Ok(())
            })?;
        }

        if !descriptor.executions.is_empty() {
            plugin.append_with("executions", |executions| {
                for execution in &descriptor.executions {
                    execution.write(executions)?;
                }
                Ok(())
            })?;
        }
        Ok(())
    })?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_unknown_plugin_appends_nothing() {
        let catalog = Catalog::default();
        let mut plugins = Node::new("plugins").unwrap();
        let err = Fragment::Coverage
            .emit(&catalog, &AssemblyConfig::default(), &mut plugins)
            .unwrap_err();

        assert!(matches!(err, Error::UnknownPlugin { ref name } if name == "coverage"));
        assert!(plugins.children().is_empty());
    }

    #[test]
    fn test_blank_version_is_missing_coordinate() {
        let catalog = Catalog::builder()
            .with(names::COVERAGE, PluginDescriptor::new("org.jacoco", "jacoco-maven-plugin", ""))
            .unwrap()
            .build();
        let mut plugins = Node::new("plugins").unwrap();
        let err = Fragment::Coverage
            .emit(&catalog, &AssemblyConfig::default(), &mut plugins)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::MissingCoordinate { ref owner, field: "version" } if owner == "coverage"
        ));
        assert!(plugins.children().is_empty());
    }

    #[test]
    fn test_style_checker_requires_engine() {
        let catalog = Catalog::builder()
            .with(
                names::STYLE_CHECKER,
                PluginDescriptor::new(
                    "org.apache.maven.plugins",
                    "maven-checkstyle-plugin",
                    "3.4.0",
                ),
            )
            .unwrap()
            .build();
        let mut plugins = Node::new("plugins").unwrap();
        let err = Fragment::StyleChecker
            .emit(&catalog, &AssemblyConfig::default(), &mut plugins)
            .unwrap_err();

        assert!(matches!(err, Error::UnknownPlugin { ref name } if name == "style-checker-engine"));
        assert!(plugins.children().is_empty());
    }

    #[test]
    fn test_plugin_child_order() {
        let catalog = test_support::full_catalog();
        let mut plugins = Node::new("plugins").unwrap();
        Fragment::StyleChecker
            .emit(&catalog, &AssemblyConfig::default(), &mut plugins)
            .unwrap();

        let plugin = plugins.child("plugin").unwrap();
        let names: Vec<_> = plugin.children().iter().map(Node::name).collect();
        assert_eq!(
            names,
            ["groupId", "artifactId", "version", "dependencies", "executions"]
        );
    }

    #[test]
    fn test_catalog_configuration_precedes_builder_defaults() {
        let mut defaults = Node::new("configuration").unwrap();
        defaults.append_text("fieldVisibility", "PRIVATE").unwrap();
        let catalog = Catalog::builder()
            .with(
                names::SCHEMA_GENERATOR,
                PluginDescriptor::new("org.apache.avro", "avro-maven-plugin", "1.11.3")
                    .with_configuration(defaults),
            )
            .unwrap()
            .build();
        let mut plugins = Node::new("plugins").unwrap();
        Fragment::SchemaGenerator
            .emit(&catalog, &AssemblyConfig::default(), &mut plugins)
            .unwrap();

        let configuration = plugins.find(&["plugin", "configuration"]).unwrap();
        let names: Vec<_> = configuration.children().iter().map(Node::name).collect();
        assert_eq!(names, ["fieldVisibility", "stringType", "enableDecimalLogicalType"]);
    }
}
