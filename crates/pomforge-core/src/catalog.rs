//! Plugin descriptor catalog.
//!
//! Plugins are looked up by a stable logical name (`"coverage"`,
//! `"image-builder"`, ...) rather than by raw coordinates, so upgrading a
//! plugin is a single edit to the catalog source. A [`Catalog`] is built once
//! and is read-only afterwards; it is `Send + Sync` and can be shared across
//! assembly runs without locking.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::ensure_coordinates;
use crate::error::{Error, Result};
use crate::node::Node;

/// Logical names of the plugins the fragment builders resolve.
pub mod names {
    pub const SCHEMA_GENERATOR: &str = "schema-generator";
    pub const COVERAGE: &str = "coverage";
    pub const IMAGE_BUILDER: &str = "image-builder";
    pub const RUNTIME_IMAGE: &str = "runtime-image";
    pub const STYLE_CHECKER: &str = "style-checker";
    pub const STYLE_CHECKER_ENGINE: &str = "style-checker-engine";
    pub const COMPILER: &str = "compiler";
}

/// One bound execution of a plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Execution {
    pub id: Option<String>,
    /// Lifecycle phase; `None` defers to the consumer's own binding.
    pub phase: Option<String>,
    pub goals: Vec<String>,
    pub configuration: Option<Node>,
}

impl Execution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.goals.push(goal.into());
        self
    }

    pub fn configuration(mut self, configuration: Node) -> Self {
        self.configuration = Some(configuration);
        self
    }

    /// Append this execution under an `executions` element.
    ///
    /// Children are written as `id`, `phase`, `goals`, `configuration`; goals
    /// always precede configuration.
    pub fn write(&self, executions: &mut Node) -> Result<()> {
        executions.append_with("execution", |execution| {
            if let Some(id) = &self.id {
                execution.append_text("id", id)?;
            }
            if let Some(phase) = &self.phase {
                execution.append_text("phase", phase)?;
            }
            execution.append_with("goals", |goals| {
                for goal in &self.goals {
                    goals.append_text("goal", goal)?;
                }
                Ok(())
            })?;
            if let Some(configuration) = &self.configuration {
                execution.adopt(configuration.clone());
            }
            Ok(())
        })?;
        Ok(())
    }
}

/// Coordinates and default configuration of one plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDescriptor {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub configuration: Option<Node>,
    pub executions: Vec<Execution>,
}

impl PluginDescriptor {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            configuration: None,
            executions: Vec::new(),
        }
    }

    pub fn with_configuration(mut self, configuration: Node) -> Self {
        self.configuration = Some(configuration);
        self
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.executions.push(execution);
        self
    }

    /// Fail with `MissingCoordinate` if group, artifact or version is blank.
    pub fn ensure_coordinates(&self, plugin: &str) -> Result<()> {
        ensure_coordinates(plugin, &self.group, &self.artifact, &self.version)
    }
}

/// Serialized form of a catalog entry, as read from an external source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl From<CatalogEntry> for PluginDescriptor {
    fn from(entry: CatalogEntry) -> Self {
        PluginDescriptor::new(entry.group, entry.artifact, entry.version)
    }
}

/// Immutable name → descriptor lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    plugins: FxHashMap<String, PluginDescriptor>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build a catalog from serialized entries, rejecting duplicate names.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self> {
        let mut builder = Self::builder();
        for entry in entries {
            let name = entry.name.clone();
            builder.insert(name, entry.into())?;
        }
        Ok(builder.build())
    }

    /// Look up a plugin by logical name.
    pub fn resolve(&self, name: &str) -> Result<&PluginDescriptor> {
        self.plugins.get(name).ok_or_else(|| Error::UnknownPlugin {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Entries sorted by name.
    pub fn entries(&self) -> Vec<(&str, &PluginDescriptor)> {
        let mut entries: Vec<_> = self
            .plugins
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Mutable staging area for a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    plugins: FxHashMap<String, PluginDescriptor>,
}

impl CatalogBuilder {
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        descriptor: PluginDescriptor,
    ) -> Result<&mut Self> {
        let name = name.into();
        if self.plugins.contains_key(&name) {
            return Err(Error::DuplicatePlugin { name });
        }
        self.plugins.insert(name, descriptor);
        Ok(self)
    }

    /// Consuming variant of [`insert`](Self::insert) for chained construction.
    pub fn with(mut self, name: impl Into<String>, descriptor: PluginDescriptor) -> Result<Self> {
        self.insert(name, descriptor)?;
        Ok(self)
    }

    pub fn build(self) -> Catalog {
        Catalog {
            plugins: self.plugins,
        }
    }
}
