//! Descriptor assembly.
//!
//! The composition order is data: an [`AssemblyPlan`] lists the steps, and
//! the [`Assembler`] runs them against a fresh tree per module.
//!
//! ```text
//! project
//! ├── parent            groupId, artifactId, version, relativePath (empty)
//! ├── modelVersion, groupId, artifactId, version
//! ├── packaging         pom
//! ├── properties        version alias, default platform, module extras
//! ├── build
//! │   ├── pluginManagement/plugins   version pinning only
//! │   └── plugins                    actively bound
//! └── profiles          architecture overrides
//! ```

use std::fmt;

use crate::catalog::Catalog;
use crate::config::{AssemblyConfig, ModuleContext};
use crate::error::{Error, Result};
use crate::fragments::{ARCHITECTURE_PROPERTY, Fragment, OS_PROPERTY};
use crate::node::Node;
use crate::profiles::inject_architecture_profiles;

/// Name of the document's root element.
pub const ROOT_ELEMENT: &str = "project";

/// Descriptor model version written after the parent block.
pub const MODEL_VERSION: &str = "4.0.0";

/// Packaging kinds the assembler can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packaging {
    /// Aggregator with no compiled artifact of its own.
    Aggregator,
}

impl Packaging {
    pub fn as_str(self) -> &'static str {
        match self {
            Packaging::Aggregator => "pom",
        }
    }
}

/// One step of the fixed composition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyStep {
    /// Parent coordinates with an empty `relativePath`.
    Parent,
    /// `modelVersion` and the module's own coordinates.
    ModuleCoordinates,
    /// Packaging kind.
    Packaging(Packaging),
    /// Shared properties.
    Properties,
    /// `build/pluginManagement/plugins`.
    PluginManagement(Vec<Fragment>),
    /// `build/plugins`.
    Plugins(Vec<Fragment>),
    /// Architecture profiles.
    Profiles,
}

impl AssemblyStep {
    pub fn label(&self) -> &'static str {
        match self {
            AssemblyStep::Parent => "parent",
            AssemblyStep::ModuleCoordinates => "module-coordinates",
            AssemblyStep::Packaging(_) => "packaging",
            AssemblyStep::Properties => "properties",
            AssemblyStep::PluginManagement(_) => "plugin-management",
            AssemblyStep::Plugins(_) => "plugins",
            AssemblyStep::Profiles => "profiles",
        }
    }
}

impl fmt::Display for AssemblyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyStep::Packaging(kind) => write!(f, "{} ({})", self.label(), kind.as_str()),
            AssemblyStep::PluginManagement(fragments) | AssemblyStep::Plugins(fragments) => {
                let names: Vec<_> = fragments.iter().map(|f| f.catalog_name()).collect();
                write!(f, "{} [{}]", self.label(), names.join(", "))
            }
            _ => f.write_str(self.label()),
        }
    }
}

/// Ordered list of assembly steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyPlan {
    steps: Vec<AssemblyStep>,
}

impl AssemblyPlan {
    /// The standard parent-descriptor plan.
    pub fn standard(config: &AssemblyConfig) -> Self {
        let mut active = vec![Fragment::Compiler, Fragment::Coverage];
        if config.include_style_checker {
            active.push(Fragment::StyleChecker);
        }

        Self {
            steps: vec![
                AssemblyStep::Parent,
                AssemblyStep::ModuleCoordinates,
                AssemblyStep::Packaging(Packaging::Aggregator),
                AssemblyStep::Properties,
                AssemblyStep::PluginManagement(vec![
                    Fragment::SchemaGenerator,
                    Fragment::ContainerImage,
                    Fragment::RuntimeImage,
                ]),
                AssemblyStep::Plugins(active),
                AssemblyStep::Profiles,
            ],
        }
    }

    pub fn from_steps(steps: Vec<AssemblyStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[AssemblyStep] {
        &self.steps
    }

    /// Every fragment the plan emits, in emission order.
    pub fn fragments(&self) -> impl Iterator<Item = Fragment> + '_ {
        self.steps
            .iter()
            .filter_map(|step| match step {
                AssemblyStep::PluginManagement(fragments) | AssemblyStep::Plugins(fragments) => {
                    Some(fragments.iter())
                }
                _ => None,
            })
            .flatten()
            .copied()
    }
}

/// Runs an [`AssemblyPlan`] against a catalog and configuration.
pub struct Assembler<'a> {
    catalog: &'a Catalog,
    config: &'a AssemblyConfig,
    plan: AssemblyPlan,
}

impl<'a> Assembler<'a> {
    /// Create an assembler using the standard plan for `config`.
    pub fn new(catalog: &'a Catalog, config: &'a AssemblyConfig) -> Self {
        Self {
            catalog,
            config,
            plan: AssemblyPlan::standard(config),
        }
    }

    /// Replace the plan.
    pub fn with_plan(mut self, plan: AssemblyPlan) -> Self {
        self.plan = plan;
        self
    }

    pub fn plan(&self) -> &AssemblyPlan {
        &self.plan
    }

    /// Build the descriptor document for one module.
    ///
    /// Every call builds a fresh tree; identical input yields identical
    /// output. Any failure aborts the module and no partial tree escapes.
    pub fn assemble(&self, module: &ModuleContext) -> Result<Node> {
        let label = module.coordinates.to_string();
        if !module.publish_parent {
            return Err(Error::NotOptedIn { module: label });
        }

        let mut root = Node::new(ROOT_ELEMENT)?;
        for step in self.plan.steps() {
            tracing::debug!(module = %label, step = step.label(), "applying assembly step");
            self.apply(step, module, &mut root)
                .map_err(|e| e.in_module(label.as_str()))?;
        }

        tracing::info!(module = %label, "assembled parent descriptor");
        Ok(root)
    }

    fn apply(&self, step: &AssemblyStep, module: &ModuleContext, root: &mut Node) -> Result<()> {
        match step {
            AssemblyStep::Parent => {
                module.parent.ensure_complete("parent")?;
                root.append_with("parent", |parent| {
                    parent.append_text("groupId", &module.parent.group)?;
                    parent.append_text("artifactId", &module.parent.artifact)?;
                    parent.append_text("version", &module.parent.version)?;
                    parent.append("relativePath")?;
                    Ok(())
                })?;
            }
            AssemblyStep::ModuleCoordinates => {
                module.coordinates.ensure_complete("module")?;
                root.append_text("modelVersion", MODEL_VERSION)?;
                root.append_text("groupId", &module.coordinates.group)?;
                root.append_text("artifactId", &module.coordinates.artifact)?;
                root.append_text("version", &module.coordinates.version)?;
            }
            AssemblyStep::Packaging(kind) => {
                root.append_text("packaging", kind.as_str())?;
            }
            AssemblyStep::Properties => {
                let entries = self.properties(module);
                root.append_with("properties", |properties| {
                    for (key, value) in entries {
                        properties.append_text(key, value)?;
                    }
                    Ok(())
                })?;
            }
            AssemblyStep::PluginManagement(fragments) => {
                let mut management = Node::new("pluginManagement")?;
                management.adopt(self.plugins(fragments)?);
                root.ensure_child("build")?.adopt(management);
            }
            AssemblyStep::Plugins(fragments) => {
                let plugins = self.plugins(fragments)?;
                root.ensure_child("build")?.adopt(plugins);
            }
            AssemblyStep::Profiles => inject_architecture_profiles(root)?,
        }
        Ok(())
    }

    /// Built-in properties followed by the module's own, one entry per name.
    ///
    /// A module value replaces a built-in default of the same name in place.
    fn properties<'m>(&'m self, module: &'m ModuleContext) -> Vec<(&'m str, &'m str)> {
        let platform = &self.config.default_platform;
        let mut entries = vec![
            (
                self.config.version_alias_property.as_str(),
                "${project.parent.version}",
            ),
            (ARCHITECTURE_PROPERTY, platform.architecture.as_str()),
            (OS_PROPERTY, platform.os.as_str()),
        ];
        for (key, value) in &module.properties {
            match entries.iter_mut().find(|(name, _)| *name == key.as_str()) {
                Some(entry) => entry.1 = value.as_str(),
                None => entries.push((key.as_str(), value.as_str())),
            }
        }
        entries
    }

    fn plugins(&self, fragments: &[Fragment]) -> Result<Node> {
        let mut plugins = Node::new("plugins")?;
        for fragment in fragments {
            fragment.emit(self.catalog, self.config, &mut plugins)?;
        }
        Ok(plugins)
    }
}

/// Assemble one module with the standard plan.
pub fn assemble(
    catalog: &Catalog,
    config: &AssemblyConfig,
    module: &ModuleContext,
) -> Result<Node> {
    Assembler::new(catalog, config).assemble(module)
}
