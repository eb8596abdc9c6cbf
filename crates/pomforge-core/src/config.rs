//! Assembly configuration and per-module input.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maven-style coordinates of a module or parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Coordinates {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Fail with `MissingCoordinate` naming `owner` if any field is blank.
    pub fn ensure_complete(&self, owner: &str) -> Result<()> {
        ensure_coordinates(owner, &self.group, &self.artifact, &self.version)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

pub(crate) fn ensure_coordinates(
    owner: &str,
    group: &str,
    artifact: &str,
    version: &str,
) -> Result<()> {
    let blank = [("group", group), ("artifact", artifact), ("version", version)]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());

    match blank {
        Some((field, _)) => Err(Error::MissingCoordinate {
            owner: owner.to_string(),
            field,
        }),
        None => Ok(()),
    }
}

/// Default container platform written into the shared properties.
///
/// Architecture profiles override `architecture` on hosts that need it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub os: String,
    pub architecture: String,
}

impl Default for Platform {
    fn default() -> Self {
        Self {
            os: "linux".to_string(),
            architecture: "amd64".to_string(),
        }
    }
}

/// Configuration shared by every assembly run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Emit the style-checker among the actively bound plugins.
    pub include_style_checker: bool,

    /// Release level handed to the compiler plugin.
    pub compiler_release: String,

    /// Name of the property descendants use to refer to the parent version.
    pub version_alias_property: String,

    /// Location of the style-checker rule file, relative to the consumer.
    pub style_config_location: String,

    /// Container platform used when no architecture profile is active.
    pub default_platform: Platform,

    /// Publication id the publication gate lets through.
    pub canonical_publication: String,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            include_style_checker: true,
            compiler_release: "21".to_string(),
            version_alias_property: "lg5.version".to_string(),
            style_config_location: "./checkstyle.xml".to_string(),
            default_platform: Platform::default(),
            canonical_publication: "parentJava".to_string(),
        }
    }
}

impl AssemblyConfig {
    /// Default configuration with the style-checker left out of `build/plugins`.
    pub fn without_style_checks() -> Self {
        Self {
            include_style_checker: false,
            ..Default::default()
        }
    }
}

/// Input for assembling one module's parent descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleContext {
    /// The publishing module itself.
    pub coordinates: Coordinates,

    /// The shared ancestor the descriptor inherits from.
    pub parent: Coordinates,

    /// Whether this module opts in to parent-descriptor publication.
    #[serde(default = "default_publish_parent")]
    pub publish_parent: bool,

    /// Extra shared properties, written after the version alias in key order.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

fn default_publish_parent() -> bool {
    true
}

impl ModuleContext {
    pub fn new(coordinates: Coordinates, parent: Coordinates) -> Self {
        Self {
            coordinates,
            parent,
            publish_parent: true,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}
