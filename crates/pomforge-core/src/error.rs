//! Error types for pomforge-core.

use thiserror::Error;

/// Result type for pomforge-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while composing a build descriptor.
///
/// None of these are transient: each one points at a static mistake in the
/// catalog, the module context, or the code that builds nodes.
#[derive(Debug, Error)]
pub enum Error {
    /// A node was created with an empty or otherwise invalid element name.
    #[error("malformed node name: {name:?}")]
    MalformedNode { name: String },

    /// A plugin name was looked up that the catalog does not contain.
    #[error("unknown plugin: {name}")]
    UnknownPlugin { name: String },

    /// A required coordinate (group, artifact or version) is blank.
    #[error("{owner} is missing its {field}")]
    MissingCoordinate { owner: String, field: &'static str },

    /// The same plugin name was registered twice while building a catalog.
    #[error("duplicate catalog entry: {name}")]
    DuplicatePlugin { name: String },

    /// The module did not opt in to parent-descriptor publication.
    #[error("module {module} does not publish a parent descriptor")]
    NotOptedIn { module: String },

    /// Assembly of one module failed; `source` holds the underlying cause.
    #[error("assembly failed for module {module}: {source}")]
    Assembly {
        module: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error with the coordinates of the module being assembled.
    pub fn in_module(self, module: impl Into<String>) -> Self {
        Error::Assembly {
            module: module.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any `Assembly` wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Assembly { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Render the error together with a short recovery hint for operators.
    pub fn with_hint(&self) -> String {
        let hint = match self.root_cause() {
            Error::MalformedNode { .. } => {
                "rename the property; element names must be valid XML names"
            }
            Error::UnknownPlugin { .. } => "add the plugin to the catalog file or fix the name",
            Error::MissingCoordinate { .. } => {
                "fill in the blank group, artifact or version in the catalog or module context"
            }
            Error::DuplicatePlugin { .. } => "remove one of the duplicate catalog entries",
            Error::NotOptedIn { .. } => "set \"publish_parent\": true in the module context",
            Error::Assembly { .. } => "",
        };
        format!("{}\n  hint: {}", self, hint)
    }
}
