//! Publication gate.
//!
//! A module can define several publications (its own library, the parent
//! descriptor, ...). Publishing any of them may trigger every publish task of
//! the module, so the gate lets only the canonical parent-descriptor
//! publication through and denies everything else, unknown identities
//! included.

use std::fmt;

use crate::config::AssemblyConfig;

/// Opaque name of one logical publication within a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicationIdentity(String);

impl PublicationIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PublicationIdentity {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for PublicationIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Target repository of a publish invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationKind {
    /// The developer's local repository.
    Local,
    /// A remote artifact repository.
    Remote,
}

impl fmt::Display for InvocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationKind::Local => f.write_str("local"),
            InvocationKind::Remote => f.write_str("remote"),
        }
    }
}

/// One publish operation about to write to a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishInvocation {
    pub kind: InvocationKind,
    pub publication: PublicationIdentity,
}

impl PublishInvocation {
    pub fn new(kind: InvocationKind, publication: impl Into<PublicationIdentity>) -> Self {
        Self {
            kind,
            publication: publication.into(),
        }
    }
}

/// Allows only the canonical parent-descriptor publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationGate {
    canonical: PublicationIdentity,
}

impl PublicationGate {
    pub fn new(canonical: impl Into<PublicationIdentity>) -> Self {
        Self {
            canonical: canonical.into(),
        }
    }

    pub fn from_config(config: &AssemblyConfig) -> Self {
        Self::new(config.canonical_publication.as_str())
    }

    pub fn canonical(&self) -> &PublicationIdentity {
        &self.canonical
    }

    /// Whether `invocation` may proceed. A `false` means the whole publish
    /// operation must be skipped.
    pub fn should_publish(&self, invocation: &PublishInvocation) -> bool {
        let allowed = invocation.publication == self.canonical;
        if !allowed {
            tracing::debug!(
                publication = %invocation.publication,
                kind = %invocation.kind,
                canonical = %self.canonical,
                "skipping non-canonical publication"
            );
        }
        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_publication_allowed() {
        let gate = PublicationGate::from_config(&AssemblyConfig::default());
        for kind in [InvocationKind::Local, InvocationKind::Remote] {
            assert!(gate.should_publish(&PublishInvocation::new(kind, "parentJava")));
        }
    }

    #[test]
    fn test_other_publications_denied() {
        let gate = PublicationGate::new("parentJava");
        for name in ["library", "parentjava", "", "never-seen-before"] {
            for kind in [InvocationKind::Local, InvocationKind::Remote] {
                assert!(
                    !gate.should_publish(&PublishInvocation::new(kind, name)),
                    "{name:?} should be denied"
                );
            }
        }
    }

    #[test]
    fn test_gate_is_pure() {
        let gate = PublicationGate::new("parentJava");
        let invocation = PublishInvocation::new(InvocationKind::Remote, "library");
        let first = gate.should_publish(&invocation);
        let second = gate.should_publish(&invocation);
        assert_eq!(first, second);
        assert_eq!(gate.canonical().as_str(), "parentJava");
    }
}
