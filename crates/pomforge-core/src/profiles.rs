//! Architecture-conditional build profiles.
//!
//! Profiles only describe the condition; the consuming tool evaluates the
//! activation against the build host at build time.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::fragments::ARCHITECTURE_PROPERTY;
use crate::node::Node;

/// A non-default host architecture and the image token it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetArchitecture {
    /// Processor architecture as reported by the build host.
    pub host_arch: &'static str,
    /// Architecture token understood by the container image builder.
    pub image_token: &'static str,
}

/// Architectures that need an override of the default container platform.
pub const KNOWN_ARCHITECTURES: &[TargetArchitecture] = &[TargetArchitecture {
    host_arch: "aarch64",
    image_token: "arm64",
}];

/// Condition under which a profile becomes active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Host processor architecture equals the given value.
    OsArch(String),
}

impl Activation {
    fn write(&self, profile: &mut Node) -> Result<()> {
        match self {
            Activation::OsArch(arch) => {
                profile
                    .append("activation")?
                    .append("os")?
                    .append_text("arch", arch)?;
            }
        }
        Ok(())
    }
}

/// A conditionally activated set of property overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub activation: Activation,
    pub properties: BTreeMap<String, String>,
}

impl Profile {
    /// Profile overriding the image architecture on hosts of `target`.
    pub fn for_architecture(target: &TargetArchitecture) -> Self {
        Self {
            id: format!("arch-{}", target.host_arch),
            activation: Activation::OsArch(target.host_arch.to_string()),
            properties: BTreeMap::from([(
                ARCHITECTURE_PROPERTY.to_string(),
                target.image_token.to_string(),
            )]),
        }
    }

    /// Append this profile under a `profiles` element.
    pub fn write(&self, profiles: &mut Node) -> Result<()> {
        profiles.append_with("profile", |profile| {
            profile.append_text("id", &self.id)?;
            self.activation.write(profile)?;
            profile.append_with("properties", |properties| {
                for (key, value) in &self.properties {
                    properties.append_text(key, value)?;
                }
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    }
}

/// One profile per entry of [`KNOWN_ARCHITECTURES`].
pub fn architecture_profiles() -> Vec<Profile> {
    KNOWN_ARCHITECTURES
        .iter()
        .map(Profile::for_architecture)
        .collect()
}

/// Append the architecture profiles to `root`'s `profiles` element.
///
/// The element is created if `root` does not have one yet. On error `root`
/// is left unchanged.
pub fn inject_architecture_profiles(root: &mut Node) -> Result<()> {
    let mut staged = match root.child("profiles") {
        Some(existing) => existing.clone(),
        None => Node::new("profiles")?,
    };
    for profile in architecture_profiles() {
        tracing::debug!(profile = %profile.id, "injecting architecture profile");
        profile.write(&mut staged)?;
    }
    *root.ensure_child("profiles")? = staged;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_on_empty_root() {
        let mut root = Node::new("project").unwrap();
        inject_architecture_profiles(&mut root).unwrap();

        let profiles = root.child("profiles").unwrap();
        assert_eq!(profiles.children().len(), 1);

        let profile = profiles.child("profile").unwrap();
        assert_eq!(profile.text_at(&["id"]), Some("arch-aarch64"));
        assert_eq!(profile.text_at(&["activation", "os", "arch"]), Some("aarch64"));
        assert_eq!(
            profile.text_at(&["properties", "docker.from.image.platform.architecture"]),
            Some("arm64")
        );
    }

    #[test]
    fn test_inject_reuses_existing_profiles_element() {
        let mut root = Node::new("project").unwrap();
        root.append("profiles")
            .unwrap()
            .append("profile")
            .unwrap()
            .append_text("id", "custom")
            .unwrap();

        inject_architecture_profiles(&mut root).unwrap();

        assert_eq!(root.children_named("profiles").count(), 1);
        let ids: Vec<_> = root
            .child("profiles")
            .unwrap()
            .children()
            .iter()
            .filter_map(|p| p.text_at(&["id"]))
            .collect();
        assert_eq!(ids, ["custom", "arch-aarch64"]);
    }
}
