//! Container image (Jib-style) fragment.
//!
//! The base image platform is left as property references so the
//! architecture profiles can switch it per build host. Image metadata is
//! fixed so images built on different machines match.

use crate::catalog::{Execution, PluginDescriptor};
use crate::error::Result;
use crate::node::Node;

use super::layered;

/// Property naming the base image CPU architecture.
pub const ARCHITECTURE_PROPERTY: &str = "docker.from.image.platform.architecture";

/// Property naming the base image operating system.
pub const OS_PROPERTY: &str = "docker.from.image.platform.os";

pub const BASE_IMAGE: &str = "gcr.io/distroless/java17-debian12";

const TARGET_IMAGE: &str = "${project.groupId}/${parent.artifactId}:${project.version}";
const CREATION_TIME: &str = "USE_CURRENT_TIMESTAMP";
const JVM_FLAGS: [&str; 3] = [
    "-Duser.timezone=UTC",
    "-XX:+PrintFlagsFinal",
    "-XX:MaxRAMPercentage=50",
];

pub(super) fn describe(base: &PluginDescriptor) -> Result<PluginDescriptor> {
    let mut options = Node::new("configuration")?;
    options.append_with("from", |from| {
        from.append_text("image", BASE_IMAGE)?;
        let platform = from.append("platforms")?.append("platform")?;
        platform.append_text("architecture", property_ref(ARCHITECTURE_PROPERTY))?;
        platform.append_text("os", property_ref(OS_PROPERTY))?;
        Ok(())
    })?;

    let mut image = Node::new("configuration")?;
    image.append("to")?.append_text("image", TARGET_IMAGE)?;
    image.append_with("container", |container| {
        container.append_text("creationTime", CREATION_TIME)?;
        container.append_with("jvmFlags", |flags| {
            for flag in JVM_FLAGS {
                flags.append_text("jvmFlag", flag)?;
            }
            Ok(())
        })?;
        Ok(())
    })?;

    let build_image = Execution::new()
        .id("build-image")
        .phase("post-integration-test")
        .goal("dockerBuild")
        .configuration(image);

    layered(base, Some(options), vec![build_image])
}

fn property_ref(name: &str) -> String {
    format!("${{{}}}", name)
}
