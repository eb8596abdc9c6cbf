//! Runtime-platform image fragment: an alternative image build bound to
//! `install`, tagged with the enclosing module's own coordinates.

use crate::catalog::{Execution, PluginDescriptor};
use crate::error::Result;
use crate::node::Node;

use super::layered;

const IMAGE_NAME: &str = "${project.groupId}/${project.parent.artifactId}:${project.version}";

pub(super) fn describe(base: &PluginDescriptor) -> Result<PluginDescriptor> {
    let mut options = Node::new("configuration")?;
    options.append("image")?.append_text("name", IMAGE_NAME)?;
    options.append_text("createdDate", "now")?;
    options.append_text("skip", "false")?;

    let build_image = Execution::new().phase("install").goal("build-image");

    layered(base, Some(options), vec![build_image])
}

#[cfg(test)]
mod tests {
    use crate::config::AssemblyConfig;
    use crate::fragments::{Fragment, test_support};
    use crate::node::Node;

    #[test]
    fn test_bound_to_install() {
        let mut plugins = Node::new("plugins").unwrap();
        Fragment::RuntimeImage
            .emit(&test_support::full_catalog(), &AssemblyConfig::default(), &mut plugins)
            .unwrap();

        let plugin = plugins.child("plugin").unwrap();
        assert_eq!(plugin.text_at(&["artifactId"]), Some("spring-boot-maven-plugin"));
        assert_eq!(
            plugin.text_at(&["configuration", "image", "name"]),
            Some("${project.groupId}/${project.parent.artifactId}:${project.version}")
        );
        assert_eq!(plugin.text_at(&["configuration", "skip"]), Some("false"));

        let execution = plugin.find(&["executions", "execution"]).unwrap();
        assert_eq!(execution.text_at(&["phase"]), Some("install"));
        assert_eq!(execution.text_at(&["goals", "goal"]), Some("build-image"));
    }
}
