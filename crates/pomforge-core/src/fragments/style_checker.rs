//! Style checker fragment.
//!
//! Binds to the `validate` phase and fails the consumer's build once
//! violations reach [`VIOLATION_SEVERITY`]. The rule engine is pinned through
//! a plugin dependency so its version moves independently of the plugin's.

use crate::catalog::{Execution, PluginDescriptor};
use crate::config::AssemblyConfig;
use crate::error::Result;

use super::{configuration, layered};

/// Lowest severity that fails the consumer's build.
pub const VIOLATION_SEVERITY: &str = "warning";

const PHASE: &str = "validate";

pub(super) fn describe(
    base: &PluginDescriptor,
    config: &AssemblyConfig,
) -> Result<PluginDescriptor> {
    let check = Execution::new()
        .id(PHASE)
        .phase(PHASE)
        .goal("check")
        .configuration(configuration(&[
            ("configLocation", config.style_config_location.as_str()),
            ("consoleOutput", "true"),
            ("failsOnError", "true"),
            ("violationSeverity", VIOLATION_SEVERITY),
        ])?);

    layered(base, None, vec![check])
}

#[cfg(test)]
mod tests {
    use crate::config::AssemblyConfig;
    use crate::fragments::{Fragment, test_support};
    use crate::node::Node;

    #[test]
    fn test_engine_override_and_validation_binding() {
        let mut plugins = Node::new("plugins").unwrap();
        Fragment::StyleChecker
            .emit(&test_support::full_catalog(), &AssemblyConfig::default(), &mut plugins)
            .unwrap();

        let plugin = plugins.child("plugin").unwrap();
        assert_eq!(plugin.text_at(&["artifactId"]), Some("maven-checkstyle-plugin"));
        assert_eq!(plugin.text_at(&["version"]), Some("3.4.0"));

        let engine = plugin.find(&["dependencies", "dependency"]).unwrap();
        assert_eq!(engine.text_at(&["groupId"]), Some("com.puppycrawl.tools"));
        assert_eq!(engine.text_at(&["artifactId"]), Some("checkstyle"));
        assert_eq!(engine.text_at(&["version"]), Some("10.17.0"));

        let execution = plugin.find(&["executions", "execution"]).unwrap();
        assert_eq!(execution.text_at(&["id"]), Some("validate"));
        assert_eq!(execution.text_at(&["phase"]), Some("validate"));
        assert_eq!(execution.text_at(&["goals", "goal"]), Some("check"));
        assert_eq!(
            execution.text_at(&["configuration", "configLocation"]),
            Some("./checkstyle.xml")
        );
        assert_eq!(
            execution.text_at(&["configuration", "violationSeverity"]),
            Some("warning")
        );
        assert_eq!(
            execution.text_at(&["configuration", "failsOnError"]),
            Some("true")
        );
    }
}
