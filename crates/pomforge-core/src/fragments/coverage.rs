//! Coverage agent fragment.

use crate::catalog::{Execution, PluginDescriptor};
use crate::error::Result;
use crate::node::Node;

use super::layered;

/// Class patterns never counted against coverage: generated models and
/// messaging infrastructure.
///
/// The first pattern ends in a literal `.` rather than a wildcard. It is
/// emitted as-is; consumers matching `**/AvroModel*` will not be excluded.
pub const COVERAGE_EXCLUDES: [&str; 3] = [
    "**/AvroModel.",
    "**/**.kafka.*",
    "infrastructure/kafka/*",
];

const AGENT_GOAL: &str = "prepare-agent";

pub(super) fn describe(base: &PluginDescriptor) -> Result<PluginDescriptor> {
    let prepare_agent = Execution::new().id(AGENT_GOAL).goal(AGENT_GOAL);

    let mut options = Node::new("configuration")?;
    options.append_with("excludes", |excludes| {
        for pattern in COVERAGE_EXCLUDES {
            excludes.append_text("exclude", pattern)?;
        }
        Ok(())
    })?;

    layered(base, Some(options), vec![prepare_agent])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, names};
    use crate::config::AssemblyConfig;
    use crate::fragments::Fragment;

    fn emit_with_version(version: &str) -> Node {
        let catalog = Catalog::builder()
            .with(
                names::COVERAGE,
                PluginDescriptor::new("org.jacoco", "jacoco-maven-plugin", version),
            )
            .unwrap()
            .build();
        let mut plugins = Node::new("plugins").unwrap();
        Fragment::Coverage
            .emit(&catalog, &AssemblyConfig::default(), &mut plugins)
            .unwrap();
        plugins
    }

    #[test]
    fn test_exclusions_fixed_across_versions() {
        for version in ["0.8.8", "0.8.12", "1.0.0"] {
            let plugins = emit_with_version(version);
            let excludes = plugins
                .find(&["plugin", "configuration", "excludes"])
                .unwrap();
            let patterns: Vec<_> = excludes
                .children_named("exclude")
                .filter_map(Node::text)
                .collect();
            assert_eq!(patterns, COVERAGE_EXCLUDES);
        }
    }

    #[test]
    fn test_agent_has_no_phase() {
        let plugins = emit_with_version("0.8.12");
        let execution = plugins
            .find(&["plugin", "executions", "execution"])
            .unwrap();
        assert_eq!(execution.text_at(&["id"]), Some("prepare-agent"));
        assert_eq!(execution.text_at(&["goals", "goal"]), Some("prepare-agent"));
        assert!(execution.child("phase").is_none());
    }
}
