//! Schema code generation (Avro-style) fragment.

use crate::catalog::{Execution, PluginDescriptor};
use crate::error::Result;

use super::{configuration, layered};

pub(super) const PHASE: &str = "generate-resources";
pub(super) const GOAL: &str = "schema";
pub(super) const SOURCE_DIRECTORY: &str = "src/main/resources/avro";
pub(super) const OUTPUT_DIRECTORY: &str = "src/main/java";

pub(super) fn describe(base: &PluginDescriptor) -> Result<PluginDescriptor> {
    let options = configuration(&[
        ("stringType", "String"),
        ("enableDecimalLogicalType", "true"),
    ])?;

    let generate = Execution::new()
        .phase(PHASE)
        .goal(GOAL)
        .configuration(configuration(&[
            ("sourceDirectory", SOURCE_DIRECTORY),
            ("outputDirectory", OUTPUT_DIRECTORY),
        ])?);

    layered(base, Some(options), vec![generate])
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, PluginDescriptor, names};
    use crate::config::AssemblyConfig;
    use crate::fragments::Fragment;
    use crate::node::Node;

    #[test]
    fn test_generation_execution() {
        let catalog = Catalog::builder()
            .with(names::SCHEMA_GENERATOR, PluginDescriptor::new("g", "avro-tool", "1.2"))
            .unwrap()
            .build();
        let mut plugins = Node::new("plugins").unwrap();
        Fragment::SchemaGenerator
            .emit(&catalog, &AssemblyConfig::default(), &mut plugins)
            .unwrap();

        let plugin = plugins.child("plugin").unwrap();
        assert_eq!(plugin.text_at(&["groupId"]), Some("g"));
        assert_eq!(plugin.text_at(&["artifactId"]), Some("avro-tool"));
        assert_eq!(plugin.text_at(&["version"]), Some("1.2"));
        assert_eq!(plugin.text_at(&["configuration", "stringType"]), Some("String"));
        assert_eq!(
            plugin.text_at(&["configuration", "enableDecimalLogicalType"]),
            Some("true")
        );

        let execution = plugin.find(&["executions", "execution"]).unwrap();
        assert_eq!(execution.text_at(&["phase"]), Some("generate-resources"));
        assert_eq!(execution.text_at(&["goals", "goal"]), Some("schema"));
        assert_eq!(
            execution.text_at(&["configuration", "sourceDirectory"]),
            Some("src/main/resources/avro")
        );
        assert_eq!(
            execution.text_at(&["configuration", "outputDirectory"]),
            Some("src/main/java")
        );
        assert!(execution.child("id").is_none());
    }
}
