//! Integration tests for the catalog → descriptor → XML pipeline.

use std::fs;
use tempfile::TempDir;

use pomforge_core::{AssemblyConfig, assemble};
use pomforge_io::{
    FileError, assemble_to_file, load_config, load_module, parse_catalog, render,
};

const CATALOG: &str = include_str!("../../../demos/catalog.json");
const MODULE: &str = include_str!("../../../demos/module.json");
const CONFIG: &str = include_str!("../../../demos/config.json");

// =============================================================================
// Test Helpers
// =============================================================================

struct Inputs {
    temp: TempDir,
}

impl Inputs {
    fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp.path().join("catalog.json"), CATALOG).expect("write catalog");
        fs::write(temp.path().join("module.json"), MODULE).expect("write module");
        fs::write(temp.path().join("config.json"), CONFIG).expect("write config");
        Self { temp }
    }

    fn path(&self, name: &str) -> std::path::PathBuf {
        self.temp.path().join(name)
    }
}

fn demo_xml(config: &AssemblyConfig) -> String {
    let catalog = parse_catalog(CATALOG).unwrap();
    let module = serde_json::from_str(MODULE).unwrap();
    render(&assemble(&catalog, config, &module).unwrap())
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_rendered_document_sections_in_order() {
    let xml = demo_xml(&AssemblyConfig::default());

    let positions: Vec<_> = [
        "<parent>",
        "<packaging>pom</packaging>",
        "<properties>",
        "<pluginManagement>",
        "<artifactId>maven-compiler-plugin</artifactId>",
        "<profiles>",
    ]
    .iter()
    .map(|marker| xml.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "sections out of order:\n{xml}");
    assert!(xml.contains("<relativePath/>"));
    assert!(xml.contains("<lg5.version>${project.parent.version}</lg5.version>"));
}

#[test]
fn test_rendering_is_deterministic() {
    let config = AssemblyConfig::default();
    assert_eq!(demo_xml(&config), demo_xml(&config));
}

#[test]
fn test_rendered_profile() {
    let xml = demo_xml(&AssemblyConfig::default());
    assert!(xml.contains("<id>arch-aarch64</id>"));
    assert!(xml.contains("<arch>aarch64</arch>"));
    assert!(xml.contains(
        "<docker.from.image.platform.architecture>arm64</docker.from.image.platform.architecture>"
    ));
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn test_assemble_to_file() {
    let inputs = Inputs::new();
    let output = inputs.path("pom.xml");

    let root = assemble_to_file(
        inputs.path("catalog.json"),
        inputs.path("module.json"),
        &AssemblyConfig::without_style_checks(),
        &output,
    )
    .unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, render(&root));
    assert!(!written.contains("maven-checkstyle-plugin"));
}

#[test]
fn test_unknown_plugin_writes_nothing() {
    let inputs = Inputs::new();
    fs::write(inputs.path("catalog.json"), r#"{ "plugins": [] }"#).unwrap();
    let output = inputs.path("pom.xml");

    let err = assemble_to_file(
        inputs.path("catalog.json"),
        inputs.path("module.json"),
        &AssemblyConfig::default(),
        &output,
    )
    .unwrap_err();

    assert!(matches!(err, FileError::Core(_)));
    assert!(err.to_string().contains("unknown plugin: schema-generator"));
    assert!(!output.exists());
}

#[test]
fn test_load_module_and_config_files() {
    let inputs = Inputs::new();
    fs::write(inputs.path("release.json"), r#"{ "compiler_release": "17" }"#).unwrap();

    let module = load_module(inputs.path("module.json")).unwrap();
    assert_eq!(module.coordinates.artifact, "lg5-spring-parent");
    assert_eq!(module.properties.get("java.version").map(String::as_str), Some("21"));

    let config = load_config(inputs.path("release.json")).unwrap();
    assert_eq!(config.compiler_release, "17");
    assert!(config.include_style_checker);
}

#[test]
fn test_demo_config_matches_defaults() {
    let inputs = Inputs::new();
    let config = load_config(inputs.path("config.json")).unwrap();

    assert_eq!(config.canonical_publication, "parentJava");
    assert_eq!(config.version_alias_property, "lg5.version");
    assert_eq!(demo_xml(&config), demo_xml(&AssemblyConfig::default()));
}

#[test]
fn test_malformed_module_file() {
    let inputs = Inputs::new();
    fs::write(inputs.path("module.json"), "{ not json").unwrap();

    let err = load_module(inputs.path("module.json")).unwrap_err();
    assert!(matches!(err, FileError::ParseError { .. }));
}
