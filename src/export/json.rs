//! JSON export implementation.
//!
//! Exports classified dependency reports in JSON format for machine-readable output.

use super::{Exporter, ReportData};
use crate::graph::ScopeKind;
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable dependency for JSON output.
#[derive(Serialize)]
struct JsonDependency {
    coordinates: String,
    version: String,
    scope: String,
    optional: bool,
}

/// Serializable cycle info for JSON output.
#[derive(Serialize)]
struct JsonCycle {
    artifacts: Vec<String>,
    path: String,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    total_dependencies: usize,
    compile: usize,
    provided: usize,
    system: usize,
    runtime: usize,
    test: usize,
    optional: usize,
    circular_dependencies: usize,
}

/// Project info for JSON output.
#[derive(Serialize)]
struct JsonProject {
    name: String,
    version: String,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport {
    project: JsonProject,
    summary: JsonSummary,
    dependencies: Vec<JsonDependency>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    circular_dependencies: Vec<JsonCycle>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        let dependencies: Vec<JsonDependency> = data
            .dependencies
            .iter()
            .map(|d| JsonDependency {
                coordinates: d.coordinates.clone(),
                version: d.version.clone(),
                scope: d.edge.scope().to_string(),
                optional: d.edge.is_optional(),
            })
            .collect();

        let circular_dependencies: Vec<JsonCycle> = data
            .cycles
            .iter()
            .map(|c| JsonCycle {
                artifacts: c.nodes.clone(),
                path: c.cycle_path(),
            })
            .collect();

        let export = JsonExport {
            project: JsonProject {
                name: data.project_name.clone(),
                version: data.project_version.clone(),
            },
            summary: JsonSummary {
                total_dependencies: data.dependencies.len(),
                compile: data.scope_count(ScopeKind::Compile),
                provided: data.scope_count(ScopeKind::Provided),
                system: data.scope_count(ScopeKind::System),
                runtime: data.scope_count(ScopeKind::Runtime),
                test: data.scope_count(ScopeKind::Test),
                optional: data.optional_count(),
                circular_dependencies: data.cycles.len(),
            },
            dependencies,
            circular_dependencies,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DependencyEdge, DependencyGraph};
    use crate::parser::DependencyDecl;

    fn create_test_data() -> ReportData {
        let classified = vec![
            (
                DependencyDecl::new("com.google.guava", "guava", "32.1.2-jre", "compile"),
                DependencyEdge::new(false, "compile").unwrap(),
            ),
            (
                DependencyDecl::new("com.h2database", "h2", "2.2.224", "runtime").optional(),
                DependencyEdge::new(true, "runtime").unwrap(),
            ),
            (
                DependencyDecl::new("junit", "junit", "4.13.2", "test"),
                DependencyEdge::new(false, "test").unwrap(),
            ),
        ];

        let graph = DependencyGraph::new();

        ReportData::new(
            "com.example:test-app".to_string(),
            "1.0.0".to_string(),
            classified,
            &graph,
        )
    }

    #[test]
    fn test_json_export_basic() {
        let data = create_test_data();
        let mut output = Vec::new();

        JsonExporter.export(&data, &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

        assert_eq!(parsed["project"]["name"], "com.example:test-app");
        assert_eq!(parsed["summary"]["total_dependencies"], 3);
        assert_eq!(parsed["summary"]["compile"], 1);
        assert_eq!(parsed["summary"]["runtime"], 1);
        assert_eq!(parsed["summary"]["test"], 1);
        assert_eq!(parsed["summary"]["optional"], 1);
    }

    #[test]
    fn test_json_export_dependency_fields() {
        let data = create_test_data();
        let mut output = Vec::new();

        JsonExporter.export(&data, &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

        let deps = parsed["dependencies"].as_array().unwrap();
        assert_eq!(deps.len(), 3);

        let h2 = deps
            .iter()
            .find(|d| d["coordinates"] == "com.h2database:h2")
            .unwrap();
        assert_eq!(h2["scope"], "runtime");
        assert_eq!(h2["optional"], true);
    }

    #[test]
    fn test_json_export_omits_empty_cycles() {
        let data = create_test_data();
        let mut output = Vec::new();

        JsonExporter.export(&data, &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        assert!(!json_str.contains("circular_dependencies"));
    }
}
