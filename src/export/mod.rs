//! Export functionality for dependency analysis results.
//!
//! This module provides exporters for outputting classified dependency
//! reports in various formats: JSON, CSV, and Markdown.

pub mod csv;
pub mod json;
pub mod markdown;

use crate::graph::{CycleInfo, DependencyEdge, DependencyGraph, ScopeKind};
use crate::parser::DependencyDecl;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - spreadsheet-friendly
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// One classified dependency in a report.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    /// `group:artifact` coordinates
    pub coordinates: String,
    /// Resolved version
    pub version: String,
    /// The classified edge labeling the relationship
    pub edge: DependencyEdge,
}

/// Data container for export operations.
///
/// Holds the classified declarations and graph results that can be exported.
#[derive(Debug, Clone)]
pub struct ReportData {
    /// Project coordinates
    pub project_name: String,
    /// Project version
    pub project_version: String,
    /// Classified dependencies
    pub dependencies: Vec<ReportEntry>,
    /// Detected circular dependencies
    pub cycles: Vec<CycleInfo>,
}

impl ReportData {
    /// Create new report data from classified declarations and a graph.
    pub fn new(
        project_name: String,
        project_version: String,
        classified: Vec<(DependencyDecl, DependencyEdge)>,
        graph: &DependencyGraph,
    ) -> Self {
        let dependencies = classified
            .into_iter()
            .map(|(decl, edge)| ReportEntry {
                coordinates: decl.coordinates(),
                version: decl.version,
                edge,
            })
            .collect();

        Self {
            project_name,
            project_version,
            dependencies,
            cycles: graph.cycle_details(),
        }
    }

    /// Count of dependencies classified into the given scope.
    pub fn scope_count(&self, scope: ScopeKind) -> usize {
        self.dependencies
            .iter()
            .filter(|d| d.edge.scope() == scope)
            .count()
    }

    /// Count of dependencies marked optional.
    pub fn optional_count(&self) -> usize {
        self.dependencies
            .iter()
            .filter(|d| d.edge.is_optional())
            .count()
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(format: ExportFormat, data: &ReportData, writer: &mut W) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Csv => csv::CsvExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ReportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(
            "markdown".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert!("invalid".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Json), "json");
        assert_eq!(format!("{}", ExportFormat::Csv), "csv");
        assert_eq!(format!("{}", ExportFormat::Markdown), "markdown");
    }

    #[test]
    fn test_report_data_counts() {
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
        let data = ReportData::new("com.example:app".to_string(), "1.0.0".to_string(), classified, &graph);

        assert_eq!(data.dependencies.len(), 3);
        assert_eq!(data.scope_count(ScopeKind::Compile), 1);
        assert_eq!(data.scope_count(ScopeKind::Runtime), 1);
        assert_eq!(data.scope_count(ScopeKind::Test), 1);
        assert_eq!(data.scope_count(ScopeKind::Provided), 0);
        assert_eq!(data.optional_count(), 1);
    }
}
