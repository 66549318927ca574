//! CSV export implementation.
//!
//! Exports classified dependency reports in CSV format for spreadsheet use.

use super::{Exporter, ReportData};
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        // Write header
        writeln!(writer, "coordinates,version,scope,optional,in_cycle")?;

        // Build a set of artifacts in cycles for quick lookup
        let cycle_artifacts: std::collections::HashSet<&str> = data
            .cycles
            .iter()
            .flat_map(|c| c.nodes.iter().map(|s| s.as_str()))
            .collect();

        // Write each dependency as a row
        for dep in &data.dependencies {
            let in_cycle = cycle_artifacts.contains(dep.coordinates.as_str());

            writeln!(
                writer,
                "{},{},{},{},{}",
                Self::escape_field(&dep.coordinates),
                Self::escape_field(&dep.version),
                dep.edge.scope(),
                dep.edge.is_optional(),
                in_cycle
            )?;
        }

        Ok(())
    }
}
