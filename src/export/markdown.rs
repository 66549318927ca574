//! Markdown export implementation.
//!
//! Exports classified dependency reports in Markdown format for documentation
//! and reporting.

use super::{Exporter, ReportData};
use crate::graph::ScopeKind;
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# Dependency Report")?;
        writeln!(writer)?;
        writeln!(
            writer,
            "**Project:** {} v{}",
            data.project_name, data.project_version
        )?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Scope | Count |")?;
        writeln!(writer, "|-------|-------|")?;
        for scope in ScopeKind::ALL {
            writeln!(writer, "| {} | {} |", scope, data.scope_count(scope))?;
        }
        writeln!(writer)?;
        writeln!(
            writer,
            "{} dependencies total, {} optional, {} circular.",
            data.dependencies.len(),
            data.optional_count(),
            data.cycles.len()
        )?;
        writeln!(writer)?;

        // One section per scope with declared dependencies
        for scope in ScopeKind::ALL {
            let scoped: Vec<_> = data
                .dependencies
                .iter()
                .filter(|d| d.edge.scope() == scope)
                .collect();

            if scoped.is_empty() {
                continue;
            }

            writeln!(writer, "## Scope: {} ({})", scope, scoped.len())?;
            writeln!(writer)?;
            writeln!(writer, "| Artifact | Version | Optional |")?;
            writeln!(writer, "|----------|---------|----------|")?;
            for dep in &scoped {
                writeln!(
                    writer,
                    "| {} | {} | {} |",
                    dep.coordinates,
                    dep.version,
                    if dep.edge.is_optional() { "yes" } else { "no" }
                )?;
            }
            writeln!(writer)?;
        }

        // Cycles section
        if !data.cycles.is_empty() {
            writeln!(writer, "## Circular Dependencies ({})", data.cycles.len())?;
            writeln!(writer)?;
            for cycle in &data.cycles {
                writeln!(writer, "- `{}`", cycle.cycle_path())?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}
