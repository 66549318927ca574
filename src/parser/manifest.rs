//! Parser for JSON dependency manifests.
//!
//! This module reads manifest files, validates them, and classifies their
//! declarations into graph edges.

use std::fs;
use std::path::Path;

use super::types::{DependencyDecl, Manifest};
use crate::graph::{DependencyEdge, InvalidScopeError};

/// Errors that can occur during manifest parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The manifest structure is invalid or missing required fields.
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// A declaration carries a scope token outside the closed vocabulary.
    #[error("Failed to classify declaration: {0}")]
    Scope(#[from] InvalidScopeError),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a manifest from a file path.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use depscope::parser::manifest::parse_file;
///
/// let manifest = parse_file(Path::new("deps.json")).unwrap();
/// println!("Project: {:?}", manifest.coordinates());
/// ```
pub fn parse_file(path: &Path) -> ParseResult<Manifest> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a manifest from a JSON string.
///
/// # Example
///
/// ```
/// use depscope::parser::manifest::parse_str;
///
/// let json = r#"{"groupId": "com.example", "artifactId": "app", "version": "1.0.0"}"#;
/// let manifest = parse_str(json).unwrap();
/// assert_eq!(manifest.group_id, Some("com.example".to_string()));
/// ```
pub fn parse_str(content: &str) -> ParseResult<Manifest> {
    let manifest: Manifest = serde_json::from_str(content)?;
    Ok(manifest)
}

/// Validates a parsed manifest structure.
///
/// A manifest should identify its project or declare dependencies; an empty
/// object is rejected.
pub fn validate(manifest: &Manifest) -> ParseResult<()> {
    if manifest.coordinates().is_none() && !manifest.has_dependencies() {
        return Err(ParseError::InvalidManifest(
            "manifest has no project coordinates and no dependencies".to_string(),
        ));
    }
    Ok(())
}

/// Extracts all declarations from a manifest into a flat list.
pub fn extract_declarations(manifest: &Manifest) -> Vec<DependencyDecl> {
    manifest.dependencies.clone().unwrap_or_default()
}

/// Classifies every declaration in a manifest into a validated edge.
///
/// Each declaration's scope token (or the parser-level default for omitted
/// scopes) goes through the edge factory; the first unrecognized token aborts
/// the whole manifest, since a malformed declaration means the manifest was
/// not pre-validated against the scope vocabulary.
///
/// # Example
///
/// ```
/// use depscope::parser::manifest::{classify_declarations, parse_str};
/// use depscope::graph::ScopeKind;
///
/// let json = r#"{
///     "groupId": "com.example",
///     "artifactId": "app",
///     "version": "1.0.0",
///     "dependencies": [
///         {"groupId": "junit", "artifactId": "junit", "version": "4.13.2", "scope": "test"}
///     ]
/// }"#;
///
/// let manifest = parse_str(json).unwrap();
/// let classified = classify_declarations(&manifest).unwrap();
/// assert_eq!(classified[0].1.scope(), ScopeKind::Test);
/// ```
pub fn classify_declarations(
    manifest: &Manifest,
) -> ParseResult<Vec<(DependencyDecl, DependencyEdge)>> {
    let mut classified = Vec::with_capacity(manifest.dependency_count());

    for decl in extract_declarations(manifest) {
        let edge = DependencyEdge::new(decl.optional, decl.scope_token())?;
        classified.push((decl, edge));
    }

    Ok(classified)
}
