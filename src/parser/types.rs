//! Shared types for manifest parsing.
//!
//! This module defines the data structures used to represent a dependency
//! manifest and its declarations before they are classified into graph edges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scope token assumed when a declaration omits one.
///
/// Defaulting happens at the parser level so the classifier itself stays an
/// exact-match lookup.
pub const DEFAULT_SCOPE: &str = "compile";

/// Represents the structure of a dependency manifest file.
///
/// This struct mirrors the JSON shape build tooling emits when listing a
/// project's resolved dependency declarations.
///
/// # Example
///
/// ```ignore
/// use depscope::parser::types::Manifest;
/// use serde_json;
///
/// let json = r#"{"groupId": "com.example", "artifactId": "app", "version": "1.0.0"}"#;
/// let manifest: Manifest = serde_json::from_str(json).unwrap();
/// assert_eq!(manifest.artifact_id, Some("app".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Manifest {
    /// The group identifier of the declaring project.
    #[serde(rename = "groupId")]
    pub group_id: Option<String>,

    /// The artifact identifier of the declaring project.
    #[serde(rename = "artifactId")]
    pub artifact_id: Option<String>,

    /// The version of the declaring project.
    pub version: Option<String>,

    /// The project's declared dependencies.
    pub dependencies: Option<Vec<DependencyDecl>>,
}

impl Manifest {
    /// Returns true if the manifest declares at least one dependency.
    pub fn has_dependencies(&self) -> bool {
        self.dependencies.as_ref().is_some_and(|d| !d.is_empty())
    }

    /// Returns the number of declared dependencies.
    pub fn dependency_count(&self) -> usize {
        self.dependencies.as_ref().map_or(0, |d| d.len())
    }

    /// Returns the `group:artifact` coordinates of the declaring project,
    /// if both parts are present.
    pub fn coordinates(&self) -> Option<String> {
        match (&self.group_id, &self.artifact_id) {
            (Some(g), Some(a)) => Some(format!("{}:{}", g, a)),
            _ => None,
        }
    }
}

/// A single dependency declaration from a manifest.
///
/// Carries the raw scope token as written in the manifest; classification into
/// the closed scope enumeration happens when the declaration is turned into a
/// graph edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDecl {
    /// The group identifier of the dependency.
    #[serde(rename = "groupId")]
    pub group_id: String,

    /// The artifact identifier of the dependency.
    #[serde(rename = "artifactId")]
    pub artifact_id: String,

    /// The version the declaration resolves to.
    pub version: String,

    /// The raw scope token, if the declaration carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Whether the depender tolerates this dependency being absent.
    #[serde(default)]
    pub optional: bool,
}

impl DependencyDecl {
    /// Creates a new declaration with an explicit scope token.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scope: Some(scope.into()),
            optional: false,
        }
    }

    /// Marks the declaration as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Returns the `group:artifact` coordinates of this dependency.
    pub fn coordinates(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// Returns the scope token to classify, falling back to the ecosystem
    /// default when the declaration omits one.
    pub fn scope_token(&self) -> &str {
        self.scope.as_deref().unwrap_or(DEFAULT_SCOPE)
    }
}

impl fmt::Display for DependencyDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} ({})",
            self.coordinates(),
            self.version,
            self.scope_token()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_default() {
        let manifest = Manifest::default();
        assert!(manifest.group_id.is_none());
        assert!(!manifest.has_dependencies());
        assert_eq!(manifest.dependency_count(), 0);
        assert!(manifest.coordinates().is_none());
    }

    #[test]
    fn test_manifest_coordinates() {
        let manifest = Manifest {
            group_id: Some("com.example".to_string()),
            artifact_id: Some("app".to_string()),
            version: Some("1.0.0".to_string()),
            dependencies: None,
        };
        assert_eq!(manifest.coordinates(), Some("com.example:app".to_string()));
    }

    #[test]
    fn test_manifest_has_dependencies() {
        let mut manifest = Manifest::default();
        assert!(!manifest.has_dependencies());

        manifest.dependencies = Some(vec![DependencyDecl::new(
            "com.google.guava",
            "guava",
            "32.1.2-jre",
            "compile",
        )]);
        assert!(manifest.has_dependencies());
        assert_eq!(manifest.dependency_count(), 1);
    }

    #[test]
    fn test_decl_coordinates() {
        let decl = DependencyDecl::new("org.slf4j", "slf4j-api", "2.0.9", "compile");
        assert_eq!(decl.coordinates(), "org.slf4j:slf4j-api");
    }

    #[test]
    fn test_decl_scope_token_explicit() {
        let decl = DependencyDecl::new("junit", "junit", "4.13.2", "test");
        assert_eq!(decl.scope_token(), "test");
    }

    #[test]
    fn test_decl_scope_token_defaults_to_compile() {
        let mut decl = DependencyDecl::new("org.slf4j", "slf4j-api", "2.0.9", "compile");
        decl.scope = None;
        assert_eq!(decl.scope_token(), DEFAULT_SCOPE);
    }

    #[test]
    fn test_decl_optional_builder() {
        let decl = DependencyDecl::new("com.h2database", "h2", "2.2.224", "runtime").optional();
        assert!(decl.optional);
    }

    #[test]
    fn test_decl_display() {
        let decl = DependencyDecl::new("junit", "junit", "4.13.2", "test");
        assert_eq!(format!("{}", decl), "junit:junit:4.13.2 (test)");
    }
}
