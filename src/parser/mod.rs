//! Parser module for depscope.
//!
//! This module provides parsing for JSON dependency manifests, turning raw
//! declarations into classified edges ready for graph construction.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use depscope::graph::ScopeKind;
//! use depscope::parser::manifest;
//!
//! // Parse a manifest file
//! let parsed = manifest::parse_file(Path::new("deps.json")).unwrap();
//!
//! // Classify every declaration into a validated edge
//! let classified = manifest::classify_declarations(&parsed).unwrap();
//!
//! let test_only = classified.iter()
//!     .filter(|(_, edge)| edge.scope() == ScopeKind::Test)
//!     .count();
//!
//! println!("{} test-scoped dependencies", test_only);
//! ```

pub mod manifest;
pub mod types;

// Re-export commonly used items for convenience
pub use manifest::{
    classify_declarations, extract_declarations, parse_file, parse_str, validate, ParseError,
    ParseResult,
};

pub use types::{DependencyDecl, Manifest, DEFAULT_SCOPE};
