//! Graph module for dependency relationship modeling.
//!
//! This module provides the [`DependencyGraph`] struct for building and
//! analyzing dependency relationships, and the [`DependencyEdge`] metadata
//! labeling each arc with its scope and optionality.
//!
//! # Example
//!
//! ```rust
//! use depscope::graph::{DependencyEdge, DependencyGraph};
//!
//! let mut graph = DependencyGraph::new();
//! graph.add_artifact("com.example", "app", "1.0.0");
//! graph.add_artifact("junit", "junit", "4.13.2");
//!
//! let edge = DependencyEdge::new(false, "test").unwrap();
//! graph.add_edge("com.example:app", "junit:junit", edge);
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod dependency_graph;
mod edge;

pub use dependency_graph::{Artifact, CycleInfo, DependencyGraph};
pub use edge::{DependencyEdge, InvalidScopeError, ScopeKind};
