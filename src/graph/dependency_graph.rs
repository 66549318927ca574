//! Dependency graph implementation using petgraph.
//!
//! Provides a directed graph of artifacts whose arcs are labeled with
//! [`DependencyEdge`] metadata, with scope-filtered queries and cycle
//! detection. Edges point from the depender to its dependency.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

use super::edge::{DependencyEdge, InvalidScopeError, ScopeKind};
use crate::parser::types::Manifest;

/// Represents a node in the dependency graph.
///
/// Each node is one resolved artifact, identified by its `group:artifact`
/// coordinates.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Group identifier (e.g., "com.google.guava")
    pub group_id: String,
    /// Artifact identifier (e.g., "guava")
    pub artifact_id: String,
    /// Resolved version (e.g., "32.1.2-jre")
    pub version: String,
    /// Distance from the root project (0 = the root itself)
    pub depth: usize,
}

impl Artifact {
    /// Creates a new artifact node at depth 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depscope::graph::Artifact;
    ///
    /// let artifact = Artifact::new("com.google.guava", "guava", "32.1.2-jre");
    /// assert_eq!(artifact.coordinates(), "com.google.guava:guava");
    /// assert_eq!(artifact.depth, 0);
    /// ```
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            depth: 0,
        }
    }

    /// Creates a new artifact node with a specified depth.
    pub fn with_depth(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        depth: usize,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            depth,
        }
    }

    /// Returns the `group:artifact` coordinates identifying this node.
    pub fn coordinates(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

/// A directed graph of artifacts labeled with dependency metadata.
///
/// The graph uses petgraph's `DiGraph` internally, with nodes representing
/// artifacts and edges carrying the optionality and scope of each
/// relationship. Nodes are keyed by `group:artifact` coordinates for O(1)
/// lookup.
///
/// # Example
///
/// ```rust
/// use depscope::graph::{DependencyEdge, DependencyGraph};
///
/// let mut graph = DependencyGraph::new();
/// graph.add_artifact("com.example", "app", "1.0.0");
/// graph.add_artifact("com.google.guava", "guava", "32.1.2-jre");
///
/// let edge = DependencyEdge::new(false, "compile").unwrap();
/// assert!(graph.add_edge("com.example:app", "com.google.guava:guava", edge));
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// The underlying directed graph
    graph: DiGraph<Artifact, DependencyEdge>,
    /// Maps coordinates to their node indices for O(1) lookup
    node_indices: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Creates a new empty dependency graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        }
    }

    /// Creates a new graph with pre-allocated capacity.
    ///
    /// Use this when you know approximately how many nodes and edges
    /// will be added to avoid reallocations.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_indices: HashMap::with_capacity(nodes),
        }
    }

    /// Adds an artifact to the graph at depth 0.
    ///
    /// If an artifact with the same coordinates already exists, returns its
    /// existing node index without modification.
    pub fn add_artifact(&mut self, group_id: &str, artifact_id: &str, version: &str) -> NodeIndex {
        self.add_artifact_with_depth(group_id, artifact_id, version, 0)
    }

    /// Adds an artifact with a specific distance from the root.
    pub fn add_artifact_with_depth(
        &mut self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        depth: usize,
    ) -> NodeIndex {
        let coordinates = format!("{}:{}", group_id, artifact_id);
        if let Some(&idx) = self.node_indices.get(&coordinates) {
            return idx;
        }

        let node = Artifact::with_depth(group_id, artifact_id, version, depth);
        let idx = self.graph.add_node(node);
        self.node_indices.insert(coordinates, idx);
        idx
    }

    /// Adds a labeled edge between two artifacts.
    ///
    /// Creates an arc from `from` (the depender) to `to` (the dependency),
    /// carrying the given edge metadata. Both nodes must already exist.
    ///
    /// # Returns
    ///
    /// `true` if the edge was added, `false` if either endpoint doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depscope::graph::{DependencyEdge, DependencyGraph};
    ///
    /// let mut graph = DependencyGraph::new();
    /// graph.add_artifact("com.example", "app", "1.0.0");
    /// graph.add_artifact("junit", "junit", "4.13.2");
    ///
    /// let edge = DependencyEdge::new(false, "test").unwrap();
    /// assert!(graph.add_edge("com.example:app", "junit:junit", edge));
    /// assert!(!graph.add_edge("nonexistent:pkg", "junit:junit", edge));
    /// ```
    pub fn add_edge(&mut self, from: &str, to: &str, edge: DependencyEdge) -> bool {
        let from_idx = match self.node_indices.get(from) {
            Some(&idx) => idx,
            None => return false,
        };
        let to_idx = match self.node_indices.get(to) {
            Some(&idx) => idx,
            None => return false,
        };

        self.graph.add_edge(from_idx, to_idx, edge);
        true
    }

    /// Gets a reference to an artifact by its coordinates.
    pub fn artifact(&self, coordinates: &str) -> Option<&Artifact> {
        self.node_indices
            .get(coordinates)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    /// Gets the dependencies of an artifact (outgoing edges).
    ///
    /// Returns each dependency paired with the edge labeling the
    /// relationship.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depscope::graph::{DependencyEdge, DependencyGraph, ScopeKind};
    ///
    /// let mut graph = DependencyGraph::new();
    /// graph.add_artifact("com.example", "app", "1.0.0");
    /// graph.add_artifact("junit", "junit", "4.13.2");
    /// graph.add_edge(
    ///     "com.example:app",
    ///     "junit:junit",
    ///     DependencyEdge::new(false, "test").unwrap(),
    /// );
    ///
    /// let deps = graph.dependencies_of("com.example:app");
    /// assert_eq!(deps.len(), 1);
    /// assert_eq!(deps[0].1.scope(), ScopeKind::Test);
    /// ```
    pub fn dependencies_of(&self, coordinates: &str) -> Vec<(&Artifact, &DependencyEdge)> {
        let Some(&idx) = self.node_indices.get(coordinates) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .filter_map(|edge| {
                self.graph
                    .node_weight(edge.target())
                    .map(|node| (node, edge.weight()))
            })
            .collect()
    }

    /// Gets the dependents of an artifact (incoming edges).
    ///
    /// Returns each depender paired with the edge labeling the relationship.
    pub fn dependents_of(&self, coordinates: &str) -> Vec<(&Artifact, &DependencyEdge)> {
        let Some(&idx) = self.node_indices.get(coordinates) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Incoming)
            .filter_map(|edge| {
                self.graph
                    .node_weight(edge.source())
                    .map(|node| (node, edge.weight()))
            })
            .collect()
    }

    /// Gets the dependencies of an artifact restricted to one scope.
    pub fn dependencies_in_scope(&self, coordinates: &str, scope: ScopeKind) -> Vec<&Artifact> {
        self.dependencies_of(coordinates)
            .into_iter()
            .filter(|(_, edge)| edge.scope() == scope)
            .map(|(artifact, _)| artifact)
            .collect()
    }

    /// Gets all artifacts reached by at least one edge of the given scope.
    pub fn artifacts_in_scope(&self, scope: ScopeKind) -> Vec<&Artifact> {
        let mut seen = HashSet::new();
        let mut artifacts = Vec::new();

        for edge in self.graph.edge_references() {
            if edge.weight().scope() == scope && seen.insert(edge.target()) {
                if let Some(node) = self.graph.node_weight(edge.target()) {
                    artifacts.push(node);
                }
            }
        }

        artifacts
    }

    /// Counts the edges labeled with the given scope.
    pub fn scope_count(&self, scope: ScopeKind) -> usize {
        self.graph
            .edge_references()
            .filter(|edge| edge.weight().scope() == scope)
            .count()
    }

    /// Counts the edges marked optional.
    pub fn optional_count(&self) -> usize {
        self.graph
            .edge_references()
            .filter(|edge| edge.weight().is_optional())
            .count()
    }

    /// Gets all artifacts in the graph.
    pub fn all_artifacts(&self) -> Vec<&Artifact> {
        self.graph.node_weights().collect()
    }

    /// Gets artifacts at a specific depth (0 = the root project).
    pub fn artifacts_at_depth(&self, depth: usize) -> Vec<&Artifact> {
        self.graph
            .node_weights()
            .filter(|node| node.depth == depth)
            .collect()
    }

    /// Checks if the graph contains cycles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depscope::graph::{DependencyEdge, DependencyGraph, ScopeKind};
    ///
    /// let mut graph = DependencyGraph::new();
    /// graph.add_artifact("g", "a", "1.0.0");
    /// graph.add_artifact("g", "b", "1.0.0");
    /// let edge = DependencyEdge::with_scope(false, ScopeKind::Compile);
    /// graph.add_edge("g:a", "g:b", edge);
    /// graph.add_edge("g:b", "g:a", edge); // Creates a cycle
    ///
    /// assert!(graph.has_cycles());
    /// ```
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Detects and returns all cycles in the graph.
    ///
    /// Uses strongly connected components to find cycles, including
    /// single-node self-loops.
    ///
    /// # Returns
    ///
    /// A vector of cycles, where each cycle is a vector of coordinates.
    pub fn detect_cycles(&self) -> Vec<Vec<String>> {
        use petgraph::algo::tarjan_scc;

        let sccs = tarjan_scc(&self.graph);
        let mut cycles = Vec::new();

        for scc in sccs {
            // A strongly connected component is a cycle if it has more than one node,
            // or if it's a single node with a self-loop
            if scc.len() > 1 {
                let cycle: Vec<String> = scc
                    .iter()
                    .filter_map(|&idx| self.graph.node_weight(idx))
                    .map(Artifact::coordinates)
                    .collect();
                cycles.push(cycle);
            } else if scc.len() == 1 {
                let idx = scc[0];
                if self.graph.contains_edge(idx, idx) {
                    if let Some(node) = self.graph.node_weight(idx) {
                        cycles.push(vec![node.coordinates()]);
                    }
                }
            }
        }

        cycles
    }

    /// Returns the coordinates of every artifact that is part of a cycle.
    pub fn artifacts_in_cycles(&self) -> HashSet<String> {
        let mut cycle_nodes = HashSet::new();

        for cycle in self.detect_cycles() {
            for coordinates in cycle {
                cycle_nodes.insert(coordinates);
            }
        }

        cycle_nodes
    }

    /// Returns detailed cycle information including the cycle path.
    pub fn cycle_details(&self) -> Vec<CycleInfo> {
        self.detect_cycles()
            .into_iter()
            .map(|nodes| CycleInfo { nodes })
            .collect()
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Checks if an artifact exists in the graph.
    pub fn contains(&self, coordinates: &str) -> bool {
        self.node_indices.contains_key(coordinates)
    }

    /// Builds a graph from a manifest's declarations.
    ///
    /// The declaring project becomes the root node at depth 0; each
    /// declaration becomes a depth-1 node with an edge classified through the
    /// validating factory.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidScopeError`] when a declaration carries a scope token
    /// outside the closed vocabulary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depscope::graph::{DependencyGraph, ScopeKind};
    /// use depscope::parser::manifest::parse_str;
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
    /// let graph = DependencyGraph::from_manifest(&manifest).unwrap();
    ///
    /// assert_eq!(graph.node_count(), 2);
    /// assert_eq!(graph.scope_count(ScopeKind::Test), 1);
    /// ```
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, InvalidScopeError> {
        let decls = manifest.dependencies.as_deref().unwrap_or(&[]);
        let mut graph = Self::with_capacity(decls.len() + 1, decls.len());

        let root_group = manifest.group_id.as_deref().unwrap_or("unknown");
        let root_artifact = manifest.artifact_id.as_deref().unwrap_or("unknown");
        let root_version = manifest.version.as_deref().unwrap_or("0.0.0");
        graph.add_artifact(root_group, root_artifact, root_version);
        let root_coordinates = format!("{}:{}", root_group, root_artifact);

        for decl in decls {
            let edge = DependencyEdge::new(decl.optional, decl.scope_token())?;
            graph.add_artifact_with_depth(&decl.group_id, &decl.artifact_id, &decl.version, 1);
            graph.add_edge(&root_coordinates, &decl.coordinates(), edge);
        }

        Ok(graph)
    }
}

/// Information about a detected circular dependency cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleInfo {
    /// The coordinates in the cycle (the last connects back to the first)
    pub nodes: Vec<String>,
}

impl CycleInfo {
    /// Returns a formatted string representation of the cycle path.
    ///
    /// For example: "g:a -> g:b -> g:a"
    pub fn cycle_path(&self) -> String {
        if self.nodes.is_empty() {
            return String::new();
        }
        let mut path = self.nodes.join(" -> ");
        path.push_str(" -> ");
        path.push_str(&self.nodes[0]);
        path
    }

    /// Returns the number of artifacts in the cycle.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the cycle is empty (should not happen in practice).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
