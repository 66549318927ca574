//! depscope - Scope-aware dependency graph analyzer for package manifests
//!
//! This crate models the dependency graph produced by resolving a manifest's
//! declarations, labeling each relationship with its scope and optionality,
//! and provides reporting over the classified graph.

pub mod export;
pub mod graph;
pub mod parser;
