//! Edge metadata for dependency relationships.
//!
//! Every arc in a [`DependencyGraph`](super::DependencyGraph) is labeled with a
//! [`DependencyEdge`]: whether the dependency is optional, and under which
//! resolution scope the relationship applies. The scope vocabulary in manifests
//! is an open string for extensibility, so [`ScopeKind::classify`] is the single
//! point where raw tokens are normalized into the closed enumeration that the
//! rest of the crate branches over.

use std::fmt;
use std::str::FromStr;

/// The resolution scope of a dependency relationship.
///
/// A closed enumeration of the recognized scope tokens. Downstream graph logic
/// matches exhaustively over these variants; nothing outside this set survives
/// edge construction.
///
/// # Example
///
/// ```rust
/// use depscope::graph::ScopeKind;
///
/// assert_eq!(ScopeKind::classify("runtime"), Some(ScopeKind::Runtime));
/// assert_eq!(ScopeKind::classify("RUNTIME"), None); // tokens are case-sensitive
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// Needed to compile the depender and available on all downstream paths.
    Compile,
    /// Needed at compile time but supplied by the runtime environment.
    Provided,
    /// Like provided, but resolved from an explicit local path.
    System,
    /// Not needed for compilation, required when the depender executes.
    Runtime,
    /// Only needed to compile and run the depender's tests.
    Test,
}

impl ScopeKind {
    /// All recognized scopes, in manifest-documentation order.
    pub const ALL: [ScopeKind; 5] = [
        ScopeKind::Compile,
        ScopeKind::Provided,
        ScopeKind::System,
        ScopeKind::Runtime,
        ScopeKind::Test,
    ];

    /// Classifies a raw scope token into a [`ScopeKind`].
    ///
    /// Pure lookup over the fixed token table; matching is exact and
    /// case-sensitive. Returns `None` for any token outside the vocabulary,
    /// leaving the caller to decide whether that is fatal (see
    /// [`DependencyEdge::new`]).
    ///
    /// # Example
    ///
    /// ```rust
    /// use depscope::graph::ScopeKind;
    ///
    /// assert_eq!(ScopeKind::classify("compile"), Some(ScopeKind::Compile));
    /// assert_eq!(ScopeKind::classify("import"), None);
    /// ```
    pub fn classify(token: &str) -> Option<ScopeKind> {
        match token {
            "compile" => Some(ScopeKind::Compile),
            "provided" => Some(ScopeKind::Provided),
            "system" => Some(ScopeKind::System),
            "runtime" => Some(ScopeKind::Runtime),
            "test" => Some(ScopeKind::Test),
            _ => None,
        }
    }

    /// Returns the canonical manifest token for this scope.
    pub fn token(&self) -> &'static str {
        match self {
            ScopeKind::Compile => "compile",
            ScopeKind::Provided => "provided",
            ScopeKind::System => "system",
            ScopeKind::Runtime => "runtime",
            ScopeKind::Test => "test",
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ScopeKind {
    type Err = InvalidScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScopeKind::classify(s).ok_or_else(|| InvalidScopeError {
            token: s.to_string(),
        })
    }
}

/// Error raised when a scope token falls outside the closed vocabulary.
///
/// Raised only at edge construction (or `FromStr`), never by
/// [`ScopeKind::classify`] itself. Manifest parsers are expected to validate
/// scope tokens against the same vocabulary, so hitting this error means the
/// caller handed over a token it should have rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized dependency scope: '{token}'")]
pub struct InvalidScopeError {
    /// The token that failed classification.
    pub token: String,
}

/// Metadata labeling one arc of the dependency graph.
///
/// An immutable value pairing optionality with a classified scope. The edge
/// holds no reference to its endpoint nodes; the graph owns the pairing. Fields
/// are private and the type is `Copy`, so a constructed edge can be shared
/// across concurrent readers without synchronization and never changes after
/// [`DependencyEdge::new`] returns.
///
/// # Example
///
/// ```rust
/// use depscope::graph::{DependencyEdge, ScopeKind};
///
/// let edge = DependencyEdge::new(false, "compile").unwrap();
/// assert!(!edge.is_optional());
/// assert_eq!(edge.scope(), ScopeKind::Compile);
///
/// assert!(DependencyEdge::new(false, "import").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    is_optional: bool,
    scope: ScopeKind,
}

impl DependencyEdge {
    /// Builds an edge from a raw scope token, validating in one step.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidScopeError`] when `raw_scope` does not classify into
    /// the closed vocabulary.
    pub fn new(is_optional: bool, raw_scope: &str) -> Result<Self, InvalidScopeError> {
        let scope = raw_scope.parse::<ScopeKind>()?;
        Ok(Self { is_optional, scope })
    }

    /// Builds an edge from an already-classified scope. Infallible.
    pub fn with_scope(is_optional: bool, scope: ScopeKind) -> Self {
        Self { is_optional, scope }
    }

    /// Whether the depender tolerates this dependency being absent.
    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// The classified scope of this relationship.
    pub fn scope(&self) -> ScopeKind {
        self.scope
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_optional {
            write!(f, "{} (optional)", self.scope)
        } else {
            write!(f, "{}", self.scope)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_tokens() {
        assert_eq!(ScopeKind::classify("compile"), Some(ScopeKind::Compile));
        assert_eq!(ScopeKind::classify("provided"), Some(ScopeKind::Provided));
        assert_eq!(ScopeKind::classify("system"), Some(ScopeKind::System));
        assert_eq!(ScopeKind::classify("runtime"), Some(ScopeKind::Runtime));
        assert_eq!(ScopeKind::classify("test"), Some(ScopeKind::Test));
    }

    #[test]
    fn test_classify_unrecognized_tokens() {
        assert_eq!(ScopeKind::classify("import"), None);
        assert_eq!(ScopeKind::classify(""), None);
        assert_eq!(ScopeKind::classify("Compile"), None); // case mismatch
        assert_eq!(ScopeKind::classify("RUNTIME"), None);
        assert_eq!(ScopeKind::classify("compile "), None); // no trimming
    }

    #[test]
    fn test_classify_is_idempotent() {
        for scope in ScopeKind::ALL {
            assert_eq!(
                ScopeKind::classify(scope.token()),
                ScopeKind::classify(scope.token())
            );
        }
    }

    #[test]
    fn test_token_round_trips_through_classify() {
        for scope in ScopeKind::ALL {
            assert_eq!(ScopeKind::classify(scope.token()), Some(scope));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("test".parse::<ScopeKind>().unwrap(), ScopeKind::Test);

        let err = "import".parse::<ScopeKind>().unwrap_err();
        assert_eq!(err.token, "import");
    }

    #[test]
    fn test_edge_new_all_tokens_both_flags() {
        for scope in ScopeKind::ALL {
            for optional in [true, false] {
                let edge = DependencyEdge::new(optional, scope.token()).unwrap();
                assert_eq!(edge.is_optional(), optional);
                assert_eq!(edge.scope(), scope);
            }
        }
    }

    #[test]
    fn test_edge_new_required_compile() {
        let edge = DependencyEdge::new(false, "compile").unwrap();
        assert!(!edge.is_optional());
        assert_eq!(edge.scope(), ScopeKind::Compile);
    }

    #[test]
    fn test_edge_new_optional_test() {
        let edge = DependencyEdge::new(true, "test").unwrap();
        assert!(edge.is_optional());
        assert_eq!(edge.scope(), ScopeKind::Test);
    }

    #[test]
    fn test_edge_new_rejects_unrecognized() {
        let err = DependencyEdge::new(false, "import").unwrap_err();
        assert_eq!(err.token, "import");

        assert!(DependencyEdge::new(true, "").is_err());
        assert!(DependencyEdge::new(true, "Test").is_err());
    }

    #[test]
    fn test_edge_with_scope() {
        let edge = DependencyEdge::with_scope(true, ScopeKind::Runtime);
        assert!(edge.is_optional());
        assert_eq!(edge.scope(), ScopeKind::Runtime);
    }

    #[test]
    fn test_edge_copies_are_independent_reads() {
        // Copy semantics: handing the edge around never exposes a mutator.
        let edge = DependencyEdge::new(false, "provided").unwrap();
        let copy = edge;
        assert_eq!(copy, edge);
        assert_eq!(copy.scope(), ScopeKind::Provided);
    }

    #[test]
    fn test_invalid_scope_error_display() {
        let err = InvalidScopeError {
            token: "import".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized dependency scope: 'import'");
    }

    #[test]
    fn test_scope_kind_display() {
        assert_eq!(format!("{}", ScopeKind::Compile), "compile");
        assert_eq!(format!("{}", ScopeKind::Provided), "provided");
        assert_eq!(format!("{}", ScopeKind::System), "system");
        assert_eq!(format!("{}", ScopeKind::Runtime), "runtime");
        assert_eq!(format!("{}", ScopeKind::Test), "test");
    }

    #[test]
    fn test_edge_display() {
        let required = DependencyEdge::new(false, "runtime").unwrap();
        assert_eq!(format!("{}", required), "runtime");

        let optional = DependencyEdge::new(true, "runtime").unwrap();
        assert_eq!(format!("{}", optional), "runtime (optional)");
    }
}
