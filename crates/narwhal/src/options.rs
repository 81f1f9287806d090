//! Engine configuration options.

/// What `set_edge(u, u, _)` does. The diagonal is always `0` after a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagonalPolicy {
    /// Fail with [`Error::DiagonalEdge`](crate::Error::DiagonalEdge).
    #[default]
    Reject,
    /// Accept the call and leave the store untouched.
    Ignore,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    pub diagonal: DiagonalPolicy,
    /// Fail queries with [`Error::Unsolved`](crate::Error::Unsolved) while mutations are pending.
    pub strict_queries: bool,
}
