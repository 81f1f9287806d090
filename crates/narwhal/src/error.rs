use crate::store::VertexId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex already exists: {name}")]
    DuplicateVertex { name: String },

    #[error("vertex not found: {name}")]
    VertexNotFound { name: String },

    #[error("vertex id {id} is out of range (graph has {len} vertices)")]
    VertexOutOfRange { id: VertexId, len: usize },

    #[error("no path exists between {from} and {to}")]
    NoPathExists { from: String, to: String },

    #[error("refusing to set a diagonal edge on vertex {id}; the diagonal is owned by the solver")]
    DiagonalEdge { id: VertexId },

    #[error("graph has pending mutations; call solve() before querying")]
    Unsolved,

    #[error("weight matrix has the wrong shape: expected {expected}, found {found}")]
    MatrixShape { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
