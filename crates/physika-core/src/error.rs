//! Error types for physika-rs.

use std::fmt;

use thiserror::Error;

/// Which index space an out-of-range access was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// A global vertex index into the vertex buffer.
    Vertex,
    /// An element index.
    Element,
    /// A vertex index local to one element.
    LocalVertex,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vertex => "vertex",
            Self::Element => "element",
            Self::LocalVertex => "local vertex",
        };
        f.write_str(name)
    }
}

/// The main error type for physika-rs operations.
#[derive(Error, Debug)]
pub enum PhysikaError {
    /// An index lies outside `[0, bound)`.
    ///
    /// This is a usage error: the caller controls the index and the domain
    /// size is fixed once a mesh is built.
    #[error("{kind} index {index} out of range (must be < {bound})")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        bound: usize,
    },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PhysikaError {
    /// Shorthand for building an [`PhysikaError::IndexOutOfRange`].
    #[must_use]
    pub fn out_of_range(kind: IndexKind, index: usize, bound: usize) -> Self {
        Self::IndexOutOfRange { kind, index, bound }
    }

    /// Returns true if this is an out-of-range usage error.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// A specialized Result type for physika-rs operations.
pub type Result<T> = std::result::Result<T, PhysikaError>;

/// Checks `index < bound`, logging and returning `IndexOutOfRange` otherwise.
pub fn check_index(kind: IndexKind, index: usize, bound: usize) -> Result<()> {
    if index < bound {
        Ok(())
    } else {
        log::warn!("{kind} index {index} out of range (bound {bound})");
        Err(PhysikaError::out_of_range(kind, index, bound))
    }
}
