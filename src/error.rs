/// Errors surfaced by the graph containers and the reduction pass.
///
/// All variants are fatal for the current operation: this is pure in-memory
/// computation with nothing to retry.
#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    /// Invalid reduction configuration (e.g. an empty attribute key).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A vertex or edge lacks a required attribute at lookup time.
    #[error("missing {kind} attribute '{key}' for index {index}")]
    MissingAttribute {
        kind: &'static str,
        key: String,
        index: usize,
    },

    /// An operation would break the reverse-symmetry or uniqueness invariant,
    /// or targets a vertex/edge that does not exist.
    #[error("graph invariant violated: {0}")]
    InvariantViolation(String),
}

impl GraphError {
    pub(crate) fn missing_vertex_attr(key: &str, index: usize) -> Self {
        Self::MissingAttribute {
            kind: "vertex",
            key: key.to_string(),
            index,
        }
    }

    pub(crate) fn missing_edge_attr(key: &str, index: usize) -> Self {
        Self::MissingAttribute {
            kind: "edge",
            key: key.to_string(),
            index,
        }
    }

    pub(crate) fn no_vertex(index: usize) -> Self {
        Self::InvariantViolation(format!("no vertex with index {index}"))
    }
}
