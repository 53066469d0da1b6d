//! Sparse-matrix export of the overlap graph for downstream consumers.

use sprs::{CsMat, TriMat};

use crate::error::GraphError;
use crate::graph::RevSymGraph;

/// Build a `2n x 2n` CSR matrix over linear oriented-vertex indices whose
/// entries are overlap lengths.
///
/// Both orientations of every overlap are materialized, so the matrix of a
/// well-formed graph equals its own mirror under the linear-index
/// reversal `i ^ 1`, `j ^ 1` with rows and columns swapped.
pub fn overlap_matrix(graph: &RevSymGraph, ov_len_key: &str) -> Result<CsMat<usize>, GraphError> {
    let n = graph.vertices().len();
    let mut tri = TriMat::new((n, n));
    for (u, v, id) in graph.edges().iter() {
        let ov_len = graph.edges().attr(id, ov_len_key)?;
        tri.add_triplet(u.linear(), v.linear(), ov_len);
    }
    Ok(tri.to_csr())
}
