//! strandgraph: reversible-symmetric overlap graph with transitive reduction.
//!
//! This crate provides the string-graph simplification step of an
//! overlap-layout-consensus assembler: a graph of oriented reads whose edges
//! carry overlap lengths and always exist in mirror pairs (`u -> v` together
//! with `reverse(v) -> reverse(u)`), plus the reduction pass that deletes
//! edges made redundant by an equivalent-or-better two-hop path.
//!
//! Overlap detection, sequence I/O and contig extraction live outside this
//! crate: an upstream detector builds the [`RevSymGraph`], and a downstream
//! path extractor consumes it after [`transitive_reduction`] has mutated it
//! in place.
//!
//! # Example
//!
//! ```
//! use strandgraph::{
//!     transitive_reduction, OrientedVertex, ReductionConfig, RevSymGraph,
//!     OVERLAP_LENGTH_KEY, READ_LENGTH_KEY,
//! };
//!
//! let mut graph = RevSymGraph::with_reads(3);
//! for index in 0..3 {
//!     graph.vertices_mut().set_attr(index, READ_LENGTH_KEY, 100)?;
//! }
//! for (u, v, ov_len) in [(0, 1, 80), (1, 2, 80), (0, 2, 50)] {
//!     let id = graph
//!         .edges_mut()
//!         .add(OrientedVertex::forward(u), OrientedVertex::forward(v))?;
//!     graph.edges_mut().set_attr(id, OVERLAP_LENGTH_KEY, ov_len)?;
//! }
//!
//! let removed = transitive_reduction(&mut graph, &ReductionConfig::default())?;
//! assert_eq!(removed, 1); // the direct 0 -> 2 shortcut is transitive
//! # Ok::<(), strandgraph::GraphError>(())
//! ```

pub mod attributes;
pub mod error;
pub mod graph;
pub mod index;
pub mod matrix;
pub mod reduction;

pub use attributes::AttributeStore;
pub use error::GraphError;
pub use graph::{EdgeStore, RevSymGraph, VertexStore};
pub use index::{EdgeId, Orientation, OrientedVertex, OVERLAP_LENGTH_KEY, READ_LENGTH_KEY};
pub use matrix::overlap_matrix;
pub use reduction::{transitive_reduction, ReductionConfig};
