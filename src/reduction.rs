//! Transitive edge reduction over a [`RevSymGraph`].
//!
//! A direct edge `v -> x` is redundant when a two-hop path `v -> w -> x`
//! already reaches the same new sequence within a fuzz-bounded budget. The
//! pass walks every oriented vertex once, marks its redundant successors in a
//! shared marker array, then deletes the marked edges together with their
//! mirrors. Deleting an edge on one strand removes it from the opposite
//! strand's adjacency too, so the reverse sweep of the outer loop never
//! revisits an overlap that is already gone.

use log::{debug, info};

use crate::error::GraphError;
use crate::graph::RevSymGraph;
use crate::index::{EdgeId, OrientedVertex, OVERLAP_LENGTH_KEY, READ_LENGTH_KEY};

/// Tuning for a reduction pass.
#[derive(Debug, Clone)]
pub struct ReductionConfig {
    /// Tolerance, in sequence-length units, absorbing imprecision of the
    /// upstream overlap detector.
    pub fuzz: usize,
    /// Vertex attribute key holding read lengths.
    pub read_len_key: String,
    /// Edge attribute key holding overlap lengths.
    pub ov_len_key: String,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            fuzz: 10,
            read_len_key: READ_LENGTH_KEY.to_string(),
            ov_len_key: OVERLAP_LENGTH_KEY.to_string(),
        }
    }
}

impl ReductionConfig {
    /// Default attribute keys with an explicit fuzz.
    pub fn with_fuzz(fuzz: usize) -> Self {
        Self {
            fuzz,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), GraphError> {
        if self.read_len_key.is_empty() {
            return Err(GraphError::Configuration(
                "read length attribute key is empty".to_string(),
            ));
        }
        if self.ov_len_key.is_empty() {
            return Err(GraphError::Configuration(
                "overlap length attribute key is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-vertex marker state, reset after each outer iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Vacant,
    InPlay,
    Eliminated,
}

/// Remove transitively redundant edges from `graph` in place.
///
/// Returns the number of overlaps removed (an edge and its mirror count
/// once). The pass is single-threaded and deterministic: successor lists are
/// materialized before mutation and suffix orderings use stable sorts, so
/// ties keep their adjacency order.
///
/// Elimination applies two rules to each candidate `x` reached via
/// `v -> w -> x` (both `w` and `x` direct neighbors of `v`):
/// 1. if `w` is still in play and `suffix(v,w) + suffix(w,x)` fits within the
///    longest one-hop suffix plus `fuzz`, the two-hop path covers `x`;
/// 2. independently, `x` is eliminated whenever `suffix(w,x) < fuzz` or `x`
///    is `w`'s nearest surviving neighbor (`k == 0`).
/// The second rule fires even when the combined-budget test fails; changing
/// it would change which edges survive, so it stays as is.
pub fn transitive_reduction(
    graph: &mut RevSymGraph,
    config: &ReductionConfig,
) -> Result<usize, GraphError> {
    config.validate()?;

    // One slot per oriented vertex, allocated once and reset per outer
    // iteration.
    let mut marks = vec![Mark::Vacant; 2 * graph.vertices().card_index()];
    let mut removed = 0usize;

    let order: Vec<OrientedVertex> = graph.vertices().iter().collect();
    for v in order {
        // Materialize the one-hop neighborhood with overhang lengths before
        // touching the marker array.
        let mut one_hop: Vec<(OrientedVertex, usize)> = Vec::new();
        for &(w, id) in graph.edges().succs(v)? {
            one_hop.push((w, suffix_len(graph, w, id, config)?));
        }
        one_hop.sort_by_key(|&(_, suffix)| suffix);

        let longest = match one_hop.last() {
            Some(&(_, suffix)) => suffix + config.fuzz,
            None => 0,
        };

        for &(w, _) in &one_hop {
            marks[w.linear()] = Mark::InPlay;
        }

        for &(w, w_suffix) in &one_hop {
            let mut two_hop: Vec<(OrientedVertex, usize)> = Vec::new();
            for &(x, id) in graph.edges().succs(w)? {
                if marks[x.linear()] == Mark::InPlay {
                    two_hop.push((x, suffix_len(graph, x, id, config)?));
                }
            }
            two_hop.sort_by_key(|&(_, suffix)| suffix);

            for (k, &(x, x_suffix)) in two_hop.iter().enumerate() {
                if marks[w.linear()] == Mark::InPlay && w_suffix + x_suffix <= longest {
                    marks[x.linear()] = Mark::Eliminated;
                }
                if x_suffix < config.fuzz || k == 0 {
                    marks[x.linear()] = Mark::Eliminated;
                }
            }
        }

        // Deletions happen only after all markings for `v` are final, on a
        // materialized copy of the successor list.
        let neighbors: Vec<(OrientedVertex, EdgeId)> = graph.edges().succs(v)?.to_vec();
        for (w, id) in neighbors {
            if marks[w.linear()] == Mark::Eliminated {
                graph.edges_mut().delete(v, w, id)?;
                removed += 1;
            }
        }

        // Every marked vertex sits in `one_hop`, so this restores the whole
        // array to vacant.
        for &(w, _) in &one_hop {
            marks[w.linear()] = Mark::Vacant;
        }

        debug!(
            "reduced vertex {}{}: {} neighbors",
            v.index(),
            match v.orientation() {
                crate::index::Orientation::Forward => '+',
                crate::index::Orientation::Reverse => '-',
            },
            one_hop.len(),
        );
    }

    info!(
        "transitive reduction removed {} overlaps, {} remain",
        removed,
        graph.edges().card_overlaps(),
    );
    Ok(removed)
}

/// Overhang of `w` beyond the overlap carried by `edge`: the amount of new
/// sequence reached by following the edge into `w`.
fn suffix_len(
    graph: &RevSymGraph,
    w: OrientedVertex,
    edge: EdgeId,
    config: &ReductionConfig,
) -> Result<usize, GraphError> {
    let read_len = graph.vertices().attr(w.index(), &config.read_len_key)?;
    let ov_len = graph.edges().attr(edge, &config.ov_len_key)?;
    Ok(read_len.saturating_sub(ov_len))
}
