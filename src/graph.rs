//! Reversible-symmetric overlap graph containers.
//!
//! Every overlap between two oriented reads is represented by a pair of
//! mirror edges: `u -> v` and `reverse(v) -> reverse(u)`, sharing one
//! [`EdgeId`] and one attribute record. [`EdgeStore`] keeps one successor
//! list per oriented vertex and writes both records on insertion, so the
//! symmetry invariant is structural rather than checked after the fact.

use crate::attributes::{AttrLookup, AttributeStore};
use crate::error::GraphError;
use crate::index::{EdgeId, Orientation, OrientedVertex};

/// Per-read attribute storage plus the vertex census.
///
/// Attributes are keyed by the underlying read index and shared by both
/// orientations of the read.
#[derive(Debug, Clone, Default)]
pub struct VertexStore {
    attributes: AttributeStore,
    card: usize,
}

impl VertexStore {
    /// Number of distinct read indices.
    pub fn card_index(&self) -> usize {
        self.card
    }

    /// Number of oriented vertices (two per read index).
    pub fn len(&self) -> usize {
        2 * self.card
    }

    pub fn is_empty(&self) -> bool {
        self.card == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.card
    }

    /// Iterate over oriented vertices in index order, forward strand first.
    /// The order is stable for the lifetime of the graph.
    pub fn iter(&self) -> impl Iterator<Item = OrientedVertex> + '_ {
        (0..self.card).flat_map(|index| {
            [
                OrientedVertex::forward(index),
                OrientedVertex::reverse_strand(index),
            ]
        })
    }

    /// Register a vertex attribute column.
    pub fn new_attr(&mut self, name: &str) {
        self.attributes.new_attr(name);
    }

    /// Set an attribute for one read index.
    pub fn set_attr(&mut self, index: usize, name: &str, value: usize) -> Result<(), GraphError> {
        if index >= self.card {
            return Err(GraphError::no_vertex(index));
        }
        if !self.attributes.set(index, name, value) {
            return Err(GraphError::missing_vertex_attr(name, index));
        }
        Ok(())
    }

    /// Attribute lookup for one read index. Unset attributes are an error,
    /// never a default.
    pub fn attr(&self, index: usize, name: &str) -> Result<usize, GraphError> {
        match self.attributes.get(index, name) {
            AttrLookup::Found(value) => Ok(value),
            AttrLookup::NoAttribute => Err(GraphError::missing_vertex_attr(name, index)),
            AttrLookup::NoKey => Err(GraphError::no_vertex(index)),
        }
    }

    /// Iterate over the set attributes of one read index.
    pub fn attrs(
        &self,
        index: usize,
    ) -> Result<impl Iterator<Item = (&str, usize)>, GraphError> {
        if index >= self.card {
            return Err(GraphError::no_vertex(index));
        }
        Ok(self.attributes.attrs(index))
    }

    fn add(&mut self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        self.card += count;
        self.attributes.add_keys(count);
        Some(self.card - 1)
    }
}

/// Adjacency and attribute storage for overlap edges.
#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    /// Successor lists indexed by [`OrientedVertex::linear`]. Each overlap
    /// contributes exactly two records: `(v, id)` under `u` and
    /// `(reverse(u), id)` under `reverse(v)`.
    succs: Vec<Vec<(OrientedVertex, EdgeId)>>,
    attributes: AttributeStore,
    /// Number of overlaps (mirror pairs count once).
    card: usize,
    next_id: usize,
}

impl EdgeStore {
    /// Number of oriented edges (two per overlap).
    pub fn len(&self) -> usize {
        2 * self.card
    }

    pub fn is_empty(&self) -> bool {
        self.card == 0
    }

    /// Number of overlaps, i.e. mirror pairs counted once.
    pub fn card_overlaps(&self) -> usize {
        self.card
    }

    /// Direct out-neighbors of `v` with the connecting edge id. Slice
    /// iteration is lazy, finite and restartable.
    pub fn succs(&self, v: OrientedVertex) -> Result<&[(OrientedVertex, EdgeId)], GraphError> {
        self.succs
            .get(v.linear())
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::no_vertex(v.index()))
    }

    /// Direct in-neighbors of `v`, derived from the mirror successor list.
    pub fn preds(
        &self,
        v: OrientedVertex,
    ) -> Result<impl Iterator<Item = (OrientedVertex, EdgeId)> + '_, GraphError> {
        let mirror = self.succs(v.reverse())?;
        Ok(mirror.iter().map(|&(w, id)| (w.reverse(), id)))
    }

    /// True if the oriented edge `u -> v` is present.
    pub fn contains(&self, u: OrientedVertex, v: OrientedVertex) -> bool {
        self.succs
            .get(u.linear())
            .is_some_and(|adj| adj.iter().any(|&(w, _)| w == v))
    }

    /// Edge ids connecting the ordered pair `u -> v`. Under the uniqueness
    /// invariant this yields at most one id.
    pub fn edge_ids(
        &self,
        u: OrientedVertex,
        v: OrientedVertex,
    ) -> Result<impl Iterator<Item = EdgeId> + '_, GraphError> {
        let adj = self.succs(u)?;
        Ok(adj
            .iter()
            .filter(move |&&(w, _)| w == v)
            .map(|&(_, id)| id))
    }

    /// Iterate over all oriented edges as `(u, v, id)`. Each overlap appears
    /// twice, once per orientation.
    pub fn iter(&self) -> impl Iterator<Item = (OrientedVertex, OrientedVertex, EdgeId)> + '_ {
        self.succs.iter().enumerate().flat_map(|(linear, adj)| {
            let u = OrientedVertex::new(linear >> 1, Orientation::from_int(linear & 1));
            adj.iter().map(move |&(v, id)| (u, v, id))
        })
    }

    /// Register an edge attribute column.
    pub fn new_attr(&mut self, name: &str) {
        self.attributes.new_attr(name);
    }

    /// Set an attribute for an edge id; the mirror edge shares the record.
    pub fn set_attr(&mut self, id: EdgeId, name: &str, value: usize) -> Result<(), GraphError> {
        if id.as_usize() >= self.next_id {
            return Err(GraphError::InvariantViolation(format!(
                "no edge with id {}",
                id.as_usize()
            )));
        }
        if !self.attributes.set(id.as_usize(), name, value) {
            return Err(GraphError::missing_edge_attr(name, id.as_usize()));
        }
        Ok(())
    }

    /// Attribute lookup by edge id. Attributes of deleted edges remain
    /// recorded.
    pub fn attr(&self, id: EdgeId, name: &str) -> Result<usize, GraphError> {
        match self.attributes.get(id.as_usize(), name) {
            AttrLookup::Found(value) => Ok(value),
            AttrLookup::NoAttribute => Err(GraphError::missing_edge_attr(name, id.as_usize())),
            AttrLookup::NoKey => Err(GraphError::InvariantViolation(format!(
                "no edge with id {}",
                id.as_usize()
            ))),
        }
    }

    /// Add the overlap `u -> v` together with its mirror, returning the
    /// shared edge id.
    ///
    /// Rejects duplicate ordered pairs (uniqueness invariant) and self-mirror
    /// overlaps `u -> reverse(u)`, which would be their own mirror edge.
    pub fn add(&mut self, u: OrientedVertex, v: OrientedVertex) -> Result<EdgeId, GraphError> {
        let card = self.succs.len() / 2;
        if u.index() >= card {
            return Err(GraphError::no_vertex(u.index()));
        }
        if v.index() >= card {
            return Err(GraphError::no_vertex(v.index()));
        }
        if u == v.reverse() {
            return Err(GraphError::InvariantViolation(format!(
                "overlap {u:?} -> {v:?} is its own mirror"
            )));
        }
        if self.contains(u, v) {
            return Err(GraphError::InvariantViolation(format!(
                "duplicate overlap {u:?} -> {v:?}"
            )));
        }
        let id = EdgeId(self.next_id);
        self.next_id += 1;
        self.succs[u.linear()].push((v, id));
        self.succs[v.reverse().linear()].push((u.reverse(), id));
        self.card += 1;
        self.attributes.add_keys(1);
        Ok(id)
    }

    /// Remove the edge `u -> v` identified by `id` and its mirror
    /// `reverse(v) -> reverse(u)` as one atomic step.
    ///
    /// Deleting an edge that is not present is an invariant violation, never
    /// a silent no-op. Removal swaps the last list entry into the vacated
    /// slot, so successor order is not preserved across deletions.
    pub fn delete(
        &mut self,
        u: OrientedVertex,
        v: OrientedVertex,
        id: EdgeId,
    ) -> Result<(), GraphError> {
        self.remove_record(u, v, id)?;
        // By symmetry the mirror record must exist; a miss here means the
        // containers were corrupted.
        self.remove_record(v.reverse(), u.reverse(), id)?;
        self.card -= 1;
        Ok(())
    }

    fn remove_record(
        &mut self,
        from: OrientedVertex,
        to: OrientedVertex,
        id: EdgeId,
    ) -> Result<(), GraphError> {
        let adj = self
            .succs
            .get_mut(from.linear())
            .ok_or_else(|| GraphError::no_vertex(from.index()))?;
        let position = adj
            .iter()
            .position(|&(w, e)| w == to && e == id)
            .ok_or_else(|| {
                GraphError::InvariantViolation(format!(
                    "no edge {from:?} -> {to:?} with id {}",
                    id.as_usize()
                ))
            })?;
        adj.swap_remove(position);
        Ok(())
    }

    fn add_vertices(&mut self, count: usize) {
        self.succs
            .resize_with(self.succs.len() + 2 * count, Vec::new);
    }
}

/// The reversible-symmetric overlap graph: vertex and edge containers under
/// one owner.
///
/// The graph is built once by an upstream overlap detector, reduced in place
/// by [`crate::transitive_reduction`], and handed on to a downstream path
/// extractor. Mutation requires `&mut`, so a reduction pass has exclusive
/// ownership of both stores for its duration.
#[derive(Debug, Clone, Default)]
pub struct RevSymGraph {
    vertices: VertexStore,
    edges: EdgeStore,
}

impl RevSymGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with `reads` vertices and the read-length / overlap-length
    /// attribute columns already registered under the default keys.
    pub fn with_reads(reads: usize) -> Self {
        let mut graph = Self::new();
        graph.vertices.new_attr(crate::index::READ_LENGTH_KEY);
        graph.edges.new_attr(crate::index::OVERLAP_LENGTH_KEY);
        let _ = graph.add_vertices(reads);
        graph
    }

    /// Add `count` read indices, keeping the edge adjacency sized to match.
    /// Returns the last index added, or `None` when `count` is zero.
    pub fn add_vertices(&mut self, count: usize) -> Option<usize> {
        self.edges.add_vertices(count);
        self.vertices.add(count)
    }

    pub fn vertices(&self) -> &VertexStore {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut VertexStore {
        &mut self.vertices
    }

    pub fn edges(&self) -> &EdgeStore {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut EdgeStore {
        &mut self.edges
    }
}
