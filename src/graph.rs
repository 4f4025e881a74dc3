/*!
# Labelled Graph

[`LabeledGraph`] is the label-addressed face of the crate: a [`VertexStore`]
for `label <-> index` translation plus an [`AdjMatrix`] for the adjacency
itself, kept in lockstep behind a closed operation contract. The matrix and
the index map are private on purpose; handing them out mutably would let
callers break the symmetry and compaction invariants.

Every successful mutation bumps a version counter. Derived structures (the
all-pairs tables of [`PathEngine`](crate::engine::PathEngine)) remember the
version they were computed for and treat any mismatch as stale.
*/

use crate::{edge::*, error::GraphError, node::*, ops::*, repr::*};

/// An undirected, unweighted graph whose vertices are unique labels.
///
/// Indices are dense in `0..n` and reported alongside mutations, but they are
/// only stable until the next vertex removal; the authoritative handle on a
/// vertex is its label.
#[derive(Clone, Default)]
pub struct LabeledGraph<L: Label> {
    store: VertexStore<L>,
    matrix: AdjMatrix,
    version: u64,
}

impl<L: Label> LabeledGraph<L> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self {
            store: VertexStore::new(),
            matrix: AdjMatrix::new(),
            version: 0,
        }
    }

    /// Creates an empty graph with matrix capacity for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: VertexStore::new(),
            matrix: AdjMatrix::with_capacity(capacity),
            version: 0,
        }
    }

    /// Returns the mutation counter. It increases on every successful vertex
    /// or edge mutation and on [`clear`](Self::clear); equal versions imply an
    /// unchanged graph.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Adds a vertex and returns its assigned index.
    ///
    /// Rejected with [`GraphError::InvalidLabel`] if the label fails
    /// [`Label::is_valid`] and with [`GraphError::DuplicateVertex`] if an equal
    /// label is already present. The graph is unchanged on rejection.
    pub fn try_add_vertex(&mut self, label: L) -> Result<Node, GraphError> {
        if !label.is_valid() {
            return Err(GraphError::InvalidLabel);
        }
        let u = self
            .store
            .try_insert(label)
            .ok_or(GraphError::DuplicateVertex)?;

        let matrix_index = self.matrix.push_node();
        debug_assert_eq!(u, matrix_index);

        self.version += 1;
        Ok(u)
    }

    /// Removes a vertex and all its edges, returning the index it occupied.
    /// All vertices with larger indices shift down by one; indices cached
    /// before the call are invalid afterwards.
    pub fn try_remove_vertex(&mut self, label: &L) -> Result<Node, GraphError> {
        let u = self.store.remove(label).ok_or(GraphError::VertexNotFound)?;
        self.matrix.remove_node(u);
        self.version += 1;
        Ok(u)
    }

    /// Adds the undirected edge between the two labelled vertices.
    /// Returns `Ok(true)` if the edge is new and `Ok(false)` if it already
    /// existed (re-adding is a no-op success).
    ///
    /// Rejected with [`GraphError::SelfLoop`] if both labels are equal and with
    /// [`GraphError::VertexNotFound`] if either label is absent.
    pub fn try_add_edge(&mut self, a: &L, b: &L) -> Result<bool, GraphError> {
        let (u, v) = self.edge_endpoints(a, b)?;
        let added = self.matrix.set_edge(u, v);
        if added {
            self.version += 1;
        }
        Ok(added)
    }

    /// Removes the undirected edge between the two labelled vertices.
    /// Returns `Ok(true)` if an edge was removed and `Ok(false)` if none
    /// existed. Rejected under the same conditions as [`Self::try_add_edge`].
    pub fn try_remove_edge(&mut self, a: &L, b: &L) -> Result<bool, GraphError> {
        let (u, v) = self.edge_endpoints(a, b)?;
        let removed = self.matrix.clear_edge(u, v);
        if removed {
            self.version += 1;
        }
        Ok(removed)
    }

    /// Adds the undirected edge `{u, v}` by index; used by bulk builders that
    /// already hold validated indices.
    /// Returns *true* exactly if the edge was not present previously.
    /// ** Panics if `u >= n || v >= n || u == v` **
    pub fn add_edge_at(&mut self, u: Node, v: Node) -> bool {
        let added = self.matrix.set_edge(u, v);
        if added {
            self.version += 1;
        }
        added
    }

    /// Returns *true* if both labels are present, distinct, and connected.
    /// Never errors: an absent label or equal endpoints simply yield *false*.
    pub fn is_adjacent(&self, a: &L, b: &L) -> bool {
        match (self.store.index_of(a), self.store.index_of(b)) {
            (Some(u), Some(v)) => u != v && self.matrix.has_edge(u, v),
            _ => false,
        }
    }

    /// Returns all distinct neighbors of the labelled vertex in index order,
    /// or `None` if the label is absent. The vertex itself never appears.
    pub fn neighbors<'a>(&'a self, label: &L) -> Option<impl Iterator<Item = &'a L> + 'a> {
        let u = self.store.index_of(label)?;
        Some(self.matrix.neighbors_of(u).map(|v| self.store.label_of(v)))
    }

    /// Returns an iterator over all vertex labels in index order
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.store.labels()
    }

    /// Returns the index of a label, or `None` if it is not present
    pub fn index_of(&self, label: &L) -> Option<Node> {
        self.store.index_of(label)
    }

    /// Returns *true* if a vertex with an equal label exists
    pub fn contains(&self, label: &L) -> bool {
        self.store.contains(label)
    }

    /// Returns the label at index `u`
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &L {
        self.store.label_of(u)
    }

    /// Removes all vertices and edges
    pub fn clear(&mut self) {
        self.store.clear();
        self.matrix.clear();
        self.version += 1;
    }

    fn edge_endpoints(&self, a: &L, b: &L) -> Result<(Node, Node), GraphError> {
        let u = self.store.index_of(a).ok_or(GraphError::VertexNotFound)?;
        let v = self.store.index_of(b).ok_or(GraphError::VertexNotFound)?;
        if u == v {
            return Err(GraphError::SelfLoop);
        }
        Ok((u, v))
    }
}

impl<L: Label> GraphNodeOrder for LabeledGraph<L> {
    fn number_of_nodes(&self) -> NumNodes {
        self.store.number_of_labels()
    }
}

impl<L: Label> GraphEdgeOrder for LabeledGraph<L> {
    fn number_of_edges(&self) -> NumEdges {
        self.matrix.number_of_edges()
    }
}

impl<L: Label> AdjacencyList for LabeledGraph<L> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.matrix.neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.matrix.degree_of(u)
    }
}

impl<L: Label> AdjacencyTest for LabeledGraph<L> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.matrix.has_edge(u, v)
    }
}
