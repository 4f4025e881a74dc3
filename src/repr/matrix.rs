use crate::{edge::*, node::*, ops::*};

/// Initial matrix dimension; doubled whenever the vertex count would exceed it
const DEF_CAPACITY: usize = 10;

/// A growable dense boolean adjacency matrix for an undirected, unweighted graph.
///
/// Row `u` is a [`NodeBitSet`] of width `capacity >= n` whose set bits are the
/// neighbors of `u`. Invariants:
/// - symmetric: bit `v` of row `u` equals bit `u` of row `v`,
/// - the diagonal is always false (no self-loops),
/// - no bit at position `>= n` is ever set, so bits beyond the vertex count
///   are ignored rather than cleared on growth.
///
/// Removing a node compacts indices: every node index greater than the removed
/// one decrements by one, and all rows shift their columns accordingly. Callers
/// holding on to old indices must refresh them.
#[derive(Clone)]
pub struct AdjMatrix {
    rows: Vec<NodeBitSet>,
    capacity: usize,
    num_edges: NumEdges,
}

impl Default for AdjMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjMatrix {
    /// Creates an empty matrix with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEF_CAPACITY)
    }

    /// Creates an empty matrix that can hold `capacity` nodes before growing
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::new(),
            capacity: capacity.max(1),
            num_edges: 0,
        }
    }

    /// Creates a matrix with `n` nodes and the given edges
    pub fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut matrix = Self::with_capacity((n as usize).max(DEF_CAPACITY));
        for _ in 0..n {
            matrix.push_node();
        }
        for edge in edges {
            let Edge(u, v) = edge.into();
            matrix.set_edge(u, v);
        }
        matrix
    }

    /// Returns the current matrix dimension (always `>= number_of_nodes`)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a new isolated node and returns its index, doubling the backing
    /// storage if the matrix is full. The new row and column are all-false.
    pub fn push_node(&mut self) -> Node {
        if self.rows.len() == self.capacity {
            self.capacity *= 2;
            for row in &mut self.rows {
                row.grow(self.capacity);
            }
        }
        self.rows.push(NodeBitSet::with_capacity(self.capacity));
        (self.rows.len() - 1) as Node
    }

    /// Removes node `u` and all its edges. All node indices greater than `u`
    /// decrement by one; surviving adjacency relationships are preserved exactly.
    /// ** Panics if `u >= n` **
    pub fn remove_node(&mut self, u: Node) {
        let ui = u as usize;
        assert!(ui < self.rows.len());

        self.num_edges -= self.rows[ui].count_ones(..) as NumEdges;
        self.rows.remove(ui);

        let n = self.rows.len();
        for row in &mut self.rows {
            // close the gap left by column u
            for v in ui..n {
                let bit = row.contains(v + 1);
                row.set(v, bit);
            }
            row.set(n, false);
        }
    }

    /// Sets the edge `{u, v}` in both directions.
    /// Returns *true* exactly if the edge was not present previously.
    /// ** Panics if `u >= n || v >= n || u == v` **
    pub fn set_edge(&mut self, u: Node, v: Node) -> bool {
        let n = self.rows.len();
        assert!((u as usize) < n && (v as usize) < n && u != v);

        if self.rows[u as usize].put(v as usize) {
            false
        } else {
            self.rows[v as usize].insert(u as usize);
            self.num_edges += 1;
            true
        }
    }

    /// Clears the edge `{u, v}` in both directions.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u >= n || v >= n || u == v` **
    pub fn clear_edge(&mut self, u: Node, v: Node) -> bool {
        let n = self.rows.len();
        assert!((u as usize) < n && (v as usize) < n && u != v);

        if self.rows[u as usize].contains(v as usize) {
            self.rows[u as usize].set(v as usize, false);
            self.rows[v as usize].set(u as usize, false);
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }

    /// Removes all nodes and edges, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.rows.clear();
        self.num_edges = 0;
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.rows[u as usize].ones().map(|v| v as Node)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.rows[u as usize].count_ones(..) as NumNodes
    }
}

impl AdjacencyTest for AdjMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!((v as usize) < self.rows.len());
        self.rows[u as usize].contains(v as usize)
    }
}
