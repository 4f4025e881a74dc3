/*!
# Shortest-Path Engine

[`PathEngine`] owns the all-pairs tables derived from a [`LabeledGraph`]
snapshot and answers by-label queries against them. Its lifecycle is
`Stale -> Ready`: the engine is stale on construction and again after any
graph mutation (detected through the graph's version counter), and becomes
ready once [`PathEngine::recompute`] has run against the current graph.

Recomputation runs to completion before the engine reports ready, so a query
either sees a complete, consistent table or none at all; partially updated
tables are never observable. The execution model is single-threaded: callers
serialize mutation and querying, which the borrow checker enforces as soon as
engine and graph live in the same struct.
*/

use tracing::debug;

use crate::{
    algo::{AllPairsShortestPaths, ApspTables},
    error::QueryError,
    graph::LabeledGraph,
    node::*,
    ops::{GraphEdgeOrder, GraphNodeOrder},
    repr::Label,
};

/// Lifecycle of the precomputed tables relative to a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No tables, or the graph has mutated since they were computed
    Stale,
    /// The tables reflect the graph's current state; queries are valid
    Ready,
}

/// Precomputed all-pairs shortest-path tables over a [`LabeledGraph`] snapshot.
///
/// The engine remembers the graph version its tables were computed for; query
/// methods panic when that version no longer matches, since answers from stale
/// tables would silently refer to outdated (or re-compacted) indices.
#[derive(Clone, Default)]
pub struct PathEngine {
    tables: Option<ApspTables>,
    version: u64,
}

impl PathEngine {
    /// Creates an engine with no tables; the initial state is `Stale`
    pub fn new() -> Self {
        Self {
            tables: None,
            version: 0,
        }
    }

    /// Returns the engine state relative to the given graph
    pub fn state<L: Label>(&self, graph: &LabeledGraph<L>) -> EngineState {
        if self.tables.is_some() && self.version == graph.version() {
            EngineState::Ready
        } else {
            EngineState::Stale
        }
    }

    /// Returns *true* if the tables reflect the given graph's current state
    pub fn is_ready<L: Label>(&self, graph: &LabeledGraph<L>) -> bool {
        self.state(graph) == EngineState::Ready
    }

    /// Recomputes the tables from the graph's current state in `O(n^3)` and
    /// transitions to `Ready`. Must run after every batch of graph mutations
    /// and before the next query.
    pub fn recompute<L: Label>(&mut self, graph: &LabeledGraph<L>) {
        self.tables = Some(graph.all_pairs_shortest_paths());
        self.version = graph.version();
        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "recomputed all-pairs shortest paths"
        );
    }

    /// Drops the tables, forcing `Stale` until the next [`Self::recompute`]
    pub fn invalidate(&mut self) {
        self.tables = None;
    }

    /// Returns the number of edges on a shortest path between the two labelled
    /// vertices. The distance of a vertex to itself is `Ok(0)`.
    /// ** Panics if the engine is stale for `graph` **
    pub fn distance<L: Label>(
        &self,
        graph: &LabeledGraph<L>,
        a: &L,
        b: &L,
    ) -> Result<NumNodes, QueryError> {
        let tables = self.ready_tables(graph);
        let u = graph.index_of(a).ok_or(QueryError::NotFound)?;
        let v = graph.index_of(b).ok_or(QueryError::NotFound)?;

        tables.distance(u, v).ok_or(QueryError::Unreachable)
    }

    /// Returns the label sequence of a shortest path between the two labelled
    /// vertices, both endpoints included. The path of a vertex to itself is
    /// the single-element sequence.
    /// ** Panics if the engine is stale for `graph` **
    pub fn path<L: Label>(
        &self,
        graph: &LabeledGraph<L>,
        a: &L,
        b: &L,
    ) -> Result<Vec<L>, QueryError> {
        let tables = self.ready_tables(graph);
        let u = graph.index_of(a).ok_or(QueryError::NotFound)?;
        let v = graph.index_of(b).ok_or(QueryError::NotFound)?;

        let path = tables.path(u, v).ok_or(QueryError::Unreachable)?;
        Ok(path.into_iter().map(|w| graph.label_of(w).clone()).collect())
    }

    fn ready_tables<L: Label>(&self, graph: &LabeledGraph<L>) -> &ApspTables {
        assert!(
            self.version == graph.version(),
            "query on a stale PathEngine: the graph has mutated since recompute()"
        );
        self.tables
            .as_ref()
            .expect("query on a stale PathEngine: recompute() has never run")
    }
}
