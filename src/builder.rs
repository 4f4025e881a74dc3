/*!
# Graph Builder

Bulk construction of a [`LabeledGraph`] from a word sequence and an adjacency
predicate. Building is all-or-nothing per rebuild: the graph is reset first,
every accepted word becomes a vertex, the predicate is evaluated exactly once
per unordered pair of distinct accepted vertices, and the
[`PathEngine`](crate::engine::PathEngine) is recomputed at the end so the
result is immediately queryable.

The `O(V^2)` predicate evaluations are deliberate: `V` is bounded by the
dictionary size and the predicate is cheap, so the dense pass stays cheaper
than maintaining any incremental structure.
*/

use std::io;

use itertools::Itertools;
use tracing::{info, warn};

use crate::{
    edge::Edge,
    engine::PathEngine,
    error::{BuildError, GraphError},
    graph::LabeledGraph,
    node::*,
    ops::{GraphEdgeOrder, GraphNodeOrder},
    repr::Label,
};

/// Builds [`LabeledGraph`]s from word sequences using a fixed adjacency predicate.
///
/// The predicate must be deterministic and symmetric; it is consulted exactly
/// once per unordered pair, so an asymmetric predicate would silently decide
/// edges by input order.
pub struct GraphBuilder<P> {
    is_adjacent: P,
}

impl<P> GraphBuilder<P> {
    /// Creates a builder around the given adjacency predicate
    pub fn new(is_adjacent: P) -> Self {
        Self { is_adjacent }
    }

    /// Rebuilds `graph` from the given words and recomputes `engine`.
    ///
    /// Duplicate and invalid words are skipped with a log line, not an error.
    /// Returns the number of vertices in the rebuilt graph.
    pub fn build<L, I>(
        &self,
        graph: &mut LabeledGraph<L>,
        engine: &mut PathEngine,
        words: I,
    ) -> NumNodes
    where
        L: Label,
        P: Fn(&L, &L) -> bool,
        I: IntoIterator<Item = L>,
    {
        graph.clear();

        for word in words {
            match graph.try_add_vertex(word.clone()) {
                Ok(_) => {}
                Err(GraphError::DuplicateVertex) => {
                    warn!(word = ?word, "skipping duplicate word")
                }
                Err(e) => warn!(word = ?word, error = %e, "skipping word"),
            }
        }

        let n = graph.number_of_nodes();
        let edges = (0..n)
            .tuple_combinations()
            .filter(|&(u, v)| (self.is_adjacent)(graph.label_of(u), graph.label_of(v)))
            .map(|(u, v)| Edge(u, v))
            .collect_vec();
        for Edge(u, v) in edges {
            graph.add_edge_at(u, v);
        }

        engine.recompute(graph);
        info!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "graph rebuilt"
        );
        n
    }

    /// Like [`Self::build`], but over a fallible word source. If the source
    /// fails at any point the build aborts, the graph is left empty (with the
    /// engine recomputed over it), and the error is surfaced; callers never
    /// observe a partially filled graph.
    pub fn try_build<L, I>(
        &self,
        graph: &mut LabeledGraph<L>,
        engine: &mut PathEngine,
        words: I,
    ) -> Result<NumNodes, BuildError>
    where
        L: Label,
        P: Fn(&L, &L) -> bool,
        I: IntoIterator<Item = io::Result<L>>,
    {
        match words.into_iter().collect::<io::Result<Vec<L>>>() {
            Ok(words) => Ok(self.build(graph, engine, words)),
            Err(e) => {
                graph.clear();
                engine.recompute(graph);
                warn!(error = %e, "word source unavailable, graph reset");
                Err(BuildError::SourceUnavailable(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn one_letter_apart(a: &String, b: &String) -> bool {
        a.len() == b.len() && a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() == 1
    }

    #[test]
    fn builds_vertices_and_edges() {
        let mut graph = LabeledGraph::new();
        let mut engine = PathEngine::new();
        let builder = GraphBuilder::new(one_letter_apart);

        let words = ["cat", "rat", "hat", "kit"].map(String::from);
        let count = builder.build(&mut graph, &mut engine, words);

        assert_eq!(count, 4);
        assert_eq!(graph.number_of_edges(), 3);
        assert!(graph.is_adjacent(&"cat".to_string(), &"rat".to_string()));
        assert!(!graph.is_adjacent(&"cat".to_string(), &"kit".to_string()));
        assert!(engine.is_ready(&graph));
    }

    #[test]
    fn rejected_words_are_skipped_not_fatal() {
        let mut graph = LabeledGraph::new();
        let mut engine = PathEngine::new();
        let builder = GraphBuilder::new(one_letter_apart);

        let words = ["cat", "rat", "cat", "", "cat", "hat"].map(String::from);
        let count = builder.build(&mut graph, &mut engine, words);

        assert_eq!(count, 3);
        assert_eq!(graph.labels().cloned().collect::<Vec<_>>(), vec![
            "cat", "rat", "hat"
        ]);
    }

    #[test]
    fn predicate_evaluated_once_per_unordered_pair() {
        let mut graph = LabeledGraph::new();
        let mut engine = PathEngine::new();

        let calls = Cell::new(0usize);
        let builder = GraphBuilder::new(|a: &String, b: &String| {
            calls.set(calls.get() + 1);
            one_letter_apart(a, b)
        });

        // 5 accepted words (one duplicate) -> C(5, 2) pairs
        let words = ["cat", "rat", "hat", "kit", "kit", "neat"].map(String::from);
        builder.build(&mut graph, &mut engine, words);

        assert_eq!(calls.get(), 10);
    }

    #[test]
    fn rebuild_resets_previous_state() {
        let mut graph = LabeledGraph::new();
        let mut engine = PathEngine::new();
        let builder = GraphBuilder::new(one_letter_apart);

        builder.build(&mut graph, &mut engine, ["cat", "rat"].map(String::from));
        builder.build(&mut graph, &mut engine, ["dog", "dot"].map(String::from));

        assert_eq!(graph.number_of_nodes(), 2);
        assert!(!graph.contains(&"cat".to_string()));
        assert!(graph.is_adjacent(&"dog".to_string(), &"dot".to_string()));
    }

    #[test]
    fn failing_source_leaves_graph_empty() {
        let mut graph = LabeledGraph::new();
        let mut engine = PathEngine::new();
        let builder = GraphBuilder::new(one_letter_apart);

        builder.build(&mut graph, &mut engine, ["cat", "rat"].map(String::from));

        let words: Vec<io::Result<String>> = vec![
            Ok("dog".to_string()),
            Err(io::Error::new(io::ErrorKind::Other, "disk gone")),
            Ok("dot".to_string()),
        ];
        let result = builder.try_build(&mut graph, &mut engine, words);

        assert!(matches!(result, Err(BuildError::SourceUnavailable(_))));
        assert!(graph.is_empty());
        assert!(engine.is_ready(&graph));
    }
}
