/*!
`wgraphs` is a graph data structure & shortest-path library for graphs whose vertices
carry **unique labels** (typically dictionary words) and whose edges are
- **unweighted** : An edge either exists or it does not; path lengths count edges.
- **undirected** : An edge `{a, b}` connects both ways.

The crate was built for *word ladder* queries: load a dictionary, connect every pair of
words that an adjacency predicate accepts (e.g. "differs by one edit"), and answer
shortest-path / shortest-distance queries between arbitrary word pairs from a single
all-pairs precomputation.

# Representation

Internally, vertices are dense indices `0..n` (`Node = u32`); the adjacency lives in a
growable dense boolean matrix ([`repr::AdjMatrix`], one bitset row per vertex). A
[`repr::VertexStore`] maintains the `index -> label` sequence together with the
`label -> index` reverse map; indices stay dense under removal, which shifts both the
label sequence and the matrix rows/columns. [`graph::LabeledGraph`] combines the two
behind a label-addressed operation contract and tracks a version counter so that
derived shortest-path tables can detect staleness.

# Shortest paths

[`algo::ApspTables`] runs Floyd–Warshall over any [`ops::AdjacencyList`] and stores an
`n x n` distance matrix plus an `n x n` predecessor matrix for path reconstruction.
[`engine::PathEngine`] wraps the tables with a `Stale -> Ready` lifecycle keyed to the
graph version: any graph mutation invalidates the tables, and queries are only valid
once [`engine::PathEngine::recompute`] has run against the mutated graph.

The execution model is single-threaded and synchronous: `recompute` runs to completion
before any query can observe the new tables, and mutating the graph while holding the
engine borrowed is ruled out by the borrow checker.

# Usage

The word-ladder surface lives in [`ladder::WordLadder`]:

```no_run
use wgraphs::ladder::WordLadder;

let mut ladder = WordLadder::new();
let count = ladder.populate("dictionary.txt").unwrap();
println!("{count} words loaded");

let hops = ladder.shortest_distance("cat", "hat").unwrap();
let path = ladder.shortest_path("cat", "hat").unwrap();
println!("{hops} hops: {path:?}");
```

Lower-level access goes through `use wgraphs::{prelude::*, algo::*};` which exposes the
graph operation traits, the labelled graph, and the all-pairs tables.
*/

pub mod algo;
pub mod builder;
pub mod edge;
pub mod engine;
pub mod error;
pub mod graph;
pub mod ladder;
pub mod node;
pub mod ops;
pub mod repr;
pub mod words;

/// `wgraphs::prelude` includes definitions for nodes, edges, errors, the basic graph
/// operation traits as well as the matrix and labelled-graph representations.
pub mod prelude {
    pub use super::{edge::*, error::*, graph::*, node::*, ops::*, repr::*};
}

pub use edge::{Edge, NumEdges};
pub use node::{Node, NumNodes, INVALID_NODE};
