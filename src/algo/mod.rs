/*!
# Graph Algorithms

This module provides the **all-pairs shortest-path** machinery built on top of the
graph representations in this crate. The main entry point is the
[`AllPairsShortestPaths`] trait, implemented for every graph that exposes
[`AdjacencyList`](crate::ops::AdjacencyList) and
[`AdjacencyTest`](crate::ops::AdjacencyTest):

```rust
use wgraphs::{prelude::*, algo::*};

let graph = AdjMatrix::from_edges(4, [(0u32, 1u32), (1, 2), (2, 3)]);
let tables = graph.all_pairs_shortest_paths();

assert_eq!(tables.distance(0, 3), Some(3));
assert_eq!(tables.path(0, 3), Some(vec![0, 1, 2, 3]));
```
*/

mod apsp;

use crate::{edge::*, node::*, ops::*};

pub use apsp::*;
