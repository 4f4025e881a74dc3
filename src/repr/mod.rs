/*!
# Representation

The two storage backends everything else is built on:

- [`AdjMatrix`]: a growable dense boolean adjacency matrix over indices `0..n`,
  one bitset row per vertex. Symmetric, all-false diagonal, doubling capacity.
- [`VertexStore`]: the `index -> label` sequence plus the `label -> index`
  reverse map, with dense indices that compact on removal.

Both are index-level building blocks; the label-addressed operation contract
lives in [`LabeledGraph`](crate::graph::LabeledGraph).
*/

mod matrix;
mod store;

pub use matrix::*;
pub use store::*;
