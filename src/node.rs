/*!
# Node Representation

We choose `Node = u32` as even generous dictionaries stay far below `2^32` words.
This (1) saves space compared to `usize`/`u64` in the dense all-pairs tables and
(2) allows manipulating node values directly without abstracting over them.
*/

use std::num::NonZero;

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Dense BitSet addressed by Nodes, used for adjacency rows
pub type NodeBitSet = FixedBitSet;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since the predecessor table stores `n^2` of them. This instead uses the
/// `NonZero`-Wrapper to make `Option<OptionalNode>` the size of a `Node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}
