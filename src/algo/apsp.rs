use super::*;

/// All-pairs shortest distances and predecessors, computed by Floyd–Warshall.
///
/// `dist` and `pred` are flat `n x n` matrices in row-major order. Distances
/// count edges; `INF = n` serves as the unreachable sentinel since no simple
/// path can have more than `n - 1` edges. Keeping the sentinel small also
/// makes `dist[i][k] + dist[k][j]` safe without an overflow guard: the sum is
/// at most `2n` and therefore never beats a finite entry by accident.
///
/// `pred[i][j]` is the node preceding `j` on a shortest `i -> j` path, `None`
/// on the diagonal and for unreachable pairs. Path reconstruction for a pair
/// walks exactly this pair's predecessor chain; answers for different pairs
/// never mix.
///
/// All edge weights are 0 or 1 by construction, so negative cycles cannot
/// occur and the algorithm needs no detection branch for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApspTables {
    n: NumNodes,
    dist: Vec<NumNodes>,
    pred: Vec<Option<OptionalNode>>,
}

impl ApspTables {
    /// Runs Floyd–Warshall over the given graph snapshot in `O(n^3)`
    pub fn compute<G>(graph: &G) -> Self
    where
        G: AdjacencyList + AdjacencyTest,
    {
        let n = graph.number_of_nodes();
        let nn = graph.len();
        let inf = n;

        let mut dist = vec![inf; nn * nn];
        let mut pred: Vec<Option<OptionalNode>> = vec![None; nn * nn];

        for u in graph.vertices() {
            dist[(u as usize) * nn + u as usize] = 0;
            for v in graph.neighbors_of(u) {
                dist[(u as usize) * nn + v as usize] = 1;
                pred[(u as usize) * nn + v as usize] = OptionalNode::new(u);
            }
        }

        for k in 0..nn {
            for i in 0..nn {
                let dik = dist[i * nn + k];
                if dik >= inf {
                    continue;
                }
                for j in 0..nn {
                    let through_k = dik + dist[k * nn + j];
                    if through_k < dist[i * nn + j] {
                        dist[i * nn + j] = through_k;
                        pred[i * nn + j] = pred[k * nn + j];
                    }
                }
            }
        }

        Self { n, dist, pred }
    }

    /// Returns the number of nodes the tables were computed for
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the number of edges on a shortest path from `u` to `v`, or
    /// `None` if `v` is unreachable from `u`. `distance(u, u)` is `Some(0)`.
    /// ** Panics if `u >= n || v >= n` **
    pub fn distance(&self, u: Node, v: Node) -> Option<NumNodes> {
        let d = self.dist[self.idx(u, v)];
        (d < self.n).then_some(d)
    }

    /// Returns the node preceding `v` on a shortest path from `u`, or `None`
    /// if `u == v` or `v` is unreachable from `u`.
    /// ** Panics if `u >= n || v >= n` **
    pub fn predecessor(&self, u: Node, v: Node) -> Option<Node> {
        self.pred[self.idx(u, v)].map(|p| p.get())
    }

    /// Reconstructs a shortest path from `u` to `v` as the full node sequence
    /// including both endpoints, or `None` if `v` is unreachable from `u`.
    /// `path(u, u)` is the single-element sequence `[u]`.
    /// ** Panics if `u >= n || v >= n` **
    pub fn path(&self, u: Node, v: Node) -> Option<Vec<Node>> {
        if u == v {
            self.distance(u, u)?;
            return Some(vec![u]);
        }
        self.distance(u, v)?;

        // walk the predecessor chain backwards from v; each step strictly
        // decreases dist(u, .), so the walk is bounded by n
        let mut path = vec![v];
        let mut cur = v;
        while cur != u {
            cur = self.predecessor(u, cur)?;
            path.push(cur);
        }

        path.reverse();
        Some(path)
    }

    fn idx(&self, u: Node, v: Node) -> usize {
        assert!(u < self.n && v < self.n);
        (u as usize) * (self.n as usize) + v as usize
    }
}

/// Extension trait running [`ApspTables::compute`] directly on a graph
pub trait AllPairsShortestPaths: AdjacencyList + AdjacencyTest {
    /// Computes all-pairs shortest distances and predecessors in `O(n^3)`
    fn all_pairs_shortest_paths(&self) -> ApspTables {
        ApspTables::compute(self)
    }
}

impl<G> AllPairsShortestPaths for G where G: AdjacencyList + AdjacencyTest {}
