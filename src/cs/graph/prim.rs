use bitvec::prelude::*;
use log::{debug, trace};
use num_traits::PrimInt;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Display, Formatter};

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// How the frontier of unsettled vertices is searched for its cheapest member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierStrategy {
    /// Binary heap with lazy deletion, O(E log V).
    #[default]
    BinaryHeap,
    /// Linear scan over all vertices, O(V^2). Suited to small or dense graphs.
    LinearScan,
}

/// Options for [`minimum_spanning_tree_with`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MstConfig {
    /// Root of the tree. Defaults to vertex 0.
    pub start: usize,
    /// Frontier used to pick the next vertex. Defaults to the binary heap.
    pub strategy: FrontierStrategy,
}

impl MstConfig {
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_strategy(mut self, strategy: FrontierStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Entry in the priority queue. A `None` cost is infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Entry<W> {
    cost: Option<W>,
    vertex: usize,
}

/// Orders finite costs ascending, with infinity after every finite cost.
fn compare_costs<W: Ord>(a: Option<W>, b: Option<W>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl<W: Ord + Copy> Ord for Entry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap, lowest vertex id wins ties
        compare_costs(other.cost, self.cost).then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<W: Ord + Copy> PartialOrd for Entry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-run bookkeeping. Created fresh for every call and turned into the result.
struct Builder<'g, W> {
    graph: &'g Graph<W>,
    cost: Vec<Option<W>>,
    parent: Vec<Option<usize>>,
    settled: BitVec,
}

impl<'g, W: PrimInt + Debug> Builder<'g, W> {
    fn new(graph: &'g Graph<W>, start: usize) -> Self {
        let n = graph.vertex_count();
        let mut cost = vec![None; n];
        cost[start] = Some(W::zero());
        Self {
            graph,
            cost,
            parent: vec![None; n],
            settled: bitvec![0; n],
        }
    }

    /// Settles `v` and relaxes its edges to unsettled neighbors, reporting
    /// every neighbor whose cost dropped.
    fn settle(&mut self, v: usize, mut on_improve: impl FnMut(usize, W)) {
        trace!("settling vertex {} at cost {:?}", v, self.cost[v]);
        self.settled.set(v, true);

        let graph = self.graph;
        for &(n, weight) in graph.adjacent(v) {
            if self.settled[n] {
                continue;
            }
            if self.cost[n].map_or(true, |current| weight < current) {
                trace!("relaxing {} via {} to {:?}", n, v, weight);
                self.cost[n] = Some(weight);
                self.parent[n] = Some(v);
                on_improve(n, weight);
            }
        }
    }

    fn run_binary_heap(&mut self) {
        let mut heap = BinaryHeap::with_capacity(self.cost.len());
        for (vertex, &cost) in self.cost.iter().enumerate() {
            heap.push(Entry { cost, vertex });
        }

        while let Some(Entry { cost, vertex }) = heap.pop() {
            if self.settled[vertex] {
                continue;
            }
            // Everything left is unreachable from the root
            if cost.is_none() {
                break;
            }
            self.settle(vertex, |n, weight| {
                heap.push(Entry {
                    cost: Some(weight),
                    vertex: n,
                })
            });
        }
    }

    fn run_linear_scan(&mut self) {
        while let Some(v) = self.cheapest_unsettled() {
            self.settle(v, |_, _| {});
        }
    }

    fn cheapest_unsettled(&self) -> Option<usize> {
        self.settled
            .iter_zeros()
            .filter_map(|v| self.cost[v].map(|cost| (cost, v)))
            .min()
            .map(|(_, v)| v)
    }

    fn finish(self, start: usize) -> MinimumSpanningTree<W> {
        MinimumSpanningTree {
            root: Some(start),
            parent: self.parent,
            cost: self.cost,
        }
    }
}

/// A minimum spanning tree stored as parent pointers from a fixed root.
///
/// Vertices that cannot be reached from the root have no parent and are not
/// part of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumSpanningTree<W> {
    root: Option<usize>,
    parent: Vec<Option<usize>>,
    cost: Vec<Option<W>>,
}

impl<W: PrimInt> MinimumSpanningTree<W> {
    fn empty() -> Self {
        Self {
            root: None,
            parent: Vec::new(),
            cost: Vec::new(),
        }
    }

    /// The start vertex, or `None` for a graph without vertices.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn vertex_count(&self) -> usize {
        self.parent.len()
    }

    /// Parent of every vertex, indexed by vertex.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parent
    }

    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parent.get(v).copied().flatten()
    }

    /// Weight of the edge joining `v` to its parent. `Some(0)` for the root and
    /// `None` for unreachable vertices.
    pub fn cost(&self, v: usize) -> Option<W> {
        self.cost.get(v).copied().flatten()
    }

    /// Whether `v` is the root or hangs off the tree.
    pub fn contains(&self, v: usize) -> bool {
        self.root == Some(v) || self.parent(v).is_some()
    }

    /// Tree edges as `(parent, child, weight)` in increasing child order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.parent
            .iter()
            .zip(&self.cost)
            .enumerate()
            .filter_map(|(child, (&parent, &cost))| Some((parent?, child, cost?)))
    }

    /// Tree edges as `(parent, child)` in increasing child order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges().map(|(parent, child, _)| (parent, child))
    }

    pub fn edge_count(&self) -> usize {
        self.parent.iter().filter(|p| p.is_some()).count()
    }

    /// Sum of the tree edge weights, or `None` if it overflows `W`.
    pub fn total_weight(&self) -> Option<W> {
        self.edges()
            .try_fold(W::zero(), |total, (_, _, weight)| total.checked_add(&weight))
    }

    /// Whether every vertex of the graph is in the tree.
    pub fn is_spanning(&self) -> bool {
        (0..self.vertex_count()).all(|v| self.contains(v))
    }
}

impl<W: PrimInt> Display for MinimumSpanningTree<W> {
    /// One `parent - child` line per tree edge.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (parent, child) in self.pairs() {
            writeln!(f, "{} - {}", parent, child)?;
        }
        Ok(())
    }
}

fn build<W: PrimInt + Debug>(
    graph: &Graph<W>,
    start: usize,
    strategy: FrontierStrategy,
) -> MinimumSpanningTree<W> {
    debug!(
        "prim: {} vertices, {} edges, root {}, {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        start,
        strategy
    );

    let mut builder = Builder::new(graph, start);
    match strategy {
        FrontierStrategy::BinaryHeap => builder.run_binary_heap(),
        FrontierStrategy::LinearScan => builder.run_linear_scan(),
    }
    let tree = builder.finish(start);

    debug!(
        "prim: {} tree edges, total weight {:?}",
        tree.edge_count(),
        tree.total_weight()
    );
    tree
}

/// Computes the minimum spanning tree of an undirected graph using Prim's
/// algorithm, rooted at vertex 0.
///
/// The frontier is ordered by connection cost and then by vertex id, so the
/// result is deterministic for a fixed insertion order. If the graph is
/// disconnected, only the component of vertex 0 is spanned; every other
/// vertex keeps no parent.
///
/// # Examples
/// ```
/// use prim_mst::graph::{prim, Graph};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4).unwrap();
/// graph.add_edge(0, 2, 2).unwrap();
/// graph.add_edge(1, 2, 1).unwrap();
///
/// let mst = prim::minimum_spanning_tree(&graph);
/// assert_eq!(mst.total_weight(), Some(3));
/// assert_eq!(mst.to_string(), "2 - 1\n0 - 2\n");
/// ```
///
/// # Complexity
/// * Time: O(E log V) where V is the number of vertices and E is the number of edges
/// * Space: O(V + E)
pub fn minimum_spanning_tree<W: PrimInt + Debug>(graph: &Graph<W>) -> MinimumSpanningTree<W> {
    if graph.is_empty() {
        return MinimumSpanningTree::empty();
    }
    build(graph, 0, FrontierStrategy::BinaryHeap)
}

/// Like [`minimum_spanning_tree`], with a chosen root and frontier strategy.
///
/// # Errors
/// * `OutOfRange` if the start vertex is not in a non-empty graph
pub fn minimum_spanning_tree_with<W: PrimInt + Debug>(
    graph: &Graph<W>,
    config: &MstConfig,
) -> Result<MinimumSpanningTree<W>> {
    if graph.is_empty() {
        return Ok(MinimumSpanningTree::empty());
    }
    if !graph.has_vertex(config.start) {
        return Err(GraphError::out_of_range(
            config.start,
            graph.vertex_count(),
        ));
    }
    Ok(build(graph, config.start, config.strategy))
}
