use log::{debug, trace};
use num_traits::PrimInt;
use std::fmt::Debug;

use crate::graph::Graph;

/// Represents an undirected, weighted edge in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub src: usize,
    pub dst: usize,
    pub weight: W,
}

/// Disjoint-set (union-find) for cycle detection in Kruskal's algorithm.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    /// Initializes a union-find for `n` elements (0..n-1).
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Finds the representative (root) of the set containing `x`.
    /// Uses path compression.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Unites the sets containing `x` and `y` by rank.
    /// Returns `true` if a union actually occurred (i.e., they were disjoint).
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        true
    }
}

/// Kruskal's algorithm over every edge of `graph`.
///
/// Returns the edges of a minimum spanning forest sorted by weight: one tree
/// per connected component, so `vertex_count - components` edges in total.
/// Unlike Prim's algorithm it needs no root and spans disconnected graphs.
///
/// # Examples
/// ```
/// use prim_mst::graph::{kruskal, Graph};
///
/// let graph = Graph::from_edges(4, vec![(0, 1, 3), (1, 2, 1), (0, 2, 2)]).unwrap();
/// let forest = kruskal::minimum_spanning_forest(&graph);
/// assert_eq!(kruskal::total_weight(&forest), Some(3));
/// ```
pub fn minimum_spanning_forest<W: PrimInt + Debug>(graph: &Graph<W>) -> Vec<Edge<W>> {
    let num_nodes = graph.vertex_count();
    let mut edges: Vec<Edge<W>> = graph
        .edges()
        .map(|(src, dst, weight)| Edge { src, dst, weight })
        .collect();
    edges.sort_by_key(|e| e.weight);

    let mut uf = UnionFind::new(num_nodes);
    let mut forest = Vec::with_capacity(num_nodes.saturating_sub(1));

    for edge in edges {
        if uf.union(edge.src, edge.dst) {
            trace!(
                "kruskal: adding edge ({}, {}) = {:?}",
                edge.src,
                edge.dst,
                edge.weight
            );
            forest.push(edge);
            if forest.len() == num_nodes.saturating_sub(1) {
                break;
            }
        } else {
            trace!(
                "kruskal: skipping edge ({}, {}), same component",
                edge.src,
                edge.dst
            );
        }
    }

    debug!(
        "kruskal: {} forest edges over {} vertices",
        forest.len(),
        num_nodes
    );
    forest
}

/// Sum of the edge weights, or `None` if it overflows `W`.
pub fn total_weight<W: PrimInt>(edges: &[Edge<W>]) -> Option<W> {
    edges
        .iter()
        .try_fold(W::zero(), |total, e| total.checked_add(&e.weight))
}
