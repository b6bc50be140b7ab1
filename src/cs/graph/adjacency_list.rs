use num_traits::PrimInt;

use crate::error::{GraphError, Result};

/// A weighted, undirected graph stored as one adjacency list per vertex.
///
/// Vertices are the indices `0..vertex_count`, fixed at construction. Every
/// edge `(u, v, w)` is recorded as `(v, w)` in `u`'s list and `(u, w)` in
/// `v`'s list. Parallel edges and self-loops are kept as given.
///
/// # Examples
/// ```
/// use prim_mst::graph::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4).unwrap();
/// graph.add_edge(1, 2, 7).unwrap();
///
/// assert_eq!(graph.neighbors(1).unwrap(), &[(0, 4), (2, 7)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<W = i64> {
    adjacency: Vec<Vec<(usize, W)>>,
    edge_count: usize,
}

impl<W: PrimInt> Graph<W> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph from a vertex count of any primitive integer type.
    ///
    /// # Errors
    /// * `InvalidArgument` if the count is negative or does not fit in `usize`
    pub fn try_new<N: PrimInt>(vertex_count: N) -> Result<Self> {
        if vertex_count < N::zero() {
            return Err(GraphError::invalid_argument(
                "vertex count must not be negative",
            ));
        }
        let vertex_count = vertex_count.to_usize().ok_or_else(|| {
            GraphError::invalid_argument("vertex count does not fit in usize")
        })?;
        Ok(Self::new(vertex_count))
    }

    /// Builds a graph by adding each `(source, destination, weight)` triple in order.
    ///
    /// # Errors
    /// The first error returned by [`Graph::add_edge`].
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(vertex_count);
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Adds the undirected edge `(u, v)` with the given weight.
    ///
    /// # Errors
    /// * `OutOfRange` if `u` or `v` is not a vertex of this graph
    /// * `InvalidWeight` if `weight` is negative
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        let vertex_count = self.vertex_count();
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(GraphError::out_of_range(vertex, vertex_count));
            }
        }
        if weight < W::zero() {
            return Err(GraphError::invalid_weight(format!(
                "edge ({}, {}) has a negative weight",
                u, v
            )));
        }

        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        self.edge_count += 1;
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of `add_edge` calls that succeeded.
    ///
    /// Self-loops are counted here but skipped by [`Graph::edges`], so the two
    /// differ for graphs that contain them.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn has_vertex(&self, v: usize) -> bool {
        v < self.vertex_count()
    }

    /// Returns the `(neighbor, weight)` pairs of `v` in insertion order.
    ///
    /// # Errors
    /// * `OutOfRange` if `v` is not a vertex of this graph
    pub fn neighbors(&self, v: usize) -> Result<&[(usize, W)]> {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::out_of_range(v, self.vertex_count()))
    }

    /// Iterates over every edge once as `(u, v, weight)` with `u < v`.
    ///
    /// Self-loops are skipped; they can never be part of a spanning tree.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, list)| {
            list.iter()
                .filter(move |&&(v, _)| u < v)
                .map(move |&(v, weight)| (u, v, weight))
        })
    }

    pub(crate) fn adjacent(&self, v: usize) -> &[(usize, W)] {
        &self.adjacency[v]
    }
}
