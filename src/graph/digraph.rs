//! Immutable adjacency-list digraph.
//!
//! Vertices are the dense integers `0..vertex_count`; an edge `(u, v)` puts `v`
//! in the outgoing list of `u`. The graph is built once from an edge list and
//! never mutated, so a shared reference can be queried from any number of
//! threads.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::GraphError;

use super::{GraphResult, Vertex};

/// Immutable directed graph over dense vertex ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    adj: Vec<Vec<Vertex>>,
    edge_count: usize,
}

impl Digraph {
    /// Build a digraph with `vertex_count` vertices from `(from, to)` edges.
    ///
    /// Every endpoint must lie in `0..vertex_count`. Parallel edges and self-loops
    /// are kept as given. Fails with [`GraphError::TooLarge`] if the adjacency
    /// table cannot be allocated.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut adj: Vec<Vec<Vertex>> = Vec::new();
        adj.try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::TooLarge { vertex_count })?;
        adj.resize(vertex_count, Vec::new());
        let mut edge_count = 0usize;
        for (from, to) in edges {
            for v in [from, to] {
                if v >= vertex_count {
                    return Err(GraphError::InvalidVertex {
                        vertex: v,
                        vertex_count,
                    });
                }
            }
            adj[from].push(to);
            edge_count += 1;
        }
        Ok(Self { adj, edge_count })
    }

    /// A graph with `vertex_count` vertices and no edges.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Fail with [`GraphError::InvalidVertex`] unless `v` is in range.
    pub fn check_vertex(&self, v: Vertex) -> GraphResult<()> {
        if v < self.adj.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: v,
                vertex_count: self.adj.len(),
            })
        }
    }

    /// Outgoing neighbours of `v`.
    pub fn out_edges(&self, v: Vertex) -> GraphResult<&[Vertex]> {
        self.check_vertex(v)?;
        Ok(&self.adj[v])
    }

    /// Outgoing neighbours of a vertex already known to be in range.
    pub(crate) fn neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.adj[v]
    }

    pub fn out_degree(&self, v: Vertex) -> GraphResult<usize> {
        Ok(self.out_edges(v)?.len())
    }

    /// All edges as `(from, to)` pairs, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    /// Vertices with no outgoing edges, in ascending order.
    pub fn roots(&self) -> Vec<Vertex> {
        self.adj
            .iter()
            .enumerate()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(v, _)| v)
            .collect()
    }

    /// The transposed graph: every edge `(u, v)` becomes `(v, u)`.
    pub fn reverse(&self) -> Self {
        let mut adj: Vec<Vec<Vertex>> = vec![Vec::new(); self.adj.len()];
        for (from, to) in self.edges() {
            adj[to].push(from);
        }
        Self {
            adj,
            edge_count: self.edge_count,
        }
    }

    /// A vertex lying on a directed cycle, or `None` if the graph is acyclic.
    ///
    /// Self-loops count as cycles.
    pub fn find_cycle(&self) -> Option<Vertex> {
        let graph = self.to_petgraph();
        toposort(&graph, None)
            .err()
            .map(|cycle| cycle.node_id().index())
    }

    /// Mirror this graph into petgraph, with `NodeIndex::new(v)` for vertex `v`.
    pub fn to_petgraph(&self) -> DiGraph<Vertex, ()> {
        let mut graph = DiGraph::with_capacity(self.adj.len(), self.edge_count);
        for v in 0..self.adj.len() {
            graph.add_node(v);
        }
        for (from, to) in self.edges() {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }
        graph
    }
}
