//! Graph primitives for shortest-ancestral-path queries.
//!
//! - **[`Digraph`]**: immutable adjacency-list digraph over dense vertex ids `0..V`
//! - **[`Reachability`]**: multi-source BFS distance index, built per query side
//! - **[`io`]**: reader for the plain-text `V E v w ...` digraph format
//!
//! Edges point from the more specific vertex to the more general one, so every
//! vertex reachable from a source is one of its ancestors.

pub mod digraph;
pub mod io;
pub mod reach;

pub use digraph::Digraph;
pub use reach::Reachability;

use crate::error::GraphError;

/// A vertex id: a dense index into a [`Digraph`].
pub type Vertex = usize;

/// Result type for graph operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;
