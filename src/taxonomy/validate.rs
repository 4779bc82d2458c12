//! Rooted-DAG validation for hypernym graphs.

use crate::error::TaxonomyError;
use crate::graph::{Digraph, Vertex};

use super::TaxonomyResult;

/// Check that `graph` is acyclic with exactly one root, returning the root.
///
/// Cycles are reported before root-count problems.
pub(crate) fn ensure_rooted_dag(graph: &Digraph) -> TaxonomyResult<Vertex> {
    if let Some(vertex) = graph.find_cycle() {
        return Err(TaxonomyError::Cyclic { vertex });
    }

    match graph.roots().as_slice() {
        [root] => Ok(*root),
        roots => Err(TaxonomyError::RootCount {
            count: roots.len(),
            roots: roots.to_vec(),
        }),
    }
}
