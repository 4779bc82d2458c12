//! Multi-source breadth-first reachability.
//!
//! A [`Reachability`] index records, for every vertex reachable from a set of
//! sources, the hop count from the nearest source. All sources share one
//! frontier at depth 0, so a set query costs a single traversal rather than one
//! per member.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use crate::error::GraphError;

use super::{Digraph, GraphResult, Vertex};

/// Hop distances from a source set to every vertex it can reach.
///
/// Only reachable vertices have an entry. Indices are cheap, per-query values:
/// build one per query side and drop it when the query is answered.
#[derive(Debug, Clone)]
pub struct Reachability {
    distances: HashMap<Vertex, usize>,
}

impl Reachability {
    /// Run a BFS from every vertex in `sources` at once.
    ///
    /// Fails with [`GraphError::EmptySourceSet`] if `sources` is empty, or with
    /// [`GraphError::InvalidVertex`] if any source is out of range. Duplicate
    /// sources are harmless. Terminates on cyclic graphs since a vertex is
    /// never enqueued twice.
    pub fn build<I>(graph: &Digraph, sources: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut distances: HashMap<Vertex, usize> = HashMap::new();
        let mut queue: VecDeque<(Vertex, usize)> = VecDeque::new();

        for source in sources {
            graph.check_vertex(source)?;
            if let Entry::Vacant(slot) = distances.entry(source) {
                slot.insert(0);
                queue.push_back((source, 0));
            }
        }
        if queue.is_empty() {
            return Err(GraphError::EmptySourceSet);
        }

        while let Some((vertex, depth)) = queue.pop_front() {
            for &next in graph.neighbors(vertex) {
                if let Entry::Vacant(slot) = distances.entry(next) {
                    slot.insert(depth + 1);
                    queue.push_back((next, depth + 1));
                }
            }
        }

        Ok(Self { distances })
    }

    /// Whether `v` is reachable from the source set.
    pub fn has_path_to(&self, v: Vertex) -> bool {
        self.distances.contains_key(&v)
    }

    /// Hop count from the nearest source to `v`, or `None` if unreachable.
    pub fn distance_to(&self, v: Vertex) -> Option<usize> {
        self.distances.get(&v).copied()
    }

    /// Number of reachable vertices, sources included.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Reachable vertices with their distances, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, usize)> + '_ {
        self.distances.iter().map(|(&v, &d)| (v, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Digraph {
        // 4 -> 3 -> 2 -> 1 -> 0
        Digraph::from_edges(5, [(4, 3), (3, 2), (2, 1), (1, 0)]).unwrap()
    }

    #[test]
    fn single_source_distances() {
        let reach = Reachability::build(&chain(), [4]).unwrap();
        assert_eq!(reach.len(), 5);
        assert_eq!(reach.distance_to(4), Some(0));
        assert_eq!(reach.distance_to(0), Some(4));
    }

    #[test]
    fn unreachable_vertices_have_no_entry() {
        let reach = Reachability::build(&chain(), [2]).unwrap();
        assert!(!reach.has_path_to(3));
        assert_eq!(reach.distance_to(4), None);
        assert!(reach.has_path_to(0));
    }

    #[test]
    fn multi_source_uses_nearest_source() {
        let reach = Reachability::build(&chain(), [4, 1]).unwrap();
        assert_eq!(reach.distance_to(3), Some(1));
        assert_eq!(reach.distance_to(0), Some(1));
        assert_eq!(reach.distance_to(2), Some(2));
    }

    #[test]
    fn duplicate_sources_are_ignored() {
        let reach = Reachability::build(&chain(), [3, 3, 3]).unwrap();
        assert_eq!(reach.distance_to(3), Some(0));
        assert_eq!(reach.len(), 4);
    }

    #[test]
    fn terminates_on_cycles() {
        let g = Digraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let reach = Reachability::build(&g, [0]).unwrap();
        assert_eq!(reach.distance_to(0), Some(0));
        assert_eq!(reach.distance_to(2), Some(2));
        assert_eq!(reach.iter().count(), 3);
    }

    #[test]
    fn shortest_of_several_routes() {
        // 0 -> 1 -> 2 -> 3 and a shortcut 0 -> 3
        let g = Digraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (0, 3)]).unwrap();
        let reach = Reachability::build(&g, [0]).unwrap();
        assert_eq!(reach.distance_to(3), Some(1));
    }

    #[test]
    fn empty_sources_rejected() {
        let err = Reachability::build(&chain(), []).unwrap_err();
        assert_eq!(err, GraphError::EmptySourceSet);
    }

    #[test]
    fn invalid_source_rejected() {
        let err = Reachability::build(&chain(), [0, 9]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidVertex { vertex: 9, .. }));
    }
}
