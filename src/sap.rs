//! Shortest ancestral path (SAP) engine.
//!
//! An ancestral path between vertex sets `A` and `B` is a pair of directed paths,
//! one from some `a ∈ A` and one from some `b ∈ B`, that end at the same vertex:
//! the common ancestor. The engine finds the ancestor minimising the combined
//! hop length.
//!
//! Each query builds exactly two [`Reachability`] indices, one per side, seeded
//! with the whole side at once, then scans the vertices reachable from both.
//! Nothing is cached between queries, so a shared `&Sap` answers concurrent
//! queries without coordination.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::graph::{Digraph, GraphResult, Reachability, Vertex};

/// The winning common ancestor of a SAP query and the combined path length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AncestralPath {
    /// Common ancestor where the two partial paths meet.
    pub ancestor: Vertex,
    /// Hops from side A to the ancestor plus hops from side B to it.
    pub distance: usize,
}

/// Text form of a query result: `length = L, ancestor = A`, with `-1` for
/// both fields when the sides share no ancestor.
pub fn format_result(result: Option<AncestralPath>) -> String {
    match result {
        Some(path) => format!("length = {}, ancestor = {}", path.distance, path.ancestor),
        None => "length = -1, ancestor = -1".to_string(),
    }
}

/// One set-to-set query for [`Sap::batch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SapQuery {
    pub a: Vec<Vertex>,
    pub b: Vec<Vertex>,
}

impl SapQuery {
    pub fn new(a: Vec<Vertex>, b: Vec<Vertex>) -> Self {
        Self { a, b }
    }
}

impl From<(Vertex, Vertex)> for SapQuery {
    fn from((v, w): (Vertex, Vertex)) -> Self {
        Self {
            a: vec![v],
            b: vec![w],
        }
    }
}

/// SAP engine over an owned, immutable digraph.
///
/// The graph need not be acyclic. Single vertices are passed as one-element
/// sets, e.g. `sap.distance([v], [w])`.
#[derive(Debug, Clone)]
pub struct Sap {
    graph: Digraph,
}

impl Sap {
    /// Take ownership of `graph` for the lifetime of the engine.
    pub fn new(graph: Digraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Shortest ancestral path between any vertex of `a` and any vertex of `b`.
    ///
    /// Returns `Ok(None)` when no vertex is reachable from both sides. Among
    /// ancestors at the same minimal distance the lowest vertex id wins.
    ///
    /// Fails with `InvalidVertex` for an out-of-range id and `EmptySourceSet`
    /// if either side is empty.
    pub fn path<A, B>(&self, a: A, b: B) -> GraphResult<Option<AncestralPath>>
    where
        A: IntoIterator<Item = Vertex>,
        B: IntoIterator<Item = Vertex>,
    {
        let from_a = Reachability::build(&self.graph, a)?;
        let from_b = Reachability::build(&self.graph, b)?;

        // Probe the smaller index against the larger one; comparing
        // (distance, vertex) keeps the lowest id on ties.
        let (small, large) = if from_a.len() <= from_b.len() {
            (&from_a, &from_b)
        } else {
            (&from_b, &from_a)
        };
        let best = small
            .iter()
            .filter_map(|(v, d)| large.distance_to(v).map(|other| (d + other, v)))
            .min()
            .map(|(distance, ancestor)| AncestralPath { ancestor, distance });

        tracing::debug!(
            reach_a = from_a.len(),
            reach_b = from_b.len(),
            ancestor = ?best.map(|p| p.ancestor),
            distance = ?best.map(|p| p.distance),
            "sap query"
        );
        Ok(best)
    }

    /// Length of the shortest ancestral path, or `None` if there is none.
    pub fn distance<A, B>(&self, a: A, b: B) -> GraphResult<Option<usize>>
    where
        A: IntoIterator<Item = Vertex>,
        B: IntoIterator<Item = Vertex>,
    {
        Ok(self.path(a, b)?.map(|p| p.distance))
    }

    /// Common ancestor on a shortest ancestral path, or `None` if there is none.
    pub fn ancestor<A, B>(&self, a: A, b: B) -> GraphResult<Option<Vertex>>
    where
        A: IntoIterator<Item = Vertex>,
        B: IntoIterator<Item = Vertex>,
    {
        Ok(self.path(a, b)?.map(|p| p.ancestor))
    }

    /// Answer a burst of independent queries on rayon's thread pool.
    ///
    /// Results line up with `queries`; one failing query does not affect the
    /// others.
    pub fn batch(&self, queries: &[SapQuery]) -> Vec<GraphResult<Option<AncestralPath>>> {
        queries
            .par_iter()
            .map(|q| self.path(q.a.iter().copied(), q.b.iter().copied()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn sap(vertex_count: usize, edges: &[(Vertex, Vertex)]) -> Sap {
        Sap::new(Digraph::from_edges(vertex_count, edges.iter().copied()).unwrap())
    }

    /// Two children under one root: 1 -> 0, 2 -> 0.
    fn siblings() -> Sap {
        sap(3, &[(1, 0), (2, 0)])
    }

    /// A 13-vertex tree-shaped taxonomy (root 0):
    ///
    /// ```text
    ///            0
    ///          /   \
    ///         1     2
    ///        / \   / \
    ///       3   4 5   6
    ///      / \       / \
    ///     7   8     9  10
    ///                  / \
    ///                 11 12
    /// ```
    fn tree() -> Sap {
        sap(
            13,
            &[
                (1, 0),
                (2, 0),
                (3, 1),
                (4, 1),
                (5, 2),
                (6, 2),
                (7, 3),
                (8, 3),
                (9, 6),
                (10, 6),
                (11, 10),
                (12, 10),
            ],
        )
    }

    #[test]
    fn siblings_meet_at_root() {
        let s = siblings();
        assert_eq!(s.distance([1], [2]).unwrap(), Some(2));
        assert_eq!(s.ancestor([1], [2]).unwrap(), Some(0));
    }

    #[test]
    fn vertex_is_its_own_ancestor() {
        let s = tree();
        for v in 0..13 {
            assert_eq!(s.distance([v], [v]).unwrap(), Some(0));
            assert_eq!(s.ancestor([v], [v]).unwrap(), Some(v));
        }
    }

    #[test]
    fn ancestor_descendant_pair() {
        let s = tree();
        assert_eq!(
            s.path([11], [2]).unwrap(),
            Some(AncestralPath {
                ancestor: 2,
                distance: 3
            })
        );
    }

    #[test]
    fn distance_is_symmetric() {
        let s = tree();
        for v in 0..13 {
            for w in 0..13 {
                assert_eq!(s.distance([v], [w]).unwrap(), s.distance([w], [v]).unwrap());
            }
        }
    }

    #[test]
    fn deep_pair_in_tree() {
        let s = tree();
        assert_eq!(s.distance([7], [12]).unwrap(), Some(7));
        assert_eq!(s.ancestor([7], [12]).unwrap(), Some(0));
        assert_eq!(s.distance([9], [11]).unwrap(), Some(3));
        assert_eq!(s.ancestor([9], [11]).unwrap(), Some(6));
    }

    #[test]
    fn disconnected_pair_has_no_path() {
        // 1 -> 0 and 3 -> 2 share nothing.
        let s = sap(4, &[(1, 0), (3, 2)]);
        assert_eq!(s.distance([1], [3]).unwrap(), None);
        assert_eq!(s.ancestor([1], [3]).unwrap(), None);
        assert_eq!(s.path([0], [2]).unwrap(), None);
    }

    #[test]
    fn set_query_takes_best_pair() {
        let s = tree();
        // 7 and 8 are siblings under 3.
        assert_eq!(s.distance([7, 11], [9, 8]).unwrap(), Some(2));
        assert_eq!(s.ancestor([7, 11], [9]).unwrap(), Some(6));
        assert_eq!(s.distance([7, 11], [9]).unwrap(), Some(3));
    }

    #[test]
    fn singleton_set_matches_single_vertex() {
        let s = tree();
        assert_eq!(
            s.distance(vec![5], vec![12]).unwrap(),
            s.distance([5], [12]).unwrap()
        );
    }

    #[test]
    fn adding_candidates_never_increases_distance() {
        let s = tree();
        let base = s.distance([7], [12]).unwrap().unwrap();
        for extra in 0..13 {
            let widened = s.distance([7, extra], [12]).unwrap().unwrap();
            assert!(widened <= base);
            let widened = s.distance([7], [12, extra]).unwrap().unwrap();
            assert!(widened <= base);
        }
    }

    #[test]
    fn ties_resolve_to_lowest_vertex_id() {
        // 4 and 5 both have parents 2 and 3 (and 2, 3 both lead to 0 via 1).
        // Ancestors 2 and 3 each give distance 2.
        let s = sap(6, &[(4, 3), (4, 2), (5, 3), (5, 2), (2, 1), (3, 1), (1, 0)]);
        for _ in 0..10 {
            assert_eq!(
                s.path([4], [5]).unwrap(),
                Some(AncestralPath {
                    ancestor: 2,
                    distance: 2
                })
            );
        }
    }

    #[test]
    fn works_on_cyclic_graphs() {
        // 0 -> 1 -> 2 -> 0, 3 -> 2
        let s = sap(4, &[(0, 1), (1, 2), (2, 0), (3, 2)]);
        assert_eq!(
            s.path([0], [3]).unwrap(),
            Some(AncestralPath {
                ancestor: 0,
                distance: 2
            })
        );
        assert_eq!(s.distance([1], [0]).unwrap(), Some(1));
    }

    #[test]
    fn invalid_vertex_rejected() {
        let s = siblings();
        assert!(matches!(
            s.distance([3], [0]),
            Err(GraphError::InvalidVertex { vertex: 3, vertex_count: 3 })
        ));
        assert!(matches!(
            s.ancestor([0], [1, 99]),
            Err(GraphError::InvalidVertex { vertex: 99, .. })
        ));
    }

    #[test]
    fn empty_set_rejected() {
        let s = siblings();
        assert_eq!(s.distance(Vec::new(), [1]).unwrap_err(), GraphError::EmptySourceSet);
        assert_eq!(s.ancestor([1], Vec::new()).unwrap_err(), GraphError::EmptySourceSet);
    }

    #[test]
    fn text_form_uses_minus_one_for_no_path() {
        let s = sap(4, &[(1, 0), (2, 0)]);
        assert_eq!(
            format_result(s.path([1], [2]).unwrap()),
            "length = 2, ancestor = 0"
        );
        assert_eq!(
            format_result(s.path([1], [3]).unwrap()),
            "length = -1, ancestor = -1"
        );
    }

    #[test]
    fn batch_matches_sequential() {
        let s = tree();
        let queries: Vec<SapQuery> = (0..13)
            .flat_map(|v| (0..13).map(move |w| SapQuery::from((v, w))))
            .chain([SapQuery::new(vec![7, 11], vec![9, 8]), SapQuery::new(Vec::new(), vec![1])])
            .collect();
        let results = s.batch(&queries);
        assert_eq!(results.len(), queries.len());
        for (q, result) in queries.iter().zip(&results) {
            let sequential = s.path(q.a.iter().copied(), q.b.iter().copied());
            assert_eq!(result, &sequential);
        }
        assert!(results.last().unwrap().is_err());
    }
}
