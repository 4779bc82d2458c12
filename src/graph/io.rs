//! Plain-text digraph reader.
//!
//! The format is a stream of whitespace-separated non-negative integers: the
//! vertex count `V`, the edge count `E`, then `E` pairs `v w` for the edges
//! `v -> w`. Line breaks carry no meaning.

use crate::error::GraphError;

use super::{Digraph, GraphResult, Vertex};

/// Parse a digraph from its text form.
pub fn parse_digraph(text: &str) -> GraphResult<Digraph> {
    let mut tokens = text.split_whitespace().enumerate();
    let mut next = |what: &str| -> GraphResult<usize> {
        let (pos, token) = tokens.next().ok_or_else(|| GraphError::Parse {
            message: format!("unexpected end of input, expected {what}"),
        })?;
        token.parse::<usize>().map_err(|_| GraphError::Parse {
            message: format!("token {} (\"{token}\") is not a valid {what}", pos + 1),
        })
    };

    let vertex_count = next("vertex count")?;
    let edge_count = next("edge count")?;
    // The header is untrusted; grow with the edges actually present.
    let mut edges = Vec::new();
    for _ in 0..edge_count {
        let from = next("edge source")?;
        let to = next("edge target")?;
        edges.push((from, to));
    }

    if let Some((pos, token)) = tokens.next() {
        return Err(GraphError::Parse {
            message: format!(
                "trailing token {} (\"{token}\") after {edge_count} edges",
                pos + 1
            ),
        });
    }

    Digraph::from_edges(vertex_count, edges)
}

/// Parse whitespace-separated vertex ids, taken two at a time, into query pairs.
///
/// Ids are not range-checked here; the engine rejects them at query time.
pub fn parse_pairs(text: &str) -> GraphResult<Vec<(Vertex, Vertex)>> {
    let ids = text
        .split_whitespace()
        .enumerate()
        .map(|(pos, token)| {
            token.parse::<Vertex>().map_err(|_| GraphError::Parse {
                message: format!("token {} (\"{token}\") is not a valid vertex id", pos + 1),
            })
        })
        .collect::<GraphResult<Vec<_>>>()?;
    if ids.len() % 2 != 0 {
        return Err(GraphError::Parse {
            message: format!("expected vertex pairs, got an odd number of ids ({})", ids.len()),
        });
    }
    Ok(ids.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_counts_and_edges() {
        let g = parse_digraph("3\n2\n1 0\n2 0\n").unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.out_edges(2).unwrap(), &[0]);
    }

    #[test]
    fn layout_is_free_form() {
        let g = parse_digraph("  4 3  0 1 1 2\n\n 2 3").unwrap();
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.roots(), vec![3]);
    }

    #[test]
    fn missing_edges_rejected() {
        let err = parse_digraph("3 2 1 0").unwrap_err();
        assert!(matches!(err, GraphError::Parse { .. }));
    }

    #[test]
    fn non_numeric_token_rejected() {
        let err = parse_digraph("3 1 x 0").unwrap_err();
        let GraphError::Parse { message } = err else {
            panic!("expected parse error");
        };
        assert!(message.contains("\"x\""));
    }

    #[test]
    fn trailing_tokens_rejected() {
        assert!(parse_digraph("2 1 1 0 7").is_err());
    }

    #[test]
    fn oversized_edge_count_rejected() {
        let err = parse_digraph("1 18446744073709551615").unwrap_err();
        assert!(matches!(err, GraphError::Parse { .. }));
    }

    #[test]
    fn oversized_vertex_count_rejected() {
        let err = parse_digraph("18446744073709551615 0").unwrap_err();
        assert_eq!(
            err,
            GraphError::TooLarge {
                vertex_count: usize::MAX
            }
        );
    }

    #[test]
    fn pairs_parsed_in_order() {
        assert_eq!(parse_pairs("1 2\n3 4\n").unwrap(), vec![(1, 2), (3, 4)]);
        assert!(parse_pairs("  \n").unwrap().is_empty());
    }

    #[test]
    fn odd_pair_count_rejected() {
        let GraphError::Parse { message } = parse_pairs("1 2 3").unwrap_err() else {
            panic!("expected parse error");
        };
        assert!(message.contains("odd number of ids (3)"));
    }

    #[test]
    fn non_numeric_pair_rejected() {
        assert!(matches!(
            parse_pairs("1 -2"),
            Err(GraphError::Parse { .. })
        ));
    }

    #[test]
    fn out_of_range_edge_rejected() {
        let err = parse_digraph("2 1 0 5").unwrap_err();
        assert!(matches!(err, GraphError::InvalidVertex { vertex: 5, .. }));
    }
}
