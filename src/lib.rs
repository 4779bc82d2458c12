// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # wordnet-sap
//!
//! Semantic relatedness over a hypernym taxonomy via shortest ancestral paths.
//!
//! ## Architecture
//!
//! - **Graph primitives** (`graph`): immutable digraph and multi-source BFS index
//! - **SAP engine** (`sap`): closest common ancestor between two vertex sets
//! - **Taxonomy** (`taxonomy`): synset/hypernym loading, rooted-DAG validation,
//!   noun-level queries
//! - **Outcast** (`outcast`): the noun least related to the rest of a list
//!
//! ## Library usage
//!
//! ```
//! use wordnet_sap::taxonomy::WordNet;
//! use wordnet_sap::outcast::Outcast;
//!
//! let synsets = "0,entity,x\n1,animal,x\n2,horse,x\n3,zebra,x\n4,table,x\n";
//! let hypernyms = "1,0\n2,1\n3,1\n4,0\n";
//! let wordnet = WordNet::parse(synsets, hypernyms).unwrap();
//!
//! assert_eq!(wordnet.distance("horse", "zebra").unwrap(), 2);
//! assert_eq!(wordnet.sap("horse", "zebra").unwrap(), "animal");
//! assert_eq!(Outcast::new(&wordnet).outcast(&["horse", "zebra", "table"]).unwrap(), "table");
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod outcast;
pub mod sap;
pub mod taxonomy;
