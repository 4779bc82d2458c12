//! WordNet-style noun taxonomy over the SAP engine.
//!
//! A [`WordNet`] owns the synsets, the noun → synset-id index and a [`Sap`]
//! engine over the hypernym digraph. Construction parses both input files and
//! validates that the hypernym graph is a rooted DAG; a value of this type is
//! therefore always safe to query.
//!
//! Nouns are ambiguous in general ("bass" the fish, "bass" the voice), so every
//! noun-level query runs the SAP engine over the full set of synsets the noun
//! may denote.

mod parse;
mod validate;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::WordNetConfig;
use crate::error::TaxonomyError;
use crate::graph::{Digraph, Vertex};
use crate::sap::{AncestralPath, Sap};

/// Result type for taxonomy operations.
pub type TaxonomyResult<T> = std::result::Result<T, TaxonomyError>;

/// A set of synonymous nouns naming one concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    /// Vertex id in the hypernym graph.
    pub id: Vertex,
    /// Synonyms, in file order.
    pub nouns: Vec<String>,
    /// Free-text definition. Carried through, never interpreted.
    pub gloss: String,
}

impl Synset {
    /// The synonyms joined by single spaces, as written in the synset file.
    pub fn label(&self) -> String {
        self.nouns.join(" ")
    }
}

/// Summary statistics of a loaded taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyInfo {
    pub synsets: usize,
    pub nouns: usize,
    pub edges: usize,
    pub root: Vertex,
    pub root_label: String,
    /// Synsets nothing else points to (the most specific concepts).
    pub leaves: usize,
}

impl std::fmt::Display for TaxonomyInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "wordnet taxonomy info")?;
        writeln!(f, "  synsets:  {}", self.synsets)?;
        writeln!(f, "  nouns:    {}", self.nouns)?;
        writeln!(f, "  edges:    {}", self.edges)?;
        writeln!(f, "  root:     {} ({})", self.root, self.root_label)?;
        writeln!(f, "  leaves:   {}", self.leaves)?;
        Ok(())
    }
}

/// A validated noun taxonomy answering SAP queries by noun.
#[derive(Debug, Clone)]
pub struct WordNet {
    synsets: Vec<Synset>,
    noun_index: BTreeMap<String, Vec<Vertex>>,
    sap: Sap,
    root: Vertex,
}

impl WordNet {
    /// Load from the synset and hypernym files.
    pub fn from_files(synsets: &Path, hypernyms: &Path) -> TaxonomyResult<Self> {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|e| TaxonomyError::Io {
                path: path.display().to_string(),
                source: e,
            })
        };
        Self::parse(&read(synsets)?, &read(hypernyms)?)
    }

    /// Load from the files named in `config`.
    pub fn from_config(config: &WordNetConfig) -> TaxonomyResult<Self> {
        Self::from_files(&config.synsets, &config.hypernyms)
    }

    /// Build from the text of the synset and hypernym files.
    ///
    /// Fails with a `Parse` error for malformed lines, and with `Cyclic` or
    /// `RootCount` if the hypernym graph is not a rooted DAG.
    pub fn parse(synsets: &str, hypernyms: &str) -> TaxonomyResult<Self> {
        let synsets = parse::parse_synsets(synsets)?;
        let edges = parse::parse_hypernyms(hypernyms, synsets.len())?;
        Self::from_parts(synsets, edges)
    }

    /// Build from already-parsed synsets (ids `0..n` in order) and
    /// `(hyponym, hypernym)` edges.
    pub fn from_parts(synsets: Vec<Synset>, edges: Vec<(Vertex, Vertex)>) -> TaxonomyResult<Self> {
        if let Some((position, synset)) = synsets.iter().enumerate().find(|(i, s)| s.id != *i) {
            return Err(TaxonomyError::Parse {
                file: parse::SYNSETS_FILE,
                line: position + 1,
                message: format!("expected synset id {position}, found {}", synset.id),
            });
        }

        let graph = Digraph::from_edges(synsets.len(), edges)?;
        let root = validate::ensure_rooted_dag(&graph)?;

        let mut noun_index: BTreeMap<String, Vec<Vertex>> = BTreeMap::new();
        for synset in &synsets {
            for noun in &synset.nouns {
                let ids = noun_index.entry(noun.clone()).or_default();
                if !ids.contains(&synset.id) {
                    ids.push(synset.id);
                }
            }
        }

        tracing::info!(
            synsets = synsets.len(),
            nouns = noun_index.len(),
            edges = graph.edge_count(),
            root,
            "loaded taxonomy"
        );

        Ok(Self {
            synsets,
            noun_index,
            sap: Sap::new(graph),
            root,
        })
    }

    /// Every noun exactly once, in sorted order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.noun_index.keys().map(String::as_str)
    }

    /// Whether `word` names at least one synset.
    pub fn is_noun(&self, word: &str) -> bool {
        self.noun_index.contains_key(word)
    }

    /// Synset ids a noun may denote.
    pub fn synset_ids(&self, noun: &str) -> Option<&[Vertex]> {
        self.noun_index.get(noun).map(Vec::as_slice)
    }

    pub fn synset(&self, id: Vertex) -> Option<&Synset> {
        self.synsets.get(id)
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// The unique synset without hypernyms.
    pub fn root(&self) -> Vertex {
        self.root
    }

    /// The underlying SAP engine, for vertex-level queries.
    pub fn sap_engine(&self) -> &Sap {
        &self.sap
    }

    /// Shortest ancestral path between any synsets of `noun_a` and `noun_b`.
    pub fn path(&self, noun_a: &str, noun_b: &str) -> TaxonomyResult<AncestralPath> {
        let ids_a = self.lookup(noun_a)?;
        let ids_b = self.lookup(noun_b)?;
        self.sap
            .path(ids_a.iter().copied(), ids_b.iter().copied())?
            .ok_or_else(|| TaxonomyError::Disconnected {
                a: noun_a.to_string(),
                b: noun_b.to_string(),
            })
    }

    /// Semantic distance: length of the shortest ancestral path between the nouns.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> TaxonomyResult<usize> {
        Ok(self.path(noun_a, noun_b)?.distance)
    }

    /// The common-ancestor synset on a shortest ancestral path.
    pub fn ancestor_synset(&self, noun_a: &str, noun_b: &str) -> TaxonomyResult<&Synset> {
        let ancestor = self.path(noun_a, noun_b)?.ancestor;
        // Vertex ids and synset ids coincide by construction.
        Ok(&self.synsets[ancestor])
    }

    /// Label of the common-ancestor synset (its synonyms, space-separated).
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> TaxonomyResult<String> {
        Ok(self.ancestor_synset(noun_a, noun_b)?.label())
    }

    pub fn info(&self) -> TaxonomyInfo {
        let graph = self.sap.graph();
        TaxonomyInfo {
            synsets: self.synsets.len(),
            nouns: self.noun_index.len(),
            edges: graph.edge_count(),
            root: self.root,
            root_label: self.synsets[self.root].label(),
            leaves: graph.reverse().roots().len(),
        }
    }

    fn lookup(&self, noun: &str) -> TaxonomyResult<&[Vertex]> {
        self.synset_ids(noun).ok_or_else(|| TaxonomyError::UnknownNoun {
            noun: noun.to_string(),
        })
    }
}
