//! Rich diagnostic error types for wordnet-sap.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so users know exactly what
//! went wrong and how to fix it.
//!
//! "No common ancestor" is deliberately absent from this module: the SAP engine
//! reports it as `None`, a normal query outcome.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for wordnet-sap.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text, source spans) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum WordNetError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Taxonomy(#[from] TaxonomyError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Outcast(#[from] OutcastError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Diagnostic)]
pub enum GraphError {
    #[error("invalid vertex {vertex}: graph has {vertex_count} vertices")]
    #[diagnostic(
        code(wordnet::graph::invalid_vertex),
        help(
            "Vertex ids are dense integers in 0..{vertex_count}. \
             Check that the id came from the same graph the query runs against."
        )
    )]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("empty source set: a reachability query needs at least one vertex")]
    #[diagnostic(
        code(wordnet::graph::empty_sources),
        help("Provide at least one source vertex on each side of a SAP query.")
    )]
    EmptySourceSet,

    #[error("graph too large: cannot allocate {vertex_count} vertices")]
    #[diagnostic(
        code(wordnet::graph::too_large),
        help("Check the vertex count in the digraph header.")
    )]
    TooLarge { vertex_count: usize },

    #[error("digraph parse error: {message}")]
    #[diagnostic(
        code(wordnet::graph::parse),
        help(
            "Digraph text is whitespace-separated integers: the vertex count V, \
             the edge count E, then E pairs `v w` with 0 <= v, w < V."
        )
    )]
    Parse { message: String },
}

// ---------------------------------------------------------------------------
// Taxonomy errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum TaxonomyError {
    #[error("failed to read {path}")]
    #[diagnostic(
        code(wordnet::taxonomy::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{file} line {line}: {message}")]
    #[diagnostic(
        code(wordnet::taxonomy::parse),
        help(
            "Synset lines look like `id,noun1 noun2,gloss` with ids dense from 0. \
             Hypernym lines look like `id,parent1,parent2` and may only name known ids."
        )
    )]
    Parse {
        file: &'static str,
        line: usize,
        message: String,
    },

    #[error("malformed taxonomy: hypernym graph has a cycle through synset {vertex}")]
    #[diagnostic(
        code(wordnet::taxonomy::cyclic),
        help("Hypernym edges must form a DAG. Remove the edge that closes the cycle.")
    )]
    Cyclic { vertex: usize },

    #[error("malformed taxonomy: expected exactly one root, found {count} {roots:?}")]
    #[diagnostic(
        code(wordnet::taxonomy::root_count),
        help(
            "Exactly one synset may lack a hypernym. \
             Attach every other root below the most general concept."
        )
    )]
    RootCount { count: usize, roots: Vec<usize> },

    #[error("unknown noun: \"{noun}\"")]
    #[diagnostic(
        code(wordnet::taxonomy::unknown_noun),
        help("The word does not appear in any synset. List known nouns with `wordnet-sap nouns`.")
    )]
    UnknownNoun { noun: String },

    #[error("no common ancestor between \"{a}\" and \"{b}\"")]
    #[diagnostic(
        code(wordnet::taxonomy::disconnected),
        help(
            "A validated rooted DAG always has the root as a common ancestor. \
             This indicates a bug; please file a report with the input files."
        )
    )]
    Disconnected { a: String, b: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),
}

impl TaxonomyError {
    /// Whether this error means the input files do not describe a rooted DAG.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Cyclic { .. } | Self::RootCount { .. })
    }
}

// ---------------------------------------------------------------------------
// Outcast errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum OutcastError {
    #[error("cannot pick an outcast from an empty list")]
    #[diagnostic(
        code(wordnet::outcast::empty),
        help("Provide at least one noun.")
    )]
    EmptyInput,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Taxonomy(#[from] TaxonomyError),
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file: {path}")]
    #[diagnostic(
        code(wordnet::config::read),
        help("Check that the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file: {path}")]
    #[diagnostic(
        code(wordnet::config::write),
        help("Check that the parent directory exists and you have write permissions.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {message}")]
    #[diagnostic(
        code(wordnet::config::parse),
        help("The config file must be valid TOML with `synsets` and `hypernyms` paths.")
    )]
    Parse { path: String, message: String },
}

/// Convenience result type for wordnet-sap operations.
pub type WordNetResult<T> = std::result::Result<T, WordNetError>;
