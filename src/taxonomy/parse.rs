//! Line parsers for the synset and hypernym files.

use crate::error::TaxonomyError;
use crate::graph::Vertex;

use super::{Synset, TaxonomyResult};

pub(crate) const SYNSETS_FILE: &str = "synsets";
pub(crate) const HYPERNYMS_FILE: &str = "hypernyms";

fn parse_error(file: &'static str, line: usize, message: impl Into<String>) -> TaxonomyError {
    TaxonomyError::Parse {
        file,
        line,
        message: message.into(),
    }
}

fn parse_id(file: &'static str, line: usize, field: &str) -> TaxonomyResult<Vertex> {
    let field = field.trim();
    field
        .parse::<Vertex>()
        .map_err(|_| parse_error(file, line, format!("\"{field}\" is not a synset id")))
}

/// Parse `id,noun1 noun2 ...,gloss` lines.
///
/// Ids must run densely from 0 in file order. The gloss is everything after the
/// second comma and may be absent. Blank lines are skipped.
pub(crate) fn parse_synsets(text: &str) -> TaxonomyResult<Vec<Synset>> {
    let mut synsets: Vec<Synset> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let mut fields = raw.splitn(3, ',');
        let id = parse_id(SYNSETS_FILE, line, fields.next().unwrap_or_default())?;
        if id != synsets.len() {
            return Err(parse_error(
                SYNSETS_FILE,
                line,
                format!("expected synset id {}, found {id}", synsets.len()),
            ));
        }

        let nouns: Vec<String> = fields
            .next()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if nouns.is_empty() {
            return Err(parse_error(SYNSETS_FILE, line, format!("synset {id} has no nouns")));
        }

        let gloss = fields.next().unwrap_or_default().to_string();
        synsets.push(Synset { id, nouns, gloss });
    }

    Ok(synsets)
}

/// Parse `id,parent1,parent2,...` lines into `(id, parent)` edges.
///
/// Every id must name one of the `synset_count` synsets. An id may appear on
/// several lines; its edges accumulate. Empty fields and blank lines are
/// skipped.
pub(crate) fn parse_hypernyms(
    text: &str,
    synset_count: usize,
) -> TaxonomyResult<Vec<(Vertex, Vertex)>> {
    let mut edges = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let mut fields = raw.split(',');
        let id = parse_id(HYPERNYMS_FILE, line, fields.next().unwrap_or_default())?;
        check_known(line, id, synset_count)?;

        for field in fields.filter(|f| !f.trim().is_empty()) {
            let parent = parse_id(HYPERNYMS_FILE, line, field)?;
            check_known(line, parent, synset_count)?;
            edges.push((id, parent));
        }
    }

    Ok(edges)
}

fn check_known(line: usize, id: Vertex, synset_count: usize) -> TaxonomyResult<()> {
    if id < synset_count {
        Ok(())
    } else {
        Err(parse_error(
            HYPERNYMS_FILE,
            line,
            format!("unknown synset id {id} (only {synset_count} synsets)"),
        ))
    }
}
