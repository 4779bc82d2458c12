//! Outcast detection: the noun least related to the others in a list.

use crate::error::OutcastError;
use crate::taxonomy::WordNet;

/// Result type for outcast operations.
pub type OutcastResult<T> = std::result::Result<T, OutcastError>;

/// Picks the outcast of a noun list by summed SAP distance.
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// For each noun, the sum of its distances to every noun in the list.
    ///
    /// A noun's distance to itself is 0, so repeated entries only add their
    /// distance to the others.
    pub fn scores<S: AsRef<str>>(&self, nouns: &[S]) -> OutcastResult<Vec<usize>> {
        let mut totals = vec![0usize; nouns.len()];
        for i in 0..nouns.len() {
            for j in (i + 1)..nouns.len() {
                let d = self.wordnet.distance(nouns[i].as_ref(), nouns[j].as_ref())?;
                totals[i] += d;
                totals[j] += d;
            }
        }
        // A single noun never enters the pair loop; still reject it if unknown.
        if let [only] = nouns {
            self.wordnet.distance(only.as_ref(), only.as_ref())?;
        }
        Ok(totals)
    }

    /// The noun with the largest summed distance to the rest.
    ///
    /// Ties go to the noun appearing first. Fails with `EmptyInput` for an
    /// empty list and propagates `UnknownNoun`.
    pub fn outcast<S: AsRef<str>>(&self, nouns: &[S]) -> OutcastResult<String> {
        let (best, _) = self.rank(nouns)?;
        Ok(nouns[best].as_ref().to_string())
    }

    /// Index of the outcast in `nouns` together with every noun's score.
    ///
    /// Same selection rule as [`Outcast::outcast`], for callers that also want
    /// the totals without running the pairwise queries twice.
    pub fn rank<S: AsRef<str>>(&self, nouns: &[S]) -> OutcastResult<(usize, Vec<usize>)> {
        if nouns.is_empty() {
            return Err(OutcastError::EmptyInput);
        }
        let totals = self.scores(nouns)?;

        let mut best = 0;
        for (i, &total) in totals.iter().enumerate().skip(1) {
            if total > totals[best] {
                best = i;
            }
        }

        tracing::debug!(
            candidates = nouns.len(),
            outcast = nouns[best].as_ref(),
            total = totals[best],
            "outcast selected"
        );
        Ok((best, totals))
    }
}
