//! Ordered collection of labeled sequences.

use super::sequence::{CheckedSequence, LabeledSequence};
use crate::types::ChouFasmanTable;
use crate::Result;

/// Sequences to evaluate plus optional amino-acid reference data.
///
/// Order does not affect any metric; it fixes the iteration and reduction
/// order so repeated runs are reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    sequences: Vec<LabeledSequence>,
    chou_fasman: Option<ChouFasmanTable>,
}

impl Dataset {
    /// Empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a Chou-Fasman parameter table.
    #[must_use]
    pub fn with_chou_fasman(mut self, table: ChouFasmanTable) -> Self {
        self.chou_fasman = Some(table);
        self
    }

    /// The attached Chou-Fasman table.
    #[must_use]
    pub fn chou_fasman(&self) -> Option<&ChouFasmanTable> {
        self.chou_fasman.as_ref()
    }

    /// Append a sequence.
    pub fn push(&mut self, sequence: LabeledSequence) {
        self.sequences.push(sequence);
    }

    /// Append all sequences of `other`. Its Chou-Fasman table, if any,
    /// replaces this dataset's.
    pub fn merge(&mut self, other: Dataset) {
        if other.chou_fasman.is_some() {
            self.chou_fasman = other.chou_fasman;
        }
        self.sequences.extend(other.sequences);
    }

    /// Number of sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Whether the dataset has no sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Sequence at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LabeledSequence> {
        self.sequences.get(index)
    }

    /// Iterate sequences in order.
    pub fn iter(&self) -> std::slice::Iter<'_, LabeledSequence> {
        self.sequences.iter()
    }

    /// Total residues across all sequences.
    #[must_use]
    pub fn residue_count(&self) -> usize {
        self.sequences.iter().map(LabeledSequence::len).sum()
    }

    /// Validate every sequence, in order.
    ///
    /// # Errors
    ///
    /// The first [`crate::Error::DataIntegrity`] found; no partial result is
    /// returned.
    pub fn check(&self) -> Result<Vec<CheckedSequence<'_>>> {
        self.sequences
            .iter()
            .enumerate()
            .map(|(i, seq)| seq.check(i))
            .collect()
    }
}

impl FromIterator<LabeledSequence> for Dataset {
    fn from_iter<I: IntoIterator<Item = LabeledSequence>>(iter: I) -> Self {
        Self {
            sequences: iter.into_iter().collect(),
            chou_fasman: None,
        }
    }
}

impl Extend<LabeledSequence> for Dataset {
    fn extend<I: IntoIterator<Item = LabeledSequence>>(&mut self, iter: I) {
        self.sequences.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a LabeledSequence;
    type IntoIter = std::slice::Iter<'a, LabeledSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}
