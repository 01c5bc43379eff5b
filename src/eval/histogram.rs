//! Distribution of per-sequence accuracy.
//!
//! Each sequence is counted once, unweighted by its length. Bin `j` covers
//! `[j, j + 1)` of the `[0, A]`-scaled accuracy range; slot `A` exists only
//! for sequences scoring exactly 100.
//!
//! Slots are taken from the sequence's [`Tally`] as
//! `floor(score × A / normalizer)`, not from the rounded percentage. For Q3
//! both operands are integers, so an accuracy sitting exactly on a lower
//! edge (5 of 19 with `A = 19`) lands in that slot.

use super::binning::floored_bin;
use super::metrics::{MetricKind, Tally};
use super::per_sequence;
use crate::config::EvalConfig;
use crate::data::CheckedSequence;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Sequence counts over `A + 1` accuracy slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyDistribution {
    counts: Vec<usize>,
    bin_count: usize,
}

impl AccuracyDistribution {
    /// Counts per slot, `A + 1` long.
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of regular bins `A`.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// Count in slot `j`.
    #[must_use]
    pub fn get(&self, j: usize) -> Option<usize> {
        self.counts.get(j).copied()
    }

    /// Lower bound of slot `j` on the percentage scale: `j × 100 / A`.
    #[must_use]
    pub fn lower_bound(&self, j: usize) -> f64 {
        j as f64 * 100.0 / self.bin_count as f64
    }

    /// `(lower bound, count)` for every slot, empty ones included.
    pub fn rows(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(move |(j, &count)| (self.lower_bound(j), count))
    }

    /// Number of sequences counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Builds an [`AccuracyDistribution`] from checked sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccuracyHistogram {
    bin_count: usize,
}

impl AccuracyHistogram {
    /// Create a histogram with `bin_count` regular bins.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if `bin_count` is zero.
    pub fn new(bin_count: usize) -> Result<Self> {
        if bin_count == 0 {
            return Err(Error::config(
                "accuracy_bin_count",
                "must be a positive integer, got 0",
            ));
        }
        Ok(Self { bin_count })
    }

    /// Histogram for an already-validated configuration.
    #[must_use]
    pub fn from_config(config: &EvalConfig) -> Self {
        Self {
            bin_count: config.accuracy_bin_count(),
        }
    }

    /// Slot for a sequence tally, clamped into `[0, A]`.
    ///
    /// A zero normalizer (no residues) maps to slot 0.
    #[must_use]
    pub fn tally_index(&self, tally: &Tally) -> usize {
        if tally.normalizer <= 0.0 {
            return 0;
        }
        floored_bin(tally.score, tally.normalizer, self.bin_count, self.bin_count)
    }

    /// Count every sequence into its accuracy slot.
    ///
    /// A sequence with no residues has zero support and is counted at 0.
    #[must_use]
    pub fn build(&self, kind: MetricKind, seqs: &[CheckedSequence<'_>]) -> AccuracyDistribution {
        let mut counts = vec![0usize; self.bin_count + 1];
        for j in per_sequence(seqs, |seq| self.tally_index(&kind.tally(seq, None))) {
            counts[j] += 1;
        }
        log::debug!(
            "accuracy histogram: {} sequences over {} slots",
            seqs.len(),
            counts.len()
        );
        AccuracyDistribution {
            counts,
            bin_count: self.bin_count,
        }
    }
}
