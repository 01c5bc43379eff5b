//! Reliability curve: mean accuracy per confidence bin.
//!
//! Confidence ("prediction strength") is normalized by the maximum scale
//! `M` and rounded into one of `R` bins; a score of exactly `M` lands in the
//! last bin. A well-behaved predictor shows accuracy rising with the bin
//! index.
//!
//! # Weighting
//!
//! | [`ReliabilityMode`] | binned by | value | weight |
//! |---------------------|-----------|-------|--------|
//! | `SequenceWeighted` | residue confidence | accuracy of the containing sequence | 1 per residue |
//! | `ResidueMatch` | residue confidence | 100 if correct, else 0 | 1 per residue |
//! | `SequenceMean` | mean sequence confidence | sequence accuracy | sequence support |
//!
//! `SequenceWeighted` is the default. Since the whole-sequence support of
//! both metrics is the sequence length, it spreads `accuracy × support`
//! evenly over the sequence's residues. It does not add the full
//! `accuracy × support` (weight `support`) once per residue: that would
//! count a sequence `support²` times, so a bin shared by a long and a short
//! sequence would lean toward the long one quadratically and bin supports
//! would no longer count residues. In every mode the bin supports sum to
//! the total residue count.

use super::binning::rounded_bin;
use super::metrics::MetricKind;
use super::per_sequence;
use crate::config::EvalConfig;
use crate::data::CheckedSequence;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// How residues contribute to reliability bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReliabilityMode {
    /// Residue-binned, valued by whole-sequence accuracy
    #[default]
    SequenceWeighted,
    /// Residue-binned, valued by the residue's own match
    ResidueMatch,
    /// Sequence-binned by mean confidence, weighted by support
    SequenceMean,
}

/// One bin of a [`ReliabilityCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityBin {
    /// Bin index in `[0, R)`
    pub index: usize,
    /// Weighted mean accuracy, `0.0` when empty
    pub mean_accuracy: f64,
    /// Residues that fell in this bin
    pub support: usize,
}

impl ReliabilityBin {
    /// Whether nothing fell in this bin. An empty bin's `0.0` is not a
    /// measured accuracy.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.support == 0
    }
}

/// Confidence bin → mean accuracy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityCurve {
    bins: Vec<ReliabilityBin>,
    mode: ReliabilityMode,
}

impl ReliabilityCurve {
    /// All `R` bins, empty ones included.
    #[must_use]
    pub fn bins(&self) -> &[ReliabilityBin] {
        &self.bins
    }

    /// Bins that received at least one residue.
    pub fn non_empty(&self) -> impl Iterator<Item = &ReliabilityBin> {
        self.bins.iter().filter(|b| !b.is_empty())
    }

    /// Bin at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ReliabilityBin> {
        self.bins.get(index)
    }

    /// Number of bins `R`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether the curve has no bins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Sum of bin supports.
    #[must_use]
    pub fn total_support(&self) -> usize {
        self.bins.iter().map(|b| b.support).sum()
    }

    /// Weighting used to build the curve.
    #[must_use]
    pub fn mode(&self) -> ReliabilityMode {
        self.mode
    }
}

/// Per-bin `(weighted sum, support)` partials.
#[derive(Debug, Clone, PartialEq)]
pub struct BinAccumulator {
    sums: Vec<f64>,
    counts: Vec<usize>,
}

impl BinAccumulator {
    /// Zeroed accumulator with `bins` slots.
    #[must_use]
    pub fn new(bins: usize) -> Self {
        Self {
            sums: vec![0.0; bins],
            counts: vec![0; bins],
        }
    }

    /// Add `value × weight` with weight `weight` to bin `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of range; callers clamp first.
    pub fn add(&mut self, index: usize, value: f64, weight: usize) {
        self.sums[index] += value * weight as f64;
        self.counts[index] += weight;
    }

    /// Element-wise sum with another accumulator of the same width.
    #[must_use]
    pub fn merge(mut self, other: &BinAccumulator) -> Self {
        for (s, o) in self.sums.iter_mut().zip(&other.sums) {
            *s += o;
        }
        for (c, o) in self.counts.iter_mut().zip(&other.counts) {
            *c += o;
        }
        self
    }

    /// Per-bin weighted means, labelled with `mode`.
    #[must_use]
    pub fn into_curve(self, mode: ReliabilityMode) -> ReliabilityCurve {
        let bins = self
            .sums
            .into_iter()
            .zip(self.counts)
            .enumerate()
            .map(|(index, (sum, support))| ReliabilityBin {
                index,
                mean_accuracy: if support > 0 { sum / support as f64 } else { 0.0 },
                support,
            })
            .collect();
        ReliabilityCurve { bins, mode }
    }
}

/// Builds a [`ReliabilityCurve`] from checked sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReliabilityBinner {
    max_confidence: f64,
    bin_count: usize,
    mode: ReliabilityMode,
}

impl ReliabilityBinner {
    /// Create a binner.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if `bin_count` is zero or `max_confidence` is not
    /// a positive finite number.
    pub fn new(max_confidence: f64, bin_count: usize, mode: ReliabilityMode) -> Result<Self> {
        if bin_count == 0 {
            return Err(Error::config(
                "reliability_bin_count",
                "must be a positive integer, got 0",
            ));
        }
        if !max_confidence.is_finite() || max_confidence <= 0.0 {
            return Err(Error::config(
                "max_confidence_scale",
                format!("must be a positive finite number, got {}", max_confidence),
            ));
        }
        Ok(Self {
            max_confidence,
            bin_count,
            mode,
        })
    }

    /// Binner for an already-validated configuration.
    #[must_use]
    pub fn from_config(config: &EvalConfig) -> Self {
        Self {
            max_confidence: config.max_confidence_scale(),
            bin_count: config.reliability_bin_count(),
            mode: config.reliability_mode(),
        }
    }

    /// Bin index for a confidence score, clamped into `[0, R - 1]`.
    #[must_use]
    pub fn bin_index(&self, confidence: f64) -> usize {
        rounded_bin(
            confidence,
            self.max_confidence,
            self.bin_count,
            self.bin_count - 1,
        )
    }

    /// Partial accumulator for one sequence.
    #[must_use]
    pub fn accumulate(&self, kind: MetricKind, seq: &CheckedSequence<'_>) -> BinAccumulator {
        let mut acc = BinAccumulator::new(self.bin_count);
        match self.mode {
            ReliabilityMode::SequenceWeighted => {
                let accuracy = kind.sequence_accuracy(seq, None);
                for &confidence in seq.confidence() {
                    acc.add(self.bin_index(confidence), accuracy.value, 1);
                }
            }
            ReliabilityMode::ResidueMatch => {
                for residue in seq.residues() {
                    let value = if residue.is_correct() { 100.0 } else { 0.0 };
                    acc.add(self.bin_index(residue.confidence), value, 1);
                }
            }
            ReliabilityMode::SequenceMean => {
                let accuracy = kind.sequence_accuracy(seq, None);
                acc.add(
                    self.bin_index(seq.mean_confidence()),
                    accuracy.value,
                    accuracy.support,
                );
            }
        }
        acc
    }

    /// Build the curve. Partials are reduced in sequence order.
    #[must_use]
    pub fn bin(&self, kind: MetricKind, seqs: &[CheckedSequence<'_>]) -> ReliabilityCurve {
        let curve = per_sequence(seqs, |seq| self.accumulate(kind, seq))
            .iter()
            .fold(BinAccumulator::new(self.bin_count), BinAccumulator::merge)
            .into_curve(self.mode);
        log::debug!(
            "reliability: {} of {} bins filled ({:?})",
            curve.non_empty().count(),
            curve.len(),
            self.mode
        );
        curve
    }
}
