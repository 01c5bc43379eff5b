//! Accuracy metrics over checked sequences.
//!
//! Every figure is built from a [`Tally`]: an additive `(score,
//! normalizer, support)` triple. Dataset-level accuracy sums tallies across
//! sequences before dividing, so long sequences weigh in proportion to their
//! length instead of each sequence's percentage counting once.
//!
//! ```rust
//! use sspeval::{Dataset, LabeledSequence, MetricKind, SsLabel};
//!
//! let dataset: Dataset = vec![
//!     LabeledSequence::new("HHHCCC").with_prediction("HHHEEE", vec![90.0; 6]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let overall = MetricKind::Q3.dataset_accuracy(&dataset, None).unwrap();
//! assert!((overall.value - 50.0).abs() < 1e-9);
//!
//! let strand = MetricKind::Q3.dataset_accuracy(&dataset, Some(SsLabel::Strand)).unwrap();
//! assert!(strand.is_empty());
//! ```

use super::{per_sequence, sov};
use crate::data::{CheckedSequence, Dataset};
use crate::types::SsLabel;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// Which accuracy metric to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricKind {
    /// Exact per-residue match rate
    #[default]
    Q3,
    /// Segment overlap (SOV'99)
    Sov,
}

impl MetricKind {
    /// Short display name ("Q3" / "SOV").
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MetricKind::Q3 => "Q3",
            MetricKind::Sov => "SOV",
        }
    }

    /// Raw tally for one sequence, optionally restricted to residues whose
    /// true label is `class`.
    #[must_use]
    pub fn tally(self, seq: &CheckedSequence<'_>, class: Option<SsLabel>) -> Tally {
        match self {
            MetricKind::Q3 => q3_tally(seq.truth(), seq.predicted(), class),
            MetricKind::Sov => sov::sov_tally(seq.truth(), seq.predicted(), class),
        }
    }

    /// Accuracy and support for one sequence.
    #[must_use]
    pub fn sequence_accuracy(self, seq: &CheckedSequence<'_>, class: Option<SsLabel>) -> Accuracy {
        self.tally(seq, class).accuracy()
    }

    /// Aggregate accuracy over already-checked sequences.
    #[must_use]
    pub fn accuracy(self, seqs: &[CheckedSequence<'_>], class: Option<SsLabel>) -> Accuracy {
        per_sequence(seqs, |seq| self.tally(seq, class))
            .into_iter()
            .sum::<Tally>()
            .accuracy()
    }

    /// Validate `dataset` and compute its aggregate accuracy.
    ///
    /// # Errors
    ///
    /// [`crate::Error::DataIntegrity`] from [`Dataset::check`].
    pub fn dataset_accuracy(self, dataset: &Dataset, class: Option<SsLabel>) -> Result<Accuracy> {
        let seqs = dataset.check()?;
        Ok(self.accuracy(&seqs, class))
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Additive accumulator behind an accuracy percentage.
///
/// For Q3, `score` counts matching residues and `normalizer` equals
/// `support`. For SOV, `score` sums segment contributions and `normalizer`
/// is the SOV'99 `N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    /// Numerator
    pub score: f64,
    /// Denominator
    pub normalizer: f64,
    /// True-label positions that qualified
    pub support: usize,
}

impl Tally {
    /// Combine two tallies. Associative and commutative up to float rounding.
    #[must_use]
    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            score: self.score + other.score,
            normalizer: self.normalizer + other.normalizer,
            support: self.support + other.support,
        }
    }

    /// Percentage in `[0, 100]`; `0` with zero support.
    #[must_use]
    pub fn accuracy(&self) -> Accuracy {
        let value = if self.normalizer > 0.0 {
            (100.0 * self.score / self.normalizer).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Accuracy {
            value,
            support: self.support,
        }
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Self {
        iter.fold(Tally::default(), Tally::merge)
    }
}

/// An accuracy percentage with the support it was measured on.
///
/// Zero support means "no data": `value` is then `0.0` and must not be read
/// as a measured zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Accuracy {
    /// Percentage in `[0, 100]`
    pub value: f64,
    /// Qualifying positions
    pub support: usize,
}

impl Accuracy {
    /// Whether no positions qualified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.support == 0
    }

    /// The percentage, or `None` with zero support.
    #[must_use]
    pub fn measured(&self) -> Option<f64> {
        (!self.is_empty()).then_some(self.value)
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "n/a (support 0)")
        } else {
            write!(f, "{:.2}% (support {})", self.value, self.support)
        }
    }
}

/// Exact-match tally.
#[must_use]
pub fn q3_tally(truth: &[SsLabel], predicted: &[SsLabel], class: Option<SsLabel>) -> Tally {
    let (matches, support) = truth
        .iter()
        .zip(predicted)
        .filter(|(t, _)| class.map_or(true, |c| **t == c))
        .fold((0usize, 0usize), |(m, n), (t, p)| {
            (m + usize::from(t == p), n + 1)
        });
    Tally {
        score: matches as f64,
        normalizer: support as f64,
        support,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LabeledSequence;

    fn labels(s: &str) -> Vec<SsLabel> {
        s.chars().filter_map(SsLabel::from_char).collect()
    }

    fn scored(truth: &str, predicted: &str) -> LabeledSequence {
        LabeledSequence::new(truth).with_prediction(predicted, vec![50.0; truth.len()])
    }

    #[test]
    fn test_q3_identical_is_100() {
        let t = labels("HHECCE");
        let tally = q3_tally(&t, &t, None);
        assert_eq!(tally.accuracy().value, 100.0);
        assert_eq!(tally.support, 6);
    }

    #[test]
    fn test_q3_per_class() {
        let t = labels("HHHCCC");
        let p = labels("HHHEEE");
        assert_eq!(q3_tally(&t, &p, None).accuracy().value, 50.0);
        let h = q3_tally(&t, &p, Some(SsLabel::Helix)).accuracy();
        assert_eq!((h.value, h.support), (100.0, 3));
        let c = q3_tally(&t, &p, Some(SsLabel::Coil)).accuracy();
        assert_eq!((c.value, c.support), (0.0, 3));
        let e = q3_tally(&t, &p, Some(SsLabel::Strand)).accuracy();
        assert_eq!((e.value, e.support), (0.0, 0));
        assert!(e.is_empty());
        assert_eq!(e.measured(), None);
        assert_eq!(c.measured(), Some(0.0));
    }

    #[test]
    fn test_empty_tally_is_zero_not_nan() {
        let acc = Tally::default().accuracy();
        assert_eq!(acc.value, 0.0);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_dataset_aggregates_by_counts() {
        let dataset: Dataset = vec![scored("HHHHHH", "HHHHHH"), scored("EEEE", "EECC")]
            .into_iter()
            .collect();
        let acc = MetricKind::Q3.dataset_accuracy(&dataset, None).unwrap();
        assert!((acc.value - 80.0).abs() < 1e-9, "got {}", acc.value);
        assert_eq!(acc.support, 10);
    }

    #[test]
    fn test_dataset_accuracy_propagates_integrity_error() {
        let dataset: Dataset = vec![scored("HH", "HH"), LabeledSequence::new("EE")]
            .into_iter()
            .collect();
        assert!(MetricKind::Sov.dataset_accuracy(&dataset, None).is_err());
    }

    #[test]
    fn test_merge_is_commutative() {
        let a = Tally { score: 3.0, normalizer: 4.0, support: 4 };
        let b = Tally { score: 1.0, normalizer: 6.0, support: 6 };
        assert_eq!(a.merge(b), b.merge(a));
        assert_eq!(vec![a, b].into_iter().sum::<Tally>().support, 10);
    }

    #[test]
    fn test_metric_kind_names() {
        assert_eq!(MetricKind::Q3.to_string(), "Q3");
        assert_eq!(MetricKind::Sov.to_string(), "SOV");
        assert_eq!(serde_json::to_string(&MetricKind::Sov).unwrap(), "\"SOV\"");
    }
}
