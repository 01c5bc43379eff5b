//! One sequence with true labels, predicted labels and confidence scores.

use crate::types::{AminoAcid, SsLabel};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A sequence as supplied by the ingestion side, before validation.
///
/// The predicted labels stay `None` until the model has run. Evaluating a
/// sequence without them is a precondition violation, not an empty
/// prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSequence {
    /// One-letter amino-acid codes, when known
    pub amino_acids: Option<String>,
    /// Ground-truth labels (H/E/C)
    pub true_labels: String,
    /// Model labels (H/E/C), once predicted
    pub predicted_labels: Option<String>,
    /// Per-residue confidence ("prediction strength")
    pub confidence: Vec<f64>,
}

impl LabeledSequence {
    /// Create a sequence from its true labels.
    pub fn new(true_labels: impl Into<String>) -> Self {
        Self {
            amino_acids: None,
            true_labels: true_labels.into(),
            predicted_labels: None,
            confidence: Vec::new(),
        }
    }

    /// Attach the amino-acid string.
    #[must_use]
    pub fn with_amino_acids(mut self, amino_acids: impl Into<String>) -> Self {
        self.amino_acids = Some(amino_acids.into());
        self
    }

    /// Attach model output: predicted labels and per-residue confidence.
    #[must_use]
    pub fn with_prediction(mut self, predicted: impl Into<String>, confidence: Vec<f64>) -> Self {
        self.set_prediction(predicted, confidence);
        self
    }

    /// Replace the model output in place.
    pub fn set_prediction(&mut self, predicted: impl Into<String>, confidence: Vec<f64>) {
        self.predicted_labels = Some(predicted.into());
        self.confidence = confidence;
    }

    /// Number of residues (length of the true-label string).
    #[must_use]
    pub fn len(&self) -> usize {
        self.true_labels.chars().count()
    }

    /// Whether the sequence has no residues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.true_labels.is_empty()
    }

    /// Mean confidence over the sequence, `None` without scores.
    #[must_use]
    pub fn mean_confidence(&self) -> Option<f64> {
        if self.confidence.is_empty() {
            return None;
        }
        Some(self.confidence.iter().sum::<f64>() / self.confidence.len() as f64)
    }

    /// Validate and parse this sequence.
    ///
    /// `index` is the sequence's position in its dataset and is carried
    /// into any error.
    ///
    /// # Errors
    ///
    /// [`Error::DataIntegrity`] if the prediction is missing, lengths
    /// disagree, a label or residue is outside its alphabet, or a confidence
    /// score is negative or not finite.
    pub fn check(&self, index: usize) -> Result<CheckedSequence<'_>> {
        let predicted = self
            .predicted_labels
            .as_deref()
            .ok_or_else(|| Error::integrity(index, "predicted labels missing"))?;

        let len = self.len();
        let predicted_len = predicted.chars().count();
        if predicted_len != len {
            return Err(Error::integrity(
                index,
                format!(
                    "predicted length {} != true length {}",
                    predicted_len, len
                ),
            ));
        }
        if self.confidence.len() != len {
            return Err(Error::integrity(
                index,
                format!(
                    "confidence length {} != true length {}",
                    self.confidence.len(),
                    len
                ),
            ));
        }
        if let Some(amino) = &self.amino_acids {
            let amino_len = amino.chars().count();
            if amino_len != len {
                return Err(Error::integrity(
                    index,
                    format!("amino-acid length {} != true length {}", amino_len, len),
                ));
            }
        }

        let truth = parse_labels(&self.true_labels, index, "true")?;
        let predicted = parse_labels(predicted, index, "predicted")?;

        let amino = match &self.amino_acids {
            Some(s) => s
                .chars()
                .enumerate()
                .map(|(pos, c)| {
                    AminoAcid::from_symbol(c).ok_or_else(|| {
                        Error::integrity_at(index, pos, format!("unknown amino acid '{}'", c))
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        for (pos, &score) in self.confidence.iter().enumerate() {
            if !score.is_finite() || score < 0.0 {
                return Err(Error::integrity_at(
                    index,
                    pos,
                    format!("confidence {} is not a finite non-negative number", score),
                ));
            }
        }

        Ok(CheckedSequence {
            index,
            amino,
            truth,
            predicted,
            confidence: &self.confidence,
        })
    }
}

fn parse_labels(labels: &str, index: usize, which: &str) -> Result<Vec<SsLabel>> {
    labels
        .chars()
        .enumerate()
        .map(|(pos, c)| {
            SsLabel::from_char(c).ok_or_else(|| {
                Error::integrity_at(
                    index,
                    pos,
                    format!("{} label '{}' is not one of H, E, C", which, c),
                )
            })
        })
        .collect()
}

/// One residue of a checked sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residue {
    /// Amino acid, when the sequence carries one
    pub amino: Option<AminoAcid>,
    /// Ground-truth label
    pub truth: SsLabel,
    /// Predicted label
    pub predicted: SsLabel,
    /// Confidence score
    pub confidence: f64,
}

impl Residue {
    /// Whether the prediction matches the truth.
    #[inline]
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.truth == self.predicted
    }
}

/// A validated sequence: equal lengths, closed alphabets, finite scores.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedSequence<'a> {
    index: usize,
    amino: Vec<AminoAcid>,
    truth: Vec<SsLabel>,
    predicted: Vec<SsLabel>,
    confidence: &'a [f64],
}

impl<'a> CheckedSequence<'a> {
    /// Position of this sequence within its dataset.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of residues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.truth.len()
    }

    /// Whether the sequence has no residues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.truth.is_empty()
    }

    /// Ground-truth labels.
    #[must_use]
    pub fn truth(&self) -> &[SsLabel] {
        &self.truth
    }

    /// Predicted labels.
    #[must_use]
    pub fn predicted(&self) -> &[SsLabel] {
        &self.predicted
    }

    /// Per-residue confidence scores.
    #[must_use]
    pub fn confidence(&self) -> &'a [f64] {
        self.confidence
    }

    /// Amino acids; empty when the sequence carried none.
    #[must_use]
    pub fn amino_acids(&self) -> &[AminoAcid] {
        &self.amino
    }

    /// Mean confidence, 0 for an empty sequence.
    #[must_use]
    pub fn mean_confidence(&self) -> f64 {
        if self.confidence.is_empty() {
            0.0
        } else {
            self.confidence.iter().sum::<f64>() / self.confidence.len() as f64
        }
    }

    /// Iterate residues in order.
    pub fn residues(&self) -> impl Iterator<Item = Residue> + '_ {
        (0..self.len()).map(move |i| Residue {
            amino: self.amino.get(i).copied(),
            truth: self.truth[i],
            predicted: self.predicted[i],
            confidence: self.confidence[i],
        })
    }
}
