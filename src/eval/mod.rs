//! Accuracy and reliability evaluation.
//!
//! # Overview
//!
//! ```text
//! Dataset ──check──▶ [CheckedSequence] ──▶ MetricKind (Q3 / SOV)
//!                                            │
//!                         ┌──────────────────┼──────────────────┐
//!                         ▼                  ▼                  ▼
//!                  overall + H/E/C    ReliabilityBinner   AccuracyHistogram
//!                         └──────────────────┼──────────────────┘
//!                                            ▼
//!                                    EvaluationReport
//! ```
//!
//! Every stage is a pure function of the checked sequences. Per-sequence
//! partials are reduced in dataset order, so a report is reproducible
//! bit-for-bit, with or without the `parallel` feature.
//!
//! # Example
//!
//! ```rust
//! use sspeval::{Dataset, EvalConfig, Evaluator, LabeledSequence, SsLabel};
//!
//! let dataset: Dataset = vec![
//!     LabeledSequence::new("HHHCCC").with_prediction("HHHEEE", vec![80.0; 6]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = Evaluator::new(EvalConfig::default()).evaluate(&dataset)?;
//! assert_eq!(report.overall_accuracy(), 50.0);
//! assert_eq!(report.accuracy_for(SsLabel::Helix).value, 100.0);
//! assert!(report.accuracy_for(SsLabel::Strand).is_empty());
//! # Ok::<(), sspeval::Error>(())
//! ```

pub mod binning;
pub mod histogram;
pub mod metrics;
pub mod reliability;
pub mod report;
pub mod sov;

pub use histogram::{AccuracyDistribution, AccuracyHistogram};
pub use metrics::{Accuracy, MetricKind, Tally};
pub use reliability::{
    BinAccumulator, ReliabilityBin, ReliabilityBinner, ReliabilityCurve, ReliabilityMode,
};
pub use report::{ClassAccuracy, EvaluationReport};
pub use sov::Segment;

use crate::config::EvalConfig;
use crate::data::{CheckedSequence, Dataset};
use crate::types::SsLabel;
use crate::Result;

/// Map `f` over sequences, returning results in sequence order.
#[cfg(feature = "parallel")]
pub(crate) fn per_sequence<T, F>(seqs: &[CheckedSequence<'_>], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&CheckedSequence<'_>) -> T + Sync + Send,
{
    use rayon::prelude::*;
    seqs.par_iter().map(f).collect()
}

/// Map `f` over sequences, returning results in sequence order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn per_sequence<T, F>(seqs: &[CheckedSequence<'_>], f: F) -> Vec<T>
where
    F: Fn(&CheckedSequence<'_>) -> T,
{
    seqs.iter().map(f).collect()
}

/// Runs a full evaluation with a fixed configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Create an evaluator.
    #[must_use]
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Validate `dataset` and compute a report.
    ///
    /// # Errors
    ///
    /// [`crate::Error::DataIntegrity`] for the first invalid sequence. No
    /// partial report is produced.
    pub fn evaluate(&self, dataset: &Dataset) -> Result<EvaluationReport> {
        let kind = self.config.metric_kind();
        log::info!(
            "Evaluating {} sequences with {}",
            dataset.len(),
            kind
        );
        let seqs = dataset.check()?;
        if seqs.is_empty() {
            log::warn!("dataset contains no sequences");
        }
        Ok(self.evaluate_checked(&seqs))
    }

    /// Compute a report over already-checked sequences.
    #[must_use]
    pub fn evaluate_checked(&self, seqs: &[CheckedSequence<'_>]) -> EvaluationReport {
        let kind = self.config.metric_kind();
        let overall = kind.accuracy(seqs, None);

        let per_class: Vec<ClassAccuracy> = SsLabel::ALL
            .iter()
            .map(|&label| ClassAccuracy {
                label,
                accuracy: kind.accuracy(seqs, Some(label)),
            })
            .collect();
        for class in per_class.iter().filter(|c| c.accuracy.is_empty()) {
            log::warn!("class {} has zero support; its {} is reported as 0", class.label, kind);
        }

        let reliability = ReliabilityBinner::from_config(&self.config).bin(kind, seqs);
        let distribution = AccuracyHistogram::from_config(&self.config).build(kind, seqs);

        log::info!("{} = {:.2}% over {} residues", kind, overall.value, overall.support);

        EvaluationReport::new(
            self.config.clone(),
            seqs.len(),
            overall,
            per_class,
            reliability,
            distribution,
        )
    }
}

/// Evaluate `dataset` under `config`.
///
/// # Errors
///
/// See [`Evaluator::evaluate`].
pub fn evaluate(dataset: &Dataset, config: &EvalConfig) -> Result<EvaluationReport> {
    Evaluator::new(config.clone()).evaluate(dataset)
}
