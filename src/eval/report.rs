//! Immutable result of one evaluation run.
//!
//! A report is created once by [`crate::Evaluator::evaluate`] and never
//! mutated; evaluating again produces a new report. Rendering and export are
//! left to consumers, which receive two flat tab-separated tables:
//!
//! - reliability: `binIndex\tmeanAccuracy`, non-empty bins only
//! - accuracy distribution: `binLowerBound\tcount`, every slot including
//!   empty ones, so a histogram shows its zero bars

use super::histogram::AccuracyDistribution;
use super::metrics::{Accuracy, MetricKind};
use super::reliability::ReliabilityCurve;
use crate::config::EvalConfig;
use crate::types::SsLabel;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Accuracy restricted to one true-label class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassAccuracy {
    /// Class the residues were restricted to
    pub label: SsLabel,
    /// Accuracy and support within the class
    pub accuracy: Accuracy,
}

/// Overall and per-class accuracy, reliability curve and accuracy
/// distribution for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    config: EvalConfig,
    sequence_count: usize,
    overall: Accuracy,
    per_class: Vec<ClassAccuracy>,
    reliability: ReliabilityCurve,
    distribution: AccuracyDistribution,
}

impl EvaluationReport {
    pub(crate) fn new(
        config: EvalConfig,
        sequence_count: usize,
        overall: Accuracy,
        per_class: Vec<ClassAccuracy>,
        reliability: ReliabilityCurve,
        distribution: AccuracyDistribution,
    ) -> Self {
        Self {
            config,
            sequence_count,
            overall,
            per_class,
            reliability,
            distribution,
        }
    }

    /// Configuration the report was computed with.
    #[must_use]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Metric behind every accuracy figure.
    #[must_use]
    pub fn metric_kind(&self) -> MetricKind {
        self.config.metric_kind()
    }

    /// Number of sequences evaluated.
    #[must_use]
    pub fn sequence_count(&self) -> usize {
        self.sequence_count
    }

    /// Overall accuracy with total residue support.
    #[must_use]
    pub fn overall(&self) -> Accuracy {
        self.overall
    }

    /// Overall accuracy percentage.
    #[must_use]
    pub fn overall_accuracy(&self) -> f64 {
        self.overall.value
    }

    /// Per-class accuracies in H, E, C order.
    #[must_use]
    pub fn per_class(&self) -> &[ClassAccuracy] {
        &self.per_class
    }

    /// Accuracy for one class; check [`Accuracy::is_empty`] before trusting
    /// the value.
    #[must_use]
    pub fn accuracy_for(&self, label: SsLabel) -> Accuracy {
        self.per_class
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.accuracy)
            .unwrap_or_default()
    }

    /// Reliability curve.
    #[must_use]
    pub fn reliability(&self) -> &ReliabilityCurve {
        &self.reliability
    }

    /// Accuracy distribution.
    #[must_use]
    pub fn distribution(&self) -> &AccuracyDistribution {
        &self.distribution
    }

    /// Legend attached to plotted series: `"Mean: <overall>"`.
    #[must_use]
    pub fn series_label(&self) -> String {
        format!("Mean: {}", self.overall.value)
    }

    /// Write the reliability table (non-empty bins only).
    pub fn write_reliability_table<W: Write>(&self, mut out: W) -> Result<()> {
        for bin in self.reliability.non_empty() {
            writeln!(out, "{}\t{}", bin.index, bin.mean_accuracy)?;
        }
        Ok(())
    }

    /// Reliability table as a string.
    #[must_use]
    pub fn reliability_table(&self) -> String {
        self.reliability
            .non_empty()
            .map(|bin| format!("{}\t{}\n", bin.index, bin.mean_accuracy))
            .collect()
    }

    /// Write the accuracy-distribution table (all slots).
    pub fn write_distribution_table<W: Write>(&self, mut out: W) -> Result<()> {
        for (lower, count) in self.distribution.rows() {
            writeln!(out, "{}\t{}", lower, count)?;
        }
        Ok(())
    }

    /// Accuracy-distribution table as a string.
    #[must_use]
    pub fn distribution_table(&self) -> String {
        self.distribution
            .rows()
            .map(|(lower, count)| format!("{}\t{}\n", lower, count))
            .collect()
    }

    /// Human-readable scalar summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{} over {} sequences: {}\n",
            self.metric_kind(),
            self.sequence_count,
            self.overall
        );
        for class in &self.per_class {
            out.push_str(&format!("  {}: {}\n", class.label, class.accuracy));
        }
        out.push_str(&format!(
            "  reliability bins filled: {}/{}\n",
            self.reliability.non_empty().count(),
            self.reliability.len()
        ));
        out
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
