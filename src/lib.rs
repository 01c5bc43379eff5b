//! # sspeval
//!
//! Accuracy and reliability evaluation for per-residue secondary-structure
//! predictions (three-state H/E/C).
//!
//! - **Accuracy**: Q3 (exact match) and SOV'99 (segment overlap), overall and
//!   per class, aggregated by counts across a dataset
//! - **Reliability**: mean accuracy per confidence bin, showing whether the
//!   model's own confidence tracks how often it is right
//! - **Distribution**: how many sequences fall in each accuracy band
//!
//! ## Quick Start
//!
//! ```rust
//! use sspeval::{Dataset, EvalConfig, Evaluator, LabeledSequence, MetricKind, SsLabel};
//!
//! let mut dataset = Dataset::new();
//! dataset.push(
//!     LabeledSequence::new("HHHCCC")
//!         .with_amino_acids("MKVLAG")
//!         .with_prediction("HHHEEE", vec![95.0, 90.0, 80.0, 20.0, 15.0, 10.0]),
//! );
//!
//! let config = EvalConfig::builder()
//!     .metric_kind(MetricKind::Q3)
//!     .reliability_bins(10)
//!     .build()?;
//! let report = Evaluator::new(config).evaluate(&dataset)?;
//!
//! assert_eq!(report.overall_accuracy(), 50.0);
//! assert_eq!(report.accuracy_for(SsLabel::Coil).support, 3);
//! print!("{}", report.reliability_table());
//! # Ok::<(), sspeval::Error>(())
//! ```
//!
//! ## Errors
//!
//! Integrity problems (length mismatch, unknown label, missing prediction)
//! and configuration problems abort the evaluation with an [`Error`]; there
//! is no partial report. Classes or bins without data are not errors: they
//! carry zero support, and their accuracy reads `0.0`.
//!
//! ## Feature Flags
//!
//! - `parallel`: compute per-sequence partials on the rayon thread pool.
//!   Reduction stays in dataset order, so results are identical.

#![warn(missing_docs)]

pub mod config;
pub mod data;
mod error;
pub mod eval;
pub mod types;

pub use config::{EvalConfig, EvalConfigBuilder};
pub use data::{CheckedSequence, Dataset, LabeledSequence, Residue};
pub use error::{Error, Result};
pub use eval::{
    evaluate, Accuracy, AccuracyDistribution, AccuracyHistogram, ClassAccuracy, EvaluationReport,
    Evaluator, MetricKind, ReliabilityBin, ReliabilityBinner, ReliabilityCurve, ReliabilityMode,
};
pub use types::{AminoAcid, ChouFasmanTable, Propensity, SsLabel};
