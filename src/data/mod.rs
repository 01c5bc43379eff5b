//! Labeled sequences and the dataset that holds them.
//!
//! A [`Dataset`] is handed to the engine read-only. Before any metric is
//! computed, [`Dataset::check`] parses every [`LabeledSequence`] into a
//! [`CheckedSequence`]; the first integrity violation aborts the run.

mod dataset;
mod sequence;

pub use dataset::Dataset;
pub use sequence::{CheckedSequence, LabeledSequence, Residue};
