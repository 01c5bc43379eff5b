//! Error types for sspeval.

use thiserror::Error;

/// Result type for sspeval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sspeval operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A sequence violates the dataset contract (length mismatch, unknown
    /// label or residue, missing prediction, bad confidence score).
    #[error("Data integrity error in sequence {sequence}{}: {reason}", at_position(.position))]
    DataIntegrity {
        /// Index of the offending sequence within the dataset
        sequence: usize,
        /// Offending residue position, when the error is local to one residue
        position: Option<usize>,
        /// What went wrong
        reason: String,
    },

    /// A configuration parameter is out of range.
    #[error("Invalid configuration for `{parameter}`: {reason}")]
    Config {
        /// Name of the offending parameter
        parameter: &'static str,
        /// What went wrong
        reason: String,
    },

    /// Amino-acid parameter table entry rejected at load time.
    #[error("Amino-acid table error: {0}")]
    AminoTable(String),

    /// Configuration text could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration could not be rendered as TOML.
    #[error("Config encoding error: {0}")]
    Encode(#[from] toml::ser::Error),

    /// Report serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error while writing a table.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn at_position(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(" at position {}", p),
        None => String::new(),
    }
}

impl Error {
    /// Create a sequence-level integrity error.
    pub fn integrity(sequence: usize, reason: impl Into<String>) -> Self {
        Error::DataIntegrity {
            sequence,
            position: None,
            reason: reason.into(),
        }
    }

    /// Create an integrity error pinned to one residue.
    pub fn integrity_at(sequence: usize, position: usize, reason: impl Into<String>) -> Self {
        Error::DataIntegrity {
            sequence,
            position: Some(position),
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(parameter: &'static str, reason: impl Into<String>) -> Self {
        Error::Config {
            parameter,
            reason: reason.into(),
        }
    }

    /// Create an amino-acid table error.
    pub fn amino_table(msg: impl Into<String>) -> Self {
        Error::AminoTable(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}
