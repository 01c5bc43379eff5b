//! Closed alphabets used throughout the crate.
//!
//! # Parse, Don't Validate
//!
//! Labels and residues arrive as characters from whatever produced the
//! dataset. They are parsed exactly once, when a sequence is checked, into
//! [`SsLabel`] and [`AminoAcid`]. Metric code only ever sees the parsed
//! forms and never re-checks membership.
//!
//! | Type | Alphabet | Used by |
//! |------|----------|---------|
//! | [`SsLabel`] | H, E, C | true and predicted labels |
//! | [`AminoAcid`] | 20 standard + B, Z, J, X | residue symbols, [`ChouFasmanTable`] |

mod amino;
mod label;

pub use amino::{AminoAcid, ChouFasmanTable, Propensity};
pub use label::SsLabel;
