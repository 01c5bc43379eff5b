//! Three-state secondary-structure labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Secondary-structure class of one residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SsLabel {
    /// Helix (H)
    #[serde(rename = "H")]
    Helix,
    /// Extended strand (E)
    #[serde(rename = "E")]
    Strand,
    /// Coil / everything else (C)
    #[serde(rename = "C")]
    Coil,
}

impl SsLabel {
    /// All labels in reporting order.
    pub const ALL: [SsLabel; 3] = [SsLabel::Helix, SsLabel::Strand, SsLabel::Coil];

    /// Parse a label character. Only upper-case `H`, `E`, `C` are accepted.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'H' => Some(SsLabel::Helix),
            'E' => Some(SsLabel::Strand),
            'C' => Some(SsLabel::Coil),
            _ => None,
        }
    }

    /// The single-character code.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            SsLabel::Helix => 'H',
            SsLabel::Strand => 'E',
            SsLabel::Coil => 'C',
        }
    }

    /// Dense index into per-class arrays (H=0, E=1, C=2).
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<char> for SsLabel {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        SsLabel::from_char(c).ok_or(c)
    }
}

impl fmt::Display for SsLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
