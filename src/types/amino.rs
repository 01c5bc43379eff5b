//! Amino-acid alphabet and Chou-Fasman propensity table.
//!
//! The table is auxiliary reference data carried by a [`crate::Dataset`];
//! the evaluation engine never reads it.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One residue symbol: the 20 standard amino acids plus ambiguity codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AminoAcid {
    /// Alanine (A)
    Ala,
    /// Cysteine (C)
    Cys,
    /// Aspartate (D)
    Asp,
    /// Glutamate (E)
    Glu,
    /// Phenylalanine (F)
    Phe,
    /// Glycine (G)
    Gly,
    /// Histidine (H)
    His,
    /// Isoleucine (I)
    Ile,
    /// Lysine (K)
    Lys,
    /// Leucine (L)
    Leu,
    /// Methionine (M)
    Met,
    /// Asparagine (N)
    Asn,
    /// Proline (P)
    Pro,
    /// Glutamine (Q)
    Gln,
    /// Arginine (R)
    Arg,
    /// Serine (S)
    Ser,
    /// Threonine (T)
    Thr,
    /// Valine (V)
    Val,
    /// Tryptophan (W)
    Trp,
    /// Tyrosine (Y)
    Tyr,
    /// Asparagine or aspartate (B)
    Asx,
    /// Glutamine or glutamate (Z)
    Glx,
    /// Leucine or isoleucine (J)
    Xle,
    /// Unknown residue (X)
    Xaa,
}

impl AminoAcid {
    /// Size of the alphabet, ambiguity codes included.
    pub const COUNT: usize = 24;

    /// The 20 standard residues, in index order.
    pub const STANDARD: [AminoAcid; 20] = [
        AminoAcid::Ala,
        AminoAcid::Cys,
        AminoAcid::Asp,
        AminoAcid::Glu,
        AminoAcid::Phe,
        AminoAcid::Gly,
        AminoAcid::His,
        AminoAcid::Ile,
        AminoAcid::Lys,
        AminoAcid::Leu,
        AminoAcid::Met,
        AminoAcid::Asn,
        AminoAcid::Pro,
        AminoAcid::Gln,
        AminoAcid::Arg,
        AminoAcid::Ser,
        AminoAcid::Thr,
        AminoAcid::Val,
        AminoAcid::Trp,
        AminoAcid::Tyr,
    ];

    /// The ambiguity codes.
    pub const AMBIGUOUS: [AminoAcid; 4] = [
        AminoAcid::Asx,
        AminoAcid::Glx,
        AminoAcid::Xle,
        AminoAcid::Xaa,
    ];

    /// Parse a one-letter code (case-insensitive).
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        let aa = match c.to_ascii_uppercase() {
            'A' => AminoAcid::Ala,
            'C' => AminoAcid::Cys,
            'D' => AminoAcid::Asp,
            'E' => AminoAcid::Glu,
            'F' => AminoAcid::Phe,
            'G' => AminoAcid::Gly,
            'H' => AminoAcid::His,
            'I' => AminoAcid::Ile,
            'K' => AminoAcid::Lys,
            'L' => AminoAcid::Leu,
            'M' => AminoAcid::Met,
            'N' => AminoAcid::Asn,
            'P' => AminoAcid::Pro,
            'Q' => AminoAcid::Gln,
            'R' => AminoAcid::Arg,
            'S' => AminoAcid::Ser,
            'T' => AminoAcid::Thr,
            'V' => AminoAcid::Val,
            'W' => AminoAcid::Trp,
            'Y' => AminoAcid::Tyr,
            'B' => AminoAcid::Asx,
            'Z' => AminoAcid::Glx,
            'J' => AminoAcid::Xle,
            'X' => AminoAcid::Xaa,
            _ => return None,
        };
        Some(aa)
    }

    /// Upper-case one-letter code.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            AminoAcid::Ala => 'A',
            AminoAcid::Cys => 'C',
            AminoAcid::Asp => 'D',
            AminoAcid::Glu => 'E',
            AminoAcid::Phe => 'F',
            AminoAcid::Gly => 'G',
            AminoAcid::His => 'H',
            AminoAcid::Ile => 'I',
            AminoAcid::Lys => 'K',
            AminoAcid::Leu => 'L',
            AminoAcid::Met => 'M',
            AminoAcid::Asn => 'N',
            AminoAcid::Pro => 'P',
            AminoAcid::Gln => 'Q',
            AminoAcid::Arg => 'R',
            AminoAcid::Ser => 'S',
            AminoAcid::Thr => 'T',
            AminoAcid::Val => 'V',
            AminoAcid::Trp => 'W',
            AminoAcid::Tyr => 'Y',
            AminoAcid::Asx => 'B',
            AminoAcid::Glx => 'Z',
            AminoAcid::Xle => 'J',
            AminoAcid::Xaa => 'X',
        }
    }

    /// Whether this is an ambiguity code (B, Z, J, X).
    #[must_use]
    pub fn is_ambiguous(self) -> bool {
        self.index() >= AminoAcid::STANDARD.len()
    }

    /// Standard residues an ambiguity code stands for. Empty for standard
    /// residues; all 20 for X.
    #[must_use]
    pub fn constituents(self) -> &'static [AminoAcid] {
        match self {
            AminoAcid::Asx => &[AminoAcid::Asp, AminoAcid::Asn],
            AminoAcid::Glx => &[AminoAcid::Glu, AminoAcid::Gln],
            AminoAcid::Xle => &[AminoAcid::Ile, AminoAcid::Leu],
            AminoAcid::Xaa => &AminoAcid::STANDARD,
            _ => &[],
        }
    }

    /// Dense index into enum-indexed tables.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Chou-Fasman conformational propensities of one residue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Propensity {
    /// Helix former propensity (P_alpha)
    pub helix: f64,
    /// Sheet former propensity (P_beta)
    pub sheet: f64,
    /// Turn propensity (P_turn)
    pub turn: f64,
}

impl Propensity {
    /// Create a propensity triple.
    #[must_use]
    pub const fn new(helix: f64, sheet: f64, turn: f64) -> Self {
        Self { helix, sheet, turn }
    }

    fn mean_of(values: impl Iterator<Item = Propensity>) -> Option<Self> {
        let (sum, n) = values.fold((Propensity::new(0.0, 0.0, 0.0), 0usize), |(acc, n), p| {
            (
                Propensity::new(acc.helix + p.helix, acc.sheet + p.sheet, acc.turn + p.turn),
                n + 1,
            )
        });
        if n == 0 {
            return None;
        }
        let n = n as f64;
        Some(Propensity::new(sum.helix / n, sum.sheet / n, sum.turn / n))
    }
}

/// Published Chou-Fasman (1978) values, in [`AminoAcid::STANDARD`] order.
const CHOU_FASMAN_1978: [(f64, f64, f64); 20] = [
    (1.42, 0.83, 0.66), // A
    (0.70, 1.19, 1.19), // C
    (1.01, 0.54, 1.46), // D
    (1.51, 0.37, 0.74), // E
    (1.13, 1.38, 0.60), // F
    (0.57, 0.75, 1.56), // G
    (1.00, 0.87, 0.95), // H
    (1.08, 1.60, 0.47), // I
    (1.16, 0.74, 1.01), // K
    (1.21, 1.30, 0.59), // L
    (1.45, 1.05, 0.60), // M
    (0.67, 0.89, 1.56), // N
    (0.57, 0.55, 1.52), // P
    (1.11, 1.10, 0.98), // Q
    (0.98, 0.93, 0.95), // R
    (0.77, 0.75, 1.43), // S
    (0.83, 1.19, 0.96), // T
    (1.06, 1.70, 0.50), // V
    (1.08, 1.37, 0.96), // W
    (0.69, 1.47, 1.14), // Y
];

/// Enum-indexed table of Chou-Fasman propensities.
///
/// Entries are validated against the closed [`AminoAcid`] alphabet when the
/// table is built. Ambiguity codes without an explicit entry resolve through
/// [`ChouFasmanTable::lookup`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChouFasmanTable {
    entries: [Option<Propensity>; AminoAcid::COUNT],
}

impl ChouFasmanTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the published 1978 values for the standard residues.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();
        for (aa, &(helix, sheet, turn)) in AminoAcid::STANDARD.iter().zip(CHOU_FASMAN_1978.iter()) {
            table.entries[aa.index()] = Some(Propensity::new(helix, sheet, turn));
        }
        table
    }

    /// Build a table from `(symbol, propensity)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AminoTable`] if a symbol is outside the alphabet or
    /// appears twice.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, Propensity)>,
    {
        let mut table = Self::new();
        for (symbol, propensity) in entries {
            let aa = AminoAcid::from_symbol(symbol).ok_or_else(|| {
                Error::amino_table(format!("unknown amino-acid symbol '{}'", symbol))
            })?;
            let slot = &mut table.entries[aa.index()];
            if slot.is_some() {
                return Err(Error::amino_table(format!(
                    "duplicate entry for amino acid '{}'",
                    aa
                )));
            }
            *slot = Some(propensity);
        }
        Ok(table)
    }

    /// Explicit entry for `aa`, if one was loaded.
    #[must_use]
    pub fn get(&self, aa: AminoAcid) -> Option<Propensity> {
        self.entries[aa.index()]
    }

    /// Entry for `aa`, falling back to the mean over an ambiguity code's
    /// constituents when no explicit entry exists.
    #[must_use]
    pub fn lookup(&self, aa: AminoAcid) -> Option<Propensity> {
        self.get(aa).or_else(|| {
            Propensity::mean_of(aa.constituents().iter().filter_map(|&c| self.get(c)))
        })
    }

    /// Number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
