//! Segment overlap (SOV'99).
//!
//! Labels are split into maximal same-label runs. Each true segment is
//! credited for every overlapping predicted segment of the same class:
//!
//! ```text
//! (minov + delta) / maxov * len(true)
//!
//! minov = overlap length
//! maxov = union extent
//! delta = min(maxov - minov, minov, len(true) / 2, len(pred) / 2)
//! ```
//!
//! The normalizer counts `len(true)` once per overlapping pair, plus once for
//! every true segment with no overlapping partner. A one-to-one segment match
//! therefore normalizes by the class residue count, and a true segment split
//! across several predicted ones can never push the score above 100.

use super::metrics::Tally;
use crate::types::SsLabel;
use serde::{Deserialize, Serialize};

/// A maximal run of one label, half-open `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Label of every residue in the run
    pub label: SsLabel,
    /// First residue
    pub start: usize,
    /// One past the last residue
    pub end: usize,
}

impl Segment {
    /// Number of residues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Segments are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    fn overlaps(&self, other: &Segment) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Split labels into maximal runs.
#[must_use]
pub fn segments(labels: &[SsLabel]) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::new();
    for (i, &label) in labels.iter().enumerate() {
        match out.last_mut() {
            Some(seg) if seg.label == label => seg.end = i + 1,
            _ => out.push(Segment {
                label,
                start: i,
                end: i + 1,
            }),
        }
    }
    out
}

/// Contribution of one overlapping (true, predicted) pair.
fn pair_score(truth: &Segment, pred: &Segment) -> f64 {
    let minov = truth.end.min(pred.end) - truth.start.max(pred.start);
    let maxov = truth.end.max(pred.end) - truth.start.min(pred.start);
    let delta = (maxov - minov)
        .min(minov)
        .min(truth.len() / 2)
        .min(pred.len() / 2);
    (minov + delta) as f64 / maxov as f64 * truth.len() as f64
}

/// SOV tally, optionally restricted to true segments of `class`.
///
/// `support` is the number of true residues that qualified.
#[must_use]
pub fn sov_tally(truth: &[SsLabel], predicted: &[SsLabel], class: Option<SsLabel>) -> Tally {
    let true_segs = segments(truth);
    let pred_segs = segments(predicted);

    let mut tally = Tally::default();
    for s1 in true_segs
        .iter()
        .filter(|s| class.map_or(true, |c| s.label == c))
    {
        let len = s1.len();
        tally.support += len;

        let mut paired = false;
        // Predicted segments are sorted and disjoint.
        for s2 in pred_segs
            .iter()
            .skip_while(|s2| s2.end <= s1.start)
            .take_while(|s2| s2.start < s1.end)
            .filter(|s2| s2.label == s1.label && s1.overlaps(s2))
        {
            paired = true;
            tally.score += pair_score(s1, s2);
            tally.normalizer += len as f64;
        }
        if !paired {
            tally.normalizer += len as f64;
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(s: &str) -> Vec<SsLabel> {
        s.chars().filter_map(SsLabel::from_char).collect()
    }

    fn sov(truth: &str, predicted: &str, class: Option<SsLabel>) -> (f64, usize) {
        let acc = sov_tally(&labels(truth), &labels(predicted), class).accuracy();
        (acc.value, acc.support)
    }

    #[test]
    fn test_segments_are_maximal_runs() {
        let segs = segments(&labels("HHHCCEH"));
        let spans: Vec<(char, usize, usize)> = segs
            .iter()
            .map(|s| (s.label.as_char(), s.start, s.end))
            .collect();
        assert_eq!(spans, vec![('H', 0, 3), ('C', 3, 5), ('E', 5, 6), ('H', 6, 7)]);
        assert!(segments(&[]).is_empty());
    }

    #[test]
    fn test_identical_is_100() {
        let (value, support) = sov("CCHHHHEEEC", "CCHHHHEEEC", None);
        assert!((value - 100.0).abs() < 1e-9);
        assert_eq!(support, 10);
    }

    #[test]
    fn test_no_shared_class_is_zero() {
        let (value, support) = sov("HHHH", "EEEE", None);
        assert_eq!(value, 0.0);
        assert_eq!(support, 4);
    }

    #[test]
    fn test_boundary_shift_is_tolerated() {
        // C[0,2)~C[0,3): (2+1)/3*2 = 2
        // H[2,6)~H[3,7): (3+2)/5*4 = 4
        // C[6,8)~C[7,8): (1+0)/2*2 = 1
        let (value, _) = sov("CCHHHHCC", "CCCHHHHC", None);
        assert!((value - 87.5).abs() < 1e-9, "got {}", value);

        let q3 = crate::eval::metrics::q3_tally(&labels("CCHHHHCC"), &labels("CCCHHHHC"), None);
        assert!(value > q3.accuracy().value);
    }

    #[test]
    fn test_split_segment_stays_bounded() {
        // H[0,8) vs H[0,3): (3+1)/8*8 = 4 and H[4,8): (4+2)/8*8 = 6, N = 16
        let (value, support) = sov("HHHHHHHH", "HHHCHHHH", None);
        assert!((value - 62.5).abs() < 1e-9, "got {}", value);
        assert_eq!(support, 8);
    }

    #[test]
    fn test_per_class() {
        let (h, h_support) = sov("HHHCCC", "HHHEEE", Some(SsLabel::Helix));
        assert!((h - 100.0).abs() < 1e-9);
        assert_eq!(h_support, 3);

        let (c, c_support) = sov("HHHCCC", "HHHEEE", Some(SsLabel::Coil));
        assert_eq!((c, c_support), (0.0, 3));

        let (e, e_support) = sov("HHHCCC", "HHHEEE", Some(SsLabel::Strand));
        assert_eq!((e, e_support), (0.0, 0));

        let (overall, _) = sov("HHHCCC", "HHHEEE", None);
        assert!((overall - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_equals_sum_of_class_tallies() {
        let truth = labels("CHHHHCCEEEECCHHC");
        let pred = labels("CCHHHCEEEEECHHHC");
        let overall = sov_tally(&truth, &pred, None);
        let summed = SsLabel::ALL
            .iter()
            .map(|&c| sov_tally(&truth, &pred, Some(c)))
            .fold(Tally::default(), Tally::merge);
        assert!((overall.score - summed.score).abs() < 1e-9);
        assert!((overall.normalizer - summed.normalizer).abs() < 1e-9);
        assert_eq!(overall.support, summed.support);
    }
}
