//! End-to-end scenarios with hand-computed expectations.
//!
//! | Scenario | Checks |
//! |----------|--------|
//! | one sequence, half wrong | overall and per-class Q3, empty E support |
//! | 100% + 50% sequences | aggregate by counts (80), not by mean (75) |
//! | five quarter scores | histogram slots 0, 2, 5, 7, 10 |
//! | confidence == max | last reliability bin |

use sspeval::{
    Dataset, Error, EvalConfig, Evaluator, LabeledSequence, MetricKind, ReliabilityMode, SsLabel,
};

fn scored(truth: &str, predicted: &str, confidence: f64) -> LabeledSequence {
    LabeledSequence::new(truth).with_prediction(predicted, vec![confidence; truth.len()])
}

fn q3() -> Evaluator {
    Evaluator::default()
}

// =============================================================================
// Accuracy
// =============================================================================

#[test]
fn half_wrong_sequence_per_class() {
    let dataset: Dataset = vec![scored("HHHCCC", "HHHEEE", 50.0)].into_iter().collect();
    let report = q3().evaluate(&dataset).unwrap();

    assert_eq!(report.overall_accuracy(), 50.0);

    let h = report.accuracy_for(SsLabel::Helix);
    assert_eq!((h.value, h.support), (100.0, 3));

    let c = report.accuracy_for(SsLabel::Coil);
    assert_eq!((c.value, c.support), (0.0, 3));

    let e = report.accuracy_for(SsLabel::Strand);
    assert_eq!((e.value, e.support), (0.0, 0));
    assert!(e.is_empty(), "E has no true residues and must be flagged empty");
}

#[test]
fn dataset_accuracy_aggregates_by_counts() {
    let dataset: Dataset = vec![
        scored("HHHHHH", "HHHHHH", 90.0),
        scored("EEEE", "EECC", 40.0),
    ]
    .into_iter()
    .collect();
    let report = q3().evaluate(&dataset).unwrap();

    assert!(
        (report.overall_accuracy() - 80.0).abs() < 1e-9,
        "expected (6 + 2) / (6 + 4) = 80, got {}",
        report.overall_accuracy()
    );
    assert_eq!(report.overall().support, 10);
}

#[test]
fn identical_prediction_scores_100_with_full_support() {
    for kind in [MetricKind::Q3, MetricKind::Sov] {
        let config = EvalConfig::builder().metric_kind(kind).build().unwrap();
        let dataset: Dataset = vec![scored("CCHHHHEEEECC", "CCHHHHEEEECC", 70.0)]
            .into_iter()
            .collect();
        let report = Evaluator::new(config).evaluate(&dataset).unwrap();
        assert!((report.overall_accuracy() - 100.0).abs() < 1e-9, "{}", kind);
        assert_eq!(report.overall().support, 12, "{}", kind);
    }
}

#[test]
fn sov_is_more_lenient_than_q3_on_shifted_boundaries() {
    let dataset: Dataset = vec![scored("CCHHHHCC", "CCCHHHHC", 70.0)].into_iter().collect();
    let q3 = q3().evaluate(&dataset).unwrap();
    let sov = sspeval::evaluate(
        &dataset,
        &EvalConfig::builder().metric_kind(MetricKind::Sov).build().unwrap(),
    )
    .unwrap();

    assert_eq!(q3.overall_accuracy(), 75.0);
    assert!((sov.overall_accuracy() - 87.5).abs() < 1e-9);
}

// =============================================================================
// Histogram
// =============================================================================

#[test]
fn quarter_scores_fill_expected_slots() {
    let dataset: Dataset = ["EEEE", "HEEE", "HHEE", "HHHE", "HHHH"]
        .iter()
        .map(|p| scored("HHHH", p, 50.0))
        .collect();
    let report = q3().evaluate(&dataset).unwrap();
    let counts = report.distribution().counts();

    assert_eq!(counts.len(), 11);
    for (slot, &count) in counts.iter().enumerate() {
        let expected = usize::from([0, 2, 5, 7, 10].contains(&slot));
        assert_eq!(count, expected, "slot {}", slot);
    }
}

// =============================================================================
// Reliability
// =============================================================================

#[test]
fn maximum_confidence_lands_in_last_bin() {
    let dataset: Dataset = vec![scored("HHH", "HHH", 100.0)].into_iter().collect();
    for mode in [
        ReliabilityMode::SequenceWeighted,
        ReliabilityMode::ResidueMatch,
        ReliabilityMode::SequenceMean,
    ] {
        let config = EvalConfig::builder().reliability_mode(mode).build().unwrap();
        let report = Evaluator::new(config).evaluate(&dataset).unwrap();
        let curve = report.reliability();
        assert_eq!(curve.len(), 10);
        assert_eq!(curve.get(9).unwrap().support, 3, "{:?}", mode);
    }
}

#[test]
fn custom_scale_and_bin_count() {
    // Reliability index on a 0..9 scale with 10 bins.
    let config = EvalConfig::builder()
        .max_confidence(9.0)
        .reliability_bins(10)
        .build()
        .unwrap();
    let seq = LabeledSequence::new("HHEE").with_prediction("HHEC", vec![0.0, 4.5, 9.0, 9.0]);
    let dataset: Dataset = vec![seq].into_iter().collect();
    let report = Evaluator::new(config).evaluate(&dataset).unwrap();
    let curve = report.reliability();
    assert_eq!(curve.get(0).unwrap().support, 1);
    assert_eq!(curve.get(5).unwrap().support, 1);
    assert_eq!(curve.get(9).unwrap().support, 2);
}

#[test]
fn reliability_table_format() {
    let dataset: Dataset = vec![
        scored("HHHH", "HHHH", 20.0),
        scored("EEEE", "EECC", 80.0),
    ]
    .into_iter()
    .collect();
    let report = q3().evaluate(&dataset).unwrap();
    assert_eq!(report.reliability_table(), "2\t100\n8\t50\n");
    assert_eq!(report.series_label(), "Mean: 75");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unpredicted_sequence_is_a_precondition_violation() {
    let mut dataset: Dataset = vec![scored("HH", "HH", 1.0)].into_iter().collect();
    dataset.push(LabeledSequence::new("CCC"));
    let err = q3().evaluate(&dataset).unwrap_err();
    assert!(matches!(err, Error::DataIntegrity { sequence: 1, position: None, .. }));
    assert!(err.to_string().contains("sequence 1"));
}

#[test]
fn unknown_label_reports_sequence_and_position() {
    let dataset: Dataset = vec![scored("HHH", "HHH", 1.0), scored("HHH", "HTH", 1.0)]
        .into_iter()
        .collect();
    let err = q3().evaluate(&dataset).unwrap_err();
    assert!(matches!(
        err,
        Error::DataIntegrity {
            sequence: 1,
            position: Some(1),
            ..
        }
    ));
}

#[test]
fn merged_datasets_evaluate_as_one() {
    let mut a: Dataset = vec![scored("HHHHHH", "HHHHHH", 90.0)].into_iter().collect();
    let b: Dataset = vec![scored("EEEE", "EECC", 40.0)].into_iter().collect();
    a.merge(b);
    let report = q3().evaluate(&a).unwrap();
    assert_eq!(report.sequence_count(), 2);
    assert!((report.overall_accuracy() - 80.0).abs() < 1e-9);
}
