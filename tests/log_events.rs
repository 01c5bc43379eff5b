//! Warnings emitted for data that evaluates but carries no support.
//!
//! A process-wide `log::Log` records every event; this file holds a single
//! test so no other test in the binary writes to the same logger.

use log::{Level, LevelFilter, Log, Metadata, Record};
use sspeval::{Dataset, Evaluator, LabeledSequence};
use std::sync::{Mutex, MutexGuard};

struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Capture {
    fn lock_records(&self) -> MutexGuard<'_, Vec<(Level, String)>> {
        self.records.lock().unwrap()
    }
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.lock_records().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

fn take_warnings() -> Vec<String> {
    CAPTURE
        .lock_records()
        .drain(..)
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, msg)| msg)
        .collect()
}

#[test]
fn empty_inputs_are_reported_as_warnings() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // Empty dataset: one dataset warning plus one per class.
    Evaluator::default().evaluate(&Dataset::new()).unwrap();
    let warnings = take_warnings();
    assert!(
        warnings.iter().any(|w| w.contains("no sequences")),
        "{:?}",
        warnings
    );
    assert_eq!(
        warnings.iter().filter(|w| w.contains("zero support")).count(),
        3,
        "{:?}",
        warnings
    );

    // Only E lacks true residues here.
    let dataset: Dataset =
        vec![LabeledSequence::new("HHHCCC").with_prediction("HHHEEE", vec![50.0; 6])]
            .into_iter()
            .collect();
    Evaluator::default().evaluate(&dataset).unwrap();
    let warnings = take_warnings();
    assert_eq!(warnings.len(), 1, "{:?}", warnings);
    assert!(warnings[0].contains("class E"), "{}", warnings[0]);

    // Full support in every class: nothing to warn about.
    let dataset: Dataset =
        vec![LabeledSequence::new("HEC").with_prediction("HEC", vec![90.0; 3])]
            .into_iter()
            .collect();
    Evaluator::default().evaluate(&dataset).unwrap();
    assert!(take_warnings().is_empty());
}
