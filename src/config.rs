//! Evaluation configuration.
//!
//! An [`EvalConfig`] is validated when it is built, whether through
//! [`EvalConfigBuilder`], serde, or TOML text; holding one means every
//! parameter is in range.
//!
//! ```rust
//! use sspeval::{EvalConfig, MetricKind};
//!
//! let config = EvalConfig::builder()
//!     .metric_kind(MetricKind::Sov)
//!     .reliability_bins(5)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.reliability_bin_count(), 5);
//! assert!(EvalConfig::builder().accuracy_bins(0).build().is_err());
//! ```

use crate::eval::{MetricKind, ReliabilityMode};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of reliability bins.
pub const DEFAULT_RELIABILITY_BINS: usize = 10;
/// Default number of accuracy histogram bins (plus one overflow slot).
pub const DEFAULT_ACCURACY_BINS: usize = 10;
/// Default confidence value that maps to the top reliability bin.
pub const DEFAULT_MAX_CONFIDENCE: f64 = 100.0;

/// Validated evaluation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEvalConfig", into = "RawEvalConfig")]
pub struct EvalConfig {
    metric_kind: MetricKind,
    reliability_bin_count: usize,
    accuracy_bin_count: usize,
    max_confidence_scale: f64,
    reliability_mode: ReliabilityMode,
}

/// Unvalidated mirror of [`EvalConfig`] used for (de)serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawEvalConfig {
    metric_kind: MetricKind,
    reliability_bin_count: usize,
    accuracy_bin_count: usize,
    max_confidence_scale: f64,
    reliability_mode: ReliabilityMode,
}

impl Default for RawEvalConfig {
    fn default() -> Self {
        Self {
            metric_kind: MetricKind::default(),
            reliability_bin_count: DEFAULT_RELIABILITY_BINS,
            accuracy_bin_count: DEFAULT_ACCURACY_BINS,
            max_confidence_scale: DEFAULT_MAX_CONFIDENCE,
            reliability_mode: ReliabilityMode::default(),
        }
    }
}

impl TryFrom<RawEvalConfig> for EvalConfig {
    type Error = Error;

    fn try_from(raw: RawEvalConfig) -> Result<Self> {
        if raw.reliability_bin_count == 0 {
            return Err(Error::config(
                "reliability_bin_count",
                "must be a positive integer, got 0",
            ));
        }
        if raw.accuracy_bin_count == 0 {
            return Err(Error::config(
                "accuracy_bin_count",
                "must be a positive integer, got 0",
            ));
        }
        if !raw.max_confidence_scale.is_finite() || raw.max_confidence_scale <= 0.0 {
            return Err(Error::config(
                "max_confidence_scale",
                format!(
                    "must be a positive finite number, got {}",
                    raw.max_confidence_scale
                ),
            ));
        }
        Ok(Self {
            metric_kind: raw.metric_kind,
            reliability_bin_count: raw.reliability_bin_count,
            accuracy_bin_count: raw.accuracy_bin_count,
            max_confidence_scale: raw.max_confidence_scale,
            reliability_mode: raw.reliability_mode,
        })
    }
}

impl From<EvalConfig> for RawEvalConfig {
    fn from(config: EvalConfig) -> Self {
        Self {
            metric_kind: config.metric_kind,
            reliability_bin_count: config.reliability_bin_count,
            accuracy_bin_count: config.accuracy_bin_count,
            max_confidence_scale: config.max_confidence_scale,
            reliability_mode: config.reliability_mode,
        }
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            metric_kind: MetricKind::default(),
            reliability_bin_count: DEFAULT_RELIABILITY_BINS,
            accuracy_bin_count: DEFAULT_ACCURACY_BINS,
            max_confidence_scale: DEFAULT_MAX_CONFIDENCE,
            reliability_mode: ReliabilityMode::default(),
        }
    }
}

impl EvalConfig {
    /// Start a builder with default values.
    pub fn builder() -> EvalConfigBuilder {
        EvalConfigBuilder::new()
    }

    /// Parse TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] for malformed TOML or unknown keys,
    /// [`Error::Config`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawEvalConfig = toml::from_str(text).map_err(|e| Error::parse(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Render as TOML text.
    ///
    /// # Errors
    ///
    /// [`Error::Encode`] if the TOML serializer rejects the document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(&RawEvalConfig::from(self.clone()))?)
    }

    /// Metric used for every accuracy figure in the report.
    pub fn metric_kind(&self) -> MetricKind {
        self.metric_kind
    }

    /// Number of reliability bins `R`.
    pub fn reliability_bin_count(&self) -> usize {
        self.reliability_bin_count
    }

    /// Number of accuracy histogram bins `A`.
    pub fn accuracy_bin_count(&self) -> usize {
        self.accuracy_bin_count
    }

    /// Confidence value `M` mapped to the top reliability bin.
    pub fn max_confidence_scale(&self) -> f64 {
        self.max_confidence_scale
    }

    /// How residues are weighted into reliability bins.
    pub fn reliability_mode(&self) -> ReliabilityMode {
        self.reliability_mode
    }
}

/// Builder for [`EvalConfig`].
#[derive(Debug, Clone, Default)]
pub struct EvalConfigBuilder {
    raw: RawEvalConfig,
}

impl EvalConfigBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the metric (Q3 or SOV).
    pub fn metric_kind(mut self, kind: MetricKind) -> Self {
        self.raw.metric_kind = kind;
        self
    }

    /// Set the number of reliability bins.
    pub fn reliability_bins(mut self, count: usize) -> Self {
        self.raw.reliability_bin_count = count;
        self
    }

    /// Set the number of accuracy histogram bins.
    pub fn accuracy_bins(mut self, count: usize) -> Self {
        self.raw.accuracy_bin_count = count;
        self
    }

    /// Set the maximum confidence scale.
    pub fn max_confidence(mut self, scale: f64) -> Self {
        self.raw.max_confidence_scale = scale;
        self
    }

    /// Set the reliability weighting mode.
    pub fn reliability_mode(mut self, mode: ReliabilityMode) -> Self {
        self.raw.reliability_mode = mode;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<EvalConfig> {
        EvalConfig::try_from(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EvalConfig::default();
        assert_eq!(config.metric_kind(), MetricKind::Q3);
        assert_eq!(config.reliability_bin_count(), 10);
        assert_eq!(config.accuracy_bin_count(), 10);
        assert_eq!(config.max_confidence_scale(), 100.0);
        assert_eq!(config.reliability_mode(), ReliabilityMode::SequenceWeighted);
        assert_eq!(EvalConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn test_rejects_non_positive_parameters() {
        let cases = [
            (EvalConfig::builder().reliability_bins(0), "reliability_bin_count"),
            (EvalConfig::builder().accuracy_bins(0), "accuracy_bin_count"),
            (EvalConfig::builder().max_confidence(0.0), "max_confidence_scale"),
            (EvalConfig::builder().max_confidence(-1.0), "max_confidence_scale"),
            (EvalConfig::builder().max_confidence(f64::INFINITY), "max_confidence_scale"),
        ];
        for (builder, expected) in cases {
            match builder.build() {
                Err(Error::Config { parameter, .. }) => assert_eq!(parameter, expected),
                other => panic!("expected config error for {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let config = EvalConfig::from_toml_str("metric_kind = \"SOV\"\nreliability_bin_count = 5\n")
            .unwrap();
        assert_eq!(config.metric_kind(), MetricKind::Sov);
        assert_eq!(config.reliability_bin_count(), 5);
        assert_eq!(config.accuracy_bin_count(), DEFAULT_ACCURACY_BINS);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = EvalConfig::builder()
            .metric_kind(MetricKind::Sov)
            .max_confidence(9.0)
            .reliability_mode(ReliabilityMode::ResidueMatch)
            .build()
            .unwrap();
        let text = config.to_toml_string().unwrap();
        assert_eq!(EvalConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_toml_validation_keeps_parameter_name() {
        let err = EvalConfig::from_toml_str("accuracy_bin_count = 0").unwrap_err();
        assert!(matches!(err, Error::Config { parameter: "accuracy_bin_count", .. }));

        let err = EvalConfig::from_toml_str("bins = 3").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_serde_json_goes_through_validation() {
        let ok: EvalConfig = serde_json::from_str(r#"{"metric_kind":"Q3"}"#).unwrap();
        assert_eq!(ok, EvalConfig::default());
        let bad = serde_json::from_str::<EvalConfig>(r#"{"reliability_bin_count":0}"#);
        assert!(bad.is_err());
    }
}
