//! Prediction result types.
//!
//! Represents the output of the heart disease risk scorer.

use serde::{Deserialize, Serialize};

/// Risk level classification for heart disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Probability below 0.30
    Low,
    /// Probability in [0.30, 0.70)
    Moderate,
    /// Probability of 0.70 or more
    High,
}

impl RiskLevel {
    pub const MODERATE_THRESHOLD: f64 = 0.30;
    pub const HIGH_THRESHOLD: f64 = 0.70;

    /// Bucket a probability. Both thresholds belong to the upper bracket.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability < Self::MODERATE_THRESHOLD {
            Self::Low
        } else if probability < Self::HIGH_THRESHOLD {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant indicators",
            Self::Moderate => "Moderate risk - Follow-up recommended",
            Self::High => "High risk - Immediate consultation advised",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Direction in which a feature moved the raw risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl Impact {
    #[must_use]
    pub fn from_contribution(contribution: f64) -> Self {
        if contribution > 0.0 {
            Self::Positive
        } else if contribution < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Sign glyph used in tabular output.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Negative => "-",
            Self::Neutral => "=",
        }
    }
}

/// Displayed form of the input that produced a contribution.
///
/// Integer inputs stay integers on the wire (`50`, not `50.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl From<i32> for FeatureValue {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for FeatureValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl std::fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One feature's share of the raw risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub feature: String,
    /// |contribution| / 10
    pub importance: f64,
    pub value: FeatureValue,
    pub impact: Impact,
}

/// Output of a single scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Heart disease probability (0.0 to 1.0)
    pub probability: f64,

    pub risk_level: RiskLevel,

    /// Heuristic certainty (0.70 to 0.95)
    pub confidence: f64,

    pub model_used: String,

    /// At most 8, by descending importance
    pub feature_contributions: Vec<FeatureContribution>,

    /// At most 6
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_from_probability() {
        assert_eq!(RiskLevel::from_probability(0.1), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.5), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.9), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_boundaries_go_up() {
        assert_eq!(RiskLevel::from_probability(0.30), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.70), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(0.299_999), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.699_999), RiskLevel::Moderate);
    }

    #[test]
    fn test_impact_from_contribution() {
        assert_eq!(Impact::from_contribution(0.01), Impact::Positive);
        assert_eq!(Impact::from_contribution(-0.01), Impact::Negative);
        assert_eq!(Impact::from_contribution(0.0), Impact::Neutral);
        assert_eq!(Impact::from_contribution(-0.0), Impact::Neutral);
    }

    #[test]
    fn test_feature_value_serializes_untagged() {
        let integer = serde_json::to_string(&FeatureValue::from(55)).expect("Should serialize");
        let number = serde_json::to_string(&FeatureValue::from(2.3)).expect("Should serialize");
        let text = serde_json::to_string(&FeatureValue::from("120 mmHg")).expect("Should serialize");
        assert_eq!(integer, "55");
        assert_eq!(number, "2.3");
        assert_eq!(text, "\"120 mmHg\"");
    }

    #[test]
    fn test_feature_value_deserializes_by_shape() {
        let integer: FeatureValue = serde_json::from_str("55").expect("Should parse");
        let number: FeatureValue = serde_json::from_str("2.3").expect("Should parse");
        assert_eq!(integer, FeatureValue::Integer(55));
        assert_eq!(number, FeatureValue::Number(2.3));
    }

    #[test]
    fn test_feature_value_display() {
        assert_eq!(FeatureValue::from(1.5).to_string(), "1.5");
        assert_eq!(FeatureValue::from(2).to_string(), "2");
        assert_eq!(FeatureValue::from("Male").to_string(), "Male");
    }
}
