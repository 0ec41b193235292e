//! Assessment service: Scores a submitted patient record.
//!
//! This service coordinates:
//! - Optional domain validation of the record
//! - Scoring through the configured risk model
//! - Logging of the derived outcome (never of raw patient values)

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{PatientRecord, PredictionResult};
use crate::ports::RiskModel;
use crate::CardioError;

/// A scored submission, as shown on the results screen.
#[derive(Debug, Clone)]
pub struct Assessment {
    /// The record exactly as submitted
    pub record: PatientRecord,

    /// The model output
    pub result: PredictionResult,

    /// When the record was scored
    pub assessed_at: DateTime<Utc>,
}

/// Service for running risk assessments.
pub struct AssessmentService<M>
where
    M: RiskModel,
{
    model: Arc<M>,
}

impl<M> AssessmentService<M>
where
    M: RiskModel,
{
    /// Create a new assessment service.
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    /// Label of the underlying model.
    #[must_use]
    pub fn model_label(&self) -> &str {
        self.model.label()
    }

    /// Score a record without range checks.
    ///
    /// Out-of-range values are carried through the arithmetic unchanged.
    pub fn assess(&self, record: PatientRecord) -> Assessment {
        let result = self.model.predict(&record);

        tracing::info!(
            "Assessment complete: probability={:.4}, risk={}, confidence={:.1}%",
            result.probability,
            result.risk_level,
            result.confidence * 100.0
        );
        if let Some(top) = result.feature_contributions.first() {
            tracing::debug!(
                "Top contribution: {} (importance={:.4}, impact={:?})",
                top.feature,
                top.importance,
                top.impact
            );
        }

        Assessment {
            record,
            result,
            assessed_at: Utc::now(),
        }
    }

    /// Validate the record, then score it.
    ///
    /// # Errors
    /// Returns `CardioError::Validation` listing every out-of-range field.
    pub fn assess_validated(&self, record: PatientRecord) -> Result<Assessment, CardioError> {
        if let Err(errors) = record.validate() {
            tracing::warn!("Rejected patient record: {} invalid field(s)", errors.len());
            return Err(CardioError::Validation(errors.join(", ")));
        }
        Ok(self.assess(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::HeuristicModel;
    use crate::domain::RiskLevel;

    /// Model returning a fixed probability, for exercising the service alone.
    struct FixedModel(f64);

    impl RiskModel for FixedModel {
        fn label(&self) -> &str {
            "fixed"
        }

        fn predict(&self, _record: &PatientRecord) -> PredictionResult {
            PredictionResult {
                probability: self.0,
                risk_level: RiskLevel::from_probability(self.0),
                confidence: 0.7,
                model_used: "fixed".to_string(),
                feature_contributions: Vec::new(),
                recommendations: Vec::new(),
            }
        }
    }

    fn create_test_service() -> AssessmentService<HeuristicModel> {
        AssessmentService::new(Arc::new(HeuristicModel::new()))
    }

    #[test]
    fn test_assess_keeps_record() {
        let service = create_test_service();
        let record = PatientRecord {
            age: 64,
            ..Default::default()
        };

        let assessment = service.assess(record.clone());
        assert_eq!(assessment.record, record);
        assert_eq!(assessment.result.model_used, service.model_label());
    }

    #[test]
    fn test_assess_does_not_validate() {
        let service = create_test_service();
        let record = PatientRecord {
            age: -1,
            ..Default::default()
        };

        let assessment = service.assess(record);
        assert!((0.0..=1.0).contains(&assessment.result.probability));
    }

    #[test]
    fn test_assess_validated_rejects_out_of_range() {
        let service = create_test_service();
        let record = PatientRecord {
            cholesterol: 20,
            ..Default::default()
        };

        match service.assess_validated(record) {
            Err(CardioError::Validation(msg)) => assert!(msg.contains("Cholesterol")),
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_service_delegates_to_model() {
        let service = AssessmentService::new(Arc::new(FixedModel(0.3)));
        let assessment = service.assess(PatientRecord::default());

        assert_eq!(service.model_label(), "fixed");
        assert_eq!(assessment.result.risk_level, RiskLevel::Moderate);
    }
}
