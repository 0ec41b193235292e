//! Risk model port: Trait for turning a patient record into a prediction.
//!
//! This trait abstracts the scoring strategy from the application logic.

use crate::domain::{PatientRecord, PredictionResult};

/// Trait for heart disease risk models.
///
/// Implementations must be pure: the same record always yields the same
/// result, and prediction never fails.
pub trait RiskModel: Send + Sync {
    /// Label reported in every result (for example `"Random Forest v2.1"`).
    fn label(&self) -> &str;

    /// Score a patient record.
    fn predict(&self, record: &PatientRecord) -> PredictionResult;
}
