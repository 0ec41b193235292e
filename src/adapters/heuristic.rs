//! Heuristic risk model backed by the weighted clinical score.

use crate::domain::{scoring, PatientRecord, PredictionResult};
use crate::ports::RiskModel;

/// Weighted-sum scorer with logistic squashing (see [`scoring::score`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicModel;

impl HeuristicModel {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RiskModel for HeuristicModel {
    fn label(&self) -> &str {
        scoring::MODEL_LABEL
    }

    fn predict(&self, record: &PatientRecord) -> PredictionResult {
        scoring::score(record)
    }
}
