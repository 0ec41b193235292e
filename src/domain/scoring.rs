//! Heuristic heart disease risk scoring.
//!
//! The raw risk score is a sum of independent per-feature terms. It is
//! squashed through a logistic curve into a probability, bucketed into a
//! risk tier, and explained by ranked per-feature contributions.
//!
//! Everything here is a pure function of the [`PatientRecord`]: no state, no
//! randomness, no I/O. Input is not range-checked; see
//! [`PatientRecord::validate`] for that.

use super::patient::{ChestPainType, PatientRecord, RestingEcg, Sex, StSlope, Thalassemia};
use super::prediction::{FeatureContribution, FeatureValue, Impact, PredictionResult, RiskLevel};

/// Label reported as the model that produced every result.
pub const MODEL_LABEL: &str = "Random Forest v2.1";

/// Logistic steepness applied to the raw score.
pub const LOGISTIC_STEEPNESS: f64 = 3.0;

/// Number of contributions kept after ranking.
pub const MAX_CONTRIBUTIONS: usize = 8;

/// Number of recommendations kept after rule evaluation.
pub const MAX_RECOMMENDATIONS: usize = 6;

const CONFIDENCE_FLOOR: f64 = 0.70;
const CONFIDENCE_CAP: f64 = 0.95;

impl Sex {
    fn risk_weight(self) -> f64 {
        match self {
            Self::Male => 0.10,
            Self::Female => -0.05,
        }
    }
}

impl ChestPainType {
    fn risk_weight(self) -> f64 {
        match self {
            Self::Typical => 0.25,
            Self::Atypical => 0.15,
            Self::NonAnginal => 0.05,
            Self::Asymptomatic => -0.10,
        }
    }
}

impl RestingEcg {
    fn risk_weight(self) -> f64 {
        match self {
            Self::Normal => 0.0,
            Self::StTWaveAbnormality => 0.12,
            Self::LvHypertrophy => 0.18,
        }
    }
}

impl StSlope {
    fn risk_weight(self) -> f64 {
        match self {
            Self::Upsloping => -0.10,
            Self::Flat => 0.10,
            Self::Downsloping => 0.20,
        }
    }
}

impl Thalassemia {
    fn risk_weight(self) -> f64 {
        match self {
            Self::Normal => 0.0,
            Self::FixedDefect => 0.15,
            Self::ReversibleDefect => 0.25,
        }
    }
}

/// A single signed term of the raw score, before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTerm {
    pub feature: &'static str,
    pub contribution: f64,
    pub value: FeatureValue,
}

impl FeatureTerm {
    fn new(feature: &'static str, contribution: f64, value: impl Into<FeatureValue>) -> Self {
        Self {
            feature,
            contribution,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn to_contribution(&self) -> FeatureContribution {
        FeatureContribution {
            feature: self.feature.to_string(),
            importance: self.contribution.abs() / 10.0,
            value: self.value.clone(),
            impact: Impact::from_contribution(self.contribution),
        }
    }
}

/// Compute every per-feature term in the fixed evaluation order.
#[must_use]
pub fn feature_terms(record: &PatientRecord) -> Vec<FeatureTerm> {
    let age = f64::from(record.age);

    vec![
        FeatureTerm::new("Age", (age - 40.0) * 0.015, record.age),
        FeatureTerm::new("Sex", record.sex.risk_weight(), record.sex.label()),
        FeatureTerm::new(
            "Chest Pain Type",
            record.chest_pain_type.risk_weight(),
            record.chest_pain_type.display_value(),
        ),
        FeatureTerm::new(
            "Resting Blood Pressure",
            (f64::from(record.resting_bp) - 120.0) * 0.002,
            format!("{} mmHg", record.resting_bp),
        ),
        FeatureTerm::new(
            "Cholesterol",
            (f64::from(record.cholesterol) - 200.0) * 0.001,
            format!("{} mg/dl", record.cholesterol),
        ),
        FeatureTerm::new(
            "Fasting Blood Sugar",
            if record.fasting_blood_sugar_high { 0.08 } else { 0.0 },
            if record.fasting_blood_sugar_high {
                ">120 mg/dl"
            } else {
                "≤120 mg/dl"
            },
        ),
        FeatureTerm::new(
            "Resting ECG",
            record.resting_ecg.risk_weight(),
            record.resting_ecg.display_value(),
        ),
        FeatureTerm::new(
            "Max Heart Rate",
            (record.expected_max_heart_rate() - f64::from(record.max_heart_rate))
                * 0.003,
            format!("{} bpm", record.max_heart_rate),
        ),
        FeatureTerm::new(
            "Exercise Angina",
            if record.exercise_angina { 0.20 } else { 0.0 },
            if record.exercise_angina {
                "Present"
            } else {
                "Absent"
            },
        ),
        FeatureTerm::new(
            "ST Depression",
            record.st_depression * 0.15,
            record.st_depression,
        ),
        FeatureTerm::new(
            "ST Slope",
            record.st_slope.risk_weight(),
            record.st_slope.display_value(),
        ),
        FeatureTerm::new(
            "Major Vessels",
            f64::from(record.major_vessels) * 0.15,
            record.major_vessels,
        ),
        FeatureTerm::new(
            "Thalassemia",
            record.thalassemia.risk_weight(),
            record.thalassemia.display_value(),
        ),
    ]
}

/// Unbounded linear risk score: the sum of all feature terms.
#[must_use]
pub fn raw_score(record: &PatientRecord) -> f64 {
    feature_terms(record).iter().map(|t| t.contribution).sum()
}

/// Logistic squashing of a raw score into [0, 1].
#[must_use]
pub fn probability_from_score(raw: f64) -> f64 {
    (1.0 / (1.0 + (-LOGISTIC_STEEPNESS * raw).exp())).clamp(0.0, 1.0)
}

/// Certainty heuristic: grows with distance from 0.5, within [0.70, 0.95].
#[must_use]
pub fn confidence_for(probability: f64) -> f64 {
    (CONFIDENCE_FLOOR + (probability - 0.5).abs() * 0.5).min(CONFIDENCE_CAP)
}

/// Score a patient record.
#[must_use]
pub fn score(record: &PatientRecord) -> PredictionResult {
    let terms = feature_terms(record);
    let raw: f64 = terms.iter().map(|t| t.contribution).sum();

    let probability = probability_from_score(raw);
    let risk_level = RiskLevel::from_probability(probability);
    let confidence = confidence_for(probability);

    let mut feature_contributions: Vec<FeatureContribution> =
        terms.iter().map(FeatureTerm::to_contribution).collect();
    // `sort_by` is stable: equal importances keep evaluation order.
    feature_contributions.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    feature_contributions.truncate(MAX_CONTRIBUTIONS);

    PredictionResult {
        probability,
        risk_level,
        confidence,
        model_used: MODEL_LABEL.to_string(),
        feature_contributions,
        recommendations: recommend(record, risk_level, probability),
    }
}

struct RecommendationRule {
    applies: fn(&PatientRecord) -> bool,
    message: &'static str,
}

// Truncation keeps the earliest matches, so order matters.
const RECOMMENDATION_RULES: [RecommendationRule; 5] = [
    RecommendationRule {
        applies: |r| r.resting_bp > 140,
        message: "Blood pressure management and monitoring required",
    },
    RecommendationRule {
        applies: |r| r.cholesterol > 240,
        message: "Lipid management therapy consideration",
    },
    RecommendationRule {
        applies: |r| r.fasting_blood_sugar_high,
        message: "Diabetes management and glucose control optimization",
    },
    RecommendationRule {
        applies: |r| r.exercise_angina,
        message: "Exercise tolerance evaluation and cardiac rehabilitation",
    },
    RecommendationRule {
        applies: |r| f64::from(r.max_heart_rate) < r.expected_max_heart_rate() * 0.8,
        message: "Exercise capacity assessment and fitness improvement",
    },
];

fn base_recommendations(risk_level: RiskLevel) -> [&'static str; 3] {
    match risk_level {
        RiskLevel::High => [
            "Immediate cardiology consultation recommended",
            "Consider stress testing or cardiac catheterization",
            "Aggressive risk factor modification required",
        ],
        RiskLevel::Moderate => [
            "Regular cardiology follow-up advised",
            "Lifestyle modifications and risk factor control",
            "Consider non-invasive cardiac imaging",
        ],
        RiskLevel::Low => [
            "Continue routine preventive care",
            "Maintain healthy lifestyle practices",
            "Regular monitoring of cardiovascular risk factors",
        ],
    }
}

/// Build the recommendation list for a record and its risk tier.
///
/// The three tier-based entries always come first; record-specific entries
/// follow in rule order and are dropped past the sixth slot. `_probability`
/// does not influence the result.
#[must_use]
pub fn recommend(record: &PatientRecord, risk_level: RiskLevel, _probability: f64) -> Vec<String> {
    base_recommendations(risk_level)
        .into_iter()
        .chain(
            RECOMMENDATION_RULES
                .iter()
                .filter(|rule| (rule.applies)(record))
                .map(|rule| rule.message),
        )
        .take(MAX_RECOMMENDATIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn low_risk_record() -> PatientRecord {
        PatientRecord {
            age: 30,
            sex: Sex::Female,
            chest_pain_type: ChestPainType::Asymptomatic,
            resting_bp: 110,
            cholesterol: 180,
            fasting_blood_sugar_high: false,
            resting_ecg: RestingEcg::Normal,
            max_heart_rate: 190,
            exercise_angina: false,
            st_depression: 0.0,
            st_slope: StSlope::Upsloping,
            major_vessels: 0,
            thalassemia: Thalassemia::Normal,
        }
    }

    fn everything_abnormal() -> PatientRecord {
        PatientRecord {
            age: 70,
            sex: Sex::Male,
            chest_pain_type: ChestPainType::Typical,
            resting_bp: 160,
            cholesterol: 300,
            fasting_blood_sugar_high: true,
            resting_ecg: RestingEcg::LvHypertrophy,
            max_heart_rate: 100,
            exercise_angina: true,
            st_depression: 3.0,
            st_slope: StSlope::Downsloping,
            major_vessels: 3,
            thalassemia: Thalassemia::ReversibleDefect,
        }
    }

    #[test]
    fn test_baseline_scenario() {
        let record = PatientRecord::default();
        assert!((raw_score(&record) - 0.46).abs() < EPS);

        let result = score(&record);
        assert!((result.probability - 0.799_0).abs() < 1e-3);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!((result.confidence - 0.849_5).abs() < 1e-3);
        assert_eq!(result.model_used, MODEL_LABEL);
    }

    #[test]
    fn test_low_risk_scenario() {
        let record = low_risk_record();
        assert!((raw_score(&record) + 0.44).abs() < EPS);

        let result = score(&record);
        assert!((result.probability - 0.211_0).abs() < 1e-3);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(
            result.recommendations,
            vec![
                "Continue routine preventive care",
                "Maintain healthy lifestyle practices",
                "Regular monitoring of cardiovascular risk factors",
            ]
        );
    }

    #[test]
    fn test_thirteen_terms_in_evaluation_order() {
        let names: Vec<&str> = feature_terms(&PatientRecord::default())
            .iter()
            .map(|t| t.feature)
            .collect();
        assert_eq!(
            names,
            vec![
                "Age",
                "Sex",
                "Chest Pain Type",
                "Resting Blood Pressure",
                "Cholesterol",
                "Fasting Blood Sugar",
                "Resting ECG",
                "Max Heart Rate",
                "Exercise Angina",
                "ST Depression",
                "ST Slope",
                "Major Vessels",
                "Thalassemia",
            ]
        );
    }

    #[test]
    fn test_contributions_ranked_and_truncated() {
        let result = score(&PatientRecord::default());
        assert_eq!(result.feature_contributions.len(), MAX_CONTRIBUTIONS);

        let top = &result.feature_contributions[0];
        assert_eq!(top.feature, "Chest Pain Type");
        assert!((top.importance - 0.025).abs() < EPS);
        assert_eq!(top.impact, Impact::Positive);
        assert_eq!(top.value, FeatureValue::from("typical"));

        for pair in result.feature_contributions.windows(2) {
            assert!(pair[0].importance >= pair[1].importance);
        }
    }

    #[test]
    fn test_ties_keep_evaluation_order() {
        // Baseline: Sex and ST Slope both contribute |0.10|; Sex is computed first.
        let result = score(&PatientRecord::default());
        let names: Vec<&str> = result
            .feature_contributions
            .iter()
            .map(|c| c.feature.as_str())
            .collect();
        let sex = names.iter().position(|n| *n == "Sex").expect("Sex ranked");
        let slope = names
            .iter()
            .position(|n| *n == "ST Slope")
            .expect("ST Slope ranked");
        assert!(sex < slope);
        assert_eq!(result.feature_contributions[slope].impact, Impact::Negative);
    }

    #[test]
    fn test_zero_terms_are_neutral() {
        let terms = feature_terms(&PatientRecord::default());
        let ecg = terms
            .iter()
            .find(|t| t.feature == "Resting ECG")
            .expect("ECG term");
        assert_eq!(ecg.to_contribution().impact, Impact::Neutral);
        assert_eq!(ecg.to_contribution().importance, 0.0);
    }

    #[test]
    fn test_displayed_values() {
        let terms = feature_terms(&everything_abnormal());
        let values: Vec<String> = terms.iter().map(|t| t.value.to_string()).collect();
        assert_eq!(
            values,
            vec![
                "70",
                "Male",
                "typical",
                "160 mmHg",
                "300 mg/dl",
                ">120 mg/dl",
                "lv hypertrophy",
                "100 bpm",
                "Present",
                "3",
                "downsloping",
                "3",
                "reversible defect",
            ]
        );
    }

    #[test]
    fn test_recommendations_truncate_in_rule_order() {
        let record = everything_abnormal();
        let result = score(&record);

        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.recommendations.len(), MAX_RECOMMENDATIONS);
        assert_eq!(
            &result.recommendations[3..],
            &[
                "Blood pressure management and monitoring required",
                "Lipid management therapy consideration",
                "Diabetes management and glucose control optimization",
            ]
        );
    }

    #[test]
    fn test_recommendation_rules_fire_independently() {
        let record = PatientRecord {
            exercise_angina: true,
            max_heart_rate: 100,
            ..low_risk_record()
        };

        let recs = recommend(&record, RiskLevel::Moderate, 0.5);
        assert_eq!(
            recs,
            vec![
                "Regular cardiology follow-up advised",
                "Lifestyle modifications and risk factor control",
                "Consider non-invasive cardiac imaging",
                "Exercise tolerance evaluation and cardiac rehabilitation",
                "Exercise capacity assessment and fitness improvement",
            ]
        );
    }

    #[test]
    fn test_recommendation_thresholds_are_strict() {
        let record = PatientRecord {
            resting_bp: 140,
            cholesterol: 240,
            age: 50,
            max_heart_rate: 136, // exactly 0.8 * 170
            ..Default::default()
        };
        assert_eq!(recommend(&record, RiskLevel::Low, 0.1).len(), 3);
    }

    #[test]
    fn test_probability_and_confidence_curves() {
        assert!((probability_from_score(0.0) - 0.5).abs() < EPS);
        assert!((confidence_for(0.5) - 0.70).abs() < EPS);
        assert!((confidence_for(1.0) - 0.95).abs() < EPS);
        assert!((confidence_for(0.0) - 0.95).abs() < EPS);
        assert_eq!(probability_from_score(1_000.0), 1.0);
        assert_eq!(probability_from_score(-1_000.0), 0.0);
    }

    #[test]
    fn test_out_of_range_input_is_scored() {
        let record = PatientRecord {
            age: -5,
            resting_bp: 0,
            cholesterol: -10,
            max_heart_rate: 0,
            major_vessels: 9,
            ..Default::default()
        };
        let result = score(&record);
        assert!((0.0..=1.0).contains(&result.probability));
        assert!((0.70..=0.95).contains(&result.confidence));
    }

    #[test]
    fn test_extreme_ages_do_not_overflow() {
        for age in [i32::MIN, i32::MIN + 1, i32::MAX] {
            let record = PatientRecord {
                age,
                ..Default::default()
            };
            let result = score(&record);
            assert!((0.0..=1.0).contains(&result.probability));
            assert!(result.recommendations.len() >= 3);
        }

        let negative_age = score(&PatientRecord {
            age: i32::MIN,
            ..Default::default()
        });
        // Expected max HR is huge, so a 150 bpm peak is below 80% of it.
        assert!(negative_age
            .recommendations
            .iter()
            .any(|r| r == "Exercise capacity assessment and fitness improvement"));
    }

    #[test]
    fn test_integer_inputs_serialize_as_integers() {
        let json = serde_json::to_value(score(&PatientRecord::default())).expect("Should serialize");
        let age = json["featureContributions"]
            .as_array()
            .expect("Array")
            .iter()
            .find(|c| c["feature"] == "Age")
            .expect("Age ranked");
        assert_eq!(age["value"], serde_json::json!(50));
        assert!(age["value"].is_i64());
    }

    #[test]
    fn test_score_is_deterministic() {
        let record = everything_abnormal();
        assert_eq!(score(&record), score(&record));
    }
}
