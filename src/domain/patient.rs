//! Patient record types for heart disease risk assessment.
//!
//! Based on the thirteen clinical variables of the classic Cleveland heart
//! disease dataset.

use serde::{Deserialize, Serialize};

/// Biological sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[serde(alias = "M")]
    Male,
    #[serde(alias = "F")]
    Female,
}

impl Sex {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Type of chest pain reported by the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChestPainType {
    /// Typical angina
    Typical,
    /// Atypical angina
    Atypical,
    /// Non-anginal pain
    NonAnginal,
    /// No chest pain
    Asymptomatic,
}

impl ChestPainType {
    pub const ALL: [Self; 4] = [
        Self::Typical,
        Self::Atypical,
        Self::NonAnginal,
        Self::Asymptomatic,
    ];

    /// Lower-case name with hyphens replaced by spaces.
    #[must_use]
    pub fn display_value(self) -> &'static str {
        match self {
            Self::Typical => "typical",
            Self::Atypical => "atypical",
            Self::NonAnginal => "non anginal",
            Self::Asymptomatic => "asymptomatic",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Typical => "Typical Angina",
            Self::Atypical => "Atypical Angina",
            Self::NonAnginal => "Non-Anginal Pain",
            Self::Asymptomatic => "Asymptomatic",
        }
    }
}

/// Resting electrocardiogram result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestingEcg {
    Normal,
    #[serde(alias = "st-t-wave")]
    StTWaveAbnormality,
    LvHypertrophy,
}

impl RestingEcg {
    pub const ALL: [Self; 3] = [Self::Normal, Self::StTWaveAbnormality, Self::LvHypertrophy];

    #[must_use]
    pub fn display_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::StTWaveAbnormality => "st t wave abnormality",
            Self::LvHypertrophy => "lv hypertrophy",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::StTWaveAbnormality => "ST-T Wave Abnormality",
            Self::LvHypertrophy => "LV Hypertrophy",
        }
    }
}

/// Slope of the peak exercise ST segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StSlope {
    Upsloping,
    Flat,
    Downsloping,
}

impl StSlope {
    pub const ALL: [Self; 3] = [Self::Upsloping, Self::Flat, Self::Downsloping];

    #[must_use]
    pub fn display_value(self) -> &'static str {
        match self {
            Self::Upsloping => "upsloping",
            Self::Flat => "flat",
            Self::Downsloping => "downsloping",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upsloping => "Upsloping",
            Self::Flat => "Flat",
            Self::Downsloping => "Downsloping",
        }
    }
}

/// Thalassemia status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Thalassemia {
    Normal,
    FixedDefect,
    ReversibleDefect,
}

impl Thalassemia {
    pub const ALL: [Self; 3] = [Self::Normal, Self::FixedDefect, Self::ReversibleDefect];

    #[must_use]
    pub fn display_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::FixedDefect => "fixed defect",
            Self::ReversibleDefect => "reversible defect",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::FixedDefect => "Fixed Defect",
            Self::ReversibleDefect => "Reversible Defect",
        }
    }
}

/// Clinical variables collected for one assessment.
///
/// Integer fields are signed so that out-of-range input (for example a
/// negative age) can still be represented and scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Age in years (1-120)
    pub age: i32,

    pub sex: Sex,

    pub chest_pain_type: ChestPainType,

    /// Resting blood pressure in mmHg (80-200)
    #[serde(rename = "restingBP")]
    pub resting_bp: i32,

    /// Serum cholesterol in mg/dl (100-600)
    pub cholesterol: i32,

    /// Fasting blood sugar above 120 mg/dl
    pub fasting_blood_sugar_high: bool,

    #[serde(rename = "restingECG")]
    pub resting_ecg: RestingEcg,

    /// Maximum heart rate achieved in bpm (60-220)
    pub max_heart_rate: i32,

    /// Exercise-induced angina
    pub exercise_angina: bool,

    /// ST depression induced by exercise relative to rest (0.0-6.0)
    pub st_depression: f64,

    pub st_slope: StSlope,

    /// Major vessels colored by fluoroscopy (0-3)
    pub major_vessels: i32,

    pub thalassemia: Thalassemia,
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            age: 50,
            sex: Sex::Male,
            chest_pain_type: ChestPainType::Typical,
            resting_bp: 120,
            cholesterol: 200,
            fasting_blood_sugar_high: false,
            resting_ecg: RestingEcg::Normal,
            max_heart_rate: 150,
            exercise_angina: false,
            st_depression: 0.0,
            st_slope: StSlope::Upsloping,
            major_vessels: 0,
            thalassemia: Thalassemia::Normal,
        }
    }
}

impl PatientRecord {
    /// Age-predicted maximum heart rate (220 - age).
    ///
    /// Computed in floating point so any representable age is accepted.
    #[must_use]
    pub fn expected_max_heart_rate(&self) -> f64 {
        220.0 - f64::from(self.age)
    }

    /// Validate that all numeric fields are within their documented ranges.
    ///
    /// Scoring does not require this; it is offered to callers that want to
    /// reject implausible input before scoring.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        check_range(&mut errors, "Age", self.age, 1, 120);
        check_range(&mut errors, "Resting BP", self.resting_bp, 80, 200);
        check_range(&mut errors, "Cholesterol", self.cholesterol, 100, 600);
        check_range(&mut errors, "Max heart rate", self.max_heart_rate, 60, 220);
        check_range(&mut errors, "Major vessels", self.major_vessels, 0, 3);

        if !self.st_depression.is_finite() || !(0.0..=6.0).contains(&self.st_depression) {
            errors.push(format!(
                "ST depression {} out of range [0, 6]",
                self.st_depression
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_range(errors: &mut Vec<String>, label: &str, value: i32, min: i32, max: i32) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{label} {value} out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_valid() {
        assert!(PatientRecord::default().validate().is_ok());
    }

    #[test]
    fn test_validation_collects_every_error() {
        let record = PatientRecord {
            age: 0,
            resting_bp: 250,
            st_depression: f64::NAN,
            ..Default::default()
        };

        let errors = record.validate().expect_err("Should reject");
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("Age 0"));
    }

    #[test]
    fn test_expected_max_heart_rate() {
        let record = PatientRecord {
            age: 60,
            ..Default::default()
        };
        assert_eq!(record.expected_max_heart_rate(), 160.0);

        let extreme = PatientRecord {
            age: i32::MIN,
            ..Default::default()
        };
        assert_eq!(extreme.expected_max_heart_rate(), 220.0 + 2_147_483_648.0);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(PatientRecord::default()).expect("Should serialize");
        assert_eq!(json["restingBP"], 120);
        assert_eq!(json["restingECG"], "normal");
        assert_eq!(json["chestPainType"], "typical");
        assert_eq!(json["fastingBloodSugarHigh"], false);
    }

    #[test]
    fn test_json_accepts_short_spellings() {
        let json = r#"{
            "age": 61, "sex": "F", "chestPainType": "non-anginal",
            "restingBP": 130, "cholesterol": 250, "fastingBloodSugarHigh": true,
            "restingECG": "st-t-wave", "maxHeartRate": 120, "exerciseAngina": true,
            "stDepression": 1.4, "stSlope": "flat", "majorVessels": 2,
            "thalassemia": "reversible-defect"
        }"#;

        let record: PatientRecord = serde_json::from_str(json).expect("Should parse");
        assert_eq!(record.sex, Sex::Female);
        assert_eq!(record.chest_pain_type, ChestPainType::NonAnginal);
        assert_eq!(record.resting_ecg, RestingEcg::StTWaveAbnormality);
        assert_eq!(record.thalassemia, Thalassemia::ReversibleDefect);
    }
}
