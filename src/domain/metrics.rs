//! Published model evaluation figures and the feature-importance catalogue.
//!
//! These are fixed reference values shown next to every prediction; they are
//! not recomputed from the heuristic scorer.

/// A headline evaluation metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub name: &'static str,
    pub value: f64,
    pub description: &'static str,
}

pub const HEADLINE_METRICS: [Metric; 6] = [
    Metric {
        name: "Accuracy",
        value: 0.87,
        description: "Overall prediction correctness",
    },
    Metric {
        name: "Precision",
        value: 0.84,
        description: "True positive rate",
    },
    Metric {
        name: "Recall",
        value: 0.89,
        description: "Sensitivity to positive cases",
    },
    Metric {
        name: "F1-Score",
        value: 0.86,
        description: "Harmonic mean of precision & recall",
    },
    Metric {
        name: "ROC-AUC",
        value: 0.92,
        description: "Area under ROC curve",
    },
    Metric {
        name: "Specificity",
        value: 0.85,
        description: "True negative rate",
    },
];

/// One row of the algorithm comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelScore {
    pub name: &'static str,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Ordered best first.
pub const MODEL_COMPARISON: [ModelScore; 4] = [
    ModelScore {
        name: "Random Forest",
        accuracy: 0.87,
        precision: 0.84,
        recall: 0.89,
        f1: 0.86,
    },
    ModelScore {
        name: "XGBoost",
        accuracy: 0.85,
        precision: 0.82,
        recall: 0.87,
        f1: 0.84,
    },
    ModelScore {
        name: "Logistic Regression",
        accuracy: 0.81,
        precision: 0.78,
        recall: 0.84,
        f1: 0.81,
    },
    ModelScore {
        name: "SVM",
        accuracy: 0.83,
        precision: 0.80,
        recall: 0.86,
        f1: 0.83,
    },
];

/// 10-fold cross-validation accuracy per fold.
pub const CROSS_VALIDATION_SCORES: [f64; 10] =
    [0.85, 0.87, 0.86, 0.88, 0.84, 0.89, 0.87, 0.85, 0.88, 0.86];

/// Summary statistics over a set of fold scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossValidationSummary {
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub best: f64,
    pub worst: f64,
}

impl CrossValidationSummary {
    /// Summarize fold scores. Returns `None` for an empty slice.
    #[must_use]
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            mean,
            std_dev: variance.sqrt(),
            best: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            worst: scores.iter().copied().fold(f64::INFINITY, f64::min),
        })
    }
}

/// Training run facts shown on the metrics tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingInfo {
    pub samples: u32,
    pub features: u32,
    pub training_time: &'static str,
    pub model_version: &'static str,
}

pub const TRAINING_INFO: TrainingInfo = TrainingInfo {
    samples: 918,
    features: 13,
    training_time: "2.3s",
    model_version: "v2.1",
};

/// Clinical grouping of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureCategory {
    Ecg,
    Symptoms,
    Imaging,
    BloodTest,
    Exercise,
    Demographics,
    Vitals,
}

impl FeatureCategory {
    pub const ALL: [Self; 7] = [
        Self::Ecg,
        Self::Symptoms,
        Self::Imaging,
        Self::BloodTest,
        Self::Exercise,
        Self::Demographics,
        Self::Vitals,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ecg => "ECG",
            Self::Symptoms => "Symptoms",
            Self::Imaging => "Imaging",
            Self::BloodTest => "Blood Test",
            Self::Exercise => "Exercise",
            Self::Demographics => "Demographics",
            Self::Vitals => "Vitals",
        }
    }
}

impl std::fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Global importance of one input feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureImportance {
    pub feature: &'static str,
    pub importance: f64,
    pub description: &'static str,
    pub category: FeatureCategory,
}

const fn entry(
    feature: &'static str,
    importance: f64,
    description: &'static str,
    category: FeatureCategory,
) -> FeatureImportance {
    FeatureImportance {
        feature,
        importance,
        description,
        category,
    }
}

/// Ordered by descending importance.
pub const FEATURE_IMPORTANCE: [FeatureImportance; 13] = [
    entry("ST Depression", 0.18, "Exercise-induced ST depression relative to rest", FeatureCategory::Ecg),
    entry("Chest Pain Type", 0.16, "Type of chest pain experienced by patient", FeatureCategory::Symptoms),
    entry("Major Vessels", 0.14, "Number of major vessels colored by fluoroscopy", FeatureCategory::Imaging),
    entry("Thalassemia", 0.12, "Blood disorder affecting hemoglobin", FeatureCategory::BloodTest),
    entry("Max Heart Rate", 0.11, "Maximum heart rate achieved during exercise", FeatureCategory::Exercise),
    entry("Exercise Angina", 0.10, "Exercise-induced angina presence", FeatureCategory::Exercise),
    entry("Age", 0.08, "Patient age in years", FeatureCategory::Demographics),
    entry("ST Slope", 0.06, "Slope of peak exercise ST segment", FeatureCategory::Ecg),
    entry("Sex", 0.05, "Patient biological sex", FeatureCategory::Demographics),
    entry("Resting BP", 0.04, "Resting blood pressure in mmHg", FeatureCategory::Vitals),
    entry("Cholesterol", 0.03, "Serum cholesterol level in mg/dl", FeatureCategory::BloodTest),
    entry("Fasting Blood Sugar", 0.02, "Fasting blood sugar > 120 mg/dl", FeatureCategory::BloodTest),
    entry("Resting ECG", 0.01, "Resting electrocardiographic results", FeatureCategory::Ecg),
];

/// The `n` most important features (all of them if `n` exceeds the catalogue).
#[must_use]
pub fn top_features(n: usize) -> &'static [FeatureImportance] {
    &FEATURE_IMPORTANCE[..n.min(FEATURE_IMPORTANCE.len())]
}

/// Total importance per category, largest first.
///
/// Categories with equal totals keep their declaration order.
#[must_use]
pub fn category_importance() -> Vec<(FeatureCategory, f64)> {
    let mut totals: Vec<(FeatureCategory, f64)> = FeatureCategory::ALL
        .iter()
        .map(|&category| {
            let total = FEATURE_IMPORTANCE
                .iter()
                .filter(|f| f.category == category)
                .map(|f| f.importance)
                .sum();
            (category, total)
        })
        .collect();

    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals
}
