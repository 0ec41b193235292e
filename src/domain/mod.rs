//! Domain layer: Core clinical types and the risk scoring logic.
//!
//! This module contains pure Rust types with no I/O. Scoring is a total,
//! deterministic function of a [`PatientRecord`].

pub mod metrics;
mod patient;
mod prediction;
pub mod scoring;

pub use patient::{ChestPainType, PatientRecord, RestingEcg, Sex, StSlope, Thalassemia};
pub use prediction::{FeatureContribution, FeatureValue, Impact, PredictionResult, RiskLevel};
pub use scoring::{recommend, score};
