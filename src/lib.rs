//! # CardioPredict
//!
//! Heart disease risk assessment from thirteen clinical variables.
//!
//! This crate provides:
//! - A deterministic heuristic risk scorer with ranked feature contributions
//! - Rule-based clinical recommendations
//! - Terminal UI for entering patients and reviewing results
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core clinical types, the scorer and reference tables
//! - `ports`: Trait definitions for risk models
//! - `adapters`: Concrete implementations (heuristic scorer)
//! - `application`: Use cases orchestrating domain and ports
//! - `config`: Environment-driven runtime settings
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{PatientRecord, PredictionResult, RiskLevel};

/// Result type for CardioPredict operations
pub type Result<T> = std::result::Result<T, CardioError>;

/// Main error type for CardioPredict
#[derive(Debug, thiserror::Error)]
pub enum CardioError {
    #[error("Invalid patient data: {0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
