//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the core use case of the application: assessing a patient.

mod assessment;

pub use assessment::{Assessment, AssessmentService};
