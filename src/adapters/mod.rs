//! Adapters layer: Concrete implementations of ports.
//!
//! - `heuristic`: the weighted clinical score used by every front end

pub mod heuristic;

pub use heuristic::HeuristicModel;
