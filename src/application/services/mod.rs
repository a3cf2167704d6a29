mod analysis_service;
mod heuristic_scorer;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use heuristic_scorer::HeuristicScorer;
