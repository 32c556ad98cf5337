// Core algorithm exports
pub mod explain;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use explain::generate_explanation;
pub use filters::{rank_results, saved_results};
pub use matcher::Matcher;
pub use scoring::{calculate_match, ScoringConfig};
