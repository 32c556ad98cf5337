//! ScholarMatch - Scholarship discovery and matching engine
//!
//! This library scores a student profile against a scholarship catalog across
//! five weighted factors and produces ranked matches with per-factor
//! breakdowns and plain-language explanations.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use core::{calculate_match, generate_explanation, rank_results, Matcher, ScoringConfig};
pub use models::{
    MatchResult, ProfileForm, ScholarshipRecord, ScoringWeights, SearchFilters, SearchOutcome,
    StudentProfile,
};
