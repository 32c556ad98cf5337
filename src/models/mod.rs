// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CategoryAffinity, EducationLevel, Factor, FactorScore, ListingStatus, MatchResult,
    ScholarshipRecord, ScoringWeights, SearchFilters, SearchSession, SortKey, StudentProfile,
};
pub use requests::ProfileForm;
pub use responses::{SearchOutcome, Statistics};
