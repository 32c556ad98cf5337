use serde::{Deserialize, Serialize};

use crate::models::domain::MatchResult;

/// Output of a full matching pass, handed to the rendering collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<MatchResult>,
    #[serde(rename = "totalScanned")]
    pub total_scanned: usize,
}

/// Aggregate counts for an admin dashboard
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(rename = "totalScholarships")]
    pub total_scholarships: usize,
    #[serde(rename = "activeScholarships")]
    pub active_scholarships: usize,
    #[serde(rename = "totalApplications")]
    pub total_applications: usize,
    #[serde(rename = "pendingApplications")]
    pub pending_applications: usize,
    #[serde(rename = "approvedApplications")]
    pub approved_applications: usize,
    #[serde(rename = "rejectedApplications")]
    pub rejected_applications: usize,
}
