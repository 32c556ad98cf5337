use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Education levels recognized by the catalog.
///
/// HighSchool, UG, PG and PhD form an ordered ladder used for partial
/// education credit; Diploma sits outside the ladder and only matches
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    Diploma,
    UG,
    PG,
    PhD,
}

impl EducationLevel {
    /// Position on the ordered ladder, or None for levels outside it.
    pub fn ladder_rank(&self) -> Option<u8> {
        match self {
            EducationLevel::HighSchool => Some(0),
            EducationLevel::UG => Some(1),
            EducationLevel::PG => Some(2),
            EducationLevel::PhD => Some(3),
            EducationLevel::Diploma => None,
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::UG => "UG",
            EducationLevel::PG => "PG",
            EducationLevel::PhD => "PhD",
        };
        f.write_str(label)
    }
}

impl FromStr for EducationLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "High School" | "HighSchool" => Ok(EducationLevel::HighSchool),
            "Diploma" => Ok(EducationLevel::Diploma),
            "UG" => Ok(EducationLevel::UG),
            "PG" => Ok(EducationLevel::PG),
            "PhD" => Ok(EducationLevel::PhD),
            _ => Err(()),
        }
    }
}

/// Normalized student input, constructed fresh from form data on every search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(rename = "educationLevel")]
    pub education_level: EducationLevel,
    pub marks: u32,
    pub category: String,
    pub income: u64,
    pub region: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Listing lifecycle for admin-created records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Closed,
}

impl Default for ListingStatus {
    fn default() -> Self {
        ListingStatus::Active
    }
}

/// A scholarship definition, immutable during a scoring pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarshipRecord {
    pub id: u32,
    pub name: String,
    pub degree: EducationLevel,
    #[serde(rename = "minMarks")]
    pub min_marks: u32,
    #[serde(rename = "incomeLimit")]
    pub income_limit: u64,
    pub category: Vec<String>,
    pub region: String,
    pub amount: u64,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub fields: Vec<String>,
    pub description: String,
    pub provider: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub renewable: bool,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(rename = "ownerId", default)]
    pub owner_id: Option<u32>,
}

impl ScholarshipRecord {
    /// Whether the category set admits any student category
    pub fn open_to_all_categories(&self) -> bool {
        self.category.iter().any(|c| c == "All")
    }

    /// Whether the region is a nationwide wildcard
    pub fn nationwide(&self) -> bool {
        self.region == "India" || self.region == "All India"
    }
}

/// The five scoring dimensions, in fixed breakdown order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Factor {
    Education,
    Marks,
    Income,
    Category,
    Region,
}

impl Factor {
    pub const ORDER: [Factor; 5] = [
        Factor::Education,
        Factor::Marks,
        Factor::Income,
        Factor::Category,
        Factor::Region,
    ];
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Factor::Education => "Education Level",
            Factor::Marks => "Academic Marks",
            Factor::Income => "Income",
            Factor::Category => "Category",
            Factor::Region => "Region",
        };
        f.write_str(label)
    }
}

/// One entry of a match breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: Factor,
    pub points: u32,
    pub matched: bool,
}

/// Scored scholarship produced by the matching engine, never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub scholarship: ScholarshipRecord,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
    pub explanation: String,
    pub breakdown: Vec<FactorScore>,
}

/// Per-factor point budgets.
///
/// Two named profiles exist: `standard` is canonical, `relaxed` preserves
/// the deprecated alternative weighting for callers that still need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub education: u32,
    pub marks: u32,
    pub income: u32,
    pub category: u32,
    pub region: u32,
}

impl ScoringWeights {
    pub fn standard() -> Self {
        Self {
            education: 20,
            marks: 30,
            income: 30,
            category: 15,
            region: 5,
        }
    }

    pub fn relaxed() -> Self {
        Self {
            education: 25,
            marks: 30,
            income: 25,
            category: 15,
            region: 5,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// A pair of student categories granted partial credit when a scholarship
/// names one and the student holds the other. Applied symmetrically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAffinity {
    pub first: String,
    pub second: String,
    pub points: u32,
}

/// Sort order for ranked results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Match,
    Amount,
    Deadline,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Match
    }
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "match" => Ok(SortKey::Match),
            "amount" => Ok(SortKey::Amount),
            "deadline" => Ok(SortKey::Deadline),
            _ => Err(()),
        }
    }
}

/// Filter criteria applied by the ranking pass
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(rename = "minMatch", default)]
    pub min_match: u32,
    #[serde(rename = "sortBy", default)]
    pub sort_by: SortKey,
}

/// Request-scoped search state: the active filters plus the student's saved
/// scholarship ids. Passed explicitly into the ranking pass instead of
/// living in a module-level singleton.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSession {
    pub filters: SearchFilters,
    pub saved: BTreeSet<u32>,
}

impl SearchSession {
    pub fn new(filters: SearchFilters) -> Self {
        Self {
            filters,
            saved: BTreeSet::new(),
        }
    }

    /// Toggle a scholarship in the saved set. Returns true if it is now saved.
    pub fn toggle_saved(&mut self, scholarship_id: u32) -> bool {
        if !self.saved.insert(scholarship_id) {
            self.saved.remove(&scholarship_id);
            return false;
        }
        true
    }

    pub fn is_saved(&self, scholarship_id: u32) -> bool {
        self.saved.contains(&scholarship_id)
    }
}
