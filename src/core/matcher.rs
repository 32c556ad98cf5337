use tracing::debug;

use crate::core::scoring::{calculate_match, ScoringConfig};
use crate::models::{MatchResult, ScholarshipRecord, ScoringWeights, SearchOutcome, StudentProfile};

/// Matching orchestrator: scores a profile against the full catalog and
/// ranks the survivors.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: ScoringConfig,
}

impl Matcher {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            config: ScoringConfig::with_weights(weights),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score every catalog record against the profile.
    ///
    /// Zero-score records are dropped; the rest come back sorted by match
    /// score descending, ties in catalog insertion order. The whole catalog
    /// is scanned on every call — there is no pagination and no cached
    /// state between passes.
    pub fn find_matches(
        &self,
        profile: &StudentProfile,
        catalog: &[ScholarshipRecord],
    ) -> SearchOutcome {
        let total_scanned = catalog.len();

        let mut results: Vec<MatchResult> = catalog
            .iter()
            .map(|scholarship| calculate_match(profile, scholarship, &self.config))
            .filter(|result| result.match_score > 0)
            .collect();

        // Stable, so equal scores keep catalog order
        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        debug!(
            scanned = total_scanned,
            matched = results.len(),
            "completed matching pass"
        );

        SearchOutcome {
            results,
            total_scanned,
        }
    }

    /// Boost results whose subject fields overlap the student's interests.
    ///
    /// Each interest that overlaps a scholarship field (case-insensitive
    /// substring in either direction) adds the configured bonus, capped at
    /// 100, and the explanation gains a closing sentence. Re-sorts
    /// afterwards.
    pub fn personalize(
        &self,
        profile: &StudentProfile,
        mut results: Vec<MatchResult>,
    ) -> Vec<MatchResult> {
        if profile.interests.is_empty() {
            return results;
        }

        for result in results.iter_mut() {
            let overlaps = profile
                .interests
                .iter()
                .filter(|interest| {
                    result
                        .scholarship
                        .fields
                        .iter()
                        .any(|field| fields_overlap(interest, field))
                })
                .count() as u32;

            if overlaps > 0 {
                result.match_score =
                    (result.match_score + overlaps * self.config.interest_bonus).min(100);
                result
                    .explanation
                    .push_str(" Plus, this aligns with your interests!");
            }
        }

        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        results
    }
}

fn fields_overlap(interest: &str, field: &str) -> bool {
    let interest = interest.to_lowercase();
    let field = field.to_lowercase();
    field.contains(&interest) || interest.contains(&field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EducationLevel;
    use chrono::NaiveDate;

    fn profile() -> StudentProfile {
        StudentProfile {
            education_level: EducationLevel::UG,
            marks: 85,
            category: "General".to_string(),
            income: 250_000,
            region: "India".to_string(),
            interests: vec![],
        }
    }

    fn scholarship(id: u32, degree: EducationLevel, fields: &[&str]) -> ScholarshipRecord {
        ScholarshipRecord {
            id,
            name: format!("Scholarship {}", id),
            degree,
            min_marks: 70,
            income_limit: 300_000,
            category: vec!["All".to_string()],
            region: "India".to_string(),
            amount: 50_000,
            deadline: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            description: String::new(),
            provider: String::new(),
            website: None,
            renewable: false,
            documents: vec![],
            status: Default::default(),
            owner_id: None,
        }
    }

    #[test]
    fn test_find_matches_sorted_descending() {
        let matcher = Matcher::default();
        let catalog = vec![
            scholarship(1, EducationLevel::PhD, &[]),
            scholarship(2, EducationLevel::UG, &[]),
        ];

        let outcome = matcher.find_matches(&profile(), &catalog);
        assert_eq!(outcome.total_scanned, 2);
        assert_eq!(outcome.results[0].scholarship.id, 2);
        for pair in outcome.results.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_zero_score_records_dropped() {
        let matcher = Matcher::default();
        let mut impossible = scholarship(1, EducationLevel::Diploma, &[]);
        impossible.min_marks = 100;
        impossible.income_limit = 1;
        impossible.category = vec!["ST".to_string()];
        impossible.region = "West India".to_string();

        let mut student = profile();
        student.marks = 0;

        let outcome = matcher.find_matches(&student, &[impossible]);
        assert_eq!(outcome.total_scanned, 1);
        assert!(outcome.results.is_empty());
    }

    #[test]
    fn test_personalize_boosts_overlapping_interests() {
        let matcher = Matcher::default();
        let catalog = vec![
            scholarship(1, EducationLevel::UG, &["Engineering"]),
            scholarship(2, EducationLevel::UG, &["Arts"]),
        ];

        let mut student = profile();
        student.marks = 62; // deficit keeps raw scores off the clamp
        student.interests = vec!["engineering".to_string()];

        let outcome = matcher.find_matches(&student, &catalog);
        let before: Vec<u32> = outcome.results.iter().map(|r| r.match_score).collect();

        let personalized = matcher.personalize(&student, outcome.results);
        assert_eq!(personalized[0].scholarship.id, 1);
        assert!(personalized[0].match_score > before[0].min(before[1]));
        assert!(personalized[0]
            .explanation
            .ends_with("Plus, this aligns with your interests!"));
        assert!(!personalized[1].explanation.contains("interests"));
    }

    #[test]
    fn test_personalize_uses_configured_bonus() {
        let mut config = ScoringConfig::default();
        config.interest_bonus = 20;
        let matcher = Matcher::new(config);

        let catalog = vec![scholarship(1, EducationLevel::UG, &["Engineering"])];
        let mut student = profile();
        student.marks = 62; // deficit keeps the raw score off the clamp
        student.interests = vec!["engineering".to_string()];

        let outcome = matcher.find_matches(&student, &catalog);
        let before = outcome.results[0].match_score;
        let personalized = matcher.personalize(&student, outcome.results);
        assert_eq!(personalized[0].match_score, before + 20);
    }

    #[test]
    fn test_personalize_caps_at_100() {
        let matcher = Matcher::default();
        let catalog = vec![scholarship(1, EducationLevel::UG, &["Engineering", "Science"])];

        let mut student = profile();
        student.marks = 100;
        student.income = 10_000;
        student.interests = vec!["Engineering".to_string(), "Science".to_string()];

        let outcome = matcher.find_matches(&student, &catalog);
        let personalized = matcher.personalize(&student, outcome.results);
        assert_eq!(personalized[0].match_score, 100);
    }
}
