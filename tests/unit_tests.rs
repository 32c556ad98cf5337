// Unit tests for ScholarMatch

use scholarmatch::core::{
    explain::generate_explanation,
    filters::rank_results,
    scoring::{calculate_match, score_education, score_income, score_marks, ScoringConfig},
};
use scholarmatch::models::{
    EducationLevel, Factor, ProfileForm, ScholarshipRecord, ScoringWeights, SearchFilters, SortKey,
    StudentProfile,
};
use scholarmatch::services::catalog;
use chrono::NaiveDate;

fn profile(level: EducationLevel, marks: u32, category: &str, income: u64, region: &str) -> StudentProfile {
    StudentProfile {
        education_level: level,
        marks,
        category: category.to_string(),
        income,
        region: region.to_string(),
        interests: vec![],
    }
}

fn scholarship(
    id: u32,
    degree: EducationLevel,
    min_marks: u32,
    income_limit: u64,
    category: &[&str],
    region: &str,
) -> ScholarshipRecord {
    ScholarshipRecord {
        id,
        name: format!("Scholarship {}", id),
        degree,
        min_marks,
        income_limit,
        category: category.iter().map(|c| c.to_string()).collect(),
        region: region.to_string(),
        amount: 50_000,
        deadline: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        fields: vec![],
        description: String::new(),
        provider: "Provider".to_string(),
        website: None,
        renewable: false,
        documents: vec![],
        status: Default::default(),
        owner_id: None,
    }
}

#[test]
fn test_score_bounded_for_every_catalog_record() {
    let config = ScoringConfig::default();
    let student = profile(EducationLevel::UG, 85, "General", 250_000, "Delhi");

    for record in catalog::seed() {
        let result = calculate_match(&student, &record, &config);
        assert!(result.match_score <= 100);
        assert_eq!(result.breakdown.len(), 5);
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let config = ScoringConfig::default();
    let student = profile(EducationLevel::PG, 72, "OBC", 400_000, "Maharashtra");
    let record = scholarship(1, EducationLevel::PG, 70, 500_000, &["OBC"], "Maharashtra");

    let first = calculate_match(&student, &record, &config);
    for _ in 0..10 {
        let again = calculate_match(&student, &record, &config);
        assert_eq!(again.match_score, first.match_score);
        assert_eq!(again.explanation, first.explanation);
    }
}

#[test]
fn test_breakdown_order_and_sum() {
    let config = ScoringConfig::default();
    let student = profile(EducationLevel::UG, 70, "SC", 200_000, "Delhi");
    let record = scholarship(1, EducationLevel::UG, 60, 250_000, &["SC"], "Delhi");

    let result = calculate_match(&student, &record, &config);
    let order: Vec<Factor> = result.breakdown.iter().map(|f| f.factor).collect();
    assert_eq!(order, Factor::ORDER.to_vec());

    let sum: u32 = result.breakdown.iter().map(|f| f.points).sum();
    assert!(result.match_score <= sum);
}

#[test]
fn test_marks_score_never_decreases_as_marks_rise() {
    let mut previous = 0;
    for marks in 0..=100 {
        let (points, _) = score_marks(marks, 60, 30);
        assert!(points >= previous, "marks {} regressed", marks);
        previous = points;
    }
}

#[test]
fn test_income_score_never_increases_as_income_rises() {
    let mut previous = u32::MAX;
    for step in 0..200 {
        let income = step * 5_000;
        let (points, _) = score_income(income, 300_000, 30);
        assert!(points <= previous, "income {} regressed", income);
        previous = points;
    }
}

#[test]
fn test_education_ladder_partial_credit() {
    let record = scholarship(1, EducationLevel::UG, 60, 300_000, &["All"], "India");

    let exact = score_education(&profile(EducationLevel::UG, 80, "General", 0, "Delhi"), &record, 20);
    let above = score_education(&profile(EducationLevel::PhD, 80, "General", 0, "Delhi"), &record, 20);
    let below = score_education(&profile(EducationLevel::HighSchool, 80, "General", 0, "Delhi"), &record, 20);

    assert_eq!(exact.0, 20);
    assert_eq!(above.0, 12);
    assert_eq!(below.0, 4);
    assert!(exact.0 > above.0 && above.0 > below.0);
}

#[test]
fn test_diploma_earns_only_exact_credit() {
    let for_diploma = scholarship(1, EducationLevel::Diploma, 60, 300_000, &["All"], "India");
    let for_ug = scholarship(2, EducationLevel::UG, 60, 300_000, &["All"], "India");
    let student = profile(EducationLevel::Diploma, 80, "General", 0, "Delhi");

    assert_eq!(score_education(&student, &for_diploma, 20).0, 20);
    assert_eq!(score_education(&student, &for_ug, 20).0, 0);
}

#[test]
fn test_zero_income_limit_scores_zero() {
    let (points, _) = score_income(100_000, 0, 30);
    assert_eq!(points, 0);
}

#[test]
fn test_wildcards_grant_full_credit() {
    let config = ScoringConfig::default();
    let student = profile(EducationLevel::UG, 90, "ST", 100_000, "Manipur");
    let record = scholarship(1, EducationLevel::UG, 60, 300_000, &["All"], "All India");

    let result = calculate_match(&student, &record, &config);
    assert!(result.breakdown.iter().all(|f| f.matched));
}

#[test]
fn test_reference_scenario_is_strong_match() {
    // UG student, 85% marks, income 250k against a UG/60%/300k/All/India record
    let config = ScoringConfig::default();
    let student = profile(EducationLevel::UG, 85, "General", 250_000, "Delhi");
    let record = scholarship(1, EducationLevel::UG, 60, 300_000, &["All"], "India");

    let result = calculate_match(&student, &record, &config);
    assert!(result.match_score >= 70);
}

#[test]
fn test_explanation_tiers() {
    assert!(generate_explanation(85, Some("everything lines up"), None).starts_with("Excellent match!"));
    assert!(generate_explanation(70, Some("marks exceed"), Some("income is high")).starts_with("Strong match."));
    assert!(generate_explanation(55, Some("marks exceed"), Some("income is high")).starts_with("Good match."));
    assert!(generate_explanation(40, Some("marks exceed"), Some("income is high")).starts_with("Moderate match."));
    assert!(generate_explanation(39, None, Some("education doesn't match")).ends_with("Not recommended to apply."));
}

#[test]
fn test_ranking_filters_and_stable_order() {
    let config = ScoringConfig::default();
    let student = profile(EducationLevel::UG, 85, "General", 250_000, "Delhi");

    // Two records engineered to identical scores keep insertion order
    let twin_a = scholarship(1, EducationLevel::UG, 60, 300_000, &["All"], "India");
    let twin_b = scholarship(2, EducationLevel::UG, 60, 300_000, &["All"], "India");
    let weak = scholarship(3, EducationLevel::PhD, 95, 50_000, &["SC"], "Kerala");

    let results = vec![
        calculate_match(&student, &weak, &config),
        calculate_match(&student, &twin_a, &config),
        calculate_match(&student, &twin_b, &config),
    ];

    let filters = SearchFilters {
        min_match: 50,
        sort_by: SortKey::Match,
    };
    let ranked = rank_results(results, &filters);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].scholarship.id, 1);
    assert_eq!(ranked[1].scholarship.id, 2);
}

#[test]
fn test_relaxed_profile_stays_bounded() {
    let config = ScoringConfig::with_weights(ScoringWeights::relaxed());
    let student = profile(EducationLevel::PhD, 100, "General", 0, "Delhi");

    for record in catalog::seed() {
        let result = calculate_match(&student, &record, &config);
        assert!(result.match_score <= 100);
    }
}

#[test]
fn test_form_validation_boundaries() {
    let mut form = ProfileForm {
        education_level: "UG".to_string(),
        marks: "100".to_string(),
        category: "General".to_string(),
        income: "0".to_string(),
        region: "Delhi".to_string(),
        interests: String::new(),
    };
    assert!(form.parse().is_ok());

    form.marks = "101".to_string();
    assert!(form.parse().is_err());
}
