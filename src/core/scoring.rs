use crate::core::explain::generate_explanation;
use crate::models::{
    CategoryAffinity, Factor, FactorScore, MatchResult, ScholarshipRecord, ScoringWeights,
    StudentProfile,
};

/// Points added per overlapping interest unless configured otherwise
pub const DEFAULT_INTEREST_BONUS: u32 = 10;

/// Scoring configuration: a weight profile, the category affinity table and
/// the per-interest personalization bonus.
///
/// The affinity table is empty by default; related-category partial credit
/// is an explicit configuration choice, not baked-in business logic.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub category_affinity: Vec<CategoryAffinity>,
    pub interest_bonus: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            category_affinity: Vec::new(),
            interest_bonus: DEFAULT_INTEREST_BONUS,
        }
    }
}

impl ScoringConfig {
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }
}

/// Score one profile against one scholarship.
///
/// Pure function: the same inputs always yield the same score, breakdown and
/// explanation. There are no error conditions; every input combination
/// produces a valid clamped score. The breakdown always holds exactly five
/// entries in the order Education, Marks, Income, Category, Region, and sums
/// to the pre-clamp total.
pub fn calculate_match(
    profile: &StudentProfile,
    scholarship: &ScholarshipRecord,
    config: &ScoringConfig,
) -> MatchResult {
    let weights = &config.weights;

    let factor_outcomes = [
        (
            Factor::Education,
            weights.education,
            score_education(profile, scholarship, weights.education),
        ),
        (
            Factor::Marks,
            weights.marks,
            score_marks(profile.marks, scholarship.min_marks, weights.marks),
        ),
        (
            Factor::Income,
            weights.income,
            score_income(profile.income, scholarship.income_limit, weights.income),
        ),
        (
            Factor::Category,
            weights.category,
            score_category(profile, scholarship, weights.category, &config.category_affinity),
        ),
        (
            Factor::Region,
            weights.region,
            score_region(profile, scholarship, weights.region),
        ),
    ];

    let mut breakdown = Vec::with_capacity(factor_outcomes.len());
    let mut raw_total = 0u32;
    let mut strongest_positive: Option<(u32, String)> = None;
    let mut strongest_negative: Option<(u32, String)> = None;

    for (factor, budget, (points, message)) in factor_outcomes {
        raw_total += points;
        let matched = points > 0;
        breakdown.push(FactorScore {
            factor,
            points,
            matched,
        });

        if matched {
            // Strongest positive: most points, first factor wins ties.
            if strongest_positive.as_ref().map_or(true, |(p, _)| points > *p) {
                strongest_positive = Some((points, message));
            }
        } else {
            // Strongest negative: biggest budget shortfall, first wins ties.
            let shortfall = budget - points;
            if strongest_negative
                .as_ref()
                .map_or(true, |(s, _)| shortfall > *s)
            {
                strongest_negative = Some((shortfall, message));
            }
        }
    }

    let match_score = raw_total.min(100);
    let explanation = generate_explanation(
        match_score,
        strongest_positive.as_ref().map(|(_, m)| m.as_str()),
        strongest_negative.as_ref().map(|(_, m)| m.as_str()),
    );

    MatchResult {
        scholarship: scholarship.clone(),
        match_score,
        explanation,
        breakdown,
    }
}

/// Education sub-score.
///
/// Exact level is full credit. On the HighSchool < UG < PG < PhD ladder a
/// student above the required level keeps 3/5 of the budget, one level below
/// keeps 1/5. Anything else, including Diploma mismatches, is zero.
pub fn score_education(
    profile: &StudentProfile,
    scholarship: &ScholarshipRecord,
    budget: u32,
) -> (u32, String) {
    if profile.education_level == scholarship.degree {
        return (budget, "your education level matches perfectly".to_string());
    }

    if let (Some(student), Some(required)) = (
        profile.education_level.ladder_rank(),
        scholarship.degree.ladder_rank(),
    ) {
        if student > required {
            return (
                budget * 3 / 5,
                format!(
                    "your education level ({}) is above the required level ({})",
                    profile.education_level, scholarship.degree
                ),
            );
        }
        if student + 1 == required {
            return (
                budget / 5,
                format!(
                    "your education level ({}) is one level below the requirement ({})",
                    profile.education_level, scholarship.degree
                ),
            );
        }
    }

    (
        0,
        format!(
            "education level doesn't match (requires {})",
            scholarship.degree
        ),
    )
}

/// Marks sub-score, piecewise on the surplus or deficit against the
/// required minimum. A large surplus earns a small bonus on top of the
/// budget; a deficit within 5 keeps half the budget, within 10 a sixth.
pub fn score_marks(student_marks: u32, required_marks: u32, budget: u32) -> (u32, String) {
    if student_marks >= required_marks {
        let surplus = student_marks - required_marks;
        let bonus = if surplus > 20 {
            5
        } else if surplus > 10 {
            3
        } else if surplus > 5 {
            1
        } else {
            0
        };
        return (
            budget + bonus,
            format!(
                "your marks ({}%) exceed the requirement ({}%)",
                student_marks, required_marks
            ),
        );
    }

    let deficit = required_marks - student_marks;
    if deficit <= 5 {
        (
            budget / 2,
            format!(
                "your marks ({}%) are slightly below the requirement ({}%)",
                student_marks, required_marks
            ),
        )
    } else if deficit <= 10 {
        (
            budget / 6,
            format!(
                "your marks ({}%) are below the requirement ({}%)",
                student_marks, required_marks
            ),
        )
    } else {
        (
            0,
            format!(
                "your marks ({}%) don't meet the minimum requirement ({}%)",
                student_marks, required_marks
            ),
        )
    }
}

/// Income sub-score, piecewise on the ratio of family income to the
/// scholarship's income ceiling. Comfortably under earns a bonus; up to 10%
/// over keeps half the budget, up to 25% over a sixth. A zero ceiling is
/// treated as missing data and scores nothing.
pub fn score_income(student_income: u64, income_limit: u64, budget: u32) -> (u32, String) {
    if income_limit == 0 {
        return (0, "no income limit information is available".to_string());
    }

    // Cross-multiplied ratio checks, widened to dodge overflow on large values
    let income = student_income as u128;
    let limit = income_limit as u128;

    if student_income <= income_limit {
        let bonus = if income * 2 < limit {
            5
        } else if income * 4 < limit * 3 {
            3
        } else {
            0
        };
        return (
            budget + bonus,
            format!(
                "your family income (₹{}) is within the limit (₹{})",
                student_income, income_limit
            ),
        );
    }

    if income * 10 <= limit * 11 {
        (
            budget / 2,
            format!(
                "your family income (₹{}) is slightly above the limit (₹{})",
                student_income, income_limit
            ),
        )
    } else if income * 100 <= limit * 125 {
        (
            budget / 6,
            format!(
                "your family income (₹{}) is above the limit (₹{})",
                student_income, income_limit
            ),
        )
    } else {
        (
            0,
            format!(
                "your family income (₹{}) exceeds the limit (₹{})",
                student_income, income_limit
            ),
        )
    }
}

/// Category sub-score: full credit when the scholarship's category set
/// contains the student's tag or the wildcard "All"; otherwise the affinity
/// table may grant partial credit for declared related pairs.
pub fn score_category(
    profile: &StudentProfile,
    scholarship: &ScholarshipRecord,
    budget: u32,
    affinity: &[CategoryAffinity],
) -> (u32, String) {
    if scholarship.open_to_all_categories()
        || scholarship.category.iter().any(|c| c == &profile.category)
    {
        return (
            budget,
            format!(
                "your category ({}) is eligible for this scholarship",
                profile.category
            ),
        );
    }

    for pair in affinity {
        let related = (pair.first == profile.category
            && scholarship.category.iter().any(|c| c == &pair.second))
            || (pair.second == profile.category
                && scholarship.category.iter().any(|c| c == &pair.first));
        if related && pair.points > 0 {
            return (
                pair.points.min(budget),
                format!(
                    "your category ({}) is related to an eligible category",
                    profile.category
                ),
            );
        }
    }

    (
        0,
        format!(
            "your category ({}) is not in the eligible categories",
            profile.category
        ),
    )
}

/// Region sub-score: nationwide scholarships match everyone, otherwise the
/// regions must be equal.
pub fn score_region(
    profile: &StudentProfile,
    scholarship: &ScholarshipRecord,
    budget: u32,
) -> (u32, String) {
    if scholarship.nationwide() {
        return (budget, "open to all regions in India".to_string());
    }
    if profile.region == scholarship.region {
        return (
            budget,
            format!(
                "your region ({}) matches the scholarship region",
                profile.region
            ),
        );
    }
    (
        0,
        format!("region requirement not met (requires {})", scholarship.region),
    )
}
