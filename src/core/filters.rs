use crate::models::{MatchResult, SearchFilters, SearchSession, SortKey};

/// Apply the minimum-score filter and the selected sort order to a scored
/// result set.
///
/// The sort is stable, so results that compare equal keep the order they
/// arrived in (catalog insertion order after a scoring pass).
pub fn rank_results(results: Vec<MatchResult>, filters: &SearchFilters) -> Vec<MatchResult> {
    let mut ranked: Vec<MatchResult> = results
        .into_iter()
        .filter(|r| r.match_score >= filters.min_match)
        .collect();

    match filters.sort_by {
        SortKey::Match => ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
        SortKey::Amount => ranked.sort_by(|a, b| b.scholarship.amount.cmp(&a.scholarship.amount)),
        SortKey::Deadline => {
            ranked.sort_by(|a, b| a.scholarship.deadline.cmp(&b.scholarship.deadline))
        }
    }

    ranked
}

/// Restrict a ranked result set to the scholarships saved in this session.
pub fn saved_results(results: &[MatchResult], session: &SearchSession) -> Vec<MatchResult> {
    results
        .iter()
        .filter(|r| session.is_saved(r.scholarship.id))
        .cloned()
        .collect()
}
