use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::models::{MatchResult, StudentProfile};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    profile: &'a StudentProfile,
    matches: &'a [MatchResult],
    #[serde(rename = "exportedAt")]
    exported_at: DateTime<Utc>,
}

/// Serialize a match report as pretty-printed JSON
pub fn to_json(
    profile: &StudentProfile,
    matches: &[MatchResult],
    exported_at: DateTime<Utc>,
) -> Result<String, ExportError> {
    let document = ExportDocument {
        profile,
        matches,
        exported_at,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Render matches as CSV, one row per result
pub fn to_csv(matches: &[MatchResult]) -> String {
    let mut out = String::from("Name,Match%,Amount,Deadline,Provider,Education Level\n");
    for result in matches {
        let s = &result.scholarship;
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            quote(&s.name),
            result.match_score,
            s.amount,
            s.deadline,
            quote(&s.provider),
            s.degree,
        ));
    }
    out
}

/// Wrap a field in quotes when it contains a comma or a quote
fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationLevel, ScholarshipRecord};
    use chrono::NaiveDate;

    fn sample_result(name: &str, score: u32) -> MatchResult {
        MatchResult {
            scholarship: ScholarshipRecord {
                id: 1,
                name: name.to_string(),
                degree: EducationLevel::UG,
                min_marks: 60,
                income_limit: 300_000,
                category: vec!["All".to_string()],
                region: "India".to_string(),
                amount: 50_000,
                deadline: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
                fields: vec![],
                description: String::new(),
                provider: "Ministry of Education".to_string(),
                website: None,
                renewable: true,
                documents: vec![],
                status: Default::default(),
                owner_id: None,
            },
            match_score: score,
            explanation: "Strong match.".to_string(),
            breakdown: vec![],
        }
    }

    fn sample_profile() -> StudentProfile {
        StudentProfile {
            education_level: EducationLevel::UG,
            marks: 85,
            category: "General".to_string(),
            income: 200_000,
            region: "Delhi".to_string(),
            interests: vec![],
        }
    }

    #[test]
    fn test_json_export_contains_profile_and_matches() {
        let results = vec![sample_result("National Merit Scholarship", 90)];
        let exported_at = DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let json = to_json(&sample_profile(), &results, exported_at).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["profile"]["marks"], 85);
        assert_eq!(parsed["matches"][0]["matchScore"], 90);
        assert!(parsed["exportedAt"].is_string());
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = to_csv(&[sample_result("National Merit Scholarship", 90)]);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Name,Match%,Amount,Deadline,Provider,Education Level")
        );
        assert_eq!(
            lines.next(),
            Some("National Merit Scholarship,90,50000,2024-12-31,Ministry of Education,UG")
        );
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let csv = to_csv(&[sample_result("Science, Technology Grant", 75)]);
        assert!(csv.contains("\"Science, Technology Grant\""));
    }
}
