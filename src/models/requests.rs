use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{EducationLevel, StudentProfile};

/// Raw student form input, exactly as the UI collaborator hands it over.
///
/// Every field is a string; `parse` normalizes into a typed
/// [`StudentProfile`] or returns the full list of validation messages for
/// form-error display. It never panics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 1, message = "Education level is required"))]
    #[serde(alias = "education_level", rename = "educationLevel")]
    pub education_level: String,
    #[serde(default)]
    pub marks: String,
    #[validate(length(min = 1, message = "Category is required"))]
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub income: String,
    #[validate(length(min = 1, message = "Region is required"))]
    #[serde(default)]
    pub region: String,
    /// Comma-separated free-text interests
    #[serde(default)]
    pub interests: String,
}

impl ProfileForm {
    /// Validate and normalize the raw form into a typed profile.
    ///
    /// An empty error list means valid; the list is ordered by field
    /// (education, marks, category, income, region) so the UI can render
    /// messages deterministically.
    pub fn parse(&self) -> Result<StudentProfile, Vec<String>> {
        let mut errors = Vec::new();

        let education_level = self.parse_education(&mut errors);
        let marks = self.parse_marks(&mut errors);
        self.require_non_empty("category", &mut errors);
        let income = self.parse_income(&mut errors);
        self.require_non_empty("region", &mut errors);

        match (education_level, marks, income) {
            (Some(education_level), Some(marks), Some(income)) if errors.is_empty() => {
                Ok(StudentProfile {
                    education_level,
                    marks,
                    category: self.category.trim().to_string(),
                    income,
                    region: self.region.trim().to_string(),
                    interests: split_interests(&self.interests),
                })
            }
            _ => Err(errors),
        }
    }

    fn parse_education(&self, errors: &mut Vec<String>) -> Option<EducationLevel> {
        let raw = self.education_level.trim();
        if raw.is_empty() {
            errors.push("Education level is required".to_string());
            return None;
        }
        match raw.parse() {
            Ok(level) => Some(level),
            Err(()) => {
                errors.push(format!(
                    "Unknown education level '{}' (expected High School, Diploma, UG, PG or PhD)",
                    raw
                ));
                None
            }
        }
    }

    fn parse_marks(&self, errors: &mut Vec<String>) -> Option<u32> {
        match self.marks.trim().parse::<i64>() {
            Ok(value) if (0..=100).contains(&value) => Some(value as u32),
            _ => {
                errors.push("Marks must be between 0 and 100".to_string());
                None
            }
        }
    }

    fn parse_income(&self, errors: &mut Vec<String>) -> Option<u64> {
        match self.income.trim().parse::<i64>() {
            Ok(value) if value >= 0 => Some(value as u64),
            _ => {
                errors.push("Income must be a positive number".to_string());
                None
            }
        }
    }

    fn require_non_empty(&self, field: &str, errors: &mut Vec<String>) {
        // The validator derive carries the same constraints for callers that
        // validate the form wholesale; this keeps messages field-ordered.
        let (value, message) = match field {
            "category" => (&self.category, "Category is required"),
            "region" => (&self.region, "Region is required"),
            _ => return,
        };
        if value.trim().is_empty() {
            errors.push(message.to_string());
        }
    }
}

fn split_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
