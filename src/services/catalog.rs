use chrono::NaiveDate;

use crate::models::{EducationLevel, ScholarshipRecord};

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    name: &str,
    degree: EducationLevel,
    min_marks: u32,
    income_limit: u64,
    category: &[&str],
    region: &str,
    amount: u64,
    deadline: (i32, u32, u32),
    fields: &[&str],
    description: &str,
    provider: &str,
    website: &str,
    renewable: bool,
    documents: &[&str],
) -> ScholarshipRecord {
    ScholarshipRecord {
        id,
        name: name.to_string(),
        degree,
        min_marks,
        income_limit,
        category: category.iter().map(|c| c.to_string()).collect(),
        region: region.to_string(),
        amount,
        deadline: NaiveDate::from_ymd_opt(deadline.0, deadline.1, deadline.2).unwrap_or_default(),
        fields: fields.iter().map(|f| f.to_string()).collect(),
        description: description.to_string(),
        provider: provider.to_string(),
        website: Some(website.to_string()),
        renewable,
        documents: documents.iter().map(|d| d.to_string()).collect(),
        status: Default::default(),
        owner_id: None,
    }
}

/// The built-in scholarship catalog, used to seed an empty store and as the
/// default corpus for a scoring pass.
pub fn seed() -> Vec<ScholarshipRecord> {
    vec![
        record(
            1,
            "National Merit Scholarship",
            EducationLevel::UG,
            75,
            300_000,
            &["General", "OBC"],
            "India",
            50_000,
            (2024, 8, 15),
            &["Engineering", "Medicine", "Science", "Arts", "Commerce"],
            "Awarded to meritorious undergraduate students across India.",
            "Ministry of Education, India",
            "https://scholarships.gov.in",
            true,
            &["Marksheet", "Income Certificate", "Caste Certificate (if applicable)"],
        ),
        record(
            2,
            "SC/ST Post-Matric Scholarship",
            EducationLevel::UG,
            60,
            250_000,
            &["SC", "ST"],
            "India",
            35_000,
            (2024, 9, 30),
            &["All Fields"],
            "Government scholarship for SC/ST students pursuing undergraduate studies.",
            "Ministry of Social Justice and Empowerment",
            "https://socialjustice.gov.in",
            true,
            &["Caste Certificate", "Income Certificate", "Admission Proof"],
        ),
        record(
            3,
            "Prime Minister's Scholarship Scheme",
            EducationLevel::UG,
            80,
            600_000,
            &["General", "OBC", "SC", "ST", "EWS"],
            "India",
            300_000,
            (2024, 7, 20),
            &["Engineering", "Medicine", "Law", "Management"],
            "Prestigious scholarship for outstanding students with leadership potential.",
            "Prime Minister's Office",
            "https://pmss.gov.in",
            true,
            &["Marksheet", "Income Proof", "Recommendation Letters"],
        ),
        record(
            4,
            "Girl Child Education Scholarship",
            EducationLevel::HighSchool,
            70,
            150_000,
            &["General", "OBC", "SC", "ST", "Minority"],
            "India",
            20_000,
            (2024, 10, 10),
            &["All Fields"],
            "Special scholarship for girl students to promote female education.",
            "National Commission for Women",
            "https://ncw.nic.in",
            true,
            &["Birth Certificate", "School ID", "Income Certificate"],
        ),
        record(
            5,
            "Minority Scholarship",
            EducationLevel::PG,
            65,
            200_000,
            &["Minority"],
            "India",
            75_000,
            (2024, 8, 31),
            &["All Fields"],
            "For students belonging to minority communities pursuing postgraduate studies.",
            "Ministry of Minority Affairs",
            "https://minorityaffairs.gov.in",
            true,
            &["Minority Community Certificate", "PG Admission Proof"],
        ),
        record(
            6,
            "Sports Excellence Scholarship",
            EducationLevel::UG,
            55,
            500_000,
            &["General", "OBC", "SC", "ST"],
            "India",
            100_000,
            (2024, 11, 15),
            &["All Fields"],
            "For students who have represented state or national level in sports.",
            "Sports Authority of India",
            "https://sportsauthorityofindia.nic.in",
            false,
            &["Sports Certificates", "Medical Certificate", "Marksheet"],
        ),
        record(
            7,
            "North-East Region Scholarship",
            EducationLevel::UG,
            60,
            400_000,
            &["General", "OBC", "SC", "ST"],
            "North India",
            45_000,
            (2024, 9, 15),
            &["All Fields"],
            "Special scholarship for students from the North-Eastern states.",
            "Ministry of Development of North Eastern Region",
            "https://mdoner.gov.in",
            true,
            &["Domicile Certificate", "Admission Proof"],
        ),
        record(
            8,
            "PhD Research Fellowship",
            EducationLevel::PhD,
            75,
            800_000,
            &["General", "OBC", "SC", "ST"],
            "India",
            250_000,
            (2024, 12, 1),
            &["Science", "Technology", "Social Sciences", "Humanities"],
            "For PhD candidates engaged in innovative research, with a research grant.",
            "University Grants Commission",
            "https://ugc.ac.in",
            true,
            &["Research Proposal", "Masters Marksheet", "Recommendations"],
        ),
        record(
            9,
            "International Student Scholarship",
            EducationLevel::UG,
            85,
            1_000_000,
            &["General"],
            "International",
            500_000,
            (2024, 7, 31),
            &["Engineering", "Medicine", "Business", "Liberal Arts"],
            "For Indian students seeking undergraduate education abroad.",
            "Ministry of External Affairs",
            "https://mea.gov.in",
            false,
            &["Passport", "University Admission Letter", "Financial Statements"],
        ),
        record(
            10,
            "Entrepreneurship Scholarship",
            EducationLevel::PG,
            70,
            300_000,
            &["General", "OBC", "SC", "ST"],
            "India",
            150_000,
            (2024, 10, 30),
            &["Business", "Technology", "Social Entrepreneurship"],
            "For students with an entrepreneurial mindset, with incubation support.",
            "Startup India",
            "https://startupindia.gov.in",
            false,
            &["Business Plan", "Academic Records", "Recommendation Letters"],
        ),
    ]
}

/// Lookup by id. Absent ids yield None, never an error.
pub fn by_id(catalog: &[ScholarshipRecord], id: u32) -> Option<&ScholarshipRecord> {
    catalog.iter().find(|s| s.id == id)
}

pub fn by_degree(catalog: &[ScholarshipRecord], degree: EducationLevel) -> Vec<&ScholarshipRecord> {
    catalog.iter().filter(|s| s.degree == degree).collect()
}

pub fn by_category<'a>(
    catalog: &'a [ScholarshipRecord],
    category: &str,
) -> Vec<&'a ScholarshipRecord> {
    catalog
        .iter()
        .filter(|s| s.open_to_all_categories() || s.category.iter().any(|c| c == category))
        .collect()
}

/// Region lookup with wildcard semantics: nationwide records match every
/// student region, and a nationwide student query matches only nationwide
/// records.
pub fn by_region<'a>(catalog: &'a [ScholarshipRecord], region: &str) -> Vec<&'a ScholarshipRecord> {
    if region == "India" {
        return catalog.iter().filter(|s| s.nationwide()).collect();
    }
    catalog
        .iter()
        .filter(|s| s.nationwide() || s.region == region)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_unique_and_ordered() {
        let catalog = seed();
        assert_eq!(catalog.len(), 10);
        for (index, scholarship) in catalog.iter().enumerate() {
            assert_eq!(scholarship.id, index as u32 + 1);
        }
    }

    #[test]
    fn test_by_id() {
        let catalog = seed();
        assert_eq!(by_id(&catalog, 5).unwrap().name, "Minority Scholarship");
        assert!(by_id(&catalog, 999).is_none());
    }

    #[test]
    fn test_by_degree() {
        let catalog = seed();
        let phd = by_degree(&catalog, EducationLevel::PhD);
        assert_eq!(phd.len(), 1);
        assert_eq!(phd[0].id, 8);
    }

    #[test]
    fn test_by_category() {
        let catalog = seed();
        let minority = by_category(&catalog, "Minority");
        assert!(minority.iter().any(|s| s.id == 5));
        assert!(minority.iter().all(|s| s
            .category
            .iter()
            .any(|c| c == "Minority" || c == "All")));
    }

    #[test]
    fn test_by_region_wildcards() {
        let catalog = seed();

        let north = by_region(&catalog, "North India");
        assert!(north.iter().any(|s| s.id == 7));
        assert!(north.iter().all(|s| s.nationwide() || s.region == "North India"));

        let nationwide = by_region(&catalog, "India");
        assert!(nationwide.iter().all(|s| s.nationwide()));
    }
}
