/// Tiered, templated explanation strings.
///
/// This is the "AI" of the original product: a deterministic template
/// selector keyed on the score tier plus the strongest positive and
/// negative factor fragments. No randomness, no model calls; identical
/// inputs always produce the identical string.
pub fn generate_explanation(
    score: u32,
    strongest_positive: Option<&str>,
    strongest_negative: Option<&str>,
) -> String {
    if score >= 85 {
        format!(
            "Excellent match! {}. You have a high chance of selection.",
            sentence(strongest_positive.unwrap_or("all criteria are met"))
        )
    } else if score >= 70 {
        let tail = match strongest_negative {
            Some(negative) => format!("However, {}.", negative),
            None => "All key criteria are satisfied.".to_string(),
        };
        format!(
            "Strong match. {}. {}",
            sentence(strongest_positive.unwrap_or("most criteria are met")),
            tail
        )
    } else if score >= 55 {
        let tail = match strongest_negative {
            Some(negative) => format!("Note: {}.", negative),
            None => "Consider applying with strong supporting documents.".to_string(),
        };
        format!(
            "Good match. {}. {}",
            sentence(strongest_positive.unwrap_or("several criteria are met")),
            tail
        )
    } else if score >= 40 {
        let tail = match strongest_negative {
            Some(negative) => format!(" Main limitation: {}.", negative),
            None => String::new(),
        };
        format!(
            "Moderate match. {}.{}",
            sentence(strongest_positive.unwrap_or("some criteria match")),
            tail
        )
    } else {
        format!(
            "Low match. {}. Not recommended to apply.",
            sentence(strongest_negative.unwrap_or("multiple criteria are not met"))
        )
    }
}

/// Capitalize the first character of a fragment so it can open a sentence.
fn sentence(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
