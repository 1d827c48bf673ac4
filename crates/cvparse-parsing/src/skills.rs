use std::collections::HashSet;

use cvparse_core::{SkillVocabulary, Token};

/// Intersect tokens and noun phrases against the skill vocabulary.
///
/// Two passes: single non-stopword tokens, then every noun phrase (for
/// multi-word skills like "machine learning"). Matching is
/// case-insensitive; the output is deduplicated case-insensitively and
/// rendered with the first letter capitalized, in first-seen order.
pub fn match_skills(
    tokens: &[Token],
    noun_phrases: &[String],
    vocabulary: &SkillVocabulary,
) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for token in tokens.iter().filter(|t| !t.is_stopword) {
        if vocabulary.contains(&token.text) {
            found.push(token.text.clone());
        }
    }

    for phrase in noun_phrases {
        let phrase = phrase.trim().to_lowercase();
        if vocabulary.contains(&phrase) {
            found.push(phrase);
        }
    }

    let mut seen = HashSet::new();
    found
        .into_iter()
        .map(|skill| skill.to_lowercase())
        .filter(|skill| seen.insert(skill.clone()))
        .map(|skill| capitalize(&skill))
        .collect()
}

/// Uppercase the first letter, lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
