use std::collections::{BTreeMap, HashSet};

use crate::config::ParsingConfig;

/// Built-in section header names, in precedence order: when a line mentions
/// more than one, the earliest entry here wins.
pub(crate) const DEFAULT_SECTIONS: &[&str] = &[
    "accomplishments",
    "experience",
    "education",
    "interests",
    "projects",
    "professional experience",
    "publications",
    "skills",
    "certifications",
    "objective",
    "career objective",
    "summary",
    "leadership",
];

/// Split raw line-oriented text into named sections.
///
/// A header-recognition scan with a current-section cursor: a line whose
/// lowercased whitespace tokens include a known section name opens that
/// section; subsequent non-empty lines accumulate under it; lines before
/// the first header are dropped. Single-character lines are checked as bare
/// header tokens before the token-intersection test (some documents use
/// single-letter markers). Sections that end up with no content are omitted.
///
/// The result is keyed by canonical lowercase name; consumers index by
/// name, ordering carries no meaning.
pub fn segment(raw_text: &str) -> BTreeMap<String, Vec<String>> {
    segment_with_config(raw_text, &ParsingConfig::default())
}

/// Config-aware version of [`segment`].
pub(crate) fn segment_with_config(
    raw_text: &str,
    config: &ParsingConfig,
) -> BTreeMap<String, Vec<String>> {
    let names = config.section_names();

    let mut sections: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in raw_text.lines() {
        let line = line.trim();

        let header = if line.chars().count() == 1 {
            // Bare single-character header candidate
            let candidate = line.to_lowercase();
            names.iter().find(|n| **n == candidate).cloned()
        } else {
            let tokens: HashSet<String> = line
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect();
            names.iter().find(|n| tokens.contains(*n)).cloned()
        };

        if let Some(name) = header {
            sections.entry(name.clone()).or_default();
            current = Some(name);
        } else if let Some(open) = &current {
            if !line.is_empty() {
                if let Some(lines) = sections.get_mut(open) {
                    lines.push(line.to_string());
                }
            }
        }
    }

    sections.retain(|_, lines| !lines.is_empty());
    sections
}
