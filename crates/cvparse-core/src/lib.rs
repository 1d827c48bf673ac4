use serde::{Deserialize, Serialize};

pub mod annotate;
pub mod backend;
pub mod config_file;
pub mod vocabulary;

// Re-export for convenience
pub use annotate::{
    AnnotationError, EntityAnnotationSource, LabeledSpans, LinguisticAnnotator, NoopAnnotator,
    StaticAnnotations, WhitespaceAnnotator, labels,
};
pub use backend::{BackendError, TextBackend};
pub use vocabulary::{SkillVocabulary, VocabularyError};

/// The text of one document, captured once at acquisition time.
///
/// `raw` preserves line structure (section headers live on their own lines);
/// `collapsed` is the whitespace-collapsed single-line variant used by the
/// regex and token based extractors. Both are immutable after construction.
#[derive(Debug, Clone)]
pub struct RawDocument {
    raw: String,
    collapsed: String,
}

impl RawDocument {
    pub fn new(raw: String) -> Self {
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        Self { raw, collapsed }
    }

    /// Build a document from per-page text, joined with a space separator.
    pub fn from_pages(pages: &[String]) -> Self {
        let mut raw = String::new();
        for page in pages {
            raw.push(' ');
            raw.push_str(page);
        }
        Self::new(raw)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn collapsed(&self) -> &str {
        &self.collapsed
    }
}

/// Part-of-speech tag attached to a token by the linguistic annotator.
///
/// Only `ProperNoun` is load-bearing for extraction; the rest exist so
/// annotator implementations can report what they saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pos {
    ProperNoun,
    Noun,
    Verb,
    Adjective,
    Other,
}

/// A single token from the linguistic annotator.
#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub is_stopword: bool,
    pub pos: Pos,
}

impl Token {
    pub fn new(text: impl Into<String>, is_stopword: bool, pos: Pos) -> Self {
        Self {
            text: text.into(),
            is_stopword,
            pos,
        }
    }
}

/// Output of the linguistic annotator for one document.
#[derive(Debug, Clone, Default)]
pub struct LinguisticAnalysis {
    pub tokens: Vec<Token>,
    pub noun_phrases: Vec<String>,
}

/// The structured record produced for one document.
///
/// Every field defaults to its absence state (`None`, empty, or `0.0`);
/// a document with no recognizable signal still yields a valid profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Vec<String>,
    pub education: Option<Vec<String>>,
    pub qualification: Option<Vec<String>>,
    pub profile: Option<Vec<String>>,
    pub previous_associations: Option<Vec<String>>,
    /// Total experience in years, rounded to 2 decimal places.
    pub total_experience: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_document_collapses_whitespace() {
        let doc = RawDocument::new("John  Doe\n\n  Engineer\tat Acme".to_string());
        assert_eq!(doc.collapsed(), "John Doe Engineer at Acme");
        assert!(doc.raw().contains('\n'));
    }

    #[test]
    fn from_pages_joins_with_space() {
        let pages = vec!["page one".to_string(), "page two".to_string()];
        let doc = RawDocument::from_pages(&pages);
        assert_eq!(doc.raw(), " page one page two");
        assert_eq!(doc.collapsed(), "page one page two");
    }

    #[test]
    fn profile_default_is_all_absent() {
        let profile = ExtractedProfile::default();
        assert!(profile.name.is_none());
        assert!(profile.email.is_none());
        assert!(profile.skills.is_empty());
        assert!(profile.education.is_none());
        assert_eq!(profile.total_experience, 0.0);
    }

    #[test]
    fn profile_serializes_with_expected_field_names() {
        let profile = ExtractedProfile {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            skills: vec!["Python".to_string()],
            total_experience: 2.5,
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["skills"][0], "Python");
        assert!(json["education"].is_null());
        assert!(json["qualification"].is_null());
        assert!(json["profile"].is_null());
        assert!(json["previous_associations"].is_null());
        assert_eq!(json["total_experience"], 2.5);
    }
}
