use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::{LinguisticAnalysis, Pos, Token};

/// Labeled spans from the entity annotation source: label → span texts,
/// deduplicated per label, order not significant.
pub type LabeledSpans = BTreeMap<String, Vec<String>>;

/// Entity labels the extraction pipeline consults.
pub mod labels {
    pub const NAME: &str = "name";
    pub const PROFILE: &str = "profile";
    pub const QUALIFICATION: &str = "qualification";
    pub const COMPANIES: &str = "companies";
}

#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("annotation backend error: {0}")]
    Backend(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A statistical entity tagger, treated as opaque.
///
/// Implementations wrap whatever model produces labeled spans for a
/// document. The pipeline owns no model state; callers construct an
/// implementation and inject it (see `cvparse-parsing::ProfileExtractor`).
pub trait EntityAnnotationSource: Send + Sync {
    fn annotate(&self, text: &str) -> Result<LabeledSpans, AnnotationError>;
}

/// A tokenizer / part-of-speech tagger, treated as opaque.
pub trait LinguisticAnnotator: Send + Sync {
    fn analyze(&self, text: &str) -> Result<LinguisticAnalysis, AnnotationError>;
}

/// Deduplicate span texts per label, keeping first-seen order.
///
/// Implementations of [`EntityAnnotationSource`] should run their raw model
/// output through this so the per-label dedup contract holds everywhere.
pub fn dedup_spans(spans: LabeledSpans) -> LabeledSpans {
    spans
        .into_iter()
        .map(|(label, texts)| {
            let mut seen = HashSet::new();
            let deduped: Vec<String> = texts
                .into_iter()
                .filter(|t| seen.insert(t.clone()))
                .collect();
            (label, deduped)
        })
        .collect()
}

/// Annotator that reports nothing.
///
/// Both trait impls return empty output, which the pipeline treats as the
/// ordinary absence state for every dependent field. Stands in wherever no
/// model is wired up (the CLI ships it as the entity source).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnnotator;

impl EntityAnnotationSource for NoopAnnotator {
    fn annotate(&self, _text: &str) -> Result<LabeledSpans, AnnotationError> {
        Ok(LabeledSpans::new())
    }
}

impl LinguisticAnnotator for NoopAnnotator {
    fn analyze(&self, _text: &str) -> Result<LinguisticAnalysis, AnnotationError> {
        Ok(LinguisticAnalysis::default())
    }
}

/// Common words excluded from the token pass of skill matching.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "of", "and", "or", "for", "to", "in", "on", "with", "by", "at", "is", "as",
];

/// Minimal tokenizer: whitespace splitting with a built-in stopword list.
///
/// Tokens keep their surface form apart from surrounding punctuation, so
/// terms like "c++" survive. No part-of-speech model is involved: every
/// token is tagged `Pos::Other` and no noun phrases are produced, which
/// leaves proper-noun and multi-word extraction to a real annotator.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceAnnotator;

impl LinguisticAnnotator for WhitespaceAnnotator {
    fn analyze(&self, text: &str) -> Result<LinguisticAnalysis, AnnotationError> {
        let tokens = text
            .split_whitespace()
            .map(|word| word.trim_matches(&[',', '.', ';', ':', '(', ')'][..]))
            .filter(|word| !word.is_empty())
            .map(|word| {
                let is_stopword = STOP_WORDS.contains(&word.to_lowercase().as_str());
                Token::new(word, is_stopword, Pos::Other)
            })
            .collect();
        Ok(LinguisticAnalysis {
            tokens,
            noun_phrases: Vec::new(),
        })
    }
}

/// Annotation source backed by pre-supplied spans.
///
/// Useful in tests and for callers that run the tagging model out of
/// process and feed its output back in.
#[derive(Debug, Clone, Default)]
pub struct StaticAnnotations {
    spans: LabeledSpans,
}

impl StaticAnnotations {
    pub fn new(spans: LabeledSpans) -> Self {
        Self {
            spans: dedup_spans(spans),
        }
    }

    /// Add all spans for one label, replacing any previous entry.
    pub fn with_label(
        mut self,
        label: impl Into<String>,
        texts: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.spans
            .insert(label.into(), texts.into_iter().map(Into::into).collect());
        self.spans = dedup_spans(std::mem::take(&mut self.spans));
        self
    }
}

impl EntityAnnotationSource for StaticAnnotations {
    fn annotate(&self, _text: &str) -> Result<LabeledSpans, AnnotationError> {
        Ok(self.spans.clone())
    }
}
