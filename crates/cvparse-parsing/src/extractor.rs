use thiserror::Error;

use cvparse_core::{
    AnnotationError, EntityAnnotationSource, ExtractedProfile, LinguisticAnnotator, RawDocument,
    SkillVocabulary, annotate::dedup_spans, labels,
};

use crate::config::ParsingConfig;
use crate::{contact, experience, section, skills};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("entity annotation failed: {0}")]
    EntityAnnotation(#[source] AnnotationError),
    #[error("linguistic annotation failed: {0}")]
    LinguisticAnnotation(#[source] AnnotationError),
}

/// The field aggregation pipeline for one or more documents.
///
/// Holds a [`ParsingConfig`] plus the injected annotation services; the
/// caller owns their lifecycle and may share one extractor across documents
/// (nothing is mutated after construction). Each field follows a fixed
/// precedence order, and a missing signal resolves to the field's absence
/// state rather than an error. Only a failing annotation service aborts
/// the document.
pub struct ProfileExtractor<'a> {
    config: ParsingConfig,
    entities: &'a dyn EntityAnnotationSource,
    linguistic: &'a dyn LinguisticAnnotator,
    vocabulary: &'a SkillVocabulary,
}

impl<'a> ProfileExtractor<'a> {
    /// Create an extractor with default configuration.
    pub fn new(
        entities: &'a dyn EntityAnnotationSource,
        linguistic: &'a dyn LinguisticAnnotator,
        vocabulary: &'a SkillVocabulary,
    ) -> Self {
        Self::with_config(ParsingConfig::default(), entities, linguistic, vocabulary)
    }

    /// Create an extractor with a custom configuration.
    pub fn with_config(
        config: ParsingConfig,
        entities: &'a dyn EntityAnnotationSource,
        linguistic: &'a dyn LinguisticAnnotator,
        vocabulary: &'a SkillVocabulary,
    ) -> Self {
        Self {
            config,
            entities,
            linguistic,
            vocabulary,
        }
    }

    /// Get a reference to the current config.
    pub fn config(&self) -> &ParsingConfig {
        &self.config
    }

    /// Run the full pipeline on one document.
    pub fn extract(&self, document: &RawDocument) -> Result<ExtractedProfile, ExtractError> {
        let entities = dedup_spans(
            self.entities
                .annotate(document.raw())
                .map_err(ExtractError::EntityAnnotation)?,
        );
        let analysis = self
            .linguistic
            .analyze(document.collapsed())
            .map_err(ExtractError::LinguisticAnnotation)?;

        let sections = section::segment_with_config(document.raw(), &self.config);

        // Tagged name span first, pattern match second.
        let name = entities
            .get(labels::NAME)
            .and_then(|spans| spans.first())
            .filter(|span| !span.is_empty())
            .cloned()
            .or_else(|| contact::extract_name(&analysis.tokens));

        let email = contact::extract_email_with_config(document.collapsed(), &self.config);

        let skills = skills::match_skills(
            &analysis.tokens,
            &analysis.noun_phrases,
            self.vocabulary,
        );

        let education = sections.get("education").cloned();
        let qualification = entities.get(labels::QUALIFICATION).cloned();
        let profile = entities.get(labels::PROFILE).cloned();
        let previous_associations = entities.get(labels::COMPANIES).cloned();

        let total_experience = match sections.get("experience") {
            Some(lines) => {
                let months = experience::total_months_with_config(
                    lines,
                    self.config.present_clock(),
                    &self.config,
                );
                round_to_years(months)
            }
            None => 0.0,
        };

        tracing::debug!(
            name = name.is_some(),
            email = email.is_some(),
            skills = skills.len(),
            sections = sections.len(),
            total_experience,
            "extracted profile fields"
        );

        Ok(ExtractedProfile {
            name,
            email,
            skills,
            education,
            qualification,
            profile,
            previous_associations,
            total_experience,
        })
    }
}

/// Months → years, rounded to 2 decimal places.
fn round_to_years(months: i64) -> f64 {
    (months as f64 / 12.0 * 100.0).round() / 100.0
}
