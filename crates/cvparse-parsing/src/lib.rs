pub mod config;
pub mod contact;
pub mod experience;
pub mod extractor;
pub mod section;
pub mod skills;

pub use config::{ListOverride, ParsingConfig, ParsingConfigBuilder};
pub use experience::MonthYear;
pub use extractor::{ExtractError, ProfileExtractor};
// Re-export domain types from core (canonical definitions live there)
pub use cvparse_core::{
    AnnotationError, EntityAnnotationSource, ExtractedProfile, LinguisticAnnotator, RawDocument,
    SkillVocabulary,
};

/// Extract a structured profile from a document using the given annotation
/// services.
///
/// Pipeline:
/// 1. Run the entity tagger and the linguistic annotator over the text
/// 2. Segment the raw text into named sections
/// 3. Resolve each profile field by its precedence order (tagged spans,
///    pattern matches, section content)
/// 4. Sum the experience section's date ranges into total years
pub fn extract_profile(
    document: &RawDocument,
    entities: &dyn EntityAnnotationSource,
    linguistic: &dyn LinguisticAnnotator,
    vocabulary: &SkillVocabulary,
) -> Result<ExtractedProfile, ExtractError> {
    ProfileExtractor::new(entities, linguistic, vocabulary).extract(document)
}
