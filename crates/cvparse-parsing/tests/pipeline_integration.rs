//! End-to-end pipeline tests over a realistic resume document.

use cvparse_core::{
    AnnotationError, LinguisticAnalysis, LinguisticAnnotator, Pos, RawDocument, SkillVocabulary,
    StaticAnnotations, Token, labels,
};
use cvparse_parsing::{MonthYear, ParsingConfigBuilder, ProfileExtractor};

const RESUME: &str = "\
Jane Doe
Bengaluru | jane.doe@example.com; | +91 555 0100

Objective
Backend engineer looking for distributed systems work.

Education
B.E. Computer Science, National Institute of Technology
2012 - 2016

Experience
Senior Software Engineer, Initech
Jan 2019 to present

Software Engineer, Acme Corp
March 2017 to Feb 2019

Skills
Python, SQL, Machine Learning
";

/// Tokenizer stand-in: whitespace tokens, name words tagged as proper nouns.
struct TestAnnotator;

impl LinguisticAnnotator for TestAnnotator {
    fn analyze(&self, text: &str) -> Result<LinguisticAnalysis, AnnotationError> {
        let tokens = text
            .split_whitespace()
            .map(|word| {
                let pos = if word == "Jane" || word == "Doe" {
                    Pos::ProperNoun
                } else {
                    Pos::Other
                };
                Token::new(word.trim_matches(','), false, pos)
            })
            .collect();
        Ok(LinguisticAnalysis {
            tokens,
            noun_phrases: vec!["machine learning".to_string()],
        })
    }
}

fn extractor_fixture() -> (StaticAnnotations, TestAnnotator, SkillVocabulary) {
    let entities = StaticAnnotations::default()
        .with_label(labels::COMPANIES, ["Initech", "Acme Corp"])
        .with_label(labels::QUALIFICATION, ["B.E. Computer Science"]);
    (entities, TestAnnotator, SkillVocabulary::builtin())
}

#[test]
fn full_resume_extraction() {
    let (entities, linguistic, vocab) = extractor_fixture();
    let config = ParsingConfigBuilder::new()
        .present_clock(MonthYear::new(2021, 6))
        .build()
        .unwrap();
    let extractor = ProfileExtractor::with_config(config, &entities, &linguistic, &vocab);

    let doc = RawDocument::new(RESUME.to_string());
    let profile = extractor.extract(&doc).unwrap();

    // Name comes from the proper-noun pattern (no tagged name span).
    assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
    assert_eq!(profile.email.as_deref(), Some("jane.doe@example.com"));

    // Token pass finds Python and SQL; the noun-phrase pass finds the
    // multi-word skill.
    assert!(profile.skills.contains(&"Python".to_string()));
    assert!(profile.skills.contains(&"Sql".to_string()));
    assert!(profile.skills.contains(&"Machine learning".to_string()));

    let education = profile.education.unwrap();
    assert!(education[0].contains("B.E. Computer Science"));

    assert_eq!(
        profile.previous_associations.as_deref(),
        Some(&["Initech".to_string(), "Acme Corp".to_string()][..])
    );
    assert_eq!(
        profile.qualification.as_deref(),
        Some(&["B.E. Computer Science".to_string()][..])
    );

    // Jan 2019 → Jun 2021 is 29 months; Mar 2017 → Feb 2019 is 23 months.
    // 52 months / 12 = 4.33 years.
    assert_eq!(profile.total_experience, 4.33);
}

#[test]
fn extraction_is_stable_across_runs() {
    let (entities, linguistic, vocab) = extractor_fixture();
    let config = ParsingConfigBuilder::new()
        .present_clock(MonthYear::new(2021, 6))
        .build()
        .unwrap();
    let extractor = ProfileExtractor::with_config(config, &entities, &linguistic, &vocab);

    let doc = RawDocument::new(RESUME.to_string());
    let runs: Vec<_> = (0..3).map(|_| extractor.extract(&doc).unwrap()).collect();
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}
