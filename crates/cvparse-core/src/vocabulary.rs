use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// Built-in skill table shipped with the crate. Terms are the header
/// columns, matching the tabular format accepted from disk.
const BUILTIN_TABLE: &str = include_str!("../data/skills.csv");

#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("failed to read vocabulary table: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("vocabulary table has no terms")]
    Empty,
}

/// Static reference set of known skill terms.
///
/// Terms come from the header row of a tabular file (one column per term),
/// loaded once at startup and queried by case-insensitive exact match.
/// Read-only after construction, so one instance can be shared across
/// pipelines processing documents in parallel.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: HashSet<String>,
}

impl SkillVocabulary {
    /// The vocabulary shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_csv_reader(BUILTIN_TABLE.as_bytes()).expect("built-in vocabulary is valid")
    }

    /// Load terms from the header row of a CSV file on disk.
    pub fn from_csv_path(path: &Path) -> Result<Self, VocabularyError> {
        let file = std::fs::File::open(path)?;
        let vocab = Self::from_csv_reader(file)?;
        tracing::debug!(path = %path.display(), terms = vocab.len(), "loaded skill vocabulary");
        Ok(vocab)
    }

    /// Load terms from the header row of CSV data.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, VocabularyError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?;
        let terms: HashSet<String> = headers
            .iter()
            .map(|h| h.trim().to_lowercase())
            .filter(|h| !h.is_empty())
            .collect();
        if terms.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { terms })
    }

    /// Build a vocabulary from an explicit list of terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Case-insensitive exact membership test.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(&term.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_vocabulary_loads() {
        let vocab = SkillVocabulary::builtin();
        assert!(!vocab.is_empty());
        assert!(vocab.contains("python"));
        assert!(vocab.contains("machine learning"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let vocab = SkillVocabulary::from_terms(["Python", "SQL"]);
        assert!(vocab.contains("python"));
        assert!(vocab.contains("PYTHON"));
        assert!(vocab.contains(" sql "));
        assert!(!vocab.contains("java"));
    }

    #[test]
    fn from_csv_reader_takes_header_columns() {
        let data = "python,java,machine learning\nignored,row,here\n";
        let vocab = SkillVocabulary::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(vocab.len(), 3);
        assert!(vocab.contains("Machine Learning"));
        assert!(!vocab.contains("ignored"));
    }

    #[test]
    fn empty_table_is_an_error() {
        let result = SkillVocabulary::from_csv_reader("".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn from_csv_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rust,go,sql").unwrap();
        let vocab = SkillVocabulary::from_csv_path(file.path()).unwrap();
        assert!(vocab.contains("rust"));
        assert!(vocab.contains("GO"));
    }
}
