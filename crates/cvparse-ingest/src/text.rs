use std::path::Path;

use cvparse_core::{BackendError, TextBackend};

/// Backend for plain-text documents.
///
/// Form feeds are honored as page separators; most files have none and
/// come back as a single page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextBackend;

impl TextBackend for PlainTextBackend {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, BackendError> {
        let content = std::fs::read_to_string(path)?;
        Ok(content.split('\u{0C}').map(str::to_string).collect())
    }
}

/// Backend for PDF documents, via the pure-Rust `pdf-extract` crate.
#[cfg(feature = "pdf")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextBackend;

#[cfg(feature = "pdf")]
impl TextBackend for PdfTextBackend {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, BackendError> {
        pdf_extract::extract_text_by_pages(path)
            .map_err(|e| BackendError::ExtractionError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn plain_text_single_page() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hello resume").unwrap();
        let pages = PlainTextBackend.extract_pages(file.path()).unwrap();
        assert_eq!(pages, vec!["hello resume"]);
    }

    #[test]
    fn plain_text_form_feed_splits_pages() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "page one\u{0C}page two").unwrap();
        let pages = PlainTextBackend.extract_pages(file.path()).unwrap();
        assert_eq!(pages, vec!["page one", "page two"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = PlainTextBackend.extract_pages(Path::new("/nonexistent/resume.txt"));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }
}
