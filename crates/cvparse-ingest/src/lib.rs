use std::path::Path;

use thiserror::Error;

pub mod text;

// Re-export domain types for convenience
pub use cvparse_core::{BackendError, RawDocument, TextBackend};
pub use text::PlainTextBackend;
#[cfg(feature = "pdf")]
pub use text::PdfTextBackend;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("unsupported file extension: {0:?}")]
    UnsupportedExtension(String),
    #[error("text acquisition failed: {0}")]
    Backend(#[from] BackendError),
    #[cfg(not(feature = "pdf"))]
    #[error("PDF support not compiled in (enable the `pdf` feature of cvparse-ingest)")]
    NoPdfSupport,
}

/// Read a document's text into a [`RawDocument`].
///
/// Dispatches to the backend for the file's extension:
/// - `.pdf` → `pdf-extract` (requires the `pdf` feature, on by default)
/// - `.txt` → plain text
///
/// Supporting another format means adding a backend here, not branching in
/// the extraction pipeline.
pub fn acquire(path: &Path) -> Result<RawDocument, IngestError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let pages = match ext.as_str() {
        "pdf" => acquire_pdf(path)?,
        "txt" => PlainTextBackend.extract_pages(path)?,
        other => return Err(IngestError::UnsupportedExtension(other.to_string())),
    };

    tracing::debug!(path = %path.display(), pages = pages.len(), "acquired document text");
    Ok(RawDocument::from_pages(&pages))
}

#[cfg(feature = "pdf")]
fn acquire_pdf(path: &Path) -> Result<Vec<String>, IngestError> {
    Ok(PdfTextBackend.extract_pages(path)?)
}

#[cfg(not(feature = "pdf"))]
fn acquire_pdf(_path: &Path) -> Result<Vec<String>, IngestError> {
    Err(IngestError::NoPdfSupport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn unknown_extension_is_rejected() {
        let err = acquire(Path::new("resume.docx")).unwrap_err();
        match err {
            IngestError::UnsupportedExtension(ext) => assert_eq!(ext, "docx"),
            other => panic!("expected UnsupportedExtension, got {other:?}"),
        }
    }

    #[test]
    fn missing_extension_is_rejected() {
        assert!(matches!(
            acquire(Path::new("resume")),
            Err(IngestError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn txt_dispatch_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "Jane Doe\njane@example.com").unwrap();

        let doc = acquire(&path).unwrap();
        assert!(doc.raw().contains("Jane Doe"));
        assert_eq!(doc.collapsed(), "Jane Doe jane@example.com");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.TXT");
        std::fs::write(&path, "text").unwrap();
        assert!(acquire(&path).is_ok());
    }
}
