use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open document: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for document text extraction backends.
///
/// Implementors provide the low-level page-text step for one file format;
/// the heuristic pipeline (section segmentation, field extraction) lives in
/// `cvparse-parsing` and only ever sees the resulting text.
pub trait TextBackend: Send + Sync {
    /// Extract the plain text of each page of the document, in order.
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, BackendError>;
}
