//! Narrow boundaries for the collaborators the core consumes but does not
//! implement: file-to-text extraction and the opaque document store. The
//! core prescribes nothing about them beyond these contracts.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file type is not one the extractor handles. Not recoverable for
    /// the upload in question.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    /// The file was recognized but could not be read cleanly. Recoverable:
    /// callers should treat the document as empty text and continue.
    #[error("extraction failed: {0}")]
    Corrupt(String),
}

/// File handle to plain text. Implementations live outside the core
/// (PDF/DOCX internals are explicitly not its concern).
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &str) -> Result<String, ExtractError>;
}

#[derive(Debug, Error)]
#[error("document store error: {0}")]
pub struct StoreError(pub String);

/// Opaque whole-document persistence. The core never reads through this
/// trait during scoring; it exists so callers can wire persistence without
/// the core prescribing a schema.
pub trait DocumentStore: Send + Sync {
    fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError>;
    fn find_by_key(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError>;
    fn update(&self, collection: &str, key: &str, document: Value) -> Result<(), StoreError>;
}
