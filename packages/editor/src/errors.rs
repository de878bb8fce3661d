//! Error types for the editor

use letterpress_document::DocumentError;
use thiserror::Error;

/// Failure reported by a host collaborator (clipboard, template store)
pub type HostError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Save failed: {0}")]
    Save(#[source] HostError),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(#[source] HostError),
}
