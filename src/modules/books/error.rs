use bookstore_store::{BookId, StoreError};
use thiserror::Error;

/// Catalog error taxonomy. Kinds stay distinguishable so the presentation
/// layer can choose between "book not found" and "please try again".
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed or missing input; names the offending field. Never retried.
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// An operation referenced a book id the store does not know.
    #[error("Book {book_id} not found")]
    NotFound { book_id: BookId },

    /// The store was unreachable. Callers may retry with backoff; the
    /// catalog itself never does.
    #[error(transparent)]
    Transient(#[from] StoreError),
}

impl CatalogError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
