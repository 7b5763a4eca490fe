//! Book record store: the durable-storage collaborator behind the catalog.
//!
//! The catalog engine and mutation service only see the [`BookStore`] trait,
//! a record-CRUD surface plus a distinct-values query over category. The
//! in-tree implementation is [`MemoryBookStore`]; a relational store would
//! implement the same trait.

use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod model;
pub mod seed;

pub use memory::MemoryBookStore;
pub use model::{Book, BookDraft, BookId};

/// Failure at the storage layer. Always transient from the caller's point of
/// view; retries with backoff are the caller's decision.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("book store is unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Record-CRUD access to book storage.
///
/// `all()` returns records in store order; that ordering is what makes the
/// catalog's stable sort deterministic across calls.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persist a new record, assigning a fresh identity.
    async fn insert(&self, draft: BookDraft) -> Result<Book, StoreError>;

    /// Fetch a record by id.
    async fn get(&self, id: BookId) -> Result<Option<Book>, StoreError>;

    /// Overwrite all fields of an existing record. Returns `None` when the
    /// id is unknown; the store is left unchanged in that case.
    async fn replace(&self, id: BookId, draft: BookDraft) -> Result<Option<Book>, StoreError>;

    /// Remove a record. Returns whether a record was actually removed.
    async fn remove(&self, id: BookId) -> Result<bool, StoreError>;

    /// All records in store order.
    async fn all(&self) -> Result<Vec<Book>, StoreError>;

    /// Distinct category values across all records, first-seen order.
    async fn categories(&self) -> Result<Vec<String>, StoreError>;
}
