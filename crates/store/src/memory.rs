//! In-memory book store used for local runs and tests.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::model::{Book, BookDraft, BookId};
use crate::{BookStore, StoreError};

struct Inner {
    next_id: BookId,
    books: Vec<Book>,
}

/// Thread-safe in-memory [`BookStore`].
///
/// Records are kept in insertion order so `all()` reflects store order.
/// Critical sections never await, so a std `RwLock` is sufficient.
pub struct MemoryBookStore {
    inner: RwLock<Inner>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                books: Vec::new(),
            }),
        }
    }

    /// Build a store pre-populated with the given records, assigning ids in
    /// order. Used for seeding and test fixtures.
    pub fn with_books(drafts: impl IntoIterator<Item = BookDraft>) -> Self {
        let store = Self::new();
        {
            let mut inner = store
                .inner
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            for draft in drafts {
                let id = inner.next_id;
                inner.next_id += 1;
                inner.books.push(draft.into_book(id));
            }
        }
        store
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Unavailable {
            reason: "store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Unavailable {
            reason: "store lock poisoned".to_string(),
        })
    }
}

impl Default for MemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, draft: BookDraft) -> Result<Book, StoreError> {
        let mut inner = self.write()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let book = draft.into_book(id);
        inner.books.push(book.clone());

        tracing::debug!(book_id = id, title = %book.title, "book record created");
        Ok(book)
    }

    async fn get(&self, id: BookId) -> Result<Option<Book>, StoreError> {
        let inner = self.read()?;
        Ok(inner.books.iter().find(|b| b.book_id == id).cloned())
    }

    async fn replace(&self, id: BookId, draft: BookDraft) -> Result<Option<Book>, StoreError> {
        let mut inner = self.write()?;

        match inner.books.iter_mut().find(|b| b.book_id == id) {
            Some(slot) => {
                *slot = draft.into_book(id);
                Ok(Some(slot.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: BookId) -> Result<bool, StoreError> {
        let mut inner = self.write()?;
        let before = inner.books.len();
        inner.books.retain(|b| b.book_id != id);
        Ok(inner.books.len() < before)
    }

    async fn all(&self) -> Result<Vec<Book>, StoreError> {
        let inner = self.read()?;
        Ok(inner.books.clone())
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        let inner = self.read()?;

        let mut seen = Vec::new();
        for book in &inner.books {
            if !seen.contains(&book.category) {
                seen.push(book.category.clone());
            }
        }
        Ok(seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn draft(title: &str, category: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: "Author".to_string(),
            publisher: "Publisher".to_string(),
            isbn: "978-0000000000".to_string(),
            category: category.to_string(),
            classification: "Fiction".to_string(),
            page_count: 200,
            price: Decimal::new(1099, 2),
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = MemoryBookStore::new();

        let a = store.insert(draft("A", "Classic")).await.unwrap();
        let b = store.insert(draft("B", "Classic")).await.unwrap();

        assert_eq!(a.book_id, 1);
        assert_eq!(b.book_id, 2);
    }

    #[tokio::test]
    async fn replace_overwrites_whole_record() {
        let store = MemoryBookStore::new();
        let created = store.insert(draft("Old Title", "Classic")).await.unwrap();

        let updated = store
            .replace(created.book_id, draft("New Title", "Biography"))
            .await
            .unwrap()
            .expect("record should exist");

        assert_eq!(updated.book_id, created.book_id);
        assert_eq!(updated.title, "New Title");
        assert_eq!(updated.category, "Biography");
    }

    #[tokio::test]
    async fn replace_unknown_id_leaves_store_unchanged() {
        let store = MemoryBookStore::new();
        store.insert(draft("A", "Classic")).await.unwrap();

        let result = store.replace(99, draft("B", "Classic")).await.unwrap();

        assert!(result.is_none());
        let books = store.all().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "A");
    }

    #[tokio::test]
    async fn remove_reports_whether_record_existed() {
        let store = MemoryBookStore::new();
        let created = store.insert(draft("A", "Classic")).await.unwrap();

        assert!(store.remove(created.book_id).await.unwrap());
        assert!(!store.remove(created.book_id).await.unwrap());
    }

    #[tokio::test]
    async fn all_preserves_insertion_order() {
        let store = MemoryBookStore::new();
        store.insert(draft("C", "Classic")).await.unwrap();
        store.insert(draft("A", "Classic")).await.unwrap();
        store.insert(draft("B", "Classic")).await.unwrap();

        let titles: Vec<_> = store
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn categories_are_distinct_first_seen_order() {
        let store = MemoryBookStore::new();
        store.insert(draft("A", "Classic")).await.unwrap();
        store.insert(draft("B", "Biography")).await.unwrap();
        store.insert(draft("C", "Classic")).await.unwrap();

        let categories = store.categories().await.unwrap();
        assert_eq!(categories, vec!["Classic", "Biography"]);
    }
}
