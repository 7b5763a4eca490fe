//! Catalog mutation service: create, update, and delete single book records
//! with existence checks.

use bookstore_store::{Book, BookDraft, BookId, BookStore};
use rust_decimal::Decimal;

use super::error::CatalogError;

/// Persist a new book; the store assigns the identity.
pub async fn create_book(store: &dyn BookStore, draft: BookDraft) -> Result<Book, CatalogError> {
    validate_draft(&draft)?;
    let book = store.insert(draft).await?;
    tracing::info!(book_id = book.book_id, title = %book.title, "book created");
    Ok(book)
}

/// Overwrite all fields of an existing book. Whole-record replace, not merge.
pub async fn update_book(
    store: &dyn BookStore,
    book_id: BookId,
    draft: BookDraft,
) -> Result<Book, CatalogError> {
    validate_draft(&draft)?;
    store
        .replace(book_id, draft)
        .await?
        .ok_or(CatalogError::NotFound { book_id })
}

/// Remove a book. A delete of an unknown id — including a second delete of
/// the same id — reports NotFound rather than silently succeeding, so caller
/// bugs surface.
pub async fn delete_book(store: &dyn BookStore, book_id: BookId) -> Result<(), CatalogError> {
    if store.remove(book_id).await? {
        tracing::info!(book_id, "book deleted");
        Ok(())
    } else {
        Err(CatalogError::NotFound { book_id })
    }
}

fn validate_draft(draft: &BookDraft) -> Result<(), CatalogError> {
    if draft.title.trim().is_empty() {
        return Err(CatalogError::validation("title", "must not be empty"));
    }
    if draft.author.trim().is_empty() {
        return Err(CatalogError::validation("author", "must not be empty"));
    }
    if draft.price < Decimal::ZERO {
        return Err(CatalogError::validation("price", "must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_store::MemoryBookStore;

    fn draft(title: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: "Author".to_string(),
            publisher: "Publisher".to_string(),
            isbn: "978-0000000000".to_string(),
            category: "Classic".to_string(),
            classification: "Fiction".to_string(),
            page_count: 100,
            price: Decimal::new(1250, 2),
        }
    }

    #[tokio::test]
    async fn create_returns_record_with_assigned_id() {
        let store = MemoryBookStore::new();

        let book = create_book(&store, draft("Les Misérables")).await.unwrap();

        assert_eq!(book.book_id, 1);
        assert_eq!(book.title, "Les Misérables");
    }

    #[tokio::test]
    async fn create_rejects_blank_title() {
        let store = MemoryBookStore::new();

        let err = create_book(&store, draft("  ")).await.unwrap_err();

        match err {
            CatalogError::Validation { field, .. } => assert_eq!(field, "title"),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_negative_price() {
        let store = MemoryBookStore::new();
        let mut bad = draft("A");
        bad.price = Decimal::new(-1, 2);

        let err = create_book(&store, bad).await.unwrap_err();

        match err {
            CatalogError::Validation { field, .. } => assert_eq!(field, "price"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_replaces_whole_record() {
        let store = MemoryBookStore::new();
        let created = create_book(&store, draft("Old")).await.unwrap();

        let mut replacement = draft("New");
        replacement.category = "Biography".to_string();
        let updated = update_book(&store, created.book_id, replacement)
            .await
            .unwrap();

        assert_eq!(updated.book_id, created.book_id);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.category, "Biography");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_and_store_unchanged() {
        let store = MemoryBookStore::new();
        create_book(&store, draft("Only")).await.unwrap();

        let err = update_book(&store, 99, draft("Other")).await.unwrap_err();

        match err {
            CatalogError::NotFound { book_id } => assert_eq!(book_id, 99),
            other => panic!("expected not found, got {other:?}"),
        }
        let books = store.all().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Only");
    }

    #[tokio::test]
    async fn second_delete_of_same_id_is_not_found() {
        let store = MemoryBookStore::new();
        let created = create_book(&store, draft("A")).await.unwrap();

        delete_book(&store, created.book_id).await.unwrap();
        let err = delete_book(&store, created.book_id).await.unwrap_err();

        match err {
            CatalogError::NotFound { book_id } => assert_eq!(book_id, created.book_id),
            other => panic!("expected not found, got {other:?}"),
        }
    }
}
