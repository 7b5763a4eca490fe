//! Catalog query engine.
//!
//! Turns a [`BookListQuery`] into a deterministic page plus the total count
//! of the filtered set. The pipeline is explicit — validate, filter, sort,
//! count, paginate — so ordering and counting semantics are testable without
//! any particular store behind the trait.

use bookstore_store::BookStore;

use super::error::CatalogError;
use super::models::{Book, BookListQuery, CatalogPage, SortOrder};

/// List one page of the catalog.
///
/// The category filter is exact set membership and is applied before sorting
/// and counting. Sorting is a stable ordinal comparison of titles, so equal
/// titles keep store order and repeated calls over unchanged data paginate
/// identically. `total_num_books` is the filtered-set size, independent of
/// the page window.
pub async fn list_books(
    store: &dyn BookStore,
    query: &BookListQuery,
) -> Result<CatalogPage, CatalogError> {
    validate(query)?;

    let records = store.all().await?;

    let mut filtered: Vec<Book> = if query.categories.is_empty() {
        records
    } else {
        records
            .into_iter()
            .filter(|book| query.categories.contains(&book.category))
            .collect()
    };

    match query.sort_order {
        SortOrder::Asc => filtered.sort_by(|a, b| a.title.cmp(&b.title)),
        SortOrder::Desc => filtered.sort_by(|a, b| b.title.cmp(&a.title)),
    }

    let total_num_books = filtered.len();

    let books = filtered
        .into_iter()
        .skip(skip_count(query))
        .take(query.page_size)
        .collect();

    Ok(CatalogPage {
        books,
        total_num_books,
    })
}

/// Distinct category values across the catalog, order unspecified.
pub async fn list_categories(store: &dyn BookStore) -> Result<Vec<String>, CatalogError> {
    Ok(store.categories().await?)
}

/// Out-of-range paging is rejected, never clamped, so the client's
/// page-count math stays exact.
fn validate(query: &BookListQuery) -> Result<(), CatalogError> {
    if query.page_size < 1 {
        return Err(CatalogError::validation(
            "pageSize",
            "must be a positive integer",
        ));
    }
    if query.page_num < 1 {
        return Err(CatalogError::validation("pageNum", "must be at least 1"));
    }
    Ok(())
}

fn skip_count(query: &BookListQuery) -> usize {
    (query.page_num - 1).saturating_mul(query.page_size)
}
