use serde::Serialize;

pub use bookstore_store::model::{Book, BookDraft, BookId};

/// Number of books per page when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction over book titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the literal `"desc"` selects descending; any other value sorts
    /// ascending, matching how the storefront has always sent this flag.
    pub fn parse(raw: &str) -> Self {
        if raw == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Paging, sorting, and filter parameters for one catalog listing request.
/// Ephemeral; never persisted.
#[derive(Debug, Clone)]
pub struct BookListQuery {
    /// Page length; must be at least 1.
    pub page_size: usize,
    /// 1-based page number; must be at least 1.
    pub page_num: usize,
    pub sort_order: SortOrder,
    /// Categories to retain, exact membership. Empty means unfiltered.
    pub categories: Vec<String>,
}

impl Default for BookListQuery {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_num: 1,
            sort_order: SortOrder::default(),
            categories: Vec::new(),
        }
    }
}

/// One page of catalog results.
///
/// `total_num_books` counts the whole filtered set regardless of the page
/// window, so clients can derive `ceil(totalNumBooks / pageSize)` pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub books: Vec<Book>,
    pub total_num_books: usize,
}
