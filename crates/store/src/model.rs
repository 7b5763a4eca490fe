use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a book by the store. Immutable once created.
pub type BookId = u64;

/// A catalog book record.
///
/// Field names follow the wire contract (camelCase). `price` is exact
/// decimal internally and a plain JSON number on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier for the book
    pub book_id: BookId,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Publisher of the book
    pub publisher: String,
    /// ISBN as a string; ISBNs are identifiers, not numbers
    pub isbn: String,
    /// Category used for filtering and grouping
    pub category: String,
    /// Shelving classification
    pub classification: String,
    /// Number of pages
    pub page_count: u32,
    /// List price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Book fields without an identity; used for create and whole-record update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub category: String,
    pub classification: String,
    pub page_count: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl BookDraft {
    /// Attach an identity to the draft, producing a full record.
    pub fn into_book(self, book_id: BookId) -> Book {
        Book {
            book_id,
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            isbn: self.isbn,
            category: self.category,
            classification: self.classification,
            page_count: self.page_count,
            price: self.price,
        }
    }
}
