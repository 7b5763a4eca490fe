//! Sample catalog used to seed the in-memory store for local runs.

use rust_decimal::Decimal;

use crate::model::BookDraft;

fn book(
    title: &str,
    author: &str,
    publisher: &str,
    isbn: &str,
    category: &str,
    classification: &str,
    page_count: u32,
    price_cents: i64,
) -> BookDraft {
    BookDraft {
        title: title.to_string(),
        author: author.to_string(),
        publisher: publisher.to_string(),
        isbn: isbn.to_string(),
        category: category.to_string(),
        classification: classification.to_string(),
        page_count,
        price: Decimal::new(price_cents, 2),
    }
}

/// The sample catalog the original application shipped pre-populated.
pub fn seed_catalog() -> Vec<BookDraft> {
    vec![
        book(
            "Les Misérables",
            "Victor Hugo",
            "Signet",
            "978-0451419439",
            "Classic",
            "Fiction",
            1488,
            995,
        ),
        book(
            "Team of Rivals",
            "Doris Kearns Goodwin",
            "Simon & Schuster",
            "978-0743270755",
            "Biography",
            "Non-Fiction",
            944,
            1495,
        ),
        book(
            "The Snowball",
            "Alice Schroeder",
            "Bantam",
            "978-0553384611",
            "Biography",
            "Non-Fiction",
            832,
            2195,
        ),
        book(
            "American Ulysses",
            "Ronald C. White",
            "Random House",
            "978-0812981254",
            "Biography",
            "Non-Fiction",
            864,
            1195,
        ),
        book(
            "Unbroken",
            "Laura Hillenbrand",
            "Random House",
            "978-0812974492",
            "Historical",
            "Non-Fiction",
            528,
            1283,
        ),
        book(
            "The Great Divorce",
            "C.S. Lewis",
            "HarperOne",
            "978-0060652951",
            "Classic",
            "Fiction",
            160,
            919,
        ),
        book(
            "The Screwtape Letters",
            "C.S. Lewis",
            "HarperOne",
            "978-0060652937",
            "Classic",
            "Fiction",
            224,
            1025,
        ),
        book(
            "Mere Christianity",
            "C.S. Lewis",
            "HarperOne",
            "978-0060652920",
            "Christian Books",
            "Non-Fiction",
            256,
            1099,
        ),
        book(
            "Deep Work",
            "Cal Newport",
            "Grand Central Publishing",
            "978-1455586691",
            "Self-Help",
            "Non-Fiction",
            304,
            1499,
        ),
        book(
            "It's Your Ship",
            "Michael Abrashoff",
            "Grand Central Publishing",
            "978-1455523023",
            "Business",
            "Non-Fiction",
            240,
            2698,
        ),
        book(
            "The Virgin Way",
            "Richard Branson",
            "Portfolio",
            "978-1591847984",
            "Business",
            "Non-Fiction",
            400,
            1598,
        ),
        book(
            "Sycamore Row",
            "John Grisham",
            "Dell",
            "978-0553393613",
            "Thrillers",
            "Fiction",
            642,
            1550,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_no_duplicate_isbns() {
        let catalog = seed_catalog();
        let mut isbns: Vec<_> = catalog.iter().map(|b| b.isbn.clone()).collect();
        isbns.sort();
        isbns.dedup();
        assert_eq!(isbns.len(), catalog.len());
    }

    #[test]
    fn seed_catalog_prices_are_positive() {
        for draft in seed_catalog() {
            assert!(draft.price > rust_decimal::Decimal::ZERO, "{}", draft.title);
        }
    }
}
