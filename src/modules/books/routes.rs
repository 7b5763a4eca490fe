//! HTTP surface of the books module.
//!
//! The paths and camelCase field names are the contract the storefront was
//! built against; they are kept verbatim (`/Books/AllBooks`, `bookId`,
//! `totalNumBooks`, ...).

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::json;

use bookstore_http::error::AppError;
use bookstore_store::{Book, BookDraft, BookId, BookStore};

use super::error::CatalogError;
use super::models::{BookListQuery, CatalogPage, SortOrder};
use super::{mutations, query};

type SharedStore = Arc<dyn BookStore>;

/// Build the books router. Mounted under `/Books` by the kernel.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/AllBooks", get(all_books))
        .route("/GetBookCategories", get(get_book_categories))
        .route("/AddBook", post(add_book))
        .route("/UpdateBook/{bookId}", put(update_book))
        .route("/DeleteBook/{bookId}", delete(delete_book))
        .with_state(store)
}

/// Listing parameters extracted by hand because `bookCategories` repeats,
/// which a flat deserializer cannot collect.
pub struct BookListParams(pub BookListQuery);

impl<S> FromRequestParts<S> for BookListParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_list_query(parts.uri.query().unwrap_or("")).map(Self)
    }
}

fn parse_list_query(raw: &str) -> Result<BookListQuery, AppError> {
    let mut list_query = BookListQuery::default();

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "pageSize" => list_query.page_size = parse_positive_int("pageSize", &value)?,
            "pageNum" => list_query.page_num = parse_positive_int("pageNum", &value)?,
            "sortOrder" => list_query.sort_order = SortOrder::parse(&value),
            "bookCategories" | "bookCategories[]" => {
                list_query.categories.push(value.into_owned());
            }
            _ => {}
        }
    }

    Ok(list_query)
}

fn parse_positive_int(field: &'static str, raw: &str) -> Result<usize, AppError> {
    raw.parse::<usize>().map_err(|_| {
        AppError::validation(
            vec![json!({ "field": field, "value": raw })],
            format!("{field} must be a positive integer"),
        )
    })
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation { field, message } => AppError::validation(
                vec![json!({ "field": field })],
                format!("{field} {message}"),
            ),
            CatalogError::NotFound { book_id } => {
                AppError::not_found(format!("Book {book_id} not found"))
            }
            CatalogError::Transient(source) => AppError::unavailable(source.to_string()),
        }
    }
}

/// GET /Books/AllBooks
async fn all_books(
    State(store): State<SharedStore>,
    BookListParams(list_query): BookListParams,
) -> Result<Json<CatalogPage>, AppError> {
    let page = query::list_books(store.as_ref(), &list_query).await?;
    Ok(Json(page))
}

/// GET /Books/GetBookCategories
async fn get_book_categories(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<String>>, AppError> {
    let categories = query::list_categories(store.as_ref()).await?;
    Ok(Json(categories))
}

/// POST /Books/AddBook
async fn add_book(
    State(store): State<SharedStore>,
    payload: Result<Json<BookDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let Json(draft) = payload.map_err(|rejection| {
        AppError::validation(
            vec![json!({ "field": "body", "error": rejection.body_text() })],
            "A book payload is required",
        )
    })?;

    let book = mutations::create_book(store.as_ref(), draft).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /Books/UpdateBook/{bookId}
async fn update_book(
    State(store): State<SharedStore>,
    Path(book_id): Path<BookId>,
    payload: Result<Json<BookDraft>, JsonRejection>,
) -> Result<Json<Book>, AppError> {
    let Json(draft) = payload.map_err(|rejection| {
        AppError::validation(
            vec![json!({ "field": "body", "error": rejection.body_text() })],
            "A book payload is required",
        )
    })?;

    let book = mutations::update_book(store.as_ref(), book_id, draft).await?;
    Ok(Json(book))
}

/// DELETE /Books/DeleteBook/{bookId}
async fn delete_book(
    State(store): State<SharedStore>,
    Path(book_id): Path<BookId>,
) -> Result<StatusCode, AppError> {
    mutations::delete_book(store.as_ref(), book_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use bookstore_store::MemoryBookStore;
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use tower::util::ServiceExt;

    fn draft_json(title: &str, category: &str) -> serde_json::Value {
        json!({
            "title": title,
            "author": "Author",
            "publisher": "Publisher",
            "isbn": "978-0000000000",
            "category": category,
            "classification": "Fiction",
            "pageCount": 100,
            "price": 9.99
        })
    }

    fn seeded_router(titles_and_categories: &[(&str, &str)]) -> Router {
        let store = MemoryBookStore::with_books(titles_and_categories.iter().map(
            |(title, category)| BookDraft {
                title: title.to_string(),
                author: "Author".to_string(),
                publisher: "Publisher".to_string(),
                isbn: "978-0000000000".to_string(),
                category: category.to_string(),
                classification: "Fiction".to_string(),
                page_count: 100,
                price: Decimal::new(999, 2),
            },
        ));
        router(Arc::new(store))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn all_books_pages_and_counts() {
        let app = seeded_router(&[
            ("Cherry", "Classic"),
            ("Apple", "Classic"),
            ("Banana", "Biography"),
        ]);

        let response = app
            .oneshot(
                Request::get("/AllBooks?pageSize=2&pageNum=1&sortOrder=asc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["totalNumBooks"], 3);
        assert_eq!(body["books"][0]["title"], "Apple");
        assert_eq!(body["books"][1]["title"], "Banana");
        assert_eq!(body["books"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn all_books_filters_on_repeated_book_categories() {
        let app = seeded_router(&[
            ("A", "Classic"),
            ("B", "Biography"),
            ("C", "Business"),
            ("D", "Classic"),
        ]);

        let response = app
            .oneshot(
                Request::get("/AllBooks?bookCategories=Classic&bookCategories=Business")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["totalNumBooks"], 3);
    }

    #[tokio::test]
    async fn all_books_rejects_non_numeric_page_size() {
        let app = seeded_router(&[("A", "Classic")]);

        let response = app
            .oneshot(
                Request::get("/AllBooks?pageSize=lots")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["details"][0]["field"], "pageSize");
    }

    #[tokio::test]
    async fn all_books_rejects_zero_page_num() {
        let app = seeded_router(&[("A", "Classic")]);

        let response = app
            .oneshot(
                Request::get("/AllBooks?pageNum=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_book_categories_lists_distinct_values() {
        let app = seeded_router(&[("A", "Classic"), ("B", "Biography"), ("C", "Classic")]);

        let response = app
            .oneshot(
                Request::get("/GetBookCategories")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let mut categories: Vec<String> = serde_json::from_value(body).unwrap();
        categories.sort();
        assert_eq!(categories, vec!["Biography", "Classic"]);
    }

    #[tokio::test]
    async fn add_book_returns_created_record() {
        let app = seeded_router(&[]);

        let response = app
            .oneshot(
                Request::post("/AddBook")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(draft_json("New Book", "Classic").to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["bookId"], 1);
        assert_eq!(body["title"], "New Book");
    }

    #[tokio::test]
    async fn add_book_without_body_is_bad_request() {
        let app = seeded_router(&[]);

        let response = app
            .oneshot(
                Request::post("/AddBook")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_book_replaces_record() {
        let app = seeded_router(&[("Old", "Classic")]);

        let response = app
            .oneshot(
                Request::put("/UpdateBook/1")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(draft_json("New", "Biography").to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["bookId"], 1);
        assert_eq!(body["title"], "New");
        assert_eq!(body["category"], "Biography");
    }

    #[tokio::test]
    async fn update_unknown_book_is_not_found() {
        let app = seeded_router(&[("Only", "Classic")]);

        let response = app
            .oneshot(
                Request::put("/UpdateBook/42")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(draft_json("X", "Classic").to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Book 42 not found");
    }

    #[tokio::test]
    async fn delete_book_is_no_content_then_not_found() {
        let app = seeded_router(&[("A", "Classic")]);

        let response = app
            .clone()
            .oneshot(Request::delete("/DeleteBook/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(Request::delete("/DeleteBook/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
