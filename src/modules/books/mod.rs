pub mod error;
pub mod models;
pub mod mutations;
pub mod query;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use serde_json::json;

use bookstore_kernel::{InitCtx, Module};
use bookstore_store::{seed, BookStore};

/// Books module: catalog queries and mutations over the book record store.
pub struct BooksModule {
    store: Arc<dyn BookStore>,
}

impl BooksModule {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    fn base_path(&self) -> &'static str {
        "/Books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );

        if ctx.settings.store.seed && self.store.all().await?.is_empty() {
            let catalog = seed::seed_catalog();
            let count = catalog.len();
            for draft in catalog {
                self.store.insert(draft).await?;
            }
            tracing::info!(module = self.name(), count, "seeded sample catalog");
        }

        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/AllBooks": {
                    "get": {
                        "summary": "List books with paging, sorting, and category filters",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "pageSize",
                                "in": "query",
                                "schema": { "type": "integer", "default": 10 }
                            },
                            {
                                "name": "pageNum",
                                "in": "query",
                                "schema": { "type": "integer", "default": 1 }
                            },
                            {
                                "name": "sortOrder",
                                "in": "query",
                                "schema": { "type": "string", "enum": ["asc", "desc"], "default": "asc" }
                            },
                            {
                                "name": "bookCategories",
                                "in": "query",
                                "schema": { "type": "array", "items": { "type": "string" } },
                                "explode": true
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "One page of the catalog",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/BookList" }
                                    }
                                }
                            },
                            "400": {
                                "description": "Invalid paging parameters",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/GetBookCategories": {
                    "get": {
                        "summary": "Distinct book categories",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Category names",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "type": "string" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/AddBook": {
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookPayload" }
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "Created book",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            },
                            "400": {
                                "description": "Missing or invalid payload",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/UpdateBook/{bookId}": {
                    "put": {
                        "summary": "Replace all fields of a book",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "bookId",
                                "in": "path",
                                "required": true,
                                "schema": { "type": "integer" }
                            }
                        ],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookPayload" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Updated book",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            },
                            "404": {
                                "description": "Unknown book id",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/DeleteBook/{bookId}": {
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "bookId",
                                "in": "path",
                                "required": true,
                                "schema": { "type": "integer" }
                            }
                        ],
                        "responses": {
                            "204": { "description": "Deleted" },
                            "404": {
                                "description": "Unknown book id",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "bookId": { "type": "integer" },
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "publisher": { "type": "string" },
                            "isbn": { "type": "string" },
                            "category": { "type": "string" },
                            "classification": { "type": "string" },
                            "pageCount": { "type": "integer" },
                            "price": { "type": "number" }
                        },
                        "required": ["bookId", "title", "author", "publisher", "isbn", "category", "classification", "pageCount", "price"]
                    },
                    "BookPayload": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "publisher": { "type": "string" },
                            "isbn": { "type": "string" },
                            "category": { "type": "string" },
                            "classification": { "type": "string" },
                            "pageCount": { "type": "integer" },
                            "price": { "type": "number" }
                        },
                        "required": ["title", "author", "publisher", "isbn", "category", "classification", "pageCount", "price"]
                    },
                    "BookList": {
                        "type": "object",
                        "properties": {
                            "books": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Book" }
                            },
                            "totalNumBooks": { "type": "integer" }
                        },
                        "required": ["books", "totalNumBooks"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module(store: Arc<dyn BookStore>) -> Arc<dyn Module> {
    Arc::new(BooksModule::new(store))
}
