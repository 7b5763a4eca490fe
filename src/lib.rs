//! Bookstore Application Library
//!
//! Catalog modules and wiring for the bookstore service. The shopping cart
//! has no wire protocol; the presentation layer consumes it in-process
//! through the [`cart`] re-export.

pub mod modules;

pub use bookstore_cart as cart;
