//! Shopping cart aggregation model.
//!
//! A [`Cart`] is an owned value advanced through state-transition methods:
//! each mutation consumes the current cart and returns the next one, so there
//! is no hidden shared state. [`CartSession`] wraps one cart per client
//! session and serializes concurrent UI-triggered mutations behind a mutex.
//!
//! All monetary arithmetic uses [`rust_decimal::Decimal`]; two-digit display
//! formatting happens only at presentation time.

use std::num::NonZeroU32;
use std::sync::Mutex;

use rust_decimal::Decimal;
use serde::Serialize;

/// Identifier of the book a line item refers to. The cart holds a weak
/// reference; it does not own the book's lifecycle.
pub type BookId = u64;

/// A request to add a quantity of one book to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCart {
    pub book_id: BookId,
    pub title: String,
    pub price: Decimal,
    pub quantity: NonZeroU32,
}

/// One entry in a cart: a book and the requested quantity.
///
/// `price` is a snapshot taken on the first add of this book; later adds for
/// the same book never overwrite it. `subtotal` is recomputed on every
/// mutation and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    book_id: BookId,
    title: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    subtotal: Decimal,
}

impl CartLineItem {
    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    fn recompute_subtotal(&mut self) {
        self.subtotal = Decimal::from(self.quantity) * self.price;
    }
}

/// Collection of line items, unique by book id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// An empty cart, the starting state of every session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book to the cart, merging with an existing line item for the
    /// same book. Merging sums quantities and keeps the first-seen price, so
    /// a later add never retroactively reprices units already in the cart.
    #[must_use]
    pub fn add(mut self, request: AddToCart) -> Self {
        match self
            .items
            .iter_mut()
            .find(|line| line.book_id == request.book_id)
        {
            Some(line) => {
                line.quantity += request.quantity.get();
                line.recompute_subtotal();
            }
            None => {
                let mut line = CartLineItem {
                    book_id: request.book_id,
                    title: request.title,
                    price: request.price,
                    quantity: request.quantity.get(),
                    subtotal: Decimal::ZERO,
                };
                line.recompute_subtotal();
                self.items.push(line);
            }
        }
        self
    }

    /// Ensure no line item for `book_id` remains. Removing an absent id is a
    /// no-op; unlike book deletion this models "ensure absent", not
    /// "consume exactly one".
    #[must_use]
    pub fn remove(mut self, book_id: BookId) -> Self {
        self.items.retain(|line| line.book_id != book_id);
        self
    }

    /// Reset to the empty cart.
    #[must_use]
    pub fn clear(self) -> Self {
        Self::new()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line subtotals, recomputed on read.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|line| line.subtotal).sum()
    }

    /// Sum of all line quantities, recomputed on read.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

/// One client session's cart behind a mutation queue.
///
/// Concurrent UI actions (two rapid add-to-cart clicks) each apply a whole
/// read-compute-install transition under the lock, so two in-flight merges
/// can never interleave. Carts are never shared across sessions.
pub struct CartSession {
    cart: Mutex<Cart>,
}

impl CartSession {
    /// Start a session with an empty cart.
    pub fn new() -> Self {
        Self {
            cart: Mutex::new(Cart::new()),
        }
    }

    /// Apply a state transition to the session's cart.
    ///
    /// Panics if a previous transition panicked mid-flight: using a cart
    /// after that is a programmer error, not a recoverable condition.
    pub fn apply(&self, transition: impl FnOnce(Cart) -> Cart) {
        let mut guard = self
            .cart
            .lock()
            .expect("cart session used after a panicked mutation");
        let current = std::mem::take(&mut *guard);
        *guard = transition(current);
    }

    /// A point-in-time copy of the cart for rendering.
    pub fn snapshot(&self) -> Cart {
        self.cart
            .lock()
            .expect("cart session used after a panicked mutation")
            .clone()
    }
}

impl Default for CartSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn add(book_id: BookId, price: i64, quantity: u32) -> AddToCart {
        AddToCart {
            book_id,
            title: format!("Book {book_id}"),
            price: Decimal::from(price),
            quantity: qty(quantity),
        }
    }

    #[test]
    fn adding_a_new_book_inserts_a_line_with_computed_subtotal() {
        let cart = Cart::new().add(add(1, 10, 2));

        assert_eq!(cart.items().len(), 1);
        let line = &cart.items()[0];
        assert_eq!(line.quantity(), 2);
        assert_eq!(line.subtotal(), Decimal::from(20));
    }

    #[test]
    fn repeated_adds_merge_and_first_price_wins() {
        let cart = Cart::new().add(add(1, 10, 2)).add(add(1, 999, 3));

        assert_eq!(cart.items().len(), 1);
        let line = &cart.items()[0];
        assert_eq!(line.quantity(), 5);
        assert_eq!(line.price(), Decimal::from(10));
        assert_eq!(line.subtotal(), Decimal::from(50));
    }

    #[test]
    fn removing_an_absent_id_is_a_no_op() {
        let cart = Cart::new().add(add(1, 10, 1));
        let after = cart.clone().remove(99);

        assert_eq!(after, cart);
    }

    #[test]
    fn removing_a_present_id_drops_only_that_line() {
        let cart = Cart::new().add(add(1, 10, 1)).add(add(2, 5, 4)).remove(1);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].book_id(), 2);
    }

    #[test]
    fn clear_resets_to_empty() {
        let cart = Cart::new().add(add(1, 10, 1)).add(add(2, 5, 4)).clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn totals_aggregate_across_lines() {
        let cart = Cart::new().add(add(1, 10, 2)).add(add(2, 5, 3));

        assert_eq!(cart.total(), Decimal::from(35));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn decimal_prices_accumulate_without_drift() {
        // 0.10 added ten times is exactly 1.00, which f64 cannot promise.
        let price = Decimal::new(10, 2);
        let mut cart = Cart::new();
        for _ in 0..10 {
            cart = cart.add(add_with_price(1, price, 1));
        }

        assert_eq!(cart.total(), Decimal::new(100, 2));
    }

    fn add_with_price(book_id: BookId, price: Decimal, quantity: u32) -> AddToCart {
        AddToCart {
            book_id,
            title: format!("Book {book_id}"),
            price,
            quantity: qty(quantity),
        }
    }

    #[test]
    fn session_serializes_transitions() {
        let session = CartSession::new();
        session.apply(|cart| cart.add(add(1, 10, 2)));
        session.apply(|cart| cart.add(add(1, 999, 3)));

        let cart = session.snapshot();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity(), 5);
        assert_eq!(cart.total(), Decimal::from(50));
    }
}
