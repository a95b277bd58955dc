//! The order book: node pool, two sides, and the id index.
//!
//! ## Architecture
//!
//! The book combines three structures for predictable O(1) operations:
//!
//! - **Slab**: Pre-allocated node storage, sized for the live-order bound
//! - **BookSide x2**: Direct price-indexed level arrays with best cursors
//! - **OrderIndex**: Flat id table for O(1) cancel
//!
//! ## Price Ordering
//!
//! - **Bids** (buy orders): best = highest non-empty price
//! - **Asks** (sell orders): best = lowest non-empty price
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - Keys are reused after removal
//! - O(1) insert, remove, and lookup
//!
//! All memory is sized at construction; resting and cancelling orders
//! within the live-order bound does not allocate.
//!
//! ## Example
//!
//! ```
//! use matchcore::orderbook::Book;
//! use matchcore::types::{name, Order, Side};
//!
//! let mut book = Book::new();
//!
//! book.rest(Order::new(1, Side::Buy, 100_00, 10, name("alice"), name("ACME")));
//! book.rest(Order::new(2, Side::Sell, 101_00, 10, name("bob"), name("ACME")));
//!
//! assert_eq!(book.best_bid(), Some(100_00));
//! assert_eq!(book.best_ask(), Some(101_00));
//! assert_eq!(book.spread(), Some(1_00));
//! ```

use sha2::{Digest, Sha256};
use slab::Slab;

use crate::orderbook::{BookSide, OrderIndex, OrderNode, MAX_LIVE_ORDERS};
use crate::types::price::{MAX_PRICE, MIN_PRICE};
use crate::types::{Order, Side};

/// Single-symbol limit order book.
pub struct Book {
    /// Pre-allocated order node storage
    pool: Slab<OrderNode>,

    /// Buy side (best = highest price)
    bids: BookSide,

    /// Sell side (best = lowest price)
    asks: BookSide,

    /// Order id to slab key mapping (for O(1) cancel)
    index: OrderIndex,
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}

impl Book {
    /// Create an empty book sized for the live-order bound.
    pub fn new() -> Self {
        Self::with_capacity(MAX_LIVE_ORDERS)
    }

    /// Create an empty book with a specific node pool capacity.
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            pool: Slab::with_capacity(order_capacity),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            index: OrderIndex::new(),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the node pool capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Get the total number of resting orders in the book
    #[inline]
    pub fn order_count(&self) -> usize {
        self.pool.len()
    }

    /// Get the number of resting bid orders
    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bids.order_count()
    }

    /// Get the number of resting ask orders
    #[inline]
    pub fn ask_count(&self) -> usize {
        self.asks.order_count()
    }

    /// Check if the book is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    // ========================================================================
    // Best Bid/Ask
    // ========================================================================

    /// Get the best bid price (highest buy price), or None if no bids
    #[inline]
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.best_price()
    }

    /// Get the best ask price (lowest sell price), or None if no asks
    #[inline]
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.best_price()
    }

    /// Get the best price on one side
    #[inline]
    pub fn best_price(&self, side: Side) -> Option<u64> {
        self.side(side).best_price()
    }

    /// Get the spread (best_ask - best_bid), or None if either side is empty
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if ask >= bid => Some(ask - bid),
            _ => None,
        }
    }

    // ========================================================================
    // Side and Queue Access
    // ========================================================================

    /// Get a reference to one side of the book
    #[inline]
    pub fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// The oldest resting order's slab key at a price on one side
    #[inline]
    pub fn head_at(&self, side: Side, price: u64) -> Option<usize> {
        self.side(side).head_at(price)
    }

    /// Get the order stored under a slab key
    ///
    /// # Panics
    ///
    /// Panics if the key is vacant; callers hold keys only for live nodes.
    #[inline]
    pub fn order(&self, key: usize) -> &Order {
        &self.pool[key].order
    }

    /// Get an order by slab key, or None if the key is vacant
    #[inline]
    pub fn get_order(&self, key: usize) -> Option<&Order> {
        self.pool.get(key).map(|node| &node.order)
    }

    /// Look up a resting order by its identifier
    #[inline]
    pub fn find(&self, id: u64) -> Option<&Order> {
        self.index.get(id).and_then(|key| self.get_order(key))
    }

    /// Check if an order is resting
    #[inline]
    pub fn contains_order(&self, id: u64) -> bool {
        self.index.contains(id)
    }

    /// Iterate the FIFO queue at one price level, head (oldest) first.
    pub fn queue(&self, side: Side, price: u64) -> impl Iterator<Item = &Order> + '_ {
        let mut next = self.side(side).head_at(price);
        std::iter::from_fn(move || {
            let key = next?;
            let node = &self.pool[key];
            next = node.next;
            Some(&node.order)
        })
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Rest an order on its side of the book and register it in the index.
    ///
    /// The order's id must already be assigned. Appends at the tail of the
    /// level queue, preserving time priority.
    ///
    /// # Returns
    ///
    /// The slab key for the rested order
    pub fn rest(&mut self, order: Order) -> usize {
        let id = order.id;
        let price = order.price;
        let side = order.side();

        let key = self.pool.insert(OrderNode::new(order));

        let (book_side, pool) = self.side_and_pool(side);
        book_side.rest(key, price, pool);

        self.index.insert(id, key);
        key
    }

    /// Cancel a resting order by identifier.
    ///
    /// Unknown, already-cancelled, and fully-filled identifiers are silent
    /// no-ops. Advances the side's best cursor if the cancel emptied the
    /// best level.
    ///
    /// # Returns
    ///
    /// The cancelled order, or None if the id was not resting
    pub fn cancel(&mut self, id: u64) -> Option<Order> {
        let key = self.index.remove(id)?;

        let (price, side) = {
            let order = &self.pool[key].order;
            (order.price, order.side())
        };

        let (book_side, pool) = self.side_and_pool(side);
        book_side.unlink(key, price, pool);

        Some(self.pool.remove(key).order)
    }

    /// Apply a partial fill to a resting order.
    ///
    /// The order stays queued; only its remaining size and the level's
    /// total shrink.
    pub fn reduce(&mut self, key: usize, quantity: u64) {
        let (price, side) = {
            let order = &mut self.pool[key].order;
            order.fill(quantity);
            (order.price, order.side())
        };

        match side {
            Side::Buy => self.bids.level_mut(price).reduce_quantity(quantity),
            Side::Sell => self.asks.level_mut(price).reduce_quantity(quantity),
        }
    }

    /// Remove a fully-filled resting order.
    ///
    /// Unlinks the node, drops its index entry, and returns the node slot
    /// to the pool. Advances the best cursor if the fill emptied the best
    /// level.
    pub fn remove_filled(&mut self, key: usize) {
        let (id, price, side) = {
            let order = &self.pool[key].order;
            (order.id, order.price, order.side())
        };

        let (book_side, pool) = self.side_and_pool(side);
        book_side.unlink(key, price, pool);

        self.index.remove(id);
        self.pool.remove(key);
    }

    /// Clear all orders from the book
    pub fn clear(&mut self) {
        self.pool.clear();
        self.bids.clear();
        self.asks.clear();
        self.index.clear();
    }

    // ========================================================================
    // State Digest
    // ========================================================================

    /// Compute a deterministic digest of the resting book state.
    ///
    /// Hashes the SSZ encoding of every resting order in canonical order:
    /// asks from best upward, then bids from best downward, FIFO within
    /// each level. Two books with identical resting state produce the same
    /// root regardless of the operation history that built them.
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        if let Some(best) = self.asks.best_price() {
            for price in best..=MAX_PRICE {
                self.hash_level(&mut hasher, Side::Sell, price);
            }
        }
        if let Some(best) = self.bids.best_price() {
            for price in (MIN_PRICE..=best).rev() {
                self.hash_level(&mut hasher, Side::Buy, price);
            }
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        root
    }

    fn hash_level(&self, hasher: &mut Sha256, side: Side, price: u64) {
        for order in self.queue(side, price) {
            let bytes =
                ssz_rs::serialize(order).expect("fixed-size order encoding cannot fail");
            hasher.update(&bytes);
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Split-borrow one side together with the node pool.
    fn side_and_pool(&mut self, side: Side) -> (&mut BookSide, &mut Slab<OrderNode>) {
        match side {
            Side::Buy => (&mut self.bids, &mut self.pool),
            Side::Sell => (&mut self.asks, &mut self.pool),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
