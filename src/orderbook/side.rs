//! One side of the book: a direct price-indexed array of levels plus a
//! best-price cursor.
//!
//! ## Design
//!
//! The bookable price range is small and dense (see `types::price`), so each
//! side holds one [`PriceLevel`] slot per discrete price, indexed by the raw
//! price value. Stepping one tick toward a worse price is an integer
//! decrement; no sorted container is needed.
//!
//! ## Best Cursor
//!
//! `best` tracks the extremal non-empty price: highest for the buy side,
//! lowest for the sell side. Resting an improving order moves the cursor
//! directly; emptying the best level advances it toward worse prices until
//! it lands on a non-empty level or the side is empty. The cursor is valid
//! on every public method return.

use slab::Slab;

use crate::orderbook::{OrderNode, PriceLevel};
use crate::types::price::{MAX_PRICE, MIN_PRICE, PRICE_SLOTS};
use crate::types::Side;

/// One side (bids or asks) of the order book.
pub struct BookSide {
    /// Which side this is; determines price ordering
    side: Side,

    /// One level slot per discrete price, indexed by raw price value
    levels: Box<[PriceLevel]>,

    /// Extremal non-empty price, or None if the side is empty
    best: Option<u64>,

    /// Total resting orders across all levels
    order_count: usize,
}

impl BookSide {
    /// Create an empty side with all level slots allocated up front.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: vec![PriceLevel::default(); PRICE_SLOTS].into_boxed_slice(),
            best: None,
            order_count: 0,
        }
    }

    /// Which side this is
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// The best price, or None if the side is empty
    #[inline]
    pub fn best_price(&self) -> Option<u64> {
        self.best
    }

    /// Total resting orders on this side
    #[inline]
    pub fn order_count(&self) -> usize {
        self.order_count
    }

    /// Check if the side has no resting orders
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Access the level at a price
    #[inline]
    pub fn level(&self, price: u64) -> &PriceLevel {
        &self.levels[price as usize]
    }

    /// Mutable access to the level at a price
    #[inline]
    pub fn level_mut(&mut self, price: u64) -> &mut PriceLevel {
        &mut self.levels[price as usize]
    }

    /// The oldest resting order's slab key at a price, or None if the level
    /// is empty
    #[inline]
    pub fn head_at(&self, price: u64) -> Option<usize> {
        self.levels[price as usize].peek_head()
    }

    /// Rest an order at its price, preserving time priority within the
    /// level and moving the best cursor if the price improves it.
    pub fn rest(&mut self, key: usize, price: u64, slab: &mut Slab<OrderNode>) {
        self.levels[price as usize].push_back(key, slab);
        self.order_count += 1;

        let improves = match self.best {
            None => true,
            Some(best) => match self.side {
                Side::Buy => price > best,
                Side::Sell => price < best,
            },
        };
        if improves {
            self.best = Some(price);
        }
    }

    /// Unlink a specific order from its level in O(1).
    ///
    /// Advances the best cursor if the unlink emptied the best level.
    ///
    /// # Returns
    ///
    /// The remaining quantity of the removed order
    pub fn unlink(&mut self, key: usize, price: u64, slab: &mut Slab<OrderNode>) -> u64 {
        let quantity = self.levels[price as usize].remove(key, slab);
        self.order_count -= 1;

        if self.levels[price as usize].is_empty() && self.best == Some(price) {
            self.advance_best();
        }

        quantity
    }

    /// Advance the best cursor toward worse prices until it lands on a
    /// non-empty level, or clear it if the side is exhausted.
    ///
    /// Levels better than `best` are empty by construction, so the scan
    /// only ever moves toward worse prices.
    pub fn advance_best(&mut self) {
        let Some(mut price) = self.best else {
            return;
        };

        loop {
            if !self.levels[price as usize].is_empty() {
                self.best = Some(price);
                return;
            }
            match self.side {
                Side::Buy => {
                    if price <= MIN_PRICE {
                        self.best = None;
                        return;
                    }
                    price -= 1;
                }
                Side::Sell => {
                    if price >= MAX_PRICE {
                        self.best = None;
                        return;
                    }
                    price += 1;
                }
            }
        }
    }

    /// Empty the side: all levels cleared, cursor reset.
    ///
    /// Does not touch the slab; the caller owns node reclamation.
    pub fn clear(&mut self) {
        for level in self.levels.iter_mut() {
            *level = PriceLevel::default();
        }
        self.best = None;
        self.order_count = 0;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
