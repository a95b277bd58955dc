//! Input admission for hosts outside the trusted-feed contract.
//!
//! The core `limit`/`cancel` path performs no validation: the engine is
//! driven by a controlled feed and treats out-of-contract input as
//! undefined. Hosts that cannot guarantee the documented bounds go through
//! [`Engine::try_limit`], which checks them before touching the book.

use thiserror::Error;

use crate::engine::matcher::{Engine, ExecutionHandler};
use crate::orderbook::MAX_TOTAL_ORDERS;
use crate::types::price;
use crate::types::Order;

/// Rejection reasons for an order that fails admission checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Price falls outside the bookable range
    #[error("price {0} is outside the bookable price range")]
    PriceOutOfRange(u64),

    /// Orders must carry a positive size
    #[error("order size must be positive")]
    ZeroSize,

    /// The per-lifetime identifier space is exhausted
    #[error("order identifier space is exhausted")]
    IdsExhausted,
}

impl<H: ExecutionHandler> Engine<H> {
    /// Validated limit submission.
    ///
    /// Checks the input bounds the unchecked [`Engine::limit`] relies on,
    /// then delegates to it. Rejected orders leave the engine untouched
    /// and consume no identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use matchcore::engine::{Engine, OrderError};
    /// use matchcore::types::{name, ExecutionReport, Order, Side};
    ///
    /// let mut engine = Engine::new(|_: ExecutionReport| {});
    ///
    /// let zero = Order::new(0, Side::Buy, 100_00, 0, name("alice"), name("ACME"));
    /// assert_eq!(engine.try_limit(zero), Err(OrderError::ZeroSize));
    ///
    /// let good = Order::new(0, Side::Buy, 100_00, 10, name("alice"), name("ACME"));
    /// assert_eq!(engine.try_limit(good), Ok(1));
    /// ```
    pub fn try_limit(&mut self, order: Order) -> Result<u64, OrderError> {
        if !price::in_range(order.price) {
            return Err(OrderError::PriceOutOfRange(order.price));
        }
        if order.quantity == 0 {
            return Err(OrderError::ZeroSize);
        }
        if self.next_order_id() > MAX_TOTAL_ORDERS as u64 {
            return Err(OrderError::IdsExhausted);
        }
        Ok(self.limit(order))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
