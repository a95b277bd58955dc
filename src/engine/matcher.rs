//! The matching engine: limit submission, the crossing sweep, and cancel.
//!
//! ## Matching Rules
//!
//! - An incoming buy crosses while its price >= the best ask
//! - An incoming sell crosses while its price <= the best bid
//! - The sweep consumes the opposing best level head-first (price-time
//!   priority) and continues across levels until the incoming order is
//!   exhausted or the cross predicate fails
//! - The trade price is always the resting order's price
//! - Any unfilled residual rests on the submitting side
//!
//! ## Execution Reports
//!
//! Every trade notifies both counterparties through the host's
//! [`ExecutionHandler`], invoked inline from within `limit`. The handler
//! must not call back into the engine.

use crate::orderbook::Book;
use crate::types::{ExecutionReport, Order, Side};

/// Host-provided sink for execution reports.
///
/// Implemented for any `FnMut(ExecutionReport)` closure, so the callback
/// inlines into the matching sweep:
///
/// ```
/// use matchcore::engine::Engine;
/// use matchcore::types::{name, ExecutionReport, Order, Side};
///
/// let mut engine = Engine::new(|report: ExecutionReport| {
///     let _ = report.size; // deliver to the session layer
/// });
/// engine.limit(Order::new(0, Side::Buy, 100_00, 10, name("alice"), name("ACME")));
/// ```
pub trait ExecutionHandler {
    /// Receive one counterparty's notification of a trade.
    ///
    /// Called twice per trade, once per counterparty, in unspecified order.
    fn execution(&mut self, report: ExecutionReport);
}

impl<F: FnMut(ExecutionReport)> ExecutionHandler for F {
    fn execution(&mut self, report: ExecutionReport) {
        self(report)
    }
}

/// Single-symbol price-time priority matching engine.
///
/// Owns the book, the monotonic identifier counter, and the host's
/// execution handler. All operations run to completion synchronously on
/// the calling thread.
///
/// ## Lifecycle
///
/// Construction is initialization: the counter starts at 1 and the book is
/// empty. [`Engine::reset`] restores exactly that state; dropping the
/// engine and constructing a new one is equivalent.
///
/// ## Example
///
/// ```
/// use matchcore::engine::Engine;
/// use matchcore::types::{name, ExecutionReport, Order, Side};
///
/// let mut engine = Engine::new(|_: ExecutionReport| {});
///
/// let bid = engine.limit(Order::new(0, Side::Buy, 100_00, 10, name("alice"), name("ACME")));
/// assert_eq!(bid, 1);
/// assert_eq!(engine.book().best_bid(), Some(100_00));
///
/// engine.cancel(bid);
/// assert!(engine.book().is_empty());
/// ```
pub struct Engine<H: ExecutionHandler> {
    /// The resting order book
    book: Book,

    /// Host execution report sink
    handler: H,

    /// Next identifier to assign (monotonic from 1 per lifetime)
    next_order_id: u64,
}

impl<H: ExecutionHandler> Engine<H> {
    /// Initialize an engine: empty book, identifier counter at 1.
    ///
    /// All fixed-size structures are allocated here; `limit` and `cancel`
    /// do not allocate within the documented bounds.
    pub fn new(handler: H) -> Self {
        Self {
            book: Book::new(),
            handler,
            next_order_id: 1,
        }
    }

    /// Read access to the resting book
    #[inline]
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Read access to the host handler
    #[inline]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The identifier the next `limit` call will return
    #[inline]
    pub fn next_order_id(&self) -> u64 {
        self.next_order_id
    }

    /// Restore the freshly-initialized state: empty book, counter at 1.
    ///
    /// Indistinguishable from dropping the engine and constructing a new
    /// one with the same handler.
    pub fn reset(&mut self) {
        self.book.clear();
        self.next_order_id = 1;
    }

    /// Submit a limit order.
    ///
    /// Assigns the next identifier, sweeps the opposing side while the
    /// order crosses, emits paired execution reports for every trade, and
    /// rests any unfilled residual on the submitting side.
    ///
    /// The input's `id` field is ignored; the assigned identifier is
    /// returned whether or not the order rests. An order that fully fills
    /// on arrival returns an identifier that will never match a cancel.
    ///
    /// # Returns
    ///
    /// The assigned order identifier
    pub fn limit(&mut self, mut order: Order) -> u64 {
        let id = self.next_order_id;
        self.next_order_id += 1;
        order.id = id;

        let side = order.side();
        let opposing = side.opposite();

        while order.remaining > 0 {
            let Some(best) = self.book.best_price(opposing) else {
                break;
            };
            let crosses = match side {
                Side::Buy => order.price >= best,
                Side::Sell => order.price <= best,
            };
            if !crosses {
                break;
            }

            let Some(key) = self.book.head_at(opposing, best) else {
                break;
            };

            let (traded, resting_filled, resting_report) = {
                let resting = self.book.order(key);
                let traded = order.remaining.min(resting.remaining);
                (
                    traded,
                    traded == resting.remaining,
                    ExecutionReport::new(resting.symbol, resting.trader, opposing, best, traded),
                )
            };
            let incoming_report =
                ExecutionReport::new(order.symbol, order.trader, side, best, traded);

            // Passive counterparty first, then the aggressor. Hosts must
            // not depend on this order.
            self.handler.execution(resting_report);
            self.handler.execution(incoming_report);

            order.remaining -= traded;
            if resting_filled {
                self.book.remove_filled(key);
            } else {
                self.book.reduce(key, traded);
            }
        }

        if order.remaining > 0 {
            self.book.rest(order);
        }

        id
    }

    /// Cancel a resting order by identifier.
    ///
    /// Unknown, already-cancelled, and fully-filled identifiers are silent
    /// no-ops. No execution report is emitted.
    pub fn cancel(&mut self, id: u64) {
        self.book.cancel(id);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
