//! Matching engine module for matchcore.
//!
//! ## Design Principles
//!
//! The matching engine is designed for:
//!
//! 1. **Determinism**: Same input always produces same output
//! 2. **Predictable Latency**: No allocation, no search on the hot path
//! 3. **Synchronous Execution**: Operations run to completion inline
//! 4. **Price-Time Priority**: Best price first, then FIFO
//!
//! ## Matching Rules
//!
//! - **Buy orders** match against asks (lowest price first)
//! - **Sell orders** match against bids (highest price first)
//! - **Partial fills** are supported; residuals rest on the book
//! - **Both counterparties** are notified of every trade via the host
//!   callback
//!
//! ## Example
//!
//! ```
//! use matchcore::engine::Engine;
//! use matchcore::types::{name, ExecutionReport, Order, Side};
//!
//! let mut engine = Engine::new(|report: ExecutionReport| {
//!     assert_eq!(report.price, 100_00);
//! });
//!
//! engine.limit(Order::new(0, Side::Sell, 100_00, 10, name("maker"), name("ACME")));
//! engine.limit(Order::new(0, Side::Buy, 100_00, 10, name("taker"), name("ACME")));
//!
//! assert!(engine.book().is_empty());
//! ```

pub mod admission;
pub mod matcher;

pub use admission::OrderError;
pub use matcher::{Engine, ExecutionHandler};
