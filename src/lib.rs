//! # matchcore
//!
//! Single-symbol price-time priority limit order matching engine.
//!
//! ## Architecture
//!
//! The engine consists of:
//! - **Types**: Core data structures (Order, ExecutionReport, fixed-point
//!   price utilities)
//! - **OrderBook**: Direct price-indexed book with slab-based node storage
//! - **Engine**: The matching sweep, cancellation path, and lifecycle
//!
//! ## Design Principles
//!
//! 1. **Determinism**: All operations produce identical results for identical inputs
//! 2. **No Floating Point**: Prices are fixed-point integers (two implied decimals)
//! 3. **Pre-allocated Memory**: Slab pool and flat tables sized once at init
//! 4. **Synchronous Execution**: No async in hot path; callbacks delivered inline
//!
//! ## Contract
//!
//! Four operations: construct (init), [`Engine::limit`], [`Engine::cancel`],
//! drop (teardown), plus one host-provided [`engine::ExecutionHandler`]
//! callback invoked twice per trade. Inputs are trusted per the documented
//! bounds; see `engine::admission` for the validating wrapper.

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Side, ExecutionReport, price utilities
pub mod types;

/// Order book: direct price-indexed sides with slab-based storage
pub mod orderbook;

/// Matching engine: limit sweep, cancel, lifecycle
pub mod engine;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{Engine, ExecutionHandler, OrderError};
pub use orderbook::{Book, BookSide, OrderIndex, OrderNode, PriceLevel};
pub use orderbook::{MAX_LIVE_ORDERS, MAX_TOTAL_ORDERS};
pub use types::{name, ExecutionReport, Name, Order, Side, STRINGLEN};
