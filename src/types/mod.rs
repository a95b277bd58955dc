//! Core data types for the matchcore engine
//!
//! All types implement SSZ serialization for deterministic encoding.
//! Prices are fixed-point integers with two implied decimals; sizes are
//! whole share counts.
//!
//! ## Types
//!
//! - [`Order`]: A limit order
//! - [`Side`]: Buy or Sell
//! - [`ExecutionReport`]: The per-counterparty trade notification
//! - [`Name`]: Fixed-length opaque trader/symbol payload

mod order;
mod report;
pub mod price;

// Re-export all types at module level
pub use order::{name, name_to_string, Name, Order, Side, STRINGLEN};
pub use report::ExecutionReport;
