//! Execution report delivered to the host callback.
//!
//! ## SSZ Serialization
//!
//! Reports are serialized using SSZ for deterministic encoding, so a host
//! that journals the callback stream gets byte-identical logs across runs.

use ssz_rs::prelude::*;

use crate::types::order::{Name, Side};

/// A notification to one counterparty of a trade.
///
/// Two reports are emitted per trade, one naming the buyer and one naming
/// the seller. The `trader` and `side` fields identify the counterparty
/// being notified; `price` is the trade price (always the resting order's
/// price) and `size` is the traded quantity.
///
/// ## Example
///
/// ```
/// use matchcore::types::{name, ExecutionReport, Side};
///
/// let report = ExecutionReport::new(
///     name("ACME"),
///     name("alice"),
///     Side::Buy,
///     100_00,   // $100.00
///     10,       // 10 shares
/// );
/// assert_eq!(report.side(), Side::Buy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct ExecutionReport {
    /// Symbol, copied verbatim from the matched orders
    pub symbol: Name,

    /// Trader being notified, copied verbatim from their order
    pub trader: Name,

    /// The notified counterparty's side as u8 (0=Buy, 1=Sell)
    pub side_raw: u8,

    /// Trade price in fixed-point (two implied decimals)
    /// Always the resting order's price
    pub price: u64,

    /// Traded quantity in shares
    pub size: u64,
}

impl ExecutionReport {
    /// Create a new execution report
    ///
    /// # Arguments
    ///
    /// * `symbol` - Symbol payload, copied verbatim
    /// * `trader` - The notified counterparty's trader payload
    /// * `side` - The notified counterparty's side
    /// * `price` - Trade price (the resting order's price)
    /// * `size` - Traded quantity
    pub fn new(symbol: Name, trader: Name, side: Side, price: u64, size: u64) -> Self {
        Self {
            symbol,
            trader,
            side_raw: side.to_u8(),
            price,
            size,
        }
    }

    /// Get the notified counterparty's side
    pub fn side(&self) -> Side {
        Side::from_u8(self.side_raw).unwrap_or(Side::Buy)
    }

    /// Calculate the notional value of this trade (price * size)
    ///
    /// The result carries the price's two implied decimals.
    pub fn notional_raw(&self) -> u128 {
        (self.price as u128) * (self.size as u128)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
