//! Order types for the matchcore engine.
//!
//! ## SSZ Serialization
//!
//! All types derive `SimpleSerialize` from ssz_rs for deterministic encoding.
//! Per the SSZ spec (ethereum.org):
//! - Basic types (u64, u8): Direct little-endian encoding
//! - Fixed-size composites: Concatenated little-endian fields
//!
//! ## Opaque Payloads
//!
//! Trader and symbol fields are fixed-length byte strings of [`STRINGLEN`]
//! bytes. The engine never interprets them; they are copied verbatim into
//! execution reports.

use ssz_rs::prelude::*;

// Note: price constants (MIN_PRICE, MAX_PRICE, SCALE) live in price.rs

/// Length in bytes of the trader and symbol payload fields.
pub const STRINGLEN: usize = 32;

/// A fixed-length, zero-padded byte string (trader name or symbol).
///
/// Not necessarily valid UTF-8 and not necessarily null-terminated; the
/// engine treats it as opaque bytes.
pub type Name = [u8; STRINGLEN];

/// Build a [`Name`] from a string slice, truncating at [`STRINGLEN`] bytes
/// and zero-padding the rest.
///
/// # Example
///
/// ```
/// use matchcore::types::{name, STRINGLEN};
///
/// let n = name("alice");
/// assert_eq!(&n[..5], b"alice");
/// assert_eq!(n[5], 0);
/// assert_eq!(n.len(), STRINGLEN);
/// ```
pub fn name(s: &str) -> Name {
    let mut out = [0u8; STRINGLEN];
    let bytes = s.as_bytes();
    let len = bytes.len().min(STRINGLEN);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

/// Render a [`Name`] for display, dropping trailing zero padding.
pub fn name_to_string(n: &Name) -> String {
    let end = n.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&n[..end]).into_owned()
}

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy (bid) or Sell (ask)
///
/// Represented as u8 for SSZ compatibility:
/// - Buy = 0
/// - Sell = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid) - wants to purchase the asset
    #[default]
    Buy,
    /// Sell order (ask) - wants to sell the asset
    Sell,
}

impl Side {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit order.
///
/// ## Fields
///
/// Prices are fixed-point integers with two implied decimals (see
/// `types::price`); sizes are whole share counts. The engine assigns `id`
/// on submission and decrements `remaining` as the order fills.
///
/// ## Example
///
/// ```
/// use matchcore::types::{name, Order, Side};
///
/// // Bid for 10 shares of ACME at $100.00
/// let order = Order::new(0, Side::Buy, 100_00, 10, name("alice"), name("ACME"));
/// assert_eq!(order.remaining, 10);
/// assert!(!order.is_filled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Order {
    /// Unique order identifier (assigned by the engine)
    pub id: u64,

    /// Trader name, opaque fixed-length payload
    pub trader: Name,

    /// Symbol, opaque fixed-length payload (constant across a session)
    pub symbol: Name,

    /// Order side as u8 (0=Buy, 1=Sell)
    /// Stored as u8 for SSZ compatibility
    pub side_raw: u8,

    /// Limit price in fixed-point (two implied decimals)
    pub price: u64,

    /// Original size in shares
    pub quantity: u64,

    /// Remaining size (for partial fills)
    /// Decremented as the order is matched
    pub remaining: u64,
}

impl Order {
    /// Create a new limit order
    ///
    /// # Arguments
    ///
    /// * `id` - Order identifier; pass 0 when submitting, the engine assigns it
    /// * `side` - Buy or Sell
    /// * `price` - Limit price in fixed-point (two implied decimals)
    /// * `quantity` - Size in shares
    /// * `trader` - Opaque trader payload
    /// * `symbol` - Opaque symbol payload
    pub fn new(id: u64, side: Side, price: u64, quantity: u64, trader: Name, symbol: Name) -> Self {
        Self {
            id,
            trader,
            symbol,
            side_raw: side.to_u8(),
            price,
            quantity,
            remaining: quantity,
        }
    }

    /// Get the order side
    pub fn side(&self) -> Side {
        Side::from_u8(self.side_raw).unwrap_or(Side::Buy)
    }

    /// Set the order side
    pub fn set_side(&mut self, side: Side) {
        self.side_raw = side.to_u8();
    }

    /// Check if the order is fully filled
    pub fn is_filled(&self) -> bool {
        self.remaining == 0
    }

    /// Get the filled quantity
    pub fn filled_quantity(&self) -> u64 {
        self.quantity.saturating_sub(self.remaining)
    }

    /// Fill a portion of this order
    ///
    /// # Returns
    ///
    /// The actual quantity filled (may be less if the order doesn't have
    /// enough remaining)
    pub fn fill(&mut self, fill_qty: u64) -> u64 {
        let actual_fill = fill_qty.min(self.remaining);
        self.remaining -= actual_fill;
        actual_fill
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
