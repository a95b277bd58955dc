//! Fixed-point price utilities and bookable price range.
//!
//! ## Overview
//!
//! Prices in matchcore are integers with two implied decimal places
//! ($100.00 is stored as `10000`). The engine itself never does arithmetic
//! on a price beyond comparison; these helpers exist for hosts, the demo
//! binary, and tests.
//!
//! ## Why Fixed-Point?
//!
//! Floating-point arithmetic can produce different results on different
//! hardware, breaking determinism. Fixed-point ensures identical results
//! everywhere.
//!
//! ## Bookable Range
//!
//! The price range is deliberately small and dense so each book side can be
//! a direct-indexed array of price levels: stepping one tick toward a worse
//! price is an integer decrement.
//!
//! ## Examples
//!
//! ```
//! use matchcore::types::price::{to_fixed, from_fixed};
//!
//! let price = to_fixed("100.25").unwrap();
//! assert_eq!(price, 10025);
//! assert_eq!(from_fixed(price), "100.25");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point prices: 10^2
///
/// This provides two implied decimal places.
pub const SCALE: u64 = 100;

/// Lowest bookable price (one tick).
pub const MIN_PRICE: u64 = 1;

/// Highest bookable price.
pub const MAX_PRICE: u64 = 65_536;

/// Number of level slots in a direct price-indexed array (`MAX_PRICE + 1`,
/// slot 0 unused so a price indexes its own slot).
pub const PRICE_SLOTS: usize = (MAX_PRICE + 1) as usize;

/// Check whether a price falls in the bookable range.
#[inline]
pub fn in_range(price: u64) -> bool {
    (MIN_PRICE..=MAX_PRICE).contains(&price)
}

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to a fixed-point price
///
/// # Returns
///
/// * `Some(u64)` - The fixed-point representation
/// * `None` - If parsing fails or the value is negative
///
/// # Example
///
/// ```
/// use matchcore::types::price::to_fixed;
///
/// assert_eq!(to_fixed("1.00"), Some(100));
/// assert_eq!(to_fixed("655.36"), Some(65536));
/// assert_eq!(to_fixed("0.01"), Some(1));
/// ```
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a Decimal to a fixed-point price
///
/// # Returns
///
/// * `Some(u64)` - The fixed-point representation
/// * `None` - If the value is negative or out of range
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    let rounded = scaled.round_dp(0);
    rounded.to_u64()
}

/// Convert a fixed-point price to a Decimal
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Convert a fixed-point price to a string with two decimal places
///
/// # Example
///
/// ```
/// use matchcore::types::price::from_fixed;
///
/// assert_eq!(from_fixed(100), "1.00");
/// assert_eq!(from_fixed(10025), "100.25");
/// ```
pub fn from_fixed(value: u64) -> String {
    let decimal = fixed_to_decimal(value);
    format!("{:.2}", decimal)
}

// ============================================================================
// Unit Tests
// ============================================================================
