//! VAT refund estimate
//!
//! Purchases on new-build projects are assumed to be VAT-inclusive at 20%.
//! The refundable VAT is the portion embedded in that total.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::money::Money;

/// Divisor that strips 20% VAT from a VAT-inclusive total
pub const VAT_INCLUSIVE_DIVISOR: Decimal = dec!(1.2);

/// VAT contained in a VAT-inclusive total: `P - P / 1.2`
///
/// The division is done exactly as written (not as `P / 6`) so rounding at
/// the last decimal place matches the reference figures.
pub fn vat_refund(purchases: Money) -> Money {
    purchases - purchases / VAT_INCLUSIVE_DIVISOR
}
