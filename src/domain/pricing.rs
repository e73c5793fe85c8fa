use rust_decimal::Decimal;

/// Divisor applied to a gold discount percentage, so `100` means 1%.
pub const GOLD_DISCOUNT_DIVISOR: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);

/// Amount taken off a gold balance: `percentage / 10000 * balance`,
/// saturating at the `Decimal` bounds.
pub fn gold_discount(percentage: Decimal, balance: Decimal) -> Decimal {
    (percentage / GOLD_DISCOUNT_DIVISOR).saturating_mul(balance)
}
