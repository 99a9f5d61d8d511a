//! Pricing rules for stays, discounts, and cancellation refunds

use rust_decimal::Decimal;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value_objects::{DateRange, Money};

/// Stateless pricing arithmetic
pub struct PricingService;

impl PricingService {
    /// Total price of a stay: nightly rate times number of nights
    pub fn calculate_total_price(
        price_per_night: &Money,
        date_range: &DateRange,
    ) -> DomainResult<Money> {
        let nights = date_range.number_of_nights();
        price_per_night.multiply(Decimal::from(nights))
    }

    /// Apply a percentage discount to a price
    pub fn apply_discount(price: &Money, discount_percentage: Decimal) -> DomainResult<Money> {
        if discount_percentage < Decimal::ZERO || discount_percentage > Decimal::from(100) {
            return Err(DomainError::Validation(
                "Discount percentage must be between 0 and 100".to_string(),
            ));
        }

        let multiplier = (Decimal::from(100) - discount_percentage) / Decimal::from(100);
        price.multiply(multiplier)
    }

    /// Refund owed when a booking is cancelled ahead of check-in.
    ///
    /// Policy: 7+ days out refunds everything, 3 to 6 days out refunds
    /// half, anything closer refunds nothing.
    pub fn calculate_refund_amount(
        total_price: &Money,
        days_before_check_in: i64,
    ) -> DomainResult<Money> {
        if days_before_check_in < 0 {
            return Err(DomainError::Validation(
                "Days before check-in cannot be negative".to_string(),
            ));
        }

        if days_before_check_in >= 7 {
            Ok(total_price.clone())
        } else if days_before_check_in >= 3 {
            total_price.multiply(Decimal::new(5, 1))
        } else {
            Money::zero(total_price.currency())
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
