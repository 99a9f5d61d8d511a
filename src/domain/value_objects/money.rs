//! Money value object
//!
//! Immutable amount + currency pair. Amounts are kept at two decimal
//! places (rounded half away from zero) and can never go negative.
//! All arithmetic returns a new instance; mixing currencies is rejected.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::error::{DomainError, DomainResult};

/// Monetary amount in a single currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    /// Create a new amount. Rejects negative amounts and empty currency
    /// codes; normalizes the code to upper case and the amount to two
    /// decimal places.
    pub fn new(amount: Decimal, currency: &str) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::Validation(
                "Amount cannot be negative".to_string(),
            ));
        }
        if currency.trim().is_empty() {
            return Err(DomainError::Validation(
                "Currency cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            amount: amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            currency: currency.to_uppercase(),
        })
    }

    /// Zero in the given currency
    pub fn zero(currency: &str) -> DomainResult<Self> {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Add another amount of the same currency
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        if self.currency != other.currency {
            return Err(DomainError::Validation(
                "Cannot add different currencies".to_string(),
            ));
        }
        Money::new(self.amount + other.amount, &self.currency)
    }

    /// Subtract another amount of the same currency. The result may not
    /// go below zero.
    pub fn subtract(&self, other: &Money) -> DomainResult<Money> {
        if self.currency != other.currency {
            return Err(DomainError::Validation(
                "Cannot subtract different currencies".to_string(),
            ));
        }
        let result = self.amount - other.amount;
        if result.is_sign_negative() && !result.is_zero() {
            return Err(DomainError::Validation(
                "Result cannot be negative".to_string(),
            ));
        }
        Money::new(result, &self.currency)
    }

    /// Multiply by a non-negative factor
    pub fn multiply(&self, factor: Decimal) -> DomainResult<Money> {
        if factor.is_sign_negative() && !factor.is_zero() {
            return Err(DomainError::Validation(
                "Multiplier cannot be negative".to_string(),
            ));
        }
        Money::new(self.amount * factor, &self.currency)
    }

    /// Strict ordering within one currency; comparing across currencies
    /// is an error rather than an answer.
    pub fn is_greater_than(&self, other: &Money) -> DomainResult<bool> {
        if self.currency != other.currency {
            return Err(DomainError::Validation(
                "Cannot compare different currencies".to_string(),
            ));
        }
        Ok(self.amount > other.amount)
    }

    pub fn is_less_than(&self, other: &Money) -> DomainResult<bool> {
        if self.currency != other.currency {
            return Err(DomainError::Validation(
                "Cannot compare different currencies".to_string(),
            ));
        }
        Ok(self.amount < other.amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}

// ── Tests ──────────────────────────────────────────────────────
