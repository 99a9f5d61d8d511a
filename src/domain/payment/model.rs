//! Payment domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value_objects::Money;

/// Payment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Refunded => "REFUNDED",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a guest settled the bill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Cash,
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "CREDIT_CARD",
            Self::DebitCard => "DEBIT_CARD",
            Self::Cash => "CASH",
            Self::Transfer => "TRANSFER",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CREDIT_CARD" => Some(Self::CreditCard),
            "DEBIT_CARD" => Some(Self::DebitCard),
            "CASH" => Some(Self::Cash),
            "TRANSFER" => Some(Self::Transfer),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment taken against a reservation
///
/// A payment settles exactly once: Pending moves to Completed or
/// Failed, and only a Completed payment can be Refunded.
#[derive(Debug, Clone)]
pub struct Payment {
    id: Uuid,
    reservation_id: Uuid,
    amount: Money,
    method: PaymentMethod,
    status: PaymentStatus,
    transaction_id: Option<String>,
    failure_reason: Option<String>,
    refund_reason: Option<String>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn new(id: Uuid, reservation_id: Uuid, amount: Money, method: PaymentMethod) -> Self {
        Self {
            id,
            reservation_id,
            amount,
            method,
            status: PaymentStatus::Pending,
            transaction_id: None,
            failure_reason: None,
            refund_reason: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn reservation_id(&self) -> Uuid {
        self.reservation_id
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn refund_reason(&self) -> Option<&str> {
        self.refund_reason.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Settle the payment, recording the processor's transaction ID
    pub fn complete(&mut self, transaction_id: impl Into<String>) -> DomainResult<()> {
        if self.status != PaymentStatus::Pending {
            return Err(DomainError::InvalidState(
                "Only pending payments can be completed".to_string(),
            ));
        }
        let transaction_id = transaction_id.into();
        if transaction_id.trim().is_empty() {
            return Err(DomainError::Validation(
                "Transaction ID cannot be empty".to_string(),
            ));
        }
        self.status = PaymentStatus::Completed;
        self.transaction_id = Some(transaction_id);
        self.completed_at = Some(Utc::now());
        Ok(())
    }

    /// Record a processor rejection
    pub fn fail(&mut self, reason: impl Into<String>) -> DomainResult<()> {
        if self.status != PaymentStatus::Pending {
            return Err(DomainError::InvalidState(
                "Only pending payments can be marked as failed".to_string(),
            ));
        }
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(DomainError::Validation(
                "Failure reason cannot be empty".to_string(),
            ));
        }
        self.status = PaymentStatus::Failed;
        self.failure_reason = Some(reason);
        Ok(())
    }

    /// Return a settled payment to the guest
    pub fn refund(&mut self, reason: impl Into<String>) -> DomainResult<()> {
        if self.status != PaymentStatus::Completed {
            return Err(DomainError::InvalidState(
                "Only completed payments can be refunded".to_string(),
            ));
        }
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(DomainError::Validation(
                "Refund reason cannot be empty".to_string(),
            ));
        }
        self.status = PaymentStatus::Refunded;
        self.refund_reason = Some(reason);
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }

    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }

    pub fn is_refunded(&self) -> bool {
        self.status == PaymentStatus::Refunded
    }

    pub fn is_failed(&self) -> bool {
        self.status == PaymentStatus::Failed
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_payment() -> Payment {
        Payment::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Money::new(Decimal::from(400), "USD").unwrap(),
            PaymentMethod::CreditCard,
        )
    }

    #[test]
    fn new_payment_starts_pending() {
        let payment = sample_payment();
        assert!(payment.is_pending());
        assert_eq!(payment.transaction_id(), None);
        assert_eq!(payment.completed_at(), None);
    }

    #[test]
    fn complete_records_transaction_and_timestamp() {
        let mut payment = sample_payment();
        payment.complete("txn-001").unwrap();

        assert!(payment.is_completed());
        assert_eq!(payment.transaction_id(), Some("txn-001"));
        assert!(payment.completed_at().is_some());
    }

    #[test]
    fn complete_requires_pending_and_a_transaction_id() {
        let mut payment = sample_payment();
        let err = payment.complete("  ").unwrap_err();
        assert_eq!(err.to_string(), "Validation: Transaction ID cannot be empty");
        assert!(payment.is_pending());

        payment.complete("txn-001").unwrap();
        let err = payment.complete("txn-002").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state: Only pending payments can be completed"
        );
    }

    #[test]
    fn fail_records_the_reason() {
        let mut payment = sample_payment();
        payment.fail("card declined").unwrap();

        assert!(payment.is_failed());
        assert_eq!(payment.failure_reason(), Some("card declined"));

        let err = payment.fail("again").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state: Only pending payments can be marked as failed"
        );
    }

    #[test]
    fn fail_rejects_an_empty_reason() {
        let mut payment = sample_payment();
        let err = payment.fail("").unwrap_err();
        assert_eq!(err.to_string(), "Validation: Failure reason cannot be empty");
    }

    #[test]
    fn refund_only_after_completion() {
        let mut payment = sample_payment();
        let err = payment.refund("guest cancelled").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state: Only completed payments can be refunded"
        );

        payment.complete("txn-001").unwrap();
        payment.refund("guest cancelled").unwrap();
        assert!(payment.is_refunded());
        assert_eq!(payment.refund_reason(), Some("guest cancelled"));
    }

    #[test]
    fn refund_rejects_an_empty_reason() {
        let mut payment = sample_payment();
        payment.complete("txn-001").unwrap();
        let err = payment.refund("  ").unwrap_err();
        assert_eq!(err.to_string(), "Validation: Refund reason cannot be empty");
        assert!(payment.is_completed());
    }
}
