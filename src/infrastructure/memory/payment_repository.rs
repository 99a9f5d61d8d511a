//! In-memory payment repository

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Payment, PaymentRepository, PaymentStatus};

/// DashMap-backed payment store for development and testing
pub struct InMemoryPaymentRepository {
    payments: DashMap<Uuid, Payment>,
}

impl InMemoryPaymentRepository {
    pub fn new() -> Self {
        Self {
            payments: DashMap::new(),
        }
    }
}

impl Default for InMemoryPaymentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn save(&self, payment: Payment) -> DomainResult<()> {
        self.payments.insert(payment.id(), payment);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Payment>> {
        Ok(self.payments.get(&id).map(|payment| payment.clone()))
    }

    async fn find_by_reservation_id(&self, reservation_id: Uuid) -> DomainResult<Vec<Payment>> {
        Ok(self
            .payments
            .iter()
            .filter(|entry| entry.reservation_id() == reservation_id)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn update(&self, payment: Payment) -> DomainResult<()> {
        if !self.payments.contains_key(&payment.id()) {
            return Err(DomainError::NotFound {
                entity: "Payment",
                field: "id",
                value: payment.id().to_string(),
            });
        }
        self.payments.insert(payment.id(), payment);
        Ok(())
    }

    async fn find_by_status(&self, status: PaymentStatus) -> DomainResult<Vec<Payment>> {
        Ok(self
            .payments
            .iter()
            .filter(|entry| entry.status() == status)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<Payment>> {
        Ok(self.payments.iter().map(|entry| entry.clone()).collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────
