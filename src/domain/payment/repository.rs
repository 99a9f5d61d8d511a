//! Payment repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Payment, PaymentStatus};
use crate::domain::error::DomainResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Save a new payment
    async fn save(&self, payment: Payment) -> DomainResult<()>;

    /// Find payment by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Payment>>;

    /// Find all payments taken against a reservation
    async fn find_by_reservation_id(&self, reservation_id: Uuid) -> DomainResult<Vec<Payment>>;

    /// Update an existing payment
    async fn update(&self, payment: Payment) -> DomainResult<()>;

    /// Find all payments in a given status
    async fn find_by_status(&self, status: PaymentStatus) -> DomainResult<Vec<Payment>>;

    /// Find all payments
    async fn find_all(&self) -> DomainResult<Vec<Payment>>;
}
