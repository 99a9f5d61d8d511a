//! Reservation domain entity and its status state machine

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value_objects::{DateRange, Money};

/// Reservation lifecycle status
///
/// ```text
/// PENDING -> CONFIRMED -> CHECKED_IN -> CHECKED_OUT
/// PENDING -> CANCELLED
/// CONFIRMED -> CANCELLED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "CONFIRMED" => Some(Self::Confirmed),
            "CHECKED_IN" => Some(Self::CheckedIn),
            "CHECKED_OUT" => Some(Self::CheckedOut),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Room booking aggregate
///
/// Holds only the IDs of the user and room it refers to. Status moves
/// exclusively through the guarded transition methods, so an illegal
/// jump (say Pending straight to CheckedOut) cannot be represented.
#[derive(Debug, Clone)]
pub struct Reservation {
    id: Uuid,
    user_id: Uuid,
    room_id: Uuid,
    date_range: DateRange,
    number_of_guests: u32,
    total_price: Money,
    status: ReservationStatus,
    created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        room_id: Uuid,
        date_range: DateRange,
        number_of_guests: u32,
        total_price: Money,
    ) -> DomainResult<Self> {
        if number_of_guests < 1 {
            return Err(DomainError::Validation(
                "Number of guests must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            id,
            user_id,
            room_id,
            date_range,
            number_of_guests,
            total_price,
            status: ReservationStatus::Pending,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn room_id(&self) -> Uuid {
        self.room_id
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn number_of_guests(&self) -> u32 {
        self.number_of_guests
    }

    pub fn total_price(&self) -> &Money {
        &self.total_price
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Move from Pending to Confirmed
    pub fn confirm(&mut self) -> DomainResult<()> {
        if self.status != ReservationStatus::Pending {
            return Err(DomainError::InvalidState(
                "Only pending reservations can be confirmed".to_string(),
            ));
        }
        self.status = ReservationStatus::Confirmed;
        Ok(())
    }

    /// Cancel a Pending or Confirmed reservation.
    ///
    /// Once a guest has checked in the booking can only run to
    /// completion, and a cancelled booking stays cancelled.
    pub fn cancel(&mut self) -> DomainResult<()> {
        match self.status {
            ReservationStatus::CheckedIn | ReservationStatus::CheckedOut => {
                Err(DomainError::InvalidState(
                    "Cannot cancel a reservation that is already checked in".to_string(),
                ))
            }
            ReservationStatus::Cancelled => Err(DomainError::InvalidState(
                "Reservation is already cancelled".to_string(),
            )),
            ReservationStatus::Pending | ReservationStatus::Confirmed => {
                self.status = ReservationStatus::Cancelled;
                Ok(())
            }
        }
    }

    /// Move from Confirmed to CheckedIn
    pub fn check_in(&mut self) -> DomainResult<()> {
        if self.status != ReservationStatus::Confirmed {
            return Err(DomainError::InvalidState(
                "Only confirmed reservations can be checked in".to_string(),
            ));
        }
        self.status = ReservationStatus::CheckedIn;
        Ok(())
    }

    /// Move from CheckedIn to CheckedOut
    pub fn check_out(&mut self) -> DomainResult<()> {
        if self.status != ReservationStatus::CheckedIn {
            return Err(DomainError::InvalidState(
                "Only checked-in reservations can be checked out".to_string(),
            ));
        }
        self.status = ReservationStatus::CheckedOut;
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.status == ReservationStatus::Pending
    }

    /// Whether this reservation still holds a claim on its room.
    ///
    /// Active reservations are the ones that count toward overlap
    /// conflicts when a new booking is attempted.
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            ReservationStatus::Pending | ReservationStatus::Confirmed | ReservationStatus::CheckedIn
        )
    }

    /// Re-book a pending reservation onto new dates with a recomputed price
    pub fn update_dates(
        &mut self,
        new_range: DateRange,
        new_total_price: Money,
    ) -> DomainResult<()> {
        if self.status != ReservationStatus::Pending {
            return Err(DomainError::InvalidState(
                "Only pending reservations can be modified".to_string(),
            ));
        }
        self.date_range = new_range;
        self.total_price = new_total_price;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn range(from_day: u32, to_day: u32) -> DateRange {
        let start = Utc.with_ymd_and_hms(2024, 6, from_day, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, to_day, 0, 0, 0).unwrap();
        DateRange::new(start, end).unwrap()
    }

    fn sample_reservation() -> Reservation {
        Reservation::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            range(1, 5),
            2,
            Money::new(Decimal::from(400), "USD").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn new_reservation_starts_pending() {
        let reservation = sample_reservation();
        assert_eq!(reservation.status(), ReservationStatus::Pending);
        assert!(reservation.is_pending());
        assert!(reservation.is_active());
    }

    #[test]
    fn zero_guests_is_rejected() {
        let err = Reservation::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            range(1, 3),
            0,
            Money::new(Decimal::from(200), "USD").unwrap(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation: Number of guests must be at least 1"
        );
    }

    #[test]
    fn happy_path_walks_the_full_lifecycle() {
        let mut reservation = sample_reservation();

        reservation.confirm().unwrap();
        assert_eq!(reservation.status(), ReservationStatus::Confirmed);
        assert!(reservation.is_active());

        reservation.check_in().unwrap();
        assert_eq!(reservation.status(), ReservationStatus::CheckedIn);
        assert!(reservation.is_active());

        reservation.check_out().unwrap();
        assert_eq!(reservation.status(), ReservationStatus::CheckedOut);
        assert!(!reservation.is_active());
    }

    #[test]
    fn confirm_requires_pending() {
        let mut reservation = sample_reservation();
        reservation.confirm().unwrap();

        let err = reservation.confirm().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state: Only pending reservations can be confirmed"
        );
    }

    #[test]
    fn check_in_requires_confirmed() {
        let mut reservation = sample_reservation();
        let err = reservation.check_in().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state: Only confirmed reservations can be checked in"
        );
    }

    #[test]
    fn check_out_requires_checked_in() {
        let mut reservation = sample_reservation();
        let err = reservation.check_out().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state: Only checked-in reservations can be checked out"
        );

        reservation.confirm().unwrap();
        assert!(reservation.check_out().is_err());
    }

    #[test]
    fn cancel_is_allowed_while_pending_or_confirmed() {
        let mut pending = sample_reservation();
        pending.cancel().unwrap();
        assert_eq!(pending.status(), ReservationStatus::Cancelled);
        assert!(!pending.is_active());

        let mut confirmed = sample_reservation();
        confirmed.confirm().unwrap();
        confirmed.cancel().unwrap();
        assert_eq!(confirmed.status(), ReservationStatus::Cancelled);
    }

    #[test]
    fn cancel_after_check_in_is_rejected() {
        let mut reservation = sample_reservation();
        reservation.confirm().unwrap();
        reservation.check_in().unwrap();

        let err = reservation.cancel().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state: Cannot cancel a reservation that is already checked in"
        );
        assert_eq!(reservation.status(), ReservationStatus::CheckedIn);

        reservation.check_out().unwrap();
        assert!(reservation.cancel().is_err());
    }

    #[test]
    fn cancel_twice_is_rejected() {
        let mut reservation = sample_reservation();
        reservation.cancel().unwrap();

        let err = reservation.cancel().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state: Reservation is already cancelled"
        );
    }

    #[test]
    fn update_dates_only_while_pending() {
        let mut reservation = sample_reservation();
        let new_price = Money::new(Decimal::from(600), "USD").unwrap();
        reservation.update_dates(range(10, 16), new_price.clone()).unwrap();
        assert_eq!(reservation.date_range(), range(10, 16));
        assert_eq!(reservation.total_price(), &new_price);

        reservation.confirm().unwrap();
        let err = reservation
            .update_dates(range(20, 22), Money::new(Decimal::from(200), "USD").unwrap())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state: Only pending reservations can be modified"
        );
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::CheckedIn,
            ReservationStatus::CheckedOut,
            ReservationStatus::Cancelled,
        ] {
            assert_eq!(ReservationStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ReservationStatus::from_str("ON_HOLD"), None);
    }
}
