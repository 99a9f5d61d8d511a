//! Room domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value_objects::Money;

/// Room category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Double => "DOUBLE",
            Self::Suite => "SUITE",
            Self::Deluxe => "DELUXE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SINGLE" => Some(Self::Single),
            "DOUBLE" => Some(Self::Double),
            "SUITE" => Some(Self::Suite),
            "DELUXE" => Some(Self::Deluxe),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Administrative room status
///
/// Reflects housekeeping/front-desk state only. A room can be Available
/// here and still be booked for a future window; date conflicts are the
/// reservation repository's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Occupied,
    Reserved,
    Maintenance,
}

impl Default for RoomStatus {
    fn default() -> Self {
        Self::Available
    }
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Occupied => "OCCUPIED",
            Self::Reserved => "RESERVED",
            Self::Maintenance => "MAINTENANCE",
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hotel room aggregate
///
/// Fields are private; every mutation goes through a method so the
/// entity can hold its invariants (non-empty number, capacity >= 1,
/// deduplicated amenities).
#[derive(Debug, Clone)]
pub struct Room {
    id: Uuid,
    number: String,
    room_type: RoomType,
    price_per_night: Money,
    capacity: u32,
    amenities: Vec<String>,
    status: RoomStatus,
    created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(
        id: Uuid,
        number: impl Into<String>,
        room_type: RoomType,
        price_per_night: Money,
        capacity: u32,
        amenities: Vec<String>,
    ) -> DomainResult<Self> {
        let number = number.into();
        let number = number.trim();
        if number.is_empty() {
            return Err(DomainError::Validation(
                "Room number cannot be empty".to_string(),
            ));
        }
        if capacity < 1 {
            return Err(DomainError::Validation(
                "Capacity must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            id,
            number: number.to_string(),
            room_type,
            price_per_night,
            capacity,
            amenities: dedup_amenities(amenities),
            status: RoomStatus::Available,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn price_per_night(&self) -> &Money {
        &self.price_per_night
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    pub fn status(&self) -> RoomStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }

    /// Whether the room can host the given head count
    pub fn can_accommodate(&self, number_of_guests: u32) -> bool {
        number_of_guests <= self.capacity
    }

    pub fn mark_as_available(&mut self) {
        self.status = RoomStatus::Available;
    }

    pub fn mark_as_occupied(&mut self) {
        self.status = RoomStatus::Occupied;
    }

    pub fn mark_as_reserved(&mut self) {
        self.status = RoomStatus::Reserved;
    }

    pub fn mark_as_in_maintenance(&mut self) {
        self.status = RoomStatus::Maintenance;
    }

    pub fn update_price(&mut self, new_price: Money) {
        self.price_per_night = new_price;
    }

    pub fn update_amenities(&mut self, amenities: Vec<String>) {
        self.amenities = dedup_amenities(amenities);
    }
}

/// Collapse duplicates while keeping first-seen order
fn dedup_amenities(amenities: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(amenities.len());
    for amenity in amenities {
        if !unique.contains(&amenity) {
            unique.push(amenity);
        }
    }
    unique
}

// ── Tests ──────────────────────────────────────────────────────
