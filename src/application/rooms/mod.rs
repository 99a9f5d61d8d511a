//! Room inventory use cases

pub mod create_room;
pub mod search_available_rooms;

pub use create_room::{CreateRoom, CreateRoomDto};
pub use search_available_rooms::{SearchAvailableRooms, SearchAvailableRoomsDto};
