use crate::core::{Result, Room, RoomId, RoomStore, RoomType};
use crate::utils::error::HotelError;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct RoomService {
    store: Arc<RoomStore>,
}

impl RoomService {
    pub fn new(store: Arc<RoomStore>) -> Self {
        Self { store }
    }

    pub fn add_room(&self, number: &str, capacity: u32, room_type: RoomType) -> Result<Room> {
        match self.store.create(number, capacity, room_type) {
            Ok(room) => {
                tracing::info!(
                    "Registered room {} (id {}, {}, capacity {})",
                    room.number(),
                    room.id(),
                    room.room_type(),
                    room.capacity()
                );
                Ok(room)
            }
            Err(e) => {
                tracing::warn!(category = ?e.category(), "Room registration rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Lets the caller re-prompt for a room number before collecting the rest
    /// of the room's details.
    pub fn validate_room_number_available(&self, number: &str) -> Result<()> {
        match self.store.find_by_number(number) {
            Some(existing) => Err(HotelError::RoomAlreadyExists {
                number: number.to_string(),
                existing_id: existing.id(),
            }),
            None => Ok(()),
        }
    }

    pub fn find_by_id(&self, id: RoomId) -> Result<Room> {
        tracing::debug!("Looking up room {}", id);
        self.store.find_by_id(id)
    }

    pub fn all(&self) -> Vec<Room> {
        self.store.all()
    }
}
