use crate::core::{
    BookingService, BookingStore, GuestService, GuestStore, NewRoom, Result, RoomService, RoomStore,
};
use std::sync::Arc;

/// One operator session: the three stores and the services over them.
#[derive(Debug, Clone)]
pub struct FrontDesk {
    rooms: RoomService,
    guests: GuestService,
    bookings: BookingService,
}

impl FrontDesk {
    pub fn new() -> Self {
        let room_store = Arc::new(RoomStore::new());
        let guest_store = Arc::new(GuestStore::new());
        let booking_store = Arc::new(BookingStore::new());

        Self {
            rooms: RoomService::new(Arc::clone(&room_store)),
            guests: GuestService::new(Arc::clone(&guest_store)),
            bookings: BookingService::new(booking_store, room_store, guest_store),
        }
    }

    pub fn rooms(&self) -> &RoomService {
        &self.rooms
    }

    pub fn guests(&self) -> &GuestService {
        &self.guests
    }

    pub fn bookings(&self) -> &BookingService {
        &self.bookings
    }

    /// Registers rooms from configuration, stopping at the first failure.
    pub fn seed_rooms(&self, seeds: &[NewRoom]) -> Result<usize> {
        for seed in seeds {
            self.rooms
                .add_room(&seed.number, seed.capacity, seed.room_type)?;
        }
        if !seeds.is_empty() {
            tracing::info!("Seeded {} room(s) from configuration", seeds.len());
        }
        Ok(seeds.len())
    }
}

impl Default for FrontDesk {
    fn default() -> Self {
        Self::new()
    }
}
