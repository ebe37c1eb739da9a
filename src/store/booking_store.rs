use crate::domain::identity::IdGenerator;
use crate::domain::model::{Booking, BookingId, RoomId};
use crate::utils::error::{HotelError, Result};
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct BookingStore {
    bookings: RwLock<Vec<Booking>>,
    ids: IdGenerator<BookingId>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &IdGenerator<BookingId> {
        &self.ids
    }

    pub fn add(&self, booking: Booking) {
        self.bookings.write().push(booking);
    }

    /// Runs `build` against the bookings already held by `room_id` and appends
    /// what it returns, holding the write lock throughout so no other booking
    /// for the room can slip in between the check and the insert.
    pub fn create_checked<F>(&self, room_id: RoomId, build: F) -> Result<Booking>
    where
        F: FnOnce(&[&Booking], &IdGenerator<BookingId>) -> Result<Booking>,
    {
        let mut bookings = self.bookings.write();
        let existing: Vec<&Booking> = bookings
            .iter()
            .filter(|booking| booking.room().id() == room_id)
            .collect();

        let booking = build(&existing, &self.ids)?;
        drop(existing);

        bookings.push(booking.clone());
        Ok(booking)
    }

    pub fn find_by_id(&self, id: BookingId) -> Result<Booking> {
        self.bookings
            .read()
            .iter()
            .find(|booking| booking.id() == id)
            .cloned()
            .ok_or(HotelError::BookingNotFound { id })
    }

    pub fn for_room(&self, room_id: RoomId) -> Vec<Booking> {
        self.bookings
            .read()
            .iter()
            .filter(|booking| booking.room().id() == room_id)
            .cloned()
            .collect()
    }

    pub fn all(&self) -> Vec<Booking> {
        self.bookings.read().clone()
    }

    pub fn len(&self) -> usize {
        self.bookings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Guest, Room, RoomType};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn rooms() -> (Room, Room) {
        let ids = IdGenerator::new();
        (
            Room::create(&ids, "101", 2, RoomType::Double),
            Room::create(&ids, "102", 1, RoomType::Single),
        )
    }

    fn guest() -> Guest {
        Guest::create(&IdGenerator::new(), "Ada", "ada@example.com")
    }

    #[test]
    fn test_create_checked_sees_only_the_rooms_bookings() {
        let store = BookingStore::new();
        let (first, second) = rooms();

        store
            .create_checked(first.id(), |_, ids| {
                Booking::create(ids, first.clone(), guest(), date("2025-01-01"), date("2025-01-05"))
            })
            .unwrap();

        let seen = store
            .create_checked(second.id(), |existing, ids| {
                assert!(existing.is_empty());
                Booking::create(ids, second.clone(), guest(), date("2025-01-01"), date("2025-01-05"))
            })
            .unwrap();

        assert_eq!(seen.id(), BookingId::new(2));
        assert_eq!(store.for_room(first.id()).len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_failed_build_leaves_store_untouched() {
        let store = BookingStore::new();
        let (room, _) = rooms();

        let result = store.create_checked(room.id(), |_, ids| {
            Booking::create(ids, room.clone(), guest(), date("2025-01-05"), date("2025-01-01"))
        });

        assert!(result.is_err());
        assert!(store.is_empty());
        assert_eq!(store.ids().peek(), 1);
    }

    #[test]
    fn test_find_by_id_miss() {
        let store = BookingStore::new();
        assert!(matches!(
            store.find_by_id(BookingId::new(1)),
            Err(HotelError::BookingNotFound { id }) if id == BookingId::new(1)
        ));
    }
}
