use crate::core::{Booking, BookingId, BookingStore, GuestId, GuestStore, Result, RoomId, RoomStore};
use crate::utils::error::HotelError;
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct BookingService {
    bookings: Arc<BookingStore>,
    rooms: Arc<RoomStore>,
    guests: Arc<GuestStore>,
}

impl BookingService {
    pub fn new(bookings: Arc<BookingStore>, rooms: Arc<RoomStore>, guests: Arc<GuestStore>) -> Self {
        Self {
            bookings,
            rooms,
            guests,
        }
    }

    /// Books `room_id` for `guest_id` over the half-open stay
    /// `[check_in, check_out)`.
    ///
    /// Checks run in a fixed order: unknown room, unknown guest, overlap with an
    /// existing stay on the same room, then the date range itself. A reversed
    /// range on a room that is already taken therefore reports the conflict.
    pub fn create_booking(
        &self,
        room_id: RoomId,
        guest_id: GuestId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Booking> {
        let room = self.rooms.find_by_id(room_id)?;
        let guest = self.guests.find_by_id(guest_id)?;

        let result = self.bookings.create_checked(room_id, |existing, ids| {
            tracing::debug!(
                "Scanning {} existing booking(s) of room {} for {} to {}",
                existing.len(),
                room.number(),
                check_in,
                check_out
            );

            if existing
                .iter()
                .any(|booking| booking.conflicts_with(check_in, check_out))
            {
                return Err(HotelError::RoomAlreadyBooked {
                    room_number: room.number().to_string(),
                    room_id,
                });
            }

            Booking::create(ids, room, guest, check_in, check_out)
        });

        match &result {
            Ok(booking) => tracing::info!(
                "Booked room {} for guest {} from {} to {} (booking {})",
                booking.room().number(),
                booking.guest().id(),
                booking.check_in(),
                booking.check_out(),
                booking.id()
            ),
            Err(e) => tracing::warn!(category = ?e.category(), "Booking rejected: {}", e),
        }

        result
    }

    pub fn find_by_id(&self, id: BookingId) -> Result<Booking> {
        tracing::debug!("Looking up booking {}", id);
        self.bookings.find_by_id(id)
    }

    pub fn all(&self) -> Vec<Booking> {
        self.bookings.all()
    }
}
