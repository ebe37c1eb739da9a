use crate::domain::model::{Booking, Guest, Room, RoomType};
use crate::utils::error::HotelError;

/// Operator-facing text for a failure.
pub fn render_error(err: &HotelError) -> String {
    match err {
        HotelError::RoomNotFound { id } => format!("ERROR: Room with ID {} not found.", id),
        HotelError::GuestNotFound { id } => format!("ERROR: Guest with ID {} not found.", id),
        HotelError::BookingNotFound { id } => format!("ERROR: Booking with ID {} not found.", id),
        HotelError::RoomAlreadyExists {
            number,
            existing_id,
        } => format!(
            "ERROR: Cannot create room with number '{}'. This number is already assigned to room ID: {}.",
            number, existing_id
        ),
        HotelError::RoomAlreadyBooked {
            room_number,
            room_id,
        } => format!(
            "ERROR: Room {} (ID {}) is already booked for the selected period.",
            room_number, room_id
        ),
        HotelError::InvalidBookingDateRange { .. } => {
            "ERROR: Check-out date must be after check-in date.".to_string()
        }
        HotelError::RoomTypeNotFound { selector } => format!(
            "ERROR: Option '{}' is not a valid room type. Available options: {}",
            selector,
            room_type_options()
        ),
        HotelError::InvalidValue { reason, .. } => format!("ERROR: {}", reason),
        other => format!("ERROR: {}", other),
    }
}

/// `1 (SINGLE), 2 (DOUBLE), 3 (SUITE)`
pub fn room_type_options() -> String {
    RoomType::ALL
        .iter()
        .map(|room_type| format!("{} ({})", room_type.option_number(), room_type))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn room_table(rooms: &[Room]) -> String {
    let mut lines = vec![
        row(format!("{:<4} | {:<6} | {:<8} | {:<10}", "ID", "Room", "Capacity", "Type")),
        "-".repeat(36),
    ];
    lines.extend(rooms.iter().map(|room| {
        row(format!(
            "{:<4} | {:<6} | {:<8} | {:<10}",
            room.id(),
            room.number(),
            room.capacity(),
            room.room_type()
        ))
    }));
    lines.join("\n")
}

pub fn guest_table(guests: &[Guest]) -> String {
    let mut lines = vec![
        row(format!("{:<4} | {:<20} | {:<25}", "ID", "Name", "Email")),
        "-".repeat(54),
    ];
    lines.extend(guests.iter().map(|guest| {
        row(format!(
            "{:<4} | {:<20} | {:<25}",
            guest.id(),
            guest.name(),
            guest.email()
        ))
    }));
    lines.join("\n")
}

pub fn booking_table(bookings: &[Booking]) -> String {
    let mut lines = vec![
        row(format!(
            "{:<4} | {:<8} | {:<15} | {:<20} | {:<12} | {:<12}",
            "ID", "Room", "Room Type", "Guest", "Check-in", "Check-out"
        )),
        "-".repeat(93),
    ];
    lines.extend(bookings.iter().map(|booking| {
        row(format!(
            "{:<4} | {:<8} | {:<15} | {:<20} | {:<12} | {:<12}",
            booking.id(),
            booking.room().number(),
            booking.room().room_type(),
            booking.guest().name(),
            booking.check_in().to_string(),
            booking.check_out().to_string()
        ))
    }));
    lines.join("\n")
}

fn row(line: String) -> String {
    line.trim_end().to_string()
}
