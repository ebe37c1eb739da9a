use crate::domain::model::{BookingId, GuestId, RoomId};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("Room with id {id} not found")]
    RoomNotFound { id: RoomId },

    #[error("Guest with id {id} not found")]
    GuestNotFound { id: GuestId },

    #[error("Booking with id {id} not found")]
    BookingNotFound { id: BookingId },

    #[error("Room number '{number}' is already assigned to room {existing_id}")]
    RoomAlreadyExists { number: String, existing_id: RoomId },

    #[error("Room {room_number} (id {room_id}) is already booked for the selected period")]
    RoomAlreadyBooked { room_number: String, room_id: RoomId },

    #[error("Check-out date {check_out} is not after check-in date {check_in}")]
    InvalidBookingDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("Option {selector} is not a valid room type")]
    RoomTypeNotFound { selector: u32 },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Conflict,
    Validation,
    Configuration,
    Io,
}

impl HotelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HotelError::RoomNotFound { .. }
            | HotelError::GuestNotFound { .. }
            | HotelError::BookingNotFound { .. } => ErrorCategory::NotFound,
            HotelError::RoomAlreadyExists { .. } | HotelError::RoomAlreadyBooked { .. } => {
                ErrorCategory::Conflict
            }
            HotelError::InvalidBookingDateRange { .. }
            | HotelError::RoomTypeNotFound { .. }
            | HotelError::InvalidValue { .. } => ErrorCategory::Validation,
            HotelError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            HotelError::IoError(_) => ErrorCategory::Io,
        }
    }

    /// Business failures leave every store untouched, so the menu can simply
    /// carry on; only I/O failures end a session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.category(), ErrorCategory::Io)
    }
}

pub type Result<T> = std::result::Result<T, HotelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_failures_are_recoverable() {
        let err = HotelError::RoomAlreadyBooked {
            room_number: "101".to_string(),
            room_id: RoomId::new(1),
        };
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.is_recoverable());

        let err = HotelError::RoomTypeNotFound { selector: 4 };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_io_failures_are_not_recoverable() {
        let err = HotelError::from(std::io::Error::other("broken pipe"));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_messages_carry_structured_fields() {
        let err = HotelError::RoomAlreadyExists {
            number: "101".to_string(),
            existing_id: RoomId::new(7),
        };
        assert_eq!(
            err.to_string(),
            "Room number '101' is already assigned to room 7"
        );
    }
}
