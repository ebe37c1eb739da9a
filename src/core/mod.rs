pub mod booking_service;
pub mod desk;
pub mod guest_service;
pub mod room_service;

pub use booking_service::BookingService;
pub use desk::FrontDesk;
pub use guest_service::GuestService;
pub use room_service::RoomService;

pub use crate::domain::model::{
    Booking, BookingId, Guest, GuestId, NewRoom, Room, RoomId, RoomType,
};
pub use crate::domain::ports::{Clock, ConfigProvider};
pub use crate::store::{BookingStore, GuestStore, RoomStore};
pub use crate::utils::error::Result;
