// In-memory stores. Each store is the only writer of its collection and owns
// the id sequence for its entity kind.

pub mod booking_store;
pub mod guest_store;
pub mod room_store;

pub use booking_store::BookingStore;
pub use guest_store::GuestStore;
pub use room_store::RoomStore;
