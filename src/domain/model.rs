use crate::domain::identity::IdGenerator;
use crate::utils::error::{HotelError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Room`].
    RoomId
);
entity_id!(
    /// Identifier of a [`Guest`].
    GuestId
);
entity_id!(
    /// Identifier of a [`Booking`].
    BookingId
);

/// Kind of room. Each variant has a fixed menu selector that never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    /// All room types in selector order.
    pub const ALL: [RoomType; 3] = [RoomType::Single, RoomType::Double, RoomType::Suite];

    pub const fn option_number(self) -> u32 {
        match self {
            RoomType::Single => 1,
            RoomType::Double => 2,
            RoomType::Suite => 3,
        }
    }

    pub fn from_option_number(selector: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|room_type| room_type.option_number() == selector)
            .ok_or(HotelError::RoomTypeNotFound { selector })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RoomType::Single => "SINGLE",
            RoomType::Double => "DOUBLE",
            RoomType::Suite => "SUITE",
        }
    }
}

impl TryFrom<u32> for RoomType {
    type Error = HotelError;

    fn try_from(selector: u32) -> Result<Self> {
        Self::from_option_number(selector)
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    id: RoomId,
    number: String,
    capacity: u32,
    room_type: RoomType,
}

impl Room {
    pub fn create(
        ids: &IdGenerator<RoomId>,
        number: impl Into<String>,
        capacity: u32,
        room_type: RoomType,
    ) -> Self {
        Self {
            id: ids.next_id(),
            number: number.into(),
            capacity,
            room_type,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guest {
    id: GuestId,
    name: String,
    email: String,
}

impl Guest {
    pub fn create(
        ids: &IdGenerator<GuestId>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> GuestId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    id: BookingId,
    room: Room,
    guest: Guest,
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl Booking {
    /// Builds a booking, rejecting a stay whose check-out is not strictly after
    /// its check-in. No id is consumed when the range is rejected.
    pub fn create(
        ids: &IdGenerator<BookingId>,
        room: Room,
        guest: Guest,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Self> {
        if check_out <= check_in {
            return Err(HotelError::InvalidBookingDateRange {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            id: ids.next_id(),
            room,
            guest,
            check_in,
            check_out,
        })
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn guest(&self) -> &Guest {
        &self.guest
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Half-open overlap test: `[check_in, check_out)` and this stay conflict
    /// iff each one starts before the other ends. A stay that begins on the day
    /// this one checks out (or ends on the day it checks in) does not conflict.
    pub fn conflicts_with(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        check_in < self.check_out && check_out > self.check_in
    }
}

/// Request to register a room, as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    pub number: String,
    pub capacity: u32,
    pub room_type: RoomType,
}
