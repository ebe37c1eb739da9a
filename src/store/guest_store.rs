use crate::domain::identity::IdGenerator;
use crate::domain::model::{Guest, GuestId};
use crate::utils::error::{HotelError, Result};
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct GuestStore {
    guests: RwLock<Vec<Guest>>,
    ids: IdGenerator<GuestId>,
}

impl GuestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &IdGenerator<GuestId> {
        &self.ids
    }

    pub fn add(&self, guest: Guest) {
        self.guests.write().push(guest);
    }

    pub fn create(&self, name: &str, email: &str) -> Guest {
        let guest = Guest::create(&self.ids, name, email);
        self.add(guest.clone());
        guest
    }

    pub fn find_by_id(&self, id: GuestId) -> Result<Guest> {
        self.guests
            .read()
            .iter()
            .find(|guest| guest.id() == id)
            .cloned()
            .ok_or(HotelError::GuestNotFound { id })
    }

    pub fn all(&self) -> Vec<Guest> {
        self.guests.read().clone()
    }

    pub fn len(&self) -> usize {
        self.guests.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.read().is_empty()
    }
}
