use crate::core::{Guest, GuestId, GuestStore, Result};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GuestService {
    store: Arc<GuestStore>,
}

impl GuestService {
    pub fn new(store: Arc<GuestStore>) -> Self {
        Self { store }
    }

    /// Stores the guest as given. Name and email format are checked by the
    /// caller, and guests sharing an email are allowed.
    pub fn add_guest(&self, name: &str, email: &str) -> Guest {
        let guest = self.store.create(name, email);
        tracing::info!("Registered guest {} (id {})", guest.name(), guest.id());
        guest
    }

    pub fn find_by_id(&self, id: GuestId) -> Result<Guest> {
        tracing::debug!("Looking up guest {}", id);
        self.store.find_by_id(id)
    }

    pub fn all(&self) -> Vec<Guest> {
        self.store.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_guest_round_trip_in_order() {
        let service = GuestService::new(Arc::new(GuestStore::new()));
        let ada = service.add_guest("Ada Lovelace", "ada@example.com");
        let alan = service.add_guest("Alan Turing", "alan@example.com");

        assert_eq!(service.find_by_id(alan.id()).unwrap(), alan);
        assert_eq!(service.all(), vec![ada, alan]);
    }

    #[test]
    fn test_shared_email_is_allowed() {
        let service = GuestService::new(Arc::new(GuestStore::new()));
        service.add_guest("Ada", "front@example.com");
        service.add_guest("Alan", "front@example.com");

        assert_eq!(service.all().len(), 2);
    }
}
