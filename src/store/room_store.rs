use crate::domain::identity::IdGenerator;
use crate::domain::model::{Room, RoomId, RoomType};
use crate::utils::error::{HotelError, Result};
use parking_lot::RwLock;

/// Insertion-ordered room collection. Room numbers are unique, compared as
/// exact, case-sensitive strings.
#[derive(Debug, Default)]
pub struct RoomStore {
    rooms: RwLock<Vec<Room>>,
    ids: IdGenerator<RoomId>,
}

impl RoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &IdGenerator<RoomId> {
        &self.ids
    }

    pub fn add(&self, room: Room) -> Result<()> {
        let mut rooms = self.rooms.write();
        ensure_number_free(&rooms, room.number())?;
        rooms.push(room);
        Ok(())
    }

    /// Registers a new room. The uniqueness check, id assignment and insert
    /// all happen under one write lock, so a duplicate never burns an id.
    pub fn create(&self, number: &str, capacity: u32, room_type: RoomType) -> Result<Room> {
        let mut rooms = self.rooms.write();
        ensure_number_free(&rooms, number)?;

        let room = Room::create(&self.ids, number, capacity, room_type);
        rooms.push(room.clone());
        Ok(room)
    }

    pub fn find_by_number(&self, number: &str) -> Option<Room> {
        self.rooms
            .read()
            .iter()
            .find(|room| room.number() == number)
            .cloned()
    }

    pub fn find_by_id(&self, id: RoomId) -> Result<Room> {
        self.rooms
            .read()
            .iter()
            .find(|room| room.id() == id)
            .cloned()
            .ok_or(HotelError::RoomNotFound { id })
    }

    pub fn all(&self) -> Vec<Room> {
        self.rooms.read().clone()
    }

    pub fn len(&self) -> usize {
        self.rooms.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.read().is_empty()
    }
}

fn ensure_number_free(rooms: &[Room], number: &str) -> Result<()> {
    match rooms.iter().find(|room| room.number() == number) {
        Some(existing) => Err(HotelError::RoomAlreadyExists {
            number: number.to_string(),
            existing_id: existing.id(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_increasing_ids() {
        let store = RoomStore::new();

        let a = store.create("101", 1, RoomType::Single).unwrap();
        let b = store.create("102", 2, RoomType::Double).unwrap();
        let c = store.create("201", 4, RoomType::Suite).unwrap();

        assert!(a.id() < b.id() && b.id() < c.id());
        assert_eq!(a.id(), RoomId::new(1));
    }

    #[test]
    fn test_duplicate_number_is_rejected_with_existing_id() {
        let store = RoomStore::new();
        let first = store.create("101", 2, RoomType::Double).unwrap();

        let err = store.create("101", 1, RoomType::Single).unwrap_err();

        match err {
            HotelError::RoomAlreadyExists {
                number,
                existing_id,
            } => {
                assert_eq!(number, "101");
                assert_eq!(existing_id, first.id());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.ids().peek(), 2, "duplicate must not consume an id");
    }

    #[test]
    fn test_add_checks_uniqueness_too() {
        let store = RoomStore::new();
        store
            .add(Room::create(store.ids(), "A1", 2, RoomType::Double))
            .unwrap();

        let duplicate = Room::create(store.ids(), "A1", 3, RoomType::Suite);
        assert!(matches!(
            store.add(duplicate),
            Err(HotelError::RoomAlreadyExists { .. })
        ));
    }

    #[test]
    fn test_find_by_number_is_exact_and_case_sensitive() {
        let store = RoomStore::new();
        store.create("A1", 2, RoomType::Double).unwrap();

        assert!(store.find_by_number("A1").is_some());
        assert!(store.find_by_number("a1").is_none());
        assert!(store.find_by_number("A1 ").is_none());
        assert!(store.create("a1", 2, RoomType::Double).is_ok());
    }

    #[test]
    fn test_find_by_id_miss() {
        let store = RoomStore::new();
        let err = store.find_by_id(RoomId::new(42)).unwrap_err();
        assert!(matches!(err, HotelError::RoomNotFound { id } if id == RoomId::new(42)));
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let store = RoomStore::new();
        for number in ["301", "101", "201"] {
            store.create(number, 2, RoomType::Double).unwrap();
        }

        let numbers: Vec<String> = store
            .all()
            .iter()
            .map(|room| room.number().to_string())
            .collect();
        assert_eq!(numbers, vec!["301", "101", "201"]);
    }
}
