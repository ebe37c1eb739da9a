use crate::cli::render::room_table;
use crate::cli::{read_menu_option, Console, ConsoleResult};
use crate::core::{RoomId, RoomService, RoomType};
use crate::utils::validation::{parse_number, validate_non_empty_string, validate_positive_number};
use std::io::{BufRead, Write};

const MENU: &str = "
=== Room Management ===
1. Add new room
2. List all rooms
3. Find room by ID
4. Back

Choose an option: ";

pub struct RoomMenu<'a> {
    rooms: &'a RoomService,
}

impl<'a> RoomMenu<'a> {
    pub fn new(rooms: &'a RoomService) -> Self {
        Self { rooms }
    }

    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        loop {
            match read_menu_option(console, MENU)? {
                Some(1) => self.add_room(console)?,
                Some(2) => self.list_rooms(console)?,
                Some(3) => self.find_room(console)?,
                Some(_) => return Ok(()),
                None => continue,
            }
        }
    }

    fn add_room<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        console.println("=== Add New Room ===")?;
        let number = self.read_room_number(console)?;
        let capacity = read_capacity(console)?;
        let room_type = read_room_type(console)?;

        match self.rooms.add_room(&number, capacity, room_type) {
            Ok(room) => console.println(&format!(
                "\nSUCCESS: Room {} added successfully (ID {}).",
                room.number(),
                room.id()
            )),
            Err(e) => console.report(&e),
        }
    }

    fn read_room_number<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> ConsoleResult<String> {
        let mut prompt = "Enter room number: ";
        loop {
            let number = console.prompt(prompt)?;

            let checked = validate_non_empty_string("Room number", &number)
                .and_then(|_| self.rooms.validate_room_number_available(&number));
            match checked {
                Ok(()) => return Ok(number),
                Err(e) => {
                    console.report(&e)?;
                    prompt = "Enter a different room number: ";
                }
            }
        }
    }

    fn list_rooms<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        let rooms = self.rooms.all();
        if rooms.is_empty() {
            return no_rooms(console);
        }

        console.println("\n=== List of Rooms ===")?;
        console.println(&room_table(&rooms))
    }

    fn find_room<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        if self.rooms.all().is_empty() {
            return no_rooms(console);
        }

        console.println("\n=== Find Room by ID ===")?;
        loop {
            let input = console.prompt("Enter room ID: ")?;
            let found = parse_number("Room ID", &input)
                .and_then(|id| self.rooms.find_by_id(RoomId::new(id)));

            match found {
                Ok(room) => {
                    console.println("\n=== Room Details ===")?;
                    return console.println(&room_table(&[room]));
                }
                Err(e) => console.report(&e)?,
            }
        }
    }
}

fn read_capacity<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ConsoleResult<u32> {
    loop {
        let input = console.prompt("Enter room capacity: ")?;
        let capacity = parse_number("Room capacity", &input).and_then(|capacity| {
            validate_positive_number("Room capacity", u64::from(capacity), 1).map(|_| capacity)
        });

        match capacity {
            Ok(capacity) => return Ok(capacity),
            Err(e) => console.report(&e)?,
        }
    }
}

fn read_room_type<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ConsoleResult<RoomType> {
    console.println("Select room type:")?;
    for room_type in RoomType::ALL {
        console.println(&format!("{}. {}", room_type.option_number(), room_type))?;
    }

    loop {
        let input = console.prompt("Choose an option: ")?;
        let selected = parse_number("Room type", &input).and_then(RoomType::from_option_number);

        match selected {
            Ok(room_type) => return Ok(room_type),
            Err(e) => console.report(&e)?,
        }
    }
}

fn no_rooms<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ConsoleResult<()> {
    console.println("\nINFO: No rooms found. Please register a room first (option [1])")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoomStore;
    use std::io::Cursor;
    use std::sync::Arc;

    fn run(service: &RoomService, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        RoomMenu::new(service).run(&mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_add_room_reprompts_until_inputs_are_valid() {
        let service = RoomService::new(Arc::new(RoomStore::new()));
        service.add_room("101", 1, RoomType::Single).unwrap();

        let output = run(&service, "1\n\n101\n102\nzero\n0\n2\n9\n3\n4\n");

        assert!(output.contains("ERROR: Room number must not be empty."));
        assert!(output.contains("This number is already assigned to room ID: 1."));
        assert!(output.contains("Enter a different room number: "));
        assert!(output.contains("ERROR: Room capacity must be a valid integer."));
        assert!(output.contains("ERROR: Room capacity must be at least 1."));
        assert!(output.contains("ERROR: Option '9' is not a valid room type."));
        assert!(output.contains("SUCCESS: Room 102 added successfully (ID 2)."));

        let added = service.find_by_id(RoomId::new(2)).unwrap();
        assert_eq!(added.capacity(), 2);
        assert_eq!(added.room_type(), RoomType::Suite);
    }

    #[test]
    fn test_list_and_find_with_no_rooms() {
        let service = RoomService::new(Arc::new(RoomStore::new()));

        let output = run(&service, "2\n3\n4\n");

        assert_eq!(output.matches("INFO: No rooms found.").count(), 2);
    }

    #[test]
    fn test_find_room_retries_unknown_id() {
        let service = RoomService::new(Arc::new(RoomStore::new()));
        service.add_room("101", 2, RoomType::Double).unwrap();

        let output = run(&service, "3\n7\n1\n4\n");

        assert!(output.contains("ERROR: Room with ID 7 not found."));
        assert!(output.contains("=== Room Details ==="));
        assert!(output.contains("1    | 101    | 2        | DOUBLE"));
    }
}
