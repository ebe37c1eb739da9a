use crate::cli::render::booking_table;
use crate::cli::{read_menu_option, Console, ConsoleResult};
use crate::core::{BookingId, BookingService, Clock, GuestId, GuestService, RoomId, RoomService};
use crate::utils::validation::{ensure_not_past, parse_calendar_date, parse_number};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

const MENU: &str = "
=== Booking Management ===
1. Add new booking
2. List all bookings
3. Find booking by ID
4. Back

Choose an option: ";

pub struct BookingMenu<'a> {
    bookings: &'a BookingService,
    rooms: &'a RoomService,
    guests: &'a GuestService,
    clock: &'a dyn Clock,
    allow_past_dates: bool,
}

impl<'a> BookingMenu<'a> {
    pub fn new(
        bookings: &'a BookingService,
        rooms: &'a RoomService,
        guests: &'a GuestService,
        clock: &'a dyn Clock,
        allow_past_dates: bool,
    ) -> Self {
        Self {
            bookings,
            rooms,
            guests,
            clock,
            allow_past_dates,
        }
    }

    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        loop {
            match read_menu_option(console, MENU)? {
                Some(1) => self.add_booking(console)?,
                Some(2) => self.list_bookings(console)?,
                Some(3) => self.find_booking(console)?,
                Some(_) => return Ok(()),
                None => continue,
            }
        }
    }

    fn add_booking<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        console.println("=== Add New Booking ===")?;

        let Some(room_id) = self.read_room_id(console)? else {
            return Ok(());
        };
        let Some(guest_id) = self.read_guest_id(console)? else {
            return Ok(());
        };
        let check_in = self.read_date(console, "Enter check-in date (YYYY-MM-DD): ", "Check-in date")?;
        let check_out =
            self.read_date(console, "Enter check-out date (YYYY-MM-DD): ", "Check-out date")?;

        match self
            .bookings
            .create_booking(room_id, guest_id, check_in, check_out)
        {
            Ok(booking) => console.println(&format!(
                "\nSUCCESS: Booking added successfully (ID {}, {} night(s)).",
                booking.id(),
                booking.nights()
            )),
            Err(e) => console.report(&e),
        }
    }

    /// `None` when the room does not exist: the operator has to register it
    /// first, so the booking is abandoned.
    fn read_room_id<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> ConsoleResult<Option<RoomId>> {
        loop {
            let input = console.prompt("Enter room ID: ")?;
            let id = match parse_number("Room ID", &input) {
                Ok(id) => RoomId::new(id),
                Err(e) => {
                    console.report(&e)?;
                    continue;
                }
            };

            return match self.rooms.find_by_id(id) {
                Ok(room) => Ok(Some(room.id())),
                Err(e) => {
                    console.report(&e)?;
                    console.println("INFO: Please register a room first (option [1]) at the Main Menu.")?;
                    Ok(None)
                }
            };
        }
    }

    fn read_guest_id<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> ConsoleResult<Option<GuestId>> {
        loop {
            let input = console.prompt("Enter guest ID: ")?;
            let id = match parse_number("Guest ID", &input) {
                Ok(id) => GuestId::new(id),
                Err(e) => {
                    console.report(&e)?;
                    continue;
                }
            };

            return match self.guests.find_by_id(id) {
                Ok(guest) => Ok(Some(guest.id())),
                Err(e) => {
                    console.report(&e)?;
                    console.println("INFO: Please register a guest first (option [2]) at the Main Menu.")?;
                    Ok(None)
                }
            };
        }
    }

    fn read_date<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        prompt: &str,
        field_name: &str,
    ) -> ConsoleResult<NaiveDate> {
        loop {
            let input = console.prompt(prompt)?;
            let date = parse_calendar_date(field_name, &input).and_then(|date| {
                if !self.allow_past_dates {
                    ensure_not_past(field_name, date, self.clock.today())?;
                }
                Ok(date)
            });

            match date {
                Ok(date) => return Ok(date),
                Err(e) => console.report(&e)?,
            }
        }
    }

    fn list_bookings<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> ConsoleResult<()> {
        let bookings = self.bookings.all();
        if bookings.is_empty() {
            return no_bookings(console);
        }

        console.println("\n=== List of Bookings ===")?;
        console.println(&booking_table(&bookings))
    }

    fn find_booking<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        if self.bookings.all().is_empty() {
            return no_bookings(console);
        }

        console.println("\n=== Find Booking by ID ===")?;
        loop {
            let input = console.prompt("Enter booking ID: ")?;
            let found = parse_number("Booking ID", &input)
                .and_then(|id| self.bookings.find_by_id(BookingId::new(id)));

            match found {
                Ok(booking) => {
                    console.println("\n=== Booking Details ===")?;
                    return console.println(&booking_table(&[booking]));
                }
                Err(e) => console.report(&e)?,
            }
        }
    }
}

fn no_bookings<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ConsoleResult<()> {
    console.println("\nINFO: No bookings found. Please register a booking first (option [1])")
}
