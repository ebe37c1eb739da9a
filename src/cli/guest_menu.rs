use crate::cli::render::guest_table;
use crate::cli::{read_menu_option, Console, ConsoleResult};
use crate::core::{GuestId, GuestService};
use crate::utils::error::Result;
use crate::utils::validation::{parse_number, validate_email, validate_non_empty_string};
use std::io::{BufRead, Write};

const MENU: &str = "
=== Guest Management ===
1. Add new guest
2. List all guests
3. Find guest by ID
4. Back

Choose an option: ";

pub struct GuestMenu<'a> {
    guests: &'a GuestService,
}

impl<'a> GuestMenu<'a> {
    pub fn new(guests: &'a GuestService) -> Self {
        Self { guests }
    }

    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        loop {
            match read_menu_option(console, MENU)? {
                Some(1) => self.add_guest(console)?,
                Some(2) => self.list_guests(console)?,
                Some(3) => self.find_guest(console)?,
                Some(_) => return Ok(()),
                None => continue,
            }
        }
    }

    fn add_guest<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        console.println("=== Add New Guest ===")?;
        let name = read_valid(console, "Enter full name: ", |name| {
            validate_non_empty_string("Full name", name)
        })?;
        let email = read_valid(console, "Enter email: ", |email| validate_email("Email", email))?;

        let guest = self.guests.add_guest(&name, &email);
        console.println(&format!(
            "\nSUCCESS: Guest {} added successfully (ID {}).",
            guest.name(),
            guest.id()
        ))
    }

    fn list_guests<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        let guests = self.guests.all();
        if guests.is_empty() {
            return no_guests(console);
        }

        console.println("\n=== List of Guests ===")?;
        console.println(&guest_table(&guests))
    }

    fn find_guest<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        if self.guests.all().is_empty() {
            return no_guests(console);
        }

        console.println("\n=== Find Guest by ID ===")?;
        loop {
            let input = console.prompt("Enter guest ID: ")?;
            let found = parse_number("Guest ID", &input)
                .and_then(|id| self.guests.find_by_id(GuestId::new(id)));

            match found {
                Ok(guest) => {
                    console.println("\n=== Guest Details ===")?;
                    return console.println(&guest_table(&[guest]));
                }
                Err(e) => console.report(&e)?,
            }
        }
    }
}

fn read_valid<R, W, F>(console: &mut Console<R, W>, prompt: &str, check: F) -> ConsoleResult<String>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<()>,
{
    loop {
        let input = console.prompt(prompt)?;
        match check(&input) {
            Ok(()) => return Ok(input),
            Err(e) => console.report(&e)?,
        }
    }
}

fn no_guests<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ConsoleResult<()> {
    console.println("\nINFO: No guests found. Please register a guest first (option [1])")
}
