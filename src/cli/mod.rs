// Text menu front end. Everything here runs on the operator's side of the
// domain: prompting, input checks and rendering.

pub mod booking_menu;
pub mod guest_menu;
pub mod main_menu;
pub mod render;
pub mod room_menu;

pub use booking_menu::BookingMenu;
pub use guest_menu::GuestMenu;
pub use main_menu::MainMenu;
pub use room_menu::RoomMenu;

use crate::utils::error::HotelError;
use crate::utils::validation::{parse_number, validate_range};
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const MENU_OPTIONS: u32 = 4;

const EMPTY_OPTION: &str = "ERROR: Option cannot be empty. Please enter a number between 1 and 4.";
const INVALID_OPTION: &str = "ERROR: Invalid option. Please enter a number between 1 and 4.";

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("input stream closed")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn print(&mut self, text: &str) -> ConsoleResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Reads one line with surrounding whitespace removed.
    pub fn read_line(&mut self) -> ConsoleResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn prompt(&mut self, text: &str) -> ConsoleResult<String> {
        self.print(text)?;
        self.read_line()
    }

    pub fn report(&mut self, err: &HotelError) -> ConsoleResult<()> {
        if !err.is_recoverable() {
            tracing::error!("Unrecoverable failure shown to operator: {}", err);
        }
        self.println(&render::render_error(err))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Shows `menu` and reads a choice in `1..=MENU_OPTIONS`. Returns `None` after
/// telling the operator what was wrong with the input.
pub fn read_menu_option<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    menu: &str,
) -> ConsoleResult<Option<u32>> {
    let input = console.prompt(menu)?;
    if input.is_empty() {
        console.println(EMPTY_OPTION)?;
        return Ok(None);
    }

    match parse_number("Option", &input)
        .and_then(|option| validate_range("Option", option, 1, MENU_OPTIONS).map(|_| option))
    {
        Ok(option) => Ok(Some(option)),
        Err(_) => {
            console.println(INVALID_OPTION)?;
            Ok(None)
        }
    }
}
