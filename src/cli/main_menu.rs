use crate::cli::{read_menu_option, BookingMenu, Console, ConsoleError, ConsoleResult, GuestMenu, RoomMenu};
use crate::config::SessionSettings;
use crate::core::{Clock, FrontDesk};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const MENU: &str = "
=== Main Menu ===
1. Room Management
2. Guest Management
3. Booking Management
4. Exit

Choose an option: ";

pub struct MainMenu<'a> {
    desk: &'a FrontDesk,
    settings: &'a SessionSettings,
    clock: &'a dyn Clock,
}

impl<'a> MainMenu<'a> {
    pub fn new(desk: &'a FrontDesk, settings: &'a SessionSettings, clock: &'a dyn Clock) -> Self {
        Self {
            desk,
            settings,
            clock,
        }
    }

    /// Runs the session until the operator exits or input runs out. Closed
    /// input is a normal end of session, only I/O failures are returned.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        info!("Session started for {}", self.settings.hotel_name);

        match self.session(console) {
            Ok(()) => {
                info!("Session ended by operator");
                Ok(())
            }
            Err(ConsoleError::InputClosed) => {
                info!("Input closed, ending session");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn session<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        console.println(&format!("=== {} ===", self.settings.hotel_name))?;

        loop {
            match read_menu_option(console, MENU)? {
                Some(1) => {
                    debug!("Entering room management");
                    RoomMenu::new(self.desk.rooms()).run(console)?;
                }
                Some(2) => {
                    debug!("Entering guest management");
                    GuestMenu::new(self.desk.guests()).run(console)?;
                }
                Some(3) => {
                    debug!("Entering booking management");
                    BookingMenu::new(
                        self.desk.bookings(),
                        self.desk.rooms(),
                        self.desk.guests(),
                        self.clock,
                        self.settings.allow_past_dates,
                    )
                    .run(console)?;
                }
                Some(_) => return self.farewell(console),
                None => continue,
            }
        }
    }

    fn farewell<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        console.println(&format!(
            "\n=== Program terminated ===\nThank you for using {}.\n",
            self.settings.hotel_name
        ))
    }
}
