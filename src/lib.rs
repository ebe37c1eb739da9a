pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod store;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig, SessionSettings};
pub use core::{BookingService, FrontDesk, GuestService, RoomService};
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use utils::error::{HotelError, Result};
