pub mod toml_config;

use crate::domain::model::NewRoom;
use crate::domain::ports::ConfigProvider;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_HOTEL_NAME: &str = "Hotel Reservation System";

#[derive(Debug, Clone, Parser)]
#[command(name = "hotel-desk")]
#[command(about = "Front desk console for rooms, guests and bookings")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_HOTEL_NAME)]
    pub hotel_name: String,

    /// Accept booking dates before today
    #[arg(long)]
    pub allow_past_dates: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn hotel_name(&self) -> &str {
        &self.hotel_name
    }

    fn allow_past_dates(&self) -> bool {
        self.allow_past_dates
    }

    fn seed_rooms(&self) -> &[NewRoom] {
        // rooms can only be seeded from a config file
        &[]
    }
}

/// Settings the menus need for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub hotel_name: String,
    pub allow_past_dates: bool,
}

impl SessionSettings {
    pub fn from_provider(provider: &dyn ConfigProvider) -> Self {
        Self {
            hotel_name: provider.hotel_name().to_string(),
            allow_past_dates: provider.allow_past_dates(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            hotel_name: DEFAULT_HOTEL_NAME.to_string(),
            allow_past_dates: false,
        }
    }
}
