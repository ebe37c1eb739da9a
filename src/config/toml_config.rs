use crate::domain::model::NewRoom;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{HotelError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub hotel: HotelSection,
    pub booking: Option<BookingSection>,
    pub logging: Option<LoggingSection>,
    #[serde(default)]
    pub rooms: Vec<NewRoom>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSection {
    pub allow_past_dates: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HotelError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HotelError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable `VAR`.
    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HotelError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("hotel.name", &self.hotel.name)?;

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            if LogFormat::parse(format).is_none() {
                return Err(HotelError::InvalidValue {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: "Unsupported log format. Valid formats: compact, json".to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for room in &self.rooms {
            validate_non_empty_string("rooms.number", &room.number)?;
            validate_positive_number("rooms.capacity", u64::from(room.capacity), 1)?;

            if !seen.insert(room.number.as_str()) {
                return Err(HotelError::InvalidValue {
                    field: "rooms.number".to_string(),
                    value: room.number.clone(),
                    reason: "Room number is listed more than once".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .and_then(LogFormat::parse)
            .unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn hotel_name(&self) -> &str {
        &self.hotel.name
    }

    fn allow_past_dates(&self) -> bool {
        self.booking
            .as_ref()
            .and_then(|b| b.allow_past_dates)
            .unwrap_or(false)
    }

    fn seed_rooms(&self) -> &[NewRoom] {
        &self.rooms
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
