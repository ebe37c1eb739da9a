use crate::domain::model::NewRoom;
use chrono::NaiveDate;

pub trait ConfigProvider {
    fn hotel_name(&self) -> &str;
    fn allow_past_dates(&self) -> bool;
    fn seed_rooms(&self) -> &[NewRoom];
}

/// Source of "today" for rejecting past booking dates.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
