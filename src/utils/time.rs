use crate::utils::error::{RestaurantError, Result};
use chrono::NaiveTime;

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parses a 24-hour time of day, with or without seconds.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| RestaurantError::InvalidTimeFormat {
            value: value.to_string(),
        })
}
