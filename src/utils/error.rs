use chrono::NaiveTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestaurantError {
    #[error("Item not found: {name}")]
    ItemNotFound { name: String },

    #[error("Restaurant not found: {name}")]
    RestaurantNotFound { name: String },

    #[error("Invalid operating hours: opening {opening} must be before closing {closing}")]
    InvalidOperatingHours {
        opening: NaiveTime,
        closing: NaiveTime,
    },

    #[error("Invalid time of day '{value}', expected HH:MM or HH:MM:SS")]
    InvalidTimeFormat { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl RestaurantError {
    /// True for lookups that missed, as opposed to broken input.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ItemNotFound { .. } | Self::RestaurantNotFound { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ItemNotFound { name } => format!("'{}' is not on the menu", name),
            Self::RestaurantNotFound { name } => format!("No restaurant named '{}'", name),
            Self::InvalidOperatingHours { opening, closing } => format!(
                "Opening time {} is not before closing time {}",
                opening, closing
            ),
            Self::InvalidTimeFormat { value } => format!("Could not read '{}' as a time", value),
            Self::IoError(e) => format!("Could not read file: {}", e),
            Self::SerializationError(e) => format!("Could not produce output: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for {} is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Configuration is missing {}", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ItemNotFound { .. } => "Run the `menu` command to see the available items",
            Self::RestaurantNotFound { .. } => {
                "Run the `list` command to see the configured restaurants"
            }
            Self::InvalidOperatingHours { .. } => {
                "Overnight hours are not supported; closing time must be later the same day"
            }
            Self::InvalidTimeFormat { .. } => "Use a 24-hour time such as 10:30 or 22:00:00",
            Self::IoError(_) => "Check that the config file exists and is readable",
            Self::SerializationError(_) => "Try again with --format text",
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the config file and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, RestaurantError>;
