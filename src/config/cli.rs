use crate::utils::error::{RestaurantError, Result};
use crate::utils::time::parse_time_of_day;
use crate::utils::validation::{validate_path, Validate};
use chrono::NaiveTime;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "restaurant-menu")]
#[command(about = "Check opening hours, browse menus and price orders")]
pub struct CliConfig {
    /// Path to the TOML file describing the restaurants
    #[arg(short, long, default_value = "restaurants.toml")]
    pub config: String,

    /// Evaluate opening hours at this time (HH:MM or HH:MM:SS) instead of now
    #[arg(long, value_parser = parse_at)]
    pub at: Option<NaiveTime>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every restaurant with its hours and whether it is open
    List,
    /// Show whether a restaurant is open
    Status { restaurant: String },
    /// Show a restaurant's details and menu
    Menu { restaurant: String },
    /// Price an order of menu items
    Order {
        restaurant: String,
        #[arg(required = true)]
        items: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_at(value: &str) -> std::result::Result<NaiveTime, String> {
    parse_time_of_day(value).map_err(|e| e.to_string())
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        if let Command::Order { items, .. } = &self.command {
            if items.iter().any(|item| item.trim().is_empty()) {
                return Err(RestaurantError::InvalidConfigValueError {
                    field: "items".to_string(),
                    value: String::new(),
                    reason: "Item names cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
