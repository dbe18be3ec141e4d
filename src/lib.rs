pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, OutputFormat};
pub use config::{RestaurantConfig, RestaurantsConfig};

pub use crate::core::{directory::RestaurantDirectory, menu::Menu, restaurant::Restaurant};
pub use domain::model::{MenuItem, OrderSummary};
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use utils::error::{RestaurantError, Result};
