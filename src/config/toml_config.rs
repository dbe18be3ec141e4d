use crate::core::directory::RestaurantDirectory;
use crate::core::restaurant::Restaurant;
use crate::domain::model::MenuItem;
use crate::domain::ports::Clock;
use crate::utils::error::{RestaurantError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_operating_window,
    validate_time_of_day, validate_unique_names, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantsConfig {
    #[serde(default)]
    pub restaurants: Vec<RestaurantConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantConfig {
    pub name: String,
    pub location: String,
    /// `HH:MM` or `HH:MM:SS`, 24-hour.
    pub opening_time: String,
    pub closing_time: String,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

impl RestaurantsConfig {
    /// Load restaurants from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RestaurantError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RestaurantError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            RestaurantError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Build every configured restaurant, each sharing a copy of `clock`.
    pub fn build_directory<C: Clock + Clone>(&self, clock: C) -> Result<RestaurantDirectory<C>> {
        self.restaurants
            .iter()
            .map(|restaurant| restaurant.build_restaurant(clock.clone()))
            .collect()
    }
}

impl RestaurantConfig {
    pub fn build_restaurant<C: Clock>(&self, clock: C) -> Result<Restaurant<C>> {
        let opening = validate_time_of_day("opening_time", &self.opening_time)?;
        let closing = validate_time_of_day("closing_time", &self.closing_time)?;

        let mut restaurant =
            Restaurant::with_clock(&self.name, &self.location, opening, closing, clock)?;
        for item in &self.menu {
            restaurant.add_to_menu(&item.name, item.price);
        }
        Ok(restaurant)
    }
}

impl Validate for RestaurantsConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("restaurants", &self.restaurants)?;
        validate_unique_names(
            "restaurants.name",
            self.restaurants.iter().map(|r| r.name.as_str()),
        )?;

        for (index, restaurant) in self.restaurants.iter().enumerate() {
            let prefix = format!("restaurants[{}]", index);
            validate_non_empty_string(&format!("{}.name", prefix), &restaurant.name)?;
            validate_non_empty_string(&format!("{}.location", prefix), &restaurant.location)?;

            let opening =
                validate_time_of_day(&format!("{}.opening_time", prefix), &restaurant.opening_time)?;
            let closing =
                validate_time_of_day(&format!("{}.closing_time", prefix), &restaurant.closing_time)?;
            validate_operating_window(opening, closing)?;

            for (item_index, item) in restaurant.menu.iter().enumerate() {
                validate_non_empty_string(
                    &format!("{}.menu[{}].name", prefix, item_index),
                    &item.name,
                )?;
            }
        }

        Ok(())
    }
}
