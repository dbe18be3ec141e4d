use crate::core::restaurant::Restaurant;
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{RestaurantError, Result};

/// The restaurants known to the application, looked up by exact name.
#[derive(Debug, Clone)]
pub struct RestaurantDirectory<C: Clock = SystemClock> {
    restaurants: Vec<Restaurant<C>>,
}

impl<C: Clock> Default for RestaurantDirectory<C> {
    fn default() -> Self {
        Self {
            restaurants: Vec::new(),
        }
    }
}

impl<C: Clock> RestaurantDirectory<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_restaurant(&mut self, restaurant: Restaurant<C>) {
        tracing::debug!(restaurant = %restaurant.name(), "adding restaurant");
        self.restaurants.push(restaurant);
    }

    pub fn find_restaurant_by_name(&self, name: &str) -> Result<&Restaurant<C>> {
        self.restaurants
            .iter()
            .find(|restaurant| restaurant.name() == name)
            .ok_or_else(|| not_found(name))
    }

    pub fn find_restaurant_by_name_mut(&mut self, name: &str) -> Result<&mut Restaurant<C>> {
        self.restaurants
            .iter_mut()
            .find(|restaurant| restaurant.name() == name)
            .ok_or_else(|| not_found(name))
    }

    pub fn remove_restaurant(&mut self, name: &str) -> Result<Restaurant<C>> {
        let index = self
            .restaurants
            .iter()
            .position(|restaurant| restaurant.name() == name)
            .ok_or_else(|| not_found(name))?;
        tracing::debug!(restaurant = %name, "removing restaurant");
        Ok(self.restaurants.remove(index))
    }

    pub fn restaurants(&self) -> &[Restaurant<C>] {
        &self.restaurants
    }

    pub fn open_restaurants(&self) -> impl Iterator<Item = &Restaurant<C>> {
        self.restaurants.iter().filter(|restaurant| restaurant.is_open())
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

impl<C: Clock> FromIterator<Restaurant<C>> for RestaurantDirectory<C> {
    fn from_iter<I: IntoIterator<Item = Restaurant<C>>>(iter: I) -> Self {
        Self {
            restaurants: iter.into_iter().collect(),
        }
    }
}

fn not_found(name: &str) -> RestaurantError {
    RestaurantError::RestaurantNotFound {
        name: name.to_string(),
    }
}
