use crate::domain::model::MenuItem;
use crate::utils::error::{RestaurantError, Result};
use serde::Serialize;

/// Insertion-ordered list of menu items, looked up by name.
///
/// Names are not required to be unique. Every lookup resolves to the first
/// item carrying the requested name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn remove(&mut self, name: &str) -> Result<MenuItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| RestaurantError::ItemNotFound {
                name: name.to_string(),
            })?;
        Ok(self.items.remove(index))
    }

    /// Resolves every name to its menu item, keeping selection order.
    /// Fails on the first name that is not on the menu.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&MenuItem>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.find(name).ok_or_else(|| RestaurantError::ItemNotFound {
                    name: name.to_string(),
                })
            })
            .collect()
    }

    pub fn total_for<S: AsRef<str>>(&self, names: &[S]) -> Result<u64> {
        Ok(self
            .select(names)?
            .into_iter()
            .map(|item| u64::from(item.price))
            .sum())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[MenuItem] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<MenuItem> for Menu {
    fn from_iter<I: IntoIterator<Item = MenuItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        [
            MenuItem::new("Sweet corn soup", 119),
            MenuItem::new("Vegetable lasagne", 269),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_duplicates_resolve_to_first_entry() {
        let mut menu = sample_menu();
        menu.push(MenuItem::new("Sweet corn soup", 150));

        assert_eq!(menu.len(), 3);
        assert_eq!(menu.find("Sweet corn soup").unwrap().price, 119);

        let removed = menu.remove("Sweet corn soup").unwrap();
        assert_eq!(removed.price, 119);
        assert_eq!(menu.find("Sweet corn soup").unwrap().price, 150);
    }

    #[test]
    fn test_remove_preserves_order_of_remaining_items() {
        let mut menu = sample_menu();
        menu.push(MenuItem::new("Coffee", 199));
        menu.remove("Vegetable lasagne").unwrap();

        let names: Vec<&str> = menu.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Sweet corn soup", "Coffee"]);
    }

    #[test]
    fn test_remove_missing_leaves_menu_untouched() {
        let mut menu = sample_menu();
        let before = menu.clone();

        let err = menu.remove("French fries").unwrap_err();
        assert!(matches!(err, RestaurantError::ItemNotFound { ref name } if name == "French fries"));
        assert_eq!(menu, before);
    }

    #[test]
    fn test_total_counts_repeated_selections() {
        let menu = sample_menu();
        let total = menu
            .total_for(&["Sweet corn soup", "Sweet corn soup", "Vegetable lasagne"])
            .unwrap();
        assert_eq!(total, 119 + 119 + 269);
    }

    #[test]
    fn test_total_reports_first_unknown_name() {
        let menu = sample_menu();
        match menu.total_for(&["Sweet corn soup", "Pizza", "Burger"]) {
            Err(RestaurantError::ItemNotFound { name }) => assert_eq!(name, "Pizza"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let json = serde_json::to_value(sample_menu()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"name": "Sweet corn soup", "price": 119},
                {"name": "Vegetable lasagne", "price": 269}
            ])
        );
    }
}
