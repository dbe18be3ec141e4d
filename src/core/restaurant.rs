use crate::core::menu::Menu;
use crate::domain::model::{MenuItem, OrderSummary};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::Result;
use crate::utils::validation::validate_operating_window;
use chrono::NaiveTime;
use std::fmt;

/// A restaurant with a same-day operating window `[opening, closing)` and a menu.
///
/// The clock is injected so callers decide what "now" means; [`Restaurant::new`]
/// uses the local wall clock.
#[derive(Debug, Clone)]
pub struct Restaurant<C: Clock = SystemClock> {
    name: String,
    location: String,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    menu: Menu,
    clock: C,
}

impl Restaurant<SystemClock> {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Result<Self> {
        Self::with_clock(name, location, opening_time, closing_time, SystemClock)
    }
}

impl<C: Clock> Restaurant<C> {
    pub fn with_clock(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
        clock: C,
    ) -> Result<Self> {
        validate_operating_window(opening_time, closing_time)?;
        Ok(Self {
            name: name.into(),
            location: location.into(),
            opening_time,
            closing_time,
            menu: Menu::new(),
            clock,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.opening_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }

    pub fn current_time(&self) -> NaiveTime {
        self.clock.now()
    }

    pub fn is_open(&self) -> bool {
        self.is_open_at(self.current_time())
    }

    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        self.opening_time <= time && time < self.closing_time
    }

    pub fn menu(&self) -> &[MenuItem] {
        self.menu.as_slice()
    }

    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.menu.find(name)
    }

    pub fn add_to_menu(&mut self, name: impl Into<String>, price: u32) {
        let item = MenuItem::new(name, price);
        tracing::debug!(restaurant = %self.name, item = %item, "adding menu item");
        self.menu.push(item);
    }

    pub fn remove_from_menu(&mut self, name: &str) -> Result<MenuItem> {
        let removed = self.menu.remove(name)?;
        tracing::debug!(restaurant = %self.name, item = %removed, "removed menu item");
        Ok(removed)
    }

    /// Sums the price of every selected item. A name selected twice is
    /// charged twice; a name missing from the menu fails the whole order.
    pub fn calculate_total_order_cost<S: AsRef<str>>(&self, selected_items: &[S]) -> Result<u64> {
        self.menu.total_for(selected_items)
    }

    pub fn order_summary<S: AsRef<str>>(&self, selected_items: &[S]) -> Result<OrderSummary> {
        let items: Vec<MenuItem> = self
            .menu
            .select(selected_items)?
            .into_iter()
            .cloned()
            .collect();
        let total = items.iter().map(|item| u64::from(item.price)).sum();

        Ok(OrderSummary {
            restaurant: self.name.clone(),
            items,
            total,
        })
    }
}

impl<C: Clock> fmt::Display for Restaurant<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Restaurant:{}", self.name)?;
        writeln!(f, "Location:{}", self.location)?;
        writeln!(f, "Opening time:{}", self.opening_time)?;
        writeln!(f, "Closing time:{}", self.closing_time)?;
        write!(f, "Menu:")?;
        for item in &self.menu {
            write!(f, "\n{}", item)?;
        }
        Ok(())
    }
}
