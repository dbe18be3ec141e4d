pub mod directory;
pub mod menu;
pub mod restaurant;
