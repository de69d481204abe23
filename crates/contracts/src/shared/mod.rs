pub mod category;
pub mod menu;
