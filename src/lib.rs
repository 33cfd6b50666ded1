pub mod cart;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;
pub mod nutrition;
pub mod state;

pub use error::{OrderError, Result};
pub use models::{CartLineItem, FoodItem};
