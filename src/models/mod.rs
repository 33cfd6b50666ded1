mod cart;
mod goals;
mod item;
mod macros;
mod slot;

pub use cart::CartLineItem;
pub use goals::UserTarget;
pub use item::{AddOn, CategoryType, FoodItem, Ingredient, LOW_STOCK_THRESHOLD};
pub use macros::{MacroProfile, MacroSplit};
pub use slot::{DeliverySlot, TimeSlot};
