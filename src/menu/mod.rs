pub mod availability;
pub mod filter;

pub use availability::{first_open_slot, is_slot_open, is_slot_selectable, open_slots};
pub use filter::{search_items, visible_items, CategoryFilter};
