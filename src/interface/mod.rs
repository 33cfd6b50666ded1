pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_add_ons, prompt_category_filter, prompt_find_item, prompt_menu_item,
    prompt_notes, prompt_quantity, prompt_remove_item, prompt_slot, prompt_yes_no, SessionAction,
};
pub use render::{
    display_cart, display_dashboard, display_item_detail, display_menu, display_schedule,
};
