use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::cart::CartLedger;
use crate::error::{OrderError, Result};
use crate::menu::{self, CategoryFilter};
use crate::models::{AddOn, CategoryType, DeliverySlot, FoodItem, TimeSlot};

/// Top-level actions in the ordering session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    AddItem,
    FindItem,
    ViewCart,
    RemoveItem,
    ChangeSlot,
    ChangeCategory,
    Dashboard,
    Checkout,
    Quit,
}

/// Prompt for the next session action.
pub fn prompt_action(item_count: u32) -> Result<SessionAction> {
    let options = [
        "Add an item".to_string(),
        "Find an item by name".to_string(),
        format!("View cart ({})", item_count),
        "Remove an item".to_string(),
        "Change delivery slot".to_string(),
        "Change goal filter".to_string(),
        "Nutrition dashboard".to_string(),
        "Checkout".to_string(),
        "Quit".to_string(),
    ];

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => SessionAction::AddItem,
        1 => SessionAction::FindItem,
        2 => SessionAction::ViewCart,
        3 => SessionAction::RemoveItem,
        4 => SessionAction::ChangeSlot,
        5 => SessionAction::ChangeCategory,
        6 => SessionAction::Dashboard,
        7 => SessionAction::Checkout,
        _ => SessionAction::Quit,
    })
}

/// Pick a delivery slot among the open ones. Returns None on cancel.
pub fn prompt_slot(open: &[&DeliverySlot]) -> Result<Option<TimeSlot>> {
    let mut options: Vec<String> = open
        .iter()
        .map(|slot| {
            format!(
                "{} (order by {}, delivered {})",
                slot.label, slot.cutoff, slot.delivery
            )
        })
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Deliver for which slot?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(open.get(selection).map(|slot| slot.id))
}

/// Pick a menu filter: all goals or a single category.
pub fn prompt_category_filter() -> Result<CategoryFilter> {
    let mut options = vec!["All Goals".to_string()];
    options.extend(CategoryType::ALL.iter().map(|c| c.label().to_string()));

    let selection = Select::new()
        .with_prompt("Filter the menu by goal")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => CategoryFilter::All,
        n => CategoryFilter::Only(CategoryType::ALL[n - 1]),
    })
}

/// Pick an item from the visible menu. Returns None on cancel or empty menu.
pub fn prompt_menu_item<'a>(items: &[&'a FoodItem]) -> Result<Option<&'a FoodItem>> {
    if items.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                "{} - ${:.2} ({} kcal)",
                item.name, item.price, item.macros.calories
            )
        })
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Which item?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(items.get(selection).copied())
}

/// Find a menu item by name with fuzzy matching. Empty input cancels.
pub fn prompt_find_item<'a>(items: &[&'a FoodItem]) -> Result<Option<&'a FoodItem>> {
    let input: String = Input::new()
        .with_prompt("Item name (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let matches = menu::search_items(items, input);

    if matches.is_empty() {
        println!("No matching item found for '{}'", input);
        return Ok(None);
    }

    if matches.len() == 1 {
        let item = matches[0];
        if item.name.to_lowercase() == input.to_lowercase() {
            return Ok(Some(item));
        }

        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", item.name))
            .default(true)
            .interact()?;
        return Ok(if confirm { Some(item) } else { None });
    }

    // Multiple matches - let user select
    let options: Vec<String> = matches.iter().take(5).map(|i| i.name.clone()).collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(matches[selection]))
    } else {
        Ok(None)
    }
}

/// Ask how many servings.
pub fn prompt_quantity() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many servings?")
        .default("1".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| OrderError::InvalidInput("Invalid number".to_string()))
}

/// Optional kitchen notes; empty input means none.
pub fn prompt_notes() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Notes for the kitchen (optional)")
        .allow_empty(true)
        .interact_text()?;

    let trimmed = input.trim();
    Ok(if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    })
}

/// Multi-select add-ons; returns the chosen ids.
pub fn prompt_add_ons(add_ons: &[AddOn]) -> Result<Vec<String>> {
    if add_ons.is_empty() {
        return Ok(Vec::new());
    }

    let options: Vec<String> = add_ons
        .iter()
        .map(|a| format!("{} (+${:.2})", a.name, a.price))
        .collect();

    let selections = MultiSelect::new()
        .with_prompt("Any add-ons? (space to toggle, enter to confirm)")
        .items(&options)
        .interact()?;

    Ok(selections
        .into_iter()
        .map(|i| add_ons[i].id.clone())
        .collect())
}

/// Pick a cart item to remove. Offers each distinct item once; removal
/// drops every line for that item. Returns None on cancel or empty cart.
pub fn prompt_remove_item(ledger: &CartLedger) -> Result<Option<String>> {
    if ledger.is_empty() {
        return Ok(None);
    }

    let mut ids: Vec<&str> = Vec::new();
    let mut options: Vec<String> = Vec::new();
    for line in ledger.lines() {
        if !ids.contains(&line.item_id()) {
            ids.push(line.item_id());
            options.push(line.item().name.clone());
        }
    }
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Remove which item?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ids.get(selection).map(|id| id.to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
