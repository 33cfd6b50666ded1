use chrono::Timelike;
use clap::Parser;

use macro_kitchen_rs::cart::LineItemDraft;
use macro_kitchen_rs::catalog::{load_catalog, load_targets, sample_catalog, Catalog};
use macro_kitchen_rs::cli::{Cli, Command};
use macro_kitchen_rs::error::{OrderError, Result};
use macro_kitchen_rs::interface::{
    display_cart, display_dashboard, display_item_detail, display_menu, display_schedule,
    prompt_action, prompt_add_ons, prompt_category_filter, prompt_find_item, prompt_menu_item,
    prompt_notes, prompt_quantity, prompt_remove_item, prompt_slot, prompt_yes_no, SessionAction,
};
use macro_kitchen_rs::menu::{
    first_open_slot, is_slot_selectable, open_slots, search_items, visible_items, CategoryFilter,
};
use macro_kitchen_rs::models::{FoodItem, TimeSlot, UserTarget};
use macro_kitchen_rs::state::OrderSession;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => sample_catalog(),
    };
    let targets = match &cli.targets {
        Some(path) => load_targets(path)?,
        None => UserTarget::default(),
    };
    let current_hour = cli.hour.unwrap_or_else(local_hour);

    let command = cli.command.unwrap_or_default();
    match command {
        Command::Order => cmd_order(&catalog, targets, current_hour),
        Command::Menu {
            slot,
            category,
            find,
        } => cmd_menu(&catalog, current_hour, slot, category, find),
        Command::Schedule => cmd_schedule(&catalog, current_hour),
    }
}

/// Hour of day from the local clock. The engine itself never reads time; it
/// only sees this value.
fn local_hour() -> u32 {
    chrono::Local::now().hour()
}

/// Run an interactive ordering session.
fn cmd_order(catalog: &Catalog, targets: UserTarget, current_hour: u32) -> Result<()> {
    let initial_slot = match first_open_slot(catalog.schedule(), current_hour) {
        Some(slot) => slot,
        None => {
            println!("All delivery slots have closed for today.");
            display_schedule(catalog.schedule(), current_hour);
            return Ok(());
        }
    };

    let mut session = OrderSession::new(initial_slot, targets);

    println!("Ordering for: {}", session.active_slot());
    display_schedule(catalog.schedule(), current_hour);

    loop {
        let action = prompt_action(session.item_count())?;

        match action {
            SessionAction::AddItem => {
                let visible = session.visible_items(catalog);
                display_menu(
                    &visible,
                    &session.active_slot().to_string(),
                    session.category_filter().label(),
                );
                if let Some(item) = prompt_menu_item(&visible)? {
                    display_item_detail(item);
                    add_item_flow(&mut session, catalog, item)?;
                }
            }
            SessionAction::FindItem => {
                let visible = session.visible_items(catalog);
                if let Some(item) = prompt_find_item(&visible)? {
                    display_item_detail(item);
                    add_item_flow(&mut session, catalog, item)?;
                }
            }
            SessionAction::ViewCart => {
                display_cart(session.ledger());
            }
            SessionAction::RemoveItem => {
                if session.ledger().is_empty() {
                    println!("Your cart is empty.");
                } else if let Some(id) = prompt_remove_item(session.ledger())? {
                    let removed = session.remove_item(&id);
                    println!("Removed {} line(s).", removed);
                }
            }
            SessionAction::ChangeSlot => {
                let open = open_slots(catalog.schedule(), current_hour);
                if let Some(slot) = prompt_slot(&open)? {
                    if session.select_slot(slot, catalog.schedule(), current_hour) {
                        println!("Now ordering for: {}", session.active_slot());
                    } else {
                        println!("Ordering for {} has closed.", slot);
                    }
                }
            }
            SessionAction::ChangeCategory => {
                let filter = prompt_category_filter()?;
                session.set_category_filter(filter);
                println!("Menu filter: {}", filter.label());
            }
            SessionAction::Dashboard => {
                display_dashboard(&session.nutrition_report());
            }
            SessionAction::Checkout => {
                if session.ledger().is_empty() {
                    println!("Your cart is empty. Start adding macro-friendly meals!");
                    continue;
                }

                display_cart(session.ledger());
                display_dashboard(&session.nutrition_report());

                let prompt = format!("Place this order for {}?", session.active_slot());
                if prompt_yes_no(&prompt, true)? {
                    let delivery = catalog
                        .slot(session.active_slot())
                        .map(|s| s.delivery.clone())
                        .unwrap_or_default();
                    println!(
                        "Order placed! {} items, ${:.2}, arriving around {}.",
                        session.item_count(),
                        session.subtotal(),
                        delivery
                    );
                    break;
                }
            }
            SessionAction::Quit => {
                if session.ledger().is_empty() || prompt_yes_no("Discard the cart and quit?", false)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Customize an item and append it to the cart.
fn add_item_flow(session: &mut OrderSession, catalog: &Catalog, item: &FoodItem) -> Result<()> {
    let mut draft = LineItemDraft::new(item.clone());

    draft.set_quantity(prompt_quantity()?);

    if let Some(notes) = prompt_notes()? {
        draft.set_notes(&notes);
    }

    for id in prompt_add_ons(catalog.add_ons())? {
        draft.toggle_add_on(&id);
    }

    let total = draft.total_price(catalog.add_ons());
    if prompt_yes_no(&format!("Add to cart for ${:.2}?", total), true)? {
        session.add_line(draft.build(catalog.add_ons()));
        println!("Added {}x {} to the cart.", draft.quantity(), draft.item().name);
    }

    Ok(())
}

/// Print the menu for a slot without starting a session.
fn cmd_menu(
    catalog: &Catalog,
    current_hour: u32,
    slot: Option<String>,
    category: Option<String>,
    find: Option<String>,
) -> Result<()> {
    let slot = match slot {
        Some(raw) => raw.parse::<TimeSlot>().map_err(OrderError::InvalidInput)?,
        None => match first_open_slot(catalog.schedule(), current_hour) {
            Some(slot) => slot,
            None => {
                println!("All delivery slots have closed for today.");
                display_schedule(catalog.schedule(), current_hour);
                return Ok(());
            }
        },
    };

    if !is_slot_selectable(catalog.schedule(), slot, current_hour) {
        println!("Ordering for {} has closed.", slot);
        display_schedule(catalog.schedule(), current_hour);
        return Ok(());
    }

    let filter = match category {
        Some(raw) => raw
            .parse::<CategoryFilter>()
            .map_err(OrderError::InvalidInput)?,
        None => CategoryFilter::All,
    };

    let visible = visible_items(catalog.items(), slot, filter);

    if let Some(query) = find {
        let matches = search_items(&visible, &query);
        if matches.is_empty() {
            println!("No matching item found for '{}'", query.trim());
            return Ok(());
        }
        for item in matches {
            display_item_detail(item);
        }
        return Ok(());
    }

    display_menu(&visible, &slot.to_string(), filter.label());
    Ok(())
}

/// Show the delivery schedule with open/closed status.
fn cmd_schedule(catalog: &Catalog, current_hour: u32) -> Result<()> {
    display_schedule(catalog.schedule(), current_hour);
    Ok(())
}
