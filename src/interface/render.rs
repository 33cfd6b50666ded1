use crate::cart::CartLedger;
use crate::menu;
use crate::models::{DeliverySlot, FoodItem};
use crate::nutrition::NutritionReport;

/// Width of a dashboard progress bar in characters.
const BAR_WIDTH: usize = 20;

/// Display the visible menu in a formatted table.
pub fn display_menu(items: &[&FoodItem], slot_label: &str, filter_label: &str) {
    if items.is_empty() {
        println!("No meals available for {} under {}.", slot_label, filter_label);
        return;
    }

    println!();
    println!("=== Menu: {} / {} ===", slot_label, filter_label);
    println!();

    // Find max item name length for alignment
    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for (i, item) in items.iter().enumerate() {
        let mut tags = item.tags.clone();
        if item.is_low_stock() {
            tags.push(format!("Only {} left", item.stock));
        }

        let tags_str = if tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", tags.join(", "))
        };

        println!(
            "{:>3}. {:<width$} ${:>5.2} | {:>4} kcal | P:{} C:{} F:{}{}",
            i + 1,
            item.name,
            item.price,
            item.macros.calories,
            item.macros.protein,
            item.macros.carbs,
            item.macros.fat,
            tags_str,
            width = max_name_len
        );
    }

    println!();
}

/// Display one item in full: description, ingredients, macros, and the
/// calorie split.
pub fn display_item_detail(item: &FoodItem) {
    println!();
    println!("=== {} - ${:.2} ===", item.name, item.price);
    println!("{}", item.description);

    if !item.tags.is_empty() {
        println!("Tags: {}", item.tags.join(", "));
    }
    if item.is_low_stock() {
        println!("Only {} left!", item.stock);
    }

    if !item.ingredients.is_empty() {
        println!();
        println!("Ingredients:");
        for ingredient in &item.ingredients {
            println!("  {} ({})", ingredient.name, ingredient.amount);
        }
    }

    let split = item.macros.calorie_split();
    println!();
    println!(
        "{} kcal | P:{}g C:{}g F:{}g",
        item.macros.calories, item.macros.protein, item.macros.carbs, item.macros.fat
    );
    println!(
        "Calorie split: {:.0}% protein, {:.0}% carbs, {:.0}% fat",
        split.protein * 100.0,
        split.carbs * 100.0,
        split.fat * 100.0
    );
    println!();
}

/// Display delivery slots with their status at the given hour.
pub fn display_schedule(schedule: &[DeliverySlot], current_hour: u32) {
    println!();
    println!("=== Delivery Schedule ===");
    println!();

    let max_label_len = schedule.iter().map(|s| s.label.len()).max().unwrap_or(10);

    for slot in schedule {
        let status = if menu::is_slot_open(slot, current_hour) {
            "OPEN"
        } else {
            "CLOSED"
        };

        println!(
            "  {:<width$} order by {:>8}, delivered {:>8}  [{}]",
            slot.label,
            slot.cutoff,
            slot.delivery,
            status,
            width = max_label_len
        );
    }

    println!();
}

/// Display the cart: lines with their customizations, then totals.
pub fn display_cart(ledger: &CartLedger) {
    if ledger.is_empty() {
        println!("Your cart is empty. Start adding macro-friendly meals!");
        return;
    }

    println!();
    println!("=== Your Order ===");
    println!();

    for line in ledger.lines() {
        let macros = line.macro_contribution();

        println!(
            "{}x {} - ${:.2}",
            line.quantity(),
            line.item().name,
            line.line_total()
        );
        println!("   {}g protein | {} kcal", macros.protein, macros.calories);

        for add_on in line.add_ons() {
            println!("   + {}", add_on.name);
        }
        if let Some(notes) = line.notes() {
            println!("   \"{}\"", notes);
        }
    }

    let total_protein: f64 = ledger
        .lines()
        .iter()
        .map(|line| line.macro_contribution().protein)
        .sum();

    println!();
    println!("--- Summary ---");
    println!("Items: {}", ledger.total_item_count());
    println!("Protein total (base): {:.0}g", total_protein);
    println!("Subtotal: ${:.2}", ledger.subtotal());
    println!();
}

/// Display the nutrition dashboard: one progress bar per goal.
pub fn display_dashboard(report: &NutritionReport) {
    println!();
    println!("=== Nutrition Dashboard ===");
    println!();

    for goal in report.goals() {
        let filled = (goal.ratio * BAR_WIDTH as f64).round() as usize;
        let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));

        let status = if goal.is_met() {
            "Goal hit!".to_string()
        } else {
            format!("{:.0}{} needed", goal.remaining, goal.unit)
        };

        println!(
            "{:<8} [{}] {:>5.0} / {:.0} {:<4} {}",
            goal.label, bar, goal.consumed, goal.goal, goal.unit, status
        );
    }

    println!();
}
