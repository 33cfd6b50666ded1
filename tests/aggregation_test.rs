use assert_float_eq::*;

use macro_kitchen_rs::cart::{compose_line_item, CartLedger, LineItemDraft};
use macro_kitchen_rs::catalog::{sample_catalog, Catalog};
use macro_kitchen_rs::models::{CartLineItem, UserTarget};
use macro_kitchen_rs::nutrition::{aggregate_macros, progress, remaining, NutritionReport};

fn line(catalog: &Catalog, id: &str, quantity: u32, add_on_ids: &[&str]) -> CartLineItem {
    let ids: Vec<String> = add_on_ids.iter().map(|s| s.to_string()).collect();
    compose_line_item(
        catalog.item(id).unwrap(),
        quantity,
        None,
        &ids,
        catalog.add_ons(),
    )
}

#[test]
fn test_subtotal_is_additive_over_append() {
    let catalog = sample_catalog();
    let mut ledger = CartLedger::new();

    ledger.append(line(&catalog, "2", 1, &[]));
    let before = ledger.subtotal();

    let added = line(&catalog, "4", 3, &["ao1"]);
    let added_total = added.line_total();
    ledger.append(added);

    assert_float_absolute_eq!(ledger.subtotal(), before + added_total, 0.001);
    // Whey shake at 5.00 plus protein powder at 5.00, three servings.
    assert_float_absolute_eq!(added_total, 30.0, 0.001);
}

#[test]
fn test_remove_restores_macro_totals() {
    let catalog = sample_catalog();
    let mut ledger = CartLedger::new();

    ledger.append(line(&catalog, "1", 1, &[]));
    ledger.append(line(&catalog, "4", 2, &[]));
    let before = aggregate_macros(&ledger);

    ledger.append(line(&catalog, "5", 1, &["ao2"]));
    let removed = ledger.remove_by_item_id("5");

    assert_eq!(removed, 1);
    let after = aggregate_macros(&ledger);
    assert_float_absolute_eq!(after.calories, before.calories, 0.001);
    assert_float_absolute_eq!(after.protein, before.protein, 0.001);
    assert_float_absolute_eq!(after.carbs, before.carbs, 0.001);
    assert_float_absolute_eq!(after.fat, before.fat, 0.001);
}

#[test]
fn test_chicken_rice_double_serving_scenario() {
    let catalog = sample_catalog();
    let mut ledger = CartLedger::new();

    // Pro-Gain Chicken Rice: 12.50, 69g protein per serving.
    ledger.append(line(&catalog, "1", 2, &[]));

    assert_float_absolute_eq!(ledger.subtotal(), 25.0, 0.001);
    assert_float_absolute_eq!(aggregate_macros(&ledger).protein, 138.0, 0.001);

    assert_eq!(ledger.remove_by_item_id("1"), 1);
    assert_float_absolute_eq!(ledger.subtotal(), 0.0, 0.001);
    assert_float_absolute_eq!(aggregate_macros(&ledger).protein, 0.0, 0.001);
}

#[test]
fn test_add_on_pricing_scenario() {
    let catalog = sample_catalog();
    let chicken = catalog.item("1").unwrap();

    let mut draft = LineItemDraft::new(chicken.clone());
    draft.toggle_add_on("ao1");
    draft.toggle_add_on("ao2");

    // 12.50 base plus 5.00 and 2.00 add-ons.
    assert_float_absolute_eq!(draft.unit_price(catalog.add_ons()), 19.5, 0.001);
    assert_float_absolute_eq!(draft.total_price(catalog.add_ons()), 19.5, 0.001);

    // Decrementing at one serving is a no-op.
    draft.decrement_quantity();
    assert_eq!(draft.quantity(), 1);

    let built = draft.build(catalog.add_ons());
    assert_float_absolute_eq!(built.line_total(), 19.5, 0.001);
}

#[test]
fn test_add_on_toggle_is_involution() {
    let catalog = sample_catalog();
    let shake = catalog.item("4").unwrap();

    let mut draft = LineItemDraft::new(shake.clone());
    draft.toggle_add_on("ao3");
    let selected = draft.selected_add_on_ids().to_vec();

    draft.toggle_add_on("ao1");
    draft.toggle_add_on("ao1");

    assert_eq!(draft.selected_add_on_ids(), selected.as_slice());
}

#[test]
fn test_duplicate_item_lines_never_merge() {
    let catalog = sample_catalog();
    let mut ledger = CartLedger::new();

    ledger.append(line(&catalog, "3", 1, &[]));
    ledger.append(line(&catalog, "3", 2, &["ao3"]));

    assert_eq!(ledger.lines().len(), 2);
    assert_eq!(ledger.total_item_count(), 3);

    // Identity removal drops both lines at once.
    assert_eq!(ledger.remove_by_item_id("3"), 2);
    assert!(ledger.is_empty());
}

#[test]
fn test_progress_bounds_and_monotonicity() {
    let goal = 160.0;
    let mut last = -1.0;

    for consumed in [0.0, 40.0, 80.0, 159.0, 160.0, 400.0] {
        let ratio = progress(consumed, goal);
        assert!(ratio >= 0.0 && ratio <= 1.0, "ratio out of bounds: {}", ratio);
        assert!(ratio >= last, "progress went backwards: {} -> {}", last, ratio);
        last = ratio;
    }

    assert_float_absolute_eq!(progress(80.0, goal), 0.5, 0.001);
    assert_float_absolute_eq!(progress(400.0, goal), 1.0, 0.001);
}

#[test]
fn test_remaining_monotonic_and_floored() {
    let goal = 60.0;
    let mut last = f64::MAX;

    for consumed in [0.0, 10.0, 30.0, 60.0, 90.0] {
        let left = remaining(consumed, goal);
        assert!(left >= 0.0, "remaining went negative: {}", left);
        assert!(left <= last, "remaining increased: {} -> {}", last, left);
        last = left;
    }

    assert_float_absolute_eq!(remaining(90.0, goal), 0.0, 0.001);
}

#[test]
fn test_empty_cart_report() {
    let ledger = CartLedger::new();
    let totals = aggregate_macros(&ledger);

    assert_float_absolute_eq!(totals.calories, 0.0, 0.001);
    assert_float_absolute_eq!(totals.protein, 0.0, 0.001);

    let report = NutritionReport::new(totals, &UserTarget::default());
    for goal in report.goals() {
        assert_float_absolute_eq!(goal.remaining, goal.goal, 0.001);
        assert!(!goal.is_met());
    }
}

#[test]
fn test_add_ons_price_but_never_feed_macros() {
    let catalog = sample_catalog();
    let mut ledger = CartLedger::new();

    ledger.append(line(&catalog, "4", 1, &[]));
    let plain = aggregate_macros(&ledger);
    let plain_subtotal = ledger.subtotal();

    ledger.remove_by_item_id("4");
    ledger.append(line(&catalog, "4", 1, &["ao1", "ao2", "ao3"]));
    let loaded = aggregate_macros(&ledger);

    assert_float_absolute_eq!(loaded.protein, plain.protein, 0.001);
    assert_float_absolute_eq!(loaded.calories, plain.calories, 0.001);
    assert_float_absolute_eq!(ledger.subtotal(), plain_subtotal + 9.0, 0.001);
}
