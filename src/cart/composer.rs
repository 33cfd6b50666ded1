use crate::models::{AddOn, CartLineItem, FoodItem};

/// Resolve selected add-on ids against the catalog, preserving catalog order.
///
/// Unknown ids are dropped; duplicate selections collapse to one entry.
fn resolve_add_ons(selected_ids: &[String], add_ons: &[AddOn]) -> Vec<AddOn> {
    add_ons
        .iter()
        .filter(|add_on| selected_ids.contains(&add_on.id))
        .cloned()
        .collect()
}

/// Build a finalized cart line from a catalog item and its customizations.
///
/// Quantity is floored at 1, unknown add-on ids are dropped, and empty or
/// whitespace-only notes normalize to none.
pub fn compose_line_item(
    item: &FoodItem,
    quantity: u32,
    notes: Option<String>,
    add_on_ids: &[String],
    add_ons: &[AddOn],
) -> CartLineItem {
    let notes = notes.and_then(|n| {
        let trimmed = n.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    });

    CartLineItem::new(
        item.clone(),
        quantity,
        notes,
        resolve_add_ons(add_on_ids, add_ons),
    )
}

/// A pending line composition being customized before it enters the cart.
///
/// Covers the quick-view flow: quantity stepping floored at one serving,
/// kitchen notes, add-on toggling, and live price previews resolved against
/// the add-on catalog.
#[derive(Debug, Clone)]
pub struct LineItemDraft {
    item: FoodItem,
    quantity: u32,
    notes: String,
    selected_add_on_ids: Vec<String>,
}

impl LineItemDraft {
    /// Start a fresh draft: one serving, no notes, no add-ons.
    pub fn new(item: FoodItem) -> Self {
        Self {
            item,
            quantity: 1,
            notes: String::new(),
            selected_add_on_ids: Vec::new(),
        }
    }

    /// The item being customized.
    pub fn item(&self) -> &FoodItem {
        &self.item
    }

    /// Current serving count.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Add one serving.
    pub fn increment_quantity(&mut self) {
        self.quantity += 1;
    }

    /// Remove one serving; a draft never drops below one.
    pub fn decrement_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Set the serving count directly, floored at 1.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    /// Replace the kitchen notes.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_string();
    }

    /// Toggle an add-on: an absent id is selected, a present id deselected.
    pub fn toggle_add_on(&mut self, add_on_id: &str) {
        if let Some(pos) = self
            .selected_add_on_ids
            .iter()
            .position(|id| id == add_on_id)
        {
            self.selected_add_on_ids.remove(pos);
        } else {
            self.selected_add_on_ids.push(add_on_id.to_string());
        }
    }

    /// Whether an add-on id is currently selected.
    pub fn has_add_on(&self, add_on_id: &str) -> bool {
        self.selected_add_on_ids.iter().any(|id| id == add_on_id)
    }

    /// Currently selected add-on ids in selection order.
    pub fn selected_add_on_ids(&self) -> &[String] {
        &self.selected_add_on_ids
    }

    /// Preview price of one serving with the current add-on selection.
    pub fn unit_price(&self, add_ons: &[AddOn]) -> f64 {
        let add_on_total: f64 = resolve_add_ons(&self.selected_add_on_ids, add_ons)
            .iter()
            .map(|a| a.price)
            .sum();
        self.item.price + add_on_total
    }

    /// Preview price of the whole pending line.
    pub fn total_price(&self, add_ons: &[AddOn]) -> f64 {
        self.unit_price(add_ons) * self.quantity as f64
    }

    /// Finalize the draft into an immutable cart line.
    pub fn build(&self, add_ons: &[AddOn]) -> CartLineItem {
        compose_line_item(
            &self.item,
            self.quantity,
            Some(self.notes.clone()),
            &self.selected_add_on_ids,
            add_ons,
        )
    }
}
