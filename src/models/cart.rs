use crate::models::item::{AddOn, FoodItem};
use crate::models::macros::MacroProfile;

/// One customized order line: a snapshot of a catalog item plus the
/// quantity, notes, and add-ons chosen at add-to-cart time.
///
/// The snapshot is a value copy, so later catalog changes never alter an
/// existing line. Fields are private to keep the quantity invariant (>= 1)
/// intact; price and macro figures are derived on demand, not stored.
#[derive(Debug, Clone)]
pub struct CartLineItem {
    item: FoodItem,
    quantity: u32,
    notes: Option<String>,
    selected_add_ons: Vec<AddOn>,
}

impl CartLineItem {
    /// Build a line item. Quantities below 1 are raised to 1.
    pub fn new(
        item: FoodItem,
        quantity: u32,
        notes: Option<String>,
        selected_add_ons: Vec<AddOn>,
    ) -> Self {
        Self {
            item,
            quantity: quantity.max(1),
            notes,
            selected_add_ons,
        }
    }

    /// The snapshotted catalog item.
    pub fn item(&self) -> &FoodItem {
        &self.item
    }

    /// Id of the underlying catalog item.
    pub fn item_id(&self) -> &str {
        &self.item.id
    }

    /// Serving count, always >= 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Kitchen notes, if any were given.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Selected add-ons in catalog order.
    pub fn add_ons(&self) -> &[AddOn] {
        &self.selected_add_ons
    }

    /// Price of one serving including add-ons.
    pub fn unit_price(&self) -> f64 {
        let add_on_total: f64 = self.selected_add_ons.iter().map(|a| a.price).sum();
        self.item.price + add_on_total
    }

    /// Price of the whole line.
    pub fn line_total(&self) -> f64 {
        self.unit_price() * self.quantity as f64
    }

    /// Macro contribution of the whole line. Add-ons carry no macro figures.
    pub fn macro_contribution(&self) -> MacroProfile {
        self.item.macros.scaled(self.quantity)
    }
}
