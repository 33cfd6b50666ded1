use crate::cart::CartLedger;
use crate::catalog::Catalog;
use crate::menu::{self, CategoryFilter};
use crate::models::{CartLineItem, DeliverySlot, FoodItem, MacroProfile, TimeSlot, UserTarget};
use crate::nutrition::{aggregate_macros, NutritionReport};

/// One user's ordering session: active delivery slot, category filter, the
/// cart, and the nutrition goals.
///
/// All mutation goes through `&mut self` methods; derived views are pure
/// recomputations over current state.
#[derive(Debug, Clone)]
pub struct OrderSession {
    active_slot: TimeSlot,
    category_filter: CategoryFilter,
    ledger: CartLedger,
    targets: UserTarget,
}

impl OrderSession {
    /// Start a session on an open slot with an empty cart and no filter.
    pub fn new(active_slot: TimeSlot, targets: UserTarget) -> Self {
        Self {
            active_slot,
            category_filter: CategoryFilter::All,
            ledger: CartLedger::new(),
            targets,
        }
    }

    /// The slot orders are being composed for.
    pub fn active_slot(&self) -> TimeSlot {
        self.active_slot
    }

    /// The current menu filter.
    pub fn category_filter(&self) -> CategoryFilter {
        self.category_filter
    }

    /// The cart.
    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    /// The session goals.
    pub fn targets(&self) -> &UserTarget {
        &self.targets
    }

    /// Switch the delivery slot.
    ///
    /// Refuses a closed or unknown slot and reports whether the switch
    /// happened. A selected slot that closes mid-session is never migrated
    /// automatically; callers re-check and decide.
    pub fn select_slot(
        &mut self,
        slot: TimeSlot,
        schedule: &[DeliverySlot],
        current_hour: u32,
    ) -> bool {
        if !menu::is_slot_selectable(schedule, slot, current_hour) {
            return false;
        }
        self.active_slot = slot;
        true
    }

    /// Change the menu filter.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
    }

    /// Items visible under the active slot and filter, in catalog order.
    pub fn visible_items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a FoodItem> {
        menu::visible_items(catalog.items(), self.active_slot, self.category_filter)
    }

    /// Append a composed line to the cart.
    pub fn add_line(&mut self, line: CartLineItem) {
        self.ledger.append(line);
    }

    /// Remove every cart line for a catalog item id; returns the count.
    pub fn remove_item(&mut self, item_id: &str) -> usize {
        self.ledger.remove_by_item_id(item_id)
    }

    /// Total servings in the cart (the badge figure).
    pub fn item_count(&self) -> u32 {
        self.ledger.total_item_count()
    }

    /// Cart subtotal.
    pub fn subtotal(&self) -> f64 {
        self.ledger.subtotal()
    }

    /// Aggregated macros for the cart.
    pub fn macro_totals(&self) -> MacroProfile {
        aggregate_macros(&self.ledger)
    }

    /// Cart totals measured against the session goals.
    pub fn nutrition_report(&self) -> NutritionReport {
        NutritionReport::new(self.macro_totals(), &self.targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::compose_line_item;
    use crate::catalog::sample_catalog;
    use crate::models::CategoryType;

    #[test]
    fn test_select_slot_refuses_closed() {
        let catalog = sample_catalog();
        let mut session = OrderSession::new(TimeSlot::Dinner, UserTarget::default());

        // Lunch cuts off at 9; at 11 the switch is refused.
        assert!(!session.select_slot(TimeSlot::Lunch, catalog.schedule(), 11));
        assert_eq!(session.active_slot(), TimeSlot::Dinner);

        assert!(session.select_slot(TimeSlot::NextDayBreakfast, catalog.schedule(), 11));
        assert_eq!(session.active_slot(), TimeSlot::NextDayBreakfast);
    }

    #[test]
    fn test_visible_items_follow_slot_and_filter() {
        let catalog = sample_catalog();
        let mut session = OrderSession::new(TimeSlot::Dinner, UserTarget::default());

        assert_eq!(session.visible_items(&catalog).len(), 5);

        session.set_category_filter(CategoryFilter::Only(CategoryType::CheatMeal));
        let visible = session.visible_items(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Guilt-Free Burger");
    }

    #[test]
    fn test_cart_flow_totals() {
        let catalog = sample_catalog();
        let mut session = OrderSession::new(TimeSlot::Dinner, UserTarget::default());

        let chicken = catalog.item("1").unwrap();
        session.add_line(compose_line_item(chicken, 2, None, &[], catalog.add_ons()));

        assert_eq!(session.item_count(), 2);
        assert!((session.subtotal() - 25.0).abs() < 0.001);
        assert!((session.macro_totals().protein - 138.0).abs() < 0.001);

        let report = session.nutrition_report();
        assert!((report.protein.remaining - 22.0).abs() < 0.001);

        assert_eq!(session.remove_item("1"), 1);
        assert_eq!(session.item_count(), 0);
        assert!(session.subtotal().abs() < 0.001);
    }
}
