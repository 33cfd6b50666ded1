use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{AddOn, DeliverySlot, FoodItem, TimeSlot};

/// Deduplicate by key while preserving sequence order.
///
/// A repeated key keeps its first position but takes the last definition.
fn dedupe_by_key<T, K, F>(entries: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut deduped: Vec<Option<T>> = Vec::new();

    for entry in entries {
        let k = key(&entry);
        match positions.get(&k) {
            Some(&pos) => deduped[pos] = Some(entry),
            None => {
                positions.insert(k, deduped.len());
                deduped.push(Some(entry));
            }
        }
    }

    deduped.into_iter().flatten().collect()
}

/// The read-only reference data for a session: menu items, add-ons, and the
/// delivery schedule, each deduplicated by id on construction.
///
/// Sequence order is contractual (the menu renders in catalog order), so
/// deduplication keeps first positions.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<FoodItem>,
    add_ons: Vec<AddOn>,
    schedule: Vec<DeliverySlot>,
}

impl Catalog {
    pub fn new(items: Vec<FoodItem>, add_ons: Vec<AddOn>, schedule: Vec<DeliverySlot>) -> Self {
        Self {
            items: dedupe_by_key(items, |i| i.id.clone()),
            add_ons: dedupe_by_key(add_ons, |a| a.id.clone()),
            schedule: dedupe_by_key(schedule, |s| s.id),
        }
    }

    /// Menu items in catalog order.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Add-ons in catalog order.
    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Delivery slots in schedule order.
    pub fn schedule(&self) -> &[DeliverySlot] {
        &self.schedule
    }

    /// Look up a menu item by id.
    pub fn item(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Look up an add-on by id.
    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    /// Look up a schedule entry by slot.
    pub fn slot(&self, id: TimeSlot) -> Option<&DeliverySlot> {
        self.schedule.iter().find(|s| s.id == id)
    }
}
