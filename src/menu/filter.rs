use strsim::jaro_winkler;

use crate::models::{CategoryType, FoodItem, TimeSlot};

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
const SEARCH_THRESHOLD: f64 = 0.7;

/// Menu category filter: everything, or one dietary goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(CategoryType),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl CategoryFilter {
    /// Whether an item's category passes this filter.
    pub fn matches(&self, category: CategoryType) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    /// Label for menu headers and pickers.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Goals",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<CategoryType>().map(CategoryFilter::Only)
    }
}

/// Items orderable in the given slot that pass the category filter.
///
/// Catalog order is preserved. An empty result is a normal state, not an
/// error.
pub fn visible_items<'a>(
    items: &'a [FoodItem],
    slot: TimeSlot,
    filter: CategoryFilter,
) -> Vec<&'a FoodItem> {
    items
        .iter()
        .filter(|item| item.is_available_in(slot) && filter.matches(item.category))
        .collect()
}

/// Find items by name with fuzzy matching.
///
/// An exact case-insensitive match wins outright; otherwise candidates above
/// the similarity threshold are returned best first.
pub fn search_items<'a>(items: &[&'a FoodItem], query: &str) -> Vec<&'a FoodItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    if let Some(exact) = items.iter().copied().find(|i| i.name.to_lowercase() == query) {
        return vec![exact];
    }

    let mut candidates: Vec<(&FoodItem, f64)> = items
        .iter()
        .map(|i| (*i, jaro_winkler(&i.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > SEARCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates.into_iter().map(|(item, _)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroProfile;

    fn item(id: &str, name: &str, category: CategoryType, slots: Vec<TimeSlot>) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price: 10.0,
            image: String::new(),
            macros: MacroProfile::default(),
            category,
            stock: 10,
            ingredients: vec![],
            tags: vec![],
            available_slots: slots,
        }
    }

    fn sample_items() -> Vec<FoodItem> {
        vec![
            item(
                "1",
                "Pro-Gain Chicken Rice",
                CategoryType::MuscleGain,
                vec![TimeSlot::Lunch, TimeSlot::Dinner],
            ),
            item(
                "2",
                "Shredder Salad Bowl",
                CategoryType::FatLoss,
                vec![TimeSlot::Lunch, TimeSlot::Dinner],
            ),
            item(
                "3",
                "Guilt-Free Burger",
                CategoryType::CheatMeal,
                vec![TimeSlot::Dinner],
            ),
            item(
                "4",
                "Sunrise Egg Toast",
                CategoryType::MuscleGain,
                vec![TimeSlot::NextDayBreakfast],
            ),
        ]
    }

    #[test]
    fn test_visible_items_slot_and_category() {
        let items = sample_items();

        let dinner_all = visible_items(&items, TimeSlot::Dinner, CategoryFilter::All);
        let ids: Vec<&str> = dinner_all.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        let dinner_cheat = visible_items(
            &items,
            TimeSlot::Dinner,
            CategoryFilter::Only(CategoryType::CheatMeal),
        );
        assert_eq!(dinner_cheat.len(), 1);
        assert_eq!(dinner_cheat[0].name, "Guilt-Free Burger");
    }

    #[test]
    fn test_visible_items_empty_is_normal() {
        let items = sample_items();
        let none = visible_items(
            &items,
            TimeSlot::NextDayBreakfast,
            CategoryFilter::Only(CategoryType::FatLoss),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_search_exact_match_wins() {
        let items = sample_items();
        let refs: Vec<&FoodItem> = items.iter().collect();

        let found = search_items(&refs, "guilt-free burger");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");
    }

    #[test]
    fn test_search_fuzzy_match() {
        let items = sample_items();
        let refs: Vec<&FoodItem> = items.iter().collect();

        let found = search_items(&refs, "chiken rice");
        assert!(!found.is_empty());
        assert_eq!(found[0].id, "1");
    }

    #[test]
    fn test_search_no_match() {
        let items = sample_items();
        let refs: Vec<&FoodItem> = items.iter().collect();

        assert!(search_items(&refs, "xyzzy").is_empty());
        assert!(search_items(&refs, "   ").is_empty());
    }

    #[test]
    fn test_filter_parses() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "fat-loss".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(CategoryType::FatLoss)
        );
        assert!("brunch".parse::<CategoryFilter>().is_err());
    }
}
