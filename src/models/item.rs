use serde::{Deserialize, Serialize};

use crate::models::macros::MacroProfile;
use crate::models::slot::TimeSlot;

/// Stock level below which an item is flagged as running out.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Dietary goal a menu item is marketed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryType {
    MuscleGain,
    FatLoss,
    PreWorkout,
    PostWorkout,
    CheatMeal,
    Drinks,
    Fruits,
}

impl CategoryType {
    /// All categories in display order.
    pub const ALL: [CategoryType; 7] = [
        CategoryType::MuscleGain,
        CategoryType::FatLoss,
        CategoryType::PreWorkout,
        CategoryType::PostWorkout,
        CategoryType::CheatMeal,
        CategoryType::Drinks,
        CategoryType::Fruits,
    ];

    /// Menu label. Drinks are marketed as supplements.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryType::MuscleGain => "Muscle Gain",
            CategoryType::FatLoss => "Fat Loss",
            CategoryType::PreWorkout => "Pre-Workout",
            CategoryType::PostWorkout => "Post-Workout",
            CategoryType::CheatMeal => "Cheat Meal",
            CategoryType::Drinks => "Supplements",
            CategoryType::Fruits => "Fruits",
        }
    }
}

impl std::fmt::Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for CategoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "MUSCLE_GAIN" => Ok(CategoryType::MuscleGain),
            "FAT_LOSS" => Ok(CategoryType::FatLoss),
            "PRE_WORKOUT" => Ok(CategoryType::PreWorkout),
            "POST_WORKOUT" => Ok(CategoryType::PostWorkout),
            "CHEAT_MEAL" => Ok(CategoryType::CheatMeal),
            "DRINKS" | "SUPPLEMENTS" => Ok(CategoryType::Drinks),
            "FRUITS" => Ok(CategoryType::Fruits),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// A named ingredient with a display amount ("200g", "2 pcs").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub amount: String,
}

/// A priced modifier attachable to any cart line.
///
/// Add-ons carry no macro figures; they affect price only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// A catalog menu item. Immutable once loaded.
///
/// `stock` is advisory (it drives the low-stock callout) and is never
/// decremented by cart operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,

    pub name: String,

    pub description: String,

    pub price: f64,

    pub image: String,

    pub macros: MacroProfile,

    pub category: CategoryType,

    #[serde(default)]
    pub stock: u32,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(rename = "availableSlots")]
    pub available_slots: Vec<TimeSlot>,
}

impl FoodItem {
    /// Whether the item can be ordered for the given slot.
    pub fn is_available_in(&self, slot: TimeSlot) -> bool {
        self.available_slots.contains(&slot)
    }

    /// Whether the menu should flag this item as running out.
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// Basic validation: non-negative price and macro figures.
    pub fn is_valid(&self) -> bool {
        self.price >= 0.0 && self.macros.is_valid()
    }
}
