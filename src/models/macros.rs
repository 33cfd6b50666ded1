use serde::{Deserialize, Serialize};

/// Calories per gram of protein.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Calories per gram of carbohydrate.
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Calories per gram of fat.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Macro figures for a single serving.
///
/// The stored calorie figure is authoritative; it is not reconciled against
/// the 4/4/9 kcal-per-gram values derivable from the gram fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroProfile {
    /// Profile scaled by a serving quantity.
    pub fn scaled(&self, quantity: u32) -> MacroProfile {
        let q = quantity as f64;
        MacroProfile {
            calories: self.calories * q,
            protein: self.protein * q,
            carbs: self.carbs * q,
            fat: self.fat * q,
        }
    }

    /// Share of total calories contributed by each macro, at 4/4/9 kcal per gram.
    ///
    /// A zero-calorie profile yields all-zero shares.
    pub fn calorie_split(&self) -> MacroSplit {
        if self.calories <= 0.0 {
            return MacroSplit::default();
        }
        MacroSplit {
            protein: self.protein * KCAL_PER_GRAM_PROTEIN / self.calories,
            carbs: self.carbs * KCAL_PER_GRAM_CARBS / self.calories,
            fat: self.fat * KCAL_PER_GRAM_FAT / self.calories,
        }
    }

    /// Basic validation: no negative figures.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0 && self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0
    }
}

/// Per-macro share of total calories. Display figures, not stored state.
#[derive(Debug, Clone, Default)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}
