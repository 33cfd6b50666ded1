use serde::{Deserialize, Serialize};

/// Daily macro and calorie goals.
///
/// Supplied externally; a user without a stored profile gets the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTarget {
    #[serde(rename = "proteinGoal")]
    pub protein_goal: f64,

    #[serde(rename = "carbsGoal")]
    pub carbs_goal: f64,

    #[serde(rename = "fatGoal")]
    pub fat_goal: f64,

    #[serde(rename = "caloriesGoal")]
    pub calories_goal: f64,
}

impl Default for UserTarget {
    fn default() -> Self {
        Self {
            protein_goal: 160.0,
            carbs_goal: 200.0,
            fat_goal: 60.0,
            calories_goal: 2200.0,
        }
    }
}

impl UserTarget {
    /// Basic validation: every goal must be positive.
    pub fn is_valid(&self) -> bool {
        self.protein_goal > 0.0
            && self.carbs_goal > 0.0
            && self.fat_goal > 0.0
            && self.calories_goal > 0.0
    }
}
