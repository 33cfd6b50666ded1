use crate::models::{MacroProfile, UserTarget};
use crate::nutrition::aggregator::{progress, remaining};

/// One tracked dimension measured against its goal.
#[derive(Debug, Clone)]
pub struct GoalProgress {
    pub label: &'static str,
    pub unit: &'static str,
    pub consumed: f64,
    pub goal: f64,
    pub ratio: f64,
    pub remaining: f64,
}

impl GoalProgress {
    fn new(label: &'static str, unit: &'static str, consumed: f64, goal: f64) -> Self {
        Self {
            label,
            unit,
            consumed,
            goal,
            ratio: progress(consumed, goal),
            remaining: remaining(consumed, goal),
        }
    }

    /// Whether the goal has been reached.
    pub fn is_met(&self) -> bool {
        self.consumed >= self.goal
    }
}

/// Cart totals measured against the user's goals, one row per dimension.
///
/// Protein leads the dashboard; the rest follow in display order.
#[derive(Debug, Clone)]
pub struct NutritionReport {
    pub totals: MacroProfile,
    pub protein: GoalProgress,
    pub calories: GoalProgress,
    pub carbs: GoalProgress,
    pub fat: GoalProgress,
}

impl NutritionReport {
    pub fn new(totals: MacroProfile, targets: &UserTarget) -> Self {
        Self {
            protein: GoalProgress::new("Protein", "g", totals.protein, targets.protein_goal),
            calories: GoalProgress::new(
                "Calories",
                "kcal",
                totals.calories,
                targets.calories_goal,
            ),
            carbs: GoalProgress::new("Carbs", "g", totals.carbs, targets.carbs_goal),
            fat: GoalProgress::new("Fats", "g", totals.fat, targets.fat_goal),
            totals,
        }
    }

    /// Rows in dashboard order.
    pub fn goals(&self) -> [&GoalProgress; 4] {
        [&self.protein, &self.calories, &self.carbs, &self.fat]
    }
}
