pub mod aggregator;
pub mod report;

pub use aggregator::{aggregate_macros, progress, remaining};
pub use report::{GoalProgress, NutritionReport};
