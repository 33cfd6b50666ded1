use crate::cart::CartLedger;
use crate::models::MacroProfile;

/// Sum macro contributions across the cart.
///
/// Each line contributes its item macros times quantity. Add-ons carry no
/// macro figures, so they never enter the totals. An empty cart yields the
/// zero profile.
pub fn aggregate_macros(ledger: &CartLedger) -> MacroProfile {
    let mut totals = MacroProfile::default();
    for line in ledger.lines() {
        let contribution = line.macro_contribution();
        totals.calories += contribution.calories;
        totals.protein += contribution.protein;
        totals.carbs += contribution.carbs;
        totals.fat += contribution.fat;
    }
    totals
}

/// Progress toward a goal as a ratio clamped to [0, 1].
///
/// Goals are validated positive at the loading boundary.
pub fn progress(current: f64, goal: f64) -> f64 {
    (current / goal).min(1.0)
}

/// Amount still needed to reach a goal, floored at 0.
pub fn remaining(current: f64, goal: f64) -> f64 {
    (goal - current).max(0.0)
}
