use serde::{Deserialize, Serialize};

/// A delivery time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeSlot {
    Lunch,
    Dinner,
    NextDayBreakfast,
}

impl TimeSlot {
    /// All slots in schedule order.
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Lunch, TimeSlot::Dinner, TimeSlot::NextDayBreakfast];
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TimeSlot::Lunch => "Lunch",
            TimeSlot::Dinner => "Dinner",
            TimeSlot::NextDayBreakfast => "Next Day Breakfast",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "LUNCH" => Ok(TimeSlot::Lunch),
            "DINNER" => Ok(TimeSlot::Dinner),
            "NEXT_DAY_BREAKFAST" | "BREAKFAST" => Ok(TimeSlot::NextDayBreakfast),
            other => Err(format!("unknown time slot: {}", other)),
        }
    }
}

/// A schedule entry: when ordering for a slot closes and when it delivers.
///
/// `cutoff` and `delivery` are display strings ("9:00 AM"); `cutoff_hour` is
/// the 24h figure the availability logic compares against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverySlot {
    pub id: TimeSlot,

    pub label: String,

    pub cutoff: String,

    pub delivery: String,

    #[serde(rename = "cutoffHour")]
    pub cutoff_hour: u32,
}
