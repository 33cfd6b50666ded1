use crate::models::{DeliverySlot, TimeSlot};

/// Whether ordering for a slot is still open at the given hour.
///
/// Plain same-day comparison: open while `current_hour < cutoff_hour`. The
/// overnight breakfast slot follows the same rule, so its 22:00 cutoff is
/// compared against today's hour like any other.
pub fn is_slot_open(slot: &DeliverySlot, current_hour: u32) -> bool {
    current_hour < slot.cutoff_hour
}

/// Whether a slot can be selected: present in the schedule and open.
pub fn is_slot_selectable(schedule: &[DeliverySlot], id: TimeSlot, current_hour: u32) -> bool {
    schedule
        .iter()
        .find(|slot| slot.id == id)
        .map(|slot| is_slot_open(slot, current_hour))
        .unwrap_or(false)
}

/// Open slots in schedule order.
pub fn open_slots(schedule: &[DeliverySlot], current_hour: u32) -> Vec<&DeliverySlot> {
    schedule
        .iter()
        .filter(|slot| is_slot_open(slot, current_hour))
        .collect()
}

/// First open slot, used to seed a fresh ordering session.
pub fn first_open_slot(schedule: &[DeliverySlot], current_hour: u32) -> Option<TimeSlot> {
    schedule
        .iter()
        .find(|slot| is_slot_open(slot, current_hour))
        .map(|slot| slot.id)
}
