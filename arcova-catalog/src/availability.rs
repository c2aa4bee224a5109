use arcova_shared::{RoomType, RoomTypeStatus};

/// Room types with this many rooms or fewer are flagged as low inventory.
/// Display-only signal: it never blocks a booking.
pub const DEFAULT_SCARCITY_THRESHOLD: i32 = 3;

/// A room type is selectable iff it is active and has rooms at all.
pub fn is_available(room_type: &RoomType) -> bool {
    room_type.status == RoomTypeStatus::Active && room_type.total_rooms > 0
}

pub fn available_room_types(room_types: &[RoomType]) -> Vec<RoomType> {
    room_types
        .iter()
        .filter(|rt| is_available(rt))
        .cloned()
        .collect()
}

/// Lowest nightly rate among the available room types.
pub fn effective_price_cents(available: &[RoomType]) -> Option<i64> {
    available.iter().map(|rt| rt.base_price_cents).min()
}

/// Total rooms across the available room types.
pub fn available_rooms(available: &[RoomType]) -> i32 {
    available.iter().map(|rt| rt.total_rooms).sum()
}

pub fn is_scarce(room_type: &RoomType, threshold: i32) -> bool {
    room_type.total_rooms <= threshold
}
