/// Capacity of a track, an occupancy limit or a residual: people per trip.
pub type Capacity = u32;

/// Accumulated flow. Wider than `Capacity` so that summing many bottlenecks
/// cannot overflow.
pub type Flow = u64;

/// Effective capacity of a track: the track limit clamped by the occupancy
/// of both buildings it joins.
pub fn bounded_capacity(track: Capacity, from_occupancy: Capacity, to_occupancy: Capacity) -> Capacity {
    track.min(from_occupancy).min(to_occupancy)
}

/// Integer division rounding toward zero; `None` when `divisor` is 0.
pub fn floor_ratio(value: Capacity, divisor: Capacity) -> Option<Capacity> {
    value.checked_div(divisor)
}
