use crate::resources::{SessionState, SimError};

/// Deltas shorter than this are treated as zero-length ticks.
pub const MIN_DELTA_TIME: f64 = 1e-9;

/// Fold the craft's latest movement into altitude, speed and distance.
pub fn update_flight_stats(state: &mut SessionState, dt: f64) -> Result<(), SimError> {
    let position = state.craft()?.position();
    let stats = &mut state.stats;

    let distance = (position - stats.last_position).norm();
    stats.altitude = position.z;
    stats.cumulative_distance += distance;
    stats.speed = if dt.is_finite() && dt > MIN_DELTA_TIME {
        distance / dt
    } else {
        0.0
    };
    stats.last_position = position;

    Ok(())
}
