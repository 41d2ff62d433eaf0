use crate::frame::{local_up, BodyFrame, ObserverState};

/// Gain applied to the sun-elevation dot product before clamping.
///
/// Greater than 1 so the solar factor saturates before the sun reaches true
/// zenith; a tunable chosen for feel, not derived from physics.
pub const SOLAR_CURVE_SCALE: f64 = 1.3;

/// Default altitude at which the near-ground ramp reaches full strength (m).
pub const DEFAULT_RAMP_UP_ALTITUDE_M: f64 = 250.0;

/// Per-tick evaluation state shared by every wind query in that tick.
///
/// Recomputed once per tick from the tracked observer; the default value is
/// neutral (no zone, zero factors) so queries arriving before the first tick
/// contribute nothing instead of reading uninitialized state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EvaluationContext {
    /// Sun-elevation factor in [0, 1].
    pub solar_factor: f64,
    /// Near-ground suppression factor in [0, 1].
    pub altitude_ramp_factor: f64,
    /// Index into the current `ZoneSet` of the zone containing the observer.
    pub active_zone: Option<usize>,
}

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Sun-elevation factor at the observer's overall position.
///
/// Computed from the whole-vehicle position rather than per query point; for
/// very large vehicles this is a deliberate approximation.
pub fn solar_factor(observer: &ObserverState, frame: &dyn BodyFrame) -> f64 {
    let up = local_up(frame, &observer.world_position);
    let to_sun = frame.direction_to_sun(&observer.world_position);
    clamp01(up.dot(&to_sun) * SOLAR_CURVE_SCALE)
}

/// Near-ground ramp: 0 at the surface, linear up to 1 at `ramp_up_altitude_m`.
pub fn altitude_ramp_factor(altitude_agl: f64, ramp_up_altitude_m: f64) -> f64 {
    if ramp_up_altitude_m <= 0.0 {
        return 1.0;
    }
    clamp01(altitude_agl / ramp_up_altitude_m)
}
