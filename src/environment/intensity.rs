use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::environment::zone::ThermalZone;
use crate::frame::{local_up, BodyFrame};

/// Samples below this magnitude are not worth surfacing in telemetry.
pub const OBSERVABLE_SPEED_MPS: f64 = 0.01;

/// One evaluation of the lift field at a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSample {
    /// Signed vertical wind speed (m/s, positive = up).
    pub speed: f64,
    /// Raised-cosine falloff in [0, 1]: 1 at the zone center, 0 at the edge.
    pub radial_factor: f64,
    /// Local "up" unit vector at the query point.
    pub direction: Vector3<f64>,
}

impl WindSample {
    pub fn zero() -> Self {
        Self {
            speed: 0.0,
            radial_factor: 0.0,
            direction: Vector3::zeros(),
        }
    }

    /// Wind velocity contributed by this sample.
    pub fn velocity(&self) -> Vector3<f64> {
        self.direction * self.speed
    }

    pub fn is_observable(&self) -> bool {
        self.speed.abs() > OBSERVABLE_SPEED_MPS
    }
}

/// Evaluates a zone's lift at an arbitrary query point.
///
/// The zone center is recomputed at the query point's own altitude on every
/// call: different parts of an extended vehicle sit at different altitudes,
/// so the center cannot be cached per tick. The radial falloff is a raised
/// cosine, `0.5 * (1 + cos(pi * dist / radius))`: 1 at the center, exactly 0
/// at the boundary, with zero slope at both ends so crossing the edge never
/// steps the wind. Outside the radius the sample is zero.
///
/// Pure function: the caller decides what to do with the returned sample
/// (telemetry keeps its own "last observable" copy).
pub fn sample_lift(
    zone: &ThermalZone,
    query_point: &Vector3<f64>,
    solar_factor: f64,
    altitude_ramp_factor: f64,
    frame: &dyn BodyFrame,
) -> WindSample {
    let altitude = frame.altitude_of(query_point);
    let center = frame.world_position(zone.latitude_deg, zone.longitude_deg, altitude);
    let dist = (query_point - center).norm();
    if dist >= zone.radius_m {
        return WindSample::zero();
    }

    let radial_factor = 0.5 * (1.0 + (PI * dist / zone.radius_m).cos());
    let speed = zone.intensity_mps * solar_factor * altitude_ramp_factor * radial_factor;

    WindSample {
        speed,
        radial_factor,
        direction: local_up(frame, query_point),
    }
}
