use nalgebra::Vector3;

/// Identifier of a celestial body in the host simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// Identifier of the tracked observer (vessel/vehicle) in the host simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

/// Coordinate oracle supplied by the host simulation.
///
/// The engine never performs its own geodesy; every conversion between
/// geographic coordinates and the world frame goes through this trait. The
/// host implements it once and passes it in at construction time.
pub trait BodyFrame {
    /// World-frame position of a geographic coordinate at the given altitude.
    fn world_position(&self, latitude_deg: f64, longitude_deg: f64, altitude_m: f64)
        -> Vector3<f64>;

    /// Altitude above the reference surface of an arbitrary world-frame point.
    fn altitude_of(&self, position: &Vector3<f64>) -> f64;

    /// World-frame center of the reference body.
    fn center(&self) -> Vector3<f64>;

    /// Unit vector pointing from `from` toward the sun.
    fn direction_to_sun(&self, from: &Vector3<f64>) -> Vector3<f64>;
}

/// Local "up" at a world-frame point: away from the body center.
///
/// Falls back to +Z when the point coincides with the body center.
pub fn local_up(frame: &dyn BodyFrame, point: &Vector3<f64>) -> Vector3<f64> {
    let radial = point - frame.center();
    let norm = radial.norm();
    if norm > f64::EPSILON {
        radial / norm
    } else {
        Vector3::z()
    }
}

/// Snapshot of the tracked observer, supplied by the host each tick.
///
/// The engine never owns this; it reads one snapshot per tick and caches the
/// derived [`EvaluationContext`](crate::environment::EvaluationContext).
#[derive(Debug, Clone, Copy)]
pub struct ObserverState {
    pub id: ObserverId,
    pub body: BodyId,
    pub world_position: Vector3<f64>,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Altitude above ground/reference, meters.
    pub altitude_agl: f64,
    /// Whether the observer's body carries an atmosphere at all.
    pub has_atmosphere: bool,
}
