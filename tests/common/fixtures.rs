use std::cell::{Cell, RefCell};
use std::rc::Rc;

use nalgebra::Vector3;
use soarwind::{
    AeroRegistry, BodyFrame, BodyId, IntegrationError, ObserverId, ObserverState, ThermalEngine,
    ThermalSettings, ThermalZone, WindSource, ZoneSet,
};

pub const GLOBE_RADIUS_M: f64 = 600_000.0;

/// Spherical test body centered at the origin with the sun fixed over
/// (lat 0, lon 0).
pub struct TestGlobe {
    pub radius: f64,
    pub sun_direction: Vector3<f64>,
}

impl TestGlobe {
    pub fn new() -> Self {
        Self {
            radius: GLOBE_RADIUS_M,
            sun_direction: Vector3::x(),
        }
    }

    pub fn observer_at(&self, latitude_deg: f64, longitude_deg: f64, altitude_agl: f64) -> ObserverState {
        ObserverState {
            id: ObserverId(1),
            body: BodyId(1),
            world_position: self.world_position(latitude_deg, longitude_deg, altitude_agl),
            latitude_deg,
            longitude_deg,
            altitude_agl,
            has_atmosphere: true,
        }
    }
}

impl BodyFrame for TestGlobe {
    fn world_position(&self, latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Vector3<f64> {
        let lat = latitude_deg.to_radians();
        let lon = longitude_deg.to_radians();
        let r = self.radius + altitude_m;
        Vector3::new(
            r * lat.cos() * lon.cos(),
            r * lat.cos() * lon.sin(),
            r * lat.sin(),
        )
    }

    fn altitude_of(&self, position: &Vector3<f64>) -> f64 {
        position.norm() - self.radius
    }

    fn center(&self) -> Vector3<f64> {
        Vector3::zeros()
    }

    fn direction_to_sun(&self, _from: &Vector3<f64>) -> Vector3<f64> {
        self.sun_direction
    }
}

/// Frame wrapper counting geographic-to-world conversions, for asserting
/// that cheap pre-filters short-circuit before any geometry runs.
pub struct CountingFrame {
    inner: TestGlobe,
    pub conversions: Rc<Cell<usize>>,
}

impl CountingFrame {
    pub fn new() -> Self {
        Self {
            inner: TestGlobe::new(),
            conversions: Rc::new(Cell::new(0)),
        }
    }
}

impl BodyFrame for CountingFrame {
    fn world_position(&self, latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Vector3<f64> {
        self.conversions.set(self.conversions.get() + 1);
        self.inner.world_position(latitude_deg, longitude_deg, altitude_m)
    }

    fn altitude_of(&self, position: &Vector3<f64>) -> f64 {
        self.inner.altitude_of(position)
    }

    fn center(&self) -> Vector3<f64> {
        self.inner.center()
    }

    fn direction_to_sun(&self, from: &Vector3<f64>) -> Vector3<f64> {
        self.inner.direction_to_sun(from)
    }
}

/// Registry fake: a single slot, like the real aerodynamics hook.
#[derive(Default)]
pub struct SlotRegistry {
    pub slot: Option<Rc<dyn WindSource>>,
    pub reject_installs: bool,
}

impl AeroRegistry for SlotRegistry {
    fn take_installed(&mut self) -> Option<Rc<dyn WindSource>> {
        self.slot.take()
    }

    fn install(&mut self, source: Rc<dyn WindSource>) -> Result<(), IntegrationError> {
        if self.reject_installs {
            return Err(IntegrationError::RegistryUnavailable(
                "wind hook not found".into(),
            ));
        }
        self.slot = Some(source);
        Ok(())
    }
}

pub fn single_zone_engine(zone: ThermalZone) -> Rc<RefCell<ThermalEngine>> {
    Rc::new(RefCell::new(ThermalEngine::new(
        ZoneSet::new(vec![zone]),
        ThermalSettings::default(),
        Box::new(TestGlobe::new()),
    )))
}

pub fn reference_zone() -> ThermalZone {
    ThermalZone::new(0.0, 0.0, 1000.0, 4000.0, 10.0).unwrap()
}
