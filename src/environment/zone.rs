use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("Invalid radius: {0} (must be > 0)")]
    InvalidRadius(f64),
    #[error("Invalid ceiling: {0} (must be > 0)")]
    InvalidCeiling(f64),
}

/// A static column of rising air, immutable once loaded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThermalZone {
    /// Geographic center of the zone (degrees).
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Horizontal extent (m).
    pub radius_m: f64,
    /// Maximum altitude at which the zone exists (m).
    pub ceiling_m: f64,
    /// Peak vertical wind speed at the zone center (m/s, positive = up).
    pub intensity_mps: f64,
}

impl ThermalZone {
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        radius_m: f64,
        ceiling_m: f64,
        intensity_mps: f64,
    ) -> Result<Self, ZoneError> {
        if !(radius_m > 0.0) {
            return Err(ZoneError::InvalidRadius(radius_m));
        }
        if !(ceiling_m > 0.0) {
            return Err(ZoneError::InvalidCeiling(ceiling_m));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            radius_m,
            ceiling_m,
            intensity_mps,
        })
    }
}

/// The loaded set of thermal zones.
///
/// Pure data: iteration order is insertion order, zones are never mutated in
/// place. A reload replaces the whole set through
/// [`ThermalEngine::reload`](crate::engine::ThermalEngine::reload).
#[derive(Debug, Clone, Default)]
pub struct ZoneSet {
    zones: Vec<ThermalZone>,
}

impl ZoneSet {
    pub fn new(zones: Vec<ThermalZone>) -> Self {
        Self { zones }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThermalZone> {
        self.zones.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ThermalZone> {
        self.zones.get(index)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_rejects_nonpositive_radius() {
        assert!(matches!(
            ThermalZone::new(0.0, 0.0, 0.0, 4000.0, 10.0),
            Err(ZoneError::InvalidRadius(_))
        ));
        assert!(matches!(
            ThermalZone::new(0.0, 0.0, -100.0, 4000.0, 10.0),
            Err(ZoneError::InvalidRadius(_))
        ));
        assert!(matches!(
            ThermalZone::new(0.0, 0.0, f64::NAN, 4000.0, 10.0),
            Err(ZoneError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_zone_rejects_nonpositive_ceiling() {
        assert!(matches!(
            ThermalZone::new(0.0, 0.0, 2500.0, 0.0, 10.0),
            Err(ZoneError::InvalidCeiling(_))
        ));
    }

    #[test]
    fn test_zone_accepts_negative_intensity() {
        // Sink is a valid authoring choice, only geometry is validated.
        let zone = ThermalZone::new(10.0, -20.0, 1500.0, 3000.0, -4.0).unwrap();
        assert_eq!(zone.intensity_mps, -4.0);
    }

    #[test]
    fn test_zone_set_preserves_insertion_order() {
        let zones = vec![
            ThermalZone::new(0.0, 0.0, 1000.0, 4000.0, 10.0).unwrap(),
            ThermalZone::new(1.0, 1.0, 2000.0, 3000.0, 5.0).unwrap(),
        ];
        let set = ZoneSet::new(zones);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().radius_m, 1000.0);
        assert_eq!(set.get(1).unwrap().radius_m, 2000.0);
    }
}
