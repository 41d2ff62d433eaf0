use crate::environment::zone::ZoneSet;
use crate::frame::{BodyFrame, ObserverState};

/// Thermals never exist above this altitude; clearly inapplicable observers
/// are rejected before any per-zone work.
pub const GLOBAL_CEILING_M: f64 = 30_000.0;

/// Cheap lat/lon pre-filter margin (degrees, either axis).
///
/// Not geodesically derived from zone radius and latitude-independent, so it
/// under-filters near the poles. It only has to be conservative: for every
/// valid zone radius the margin exceeds the zone's angular extent, so no zone
/// the precise distance test would match is ever skipped.
pub const BOUNDING_MARGIN_DEG: f64 = 4.0;

/// Finds the zone currently containing the observer, if any.
///
/// Hot path, run once per tick over every zone. Filters are ordered cheapest
/// first and short-circuit: atmosphere/global-ceiling gate, per-zone ceiling
/// compare, lat/lon bounding margin, and only then the squared-distance test
/// against the zone center converted at the observer's altitude. The first
/// zone in insertion order that passes wins; overlapping zones have no
/// tie-break. Pure function of its inputs.
pub fn find_active_zone(
    zones: &ZoneSet,
    observer: &ObserverState,
    frame: &dyn BodyFrame,
) -> Option<usize> {
    if !observer.has_atmosphere || observer.altitude_agl > GLOBAL_CEILING_M {
        return None;
    }

    for (index, zone) in zones.iter().enumerate() {
        if observer.altitude_agl > zone.ceiling_m {
            continue;
        }
        if (observer.latitude_deg - zone.latitude_deg).abs() > BOUNDING_MARGIN_DEG
            || (observer.longitude_deg - zone.longitude_deg).abs() > BOUNDING_MARGIN_DEG
        {
            continue;
        }

        let center =
            frame.world_position(zone.latitude_deg, zone.longitude_deg, observer.altitude_agl);
        let offset = observer.world_position - center;
        if offset.norm_squared() < zone.radius_m * zone.radius_m {
            return Some(index);
        }
    }

    None
}
