pub mod ambient;
pub mod intensity;
pub mod query;
pub mod zone;

pub use ambient::{
    altitude_ramp_factor, solar_factor, EvaluationContext, DEFAULT_RAMP_UP_ALTITUDE_M,
    SOLAR_CURVE_SCALE,
};
pub use intensity::{sample_lift, WindSample, OBSERVABLE_SPEED_MPS};
pub use query::{find_active_zone, BOUNDING_MARGIN_DEG, GLOBAL_CEILING_M};
pub use zone::{ThermalZone, ZoneError, ZoneSet};
