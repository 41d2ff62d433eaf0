mod loader;

pub use loader::{
    ConfigError, RawZoneRecord, ThermalConfig, ThermalSettings, FALLBACK_CEILING_M,
    FALLBACK_INTENSITY_MPS, FALLBACK_LATITUDE_DEG, FALLBACK_LONGITUDE_DEG, FALLBACK_RADIUS_M,
};
