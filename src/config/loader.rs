use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::environment::{ThermalZone, ZoneSet, DEFAULT_RAMP_UP_ALTITUDE_M};

/// Built-in zone used when configuration yields no valid zones, so the
/// system is never silently inert.
pub const FALLBACK_LATITUDE_DEG: f64 = 0.0;
pub const FALLBACK_LONGITUDE_DEG: f64 = -74.0;
pub const FALLBACK_RADIUS_M: f64 = 2500.0;
pub const FALLBACK_CEILING_M: f64 = 4000.0;
pub const FALLBACK_INTENSITY_MPS: f64 = 10.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// One thermal-zone record as authored in configuration.
///
/// Every field is optional and individually lenient: a missing or
/// unparseable value falls back to the built-in default for that field
/// instead of discarding the record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawZoneRecord {
    #[serde(deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub radius_m: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub ceiling_m: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub intensity_mps: Option<f64>,
}

/// Accepts numbers or numeric strings; anything else becomes `None` so the
/// field-level default applies.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok())))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThermalSettings {
    pub debug_mode: bool,
    pub ramp_up_altitude_m: f64,
}

impl Default for ThermalSettings {
    fn default() -> Self {
        Self {
            debug_mode: false,
            ramp_up_altitude_m: DEFAULT_RAMP_UP_ALTITUDE_M,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawThermalConfig {
    zones: Vec<RawZoneRecord>,
    settings: Option<ThermalSettings>,
}

/// Loaded configuration: the validated zone set plus global settings.
#[derive(Debug)]
pub struct ThermalConfig {
    pub zones: ZoneSet,
    pub settings: ThermalSettings,
}

impl ThermalConfig {
    /// Builds the zone set from raw records.
    ///
    /// Records that fail geometric validation are skipped with a warning;
    /// nothing here hard-fails. Zero surviving zones yields exactly the one
    /// documented fallback zone.
    pub fn from_records(records: &[RawZoneRecord], settings: ThermalSettings) -> Self {
        let mut zones = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let attempt = ThermalZone::new(
                record.latitude.unwrap_or(FALLBACK_LATITUDE_DEG),
                record.longitude.unwrap_or(FALLBACK_LONGITUDE_DEG),
                record.radius_m.unwrap_or(FALLBACK_RADIUS_M),
                record.ceiling_m.unwrap_or(FALLBACK_CEILING_M),
                record.intensity_mps.unwrap_or(FALLBACK_INTENSITY_MPS),
            );
            match attempt {
                Ok(zone) => zones.push(zone),
                Err(err) => warn!("skipping thermal zone {index}: {err}"),
            }
        }

        if zones.is_empty() {
            info!("no valid thermal zones configured, using the built-in default zone");
            zones.push(fallback_zone());
        }

        Self {
            zones: ZoneSet::new(zones),
            settings,
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let raw: RawThermalConfig = serde_yaml::from_str(yaml)?;
        Ok(Self::from_records(
            &raw.zones,
            raw.settings.unwrap_or_default(),
        ))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }
}

fn fallback_zone() -> ThermalZone {
    ThermalZone::new(
        FALLBACK_LATITUDE_DEG,
        FALLBACK_LONGITUDE_DEG,
        FALLBACK_RADIUS_M,
        FALLBACK_CEILING_M,
        FALLBACK_INTENSITY_MPS,
    )
    .expect("fallback zone constants are valid")
}
