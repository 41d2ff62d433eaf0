pub mod config;
pub mod engine;
pub mod environment;
pub mod frame;
pub mod integration;
pub mod providers;
pub mod telemetry;

pub use config::{ConfigError, RawZoneRecord, ThermalConfig, ThermalSettings};
pub use engine::ThermalEngine;
pub use environment::{EvaluationContext, ThermalZone, WindSample, ZoneError, ZoneSet};
pub use frame::{local_up, BodyFrame, BodyId, ObserverId, ObserverState};
pub use integration::{AeroRegistry, IntegrationError, ThermalWindSystem};
pub use providers::{CompositionResult, ThermalWindProvider, WindSource, WindSourceError};
pub use telemetry::StatusReporter;
